// src/markup.rs
//
// Convención mínima de formato del contenido de las lecciones:
// párrafos separados por línea en blanco; `**título**`, `• viñetas`,
// `*nota destacada*` o texto plano.

const BULLET: char = '•';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderKind {
    Subheading,
    List,
    Callout,
    Plain,
}

/// Bloque ya limpio, listo para pintar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Subheading(String),
    List(Vec<String>),
    Callout(String),
    Plain(String),
}

/// Clasifica un párrafo. Total: cualquier cadena cae en exactamente un caso.
pub fn classify(paragraph: &str) -> RenderKind {
    if paragraph.starts_with("**") && paragraph.ends_with("**") {
        RenderKind::Subheading
    } else if paragraph.starts_with(BULLET) {
        RenderKind::List
    } else if paragraph.starts_with('*') && paragraph.ends_with('*') {
        RenderKind::Callout
    } else {
        RenderKind::Plain
    }
}

pub fn to_block(paragraph: &str) -> Block {
    match classify(paragraph) {
        RenderKind::Subheading => Block::Subheading(paragraph.replace("**", "")),
        RenderKind::List => Block::List(
            paragraph
                .lines()
                .filter(|line| !line.trim().is_empty())
                .map(|line| line.replacen("• ", "", 1))
                .collect(),
        ),
        RenderKind::Callout => Block::Callout(paragraph.replace('*', "")),
        RenderKind::Plain => Block::Plain(paragraph.to_string()),
    }
}

/// Divide el contenido en párrafos (`\n\n`) y los convierte en bloques.
pub fn parse_blocks(content: &str) -> Vec<Block> {
    content.split("\n\n").map(to_block).collect()
}
