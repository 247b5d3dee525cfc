use finlearn::FinLearnApp;
use finlearn::config::AppConfig;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use tracing_subscriber::EnvFilter;

    // RUST_LOG=finlearn=debug para ver cada paso del quiz
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::default();
    let title = config.title.clone();
    let options = config.native_options();

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(config.visuals());
            let app = FinLearnApp::load(config)
                .inspect_err(|e| log::error!("no se pudo cargar el contenido: {e}"))?;
            Ok(Box::new(app))
        }),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use web_sys::wasm_bindgen::JsCast;

    // Si ya hay logger registrado no pasa nada
    let _ = eframe::WebLogger::init(log::LevelFilter::Info);

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("sin acceso al documento");
            return;
        };
        let canvas = match document
            .get_element_by_id("finlearn_canvas")
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        {
            Some(c) => c,
            None => {
                log::error!("no se encontró el canvas #finlearn_canvas");
                return;
            }
        };

        let config = AppConfig::default();
        let result = eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(move |cc| {
                    cc.egui_ctx.set_visuals(config.visuals());
                    let app = FinLearnApp::load(config)?;
                    Ok(Box::new(app))
                }),
            )
            .await;

        if let Err(e) = result {
            log::error!("fallo al arrancar la app web: {e:?}");
        }
    });
}
