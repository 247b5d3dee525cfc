// src/config.rs

use eframe::egui;

/// Ajustes de arranque de la ventana. No se leen de disco.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub initial_size: [f32; 2],
    pub min_size: [f32; 2],
    pub dark_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "FinLearn".to_owned(),
            initial_size: [1100.0, 760.0],
            min_size: [640.0, 480.0],
            dark_mode: true,
        }
    }
}

impl AppConfig {
    pub fn visuals(&self) -> egui::Visuals {
        if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title.clone())
                .with_inner_size(self.initial_size)
                .with_min_inner_size(self.min_size),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_dark_and_titled() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.title, "FinLearn");
        assert!(cfg.dark_mode);
        assert!(cfg.visuals().dark_mode);
        assert!(cfg.min_size[0] <= cfg.initial_size[0]);
    }

    #[test]
    fn light_mode_visuals() {
        let cfg = AppConfig { dark_mode: false, ..AppConfig::default() };
        assert!(!cfg.visuals().dark_mode);
    }
}
