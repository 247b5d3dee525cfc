pub mod app;
pub mod config;
pub mod data;
pub mod lesson;
pub mod markup;
pub mod model;
pub mod progression;
pub mod quiz;
pub mod ui;
pub mod view_models;

pub use app::FinLearnApp;
