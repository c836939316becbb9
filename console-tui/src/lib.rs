//! BizGrow360 admin console.
//!
//! A terminal front end over the mock platform data in `console-lib`:
//! screens, navigation, toasts and persisted preferences.

pub mod app;
pub mod config;
pub mod error;
pub mod pages;
pub mod paths;
pub mod settings;

pub use app::App;
pub use error::AppError;
