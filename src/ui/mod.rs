//! UI layer: eframe toolkit glue, the main window, its views, and the
//! stylesheet reader.

pub mod app;
pub mod style;
pub mod window;
pub mod windows;
