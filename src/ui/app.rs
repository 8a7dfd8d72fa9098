//! eframe glue: the `Toolkit` implementation that owns the event loop and the
//! `eframe::App` that draws the main window.

use crate::context::Toolkit;
use crate::error::{AppError, Result};
use crate::ui::style::StyleSheet;
use crate::ui::window::MainWindow;

// ── Toolkit ────────────────────────────────────────────────────────────────────

/// The production toolkit: a native eframe window.
///
/// Holds the stylesheet until `exec` runs, then parses it once and applies
/// it to the egui context before the first frame. `exec` blocks until the
/// user closes the window; a normal close is reported as exit code 0.
pub struct EguiToolkit {
    app_name: String,
    style_sheet: Option<String>,
}

impl EguiToolkit {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            style_sheet: None,
        }
    }
}

impl Toolkit for EguiToolkit {
    fn set_style_sheet(&mut self, sheet: &str) {
        self.style_sheet = Some(sheet.to_owned());
    }

    fn exec(&mut self, window: MainWindow) -> Result<i32> {
        let mut viewport = egui::ViewportBuilder::default().with_title(window.title());
        if let Some(size) = window.inner_size() {
            viewport = viewport.with_inner_size(size);
        }
        if let Some(position) = window.position() {
            viewport = viewport.with_position(position);
        }
        let options = eframe::NativeOptions {
            viewport,
            ..Default::default()
        };

        let style = self.style_sheet.as_deref().map(StyleSheet::parse);
        log::info!("starting event loop for {:?}", window.title());
        eframe::run_native(
            &self.app_name,
            options,
            Box::new(move |cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                if let Some(style) = &style {
                    style.apply(&cc.egui_ctx);
                }
                Ok(Box::new(App::new(cc, window)))
            }),
        )
        .map_err(|e| AppError::Toolkit(e.to_string()))?;

        log::info!("event loop finished");
        Ok(0)
    }
}

// ── eframe::App ────────────────────────────────────────────────────────────────

/// The top-level application, implementing [`eframe::App`].
///
/// `App` only owns the main window: it attaches the window to the egui
/// context on creation so background fetches can request repaints, and
/// delegates every frame to [`MainWindow::show`].
pub struct App {
    window: MainWindow,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, mut window: MainWindow) -> Self {
        window.attach(&cc.egui_ctx);
        Self { window }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.window.show(ctx);
    }
}
