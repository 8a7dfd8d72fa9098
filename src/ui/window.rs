//! The `View` trait and the single top-level `MainWindow`.
//!
//! A window is built once by the application context and then handed to the
//! toolkit, which calls `show` every frame until the user closes it.

use std::sync::Arc;

use crate::network::QuoteSource;
use crate::ui::windows::{image_view::ImageView, quote_view::QuoteView};

/// Trait implemented by every window content.
pub trait View {
    /// Called once the toolkit context exists, before the first frame.
    fn attach(&mut self, _ctx: &egui::Context) {}

    /// Draw the contents. Called every frame.
    fn show(&mut self, ui: &mut egui::Ui);
}

pub enum Content {
    Quote(QuoteView),
    Image(ImageView),
    Empty,
}

pub struct MainWindow {
    title: String,
    inner_size: Option<[f32; 2]>,
    position: Option<[f32; 2]>,
    content: Content,
}

impl MainWindow {
    pub fn quote(title: impl Into<String>, source: Arc<dyn QuoteSource>) -> Self {
        Self {
            title: title.into(),
            inner_size: Some([400.0, 200.0]),
            position: None,
            content: Content::Quote(QuoteView::new(source)),
        }
    }

    pub fn image(title: impl Into<String>, view: ImageView) -> Self {
        Self {
            title: title.into(),
            inner_size: None,
            position: None,
            content: Content::Image(view),
        }
    }

    pub fn hello() -> Self {
        Self {
            title: "Hello World!".to_owned(),
            inner_size: Some([250.0, 150.0]),
            position: Some([300.0, 300.0]),
            content: Content::Empty,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn inner_size(&self) -> Option<[f32; 2]> {
        self.inner_size
    }

    pub fn position(&self) -> Option<[f32; 2]> {
        self.position
    }

    #[cfg(test)]
    pub fn content(&self) -> &Content {
        &self.content
    }

    #[cfg(test)]
    pub fn content_mut(&mut self) -> &mut Content {
        &mut self.content
    }

    pub fn attach(&mut self, ctx: &egui::Context) {
        match &mut self.content {
            Content::Quote(view) => view.attach(ctx),
            Content::Image(view) => view.attach(ctx),
            Content::Empty => {}
        }
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| match &mut self.content {
            Content::Quote(view) => view.show(ui),
            Content::Image(view) => view.show(ui),
            Content::Empty => {}
        });
    }
}
