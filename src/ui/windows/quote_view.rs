//! Quote window content: a wrapped label above a centred "Next quote >" button.

use std::sync::Arc;

use crate::error::Result;
use crate::network::QuoteSource;
use crate::network::worker::QuoteFetcher;
use crate::ui::window::View;

pub const BUTTON_LABEL: &str = "Next quote >";

pub struct QuoteView {
    text: String,
    failed: bool,
    fetcher: QuoteFetcher,
}

impl QuoteView {
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self {
            text: String::new(),
            failed: false,
            fetcher: QuoteFetcher::new(source),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the text currently shows a fetch error instead of a quote.
    pub fn has_error(&self) -> bool {
        self.failed
    }

    pub fn is_fetching(&self) -> bool {
        self.fetcher.is_pending()
    }

    /// Button handler. Starts a fetch unless one is already running; returns
    /// whether it did.
    pub fn on_button_click(&mut self) -> bool {
        self.fetcher.start()
    }

    /// Pick up a finished fetch. Returns `true` if the text changed.
    pub fn poll(&mut self) -> bool {
        match self.fetcher.poll() {
            Some(result) => {
                self.set_result(result);
                true
            }
            None => false,
        }
    }

    fn set_result(&mut self, result: Result<String>) {
        match result {
            Ok(quote) => {
                self.text = quote;
                self.failed = false;
            }
            Err(e) => {
                self.text = format!("Could not fetch a quote: {e}");
                self.failed = true;
            }
        }
    }

    /// Wait for the in-flight fetch and apply it.
    #[cfg(test)]
    pub fn settle(&mut self) -> bool {
        match self.fetcher.wait(std::time::Duration::from_secs(5)) {
            Some(result) => {
                self.set_result(result);
                true
            }
            None => false,
        }
    }
}

impl View for QuoteView {
    fn attach(&mut self, ctx: &egui::Context) {
        self.fetcher.attach(ctx);
    }

    fn show(&mut self, ui: &mut egui::Ui) {
        self.poll();

        let mut text = egui::RichText::new(self.text());
        if self.has_error() {
            text = text.color(ui.visuals().error_fg_color);
        }
        ui.add(egui::Label::new(text).wrap());

        ui.vertical_centered(|ui| {
            let fetching = self.is_fetching();
            let button = ui.add_enabled(!fetching, egui::Button::new(BUTTON_LABEL));
            if button.clicked() {
                self.on_button_click();
            }
            if fetching {
                ui.spinner();
            }
        });
    }
}
