//! Image window content: one bundled picture filling the central panel.

use std::sync::Arc;

use crate::ui::window::View;

pub struct ImageView {
    uri: String,
    bytes: Arc<[u8]>,
}

impl ImageView {
    /// `name` only keys the decoded texture in egui's image cache.
    pub fn new(name: &str, bytes: Arc<[u8]>) -> Self {
        Self {
            uri: format!("bytes://{name}"),
            bytes,
        }
    }

    #[cfg(test)]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl View for ImageView {
    fn show(&mut self, ui: &mut egui::Ui) {
        ui.centered_and_justified(|ui| {
            ui.add(egui::Image::from_bytes(self.uri.clone(), Arc::clone(&self.bytes)).shrink_to_fit());
        });
    }
}
