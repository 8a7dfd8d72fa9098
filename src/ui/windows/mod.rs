//! Window contents, each implementing `View`.

pub mod image_view;
pub mod quote_view;
