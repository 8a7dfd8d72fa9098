//! Network layer: the quote source seam plus the background fetch worker.

pub mod client;
pub mod worker;

use crate::error::Result;

/// Anything that can produce one quote per call.
///
/// Implementations block the calling thread; callers that must stay
/// responsive go through [`worker::QuoteFetcher`].
pub trait QuoteSource: Send + Sync {
    fn fetch_quote(&self) -> Result<String>;
}
