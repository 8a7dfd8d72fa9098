//! Single-flight background fetch: runs a [`QuoteSource`] on a worker thread
//! and hands the result back to the UI thread.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::error::{AppError, Result};
use crate::network::QuoteSource;

/// At most one fetch is in flight per `QuoteFetcher`.
pub struct QuoteFetcher {
    source: Arc<dyn QuoteSource>,
    pending: Option<Receiver<Result<String>>>,
    repaint: Option<egui::Context>,
}

impl QuoteFetcher {
    pub fn new(source: Arc<dyn QuoteSource>) -> Self {
        Self {
            source,
            pending: None,
            repaint: None,
        }
    }

    /// Ask `ctx` for a repaint whenever a fetch completes, so the result shows
    /// up without waiting for user input.
    pub fn attach(&mut self, ctx: &egui::Context) {
        self.repaint = Some(ctx.clone());
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a fetch. Returns `false` without doing anything while another
    /// fetch is still pending.
    pub fn start(&mut self) -> bool {
        if self.is_pending() {
            log::debug!("quote fetch already in flight, ignoring request");
            return false;
        }

        let (tx, rx) = mpsc::channel();
        let source = Arc::clone(&self.source);
        let repaint = self.repaint.clone();
        thread::spawn(move || {
            let result = source.fetch_quote();
            match &result {
                Ok(quote) => log::info!("quote fetched ({} bytes)", quote.len()),
                Err(e) => log::warn!("quote fetch failed: {e}"),
            }
            // The UI may already be gone.
            let _ = tx.send(result);
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });

        self.pending = Some(rx);
        true
    }

    /// Take the finished result, if any. Never blocks.
    pub fn poll(&mut self) -> Option<Result<String>> {
        let rx = self.pending.as_ref()?;
        match rx.try_recv() {
            Ok(result) => {
                self.pending = None;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.pending = None;
                Some(Err(AppError::FetchAborted))
            }
        }
    }

    /// Block until the pending fetch finishes or `timeout` elapses.
    #[cfg(test)]
    pub fn wait(&mut self, timeout: std::time::Duration) -> Option<Result<String>> {
        let rx = self.pending.as_ref()?;
        match rx.recv_timeout(timeout) {
            Ok(result) => {
                self.pending = None;
                Some(result)
            }
            Err(mpsc::RecvTimeoutError::Timeout) => None,
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                self.pending = None;
                Some(Err(AppError::FetchAborted))
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod stubs {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Returns a fixed quote.
    pub struct FixedQuote(pub &'static str);

    impl QuoteSource for FixedQuote {
        fn fetch_quote(&self) -> Result<String> {
            Ok(self.0.to_owned())
        }
    }

    /// Always fails with a real `reqwest` error, without touching the network.
    pub struct FailingQuote;

    impl QuoteSource for FailingQuote {
        fn fetch_quote(&self) -> Result<String> {
            Err(reqwest::blocking::get("not a url").unwrap_err().into())
        }
    }

    /// Sleeps before answering and records how many calls overlap.
    #[derive(Default)]
    pub struct SlowQuote {
        pub calls: AtomicUsize,
        pub active: AtomicUsize,
        pub max_active: AtomicUsize,
    }

    impl QuoteSource for SlowQuote {
        fn fetch_quote(&self) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let now = self.active.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_active.fetch_max(now, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(150));
            self.active.fetch_sub(1, Ordering::SeqCst);
            Ok("slow quote".to_owned())
        }
    }

    /// Panics inside the worker, dropping the sender.
    pub struct PanickingQuote;

    impl QuoteSource for PanickingQuote {
        fn fetch_quote(&self) -> Result<String> {
            panic!("source blew up");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::stubs::*;
    use super::*;
    use std::sync::atomic::Ordering;
    use std::time::Duration;

    const WAIT: Duration = Duration::from_secs(5);

    #[test]
    fn delivers_the_fetched_quote() {
        let mut fetcher = QuoteFetcher::new(Arc::new(FixedQuote("Test quote")));
        assert!(fetcher.poll().is_none());

        assert!(fetcher.start());
        assert_eq!(fetcher.wait(WAIT).unwrap().unwrap(), "Test quote");
        assert!(!fetcher.is_pending());
    }

    #[test]
    fn second_start_while_pending_is_ignored() {
        let source = Arc::new(SlowQuote::default());
        let mut fetcher = QuoteFetcher::new(source.clone());

        assert!(fetcher.start());
        assert!(!fetcher.start());
        assert!(fetcher.is_pending());

        assert_eq!(fetcher.wait(WAIT).unwrap().unwrap(), "slow quote");
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(source.max_active.load(Ordering::SeqCst), 1);

        assert!(fetcher.start());
        fetcher.wait(WAIT).unwrap().unwrap();
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn failure_is_reported_not_raised() {
        let mut fetcher = QuoteFetcher::new(Arc::new(FailingQuote));
        fetcher.start();
        assert!(matches!(fetcher.wait(WAIT), Some(Err(AppError::Network(_)))));
    }

    #[test]
    fn dead_worker_is_reported_as_aborted() {
        let mut fetcher = QuoteFetcher::new(Arc::new(PanickingQuote));
        fetcher.start();
        assert!(matches!(fetcher.wait(WAIT), Some(Err(AppError::FetchAborted))));
        assert!(fetcher.start());
    }
}
