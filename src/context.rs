//! Application context: owns the toolkit, the resource bundle and the single
//! main window for the life of the process.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use once_cell::unsync::OnceCell;

use crate::config::{BuildSettings, WindowKind};
use crate::error::{AppError, Result};
use crate::network::QuoteSource;
use crate::resources::ResourceBundle;
use crate::ui::window::MainWindow;
use crate::ui::windows::image_view::ImageView;

pub const STYLE_SHEET: &str = "styles.qss";
pub const SUCCESS_IMAGE: &str = "success.jpg";

/// The GUI toolkit seen from the application: somewhere to send a stylesheet
/// and something that runs a window until it is closed.
pub trait Toolkit {
    /// Receives the stylesheet text exactly as bundled.
    fn set_style_sheet(&mut self, sheet: &str);

    /// Show `window` and block on the event loop. Returns the loop's exit
    /// code.
    fn exec(&mut self, window: MainWindow) -> Result<i32>;
}

pub struct AppContext<T: Toolkit> {
    toolkit: T,
    bundle: ResourceBundle,
    settings: BuildSettings,
    kind: WindowKind,
    quote_source: Arc<dyn QuoteSource>,
    image: OnceCell<Arc<[u8]>>,
    main_window: OnceCell<MainWindow>,
}

impl<T: Toolkit> AppContext<T> {
    /// Set up the context and hand the bundled stylesheet, if any, to the
    /// toolkit.
    pub fn new(
        mut toolkit: T,
        bundle: ResourceBundle,
        settings: BuildSettings,
        kind: WindowKind,
        quote_source: Arc<dyn QuoteSource>,
    ) -> Result<Self> {
        if bundle.contains(STYLE_SHEET) {
            let sheet = bundle.read_to_string(STYLE_SHEET)?;
            log::info!("applying stylesheet {STYLE_SHEET} ({} bytes)", sheet.len());
            toolkit.set_style_sheet(&sheet);
        }

        Ok(Self {
            toolkit,
            bundle,
            settings,
            kind,
            quote_source,
            image: OnceCell::new(),
            main_window: OnceCell::new(),
        })
    }

    pub fn get_resource(&self, name: &str) -> Result<PathBuf> {
        self.bundle.get_resource(name)
    }

    /// Bytes of the bundled success image, read and validated on first use.
    pub fn image(&self) -> Result<&Arc<[u8]>> {
        self.image.get_or_try_init(|| -> Result<Arc<[u8]>> {
            let path = self.get_resource(SUCCESS_IMAGE)?;
            let bytes = fs::read(&path).map_err(|source| AppError::Io { path, source })?;
            let decoded = image::load_from_memory(&bytes)?;
            log::info!(
                "loaded {SUCCESS_IMAGE}: {}x{}",
                decoded.width(),
                decoded.height()
            );
            Ok(Arc::from(bytes))
        })
    }

    /// The main window, built on first access.
    pub fn main_window(&self) -> Result<&MainWindow> {
        self.main_window.get_or_try_init(|| self.build_window())
    }

    fn build_window(&self) -> Result<MainWindow> {
        let title = self.settings.app_name.as_str();
        Ok(match self.kind {
            WindowKind::Quote => MainWindow::quote(title, Arc::clone(&self.quote_source)),
            WindowKind::Image => {
                let view = ImageView::new(SUCCESS_IMAGE, Arc::clone(self.image()?));
                MainWindow::image(title, view)
            }
            WindowKind::Hello => MainWindow::hello(),
        })
    }

    /// Hand the memoized window to the toolkit and block on its event loop.
    /// Resource errors surface here, before anything is shown.
    pub fn run(mut self) -> Result<i32> {
        self.main_window()?;
        let Some(window) = self.main_window.take() else {
            return Err(AppError::Toolkit("main window was not initialised".to_owned()));
        };
        let code = self.toolkit.exec(window)?;
        log::info!("{} exiting with code {code}", self.settings.app_name);
        Ok(code)
    }

    #[cfg(test)]
    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }
}
