//! Bundled resource lookup: maps logical names such as `styles.qss` onto files
//! shipped next to the executable (packaged) or under `src/main/resources`
//! (running from source).

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{AppError, Result};

/// Platform-specific resource directory consulted before `base`.
pub const PLATFORM: &str = if cfg!(target_os = "macos") {
    "mac"
} else if cfg!(windows) {
    "windows"
} else {
    "linux"
};

/// Ordered set of resource roots. Earlier roots shadow later ones.
#[derive(Debug, Clone)]
pub struct ResourceBundle {
    roots: Vec<PathBuf>,
}

impl ResourceBundle {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Bundle rooted at `root`, layered as `<root>/<platform>`, `<root>/base`,
    /// then `<root>` itself.
    pub fn layered(root: &Path) -> Self {
        Self::new(vec![root.join(PLATFORM), root.join("base"), root.to_path_buf()])
    }

    /// Locate the resource root for this process.
    ///
    /// An explicit override wins. Otherwise a packaged app keeps its resources
    /// in `resources/` next to the executable, and a source checkout keeps them
    /// in `src/main/resources`.
    pub fn discover(override_root: Option<&Path>) -> Self {
        if let Some(root) = override_root {
            log::debug!("resource root overridden: {}", root.display());
            return Self::layered(root);
        }

        let packaged = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("resources")))
            .filter(|dir| dir.is_dir());
        if let Some(root) = packaged {
            log::debug!("using packaged resources at {}", root.display());
            return Self::layered(&root);
        }

        let source = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("src")
            .join("main")
            .join("resources");
        log::debug!("using source resources at {}", source.display());
        Self::layered(&source)
    }

    /// Resolve a logical resource name to the first existing file among the
    /// roots.
    pub fn get_resource(&self, name: &str) -> Result<PathBuf> {
        let not_found = || AppError::ResourceNotFound {
            name: name.to_owned(),
            searched: self.roots.clone(),
        };

        if !is_plain_relative(name) {
            return Err(not_found());
        }

        for root in &self.roots {
            let candidate = root.join(name);
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
        log::debug!("resource {name} not found in {:?}", self.roots);
        Err(not_found())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get_resource(name).is_ok()
    }

    pub fn read_to_string(&self, name: &str) -> Result<String> {
        let path = self.get_resource(name)?;
        fs::read_to_string(&path).map_err(|source| AppError::Io { path, source })
    }
}

/// Only plain relative names may be looked up; no roots, prefixes or `..`.
fn is_plain_relative(name: &str) -> bool {
    !name.is_empty()
        && Path::new(name)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
