//! PDF output through a headless Chromium-family browser.

use std::env;
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Browser executables tried, in order, when none is configured.
pub const BROWSER_CANDIDATES: &[&str] = &[
    "chromium",
    "chromium-browser",
    "google-chrome",
    "google-chrome-stable",
];

#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    #[error("No headless browser found (tried {0}); install Chromium or set `browser` in the config")]
    BrowserNotFound(String),
    #[error("IO error while preparing PDF: {0}")]
    Io(#[from] std::io::Error),
    #[error("{browser} exited with {status}: {stderr}")]
    Failed {
        browser: String,
        status: std::process::ExitStatus,
        stderr: String,
    },
}

#[derive(Debug, Clone)]
pub struct PdfRenderer {
    browser: PathBuf,
}

impl PdfRenderer {
    pub fn with_browser(browser: impl Into<PathBuf>) -> Self {
        Self {
            browser: browser.into(),
        }
    }

    /// Uses `configured` when it exists, otherwise the first candidate on
    /// `PATH`.
    pub fn locate(configured: Option<&Path>) -> Result<Self, PdfError> {
        if let Some(path) = configured {
            if path.is_file() {
                return Ok(Self::with_browser(path));
            }
            return Err(PdfError::BrowserNotFound(path.display().to_string()));
        }

        let path_var = env::var_os("PATH").unwrap_or_default();
        find_on_path(&path_var, BROWSER_CANDIDATES)
            .map(Self::with_browser)
            .ok_or_else(|| PdfError::BrowserNotFound(BROWSER_CANDIDATES.join(", ")))
    }

    /// Prints `html` to `output` as an A4 PDF.
    pub fn render(&self, html: &str, output: &Path) -> Result<(), PdfError> {
        let mut page = tempfile::Builder::new()
            .prefix("bilingual-pdf-")
            .suffix(".html")
            .tempfile()?;
        page.write_all(html.as_bytes())?;
        page.flush()?;

        let mut print_to = OsString::from("--print-to-pdf=");
        print_to.push(output.as_os_str());

        log::debug!("{} --headless {}", self.browser.display(), page.path().display());
        let result = Command::new(&self.browser)
            .arg("--headless")
            .arg("--disable-gpu")
            .arg("--no-pdf-header-footer")
            .arg(print_to)
            .arg(format!("file://{}", page.path().display()))
            .output()?;

        if !result.status.success() {
            return Err(PdfError::Failed {
                browser: self.browser.display().to_string(),
                status: result.status,
                stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

/// First of `names` present as a file in any directory of `path_var`.
fn find_on_path(path_var: &OsString, names: &[&str]) -> Option<PathBuf> {
    let dirs: Vec<PathBuf> = env::split_paths(path_var).collect();
    names.iter().find_map(|name| {
        dirs.iter()
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}
