//! Flat template context built from a launcher config.

use std::path::Path;

use serde::Serialize;

use ignite_core::{LauncherConfig, LauncherName};

use crate::error::RenderError;

/// Everything a launcher template can reference.
///
/// Blank optional strings are normalised to `None` so templates only need
/// `{% if command %}`-style checks.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptContext {
    pub name: String,
    /// Project directory, interpolated between double quotes.
    pub path: String,
    pub folder: bool,
    pub command: Option<String>,
    pub editor: Option<String>,
    pub browser: Option<String>,
    pub browser_urls: Vec<String>,
    pub browser_delay: u32,
    /// Browser command present and at least one URL.
    pub open_browser: bool,
    /// Absolute path of the Windows multi-URL opener, when one is generated.
    pub browser_script: Option<String>,
}

impl ScriptContext {
    pub fn new(
        config: &LauncherConfig,
        project_path: &Path,
        name: &LauncherName,
        browser_script: Option<&Path>,
    ) -> Self {
        let command = non_blank(&config.command);
        let editor = non_blank(&config.editor);
        let browser = non_blank(&config.browser);
        let open_browser = browser.is_some() && !config.browser_urls.is_empty();

        ScriptContext {
            name: name.0.clone(),
            path: project_path.display().to_string(),
            folder: config.folder,
            command,
            editor,
            browser,
            browser_urls: config.browser_urls.clone(),
            browser_delay: config.browser_delay,
            open_browser,
            browser_script: browser_script
                .filter(|_| open_browser)
                .map(|p| p.display().to_string()),
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .map(str::to_owned)
}
