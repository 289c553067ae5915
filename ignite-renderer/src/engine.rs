//! Tera rendering engine: [`TemplateEngine`] and [`ScriptGenerator`].
//!
//! # Template mapping
//!
//! | Platform | Template                     | Script extension |
//! |----------|------------------------------|------------------|
//! | Windows  | `windows/launcher.bat.tera`  | `bat`            |
//! | macOS    | `macos/launcher.command.tera`| `command`        |
//! | Linux    | `linux/launcher.sh.tera`     | `sh`             |
//!
//! Windows launchers that open URLs also get `windows/browser.bat.tera`,
//! rendered into a separate script the main launcher calls.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::Tera;
use tracing::debug;

use ignite_core::{LauncherConfig, LauncherName, LauncherScript, Platform};

use crate::context::ScriptContext;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates
// ---------------------------------------------------------------------------

pub const WINDOWS_BROWSER_TEMPLATE: &str = "windows/browser.bat.tera";

const TPLS: &[(&str, &str)] = &[
    (
        "shared/_posix_browser.tera",
        include_str!("templates/shared/_posix_browser.tera"),
    ),
    (
        "windows/launcher.bat.tera",
        include_str!("templates/windows/launcher.bat.tera"),
    ),
    (
        WINDOWS_BROWSER_TEMPLATE,
        include_str!("templates/windows/browser.bat.tera"),
    ),
    (
        "macos/launcher.command.tera",
        include_str!("templates/macos/launcher.command.tera"),
    ),
    (
        "linux/launcher.sh.tera",
        include_str!("templates/linux/launcher.sh.tera"),
    ),
];

/// Main launcher template for `platform`.
pub fn template_name(platform: Platform) -> &'static str {
    match platform {
        Platform::Windows => "windows/launcher.bat.tera",
        Platform::MacOs => "macos/launcher.command.tera",
        Platform::Linux => "linux/launcher.sh.tera",
    }
}

// ---------------------------------------------------------------------------
// Template loading
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io {
        path: path.into(),
        source,
    }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/").to_lowercase()
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    for entry in std::fs::read_dir(dir).map_err(|e| io_err(dir, e))? {
        let path = entry.map_err(|e| io_err(dir, e))?.path();
        if path.is_dir() {
            collect_template_files(&path, out)?;
        } else if path.extension().and_then(|s| s.to_str()) == Some("tera") {
            out.push(path);
        }
    }
    Ok(())
}

/// `.tera` files under `dir`, keyed by their normalised relative path.
fn load_user_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;

    let mut templates = Vec::with_capacity(files.len());
    for path in files {
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let body = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        debug!(template = %name, source = %path.display(), "user template override");
        templates.push((name, body));
    }
    Ok(templates)
}

fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = TPLS
        .iter()
        .map(|(name, body)| (normalize_template_name(Path::new(name)), (*body).to_string()))
        .collect();
    if let Some(dir) = user_template_dir {
        templates.extend(load_user_templates(dir)?);
    }

    let mut tera = Tera::default();
    tera.add_raw_templates(templates.into_iter().collect::<Vec<_>>())?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Embedded launcher templates plus optional overrides from a directory.
///
/// An override replaces the embedded template with the same relative name,
/// e.g. `<dir>/linux/launcher.sh.tera`.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        Ok(TemplateEngine {
            tera: build_tera(user_template_dir)?,
        })
    }

    /// Render one named template.
    pub fn render(&self, template: &str, ctx: &ScriptContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        Ok(self.tera.render(template, &tera_ctx)?)
    }
}

// ---------------------------------------------------------------------------
// ScriptGenerator
// ---------------------------------------------------------------------------

/// Turns a [`LauncherConfig`] into launcher script text for a platform.
///
/// Generation is pure: nothing is written to disk. On Windows the auxiliary
/// browser script is returned in [`LauncherScript::browser_script`] and the
/// main script refers to it by its absolute path under `config_dir`.
pub struct ScriptGenerator {
    engine: TemplateEngine,
}

impl ScriptGenerator {
    /// Embedded templates only.
    pub fn new() -> Result<Self, RenderError> {
        Ok(ScriptGenerator {
            engine: TemplateEngine::new(None)?,
        })
    }

    /// Embedded templates, overridden by any `.tera` files under `dir`.
    pub fn with_overrides(dir: &Path) -> Result<Self, RenderError> {
        Ok(ScriptGenerator {
            engine: TemplateEngine::new(Some(dir))?,
        })
    }

    pub fn generate(
        &self,
        config: &LauncherConfig,
        project_path: &Path,
        name: &LauncherName,
        platform: Platform,
        config_dir: &Path,
    ) -> Result<LauncherScript, RenderError> {
        let aux_path = config_dir.join(name.browser_script_file_name());
        let aux = (platform == Platform::Windows).then_some(aux_path.as_path());
        let ctx = ScriptContext::new(config, project_path, name, aux);

        let content = terminate(self.engine.render(template_name(platform), &ctx)?);
        let browser_script = match ctx.browser_script {
            Some(_) => Some(terminate(self.engine.render(WINDOWS_BROWSER_TEMPLATE, &ctx)?)),
            None => None,
        };
        debug!(
            launcher = %name,
            %platform,
            bytes = content.len(),
            aux = browser_script.is_some(),
            "generated launcher script"
        );

        Ok(LauncherScript {
            content,
            extension: platform.script_extension().to_string(),
            browser_script,
        })
    }
}

/// Scripts always end with exactly one newline.
fn terminate(mut script: String) -> String {
    let trimmed = script.trim_end_matches('\n').len();
    script.truncate(trimmed);
    script.push('\n');
    script
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(config: &LauncherConfig, platform: Platform) -> LauncherScript {
        ScriptGenerator::new()
            .expect("embedded templates parse")
            .generate(
                config,
                Path::new("/code/app"),
                &LauncherName::from("app"),
                platform,
                Path::new("/cfg"),
            )
            .unwrap_or_else(|e| panic!("generate failed for {platform}: {e}"))
    }

    #[test]
    fn generator_new_succeeds() {
        ScriptGenerator::new().expect("embedded templates should parse");
    }

    #[test]
    fn every_platform_renders_with_matching_extension() {
        for platform in Platform::all() {
            let script = generate(&LauncherConfig::default(), *platform);
            assert_eq!(script.extension, platform.script_extension());
            assert!(script.content.contains("/code/app"));
        }
    }

    #[test]
    fn terminate_normalises_trailing_newlines() {
        assert_eq!(terminate("exit".into()), "exit\n");
        assert_eq!(terminate("exit\n\n".into()), "exit\n");
    }

    #[test]
    fn normalize_template_name_uses_forward_slashes() {
        assert_eq!(
            normalize_template_name(Path::new("Linux\\Launcher.sh.tera")),
            "linux/launcher.sh.tera"
        );
    }

    #[test]
    fn windows_browser_step_calls_aux_script() {
        let config = LauncherConfig {
            browser: Some("start chrome".into()),
            browser_urls: vec!["http://localhost:3000".into()],
            ..LauncherConfig::default()
        };
        let script = generate(&config, Platform::Windows);
        let aux = script.browser_script.expect("aux script");
        assert!(aux.contains("start \"\" /B start chrome \"http://localhost:3000\""));
        assert!(script
            .content
            .contains(&Path::new("/cfg").join("ignite-app-browser.bat").display().to_string()));
    }

    #[test]
    fn posix_platforms_never_return_aux_script() {
        let config = LauncherConfig {
            browser: Some("firefox".into()),
            browser_urls: vec!["http://localhost:3000".into()],
            ..LauncherConfig::default()
        };
        assert!(generate(&config, Platform::Linux).browser_script.is_none());
        assert!(generate(&config, Platform::MacOs).browser_script.is_none());
    }
}
