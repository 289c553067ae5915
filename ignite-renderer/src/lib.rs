//! # ignite-renderer
//!
//! Tera-based generator for platform launcher scripts.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use ignite_core::{LauncherConfig, LauncherName, Platform};
//! use ignite_renderer::ScriptGenerator;
//!
//! fn preview(project: &Path, config_dir: &Path) {
//!     if let Ok(generator) = ScriptGenerator::new() {
//!         let name = LauncherName::from("demo");
//!         let config = LauncherConfig::default();
//!         if let Ok(script) =
//!             generator.generate(&config, project, &name, Platform::current(), config_dir)
//!         {
//!             println!("ignite-demo.{}\n{}", script.extension, script.content);
//!         }
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::ScriptContext;
pub use engine::{ScriptGenerator, TemplateEngine};
pub use error::RenderError;
