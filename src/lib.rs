//! apd-content: content pipeline of the APD association website
//!
//! Loads the blog, team, gallery and action plan collections from a content
//! store, normalizes and sorts them, and renders display fragments into a
//! host page.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod helpers;
pub mod i18n;
pub mod pipeline;
pub mod render;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use content::{loader::source_for, ContentSource, Loader};
use pipeline::ContentPipeline;
use render::{Navigator, RenderSurface};

/// A site directory: configuration, labels and content store
#[derive(Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Labels and month names
    pub i18n: i18n::I18n,
    /// Base directory
    pub base_dir: PathBuf,
    /// Where the directory surface writes
    pub output_dir: PathBuf,
    source: Arc<dyn ContentSource>,
}

impl Site {
    /// Open a site directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let mut i18n = i18n::I18n::new(&config.language);
        i18n.load_languages(base_dir.join(&config.languages_dir))?;

        let output_dir = base_dir.join(&config.output_dir);
        let source = source_for(&config, &base_dir);
        tracing::debug!("Content store: {}", source.describe());

        Ok(Self {
            config,
            i18n,
            base_dir,
            output_dir,
            source,
        })
    }

    /// Loader over the site's content store
    pub fn loader(&self) -> Loader {
        Loader::new(self.source.clone())
    }

    /// Build a pipeline rendering into `surface`
    pub fn pipeline(
        &self,
        surface: Arc<dyn RenderSurface>,
        navigator: Arc<dyn Navigator>,
    ) -> ContentPipeline {
        ContentPipeline::new(
            self.config.clone(),
            self.i18n.clone(),
            self.source.clone(),
            surface,
            navigator,
        )
    }
}
