//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub language: String,
    pub languages_dir: String,

    // Content store
    pub content_root: String,
    pub admin_url: String,

    // Rendering
    pub escape_html: bool,
    pub highlight_role: String,
    pub output_dir: String,
    pub filter_group: String,

    #[serde(default)]
    pub containers: ContainerIds,
    #[serde(default)]
    pub article: ArticleView,
    #[serde(default)]
    pub modal: ModalView,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "APD".to_string(),
            language: "fr".to_string(),
            languages_dir: "languages".to_string(),

            content_root: "./data".to_string(),
            admin_url: "/admin/".to_string(),

            escape_html: false,
            highlight_role: "Président".to_string(),
            output_dir: "public".to_string(),
            filter_group: "gallery-filters".to_string(),

            containers: ContainerIds::default(),
            article: ArticleView::default(),
            modal: ModalView::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Whether the content root is served over HTTP rather than read from disk
    pub fn is_remote_root(&self) -> bool {
        self.content_root.starts_with("http://") || self.content_root.starts_with("https://")
    }

    /// Every collection container id, in page order
    pub fn collection_containers(&self) -> Vec<&str> {
        let c = &self.containers;
        vec![
            c.blog.as_str(),
            c.executive.as_str(),
            c.regional.as_str(),
            c.gallery.as_str(),
            c.timeline.as_str(),
        ]
    }
}

/// Ids of the containers that receive collection fragments
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerIds {
    pub blog: String,
    pub executive: String,
    pub regional: String,
    pub gallery: String,
    pub timeline: String,
}

impl Default for ContainerIds {
    fn default() -> Self {
        Self {
            blog: "blog-grid".to_string(),
            executive: "team-executive".to_string(),
            regional: "regional-delegates".to_string(),
            gallery: "gallery-grid".to_string(),
            timeline: "timeline".to_string(),
        }
    }
}

/// Field ids of the single-article page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleView {
    /// Page identifier handed to the navigator
    pub page: String,
    pub title: String,
    pub date: String,
    pub icon: String,
    pub category: String,
    pub body: String,
}

impl Default for ArticleView {
    fn default() -> Self {
        Self {
            page: "article".to_string(),
            title: "article-title".to_string(),
            date: "article-date".to_string(),
            icon: "article-icon".to_string(),
            category: "article-category".to_string(),
            body: "article-body".to_string(),
        }
    }
}

/// Field ids of the gallery photo modal
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalView {
    pub id: String,
    pub title: String,
    pub date: String,
    pub icon: String,
    pub tags: String,
    pub body: String,
}

impl Default for ModalView {
    fn default() -> Self {
        Self {
            id: "gallery-modal".to_string(),
            title: "modal-title".to_string(),
            date: "modal-date".to_string(),
            icon: "modal-icon".to_string(),
            tags: "modal-tags".to_string(),
            body: "modal-body".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.language, "fr");
        assert_eq!(config.content_root, "./data");
        assert_eq!(config.containers.blog, "blog-grid");
        assert_eq!(config.modal.id, "gallery-modal");
        assert!(!config.escape_html);
        assert!(!config.is_remote_root());
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: Mon Association
language: en
content_root: https://example.org/data
escape_html: true
containers:
  blog: news-list
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "Mon Association");
        assert_eq!(config.language, "en");
        assert!(config.is_remote_root());
        assert!(config.escape_html);
        assert_eq!(config.containers.blog, "news-list");
        // Unset nested fields keep their defaults
        assert_eq!(config.containers.timeline, "timeline");
        assert_eq!(config.article.page, "article");
    }

    #[test]
    fn test_collection_containers_order() {
        let config = SiteConfig::default();
        assert_eq!(
            config.collection_containers(),
            vec![
                "blog-grid",
                "team-executive",
                "regional-delegates",
                "gallery-grid",
                "timeline"
            ]
        );
    }
}
