//! Rendering surfaces and page navigation
//!
//! The pipeline writes into a host it does not own: a page with identified
//! containers. [`RenderSurface`] is that host seen from the pipeline. Two
//! adapters ship with the crate: [`MemorySurface`] keeps everything in memory
//! and [`DirectorySurface`] writes one HTML file per container.

use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::fragment::{join_html, Fragment};
use crate::config::SiteConfig;

/// Host page the pipeline renders into
pub trait RenderSurface: Send + Sync {
    /// Whether the page has a container with this id
    fn has_container(&self, id: &str) -> bool;

    /// Replace the content of a container with fragments, in order
    fn mount(&self, id: &str, fragments: &[Fragment]);

    /// Replace the content of a single field with markup
    fn set_html(&self, id: &str, html: &str);

    /// Show or hide an element
    fn set_visible(&self, id: &str, visible: bool);

    /// Mark `id` as the active element of a button group
    fn set_active(&self, group: &str, id: &str);

    /// Blocking message to the user
    fn alert(&self, message: &str);
}

/// Page switching, owned by the host
pub trait Navigator: Send + Sync {
    fn show_page(&self, page: &str);
}

/// Every id a site page is expected to carry
pub fn configured_ids(config: &SiteConfig) -> Vec<String> {
    let article = &config.article;
    let modal = &config.modal;
    let mut ids: Vec<String> = config
        .collection_containers()
        .into_iter()
        .map(str::to_string)
        .collect();
    ids.extend(
        [
            &article.title,
            &article.date,
            &article.icon,
            &article.category,
            &article.body,
            &modal.title,
            &modal.date,
            &modal.icon,
            &modal.tags,
            &modal.body,
        ]
        .into_iter()
        .cloned(),
    );
    ids
}

/// Mutable state shared by both adapters
#[derive(Debug, Default)]
struct SurfaceState {
    containers: IndexMap<String, String>,
    visible: IndexMap<String, bool>,
    active: IndexMap<String, String>,
    alerts: Vec<String>,
    page: Option<String>,
}

fn lock(state: &Mutex<SurfaceState>) -> MutexGuard<'_, SurfaceState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// In-memory page, used by tests and embedders
#[derive(Debug, Default)]
pub struct MemorySurface {
    state: Mutex<SurfaceState>,
}

impl MemorySurface {
    /// Create a page with the given container ids, all empty
    pub fn with_containers<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let containers = ids
            .into_iter()
            .map(|id| (id.into(), String::new()))
            .collect();
        Self {
            state: Mutex::new(SurfaceState {
                containers,
                ..Default::default()
            }),
        }
    }

    /// Create a page with every container of the site configuration
    pub fn for_config(config: &SiteConfig) -> Self {
        Self::with_containers(configured_ids(config))
    }

    /// Current markup of a container
    pub fn html(&self, id: &str) -> Option<String> {
        lock(&self.state).containers.get(id).cloned()
    }

    /// Last visibility set on an element
    pub fn is_visible(&self, id: &str) -> Option<bool> {
        lock(&self.state).visible.get(id).copied()
    }

    /// Active element of a button group
    pub fn active(&self, group: &str) -> Option<String> {
        lock(&self.state).active.get(group).cloned()
    }

    pub fn alerts(&self) -> Vec<String> {
        lock(&self.state).alerts.clone()
    }

    pub fn current_page(&self) -> Option<String> {
        lock(&self.state).page.clone()
    }
}

impl RenderSurface for MemorySurface {
    fn has_container(&self, id: &str) -> bool {
        lock(&self.state).containers.contains_key(id)
    }

    fn mount(&self, id: &str, fragments: &[Fragment]) {
        self.set_html(id, &join_html(fragments));
    }

    fn set_html(&self, id: &str, html: &str) {
        if let Some(content) = lock(&self.state).containers.get_mut(id) {
            *content = html.to_string();
        }
    }

    fn set_visible(&self, id: &str, visible: bool) {
        lock(&self.state).visible.insert(id.to_string(), visible);
    }

    fn set_active(&self, group: &str, id: &str) {
        lock(&self.state)
            .active
            .insert(group.to_string(), id.to_string());
    }

    fn alert(&self, message: &str) {
        lock(&self.state).alerts.push(message.to_string());
    }
}

impl Navigator for MemorySurface {
    fn show_page(&self, page: &str) {
        lock(&self.state).page = Some(page.to_string());
    }
}

/// Writes each container to `<dir>/<id>.html` and the UI state to
/// `<dir>/state.json`
#[derive(Debug)]
pub struct DirectorySurface {
    dir: PathBuf,
    state: Mutex<SurfaceState>,
}

impl DirectorySurface {
    pub fn new<P: AsRef<Path>, I, S>(dir: P, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let containers = ids
            .into_iter()
            .map(|id| (id.into(), String::new()))
            .collect();
        Self {
            dir: dir.as_ref().to_path_buf(),
            state: Mutex::new(SurfaceState {
                containers,
                ..Default::default()
            }),
        }
    }

    pub fn for_config<P: AsRef<Path>>(dir: P, config: &SiteConfig) -> Self {
        Self::new(dir, configured_ids(config))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn write(&self, file: &str, contents: &str) {
        let path = self.dir.join(file);
        let result = fs::create_dir_all(&self.dir).and_then(|_| fs::write(&path, contents));
        match result {
            Ok(()) => tracing::debug!("Wrote {:?}", path),
            Err(e) => tracing::error!("Failed to write {:?}: {}", path, e),
        }
    }

    fn save_state(&self, state: &SurfaceState) {
        let ui = serde_json::json!({
            "visible": state.visible,
            "active": state.active,
            "alerts": state.alerts,
            "page": state.page,
        });
        match serde_json::to_string_pretty(&ui) {
            Ok(json) => self.write("state.json", &json),
            Err(e) => tracing::error!("Failed to serialize UI state: {}", e),
        }
    }
}

impl RenderSurface for DirectorySurface {
    fn has_container(&self, id: &str) -> bool {
        lock(&self.state).containers.contains_key(id)
    }

    fn mount(&self, id: &str, fragments: &[Fragment]) {
        self.set_html(id, &join_html(fragments));
    }

    fn set_html(&self, id: &str, html: &str) {
        let known = match lock(&self.state).containers.get_mut(id) {
            Some(content) => {
                *content = html.to_string();
                true
            }
            None => false,
        };
        if known {
            self.write(&format!("{}.html", id), html);
        }
    }

    fn set_visible(&self, id: &str, visible: bool) {
        let mut state = lock(&self.state);
        state.visible.insert(id.to_string(), visible);
        self.save_state(&state);
    }

    fn set_active(&self, group: &str, id: &str) {
        let mut state = lock(&self.state);
        state.active.insert(group.to_string(), id.to_string());
        self.save_state(&state);
    }

    fn alert(&self, message: &str) {
        tracing::warn!("{}", message);
        let mut state = lock(&self.state);
        state.alerts.push(message.to_string());
        self.save_state(&state);
    }
}

impl Navigator for DirectorySurface {
    fn show_page(&self, page: &str) {
        tracing::info!("Showing page: {}", page);
        let mut state = lock(&self.state);
        state.page = Some(page.to_string());
        self.save_state(&state);
    }
}
