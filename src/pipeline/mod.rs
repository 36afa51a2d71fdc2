//! The content pipeline: load, normalize, sort and render each collection
//!
//! One pipeline is built per page session and handed by reference to the
//! event handlers. Activation loads the four collections concurrently; each
//! one is rendered as soon as it is ready and a failure only affects its own
//! section of the page.

mod detail;
mod gallery;

use serde::de::DeserializeOwned;
use std::sync::atomic::AtomicU64;
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::SiteConfig;
use crate::content::{sort, Collection, ContentSource, Loader, Normalize, Photo, Post};
use crate::error::ContentError;
use crate::i18n::I18n;
use crate::render::{Navigator, RenderOutcome, RenderSurface, Renderer};

pub use detail::DetailOutcome;
pub use gallery::FilterEvent;

/// Result of loading every collection once
#[derive(Debug)]
pub struct ActivationReport {
    pub blog: Result<RenderOutcome, ContentError>,
    /// Executive board and regional delegates
    pub team: Result<(RenderOutcome, RenderOutcome), ContentError>,
    pub gallery: Result<RenderOutcome, ContentError>,
    pub plan: Result<RenderOutcome, ContentError>,
}

impl ActivationReport {
    /// Collections that failed to load
    pub fn failures(&self) -> Vec<&ContentError> {
        [
            self.blog.as_ref().err(),
            self.team.as_ref().err(),
            self.gallery.as_ref().err(),
            self.plan.as_ref().err(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Request counters of the detail views, newest request wins
#[derive(Debug, Default)]
struct Tickets {
    article: AtomicU64,
    photo: AtomicU64,
}

/// Session state of the content pipeline
pub struct ContentPipeline {
    config: SiteConfig,
    i18n: I18n,
    loader: Loader,
    renderer: Renderer,
    navigator: Arc<dyn Navigator>,
    /// Loaded collections, used as fallback for detail lookups
    posts: RwLock<Vec<Post>>,
    gallery: RwLock<Vec<Photo>>,
    tickets: Tickets,
    /// Slug of the photo shown in the modal
    open_photo: Mutex<Option<String>>,
}

impl ContentPipeline {
    pub fn new(
        config: SiteConfig,
        i18n: I18n,
        source: Arc<dyn ContentSource>,
        surface: Arc<dyn RenderSurface>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let renderer = Renderer::new(&config, &i18n, surface);
        Self {
            config,
            i18n,
            loader: Loader::new(source),
            renderer,
            navigator,
            posts: RwLock::new(Vec::new()),
            gallery: RwLock::new(Vec::new()),
            tickets: Tickets::default(),
            open_photo: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Load and render all four collections concurrently
    pub async fn activate(&self) -> ActivationReport {
        let (blog, team, gallery, plan) = tokio::join!(
            self.load_blog(),
            self.load_team(),
            self.load_gallery(),
            self.load_plan()
        );

        let report = ActivationReport {
            blog,
            team,
            gallery,
            plan,
        };
        let failures = report.failures().len();
        if failures > 0 {
            tracing::warn!("{} of 4 collections failed to load", failures);
        } else {
            tracing::debug!("All collections loaded");
        }
        report
    }

    pub async fn load_blog(&self) -> Result<RenderOutcome, ContentError> {
        let container = &self.config.containers.blog;
        match self.fetch_sorted(Collection::Blog, sort::sort_posts).await {
            Ok(posts) => {
                let outcome = self.renderer.render_posts(container, &posts);
                *write(&self.posts) = posts;
                Ok(outcome)
            }
            Err(err) => Err(self.collection_failed(&[container], err)),
        }
    }

    pub async fn load_team(&self) -> Result<(RenderOutcome, RenderOutcome), ContentError> {
        let containers = &self.config.containers;
        match self.fetch_sorted(Collection::Team, sort::sort_members).await {
            Ok(members) => Ok(self.renderer.render_members(
                &containers.executive,
                &containers.regional,
                &members,
            )),
            Err(err) => Err(self.collection_failed(
                &[&containers.executive, &containers.regional],
                err,
            )),
        }
    }

    pub async fn load_gallery(&self) -> Result<RenderOutcome, ContentError> {
        let container = &self.config.containers.gallery;
        match self.fetch_sorted(Collection::Gallery, sort::sort_photos).await {
            Ok(photos) => {
                let outcome = self.renderer.render_photos(container, &photos);
                *write(&self.gallery) = photos;
                Ok(outcome)
            }
            Err(err) => Err(self.collection_failed(&[container], err)),
        }
    }

    pub async fn load_plan(&self) -> Result<RenderOutcome, ContentError> {
        let container = &self.config.containers.timeline;
        match self.fetch_sorted(Collection::Plan, sort::sort_events).await {
            Ok(events) => Ok(self.renderer.render_events(container, &events)),
            Err(err) => Err(self.collection_failed(&[container], err)),
        }
    }

    /// Currently loaded blog posts, in display order
    pub fn posts(&self) -> Vec<Post> {
        read(&self.posts).clone()
    }

    /// Currently loaded gallery photos, in display order
    pub fn photos(&self) -> Vec<Photo> {
        read(&self.gallery).clone()
    }

    async fn fetch_sorted<T>(
        &self,
        collection: Collection,
        sort: fn(Vec<T>) -> Vec<T>,
    ) -> Result<Vec<T>, ContentError>
    where
        T: DeserializeOwned + Normalize,
    {
        load_sorted(&self.loader, collection, sort).await
    }

    /// Log a collection failure and show it inline in its containers
    fn collection_failed(&self, containers: &[&String], err: ContentError) -> ContentError {
        tracing::error!("{}", err);
        for container in containers {
            self.renderer.render_failure(container);
        }
        err
    }
}

/// Load a collection in display order, without rendering it
pub async fn load_sorted<T>(
    loader: &Loader,
    collection: Collection,
    sort: fn(Vec<T>) -> Vec<T>,
) -> Result<Vec<T>, ContentError>
where
    T: DeserializeOwned + Normalize,
{
    let raw: Vec<T> = loader.load_collection(collection).await?;
    let items: Vec<T> = raw.iter().map(Normalize::normalize).collect();
    Ok(sort(items))
}

fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}
