//! Single-article page and gallery modal
//!
//! Each view keeps a request counter. A response is applied only if no newer
//! request for the same view was issued while it was in flight.

use serde::de::DeserializeOwned;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};

use super::{read, ContentPipeline};
use crate::content::{Collection, Normalize, Photo, Post, Slugged};
use crate::error::ContentError;

/// What happened to a detail request
#[derive(Debug)]
pub enum DetailOutcome<T> {
    /// The record was rendered
    Shown(T),
    /// A newer request for the same view was issued first; nothing was rendered
    Superseded,
    /// The record could not be found; the user was alerted
    Failed(ContentError),
}

impl<T> DetailOutcome<T> {
    pub fn shown(self) -> Option<T> {
        match self {
            DetailOutcome::Shown(item) => Some(item),
            _ => None,
        }
    }
}

fn next_ticket(counter: &AtomicU64) -> u64 {
    counter.fetch_add(1, Ordering::SeqCst) + 1
}

fn is_current(counter: &AtomicU64, ticket: u64) -> bool {
    counter.load(Ordering::SeqCst) == ticket
}

impl ContentPipeline {
    /// Load a post and show it on the article page
    pub async fn show_article(&self, slug: &str) -> DetailOutcome<Post> {
        let ticket = next_ticket(&self.tickets.article);
        let result = self.resolve(Collection::Blog, slug, &self.posts).await;

        if !is_current(&self.tickets.article, ticket) {
            tracing::debug!("Dropping stale article `{}`", slug);
            return DetailOutcome::Superseded;
        }

        match result {
            Ok(post) => {
                self.renderer.render_article(&self.config.article, &post);
                self.navigator.show_page(&self.config.article.page);
                DetailOutcome::Shown(post)
            }
            Err(err) => {
                tracing::error!("{}", err);
                self.renderer.surface().alert(&self.i18n.get("error.article"));
                DetailOutcome::Failed(err)
            }
        }
    }

    /// Load a photo and show it in the gallery modal
    pub async fn open_gallery_modal(&self, slug: &str) -> DetailOutcome<Photo> {
        let ticket = next_ticket(&self.tickets.photo);
        let result = self.resolve(Collection::Gallery, slug, &self.gallery).await;

        if !is_current(&self.tickets.photo, ticket) {
            tracing::debug!("Dropping stale photo `{}`", slug);
            return DetailOutcome::Superseded;
        }

        match result {
            Ok(photo) => {
                let modal = &self.config.modal;
                self.renderer.render_photo_detail(modal, &photo);
                self.renderer.surface().set_visible(&modal.id, true);
                *self
                    .open_photo
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner) = Some(photo.slug.clone());
                DetailOutcome::Shown(photo)
            }
            Err(err) => {
                tracing::error!("{}", err);
                self.renderer.surface().alert(&self.i18n.get("error.photo"));
                DetailOutcome::Failed(err)
            }
        }
    }

    /// Fetch a single record, falling back to the loaded collection
    async fn resolve<T>(
        &self,
        collection: Collection,
        slug: &str,
        cache: &RwLock<Vec<T>>,
    ) -> Result<T, ContentError>
    where
        T: DeserializeOwned + Normalize + Slugged + Clone,
    {
        match self.loader.load_item::<T>(collection, slug).await {
            Ok(mut item) => {
                // The detail document is addressed by `slug` even if it omits it
                if item.slug().trim().is_empty() {
                    *item.slug_mut() = slug.to_string();
                }
                Ok(item.normalize())
            }
            Err(err) => {
                tracing::warn!("{}, looking up `{}` in the loaded collection", err, slug);
                read(cache)
                    .iter()
                    .find(|item| item.slug() == slug)
                    .cloned()
                    .ok_or_else(|| ContentError::NotFound {
                        collection,
                        slug: slug.to_string(),
                    })
            }
        }
    }
}
