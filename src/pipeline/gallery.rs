//! Gallery filter buttons and modal state

use std::sync::PoisonError;

use super::{read, ContentPipeline};
use crate::render::gallery_item_id;

/// A click on one of the gallery filter buttons
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterEvent {
    /// Category to show, or `all`
    pub category: String,
    /// Id of the clicked button
    pub button_id: String,
}

impl FilterEvent {
    pub fn new(category: &str, button_id: &str) -> Self {
        Self {
            category: category.to_string(),
            button_id: button_id.to_string(),
        }
    }
}

impl ContentPipeline {
    /// Show the gallery items of a category and hide the others.
    ///
    /// Returns the slugs left visible, in display order.
    pub fn filter_gallery(&self, event: &FilterEvent) -> Vec<String> {
        let surface = self.renderer.surface();
        surface.set_active(&self.config.filter_group, &event.button_id);

        let photos = read(&self.gallery);
        let mut visible = Vec::new();
        for photo in photos.iter() {
            let shown = photo.matches(&event.category);
            surface.set_visible(&gallery_item_id(&photo.slug), shown);
            if shown {
                visible.push(photo.slug.clone());
            }
        }

        tracing::debug!(
            "Filter `{}`: {} of {} photos shown",
            event.category,
            visible.len(),
            photos.len()
        );
        visible
    }

    /// Hide the gallery modal, returning the slug it was showing
    pub fn close_modal(&self) -> Option<String> {
        self.renderer
            .surface()
            .set_visible(&self.config.modal.id, false);
        self.open_photo
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Slug of the photo in the open modal
    pub fn open_photo(&self) -> Option<String> {
        self.open_photo
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
