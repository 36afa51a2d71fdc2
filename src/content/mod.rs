//! Content module - entities, loading, sorting and markdown conversion

mod entity;
pub mod loader;
mod markdown;
pub mod sort;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use entity::{
    partition_members, Event, Member, Normalize, Photo, Post, Slugged, ALL_CATEGORY,
};
pub use loader::{ContentSource, DirSource, HttpSource, Loader};
pub use markdown::MarkdownLite;

/// The four content collections published by the CMS
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Blog,
    Team,
    Gallery,
    Plan,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Blog,
        Collection::Team,
        Collection::Gallery,
        Collection::Plan,
    ];

    /// Directory of the collection under the content root
    pub fn dir(&self) -> &'static str {
        match self {
            Collection::Blog => "blog",
            Collection::Team => "team",
            Collection::Gallery => "gallery",
            Collection::Plan => "plan",
        }
    }

    /// Parse a collection name as typed on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "blog" | "post" | "posts" => Some(Collection::Blog),
            "team" | "member" | "members" => Some(Collection::Team),
            "gallery" | "photo" | "photos" => Some(Collection::Gallery),
            "plan" | "event" | "events" | "timeline" => Some(Collection::Plan),
            _ => None,
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir())
    }
}
