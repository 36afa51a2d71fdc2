//! Helper functions shared by the loader and the renderer

mod date;
mod html;

pub use date::*;
pub use html::*;
