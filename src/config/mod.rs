//! Configuration module

mod site;

pub use site::ArticleView;
pub use site::ContainerIds;
pub use site::ModalView;
pub use site::SiteConfig;
