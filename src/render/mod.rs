//! Rendering - turns normalized entities into fragments and mounts them
//!
//! Templated fields are interpolated as-is unless `escape_html` is set in
//! the site configuration. Content is expected to come from the trusted CMS.

pub mod fragment;
pub mod surface;

use std::sync::Arc;

use crate::config::{ArticleView, ModalView, SiteConfig};
use crate::content::{partition_members, Event, MarkdownLite, Member, Photo, Post};
use crate::helpers::{html_escape, DateFormatter};
use crate::i18n::I18n;

pub use fragment::{
    gallery_item_id, Fragment, LoadError, MemberCard, Placeholder, PhotoCard, PostCard,
    TimelineItem,
};
pub use surface::{DirectorySurface, MemorySurface, Navigator, RenderSurface};

/// What a render call did to its container
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The page has no such container, nothing was written
    MissingContainer,
    /// The collection was empty, the placeholder was written
    Placeholder,
    /// This many entity fragments were written
    Rendered(usize),
}

/// Translated labels used by the templates
#[derive(Debug, Clone)]
struct Labels {
    read_more: String,
    empty_message: String,
    empty_link: String,
    load_error: String,
}

/// Builds fragments and writes them into the rendering surface
pub struct Renderer {
    surface: Arc<dyn RenderSurface>,
    dates: DateFormatter,
    labels: Labels,
    admin_url: String,
    highlight_role: String,
    escape_html: bool,
}

impl Renderer {
    pub fn new(config: &SiteConfig, i18n: &I18n, surface: Arc<dyn RenderSurface>) -> Self {
        Self {
            surface,
            dates: DateFormatter::new(i18n),
            labels: Labels {
                read_more: i18n.get("blog.read_more"),
                empty_message: i18n.get("empty.message"),
                empty_link: i18n.get("empty.link"),
                load_error: i18n.get("error.load"),
            },
            admin_url: config.admin_url.clone(),
            highlight_role: config.highlight_role.clone(),
            escape_html: config.escape_html,
        }
    }

    pub fn surface(&self) -> &Arc<dyn RenderSurface> {
        &self.surface
    }

    /// Field text as it goes into a template
    fn text(&self, value: &str) -> String {
        if self.escape_html {
            html_escape(value)
        } else {
            value.to_string()
        }
    }

    fn opt_text(&self, value: &Option<String>) -> Option<String> {
        value.as_deref().map(|v| self.text(v))
    }

    /// Long-form markdown as it goes into a template
    fn markdown(&self, value: &str) -> String {
        MarkdownLite::render(&self.text(value))
    }

    fn date(&self, date: &Option<String>) -> String {
        self.text(&self.dates.format(date.as_deref()))
    }

    pub fn post_fragment(&self, post: &Post) -> Fragment {
        Fragment::Post(PostCard {
            slug: self.text(&post.slug),
            icon: self.text(&post.icon),
            date: self.date(&post.date),
            title: self.text(&post.title),
            excerpt: self.text(&post.excerpt),
            category: self.text(&post.category),
            read_more: self.labels.read_more.clone(),
        })
    }

    pub fn member_fragment(&self, member: &Member) -> Fragment {
        Fragment::Member(MemberCard {
            name: self.text(&member.name),
            role: self.text(&member.role),
            profession: self.text(&member.profession),
            avatar: self.text(&member.avatar),
            photo: self.opt_text(&member.photo),
            phone: self.opt_text(&member.phone),
            email: self.opt_text(&member.email),
            region: self.opt_text(&member.region),
            highlight: !self.highlight_role.is_empty() && member.role == self.highlight_role,
        })
    }

    pub fn photo_fragment(&self, photo: &Photo) -> Fragment {
        Fragment::Photo(PhotoCard {
            // Matched against the raw slug by the gallery filter
            id: gallery_item_id(&photo.slug),
            slug: self.text(&photo.slug),
            icon: self.text(&photo.icon),
            date: self.date(&photo.date),
            title: self.text(&photo.title),
            description: self.text(&photo.description),
            categories: photo.categories.iter().map(|c| self.text(c)).collect(),
            tag: self.text(photo.tag()),
        })
    }

    pub fn event_fragment(&self, event: &Event) -> Fragment {
        Fragment::Event(TimelineItem {
            icon: self.text(&event.icon),
            date: self.date(&event.date),
            title: self.text(&event.title),
            description: self.text(&event.description),
            details: event.details.as_deref().map(|d| self.markdown(d)),
            location: self.opt_text(&event.location),
        })
    }

    /// Fragment written in place of an empty collection
    pub fn placeholder(&self) -> Fragment {
        Fragment::Empty(Placeholder {
            message: self.labels.empty_message.clone(),
            link_label: self.labels.empty_link.clone(),
            link_url: self.admin_url.clone(),
        })
    }

    pub fn render_posts(&self, container: &str, posts: &[Post]) -> RenderOutcome {
        self.mount(container, posts.iter().map(|p| self.post_fragment(p)).collect())
    }

    /// Render executive members and regional delegates into their own
    /// containers
    pub fn render_members(
        &self,
        executive_container: &str,
        regional_container: &str,
        members: &[Member],
    ) -> (RenderOutcome, RenderOutcome) {
        let (executive, regional) = partition_members(members);
        let executive = self.mount(
            executive_container,
            executive.iter().map(|m| self.member_fragment(m)).collect(),
        );
        let regional = self.mount(
            regional_container,
            regional.iter().map(|m| self.member_fragment(m)).collect(),
        );
        (executive, regional)
    }

    pub fn render_photos(&self, container: &str, photos: &[Photo]) -> RenderOutcome {
        self.mount(container, photos.iter().map(|p| self.photo_fragment(p)).collect())
    }

    pub fn render_events(&self, container: &str, events: &[Event]) -> RenderOutcome {
        self.mount(container, events.iter().map(|e| self.event_fragment(e)).collect())
    }

    /// Write the inline load-failure message into a container, if present
    pub fn render_failure(&self, container: &str) -> bool {
        if !self.surface.has_container(container) {
            return false;
        }
        let fragment = Fragment::Error(LoadError {
            message: self.labels.load_error.clone(),
        });
        self.surface.mount(container, &[fragment]);
        true
    }

    fn mount(&self, container: &str, fragments: Vec<Fragment>) -> RenderOutcome {
        if !self.surface.has_container(container) {
            tracing::debug!("No container `{}` on this page, skipping", container);
            return RenderOutcome::MissingContainer;
        }

        if fragments.is_empty() {
            self.surface.mount(container, &[self.placeholder()]);
            return RenderOutcome::Placeholder;
        }

        self.surface.mount(container, &fragments);
        RenderOutcome::Rendered(fragments.len())
    }

    /// Fill the single-article page
    pub fn render_article(&self, view: &ArticleView, post: &Post) {
        let surface = &self.surface;
        surface.set_html(&view.title, &self.text(&post.title));
        surface.set_html(&view.date, &self.date(&post.date));
        surface.set_html(&view.icon, &self.text(&post.icon));
        surface.set_html(&view.category, &self.text(&post.category));
        surface.set_html(&view.body, &self.markdown(&post.body));
    }

    /// Fill the gallery modal; the body falls back to the description
    pub fn render_photo_detail(&self, view: &ModalView, photo: &Photo) {
        let surface = &self.surface;
        let tags: String = photo
            .categories
            .iter()
            .map(|c| format!(r#"<span class="gallery-tag">{}</span>"#, self.text(c)))
            .collect();
        let body = if photo.body.trim().is_empty() {
            &photo.description
        } else {
            &photo.body
        };

        surface.set_html(&view.title, &self.text(&photo.title));
        surface.set_html(&view.date, &self.date(&photo.date));
        surface.set_html(&view.icon, &self.text(&photo.icon));
        surface.set_html(&view.tags, &tags);
        surface.set_html(&view.body, &self.markdown(body));
    }
}
