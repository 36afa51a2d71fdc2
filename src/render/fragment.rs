//! Display fragments, one variant per kind of rendered unit
//!
//! Fragments hold display-ready text: dates are already formatted, markdown
//! already converted and fields already escaped when the site asks for it.
//! [`Fragment::to_html`] only interpolates.

use crate::helpers::link_to;

/// A blog card in the post grid
#[derive(Debug, Clone, PartialEq)]
pub struct PostCard {
    pub slug: String,
    pub icon: String,
    pub date: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    pub read_more: String,
}

/// A team member card
#[derive(Debug, Clone, PartialEq)]
pub struct MemberCard {
    pub name: String,
    pub role: String,
    pub profession: String,
    pub avatar: String,
    pub photo: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub region: Option<String>,
    pub highlight: bool,
}

/// A gallery grid item
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoCard {
    /// Element id, toggled by the gallery filter
    pub id: String,
    pub slug: String,
    pub icon: String,
    pub date: String,
    pub title: String,
    pub description: String,
    pub categories: Vec<String>,
    pub tag: String,
}

/// An action plan timeline entry
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineItem {
    pub icon: String,
    pub date: String,
    pub title: String,
    pub description: String,
    /// Already converted to HTML
    pub details: Option<String>,
    pub location: Option<String>,
}

/// Shown in place of an empty collection, pointing at the authoring tool
#[derive(Debug, Clone, PartialEq)]
pub struct Placeholder {
    pub message: String,
    pub link_label: String,
    pub link_url: String,
}

/// Shown in place of a collection that failed to load
#[derive(Debug, Clone, PartialEq)]
pub struct LoadError {
    pub message: String,
}

/// A self-contained renderable unit
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Post(PostCard),
    Member(MemberCard),
    Photo(PhotoCard),
    Event(TimelineItem),
    Empty(Placeholder),
    Error(LoadError),
}

impl Fragment {
    /// Render the fragment as markup
    pub fn to_html(&self) -> String {
        match self {
            Fragment::Post(card) => post_html(card),
            Fragment::Member(card) => member_html(card),
            Fragment::Photo(card) => photo_html(card),
            Fragment::Event(item) => event_html(item),
            Fragment::Empty(placeholder) => format!(
                r#"<div class="empty-state"><p>{}</p>{}</div>"#,
                placeholder.message,
                link_to(
                    &placeholder.link_url,
                    &placeholder.link_label,
                    Some("empty-state-link")
                )
            ),
            Fragment::Error(error) => {
                format!(r#"<div class="load-error"><p>{}</p></div>"#, error.message)
            }
        }
    }
}

/// Concatenate fragments in order
pub fn join_html(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .map(Fragment::to_html)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Id of a gallery item, toggled by the gallery filter
pub fn gallery_item_id(slug: &str) -> String {
    format!("gallery-item-{}", slug)
}

fn post_html(card: &PostCard) -> String {
    format!(
        concat!(
            r#"<div class="blog-card" data-action="select-post" data-slug="{slug}" data-category="{category}">"#,
            r#"<div class="blog-image">{icon}</div>"#,
            r#"<div class="blog-content">"#,
            r#"<p class="blog-date">{date}</p>"#,
            r#"<h3>{title}</h3>"#,
            r#"<p class="blog-excerpt">{excerpt}</p>"#,
            r#"<span class="read-more">{read_more}</span>"#,
            r#"</div></div>"#
        ),
        slug = card.slug,
        category = card.category,
        icon = card.icon,
        date = card.date,
        title = card.title,
        excerpt = card.excerpt,
        read_more = card.read_more,
    )
}

fn member_html(card: &MemberCard) -> String {
    let class = if card.highlight {
        "team-member team-highlight"
    } else {
        "team-member"
    };

    let avatar = match &card.photo {
        Some(src) => format!(r#"<img src="{}" alt="{}">"#, src, card.name),
        None => card.avatar.clone(),
    };

    let region = card
        .region
        .as_ref()
        .map(|r| format!(r#"<p class="team-region">📍 {}</p>"#, r))
        .unwrap_or_default();

    // Email is only listed alongside a phone number
    let contact = match &card.phone {
        Some(phone) => {
            let email = card
                .email
                .as_ref()
                .map(|e| format!(r#"<div class="team-contact-item">✉️ {}</div>"#, e))
                .unwrap_or_default();
            format!(
                r#"<div class="team-contact"><div class="team-contact-item">📞 {}</div>{}</div>"#,
                phone, email
            )
        }
        None => String::new(),
    };

    format!(
        r#"<div class="{}"><div class="team-avatar">{}</div><h3>{}</h3><p class="team-role">{}</p><p class="team-profession">{}</p>{}{}</div>"#,
        class, avatar, card.name, card.role, card.profession, region, contact
    )
}

fn photo_html(card: &PhotoCard) -> String {
    format!(
        concat!(
            r#"<div class="gallery-item" id="{id}" data-category="{categories}" data-action="select-photo" data-slug="{slug}">"#,
            r#"<div class="gallery-image"><span class="gallery-image-icon">{icon}</span></div>"#,
            r#"<div class="gallery-info">"#,
            r#"<p class="gallery-date">{date}</p>"#,
            r#"<h3>{title}</h3>"#,
            r#"<p class="gallery-description">{description}</p>"#,
            r#"<span class="gallery-tag">{tag}</span>"#,
            r#"</div></div>"#
        ),
        id = card.id,
        categories = card.categories.join(" "),
        slug = card.slug,
        icon = card.icon,
        date = card.date,
        title = card.title,
        description = card.description,
        tag = card.tag,
    )
}

fn event_html(item: &TimelineItem) -> String {
    let details = item
        .details
        .as_ref()
        .map(|d| format!(r#"<div class="event-details">{}</div>"#, d))
        .unwrap_or_default();
    let location = item
        .location
        .as_ref()
        .map(|l| format!(r#"<div class="timeline-location">📍 {}</div>"#, l))
        .unwrap_or_default();

    format!(
        r#"<div class="timeline-item"><div class="timeline-marker">{}</div><div class="timeline-content"><span class="timeline-date">{}</span><h3>{}</h3><p>{}</p>{}{}</div></div>"#,
        item.icon, item.date, item.title, item.description, details, location
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member() -> MemberCard {
        MemberCard {
            name: "Awa".to_string(),
            role: "Trésorière".to_string(),
            profession: "Comptable".to_string(),
            avatar: "👤".to_string(),
            photo: None,
            phone: None,
            email: Some("awa@example.org".to_string()),
            region: None,
            highlight: false,
        }
    }

    #[test]
    fn test_post_card_html() {
        let html = Fragment::Post(PostCard {
            slug: "ag-2024".to_string(),
            icon: "📝".to_string(),
            date: "5 mars 2024".to_string(),
            title: "AG 2024".to_string(),
            excerpt: "Résumé".to_string(),
            category: "general".to_string(),
            read_more: "Lire plus →".to_string(),
        })
        .to_html();

        assert!(html.starts_with(r#"<div class="blog-card" data-action="select-post" data-slug="ag-2024""#));
        assert!(html.contains(r#"<p class="blog-date">5 mars 2024</p>"#));
        assert!(html.contains("<h3>AG 2024</h3>"));
        assert!(html.contains(r#"<span class="read-more">Lire plus →</span>"#));
    }

    #[test]
    fn test_member_contact_requires_phone() {
        let html = Fragment::Member(member()).to_html();
        assert!(!html.contains("team-contact"));
        assert!(!html.contains("awa@example.org"));

        let mut with_phone = member();
        with_phone.phone = Some("01 23 45 67 89".to_string());
        let html = Fragment::Member(with_phone).to_html();
        assert!(html.contains("📞 01 23 45 67 89"));
        assert!(html.contains("✉️ awa@example.org"));
    }

    #[test]
    fn test_member_highlight_and_photo() {
        let mut card = member();
        card.highlight = true;
        card.photo = Some("/img/awa.jpg".to_string());
        card.region = Some("Nord".to_string());
        let html = Fragment::Member(card).to_html();

        assert!(html.starts_with(r#"<div class="team-member team-highlight">"#));
        assert!(html.contains(r#"<img src="/img/awa.jpg" alt="Awa">"#));
        assert!(html.contains("📍 Nord"));
    }

    #[test]
    fn test_photo_card_carries_filter_data() {
        let fragment = Fragment::Photo(PhotoCard {
            id: gallery_item_id("fete"),
            slug: "fete".to_string(),
            icon: "📷".to_string(),
            date: "1 juin 2024".to_string(),
            title: "Fête".to_string(),
            description: "Sous le soleil".to_string(),
            categories: vec!["culture".to_string(), "sport".to_string()],
            tag: "culture".to_string(),
        });

        let html = fragment.to_html();
        assert!(html.contains(r#"id="gallery-item-fete""#));
        assert!(html.contains(r#"data-category="culture sport""#));
        assert!(html.contains(r#"<span class="gallery-tag">culture</span>"#));
    }

    #[test]
    fn test_timeline_optional_blocks() {
        let bare = Fragment::Event(TimelineItem {
            icon: "📅".to_string(),
            date: "1 juin 2024".to_string(),
            title: "Forum".to_string(),
            description: "Rencontre".to_string(),
            details: None,
            location: None,
        });
        let html = bare.to_html();
        assert!(!html.contains("event-details"));
        assert!(!html.contains("timeline-location"));

        let full = Fragment::Event(TimelineItem {
            details: Some("<strong>Gratuit</strong>".to_string()),
            location: Some("Dakar".to_string()),
            ..match bare {
                Fragment::Event(item) => item,
                _ => unreachable!(),
            }
        });
        let html = full.to_html();
        assert!(html.contains(r#"<div class="event-details"><strong>Gratuit</strong></div>"#));
        assert!(html.contains(r#"<div class="timeline-location">📍 Dakar</div>"#));
    }

    #[test]
    fn test_placeholder_html() {
        let html = Fragment::Empty(Placeholder {
            message: "Aucun contenu pour le moment.".to_string(),
            link_label: "Ajouter du contenu".to_string(),
            link_url: "/admin/".to_string(),
        })
        .to_html();
        assert_eq!(
            html,
            r#"<div class="empty-state"><p>Aucun contenu pour le moment.</p><a href="/admin/" class="empty-state-link">Ajouter du contenu</a></div>"#
        );
    }
}
