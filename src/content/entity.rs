//! Content entities: blog posts, team members, gallery photos and plan events
//!
//! Records are deserialized leniently from the CMS output (every field is
//! optional on the wire) and then brought to display shape by
//! [`Normalize::normalize`].

use serde::{Deserialize, Deserializer, Serialize};

use super::MarkdownLite;
use crate::helpers::truncate;

/// Category every photo belongs to, matched by the "show all" filter
pub const ALL_CATEGORY: &str = "all";

pub const DEFAULT_POST_ICON: &str = "📝";
pub const DEFAULT_POST_CATEGORY: &str = "general";
pub const DEFAULT_AVATAR: &str = "👤";
pub const DEFAULT_PHOTO_ICON: &str = "📷";
pub const DEFAULT_EVENT_ICON: &str = "📅";

/// Maximum length of a derived post excerpt, in characters
const EXCERPT_LENGTH: usize = 160;

/// Fill missing optional fields with their defaults.
///
/// Never mutates the input, and applying it twice gives the same result as
/// applying it once.
pub trait Normalize: Sized {
    fn normalize(&self) -> Self;
}

/// Entities that can be addressed by slug in a detail view
pub trait Slugged {
    fn slug(&self) -> &str;

    fn slug_mut(&mut self) -> &mut String;
}

/// A blog post
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub date: Option<String>,
    #[serde(alias = "content")]
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub excerpt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
}

impl Normalize for Post {
    fn normalize(&self) -> Self {
        let excerpt = if self.excerpt.trim().is_empty() {
            truncate(&MarkdownLite::plain_text(&self.body), EXCERPT_LENGTH, None)
        } else {
            self.excerpt.clone()
        };

        Self {
            title: self.title.clone(),
            date: normalize_optional(&self.date),
            body: self.body.clone(),
            slug: slug_or(&self.slug, &self.title),
            icon: text_or(&self.icon, DEFAULT_POST_ICON),
            excerpt,
            category: text_or(&self.category, DEFAULT_POST_CATEGORY),
        }
    }
}

impl Slugged for Post {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn slug_mut(&mut self) -> &mut String {
        &mut self.slug
    }
}

/// A member of the association's team
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Member {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(deserialize_with = "null_as_default")]
    pub profession: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub avatar: String,
    pub photo: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub region: Option<String>,
    pub order: Option<i64>,
}

impl Member {
    /// Members with a region are regional delegates, all others belong to
    /// the executive board.
    pub fn is_regional(&self) -> bool {
        self.region
            .as_deref()
            .is_some_and(|r| !r.trim().is_empty())
    }
}

impl Normalize for Member {
    fn normalize(&self) -> Self {
        Self {
            name: self.name.clone(),
            role: self.role.clone(),
            profession: self.profession.clone(),
            slug: slug_or(&self.slug, &self.name),
            avatar: text_or(&self.avatar, DEFAULT_AVATAR),
            photo: normalize_optional(&self.photo),
            phone: normalize_optional(&self.phone),
            email: normalize_optional(&self.email),
            region: normalize_optional(&self.region),
            order: self.order,
        }
    }
}

/// Split members into (executive, regional), keeping their relative order
pub fn partition_members(members: &[Member]) -> (Vec<Member>, Vec<Member>) {
    let (regional, executive): (Vec<Member>, Vec<Member>) =
        members.iter().cloned().partition(Member::is_regional);
    (executive, regional)
}

/// A gallery photo
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Photo {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(deserialize_with = "string_or_vec")]
    pub categories: Vec<String>,
}

impl Photo {
    /// Tag shown on the gallery card: the first category
    pub fn tag(&self) -> &str {
        self.categories
            .first()
            .map(String::as_str)
            .unwrap_or(ALL_CATEGORY)
    }

    /// Whether the photo is shown under a gallery filter
    pub fn matches(&self, category: &str) -> bool {
        category == ALL_CATEGORY || self.categories.iter().any(|c| c == category)
    }
}

impl Normalize for Photo {
    fn normalize(&self) -> Self {
        let mut categories: Vec<String> = self
            .categories
            .iter()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        if categories.is_empty() {
            categories.push(ALL_CATEGORY.to_string());
        }

        Self {
            title: self.title.clone(),
            date: normalize_optional(&self.date),
            slug: slug_or(&self.slug, &self.title),
            icon: text_or(&self.icon, DEFAULT_PHOTO_ICON),
            description: self.description.clone(),
            body: self.body.clone(),
            categories,
        }
    }
}

impl Slugged for Photo {
    fn slug(&self) -> &str {
        &self.slug
    }

    fn slug_mut(&mut self) -> &mut String {
        &mut self.slug
    }
}

/// An entry of the action plan timeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    pub date: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    pub details: Option<String>,
    pub location: Option<String>,
}

impl Normalize for Event {
    fn normalize(&self) -> Self {
        Self {
            title: self.title.clone(),
            date: normalize_optional(&self.date),
            description: self.description.clone(),
            icon: text_or(&self.icon, DEFAULT_EVENT_ICON),
            details: normalize_optional(&self.details),
            location: normalize_optional(&self.location),
        }
    }
}

/// Trim an optional text field, mapping blank values to `None`
fn normalize_optional(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn text_or(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

fn slug_or(slug: &str, source: &str) -> String {
    if slug.trim().is_empty() {
        slug::slugify(source)
    } else {
        slug.to_string()
    }
}

/// Text field where the CMS may write `null` for "not set"
fn null_as_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Custom deserializer that handles both a single string and a list of strings
fn string_or_vec<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, SeqAccess, Visitor};
    use std::fmt;

    struct StringOrVec;

    impl<'de> Visitor<'de> for StringOrVec {
        type Value = Vec<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![value.to_string()])
        }

        fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
        where
            S: SeqAccess<'de>,
        {
            let mut vec = Vec::new();
            while let Some(item) = seq.next_element::<String>()? {
                vec.push(item);
            }
            Ok(vec)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(StringOrVec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_defaults() {
        let post: Post = serde_json::from_str(
            r##"{"title": "Assemblée générale 2024", "date": "2024-03-05", "body": "# Ordre du jour\n\nBienvenue à **tous**"}"##,
        )
        .unwrap();
        let post = post.normalize();

        assert_eq!(post.slug, "assemblee-generale-2024");
        assert_eq!(post.icon, DEFAULT_POST_ICON);
        assert_eq!(post.category, DEFAULT_POST_CATEGORY);
        assert_eq!(post.excerpt, "Ordre du jour Bienvenue à tous");
    }

    #[test]
    fn test_post_keeps_explicit_fields() {
        let post = Post {
            title: "T".to_string(),
            slug: "custom".to_string(),
            icon: "🎉".to_string(),
            excerpt: "Short".to_string(),
            category: "events".to_string(),
            ..Default::default()
        }
        .normalize();

        assert_eq!(post.slug, "custom");
        assert_eq!(post.icon, "🎉");
        assert_eq!(post.excerpt, "Short");
        assert_eq!(post.category, "events");
    }

    #[test]
    fn test_long_body_excerpt_is_truncated() {
        let post = Post {
            title: "Long".to_string(),
            body: "mot ".repeat(100),
            ..Default::default()
        }
        .normalize();

        assert!(post.excerpt.chars().count() <= EXCERPT_LENGTH);
        assert!(post.excerpt.ends_with("..."));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let post = Post {
            title: "Hello World".to_string(),
            date: Some("  ".to_string()),
            body: "Body *text*".to_string(),
            ..Default::default()
        };
        let once = post.normalize();
        assert_eq!(once.normalize(), once);
        assert_eq!(once.date, None);

        let member = Member {
            name: "Awa Diop".to_string(),
            region: Some(" ".to_string()),
            phone: Some(String::new()),
            ..Default::default()
        };
        let once = member.normalize();
        assert_eq!(once.normalize(), once);

        let photo = Photo {
            title: "Fête".to_string(),
            categories: vec![" ".to_string()],
            ..Default::default()
        };
        let once = photo.normalize();
        assert_eq!(once.normalize(), once);

        let event = Event {
            title: "Forum".to_string(),
            details: Some("\n".to_string()),
            ..Default::default()
        };
        let once = event.normalize();
        assert_eq!(once.normalize(), once);
    }

    #[test]
    fn test_normalize_does_not_mutate_input() {
        let photo = Photo {
            title: "Sortie".to_string(),
            ..Default::default()
        };
        let snapshot = photo.clone();
        let _ = photo.normalize();
        assert_eq!(photo, snapshot);
    }

    #[test]
    fn test_member_region_classification() {
        let regional = Member {
            name: "A".to_string(),
            region: Some("North".to_string()),
            ..Default::default()
        }
        .normalize();
        let blank = Member {
            name: "B".to_string(),
            region: Some("   ".to_string()),
            ..Default::default()
        }
        .normalize();
        let none = Member {
            name: "C".to_string(),
            ..Default::default()
        }
        .normalize();

        assert!(regional.is_regional());
        assert!(!blank.is_regional());
        assert!(!none.is_regional());
        assert_eq!(none.avatar, DEFAULT_AVATAR);
        assert_eq!(none.slug, "c");
    }

    #[test]
    fn test_partition_members_is_exhaustive_and_disjoint() {
        let members: Vec<Member> = [
            ("A", None),
            ("B", Some("North")),
            ("C", None),
            ("D", Some("South")),
        ]
        .iter()
        .map(|(name, region)| Member {
            name: name.to_string(),
            region: region.map(str::to_string),
            ..Default::default()
        })
        .collect();

        let (executive, regional) = partition_members(&members);
        let names = |v: &[Member]| v.iter().map(|m| m.name.clone()).collect::<Vec<_>>();

        assert_eq!(names(&executive), vec!["A", "C"]);
        assert_eq!(names(&regional), vec!["B", "D"]);
        assert_eq!(executive.len() + regional.len(), members.len());
    }

    #[test]
    fn test_photo_categories_default_to_all() {
        let photo: Photo = serde_json::from_str(r#"{"title": "Soirée"}"#).unwrap();
        let photo = photo.normalize();
        assert_eq!(photo.categories, vec![ALL_CATEGORY]);
        assert_eq!(photo.tag(), ALL_CATEGORY);
        assert!(photo.matches(ALL_CATEGORY));
        assert!(!photo.matches("sport"));
    }

    #[test]
    fn test_photo_categories_accept_string_or_list() {
        let single: Photo =
            serde_json::from_str(r#"{"title": "A", "categories": "sport"}"#).unwrap();
        assert_eq!(single.categories, vec!["sport"]);

        let list: Photo =
            serde_json::from_str(r#"{"title": "B", "categories": ["culture", "sport"]}"#)
                .unwrap();
        let list = list.normalize();
        assert_eq!(list.tag(), "culture");
        assert!(list.matches("sport"));
        assert!(list.matches(ALL_CATEGORY));

        let null: Photo = serde_json::from_str(r#"{"title": "C", "categories": null}"#).unwrap();
        assert!(null.categories.is_empty());
    }

    #[test]
    fn test_event_defaults() {
        let event: Event =
            serde_json::from_str(r#"{"title": "Forum", "date": "2024-06-01", "location": ""}"#)
                .unwrap();
        let event = event.normalize();
        assert_eq!(event.icon, DEFAULT_EVENT_ICON);
        assert_eq!(event.location, None);
        assert_eq!(event.details, None);
    }

    #[test]
    fn test_null_text_fields_take_defaults() {
        let posts: Vec<Post> = serde_json::from_str(
            r#"[
                {"title": "A", "date": "2024-01-01", "body": "Texte", "icon": null, "excerpt": null},
                {"title": "B", "slug": null, "category": null}
            ]"#,
        )
        .unwrap();
        let posts: Vec<Post> = posts.iter().map(Normalize::normalize).collect();
        assert_eq!(posts[0].icon, DEFAULT_POST_ICON);
        assert_eq!(posts[0].excerpt, "Texte");
        assert_eq!(posts[1].slug, "b");
        assert_eq!(posts[1].category, DEFAULT_POST_CATEGORY);

        let member: Member =
            serde_json::from_str(r#"{"name": "Awa", "avatar": null, "profession": null}"#).unwrap();
        let member = member.normalize();
        assert_eq!(member.avatar, DEFAULT_AVATAR);
        assert_eq!(member.profession, "");

        let photo: Photo =
            serde_json::from_str(r#"{"title": "Fête", "description": null, "body": null}"#)
                .unwrap();
        assert_eq!(photo.normalize().description, "");

        let event: Event =
            serde_json::from_str(r#"{"title": null, "description": null, "icon": null}"#).unwrap();
        assert_eq!(event.normalize().icon, DEFAULT_EVENT_ICON);
    }
}
