//! Display order of each collection
//!
//! All sorts are stable: entries with equal keys keep the order they had in
//! the index document.

use chrono::NaiveDateTime;
use std::cmp::Reverse;

use super::{Event, Member, Photo, Post};
use crate::helpers::parse_date;

fn date_key(date: &Option<String>) -> Option<NaiveDateTime> {
    date.as_deref().and_then(parse_date)
}

/// Most recent first; posts without a usable date go last
pub fn sort_posts(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_by_cached_key(|p| Reverse(date_key(&p.date)));
    posts
}

/// Most recent first; photos without a usable date go last
pub fn sort_photos(mut photos: Vec<Photo>) -> Vec<Photo> {
    photos.sort_by_cached_key(|p| Reverse(date_key(&p.date)));
    photos
}

/// Ascending `order`; members without one go last
pub fn sort_members(mut members: Vec<Member>) -> Vec<Member> {
    members.sort_by_key(|m| m.order.unwrap_or(i64::MAX));
    members
}

/// Chronological; events without a usable date go last
pub fn sort_events(mut events: Vec<Event>) -> Vec<Event> {
    events.sort_by_cached_key(|e| {
        let date = date_key(&e.date);
        (date.is_none(), date)
    });
    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, date: Option<&str>) -> Post {
        Post {
            title: title.to_string(),
            date: date.map(str::to_string),
            ..Default::default()
        }
    }

    fn titles(posts: &[Post]) -> Vec<&str> {
        posts.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_posts_newest_first_unparseable_last() {
        let posts = vec![
            post("old", Some("2023-01-10")),
            post("bad", Some("someday")),
            post("new", Some("2024-05-01")),
            post("none", None),
            post("mid", Some("2023-06-15T09:00")),
        ];
        let sorted = sort_posts(posts);
        assert_eq!(titles(&sorted), vec!["new", "mid", "old", "bad", "none"]);
    }

    #[test]
    fn test_posts_stable_for_equal_dates() {
        let posts = vec![
            post("a", Some("2024-01-01")),
            post("b", Some("2024-01-01")),
            post("c", Some("2024-02-01")),
            post("d", Some("2024-01-01")),
        ];
        let sorted = sort_posts(posts);
        assert_eq!(titles(&sorted), vec!["c", "a", "b", "d"]);
    }

    #[test]
    fn test_photos_newest_first() {
        let photos = vec![
            Photo {
                title: "a".to_string(),
                date: Some("2022-01-01".to_string()),
                ..Default::default()
            },
            Photo {
                title: "b".to_string(),
                date: Some("2024-01-01".to_string()),
                ..Default::default()
            },
        ];
        let sorted = sort_photos(photos);
        assert_eq!(sorted[0].title, "b");
        assert_eq!(sorted[1].title, "a");
    }

    #[test]
    fn test_members_by_order_missing_last() {
        let member = |name: &str, order: Option<i64>| Member {
            name: name.to_string(),
            order,
            ..Default::default()
        };
        let members = vec![
            member("unordered-1", None),
            member("third", Some(3)),
            member("first", Some(1)),
            member("unordered-2", None),
            member("also-first", Some(1)),
        ];
        let sorted = sort_members(members);
        let names: Vec<&str> = sorted.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["first", "also-first", "third", "unordered-1", "unordered-2"]
        );
    }

    #[test]
    fn test_events_chronological_unparseable_last() {
        let event = |title: &str, date: Option<&str>| Event {
            title: title.to_string(),
            date: date.map(str::to_string),
            ..Default::default()
        };
        let events = vec![
            event("tbd", Some("à définir")),
            event("june", Some("2024-06-01")),
            event("none", None),
            event("march", Some("2024-03-01")),
        ];
        let sorted = sort_events(events);
        let titles: Vec<&str> = sorted.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["march", "june", "tbd", "none"]);
    }

    #[test]
    fn test_adjacent_pairs_respect_order() {
        let posts = sort_posts(vec![
            post("1", Some("2021-03-01")),
            post("2", Some("2024-03-01")),
            post("3", None),
            post("4", Some("2022-03-01")),
        ]);
        for pair in posts.windows(2) {
            assert!(date_key(&pair[0].date) >= date_key(&pair[1].date));
        }
    }
}
