//! List a collection as the pipeline would display it

use anyhow::{anyhow, Result};

use crate::content::{partition_members, sort, Collection};
use crate::helpers::DateFormatter;
use crate::pipeline::load_sorted;
use crate::Site;

/// Print a normalized, sorted collection
pub async fn run(site: &Site, name: &str) -> Result<()> {
    let collection = Collection::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = Collection::ALL.iter().map(Collection::dir).collect();
        anyhow!("Unknown collection `{}` (expected one of: {})", name, known.join(", "))
    })?;
    for line in lines(site, collection).await? {
        println!("{}", line);
    }
    Ok(())
}

/// Output lines of `run`
pub async fn lines(site: &Site, collection: Collection) -> Result<Vec<String>> {
    let loader = site.loader();
    let dates = DateFormatter::new(&site.i18n);
    let mut out = Vec::new();

    match collection {
        Collection::Blog => {
            let posts = load_sorted(&loader, collection, sort::sort_posts).await?;
            out.push(format!("Posts ({}):", posts.len()));
            for post in posts {
                out.push(format!(
                    "  {} - {} [{}] ({})",
                    dates.format(post.date.as_deref()),
                    post.title,
                    post.slug,
                    post.category
                ));
            }
        }
        Collection::Team => {
            let members = load_sorted(&loader, collection, sort::sort_members).await?;
            let (executive, regional) = partition_members(&members);
            out.push(format!("Executive ({}):", executive.len()));
            for member in executive {
                out.push(format!("  {} - {}", member.name, member.role));
            }
            out.push(format!("Regional delegates ({}):", regional.len()));
            for member in regional {
                out.push(format!(
                    "  {} - {} [{}]",
                    member.name,
                    member.role,
                    member.region.unwrap_or_default()
                ));
            }
        }
        Collection::Gallery => {
            let photos = load_sorted(&loader, collection, sort::sort_photos).await?;
            out.push(format!("Photos ({}):", photos.len()));
            for photo in photos {
                out.push(format!(
                    "  {} - {} [{}] ({})",
                    dates.format(photo.date.as_deref()),
                    photo.title,
                    photo.slug,
                    photo.categories.join(", ")
                ));
            }
        }
        Collection::Plan => {
            let events = load_sorted(&loader, collection, sort::sort_events).await?;
            out.push(format!("Events ({}):", events.len()));
            for event in events {
                out.push(format!(
                    "  {} - {}",
                    dates.format(event.date.as_deref()),
                    event.title
                ));
            }
        }
    }

    Ok(out)
}
