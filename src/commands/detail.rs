//! Render a single article or gallery photo

use anyhow::Result;

use super::render::directory_pipeline;
use crate::pipeline::DetailOutcome;
use crate::Site;

/// Activate, then show the article page for `slug`
pub async fn article(site: &Site, slug: &str) -> Result<()> {
    let pipeline = directory_pipeline(site);
    pipeline.activate().await;

    match pipeline.show_article(slug).await {
        DetailOutcome::Shown(post) => {
            tracing::info!("Rendered article `{}`: {}", post.slug, post.title);
            Ok(())
        }
        DetailOutcome::Superseded => Ok(()),
        DetailOutcome::Failed(err) => Err(err.into()),
    }
}

/// Activate, then open the gallery modal for `slug`
pub async fn photo(site: &Site, slug: &str) -> Result<()> {
    let pipeline = directory_pipeline(site);
    pipeline.activate().await;

    match pipeline.open_gallery_modal(slug).await {
        DetailOutcome::Shown(photo) => {
            tracing::info!("Rendered photo `{}`: {}", photo.slug, photo.title);
            Ok(())
        }
        DetailOutcome::Superseded => Ok(()),
        DetailOutcome::Failed(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site_with_gallery() -> (tempfile::TempDir, Site) {
        let dir = tempfile::tempdir().unwrap();
        let gallery = dir.path().join("data/gallery");
        fs::create_dir_all(&gallery).unwrap();
        fs::write(
            gallery.join("index.json"),
            r#"[{"title": "Fête", "slug": "fete", "description": "Résumé"}]"#,
        )
        .unwrap();
        fs::write(
            gallery.join("fete.json"),
            r##"{"title": "Fête", "slug": "fete", "body": "# Programme", "categories": ["culture"]}"##,
        )
        .unwrap();
        let site = Site::new(dir.path()).unwrap();
        (dir, site)
    }

    #[tokio::test]
    async fn test_photo_writes_modal_fields() {
        let (_dir, site) = site_with_gallery();
        photo(&site, "fete").await.unwrap();

        let body = fs::read_to_string(site.output_dir.join("modal-body.html")).unwrap();
        assert_eq!(body, "<h2>Programme</h2>");
        let state: serde_json::Value = serde_json::from_str(
            &fs::read_to_string(site.output_dir.join("state.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(state["visible"]["gallery-modal"], true);
    }

    #[tokio::test]
    async fn test_missing_article_is_an_error() {
        let (_dir, site) = site_with_gallery();
        let err = article(&site, "absent").await.unwrap_err();
        assert!(err.to_string().contains("absent"));
    }
}
