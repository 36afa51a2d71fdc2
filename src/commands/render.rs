//! Render every collection into the output directory

use anyhow::Result;
use std::sync::Arc;

use crate::pipeline::{ActivationReport, ContentPipeline};
use crate::render::DirectorySurface;
use crate::Site;

/// Pipeline writing into `site.output_dir`
pub fn directory_pipeline(site: &Site) -> ContentPipeline {
    let surface = Arc::new(DirectorySurface::for_config(&site.output_dir, &site.config));
    site.pipeline(surface.clone(), surface)
}

/// Load and render all collections
pub async fn run(site: &Site) -> Result<ActivationReport> {
    let pipeline = directory_pipeline(site);
    let report = pipeline.activate().await;

    for failure in report.failures() {
        tracing::warn!("{} collection not rendered", failure.collection());
    }
    tracing::info!("Rendered into {:?}", site.output_dir);

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn test_render_writes_container_files() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path();
        fs::create_dir_all(base.join("data/plan")).unwrap();
        fs::write(
            base.join("data/plan/index.json"),
            r#"[{"title": "Forum", "date": "2024-06-01", "description": "Rencontre", "location": "Dakar"}]"#,
        )
        .unwrap();

        let site = Site::new(base).unwrap();
        let report = run(&site).await.unwrap();
        assert_eq!(report.failures().len(), 3);

        let timeline = fs::read_to_string(site.output_dir.join("timeline.html")).unwrap();
        assert!(timeline.contains("<h3>Forum</h3>"));
        assert!(timeline.contains("1 juin 2024"));
        assert!(timeline.contains("📍 Dakar"));

        let blog = fs::read_to_string(site.output_dir.join("blog-grid.html")).unwrap();
        assert!(blog.contains("load-error"));
    }
}
