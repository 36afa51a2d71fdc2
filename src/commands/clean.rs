//! Clean the output directory

use anyhow::Result;
use std::fs;

use crate::Site;

/// Remove every file written by the directory surface
pub fn run(site: &Site) -> Result<()> {
    if site.output_dir.exists() {
        fs::remove_dir_all(&site.output_dir)?;
        tracing::info!("Deleted: {:?}", site.output_dir);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_removes_output() {
        let dir = tempfile::tempdir().unwrap();
        let site = Site::new(dir.path()).unwrap();
        fs::create_dir_all(&site.output_dir).unwrap();
        fs::write(site.output_dir.join("blog-grid.html"), "x").unwrap();

        run(&site).unwrap();
        assert!(!site.output_dir.exists());

        // Nothing to clean is fine
        run(&site).unwrap();
    }
}
