//! Check a manifest against the directory the images are published from.

use std::path::Path;

use tcg_page::AssetManifest;
use tracing::{debug, warn};

/// URLs served from elsewhere can't be checked locally.
fn is_remote(url: &str) -> bool {
    url.contains("://") || url.starts_with("//") || url.starts_with("data:")
}

/// Drop every local entry whose file is missing from `dir`.
///
/// The page renders those slots empty, so a missing image costs a warning,
/// never the render. Returns the number of entries dropped.
pub fn prune_missing(manifest: &mut AssetManifest, dir: &Path) -> usize {
    let missing: Vec<_> = manifest
        .iter()
        .filter(|(_, url)| !is_remote(url))
        .filter_map(|(name, url)| {
            // Cache-busting suffixes aren't part of the file name
            let path_part = url.split(['?', '#']).next().unwrap_or(url);
            let file = path_part.rsplit('/').next().unwrap_or(path_part);
            let path = dir.join(file);
            if path.is_file() {
                debug!("asset {} -> {}", name, path.display());
                None
            } else {
                warn!(
                    "asset {} not found at {}, leaving its slot empty",
                    name,
                    path.display()
                );
                Some(name)
            }
        })
        .collect();

    for name in &missing {
        manifest.remove(*name);
    }
    missing.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tcg_page::AssetName;
    use tempfile::TempDir;

    #[test]
    fn keeps_present_files_and_drops_missing_ones() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("logo.png"), b"png").unwrap();
        std::fs::write(dir.path().join("pack-starter.webp"), b"webp").unwrap();

        let mut manifest = AssetManifest::with_base("assets");
        let dropped = prune_missing(&mut manifest, dir.path());

        assert_eq!(dropped, AssetName::ALL.len() - 2);
        assert_eq!(manifest.get(AssetName::Logo), Some("assets/logo.png"));
        assert_eq!(
            manifest.get(AssetName::PackStarter),
            Some("assets/pack-starter.webp")
        );
        assert_eq!(manifest.get(AssetName::Hero), None);
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("hero-card-animation.webp"), b"webp").unwrap();

        let mut manifest = AssetManifest::default();
        manifest.insert(AssetName::Hero, "assets/hero-card-animation.webp?v=2");
        manifest.insert(AssetName::Logo, "assets/logo.png#mark");

        assert_eq!(prune_missing(&mut manifest, dir.path()), 1);
        assert_eq!(
            manifest.get(AssetName::Hero),
            Some("assets/hero-card-animation.webp?v=2")
        );
        assert_eq!(manifest.get(AssetName::Logo), None);
    }

    #[test]
    fn remote_urls_are_left_alone() {
        let dir = TempDir::new().unwrap();
        let mut manifest = AssetManifest::with_base("https://cdn.example.com/tcg");

        assert_eq!(prune_missing(&mut manifest, dir.path()), 0);
        assert_eq!(manifest.len(), AssetName::ALL.len());
    }
}
