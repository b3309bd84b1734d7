use anyhow::Result;

use crate::config::Config;
use crate::feed::{load_feed, FeedSource};
use crate::legend::render_legend;
use crate::marker::render_markers;
use crate::surface::MapSurface;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderReport {
    pub features: usize,
    pub markers: usize,
    pub skipped: usize,
    pub legend_entries: usize,
    pub feed_sha256: String,
}

/// Fetch once, then draw every marker and the legend onto `surface`.
///
/// A failed fetch or parse returns early with nothing drawn.
pub async fn run(cfg: &Config, source: &dyn FeedSource, surface: &mut dyn MapSurface) -> Result<RenderReport> {
    let loaded = load_feed(source).await?;
    let stats = render_markers(&loaded.document, cfg, surface);
    let legend_entries = render_legend(surface);
    Ok(RenderReport {
        features: loaded.document.features.len(),
        markers: stats.drawn,
        skipped: stats.skipped,
        legend_entries,
        feed_sha256: loaded.sha256,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::StaticFeed;
    use crate::surface::LeafletPage;

    #[tokio::test]
    async fn test_failed_fetch_draws_nothing() {
        let cfg = Config::default();
        let mut page = LeafletPage::from_config(&cfg);
        let result = run(&cfg, &StaticFeed::new("not json"), &mut page).await;
        assert!(result.is_err());
        assert!(page.circles().is_empty());
        assert!(page.controls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_feed_still_gets_legend() {
        let cfg = Config::default();
        let mut page = LeafletPage::from_config(&cfg);
        let report = run(&cfg, &StaticFeed::new(r#"{"features":[]}"#), &mut page)
            .await
            .unwrap();
        assert_eq!(report.markers, 0);
        assert_eq!(report.legend_entries, 6);
        assert_eq!(page.controls().len(), 1);
    }
}
