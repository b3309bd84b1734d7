use anyhow::Result;
use quakemap::config::Config;
use quakemap::feed::HttpFeed;
use quakemap::logging::{info, log, obj, run_id, v_num, v_str, Domain, Level};
use quakemap::pipeline;
use quakemap::surface::LeafletPage;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();
    info(
        Domain::System,
        "startup",
        obj(&[
            ("run_id", v_str(run_id())),
            ("feed_url", v_str(&cfg.feed_url)),
            ("output_path", v_str(&cfg.output_path)),
        ]),
    );

    // Map surface first, independent of the feed.
    let mut page = LeafletPage::from_config(&cfg);
    let source = HttpFeed::new(cfg.feed_url()?);

    let report = match pipeline::run(&cfg, &source, &mut page).await {
        Ok(report) => report,
        Err(err) => {
            log(
                Level::Fatal,
                Domain::System,
                "render_failed",
                obj(&[("msg", v_str(&format!("{:#}", err)))]),
            );
            return Err(err);
        }
    };

    page.write_to(Path::new(&cfg.output_path))?;
    info(
        Domain::System,
        "page_written",
        obj(&[
            ("path", v_str(&cfg.output_path)),
            ("features", v_num(report.features as f64)),
            ("markers", v_num(report.markers as f64)),
            ("skipped", v_num(report.skipped as f64)),
            ("legend_entries", v_num(report.legend_entries as f64)),
            ("feed_sha256", v_str(&report.feed_sha256)),
        ]),
    );
    Ok(())
}
