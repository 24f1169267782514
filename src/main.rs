use anyhow::Result;
use log2::*;
use std::time::Instant;
use url::Url;

use linkrace::config::Config;
use linkrace::pathfinder::print_path;

/// Indicates start time of the program, lazily initialized
pub static START_TIME: once_cell::sync::Lazy<Instant> = once_cell::sync::Lazy::new(Instant::now);

#[tokio::main]
async fn main() -> Result<()> {
    let _ = *START_TIME;
    let cfg = Config::new();
    cfg.validate()?;
    let _log2 = stdout()
        .module(true)
        .module_with_line(true)
        .module_filter(|module| module.starts_with("linkrace")) // include only modules having this pattern
        .compress(false)
        .level(cfg.log_level.to_string())
        .start();

    let start_url = Url::parse(&cfg.start_url)?;
    let target_url = Url::parse(&cfg.target_url)?;

    let path = linkrace::find_path(
        start_url.clone(),
        target_url.clone(),
        cfg.concurrency,
        cfg.keywords,
    )
    .await?;

    if path.is_empty() {
        info!("No path found between {} and {}", start_url, target_url);
    } else {
        info!("Path found!");
        print_path(&path);
        info!("Number of links between pages: {}", path.len() - 1);
    }

    info!("Finished in {:.2?}", START_TIME.elapsed());

    Ok(())
}
