use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Log levels as defined in log2 crate
#[derive(Debug, Serialize, Deserialize, Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Program arguments. The crawl itself is configured through `CrawlConfig`,
/// which is built from these in main.
#[derive(Parser, Debug, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Starting Wikipedia URL
    #[arg(short, long)]
    pub start_url: String,
    /// Target Wikipedia URL to race towards
    #[arg(long)]
    pub target_url: String,
    /// Number of concurrent workers (also bounds simultaneous fetches)
    #[arg(short, long, default_value = "25")]
    pub concurrency: usize,
    /// Keyword steering the crawl; repeat for an ordered list, most
    /// important first
    #[arg(short = 'k', long = "keyword")]
    pub keywords: Vec<String>,
    /// Logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", value_enum)]
    pub log_level: LogLevel,
}

impl Config {
    pub fn new() -> Self {
        Self::parse()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.concurrency == 0 {
            anyhow::bail!("concurrency must be greater than 0");
        }
        Ok(())
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{}", s)
    }
}
