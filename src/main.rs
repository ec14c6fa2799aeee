mod config;
mod listing;
mod ranking;
mod report;
mod scoring;
mod service;

use config::Config;
use service::ReportService;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cfg = Config::from_env()?;
    ReportService::new(cfg).run()
}
