use std::path::Path;

use chrono::Local;
use tracing::{info, warn};

use crate::config::Config;
use crate::listing;
use crate::ranking;
use crate::report::csv::CsvReport;
use crate::scoring;

pub struct ReportService {
    cfg: Config,
}

impl ReportService {
    pub fn new(cfg: Config) -> Self {
        Self { cfg }
    }

    /// Runs the whole pipeline once: saved page -> records -> scores ->
    /// ranked CSV. A missing page or a page with no cards is reported and
    /// skipped, not treated as an error; no output file is touched then.
    pub fn run(&self) -> anyhow::Result<()> {
        let today = Local::now().date_naive();

        if !Path::new(&self.cfg.html_path).exists() {
            warn!(path = %self.cfg.html_path, "Saved search page not found");
            info!(
                url = %self.cfg.search_url,
                "Open the search in a browser and save the page to the path above, then rerun"
            );
            return Ok(());
        }

        let html = std::fs::read_to_string(&self.cfg.html_path)?;
        let mut records = listing::extract_records(&html, &self.cfg.card_class, today)?;
        if records.is_empty() {
            warn!(card_class = %self.cfg.card_class, "No listing cards found");
            return Ok(());
        }
        info!(count = records.len(), "Extracted listings");

        scoring::score_records(&mut records, &self.cfg);
        let ranked = ranking::rank_and_filter(records, today);

        let written = CsvReport::new(&self.cfg.csv_path).write(&ranked)?;
        info!(written, path = %self.cfg.csv_path, "Report saved");
        Ok(())
    }
}
