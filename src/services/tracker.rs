use std::io::Write;

use anyhow::{Context, Result};
use log::info;

use crate::api::RatingsClient;
use crate::config::settings::AppConfig;
use crate::display::Presenter;
use crate::domain::RatingHistory;
use crate::pagination::PageRequest;

/// How a run ended. Every variant is a normal completion.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackerOutcome {
    FetchFailed,
    Displayed(RatingHistory),
}

/// Fetch, transform and print one page of a member's sections
pub struct TrackerService {
    config: AppConfig,
    client: RatingsClient,
}

impl TrackerService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let client = RatingsClient::new(&config.api)?;
        Ok(Self { config, client })
    }

    pub async fn run<W: Write>(
        &self,
        member_id: &str,
        page: PageRequest,
        out: W,
    ) -> Result<TrackerOutcome> {
        let mut presenter = Presenter::new(out, &self.config.display);
        presenter.intro(member_id).context("Failed to write output")?;

        let Some(sections) = self.client.try_fetch_member_sections(member_id, page).await else {
            presenter.fetch_failed().context("Failed to write output")?;
            return Ok(TrackerOutcome::FetchFailed);
        };

        let history = RatingHistory::from_page(&sections, &self.config.display);
        self.log_history(&history);
        presenter.history(&history).context("Failed to write output")?;

        Ok(TrackerOutcome::Displayed(history))
    }

    fn log_history(&self, history: &RatingHistory) {
        match history {
            RatingHistory::NoData => info!("Response had no items"),
            RatingHistory::NoSections => info!("Member has no rated sections"),
            RatingHistory::Sections(report) => info!("Rendering {} sections", report.rows.len()),
        }
    }
}
