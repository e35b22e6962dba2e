use clap::Parser;

use crate::config::settings::{DEFAULT_API_URL, DEFAULT_MEMBER_ID, DEFAULT_PAGE_SIZE};
use crate::pagination::PageRequest;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    author,
    version,
    about = "US Chess Rating Tracker - Fetches and displays tournament sections with real-time rating changes"
)]
pub struct Cli {
    /// US Chess member ID
    #[arg(short, long, default_value = DEFAULT_MEMBER_ID)]
    pub member_id: String,

    /// Number of sections to fetch
    #[arg(short, long, default_value_t = DEFAULT_PAGE_SIZE, value_parser = clap::value_parser!(u32).range(1..))]
    pub size: u32,

    /// Number of sections to skip
    #[arg(short, long, default_value_t = 0)]
    pub offset: u32,

    /// Base URL of the ratings API
    #[arg(long, env = "USCHESS_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Disable colored output
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_color: bool,
}

impl Cli {
    pub fn page(&self) -> PageRequest {
        PageRequest::new()
            .with_offset(self.offset)
            .with_size(self.size)
    }
}
