use anyhow::Result;
use log::{debug, error, info};

use crate::config::ApiSettings;
use crate::domain::SectionPage;
use crate::errors::FetchError;
use crate::http::HttpClient;
use crate::pagination::{PageRequest, build_sections_url};

/// US Chess ratings API client
pub struct RatingsClient {
    client: HttpClient,
    base_url: String,
}

impl RatingsClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = HttpClient::new(settings.user_agent)?;
        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
        })
    }

    /// Fetch one page of a member's rated sections
    pub async fn fetch_member_sections(
        &self,
        member_id: &str,
        page: PageRequest,
    ) -> Result<SectionPage, FetchError> {
        let url = self.build_sections_url(member_id, page);
        info!("Fetching sections for member {} from {}", member_id, url);

        let response = self.client.get(&url).await?;

        if !self.is_success(&response) {
            return Err(FetchError::Status {
                url,
                status: response.status(),
            });
        }

        let text = response.text().await.map_err(|source| FetchError::Body {
            url: url.clone(),
            source,
        })?;

        let sections = Self::parse_sections(&url, &text)?;
        debug!(
            "Received {} sections for member {}",
            sections.items.as_ref().map_or(0, Vec::len),
            member_id
        );
        Ok(sections)
    }

    /// Same as [`Self::fetch_member_sections`], but the error is logged and
    /// dropped. `None` means the fetch failed.
    pub async fn try_fetch_member_sections(
        &self,
        member_id: &str,
        page: PageRequest,
    ) -> Option<SectionPage> {
        match self.fetch_member_sections(member_id, page).await {
            Ok(sections) => Some(sections),
            Err(e) => {
                error!("Error fetching data: {}", e);
                None
            }
        }
    }

    // --- Helper Methods ---

    fn build_sections_url(&self, member_id: &str, page: PageRequest) -> String {
        build_sections_url(&self.base_url, member_id, page)
    }

    fn is_success(&self, response: &reqwest::Response) -> bool {
        response.status().is_success()
    }

    fn parse_sections(url: &str, text: &str) -> Result<SectionPage, FetchError> {
        serde_json::from_str(text).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
