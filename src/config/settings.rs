pub const DEFAULT_API_URL: &str = "https://ratings-api.uschess.org";
pub const DEFAULT_MEMBER_ID: &str = "17323973";
pub const DEFAULT_PAGE_SIZE: u32 = 50;

pub struct ApiSettings {
    pub base_url: String,
    pub user_agent: &'static str,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            user_agent: "USChessRatingTracker/0.1",
        }
    }
}

pub struct DisplaySettings {
    pub event_name_width: usize,
    pub section_name_width: usize,
    pub banner_width: usize,
    pub colorize: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            event_name_width: 30,
            section_name_width: 20,
            banner_width: 80,
            colorize: true,
        }
    }
}

pub struct AppConfig {
    pub api: ApiSettings,
    pub display: DisplaySettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            api: ApiSettings::default(),
            display: DisplaySettings::default(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    pub fn without_color(mut self) -> Self {
        self.display.colorize = false;
        self
    }
}
