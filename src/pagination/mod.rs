mod config;
mod urls;

pub use config::PageRequest;
pub use urls::build_sections_url;
