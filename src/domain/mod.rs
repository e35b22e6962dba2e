pub mod dates;
pub mod models;
pub mod rating;
pub mod report;

pub use dates::{format_event_date, parse_event_date, truncate_display};
pub use models::{EventInfo, RatingRecord, Section, SectionPage};
pub use rating::{RatingChange, RatingValue};
pub use report::{RatingHistory, RatingReport, RatingSummary, SectionRow};
