use crate::config::DisplaySettings;

use super::dates::{format_event_date, truncate_display};
use super::models::{Section, SectionPage};
use super::rating::{RatingChange, RatingValue};

/// Column headers in display order
pub const COLUMNS: [&str; 7] = ["Date", "Tournament", "Section", "Type", "Before", "After", "Change"];

/// What a sections page turned into
#[derive(Debug, Clone, PartialEq)]
pub enum RatingHistory {
    /// The response had no `items` key
    NoData,
    /// `items` was present but empty
    NoSections,
    Sections(RatingReport),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatingReport {
    pub summary: RatingSummary,
    pub rows: Vec<SectionRow>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingSummary {
    pub current_rating: RatingValue,
    pub total_sections: usize,
}

/// One display row, already formatted and truncated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRow {
    pub date: String,
    pub tournament: String,
    pub section: String,
    pub rating_type: String,
    pub before: RatingValue,
    pub after: RatingValue,
    pub change: RatingChange,
}

impl RatingHistory {
    pub fn from_page(page: &SectionPage, display: &DisplaySettings) -> Self {
        match page.sections() {
            None => RatingHistory::NoData,
            Some([]) => RatingHistory::NoSections,
            Some(sections) => RatingHistory::Sections(RatingReport::from_sections(sections, display)),
        }
    }
}

impl RatingReport {
    /// Rows keep the order the API returned them in.
    pub fn from_sections(sections: &[Section], display: &DisplaySettings) -> Self {
        Self {
            summary: RatingSummary::from_sections(sections),
            rows: sections
                .iter()
                .map(|section| SectionRow::from_section(section, display))
                .collect(),
        }
    }
}

impl RatingSummary {
    /// Current rating comes from the first (most recent) section.
    pub fn from_sections(sections: &[Section]) -> Self {
        let current_rating = sections
            .first()
            .and_then(|s| s.post_rating().or_else(|| s.pre_rating()))
            .map_or(RatingValue::NotAvailable, RatingValue::Recorded);

        Self {
            current_rating,
            total_sections: sections.len(),
        }
    }
}

impl SectionRow {
    pub fn from_section(section: &Section, display: &DisplaySettings) -> Self {
        let before = section.pre_rating();
        let after = section.post_rating();

        Self {
            date: format_event_date(section.event_date()),
            tournament: truncate_display(section.event_name(), display.event_name_width),
            section: truncate_display(section.section_name(), display.section_name_width),
            rating_type: section.rating_type().to_string(),
            before: RatingValue::before(before),
            after: RatingValue::after(after),
            change: RatingChange::between(before, after),
        }
    }

    pub fn cells(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.tournament.clone(),
            self.section.clone(),
            self.rating_type.clone(),
            self.before.to_string(),
            self.after.to_string(),
            self.change.to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(json: &str) -> SectionPage {
        serde_json::from_str(json).unwrap()
    }

    fn report(json: &str) -> RatingReport {
        match RatingHistory::from_page(&page(json), &DisplaySettings::default()) {
            RatingHistory::Sections(report) => report,
            other => panic!("expected sections, got {:?}", other),
        }
    }

    #[test]
    fn test_single_section_row_and_summary() {
        let report = report(
            r#"{"items": [{
                "ratingRecords": [{"preRating": 1500, "postRating": 1520}],
                "ratingSystem": "R",
                "sectionName": "Open",
                "event": {"name": "Spring Open", "endDate": "2024-03-10T00:00:00Z"}
            }]}"#,
        );

        assert_eq!(
            report.rows[0].cells(),
            vec!["2024-03-10", "Spring Open", "Open", "R", "1500", "1520", "+20"]
        );
        assert_eq!(report.summary.current_rating, RatingValue::Recorded(1520));
        assert_eq!(report.summary.total_sections, 1);
    }

    #[test]
    fn test_empty_rating_records() {
        let report = report(r#"{"items": [{"ratingRecords": [], "sectionName": "U1600"}]}"#);
        let row = &report.rows[0];

        assert_eq!(row.before, RatingValue::NotAvailable);
        assert_eq!(row.after, RatingValue::Pending);
        assert_eq!(row.change, RatingChange::Pending);
        assert_eq!(row.rating_type, "R");
        assert_eq!(row.date, "N/A");
        assert_eq!(report.summary.current_rating, RatingValue::NotAvailable);
    }

    #[test]
    fn test_current_rating_falls_back_to_pre_rating() {
        let report = report(
            r#"{"items": [
                {"ratingRecords": [{"preRating": 1710, "postRating": null}]},
                {"ratingRecords": [{"preRating": 1650, "postRating": 1710}]}
            ]}"#,
        );

        assert_eq!(report.summary.current_rating, RatingValue::Recorded(1710));
        assert_eq!(report.summary.total_sections, 2);
        assert_eq!(report.rows[0].change.to_string(), "Pending");
        assert_eq!(report.rows[1].change.to_string(), "+60");
    }

    #[test]
    fn test_rows_keep_source_order() {
        let report = report(
            r#"{"items": [
                {"event": {"name": "B", "endDate": "2023-01-01"}},
                {"event": {"name": "A", "endDate": "2024-01-01"}}
            ]}"#,
        );

        let names: Vec<&str> = report.rows.iter().map(|r| r.tournament.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_long_names_are_truncated() {
        let report = report(
            r#"{"items": [{
                "sectionName": "Championship Under 2200 Reserve",
                "event": {"name": "Greater Metropolitan Winter Chess Festival 2024"}
            }]}"#,
        );
        let row = &report.rows[0];

        assert_eq!(row.tournament, "Greater Metropolitan Winter Ch");
        assert_eq!(row.tournament.chars().count(), 30);
        assert_eq!(row.section, "Championship Under 2");
        assert_eq!(row.section.chars().count(), 20);
    }

    #[test]
    fn test_missing_and_empty_items() {
        let display = DisplaySettings::default();
        assert_eq!(RatingHistory::from_page(&page("{}"), &display), RatingHistory::NoData);
        assert_eq!(
            RatingHistory::from_page(&page(r#"{"items": []}"#), &display),
            RatingHistory::NoSections
        );
        assert_eq!(
            RatingHistory::from_page(&page(r#"{"items": null}"#), &display),
            RatingHistory::NoSections
        );
    }

    #[test]
    fn test_fractional_ratings_still_render() {
        let report = report(
            r#"{"items": [{"ratingRecords": [{"preRating": 1500.0, "postRating": 1487.0}]}]}"#,
        );

        assert_eq!(report.rows[0].before, RatingValue::Recorded(1500));
        assert_eq!(report.rows[0].change.to_string(), "-13");
    }

    #[test]
    fn test_malformed_date_passes_through() {
        let report = report(r#"{"items": [{"event": {"startDate": "TBD"}}]}"#);
        assert_eq!(report.rows[0].date, "TBD");
    }
}
