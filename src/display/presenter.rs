use std::io::{self, Write};

use colored::{ColoredString, Colorize};

use super::table::{Align, TextTable};
use crate::config::DisplaySettings;
use crate::domain::report::COLUMNS;
use crate::domain::{RatingHistory, RatingReport, RatingSummary, SectionRow};

const TITLE: &str = "US Chess Rating Tracker";
const BANNER_TITLE: &str = "US CHESS RATING TRACKER";
const SECTIONS_TITLE: &str = "TOURNAMENT SECTIONS (Most Recent First)";
const INTRO_RULE_WIDTH: usize = 40;

pub const NO_DATA_MESSAGE: &str = "No data available";
pub const NO_SECTIONS_MESSAGE: &str = "No tournament sections found";
pub const FETCH_FAILED_MESSAGE: &str =
    "Failed to fetch data. Please check your internet connection and member ID.";

/// Writes the tracker output. Formatting only, no decisions beyond which
/// block to print.
pub struct Presenter<W: Write> {
    out: W,
    banner_width: usize,
    colorize: bool,
}

impl<W: Write> Presenter<W> {
    pub fn new(out: W, display: &DisplaySettings) -> Self {
        Self {
            out,
            banner_width: display.banner_width,
            colorize: display.colorize,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn intro(&mut self, member_id: &str) -> io::Result<()> {
        let title = self.styled(TITLE, |t| t.bold());
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "{}", "-".repeat(INTRO_RULE_WIDTH))?;
        writeln!(self.out, "\nFetching data for member {}...", member_id)
    }

    pub fn history(&mut self, history: &RatingHistory) -> io::Result<()> {
        match history {
            RatingHistory::NoData => self.message(NO_DATA_MESSAGE),
            RatingHistory::NoSections => self.message(NO_SECTIONS_MESSAGE),
            RatingHistory::Sections(report) => self.report(report),
        }
    }

    pub fn fetch_failed(&mut self) -> io::Result<()> {
        let text = self.styled(FETCH_FAILED_MESSAGE, |t| t.red());
        writeln!(self.out, "{}", text)
    }

    fn report(&mut self, report: &RatingReport) -> io::Result<()> {
        self.banner(BANNER_TITLE)?;
        self.summary(&report.summary)?;

        self.banner(SECTIONS_TITLE)?;
        writeln!(self.out)?;
        writeln!(self.out, "{}", build_table(&report.rows).render())?;
        writeln!(self.out)
    }

    fn summary(&mut self, summary: &RatingSummary) -> io::Result<()> {
        let rating = self.styled(&summary.current_rating.to_string(), |t| t.green().bold());
        writeln!(self.out, "\nCurrent Rating: {}", rating)?;
        writeln!(self.out, "Total Sections: {}", summary.total_sections)
    }

    fn banner(&mut self, title: &str) -> io::Result<()> {
        let rule = "=".repeat(self.banner_width);
        let title = self.styled(title, |t| t.bold().cyan());
        writeln!(self.out, "\n{}", rule)?;
        writeln!(self.out, "{}", title)?;
        writeln!(self.out, "{}", rule)
    }

    fn message(&mut self, text: &str) -> io::Result<()> {
        let text = self.styled(text, |t| t.yellow());
        writeln!(self.out, "{}", text)
    }

    fn styled(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.colorize {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Before, After and Change are right-aligned
fn build_table(rows: &[SectionRow]) -> TextTable {
    let mut table = TextTable::new(&COLUMNS)
        .align(4, Align::Right)
        .align(5, Align::Right)
        .align(6, Align::Right);

    for row in rows {
        table.add_row(row.cells());
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RatingChange, RatingValue};

    fn plain() -> DisplaySettings {
        DisplaySettings {
            colorize: false,
            ..DisplaySettings::default()
        }
    }

    fn render(history: &RatingHistory) -> String {
        let mut presenter = Presenter::new(Vec::new(), &plain());
        presenter.history(history).unwrap();
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    fn sample_report() -> RatingReport {
        RatingReport {
            summary: RatingSummary {
                current_rating: RatingValue::Recorded(1520),
                total_sections: 1,
            },
            rows: vec![SectionRow {
                date: "2024-03-10".to_string(),
                tournament: "Spring Open".to_string(),
                section: "Open".to_string(),
                rating_type: "R".to_string(),
                before: RatingValue::Recorded(1500),
                after: RatingValue::Recorded(1520),
                change: RatingChange::Delta(20),
            }],
        }
    }

    #[test]
    fn test_report_output() {
        let output = render(&RatingHistory::Sections(sample_report()));

        assert!(output.contains("US CHESS RATING TRACKER"));
        assert!(output.contains("Current Rating: 1520"));
        assert!(output.contains("Total Sections: 1"));
        assert!(output.contains("TOURNAMENT SECTIONS (Most Recent First)"));
        assert!(output.contains(&"=".repeat(80)));
        assert!(output.contains(
            "| Date       | Tournament  | Section | Type | Before | After | Change |"
        ));
        assert!(output.contains(
            "| 2024-03-10 | Spring Open | Open    | R    |   1500 |  1520 |    +20 |"
        ));
    }

    #[test]
    fn test_no_sections_prints_message_only() {
        let output = render(&RatingHistory::NoSections);

        assert_eq!(output, "No tournament sections found\n");
    }

    #[test]
    fn test_no_data_prints_message_only() {
        let output = render(&RatingHistory::NoData);

        assert_eq!(output, "No data available\n");
        assert!(!output.contains("Current Rating"));
    }

    #[test]
    fn test_intro_and_failure() {
        let mut presenter = Presenter::new(Vec::new(), &plain());
        presenter.intro("17323973").unwrap();
        presenter.fetch_failed().unwrap();
        let output = String::from_utf8(presenter.into_inner()).unwrap();

        assert!(output.starts_with("US Chess Rating Tracker\n----------------------------------------\n"));
        assert!(output.contains("Fetching data for member 17323973..."));
        assert!(output.ends_with(&format!("{}\n", FETCH_FAILED_MESSAGE)));
        assert!(!output.contains('+'));
    }
}
