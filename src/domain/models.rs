use serde::{Deserialize, Deserializer};
use serde_json::Value;

// --- API Response Structures ---

/// One page of `/members/{id}/sections`. `items` is `None` only when the key
/// is absent; `"items": null` reads as an empty list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionPage {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Option<Vec<Section>>,
}

/// A tournament section the member played in
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default)]
    pub rating_records: Option<Vec<RatingRecord>>,
    #[serde(default)]
    pub rating_system: Option<String>,
    #[serde(default)]
    pub section_name: Option<String>,
    #[serde(default)]
    pub event: Option<EventInfo>,
}

/// Ratings that are not a number in `i32` range read as missing, so one odd
/// value never rejects the whole page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRecord {
    #[serde(default, deserialize_with = "lenient_rating")]
    pub pre_rating: Option<i32>,
    #[serde(default, deserialize_with = "lenient_rating")]
    pub post_rating: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl SectionPage {
    pub fn sections(&self) -> Option<&[Section]> {
        self.items.as_deref()
    }
}

impl Section {
    /// Only the first rating record of a section is shown.
    pub fn first_record(&self) -> Option<&RatingRecord> {
        self.rating_records.as_ref().and_then(|records| records.first())
    }

    pub fn pre_rating(&self) -> Option<i32> {
        self.first_record().and_then(|r| r.pre_rating)
    }

    pub fn post_rating(&self) -> Option<i32> {
        self.first_record().and_then(|r| r.post_rating)
    }

    pub fn rating_type(&self) -> &str {
        self.rating_system.as_deref().unwrap_or("R")
    }

    pub fn section_name(&self) -> &str {
        self.section_name.as_deref().unwrap_or("N/A")
    }

    pub fn event_name(&self) -> &str {
        self.event
            .as_ref()
            .and_then(|e| e.name.as_deref())
            .unwrap_or("N/A")
    }

    pub fn event_date(&self) -> &str {
        self.event.as_ref().map(EventInfo::display_date).unwrap_or("")
    }
}

impl EventInfo {
    /// End date, falling back to start date, falling back to empty
    pub fn display_date(&self) -> &str {
        non_empty(&self.end_date)
            .or_else(|| non_empty(&self.start_date))
            .unwrap_or("")
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Option<Vec<Section>>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<Section>>::deserialize(deserializer)?;
    Ok(Some(items.unwrap_or_default()))
}

fn lenient_rating<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(rating_from_value))
}

fn rating_from_value(value: &Value) -> Option<i32> {
    let rating = match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.round() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    let rating = rating.and_then(|r| i32::try_from(r).ok());
    if rating.is_none() {
        log::debug!("Ignoring unusable rating value {}", value);
    }
    rating
}
