use std::fmt;

/// A rating cell. A missing pre-rating and a missing post-rating mean
/// different things, so each has its own variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingValue {
    Recorded(i32),
    /// No rating was recorded for the player
    NotAvailable,
    /// The rating authority has not posted the rating yet
    Pending,
}

impl RatingValue {
    pub fn before(rating: Option<i32>) -> Self {
        rating.map_or(RatingValue::NotAvailable, RatingValue::Recorded)
    }

    pub fn after(rating: Option<i32>) -> Self {
        rating.map_or(RatingValue::Pending, RatingValue::Recorded)
    }
}

impl fmt::Display for RatingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingValue::Recorded(rating) => write!(f, "{}", rating),
            RatingValue::NotAvailable => f.write_str("N/A"),
            RatingValue::Pending => f.write_str("Pending"),
        }
    }
}

/// Signed post-minus-pre difference, computed in `i64` so it cannot overflow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingChange {
    Delta(i64),
    Pending,
}

impl RatingChange {
    pub fn between(before: Option<i32>, after: Option<i32>) -> Self {
        match (before, after) {
            (Some(before), Some(after)) => {
                RatingChange::Delta(i64::from(after) - i64::from(before))
            }
            _ => RatingChange::Pending,
        }
    }
}

impl fmt::Display for RatingChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingChange::Delta(delta) if *delta > 0 => write!(f, "+{}", delta),
            RatingChange::Delta(delta) => write!(f, "{}", delta),
            RatingChange::Pending => f.write_str("Pending"),
        }
    }
}
