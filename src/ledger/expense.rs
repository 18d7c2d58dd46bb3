use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Category applied when the user supplies none.
pub const DEFAULT_CATEGORY: &str = "Autre";

/// A single recorded expense. Field names match the persisted JSON layout,
/// which stores the date as an ISO-8601 string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub date: NaiveDateTime,
    pub description: String,
    pub amount: f64,
    pub category: String,
}

impl Expense {
    /// Builds a fully-validated record. The description is trimmed and a
    /// blank category falls back to [`DEFAULT_CATEGORY`].
    pub fn new(
        description: &str,
        amount: f64,
        category: Option<&str>,
        date: NaiveDateTime,
    ) -> Self {
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY);
        Self {
            date,
            description: description.trim().to_string(),
            amount,
            category: category.to_string(),
        }
    }

    /// ISO `YYYY-MM` key of the record's date, used by month filtering.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn blank_category_falls_back_to_sentinel() {
        let expense = Expense::new("Taxi", 1500.0, Some("   "), noon(2025, 4, 1));
        assert_eq!(expense.category, DEFAULT_CATEGORY);
        let expense = Expense::new("Taxi", 1500.0, None, noon(2025, 4, 1));
        assert_eq!(expense.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn description_and_category_are_trimmed() {
        let expense = Expense::new("  Taxi aéroport ", -20.5, Some(" Transport "), noon(2025, 4, 1));
        assert_eq!(expense.description, "Taxi aéroport");
        assert_eq!(expense.category, "Transport");
        assert_eq!(expense.amount, -20.5);
    }

    #[test]
    fn serialized_date_is_iso_8601() {
        let expense = Expense::new("Taxi", 1500.0, None, noon(2025, 4, 1));
        let json = serde_json::to_string(&expense).unwrap();
        assert!(json.contains("\"2025-04-01T12:00:00\""), "got {json}");
    }

    #[test]
    fn month_key_uses_iso_prefix() {
        let expense = Expense::new("Taxi", 1500.0, None, noon(2025, 4, 30));
        assert_eq!(expense.month_key(), "2025-04");
    }
}
