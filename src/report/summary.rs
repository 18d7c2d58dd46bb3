use crate::ledger::Expense;

/// Maximum number of records shown by `liste` and report replies.
pub const RECENT_LIMIT: usize = 5;

/// Aggregate view over a (possibly filtered) set of records.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Arithmetic sum of amounts, no rounding.
    pub total: f64,
    /// Last [`RECENT_LIMIT`] records in insertion order, not re-sorted.
    pub recent: Vec<Expense>,
    /// 1-based position of the first recent record within the input set.
    pub offset: usize,
}

/// Totals the input and keeps the bounded most-recent view.
pub fn summarize(records: &[Expense]) -> Summary {
    let total = records.iter().map(|e| e.amount).sum();
    let skip = records.len().saturating_sub(RECENT_LIMIT);
    Summary {
        total,
        recent: records[skip..].to_vec(),
        offset: skip + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(description: &str, amount: f64, day: u32) -> Expense {
        let date = NaiveDate::from_ymd_opt(2025, 4, day)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        Expense::new(description, amount, None, date)
    }

    #[test]
    fn empty_input_yields_zero_total() {
        let summary = summarize(&[]);
        assert_eq!(summary.total, 0.0);
        assert!(summary.recent.is_empty());
        assert_eq!(summary.offset, 1);
    }

    #[test]
    fn total_sums_signed_amounts() {
        let records = vec![expense("a", 10.5, 1), expense("b", -3.5, 2)];
        let summary = summarize(&records);
        assert_eq!(summary.total, 7.0);
    }

    #[test]
    fn recent_is_last_five_in_insertion_order() {
        // Deliberately out of chronological order: insertion order wins.
        let records = vec![
            expense("a", 1.0, 20),
            expense("b", 1.0, 3),
            expense("c", 1.0, 15),
            expense("d", 1.0, 1),
            expense("e", 1.0, 9),
            expense("f", 1.0, 2),
            expense("g", 1.0, 28),
        ];
        let summary = summarize(&records);
        let names: Vec<_> = summary.recent.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(names, ["c", "d", "e", "f", "g"]);
        assert_eq!(summary.offset, 3);
    }

    #[test]
    fn short_input_is_kept_whole() {
        let records = vec![expense("a", 1.0, 1), expense("b", 2.0, 2)];
        let summary = summarize(&records);
        assert_eq!(summary.recent.len(), 2);
        assert_eq!(summary.offset, 1);
    }
}
