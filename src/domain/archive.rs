// src/domain/archive.rs
use crate::domain::article::YearMonth;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Number of articles published in one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArchiveBucket {
    pub period: YearMonth,
    pub count: u64,
}

impl ArchiveBucket {
    pub fn month_label(&self) -> &'static str {
        self.period.month_name()
    }
}

/// Group publish dates by (year, month), newest month first. Stores that
/// can group on their side return the same shape from
/// `ArticleReadRepository::archive_buckets`.
pub fn aggregate<I>(publish_dates: I) -> Vec<ArchiveBucket>
where
    I: IntoIterator<Item = DateTime<Utc>>,
{
    let mut counts: BTreeMap<YearMonth, u64> = BTreeMap::new();
    for date in publish_dates {
        *counts.entry(YearMonth::of(&date)).or_default() += 1;
    }

    counts
        .into_iter()
        .rev()
        .map(|(period, count)| ArchiveBucket { period, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 8, 30, 0).unwrap()
    }

    #[test]
    fn groups_by_month() {
        let buckets = aggregate(vec![date(2023, 1, 5), date(2023, 1, 20), date(2023, 2, 1)]);

        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].period, YearMonth::new(2023, 2).unwrap());
        assert_eq!(buckets[0].count, 1);
        assert_eq!(buckets[0].month_label(), "February");
        assert_eq!(buckets[1].period, YearMonth::new(2023, 1).unwrap());
        assert_eq!(buckets[1].count, 2);
        assert_eq!(buckets[1].month_label(), "January");
    }

    #[test]
    fn orders_descending_across_years() {
        let buckets = aggregate(vec![date(2022, 12, 31), date(2024, 3, 1), date(2023, 6, 15)]);
        let periods: Vec<(i32, u32)> = buckets
            .iter()
            .map(|b| (b.period.year(), b.period.month()))
            .collect();
        assert_eq!(periods, vec![(2024, 3), (2023, 6), (2022, 12)]);
    }

    #[test]
    fn empty_input_yields_no_buckets() {
        assert!(aggregate(Vec::new()).is_empty());
    }
}
