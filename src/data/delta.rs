use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::model::{SeriesPoint, StateRecord};

/// Order in which a region's records are folded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoldOrder {
    /// Stable sort by date first, so interleaved or unsorted input still
    /// yields true day-over-day deltas.
    #[default]
    Chronological,
    /// Fold in input order. Out-of-order rows produce skewed deltas.
    Insertion,
}

/// The three point sequences derived from one region, in fold order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DerivedPoints {
    pub new_cases: Vec<SeriesPoint>,
    pub totals: Vec<SeriesPoint>,
    pub deaths: Vec<SeriesPoint>,
}

/// Turns cumulative counts into per-day deltas.
#[derive(Debug, Clone, Copy)]
pub struct DeltaTransformer {
    pub cutoff: NaiveDate,
    pub order: FoldOrder,
}

impl DeltaTransformer {
    pub fn new(cutoff: NaiveDate, order: FoldOrder) -> Self {
        Self { cutoff, order }
    }

    /// Single left-to-right fold with a running floor starting at 0.
    ///
    /// Records before the cutoff still move the floor but emit nothing.
    pub fn derive(&self, records: &[StateRecord]) -> DerivedPoints {
        let mut ordered: Vec<&StateRecord> = records.iter().collect();
        if self.order == FoldOrder::Chronological {
            ordered.sort_by_key(|r| r.date);
        }

        let mut out = DerivedPoints::default();
        let mut floor: i64 = 0;
        for rec in ordered {
            // Both operands are non-negative, so the difference cannot overflow.
            let total = rec.total_cases;
            let per_day = total - floor;
            floor = total;

            if rec.date < self.cutoff {
                continue;
            }

            out.new_cases.push(SeriesPoint::new(rec.date, per_day));
            out.totals.push(SeriesPoint::new(rec.date, total));
            out.deaths.push(SeriesPoint::new(rec.date, rec.deaths));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 3, d).unwrap()
    }

    fn rec(d: u32, cases: i64, deaths: i64) -> StateRecord {
        StateRecord {
            date: day(d),
            region: "Ohio".to_string(),
            total_cases: cases,
            deaths,
        }
    }

    fn values(points: &[SeriesPoint]) -> Vec<i64> {
        points.iter().map(|p| p.value).collect()
    }

    #[test]
    fn deltas_from_cumulative_totals() {
        let records = vec![rec(10, 0, 0), rec(11, 5, 0), rec(12, 5, 1), rec(13, 12, 1)];
        let out = DeltaTransformer::new(day(7), FoldOrder::Chronological).derive(&records);
        assert_eq!(values(&out.new_cases), vec![0, 5, 0, 7]);
        assert_eq!(values(&out.totals), vec![0, 5, 5, 12]);
        assert_eq!(values(&out.deaths), vec![0, 0, 1, 1]);
    }

    #[test]
    fn first_record_after_cutoff_uses_zero_floor() {
        let out = DeltaTransformer::new(day(7), FoldOrder::Chronological).derive(&[rec(8, 9, 0)]);
        assert_eq!(values(&out.new_cases), vec![9]);
    }

    #[test]
    fn pre_cutoff_records_advance_floor_only() {
        let records = vec![rec(5, 4, 0), rec(6, 6, 0), rec(7, 10, 1)];
        let out = DeltaTransformer::new(day(7), FoldOrder::Chronological).derive(&records);
        assert_eq!(values(&out.new_cases), vec![4]);
        assert_eq!(out.totals.len(), 1);
        assert_eq!(out.deaths.len(), 1);
        assert_eq!(out.new_cases[0].label, "2020-03-07");
    }

    #[test]
    fn corrections_yield_negative_deltas() {
        let records = vec![rec(8, 10, 0), rec(9, 7, 0)];
        let out = DeltaTransformer::new(day(7), FoldOrder::Chronological).derive(&records);
        assert_eq!(values(&out.new_cases), vec![10, -3]);
    }

    #[test]
    fn largest_counts_fold_without_overflow() {
        let records = vec![rec(8, i64::MAX, 0), rec(9, 0, i64::MAX)];
        let out = DeltaTransformer::new(day(7), FoldOrder::Chronological).derive(&records);
        assert_eq!(values(&out.new_cases), vec![i64::MAX, -i64::MAX]);
        assert_eq!(values(&out.deaths), vec![0, i64::MAX]);
    }

    #[test]
    fn chronological_fold_sorts_before_folding() {
        let records = vec![rec(9, 12, 0), rec(8, 5, 0)];
        let out = DeltaTransformer::new(day(7), FoldOrder::Chronological).derive(&records);
        assert_eq!(values(&out.new_cases), vec![5, 7]);
    }

    #[test]
    fn insertion_fold_keeps_input_order() {
        let records = vec![rec(9, 12, 0), rec(8, 5, 0)];
        let out = DeltaTransformer::new(day(7), FoldOrder::Insertion).derive(&records);
        assert_eq!(values(&out.new_cases), vec![12, -7]);
        assert_eq!(out.new_cases[0].label, "2020-03-09");
    }
}
