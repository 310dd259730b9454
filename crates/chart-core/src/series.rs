// File: crates/chart-core/src/series.rs
// Summary: Named series derived from records, grouped in first-seen order.

use std::collections::HashMap;

use crate::record::Record;

/// Records sharing one `name`, in input order. Never empty.
#[derive(Clone, Debug, PartialEq)]
pub struct Series<'a> {
    pub name: &'a str,
    pub records: Vec<&'a Record>,
}

impl<'a> Series<'a> {
    /// (time, amount) pairs in record order.
    pub fn points(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.records.iter().map(|r| (r.time, r.amount))
    }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

/// Partition `records` by name. Series come out in the order their name first
/// appears; records inside a series keep their relative order.
pub fn group_by_name(records: &[Record]) -> Vec<Series<'_>> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut out: Vec<Series<'_>> = Vec::new();
    for r in records {
        let slot = *index.entry(r.name.as_str()).or_insert_with(|| {
            out.push(Series { name: r.name.as_str(), records: Vec::new() });
            out.len() - 1
        });
        out[slot].records.push(r);
    }
    out
}

/// Min/max of all record times, `None` when empty.
pub fn time_extent(records: &[Record]) -> Option<(i64, i64)> {
    let mut it = records.iter().map(|r| r.time);
    let first = it.next()?;
    Some(it.fold((first, first), |(lo, hi), t| (lo.min(t), hi.max(t))))
}

/// Largest amount across all records, `None` when empty.
pub fn max_amount(records: &[Record]) -> Option<f64> {
    records.iter().map(|r| r.amount).reduce(f64::max)
}
