use crate::record::Record;
use hashbrown::HashMap;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Total frequency of a name in one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearFrequency {
    pub year: i32,
    pub frequency: u64,
}

/// Sum of frequencies, clamped at `u64::MAX`.
pub(crate) fn total(frequencies: impl IntoIterator<Item = u64>) -> u64 {
    frequencies.into_iter().fold(0, u64::saturating_add)
}

/// Distinct years in ascending order.
pub fn years(records: &[Record]) -> BTreeSet<i32> {
    records.iter().map(|r| r.year).collect()
}

/// Per-year totals of `name`, both genders combined.
///
/// Every year of the dataset is present, including years where the name
/// does not appear (total zero).
pub fn frequency_by_year(records: &[Record], name: &str) -> Vec<YearFrequency> {
    let mut totals: BTreeMap<i32, u64> = years(records).into_iter().map(|y| (y, 0)).collect();

    for record in records.iter().filter(|r| r.name == name) {
        let sum = totals.entry(record.year).or_insert(0);
        *sum = sum.saturating_add(record.frequency);
    }

    totals
        .into_iter()
        .map(|(year, frequency)| YearFrequency { year, frequency })
        .collect()
}

/// Total of `name` over every year and gender.
pub fn cumulative_frequency(records: &[Record], name: &str) -> u64 {
    total(records.iter().filter(|r| r.name == name).map(|r| r.frequency))
}

/// Cumulative frequency of every name, accumulated in one pass.
pub fn frequency_by_name(records: &[Record]) -> HashMap<&str, u64> {
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for record in records {
        let sum = totals.entry(record.name.as_str()).or_insert(0);
        *sum = sum.saturating_add(record.frequency);
    }
    totals
}
