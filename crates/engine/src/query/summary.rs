use super::aggregate::total;
use super::filter::distinct_names;
use crate::record::{Gender, Record};
use serde::Serialize;
use std::collections::BTreeMap;

/// Overall shape of a loaded dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetSummary {
    pub records: usize,
    pub records_by_gender: BTreeMap<Gender, usize>,
    pub distinct_names: usize,
    pub first_year: Option<i32>,
    pub last_year: Option<i32>,
    pub total_frequency: u64,
}

pub fn summarize(records: &[Record]) -> DatasetSummary {
    let mut records_by_gender: BTreeMap<Gender, usize> =
        Gender::ALL.into_iter().map(|g| (g, 0)).collect();
    for record in records {
        *records_by_gender.entry(record.gender).or_insert(0) += 1;
    }

    DatasetSummary {
        records: records.len(),
        records_by_gender,
        distinct_names: distinct_names(records, None).len(),
        first_year: records.iter().map(|r| r.year).min(),
        last_year: records.iter().map(|r| r.year).max(),
        total_frequency: total(records.iter().map(|r| r.frequency)),
    }
}
