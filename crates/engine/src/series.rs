//! Chart-ready series: parallel labels and values plus a title.
//!
//! The engine stops here. Drawing is left to whatever plotter the caller
//! hands these to.

use crate::query::{NameFrequency, frequency_by_name, frequency_by_year};
use crate::record::Record;
use log::trace;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Series<L> {
    pub title: String,
    pub labels: Vec<L>,
    pub values: Vec<u64>,
}

impl<L> Series<L> {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn max_value(&self) -> Option<u64> {
        self.values.iter().copied().max()
    }

    pub fn points(&self) -> impl Iterator<Item = (&L, u64)> {
        self.labels.iter().zip(self.values.iter().copied())
    }
}

/// Yearly totals of `name`, for a line chart.
pub fn evolution_series(records: &[Record], name: &str) -> Series<i32> {
    let (labels, values) = frequency_by_year(records, name)
        .into_iter()
        .map(|yf| (yf.year, yf.frequency))
        .unzip();

    Series {
        title: format!("Evolution of name '{name}'"),
        labels,
        values,
    }
}

/// The `limit` names with the highest cumulative frequency, for a bar chart.
pub fn top_names_series(records: &[Record], limit: usize) -> Series<String> {
    let (labels, values) = rank_names(records)
        .into_iter()
        .take(limit)
        .map(|nf| (nf.name.to_string(), nf.frequency))
        .unzip();

    Series {
        title: format!("Frequency of the {limit} most common names"),
        labels,
        values,
    }
}

/// Every name with its cumulative frequency, highest first.
///
/// Equal totals are ordered by name so the ranking does not depend on hash
/// iteration order.
pub fn rank_names(records: &[Record]) -> Vec<NameFrequency<'_>> {
    let mut ranked: Vec<NameFrequency<'_>> = frequency_by_name(records)
        .into_iter()
        .map(|(name, frequency)| NameFrequency { name, frequency })
        .collect();
    ranked.sort_unstable_by(|a, b| b.frequency.cmp(&a.frequency).then_with(|| a.name.cmp(b.name)));
    trace!("ranked {} names", ranked.len());
    ranked
}
