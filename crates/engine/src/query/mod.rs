//! Pure queries over an in-memory slice of [`Record`](crate::record::Record)s.
//!
//! Nothing here mutates its input; every function can be re-run on the same
//! slice and yields the same result.

mod aggregate;
mod filter;
mod ranking;
mod summary;

pub use aggregate::{YearFrequency, cumulative_frequency, frequency_by_name, frequency_by_year, years};
pub use filter::{compound_names, distinct_names, filter_by_gender, names_in_both_genders};
pub use ranking::{
    DEFAULT_LIMIT, NameFrequency, YearTopName, most_frequent_name_per_year, top_names_for_year,
};
pub use summary::{DatasetSummary, summarize};
