// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::options::{ChartBackend, GenderArg, OutputFormat};
use crate::parsers;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "namefreq",
    version = crate::VERSION,
    about = "Query and chart per-year name frequencies",
    long_about = "Loads a CSV of (Year, Name, Frequency, Gender) rows and answers one query per run.\n\
                  Global options may also be set in a YAML file passed with --config."
)]
pub struct Args {
    /// Records file (CSV with header: Year,Name,Frequency,Gender)
    #[arg(long, global = true, value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub data: Option<PathBuf>,

    /// YAML configuration file
    #[arg(long, global = true, value_hint = ValueHint::FilePath, help_heading = "Input")]
    pub config: Option<PathBuf>,

    /// Field delimiter of the records file (single character, or `tab`)
    #[arg(long, global = true, value_parser = parsers::parse_delimiter, help_heading = "Input")]
    pub delimiter: Option<u8>,

    /// Output format
    #[arg(long, global = true, value_enum, help_heading = "Output")]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Record counts, year range and totals of the dataset
    Summary,

    /// List the records of one gender
    Filter {
        #[arg(long, value_enum)]
        gender: GenderArg,
    },

    /// Distinct names
    Names {
        #[arg(long, value_enum)]
        gender: Option<GenderArg>,
    },

    /// Names used for both genders
    Both,

    /// Names made of more than one word
    Compound {
        #[arg(long, value_enum)]
        gender: Option<GenderArg>,
    },

    /// Most frequent names of a year
    Top {
        #[arg(long, value_parser = parsers::parse_year)]
        year: i32,
        #[arg(long, value_parser = parsers::parse_positive_usize)]
        limit: Option<usize>,
        #[arg(long, value_enum)]
        gender: Option<GenderArg>,
    },

    /// The most frequent name of every year
    MostFrequent {
        #[arg(long, value_enum)]
        gender: Option<GenderArg>,
    },

    /// Yearly frequency of a name (both genders combined)
    ByYear { name: String },

    /// Cumulative frequency of a name over all years
    Total { name: String },

    /// Names ranked by cumulative frequency, highest first
    Frequencies {
        #[arg(long, value_parser = parsers::parse_positive_usize)]
        limit: Option<usize>,
    },

    /// Chart the yearly frequency of a name
    Evolution {
        name: String,
        #[command(flatten)]
        chart: ChartArgs,
    },

    /// Bar chart of the most common names
    Popular {
        #[arg(long, value_parser = parsers::parse_positive_usize)]
        limit: Option<usize>,
        #[command(flatten)]
        chart: ChartArgs,
    },
}

/// Chart output options
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartArgs {
    /// Chart backend
    #[arg(long, value_enum)]
    pub chart: Option<ChartBackend>,

    /// Output file for the SVG chart
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub out: Option<PathBuf>,
}
