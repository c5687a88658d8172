// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
use crate::parsers;
use derive_builder::Builder;
use log::debug;
use namefreq_engine::LoadOptions;
use namefreq_engine::options::{ChartBackend, OutputFormat};
use namefreq_engine::query::DEFAULT_LIMIT;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Records file used when neither the command line nor the config file names one.
pub const DEFAULT_DATA_PATH: &str = "data/frecuencias_nombres.csv";

/// Settings read from a YAML file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub data: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub limit: Option<usize>,
    pub chart: Option<ChartBackend>,
    pub chart_dir: Option<PathBuf>,
    pub delimiter: Option<String>,
}

impl FileConfig {
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&text)?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }
}

/// Fully resolved run configuration.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(error = "AppError"))]
pub struct Config {
    #[builder(default = "PathBuf::from(DEFAULT_DATA_PATH)")]
    pub data: PathBuf,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default = "DEFAULT_LIMIT")]
    pub limit: usize,
    #[builder(default)]
    pub chart: ChartBackend,
    #[builder(default = "PathBuf::from(\".\")")]
    pub chart_dir: PathBuf,
    #[builder(default)]
    pub load: LoadOptions,
}

impl From<derive_builder::UninitializedFieldError> for AppError {
    fn from(e: derive_builder::UninitializedFieldError) -> Self {
        Self::Config(e.to_string())
    }
}

impl Config {
    /// Merge command-line arguments over the optional config file.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be loaded or holds invalid values.
    pub fn resolve(args: &Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::merge(args, file)
    }

    /// # Errors
    /// Returns an error if a file value is out of range.
    pub fn merge(args: &Args, file: FileConfig) -> Result<Self> {
        let mut builder = ConfigBuilder::default();

        if let Some(data) = args.data.clone().or(file.data) {
            builder.data(data);
        }
        if let Some(format) = args.format.map(OutputFormat::from).or(file.format) {
            builder.format(format);
        }
        if let Some(limit) = file.limit {
            if limit == 0 {
                return Err(AppError::Config("limit must be at least 1".to_string()));
            }
            builder.limit(limit);
        }
        if let Some(chart) = file.chart {
            builder.chart(chart);
        }
        if let Some(dir) = file.chart_dir {
            builder.chart_dir(dir);
        }

        let file_delimiter = file
            .delimiter
            .as_deref()
            .map(parsers::parse_delimiter)
            .transpose()
            .map_err(AppError::Config)?;
        if let Some(delimiter) = args.delimiter.or(file_delimiter) {
            builder.load(LoadOptions {
                delimiter,
                ..LoadOptions::default()
            });
        }

        builder.build()
    }
}
