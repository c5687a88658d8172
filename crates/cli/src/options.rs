use clap::ValueEnum;
use namefreq_engine::Gender;
use namefreq_engine::options as engine_options;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Table,
    Csv,
    Tsv,
    Json,
    Yaml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ChartBackend {
    /// Write an SVG file
    Svg,
    /// Draw bars in the terminal
    Text,
}

/// Gender filter as typed on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GenderArg {
    #[value(name = "hombre", aliases = ["male", "m"])]
    Male,
    #[value(name = "mujer", aliases = ["female", "f"])]
    Female,
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(OutputFormat, engine_options::OutputFormat, Table, Csv, Tsv, Json, Yaml);
map_enum!(ChartBackend, engine_options::ChartBackend, Svg, Text);
map_enum!(GenderArg, Gender, Male, Female);
