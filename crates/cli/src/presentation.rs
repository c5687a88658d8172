// crates/cli/src/presentation.rs
use crate::error::Result;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use namefreq_engine::options::OutputFormat;
use serde::Serialize;
use std::fmt;
use std::io::Write;

/// One value of a report row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Count(u64),
    Year(i32),
    Missing,
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Count(n) => write!(f, "{n}"),
            Self::Year(y) => write!(f, "{y}"),
            Self::Missing => f.write_str("-"),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<u64> for Cell {
    fn from(n: u64) -> Self {
        Self::Count(n)
    }
}

impl From<usize> for Cell {
    fn from(n: usize) -> Self {
        Self::Count(n as u64)
    }
}

impl From<i32> for Cell {
    fn from(y: i32) -> Self {
        Self::Year(y)
    }
}

impl<T: Into<Self>> From<Option<T>> for Cell {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Missing, Into::into)
    }
}

/// Tabular result of one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub title: String,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<Cell>>,
}

impl Report {
    pub fn new(title: impl Into<String>, headers: &[&'static str]) -> Self {
        Self {
            title: title.into(),
            headers: headers.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    #[must_use]
    pub fn with_rows(mut self, rows: impl IntoIterator<Item = Vec<Cell>>) -> Self {
        for row in rows {
            self.push_row(row);
        }
        self
    }
}

#[derive(Serialize)]
struct Document<'a> {
    title: &'a str,
    rows: Vec<serde_json::Map<String, serde_json::Value>>,
}

/// Write `report` to `out` in the requested format.
///
/// # Errors
/// Returns an error if writing or serialization fails.
pub fn render(report: &Report, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Table => render_table(report, out),
        OutputFormat::Csv => render_sv(report, b',', out),
        OutputFormat::Tsv => render_sv(report, b'\t', out),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &document(report)?)?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Yaml => {
            serde_yaml::to_writer(&mut *out, &document(report)?)?;
            Ok(())
        }
    }
}

fn render_table(report: &Report, out: &mut dyn Write) -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(report.headers.iter().copied());
    for row in &report.rows {
        table.add_row(row.iter().map(ToString::to_string));
    }

    writeln!(out, "{}", report.title)?;
    writeln!(out, "{table}")?;
    if report.rows.is_empty() {
        writeln!(out, "(no results)")?;
    }
    Ok(())
}

fn render_sv(report: &Report, delimiter: u8, out: &mut dyn Write) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);
    writer.write_record(&report.headers)?;
    for row in &report.rows {
        writer.write_record(row.iter().map(ToString::to_string))?;
    }
    writer.flush()?;
    Ok(())
}

fn document(report: &Report) -> Result<Document<'_>> {
    let rows = report
        .rows
        .iter()
        .map(|row| {
            report
                .headers
                .iter()
                .zip(row)
                .map(|(header, cell)| -> Result<(String, serde_json::Value)> {
                    Ok(((*header).to_string(), serde_json::to_value(cell)?))
                })
                .collect::<Result<serde_json::Map<_, _>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Document {
        title: &report.title,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Report {
        Report::new("Top names of 2002", &["name", "frequency"]).with_rows([
            vec![Cell::from("LUCIA"), Cell::from(7230u64)],
            vec![Cell::from("MARIA JOSE"), Cell::from(1200u64)],
        ])
    }

    fn rendered(report: &Report, format: OutputFormat) -> String {
        let mut buf = Vec::new();
        render(report, format, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn csv_has_header_and_rows() {
        assert_eq!(
            rendered(&sample(), OutputFormat::Csv),
            "name,frequency\nLUCIA,7230\nMARIA JOSE,1200\n"
        );
    }

    #[test]
    fn tsv_uses_tabs() {
        assert!(rendered(&sample(), OutputFormat::Tsv).starts_with("name\tfrequency\n"));
    }

    #[test]
    fn json_keeps_column_order_and_numbers() {
        let json: serde_json::Value =
            serde_json::from_str(&rendered(&sample(), OutputFormat::Json)).unwrap();
        assert_eq!(json["title"], "Top names of 2002");
        assert_eq!(json["rows"][0]["name"], "LUCIA");
        assert_eq!(json["rows"][0]["frequency"], 7230);

        let keys: Vec<_> = json["rows"][0].as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, ["name", "frequency"]);
    }

    #[test]
    fn yaml_output() {
        let yaml = rendered(&sample(), OutputFormat::Yaml);
        assert!(yaml.contains("title: Top names of 2002"));
        assert!(yaml.contains("name: MARIA JOSE"));
    }

    #[test]
    fn table_marks_empty_results() {
        let empty = Report::new("Compound names", &["name"]);
        let text = rendered(&empty, OutputFormat::Table);
        assert!(text.starts_with("Compound names\n"));
        assert!(text.contains("(no results)"));
    }

    #[test]
    fn missing_cells() {
        assert_eq!(Cell::from(None::<i32>).to_string(), "-");
        assert_eq!(Cell::from(Some(2002i32)), Cell::Year(2002));
        assert_eq!(serde_json::to_value(Cell::Missing).unwrap(), serde_json::Value::Null);
    }
}
