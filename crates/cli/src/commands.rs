// crates/cli/src/commands.rs
//! One function per subcommand: run the engine query, shape it into a [`Report`].

use crate::args::{ChartArgs, Command};
use crate::chart::{Plotter, SvgPlotter, TextPlotter};
use crate::config::Config;
use crate::error::Result;
use crate::presentation::{Cell, Report, render};
use log::warn;
use namefreq_engine::options::ChartBackend;
use namefreq_engine::query::{
    compound_names, cumulative_frequency, distinct_names, filter_by_gender, frequency_by_year,
    most_frequent_name_per_year, names_in_both_genders, summarize, top_names_for_year,
};
use namefreq_engine::{Gender, Record, Series, evolution_series, rank_names, top_names_series};
use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Run `command` over `records`, writing its output to `out`.
///
/// # Errors
/// Returns an error if rendering the report or the chart fails.
pub fn execute(
    command: &Command,
    records: &[Record],
    config: &Config,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::Evolution { name, chart } => {
            let series = evolution_series(records, name);
            let path = config.chart_dir.join(format!("evolution_{}.svg", slug(name)));
            chart_command(&series, "year", chart, config, path, out, |p, s| p.line_chart(s))
        }
        Command::Popular { limit, chart } => {
            let limit = limit.unwrap_or(config.limit);
            let series = top_names_series(records, limit);
            let path = config.chart_dir.join(format!("popular_{limit}.svg"));
            chart_command(&series, "name", chart, config, path, out, |p, s| p.bar_chart(s))
        }
        other => render(&report(other, records, config), config.format, out),
    }
}

/// Build the tabular report of a non-chart command.
#[must_use]
pub fn report(command: &Command, records: &[Record], config: &Config) -> Report {
    match command {
        Command::Summary => summary_report(records),
        Command::Filter { gender } => {
            let gender = Gender::from(*gender);
            Report::new(
                format!("Records of gender {gender}"),
                &["year", "name", "frequency", "gender"],
            )
            .with_rows(filter_by_gender(records, gender).into_iter().map(|r| {
                vec![
                    Cell::from(r.year),
                    Cell::from(r.name.as_str()),
                    Cell::from(r.frequency),
                    Cell::from(r.gender.label()),
                ]
            }))
        }
        Command::Names { gender } => {
            let gender = gender.map(Gender::from);
            name_set_report(
                format!("Distinct names{}", gender_suffix(gender)),
                distinct_names(records, gender),
            )
        }
        Command::Both => {
            name_set_report("Names used for both genders", names_in_both_genders(records))
        }
        Command::Compound { gender } => {
            let gender = gender.map(Gender::from);
            name_set_report(
                format!("Compound names{}", gender_suffix(gender)),
                compound_names(records, gender),
            )
        }
        Command::Top {
            year,
            limit,
            gender,
        } => {
            let gender = gender.map(Gender::from);
            let limit = limit.unwrap_or(config.limit);
            Report::new(
                format!("Top {limit} names of {year}{}", gender_suffix(gender)),
                &["name", "frequency"],
            )
            .with_rows(
                top_names_for_year(records, *year, limit, gender)
                    .into_iter()
                    .map(|nf| vec![Cell::from(nf.name), Cell::from(nf.frequency)]),
            )
        }
        Command::MostFrequent { gender } => {
            let gender = gender.map(Gender::from);
            Report::new(
                format!("Most frequent name per year{}", gender_suffix(gender)),
                &["year", "name", "frequency"],
            )
            .with_rows(most_frequent_name_per_year(records, gender).into_iter().map(|t| {
                vec![Cell::from(t.year), Cell::from(t.name), Cell::from(t.frequency)]
            }))
        }
        Command::ByYear { name } => Report::new(
            format!("Frequency of '{name}' by year"),
            &["year", "frequency"],
        )
        .with_rows(
            frequency_by_year(records, name)
                .into_iter()
                .map(|yf| vec![Cell::from(yf.year), Cell::from(yf.frequency)]),
        ),
        Command::Total { name } => {
            Report::new(format!("Cumulative frequency of '{name}'"), &["name", "frequency"])
                .with_rows([vec![
                    Cell::from(name.as_str()),
                    Cell::from(cumulative_frequency(records, name)),
                ]])
        }
        Command::Frequencies { limit } => {
            let shown = limit.unwrap_or(config.limit);
            Report::new("Cumulative frequency by name", &["name", "frequency"]).with_rows(
                rank_names(records)
                    .into_iter()
                    .take(shown)
                    .map(|nf| vec![Cell::from(nf.name), Cell::from(nf.frequency)]),
            )
        }
        Command::Evolution { name, .. } => series_report(&evolution_series(records, name), "year"),
        Command::Popular { limit, .. } => {
            series_report(&top_names_series(records, limit.unwrap_or(config.limit)), "name")
        }
    }
}

fn summary_report(records: &[Record]) -> Report {
    let summary = summarize(records);
    let mut report = Report::new("Dataset summary", &["field", "value"]);

    report.push_row(vec![Cell::from("records"), Cell::from(summary.records)]);
    for (gender, count) in &summary.records_by_gender {
        report.push_row(vec![
            Cell::Text(format!("records ({gender})")),
            Cell::from(*count),
        ]);
    }
    report.push_row(vec![Cell::from("distinct names"), Cell::from(summary.distinct_names)]);
    report.push_row(vec![Cell::from("first year"), Cell::from(summary.first_year)]);
    report.push_row(vec![Cell::from("last year"), Cell::from(summary.last_year)]);
    report.push_row(vec![Cell::from("total frequency"), Cell::from(summary.total_frequency)]);
    report
}

fn name_set_report(title: impl Into<String>, names: BTreeSet<&str>) -> Report {
    Report::new(title, &["name"]).with_rows(names.into_iter().map(|n| vec![Cell::from(n)]))
}

fn series_report<L>(series: &Series<L>, label_header: &'static str) -> Report
where
    L: Clone + Into<Cell>,
{
    Report::new(series.title.clone(), &[label_header, "frequency"]).with_rows(
        series
            .points()
            .map(|(label, value)| vec![label.clone().into(), Cell::from(value)]),
    )
}

fn chart_command<L, F>(
    series: &Series<L>,
    label_header: &'static str,
    chart: &ChartArgs,
    config: &Config,
    default_path: PathBuf,
    out: &mut dyn Write,
    draw: F,
) -> Result<()>
where
    L: Clone + Into<Cell>,
    F: Fn(&mut dyn Plotter, &Series<L>) -> Result<()>,
{
    let backend = chart.chart.map_or(config.chart, ChartBackend::from);

    if series.is_empty() {
        warn!("nothing to chart: '{}' has no data points", series.title);
        return render(&series_report(series, label_header), config.format, out);
    }

    match backend {
        ChartBackend::Text => draw(&mut TextPlotter::new(out), series),
        ChartBackend::Svg => {
            let path = chart.out.clone().unwrap_or(default_path);
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)?;
            }
            let mut plotter = SvgPlotter::new(&path);
            draw(&mut plotter, series)?;
            eprintln!("Chart written to {}", plotter.path().display());
            render(&series_report(series, label_header), config.format, out)
        }
    }
}

fn gender_suffix(gender: Option<Gender>) -> String {
    gender.map(|g| format!(" ({g})")).unwrap_or_default()
}

/// File-name friendly form of a name: lowercase alphanumerics joined by `_`.
fn slug(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_lowercase().next().unwrap_or(c)
            } else {
                '_'
            }
        })
        .collect()
}
