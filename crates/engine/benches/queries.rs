use criterion::{Criterion, criterion_group, criterion_main};
use namefreq_engine::query::{frequency_by_name, frequency_by_year, most_frequent_name_per_year};
use namefreq_engine::{Gender, Record, top_names_series};
use std::hint::black_box;

fn synthetic_records() -> Vec<Record> {
    let mut records = Vec::new();
    for year in 2002..2018 {
        for i in 0..500u64 {
            let gender = if i % 2 == 0 { Gender::Male } else { Gender::Female };
            records.push(Record::new(year, format!("NAME{i}"), (i * 37 + year as u64) % 9000, gender));
        }
    }
    records
}

fn benchmark_queries(c: &mut Criterion) {
    let records = synthetic_records();

    c.bench_function("frequency_by_name", |b| {
        b.iter(|| black_box(frequency_by_name(black_box(&records))));
    });
    c.bench_function("frequency_by_year", |b| {
        b.iter(|| black_box(frequency_by_year(black_box(&records), "NAME42")));
    });
    c.bench_function("most_frequent_name_per_year", |b| {
        b.iter(|| black_box(most_frequent_name_per_year(black_box(&records), None)));
    });
    c.bench_function("top_names_series", |b| {
        b.iter(|| black_box(top_names_series(black_box(&records), 20)));
    });
}

criterion_group!(benches, benchmark_queries);
criterion_main!(benches);
