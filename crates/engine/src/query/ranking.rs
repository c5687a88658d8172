use crate::record::{Gender, Record};
use serde::Serialize;
use std::collections::BTreeMap;

pub const DEFAULT_LIMIT: usize = 10;

/// A name together with a frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NameFrequency<'a> {
    pub name: &'a str,
    pub frequency: u64,
}

/// The winning name of one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearTopName<'a> {
    pub year: i32,
    pub name: &'a str,
    pub frequency: u64,
}

/// Most frequent names of `year`, highest first.
///
/// Equal frequencies keep their input order. At most `limit` entries are
/// returned.
pub fn top_names_for_year(
    records: &[Record],
    year: i32,
    limit: usize,
    gender: Option<Gender>,
) -> Vec<NameFrequency<'_>> {
    let mut ranked: Vec<NameFrequency<'_>> = records
        .iter()
        .filter(|r| r.year == year && r.matches_gender(gender))
        .map(|r| NameFrequency {
            name: &r.name,
            frequency: r.frequency,
        })
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    ranked.truncate(limit);
    ranked
}

/// One entry per year present (ascending) holding the most frequent record.
///
/// On ties the first record in input order wins.
pub fn most_frequent_name_per_year(
    records: &[Record],
    gender: Option<Gender>,
) -> Vec<YearTopName<'_>> {
    let mut best: BTreeMap<i32, &Record> = BTreeMap::new();

    for record in records.iter().filter(|r| r.matches_gender(gender)) {
        best.entry(record.year)
            .and_modify(|current| {
                if record.frequency > current.frequency {
                    *current = record;
                }
            })
            .or_insert(record);
    }

    best.into_values()
        .map(|r| YearTopName {
            year: r.year,
            name: &r.name,
            frequency: r.frequency,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_one_picks_highest() {
        let records = vec![
            Record::new(2002, "A", 10, Gender::Male),
            Record::new(2002, "B", 20, Gender::Male),
        ];
        assert_eq!(
            top_names_for_year(&records, 2002, 1, None),
            vec![NameFrequency { name: "B", frequency: 20 }]
        );
    }

    #[test]
    fn ties_keep_input_order() {
        let records = vec![
            Record::new(2002, "C", 5, Gender::Female),
            Record::new(2002, "A", 7, Gender::Male),
            Record::new(2002, "B", 5, Gender::Male),
        ];
        let names: Vec<_> = top_names_for_year(&records, 2002, DEFAULT_LIMIT, None)
            .iter()
            .map(|nf| nf.name)
            .collect();
        assert_eq!(names, ["A", "C", "B"]);
    }

    #[test]
    fn fewer_than_limit_returns_all() {
        let records = vec![
            Record::new(2002, "A", 1, Gender::Male),
            Record::new(2003, "B", 2, Gender::Male),
        ];
        assert_eq!(top_names_for_year(&records, 2002, 10, None).len(), 1);
        assert!(top_names_for_year(&records, 1999, 10, None).is_empty());
        assert!(top_names_for_year(&records, 2002, 0, None).is_empty());
    }

    #[test]
    fn gender_filter_applies_to_ranking() {
        let records = vec![
            Record::new(2002, "LUCIA", 90, Gender::Female),
            Record::new(2002, "PABLO", 50, Gender::Male),
        ];
        let top = top_names_for_year(&records, 2002, 10, Some(Gender::Male));
        assert_eq!(top, vec![NameFrequency { name: "PABLO", frequency: 50 }]);
    }

    #[test]
    fn most_frequent_per_year_is_sorted_by_year() {
        let records = vec![
            Record::new(2004, "X", 3, Gender::Male),
            Record::new(2002, "A", 10, Gender::Male),
            Record::new(2002, "B", 20, Gender::Female),
            Record::new(2004, "Y", 9, Gender::Female),
        ];
        let result = most_frequent_name_per_year(&records, None);
        assert_eq!(
            result,
            vec![
                YearTopName { year: 2002, name: "B", frequency: 20 },
                YearTopName { year: 2004, name: "Y", frequency: 9 },
            ]
        );

        let males = most_frequent_name_per_year(&records, Some(Gender::Male));
        assert_eq!(males[0].name, "A");
        assert_eq!(males[1].name, "X");
    }

    #[test]
    fn most_frequent_tie_keeps_first_encountered() {
        let records = vec![
            Record::new(2002, "FIRST", 10, Gender::Male),
            Record::new(2002, "SECOND", 10, Gender::Female),
        ];
        assert_eq!(most_frequent_name_per_year(&records, None)[0].name, "FIRST");
    }
}
