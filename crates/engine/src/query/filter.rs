use crate::record::{Gender, Record};
use std::collections::BTreeSet;

/// Records of one gender, in input order.
pub fn filter_by_gender(records: &[Record], gender: Gender) -> Vec<&Record> {
    records.iter().filter(|r| r.gender == gender).collect()
}

/// Distinct names, optionally restricted to one gender.
pub fn distinct_names(records: &[Record], gender: Option<Gender>) -> BTreeSet<&str> {
    records
        .iter()
        .filter(|r| r.matches_gender(gender))
        .map(|r| r.name.as_str())
        .collect()
}

/// Names used for both genders.
pub fn names_in_both_genders(records: &[Record]) -> BTreeSet<&str> {
    let male = distinct_names(records, Some(Gender::Male));
    let female = distinct_names(records, Some(Gender::Female));
    male.intersection(&female).copied().collect()
}

/// Names made of more than one word.
pub fn compound_names(records: &[Record], gender: Option<Gender>) -> BTreeSet<&str> {
    distinct_names(records, gender)
        .into_iter()
        .filter(|name| is_compound(name))
        .collect()
}

/// A separating space strictly inside the name; padding does not count.
fn is_compound(name: &str) -> bool {
    name.trim().contains(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new(2002, "ANA", 100, Gender::Female),
            Record::new(2002, "ANA", 5, Gender::Male),
            Record::new(2002, "JOSE MARIA", 40, Gender::Male),
            Record::new(2003, "MARIA JOSE", 30, Gender::Female),
            Record::new(2003, "PABLO", 70, Gender::Male),
        ]
    }

    #[test]
    fn filter_keeps_order() {
        let records = sample();
        let males: Vec<_> = filter_by_gender(&records, Gender::Male)
            .into_iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(males, ["ANA", "JOSE MARIA", "PABLO"]);
    }

    #[test]
    fn distinct_names_with_and_without_filter() {
        let records = sample();
        assert_eq!(distinct_names(&records, None).len(), 4);
        assert_eq!(
            distinct_names(&records, Some(Gender::Female)),
            BTreeSet::from(["ANA", "MARIA JOSE"])
        );
    }

    #[test]
    fn unisex_names() {
        assert_eq!(names_in_both_genders(&sample()), BTreeSet::from(["ANA"]));
    }

    #[test]
    fn compound_names_by_gender() {
        let records = sample();
        assert_eq!(
            compound_names(&records, None),
            BTreeSet::from(["JOSE MARIA", "MARIA JOSE"])
        );
        assert_eq!(
            compound_names(&records, Some(Gender::Male)),
            BTreeSet::from(["JOSE MARIA"])
        );
    }

    #[test]
    fn surrounding_spaces_are_not_compound() {
        assert!(!is_compound(" ANA "));
        assert!(is_compound("ANA MARIA"));
    }

    #[test]
    fn empty_input_gives_empty_sets() {
        assert!(distinct_names(&[], None).is_empty());
        assert!(names_in_both_genders(&[]).is_empty());
        assert!(filter_by_gender(&[], Gender::Male).is_empty());
    }
}
