//! # Query Pipeline
//!
//! Pure functions that project the canonical sequence into what the renderer
//! shows. None of them touch the store; callers decide whether a result is
//! written back.
//!
//! Both sorts are stable in both directions: records with equal keys keep
//! their relative input order. Descending order is produced by reversing the
//! comparison, not the output, so ties are never flipped.

use crate::gallery::models::{CountryRecord, SortDirection};
use std::cmp::Reverse;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Records whose common or official name contains `term`, ignoring case.
///
/// An empty term matches everything. Input order is preserved.
pub fn filter_by_substring(records: &[CountryRecord], term: &str) -> Vec<CountryRecord> {
    if term.is_empty() {
        return records.to_vec();
    }

    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| matches_term(record, &needle))
        .cloned()
        .collect()
}

fn matches_term(record: &CountryRecord, needle: &str) -> bool {
    record.common_name.to_lowercase().contains(needle)
        || record.official_name.to_lowercase().contains(needle)
}

/// Order by common name using [`CollationKey`]
pub fn sort_by_name(records: &[CountryRecord], direction: SortDirection) -> Vec<CountryRecord> {
    let mut sorted = records.to_vec();
    match direction {
        SortDirection::Ascending => {
            sorted.sort_by_cached_key(|record| CollationKey::new(&record.common_name))
        }
        SortDirection::Descending => {
            sorted.sort_by_cached_key(|record| Reverse(CollationKey::new(&record.common_name)))
        }
    }
    sorted
}

/// Order by population
pub fn sort_by_population(
    records: &[CountryRecord],
    direction: SortDirection,
) -> Vec<CountryRecord> {
    let mut sorted = records.to_vec();
    match direction {
        SortDirection::Ascending => sorted.sort_by_key(|record| record.population),
        SortDirection::Descending => sorted.sort_by_key(|record| Reverse(record.population)),
    }
    sorted
}

/// Sort key approximating a root-locale collation.
///
/// Compared level by level:
/// 1. base letters, case-folded, with diacritics removed ("Åland" ~ "aland")
/// 2. case-folded text with diacritics kept, so "Cote" precedes "Côte"
/// 3. lowercase before uppercase, then the raw text, so the order is total
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: String,
    secondary: String,
    tertiary: Vec<(bool, char)>,
}

impl CollationKey {
    pub fn new(text: &str) -> Self {
        let decomposed: String = text.nfd().collect();

        let primary = decomposed
            .chars()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect();
        let secondary = decomposed.chars().flat_map(char::to_lowercase).collect();
        let tertiary = text.chars().map(|c| (c.is_uppercase(), c)).collect();

        Self {
            primary,
            secondary,
            tertiary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(common: &str, official: &str, population: u64) -> CountryRecord {
        CountryRecord::new(common, official, format!("https://flags.test/{common}.svg"), population)
    }

    fn names(records: &[CountryRecord]) -> Vec<&str> {
        records.iter().map(|r| r.common_name.as_str()).collect()
    }

    fn fixture() -> Vec<CountryRecord> {
        vec![
            record("Sweden", "Kingdom of Sweden", 10_353_442),
            record("Switzerland", "Swiss Confederation", 8_654_622),
            record("Norway", "Kingdom of Norway", 5_379_475),
            record("Eswatini", "Kingdom of Eswatini", 1_160_164),
            record("Tuvalu", "Tuvalu", 11_792),
        ]
    }

    #[test]
    fn filter_should_match_common_or_official_name_ignoring_case() {
        let records = fixture();

        assert_eq!(
            names(&filter_by_substring(&records, "SW")),
            vec!["Sweden", "Switzerland", "Eswatini"]
        );
        assert_eq!(
            names(&filter_by_substring(&records, "kingdom")),
            vec!["Sweden", "Norway", "Eswatini"]
        );
        assert_eq!(
            names(&filter_by_substring(&records, "confed")),
            vec!["Switzerland"]
        );
    }

    #[test]
    fn filter_result_should_satisfy_predicate_exactly() {
        let records = fixture();
        let term = "way";
        let result = filter_by_substring(&records, term);

        for r in &records {
            let matches = r.common_name.to_lowercase().contains(term)
                || r.official_name.to_lowercase().contains(term);
            assert_eq!(result.contains(r), matches, "{}", r.common_name);
        }
    }

    #[test]
    fn empty_term_should_return_everything_in_order() {
        let records = fixture();
        assert_eq!(filter_by_substring(&records, ""), records);
    }

    #[test]
    fn unmatched_term_should_return_empty() {
        assert!(filter_by_substring(&fixture(), "xyz-no-match").is_empty());
    }

    #[test]
    fn filter_should_handle_non_ascii_case() {
        let records = vec![record("Åland Islands", "Åland Islands", 29_458)];
        assert_eq!(filter_by_substring(&records, "åland").len(), 1);
        assert_eq!(filter_by_substring(&records, "ÅLAND").len(), 1);
    }

    #[test]
    fn empty_input_should_yield_empty_output() {
        let empty: Vec<CountryRecord> = Vec::new();
        assert!(filter_by_substring(&empty, "a").is_empty());
        assert!(sort_by_name(&empty, SortDirection::Ascending).is_empty());
        assert!(sort_by_population(&empty, SortDirection::Descending).is_empty());
    }

    #[test]
    fn sort_by_name_should_order_both_directions() {
        let records = vec![record("Zebra", "Zebra", 1), record("Apple", "Apple", 2)];

        assert_eq!(
            names(&sort_by_name(&records, SortDirection::Ascending)),
            vec!["Apple", "Zebra"]
        );
        assert_eq!(
            names(&sort_by_name(&records, SortDirection::Descending)),
            vec!["Zebra", "Apple"]
        );
    }

    #[test]
    fn sort_by_name_should_ignore_diacritics_and_case_at_first_level() {
        let records = vec![
            record("Colombia", "", 0),
            record("Åland Islands", "", 0),
            record("Côte d'Ivoire", "", 0),
            record("Curaçao", "", 0),
            record("Albania", "", 0),
            record("Zambia", "", 0),
            record("bhutan", "", 0),
        ];

        assert_eq!(
            names(&sort_by_name(&records, SortDirection::Ascending)),
            vec![
                "Åland Islands",
                "Albania",
                "bhutan",
                "Colombia",
                "Côte d'Ivoire",
                "Curaçao",
                "Zambia"
            ]
        );
    }

    #[test]
    fn collation_key_should_break_accent_and_case_ties() {
        assert!(CollationKey::new("Cote") < CollationKey::new("Côte"));
        assert!(CollationKey::new("cote") < CollationKey::new("Cote"));
        assert_eq!(CollationKey::new("Peru"), CollationKey::new("Peru"));
    }

    #[test]
    fn sort_by_population_should_order_numerically() {
        let records = fixture();

        assert_eq!(
            names(&sort_by_population(&records, SortDirection::Ascending)),
            vec!["Tuvalu", "Eswatini", "Norway", "Switzerland", "Sweden"]
        );
        assert_eq!(
            names(&sort_by_population(&records, SortDirection::Descending)),
            vec!["Sweden", "Switzerland", "Norway", "Eswatini", "Tuvalu"]
        );
    }

    #[test]
    fn flipping_direction_should_reverse_for_distinct_keys() {
        let records = fixture();

        let asc = sort_by_name(&records, SortDirection::Ascending);
        let mut desc = sort_by_name(&asc, SortDirection::Descending);
        desc.reverse();
        assert_eq!(asc, desc);

        let desc = sort_by_population(&records, SortDirection::Descending);
        let mut asc = sort_by_population(&desc, SortDirection::Ascending);
        asc.reverse();
        assert_eq!(desc, asc);
    }

    #[test]
    fn population_sort_should_be_stable_for_ties() {
        let records = vec![
            record("First", "", 100),
            record("Big", "", 900),
            record("Second", "", 100),
            record("Third", "", 100),
        ];

        assert_eq!(
            names(&sort_by_population(&records, SortDirection::Ascending)),
            vec!["First", "Second", "Third", "Big"]
        );
        assert_eq!(
            names(&sort_by_population(&records, SortDirection::Descending)),
            vec!["Big", "First", "Second", "Third"]
        );

        let twice = sort_by_population(
            &sort_by_population(&records, SortDirection::Ascending),
            SortDirection::Descending,
        );
        assert_eq!(names(&twice), vec!["Big", "First", "Second", "Third"]);
    }

    #[test]
    fn filter_then_sort_should_compose() {
        let records = fixture();
        let result = sort_by_population(
            &filter_by_substring(&records, "kingdom"),
            SortDirection::Ascending,
        );
        assert_eq!(names(&result), vec!["Eswatini", "Norway", "Sweden"]);
    }
}
