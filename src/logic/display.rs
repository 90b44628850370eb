//! Result display selection
//!
//! Decides what a list of matches turns into (a list, a single card, or a
//! "too many" notice) and writes it into the display regions.

use crate::api::CountryRecord;
use crate::logic::formatting::{format_capitals, format_languages, format_population};
use crate::model::{DisplayRegions, Notifier};

pub const TOO_MANY_MATCHES_MESSAGE: &str =
    "Too many matches found. Please enter a more specific name.";

/// Fewest matches shown as a list; a single match is always a card
pub const MIN_LIST_RESULTS: usize = 2;

/// One row of the match list
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListEntry {
    pub flag_url: String,
    pub official_name: String,
}

impl ListEntry {
    pub fn from_record(record: &CountryRecord) -> Self {
        Self {
            flag_url: record.flags.svg.clone(),
            official_name: record.name.official.clone(),
        }
    }
}

/// Detail card for exactly one country
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountryCard {
    pub flag_url: String,
    pub official_name: String,
    pub capital: String,
    pub population: String,
    pub languages: String,
}

impl CountryCard {
    pub fn from_record(record: &CountryRecord) -> Self {
        Self {
            flag_url: record.flags.svg.clone(),
            official_name: record.name.official.clone(),
            capital: format_capitals(&record.capital),
            population: format_population(record.population),
            languages: format_languages(&record.languages),
        }
    }
}

/// What a successful response turns into
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayMode {
    /// Success status with an empty array
    NoMatches,
    Detail(CountryCard),
    List(Vec<ListEntry>),
    TooMany { count: usize },
}

/// Pick exactly one display mode for a set of matches
///
/// `max_results` is the largest count still shown as a list.
pub fn select_display(records: &[CountryRecord], max_results: usize) -> DisplayMode {
    match records {
        [] => DisplayMode::NoMatches,
        [only] => DisplayMode::Detail(CountryCard::from_record(only)),
        _ if records.len() > max_results => DisplayMode::TooMany {
            count: records.len(),
        },
        _ => DisplayMode::List(records.iter().map(ListEntry::from_record).collect()),
    }
}

/// Write a display into the regions, notifying where needed
///
/// Returns `false` for [`DisplayMode::NoMatches`], which the caller routes to
/// the failure path; the regions are left untouched in that case.
pub fn apply_display(
    display: DisplayMode,
    regions: &mut DisplayRegions,
    notifier: &mut dyn Notifier,
) -> bool {
    match display {
        DisplayMode::NoMatches => false,
        DisplayMode::TooMany { .. } => {
            notifier.info(TOO_MANY_MATCHES_MESSAGE);
            true
        }
        DisplayMode::List(entries) => {
            regions.show_list(entries);
            true
        }
        DisplayMode::Detail(card) => {
            regions.show_detail(card);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CountryFlags, CountryName};
    use indexmap::IndexMap;

    fn record(name: &str) -> CountryRecord {
        let mut languages = IndexMap::new();
        languages.insert("eng".to_string(), "English".to_string());
        CountryRecord {
            name: CountryName {
                official: name.to_string(),
            },
            capital: vec![format!("{} City", name)],
            population: 1000,
            flags: CountryFlags {
                svg: format!("https://flags.example/{}.svg", name),
            },
            languages,
        }
    }

    fn records(n: usize) -> Vec<CountryRecord> {
        (0..n).map(|i| record(&format!("Country {}", i))).collect()
    }

    #[derive(Default)]
    struct RecordingNotifier {
        infos: Vec<String>,
        failures: Vec<String>,
    }

    impl Notifier for RecordingNotifier {
        fn info(&mut self, message: &str) {
            self.infos.push(message.to_string());
        }

        fn failure(&mut self, message: &str) {
            self.failures.push(message.to_string());
        }
    }

    #[test]
    fn test_select_empty_is_no_matches() {
        assert_eq!(select_display(&[], 10), DisplayMode::NoMatches);
    }

    #[test]
    fn test_select_single_is_detail() {
        let card = match select_display(&records(1), 10) {
            DisplayMode::Detail(card) => card,
            other => panic!("expected detail card, got {:?}", other),
        };
        assert_eq!(card.official_name, "Country 0");
        assert_eq!(card.capital, "Country 0 City");
    }

    #[test]
    fn test_select_list_bounds() {
        for n in [2, 5, 10] {
            match select_display(&records(n), 10) {
                DisplayMode::List(entries) => assert_eq!(entries.len(), n),
                other => panic!("expected list for {} matches, got {:?}", n, other),
            }
        }
    }

    #[test]
    fn test_select_too_many() {
        assert_eq!(select_display(&records(11), 10), DisplayMode::TooMany { count: 11 });
        assert_eq!(select_display(&records(250), 10), DisplayMode::TooMany { count: 250 });
    }

    #[test]
    fn test_select_respects_configured_max() {
        assert_eq!(select_display(&records(6), 5), DisplayMode::TooMany { count: 6 });
        assert!(matches!(select_display(&records(11), 20), DisplayMode::List(_)));
    }

    #[test]
    fn test_list_entries_keep_response_order() {
        let DisplayMode::List(entries) = select_display(&records(3), 10) else {
            panic!("expected list");
        };
        let names: Vec<&str> = entries.iter().map(|e| e.official_name.as_str()).collect();
        assert_eq!(names, vec!["Country 0", "Country 1", "Country 2"]);
        assert_eq!(entries[2].flag_url, "https://flags.example/Country 2.svg");
    }

    #[test]
    fn test_apply_too_many_notifies_once_and_leaves_regions() {
        let mut regions = DisplayRegions::new();
        let mut notifier = RecordingNotifier::default();

        let handled = apply_display(select_display(&records(12), 10), &mut regions, &mut notifier);

        assert!(handled);
        assert!(regions.is_empty());
        assert_eq!(notifier.infos, vec![TOO_MANY_MATCHES_MESSAGE.to_string()]);
        assert!(notifier.failures.is_empty());
    }

    #[test]
    fn test_apply_list_leaves_detail_empty() {
        let mut regions = DisplayRegions::new();
        let mut notifier = RecordingNotifier::default();

        apply_display(select_display(&records(4), 10), &mut regions, &mut notifier);

        assert_eq!(regions.list().len(), 4);
        assert!(regions.detail().is_none());
        assert!(notifier.infos.is_empty());
    }

    #[test]
    fn test_apply_no_matches_is_unhandled() {
        let mut regions = DisplayRegions::new();
        let mut notifier = RecordingNotifier::default();

        assert!(!apply_display(DisplayMode::NoMatches, &mut regions, &mut notifier));
        assert!(regions.is_empty());
        assert!(notifier.infos.is_empty() && notifier.failures.is_empty());
    }

    #[test]
    fn test_apply_is_idempotent() {
        let mut first = DisplayRegions::new();
        let mut second = DisplayRegions::new();
        let mut notifier = RecordingNotifier::default();

        apply_display(select_display(&records(1), 10), &mut first, &mut notifier);
        apply_display(select_display(&records(1), 10), &mut second, &mut notifier);
        assert_eq!(first, second);
    }
}
