//! Formatting and display logic
//!
//! Pure functions for turning country fields into display text.

use indexmap::IndexMap;

/// Join capitals with ", "
///
/// # Examples
/// ```
/// use countrytui::logic::formatting::format_capitals;
///
/// assert_eq!(format_capitals(&["Ottawa".to_string()]), "Ottawa");
/// assert_eq!(
///     format_capitals(&["Pretoria".to_string(), "Bloemfontein".to_string(), "Cape Town".to_string()]),
///     "Pretoria, Bloemfontein, Cape Town"
/// );
/// assert_eq!(format_capitals(&[]), "");
/// ```
pub fn format_capitals(capitals: &[String]) -> String {
    capitals.join(", ")
}

/// Join language names with ", " in the order the API returned them
///
/// Codes are dropped; names are not sorted.
pub fn format_languages(languages: &IndexMap<String, String>) -> String {
    languages
        .values()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Population exactly as given (no grouping separators)
pub fn format_population(population: u64) -> String {
    population.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_languages_keeps_response_order() {
        let mut languages = IndexMap::new();
        languages.insert("fra".to_string(), "French".to_string());
        languages.insert("eng".to_string(), "English".to_string());
        assert_eq!(format_languages(&languages), "French, English");
    }

    #[test]
    fn test_format_languages_empty() {
        assert_eq!(format_languages(&IndexMap::new()), "");
    }

    #[test]
    fn test_format_population_as_given() {
        assert_eq!(format_population(38_000_000), "38000000");
        assert_eq!(format_population(0), "0");
    }
}
