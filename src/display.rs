//! Text rendering of universities for the console.

use crate::domain::sentinel::SENTINEL_TEXT;
use crate::domain::university::{University, UniversityField};

/// Similar-school listings show at most this many entries.
pub const SIMILAR_DISPLAY_LIMIT: usize = 10;

const NOT_AVAILABLE: &str = "N/A";

/// Multi-line detail view. Unknown values print as `-1`; unknown links are
/// left out.
pub fn university_details(university: &University) -> String {
    let mut out = format!("School Name: {}\n", university.name());

    for field in UniversityField::ALL {
        let value = match university.field_value(field) {
            Some(value) => value,
            None if field.is_link() => continue,
            None => SENTINEL_TEXT.to_string(),
        };
        out.push_str(&format!("{}: {}\n", field.label(), value));
    }

    out.push_str("Emphases: ");
    if university.emphases().is_empty() {
        out.push_str("no special info\n");
    } else {
        out.push_str(&university.emphases().join(", "));
        out.push('\n');
    }

    out
}

/// One-line summary: name, state, location and student count.
pub fn university_summary(university: &University) -> String {
    let students = university
        .num_students()
        .filter(|count| *count > 0)
        .map_or_else(|| NOT_AVAILABLE.to_string(), |count| count.to_string());

    format!(
        "{} ({}, {}) - Students: {}",
        university.name(),
        university.state().unwrap_or(NOT_AVAILABLE),
        university.location().unwrap_or(NOT_AVAILABLE),
        students
    )
}

/// Numbered similar-school listing, truncated to [`SIMILAR_DISPLAY_LIMIT`]
/// entries with a trailing count of the rest.
pub fn similar_listing(similar: &[University]) -> String {
    let mut out = String::new();

    for (index, university) in similar.iter().take(SIMILAR_DISPLAY_LIMIT).enumerate() {
        let acceptance = university
            .percent_admitted()
            .map_or_else(|| NOT_AVAILABLE.to_string(), |rate| format!("{rate:.1}%"));
        out.push_str(&format!(
            "{}. {}, Acceptance: {}\n",
            index + 1,
            university_summary(university),
            acceptance
        ));
    }

    if similar.len() > SIMILAR_DISPLAY_LIMIT {
        out.push_str(&format!(
            "... and {} more.\n",
            similar.len() - SIMILAR_DISPLAY_LIMIT
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn augsburg() -> University {
        let mut university = University::new("AUGSBURG").expect("valid name");
        university.set_state(Some("MINNESOTA")).expect("valid state");
        university.set_location(Some("URBAN")).expect("valid location");
        university.set_num_students(Some(10000));
        university.set_percent_admitted(Some(80.0)).expect("valid rate");
        university
    }

    #[test]
    fn details_print_unknowns_as_minus_one() {
        let details = university_details(&augsburg());

        assert!(details.starts_with("School Name: AUGSBURG\nState: MINNESOTA\n"));
        assert!(details.contains("Control: -1\n"));
        assert!(details.contains("Number of Students: 10000\n"));
        assert!(details.contains("SAT Math: -1\n"));
        assert!(!details.contains("URL"));
        assert!(details.ends_with("Emphases: no special info\n"));
    }

    #[test]
    fn details_show_known_links() {
        let mut university = augsburg();
        university.set_webpage_url(Some("https://www.augsburg.edu/"));

        let details = university_details(&university);

        assert!(details.contains(
            "Quality of Life Scale: -1\nWebpage URL: https://www.augsburg.edu/\nEmphases: "
        ));
        assert!(!details.contains("Image URL"));
    }

    #[test]
    fn details_join_emphases() {
        let mut university = augsburg();
        university.add_emphasis("BUSINESS");
        university.add_emphasis("MUSIC");

        assert!(university_details(&university).ends_with("Emphases: BUSINESS, MUSIC\n"));
    }

    #[test]
    fn summary_uses_placeholder_for_missing_values() {
        let university = University::new("NOWHERE").expect("valid name");

        assert_eq!(
            university_summary(&university),
            "NOWHERE (N/A, N/A) - Students: N/A"
        );
        assert_eq!(
            university_summary(&augsburg()),
            "AUGSBURG (MINNESOTA, URBAN) - Students: 10000"
        );
    }

    #[test]
    fn similar_listing_is_capped() {
        let similar = vec![augsburg(); SIMILAR_DISPLAY_LIMIT + 3];

        let listing = similar_listing(&similar);
        let lines = listing.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), SIMILAR_DISPLAY_LIMIT + 1);
        assert_eq!(
            lines[0],
            "1. AUGSBURG (MINNESOTA, URBAN) - Students: 10000, Acceptance: 80.0%"
        );
        assert_eq!(lines[SIMILAR_DISPLAY_LIMIT], "... and 3 more.");
    }

    #[test]
    fn short_similar_listing_has_no_trailer() {
        let listing = similar_listing(&[augsburg()]);

        assert_eq!(listing.lines().count(), 1);
        assert!(!listing.contains("more."));
    }
}
