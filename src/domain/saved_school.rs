use chrono::NaiveDateTime;

pub const SAVED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A university a user has bookmarked.
///
/// Equality ignores the timestamp: a user can save a given school once.
#[derive(Debug, Clone)]
pub struct SavedSchool {
    pub username: String,
    pub school_name: String,
    pub saved_at: NaiveDateTime,
}

impl SavedSchool {
    pub fn formatted_date(&self) -> String {
        self.saved_at.format(SAVED_AT_FORMAT).to_string()
    }
}

impl PartialEq for SavedSchool {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username && self.school_name == other.school_name
    }
}

impl Eq for SavedSchool {}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 14)
            .and_then(|date| date.and_hms_opt(hour, 5, 9))
            .expect("valid timestamp")
    }

    #[test]
    fn equality_ignores_timestamp() {
        let first = SavedSchool {
            username: "juser".to_string(),
            school_name: "YALE".to_string(),
            saved_at: at(9),
        };
        let second = SavedSchool {
            saved_at: at(17),
            ..first.clone()
        };

        assert_eq!(first, second);
    }

    #[test]
    fn formatted_date_uses_second_precision() {
        let saved = SavedSchool {
            username: "juser".to_string(),
            school_name: "YALE".to_string(),
            saved_at: at(9),
        };

        assert_eq!(saved.formatted_date(), "2025-04-14 09:05:09");
    }
}
