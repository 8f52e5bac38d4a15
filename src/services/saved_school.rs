use std::collections::{BTreeMap, HashMap};

use crate::domain::saved_school::SavedSchool;
use crate::domain::university::University;
use crate::repository::{RepositoryError, SavedSchoolReader, SavedSchoolWriter, UniversityReader};
use crate::services::{ServiceError, ServiceResult};

/// A user's list of bookmarked universities.
pub struct SavedSchoolService<R> {
    repo: R,
}

impl<R> SavedSchoolService<R>
where
    R: UniversityReader + SavedSchoolReader + SavedSchoolWriter,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Saves `school_name` for `username`.
    ///
    /// Returns `false` when the school was already saved. Unknown schools
    /// are rejected with [`ServiceError::NotFound`].
    pub fn save_school(&self, username: &str, school_name: &str) -> ServiceResult<bool> {
        let school_name = school_name.trim().to_uppercase();

        match self.repo.get_university(&school_name) {
            Ok(_) => {}
            Err(RepositoryError::NotFound) => return Err(ServiceError::NotFound(school_name)),
            Err(e) => return Err(e.into()),
        }

        let saved = self.repo.save_school(username, &school_name)?;
        if saved {
            log::info!("User {username} saved {school_name}");
        } else {
            log::debug!("User {username} had already saved {school_name}");
        }
        Ok(saved)
    }

    /// Returns `false` when the school was not on the user's list.
    pub fn remove_saved_school(&self, username: &str, school_name: &str) -> ServiceResult<bool> {
        let school_name = school_name.trim().to_uppercase();
        Ok(self.repo.remove_saved_school(username, &school_name)? > 0)
    }

    pub fn saved_schools(&self, username: &str) -> ServiceResult<Vec<SavedSchool>> {
        Ok(self.repo.list_saved_schools(username)?)
    }

    /// Saved schools whose name, state or location contains `criteria`,
    /// ignoring case. Blank criteria return the whole list.
    pub fn search_saved(&self, username: &str, criteria: &str) -> ServiceResult<Vec<SavedSchool>> {
        let saved = self.repo.list_saved_schools(username)?;
        let criteria = criteria.trim().to_uppercase();
        if criteria.is_empty() {
            return Ok(saved);
        }

        let catalog: HashMap<String, University> = self
            .repo
            .list_universities()?
            .into_iter()
            .map(|university| (university.name().to_string(), university))
            .collect();

        let contains = |value: Option<&str>| value.is_some_and(|value| value.contains(&criteria));

        Ok(saved
            .into_iter()
            .filter(|entry| {
                entry.school_name.contains(&criteria)
                    || catalog.get(&entry.school_name).is_some_and(|university| {
                        contains(university.state()) || contains(university.location())
                    })
            })
            .collect())
    }

    /// Number of saved schools per username.
    pub fn saved_counts(&self) -> ServiceResult<BTreeMap<String, usize>> {
        Ok(self
            .repo
            .saved_school_map()?
            .into_iter()
            .map(|(username, schools)| (username, schools.len()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use chrono::NaiveDate;

    use super::*;
    use crate::repository::RepositoryResult;

    struct FakeRepo {
        universities: Vec<University>,
        saved: Mutex<Vec<SavedSchool>>,
    }

    impl FakeRepo {
        fn new() -> Self {
            let mut augsburg = University::new("AUGSBURG").expect("valid name");
            augsburg.set_state(Some("MINNESOTA")).expect("valid state");
            augsburg.set_location(Some("URBAN")).expect("valid location");
            let mut yale = University::new("YALE").expect("valid name");
            yale.set_state(Some("CONNECTICUT")).expect("valid state");
            yale.set_location(Some("SMALL-CITY")).expect("valid location");

            Self {
                universities: vec![augsburg, yale],
                saved: Mutex::new(Vec::new()),
            }
        }
    }

    impl UniversityReader for FakeRepo {
        fn list_universities(&self) -> RepositoryResult<Vec<University>> {
            Ok(self.universities.clone())
        }

        fn get_university(&self, name: &str) -> RepositoryResult<University> {
            self.universities
                .iter()
                .find(|u| u.name() == name)
                .cloned()
                .ok_or(RepositoryError::NotFound)
        }

        fn list_emphases(&self) -> RepositoryResult<Vec<String>> {
            Ok(Vec::new())
        }
    }

    impl SavedSchoolReader for FakeRepo {
        fn list_saved_schools(&self, username: &str) -> RepositoryResult<Vec<SavedSchool>> {
            let saved = self.saved.lock().expect("saved mutex poisoned");
            Ok(saved
                .iter()
                .filter(|s| s.username == username)
                .cloned()
                .collect())
        }

        fn saved_school_map(&self) -> RepositoryResult<BTreeMap<String, Vec<String>>> {
            let saved = self.saved.lock().expect("saved mutex poisoned");
            let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
            for entry in saved.iter() {
                map.entry(entry.username.clone())
                    .or_default()
                    .push(entry.school_name.clone());
            }
            Ok(map)
        }
    }

    impl SavedSchoolWriter for FakeRepo {
        fn save_school(&self, username: &str, school_name: &str) -> RepositoryResult<bool> {
            let mut saved = self.saved.lock().expect("saved mutex poisoned");
            let entry = SavedSchool {
                username: username.to_string(),
                school_name: school_name.to_string(),
                saved_at: NaiveDate::from_ymd_opt(2025, 4, 14)
                    .and_then(|date| date.and_hms_opt(12, 0, 0))
                    .expect("valid timestamp"),
            };
            if saved.contains(&entry) {
                return Ok(false);
            }
            saved.push(entry);
            Ok(true)
        }

        fn remove_saved_school(&self, username: &str, school_name: &str) -> RepositoryResult<usize> {
            let mut saved = self.saved.lock().expect("saved mutex poisoned");
            let before = saved.len();
            saved.retain(|s| !(s.username == username && s.school_name == school_name));
            Ok(before - saved.len())
        }
    }

    #[test]
    fn saving_twice_returns_false() {
        let service = SavedSchoolService::new(FakeRepo::new());

        assert!(service.save_school("juser", "augsburg").expect("saves"));
        assert!(!service.save_school("juser", "AUGSBURG").expect("runs"));
        assert_eq!(service.saved_schools("juser").expect("lists").len(), 1);
    }

    #[test]
    fn unknown_school_cannot_be_saved() {
        let service = SavedSchoolService::new(FakeRepo::new());

        assert!(matches!(
            service.save_school("juser", "HOGWARTS"),
            Err(ServiceError::NotFound(name)) if name == "HOGWARTS"
        ));
    }

    #[test]
    fn remove_reports_whether_anything_changed() {
        let service = SavedSchoolService::new(FakeRepo::new());
        service.save_school("juser", "YALE").expect("saves");

        assert!(service.remove_saved_school("juser", "yale").expect("removes"));
        assert!(!service.remove_saved_school("juser", "YALE").expect("runs"));
    }

    #[test]
    fn saved_search_matches_name_state_or_location() {
        let service = SavedSchoolService::new(FakeRepo::new());
        service.save_school("juser", "AUGSBURG").expect("saves");
        service.save_school("juser", "YALE").expect("saves");

        let school_names = |results: Vec<SavedSchool>| {
            results
                .into_iter()
                .map(|s| s.school_name)
                .collect::<Vec<_>>()
        };

        assert_eq!(
            school_names(service.search_saved("juser", "burg").expect("searches")),
            vec!["AUGSBURG"]
        );
        assert_eq!(
            school_names(service.search_saved("juser", "connect").expect("searches")),
            vec!["YALE"]
        );
        assert_eq!(
            school_names(service.search_saved("juser", "urban").expect("searches")),
            vec!["AUGSBURG"]
        );
        assert_eq!(service.search_saved("juser", " ").expect("searches").len(), 2);
        assert!(service.search_saved("juser", "texas").expect("searches").is_empty());
    }

    #[test]
    fn counts_are_grouped_by_user() {
        let service = SavedSchoolService::new(FakeRepo::new());
        service.save_school("juser", "AUGSBURG").expect("saves");
        service.save_school("juser", "YALE").expect("saves");
        service.save_school("luser", "YALE").expect("saves");

        let counts = service.saved_counts().expect("counts");

        assert_eq!(counts.get("juser"), Some(&2));
        assert_eq!(counts.get("luser"), Some(&1));
    }
}
