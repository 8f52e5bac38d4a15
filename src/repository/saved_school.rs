use std::collections::BTreeMap;

use chrono::Utc;
use diesel::prelude::*;

use crate::domain::saved_school::SavedSchool;
use crate::models::saved_school::{NewSavedSchool, SavedSchool as DbSavedSchool};
use crate::repository::{DieselRepository, RepositoryResult, SavedSchoolReader, SavedSchoolWriter};

impl SavedSchoolReader for DieselRepository {
    fn list_saved_schools(&self, username: &str) -> RepositoryResult<Vec<SavedSchool>> {
        use crate::schema::saved_schools;

        let mut conn = self.conn()?;

        let result = saved_schools::table
            .filter(saved_schools::username.eq(username))
            .order(saved_schools::id.asc())
            .select(DbSavedSchool::as_select())
            .load(&mut conn)?;

        Ok(result.into_iter().map(SavedSchool::from).collect())
    }

    fn saved_school_map(&self) -> RepositoryResult<BTreeMap<String, Vec<String>>> {
        use crate::schema::saved_schools;

        let mut conn = self.conn()?;

        let rows = saved_schools::table
            .order(saved_schools::id.asc())
            .select((saved_schools::username, saved_schools::school_name))
            .load::<(String, String)>(&mut conn)?;

        let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (username, school_name) in rows {
            map.entry(username).or_default().push(school_name);
        }
        Ok(map)
    }
}

impl SavedSchoolWriter for DieselRepository {
    fn save_school(&self, username: &str, school_name: &str) -> RepositoryResult<bool> {
        use crate::schema::saved_schools;

        let mut conn = self.conn()?;

        // The (username, school_name) unique key turns duplicates into no-ops
        let inserted = diesel::insert_or_ignore_into(saved_schools::table)
            .values(NewSavedSchool {
                username,
                school_name,
                saved_at: Utc::now().naive_utc(),
            })
            .execute(&mut conn)?;

        Ok(inserted > 0)
    }

    fn remove_saved_school(&self, username: &str, school_name: &str) -> RepositoryResult<usize> {
        use crate::schema::saved_schools;

        let mut conn = self.conn()?;

        let affected = diesel::delete(
            saved_schools::table
                .filter(saved_schools::username.eq(username))
                .filter(saved_schools::school_name.eq(school_name)),
        )
        .execute(&mut conn)?;

        Ok(affected)
    }
}
