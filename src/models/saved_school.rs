use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::saved_school::SavedSchool as DomainSavedSchool;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = crate::schema::saved_schools)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct SavedSchool {
    pub id: i32,
    pub username: String,
    pub school_name: String,
    pub saved_at: NaiveDateTime,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::saved_schools)]
pub struct NewSavedSchool<'a> {
    pub username: &'a str,
    pub school_name: &'a str,
    pub saved_at: NaiveDateTime,
}

impl From<SavedSchool> for DomainSavedSchool {
    fn from(row: SavedSchool) -> Self {
        Self {
            username: row.username,
            school_name: row.school_name,
            saved_at: row.saved_at,
        }
    }
}
