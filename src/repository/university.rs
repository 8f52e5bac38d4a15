use std::collections::HashMap;

use diesel::prelude::*;

use crate::db::DbConnection;
use crate::domain::university::University;
use crate::models::university::{
    Emphasis, NewEmphasis, NewUniversity, University as DbUniversity,
};
use crate::repository::{
    DieselRepository, RepositoryError, RepositoryResult, UniversityReader, UniversityWriter,
};

fn load_emphases(conn: &mut DbConnection) -> QueryResult<HashMap<String, Vec<String>>> {
    use crate::schema::university_emphases;

    let rows = university_emphases::table
        .order(university_emphases::id.asc())
        .select(Emphasis::as_select())
        .load(conn)?;

    let mut by_school: HashMap<String, Vec<String>> = HashMap::new();
    for row in rows {
        by_school
            .entry(row.university_name)
            .or_default()
            .push(row.emphasis);
    }
    Ok(by_school)
}

fn replace_emphases(conn: &mut DbConnection, name: &str, emphases: &[String]) -> QueryResult<()> {
    use crate::schema::university_emphases;

    diesel::delete(
        university_emphases::table.filter(university_emphases::university_name.eq(name)),
    )
    .execute(conn)?;

    if emphases.is_empty() {
        return Ok(());
    }

    let rows = emphases
        .iter()
        .map(|emphasis| NewEmphasis {
            university_name: name,
            emphasis,
        })
        .collect::<Vec<_>>();

    diesel::insert_into(university_emphases::table)
        .values(&rows)
        .execute(conn)?;

    Ok(())
}

fn to_domain(row: DbUniversity, emphases: Vec<String>) -> RepositoryResult<University> {
    NewUniversity::from(row)
        .into_domain(emphases)
        .map_err(|err| RepositoryError::ValidationError(err.to_string()))
}

impl UniversityReader for DieselRepository {
    fn list_universities(&self) -> RepositoryResult<Vec<University>> {
        use crate::schema::universities;

        let mut conn = self.conn()?;

        // Catalog order is insertion order
        let rows = universities::table
            .order(universities::id.asc())
            .select(DbUniversity::as_select())
            .load(&mut conn)?;

        let mut emphases = load_emphases(&mut conn)?;

        rows.into_iter()
            .map(|row| {
                let school_emphases = emphases.remove(&row.name).unwrap_or_default();
                to_domain(row, school_emphases)
            })
            .collect()
    }

    fn get_university(&self, name: &str) -> RepositoryResult<University> {
        use crate::schema::{universities, university_emphases};

        let mut conn = self.conn()?;

        let row = universities::table
            .filter(universities::name.eq(name))
            .select(DbUniversity::as_select())
            .first(&mut conn)?;

        let school_emphases = university_emphases::table
            .filter(university_emphases::university_name.eq(name))
            .order(university_emphases::id.asc())
            .select(university_emphases::emphasis)
            .load::<String>(&mut conn)?;

        to_domain(row, school_emphases)
    }

    fn list_emphases(&self) -> RepositoryResult<Vec<String>> {
        use crate::schema::university_emphases;

        let mut conn = self.conn()?;

        let emphases = university_emphases::table
            .select(university_emphases::emphasis)
            .distinct()
            .order(university_emphases::emphasis.asc())
            .load::<String>(&mut conn)?;

        Ok(emphases)
    }
}

impl UniversityWriter for DieselRepository {
    fn create_university(&self, university: &University) -> RepositoryResult<usize> {
        use crate::schema::universities;

        let mut conn = self.conn()?;
        let row = NewUniversity::from(university);

        let inserted = conn.transaction(|conn| {
            let inserted = diesel::insert_into(universities::table)
                .values(&row)
                .execute(conn)?;
            replace_emphases(conn, university.name(), university.emphases())?;
            Ok::<usize, RepositoryError>(inserted)
        })?;

        Ok(inserted)
    }

    fn update_university(&self, university: &University) -> RepositoryResult<usize> {
        use crate::schema::universities;

        let mut conn = self.conn()?;
        let row = NewUniversity::from(university);

        let affected = conn.transaction(|conn| {
            let affected =
                diesel::update(universities::table.filter(universities::name.eq(&row.name)))
                    .set(&row)
                    .execute(conn)?;
            if affected > 0 {
                replace_emphases(conn, university.name(), university.emphases())?;
            }
            Ok::<usize, RepositoryError>(affected)
        })?;

        Ok(affected)
    }

    fn delete_university(&self, name: &str) -> RepositoryResult<usize> {
        use crate::schema::{saved_schools, universities, university_emphases};

        let mut conn = self.conn()?;

        let deleted = conn.transaction(|conn| {
            // Drop dependent rows first so no saved school points at a missing record
            diesel::delete(
                university_emphases::table.filter(university_emphases::university_name.eq(name)),
            )
            .execute(conn)?;
            diesel::delete(saved_schools::table.filter(saved_schools::school_name.eq(name)))
                .execute(conn)?;

            diesel::delete(universities::table.filter(universities::name.eq(name))).execute(conn)
        })?;

        Ok(deleted)
    }

    fn add_emphasis(&self, name: &str, emphasis: &str) -> RepositoryResult<usize> {
        use crate::schema::{universities, university_emphases};

        let mut conn = self.conn()?;

        let inserted = conn.transaction(|conn| {
            let exists: i64 = universities::table
                .filter(universities::name.eq(name))
                .count()
                .get_result(conn)?;
            if exists == 0 {
                return Err(RepositoryError::NotFound);
            }

            let inserted = diesel::insert_into(university_emphases::table)
                .values(NewEmphasis {
                    university_name: name,
                    emphasis,
                })
                .execute(conn)?;
            Ok(inserted)
        })?;

        Ok(inserted)
    }

    fn remove_emphasis(&self, name: &str, emphasis: &str) -> RepositoryResult<usize> {
        use crate::schema::university_emphases;

        let mut conn = self.conn()?;

        let affected = diesel::delete(
            university_emphases::table
                .filter(university_emphases::university_name.eq(name))
                .filter(university_emphases::emphasis.eq(emphasis)),
        )
        .execute(&mut conn)?;

        Ok(affected)
    }
}
