use diesel::prelude::*;
use serde::Deserialize;

use crate::domain::DomainResult;
use crate::domain::sentinel::{
    SENTINEL_FLOAT, SENTINEL_INT, SENTINEL_TEXT, float_from_sentinel, float_to_sentinel,
    int_from_sentinel, int_to_sentinel, text_to_sentinel,
};
use crate::domain::university::University as DomainUniversity;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = crate::schema::universities)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct University {
    pub id: i32,
    pub name: String,
    pub state: String,
    pub location: String,
    pub control: String,
    pub num_students: i32,
    pub percent_female: f64,
    pub sat_verbal: f64,
    pub sat_math: f64,
    pub expenses: f64,
    pub percent_financial_aid: f64,
    pub num_applicants: i32,
    pub percent_admitted: f64,
    pub percent_enrolled: f64,
    pub scale_academics: i32,
    pub scale_social: i32,
    pub scale_quality_of_life: i32,
    pub webpage_url: Option<String>,
    pub image_url: Option<String>,
}

/// Sentinel-encoded university row, as written to the database or read
/// from a seed file.
#[derive(Debug, Clone, Insertable, AsChangeset, Deserialize)]
#[diesel(table_name = crate::schema::universities)]
#[diesel(treat_none_as_null = true)]
#[serde(default)]
pub struct NewUniversity {
    pub name: String,
    pub state: String,
    pub location: String,
    pub control: String,
    pub num_students: i32,
    pub percent_female: f64,
    pub sat_verbal: f64,
    pub sat_math: f64,
    pub expenses: f64,
    pub percent_financial_aid: f64,
    pub num_applicants: i32,
    pub percent_admitted: f64,
    pub percent_enrolled: f64,
    pub scale_academics: i32,
    pub scale_social: i32,
    pub scale_quality_of_life: i32,
    pub webpage_url: Option<String>,
    pub image_url: Option<String>,
}

impl Default for NewUniversity {
    fn default() -> Self {
        Self {
            name: String::new(),
            state: SENTINEL_TEXT.to_string(),
            location: SENTINEL_TEXT.to_string(),
            control: SENTINEL_TEXT.to_string(),
            num_students: SENTINEL_INT,
            percent_female: SENTINEL_FLOAT,
            sat_verbal: SENTINEL_FLOAT,
            sat_math: SENTINEL_FLOAT,
            expenses: SENTINEL_FLOAT,
            percent_financial_aid: SENTINEL_FLOAT,
            num_applicants: SENTINEL_INT,
            percent_admitted: SENTINEL_FLOAT,
            percent_enrolled: SENTINEL_FLOAT,
            scale_academics: SENTINEL_INT,
            scale_social: SENTINEL_INT,
            scale_quality_of_life: SENTINEL_INT,
            webpage_url: None,
            image_url: None,
        }
    }
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = crate::schema::university_emphases)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Emphasis {
    pub id: i32,
    pub university_name: String,
    pub emphasis: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::university_emphases)]
pub struct NewEmphasis<'a> {
    pub university_name: &'a str,
    pub emphasis: &'a str,
}

impl NewUniversity {
    /// Decodes the sentinel encoding and validates every attribute.
    pub fn into_domain(self, emphases: Vec<String>) -> DomainResult<DomainUniversity> {
        let mut university = DomainUniversity::new(&self.name)?;

        university.set_state(Some(&self.state))?;
        university.set_location(Some(&self.location))?;
        university.set_control(Some(&self.control))?;
        university.set_num_students(count(self.num_students));
        university.set_num_applicants(count(self.num_applicants));
        university.set_percent_female(float_from_sentinel(self.percent_female))?;
        university.set_sat_verbal(float_from_sentinel(self.sat_verbal))?;
        university.set_sat_math(float_from_sentinel(self.sat_math))?;
        university.set_expenses(float_from_sentinel(self.expenses))?;
        university.set_percent_financial_aid(float_from_sentinel(self.percent_financial_aid))?;
        university.set_percent_admitted(float_from_sentinel(self.percent_admitted))?;
        university.set_percent_enrolled(float_from_sentinel(self.percent_enrolled))?;
        university.set_scale_academics(scale(self.scale_academics))?;
        university.set_scale_social(scale(self.scale_social))?;
        university.set_scale_quality_of_life(scale(self.scale_quality_of_life))?;
        university.set_webpage_url(self.webpage_url.as_deref());
        university.set_image_url(self.image_url.as_deref());

        for emphasis in &emphases {
            university.add_emphasis(emphasis);
        }

        Ok(university)
    }
}

// Negative values other than the sentinel cannot be represented and are
// treated as unknown.
fn count(value: i32) -> Option<u32> {
    int_from_sentinel(value).and_then(|value| u32::try_from(value).ok())
}

// Values above u8::MAX become unknown; anything above the scale maximum
// is rejected by the domain setter.
fn scale(value: i32) -> Option<u8> {
    int_from_sentinel(value).and_then(|value| u8::try_from(value).ok())
}

impl From<&DomainUniversity> for NewUniversity {
    fn from(university: &DomainUniversity) -> Self {
        Self {
            name: university.name().to_string(),
            state: text_to_sentinel(university.state()),
            location: text_to_sentinel(university.location()),
            control: text_to_sentinel(university.control()),
            num_students: int_to_sentinel(university.num_students()),
            percent_female: float_to_sentinel(university.percent_female()),
            sat_verbal: float_to_sentinel(university.sat_verbal()),
            sat_math: float_to_sentinel(university.sat_math()),
            expenses: float_to_sentinel(university.expenses()),
            percent_financial_aid: float_to_sentinel(university.percent_financial_aid()),
            num_applicants: int_to_sentinel(university.num_applicants()),
            percent_admitted: float_to_sentinel(university.percent_admitted()),
            percent_enrolled: float_to_sentinel(university.percent_enrolled()),
            scale_academics: int_to_sentinel(university.scale_academics()),
            scale_social: int_to_sentinel(university.scale_social()),
            scale_quality_of_life: int_to_sentinel(university.scale_quality_of_life()),
            webpage_url: university.webpage_url().map(str::to_string),
            image_url: university.image_url().map(str::to_string),
        }
    }
}

impl From<University> for NewUniversity {
    fn from(row: University) -> Self {
        Self {
            name: row.name,
            state: row.state,
            location: row.location,
            control: row.control,
            num_students: row.num_students,
            percent_female: row.percent_female,
            sat_verbal: row.sat_verbal,
            sat_math: row.sat_math,
            expenses: row.expenses,
            percent_financial_aid: row.percent_financial_aid,
            num_applicants: row.num_applicants,
            percent_admitted: row.percent_admitted,
            percent_enrolled: row.percent_enrolled,
            scale_academics: row.scale_academics,
            scale_social: row.scale_social,
            scale_quality_of_life: row.scale_quality_of_life,
            webpage_url: row.webpage_url,
            image_url: row.image_url,
        }
    }
}
