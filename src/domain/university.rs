//! University records as seen by the services and the search engine.
//!
//! Unknown attributes are `None`. Every setter validates its bound, so a
//! `University` that exists is always within the documented ranges.

use std::str::FromStr;

use crate::domain::sentinel::{SENTINEL_FLOAT, SENTINEL_TEXT, text_from_sentinel};
use crate::domain::{DomainError, DomainResult};

const PERCENT_MIN: f64 = 0.0;
const PERCENT_MAX: f64 = 100.0;
const SAT_MIN: f64 = 200.0;
const SAT_MAX: f64 = 800.0;
const SCALE_MAX: u8 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct University {
    name: String,
    state: Option<String>,
    location: Option<String>,
    control: Option<String>,
    num_students: Option<u32>,
    num_applicants: Option<u32>,
    percent_female: Option<f64>,
    percent_financial_aid: Option<f64>,
    percent_admitted: Option<f64>,
    percent_enrolled: Option<f64>,
    sat_verbal: Option<f64>,
    sat_math: Option<f64>,
    expenses: Option<f64>,
    scale_academics: Option<u8>,
    scale_social: Option<u8>,
    scale_quality_of_life: Option<u8>,
    webpage_url: Option<String>,
    image_url: Option<String>,
    emphases: Vec<String>,
}

/// Editable attributes of a [`University`], in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniversityField {
    State,
    Location,
    Control,
    NumStudents,
    PercentFemale,
    SatVerbal,
    SatMath,
    Expenses,
    PercentFinancialAid,
    NumApplicants,
    PercentAdmitted,
    PercentEnrolled,
    ScaleAcademics,
    ScaleSocial,
    ScaleQualityOfLife,
    WebpageUrl,
    ImageUrl,
}

impl UniversityField {
    pub const ALL: [UniversityField; 17] = [
        UniversityField::State,
        UniversityField::Location,
        UniversityField::Control,
        UniversityField::NumStudents,
        UniversityField::PercentFemale,
        UniversityField::SatVerbal,
        UniversityField::SatMath,
        UniversityField::Expenses,
        UniversityField::PercentFinancialAid,
        UniversityField::NumApplicants,
        UniversityField::PercentAdmitted,
        UniversityField::PercentEnrolled,
        UniversityField::ScaleAcademics,
        UniversityField::ScaleSocial,
        UniversityField::ScaleQualityOfLife,
        UniversityField::WebpageUrl,
        UniversityField::ImageUrl,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UniversityField::State => "State",
            UniversityField::Location => "Location",
            UniversityField::Control => "Control",
            UniversityField::NumStudents => "Number of Students",
            UniversityField::PercentFemale => "Percent Female",
            UniversityField::SatVerbal => "SAT Verbal",
            UniversityField::SatMath => "SAT Math",
            UniversityField::Expenses => "Expenses",
            UniversityField::PercentFinancialAid => "Percent Financial Aid",
            UniversityField::NumApplicants => "Number of Applicants",
            UniversityField::PercentAdmitted => "Percent Admitted",
            UniversityField::PercentEnrolled => "Percent Enrolled",
            UniversityField::ScaleAcademics => "Academics Scale",
            UniversityField::ScaleSocial => "Social Scale",
            UniversityField::ScaleQualityOfLife => "Quality of Life Scale",
            UniversityField::WebpageUrl => "Webpage URL",
            UniversityField::ImageUrl => "Image URL",
        }
    }

    /// Links are free text: case is kept and they are optional in listings.
    pub fn is_link(self) -> bool {
        matches!(self, UniversityField::WebpageUrl | UniversityField::ImageUrl)
    }
}

impl University {
    /// Creates a university with a name and otherwise unknown information.
    pub fn new(name: &str) -> DomainResult<Self> {
        if !Self::is_valid_name(name) {
            return Err(DomainError::InvalidName(name.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            state: None,
            location: None,
            control: None,
            num_students: None,
            num_applicants: None,
            percent_female: None,
            percent_financial_aid: None,
            percent_admitted: None,
            percent_enrolled: None,
            sat_verbal: None,
            sat_math: None,
            expenses: None,
            scale_academics: None,
            scale_social: None,
            scale_quality_of_life: None,
            webpage_url: None,
            image_url: None,
            emphases: Vec::new(),
        })
    }

    /// Names are the catalog key: non-blank and already upper-cased.
    pub fn is_valid_name(name: &str) -> bool {
        !name.trim().is_empty() && is_upper_case(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn control(&self) -> Option<&str> {
        self.control.as_deref()
    }

    pub fn num_students(&self) -> Option<u32> {
        self.num_students
    }

    pub fn num_applicants(&self) -> Option<u32> {
        self.num_applicants
    }

    pub fn percent_female(&self) -> Option<f64> {
        self.percent_female
    }

    pub fn percent_financial_aid(&self) -> Option<f64> {
        self.percent_financial_aid
    }

    pub fn percent_admitted(&self) -> Option<f64> {
        self.percent_admitted
    }

    pub fn percent_enrolled(&self) -> Option<f64> {
        self.percent_enrolled
    }

    pub fn sat_verbal(&self) -> Option<f64> {
        self.sat_verbal
    }

    pub fn sat_math(&self) -> Option<f64> {
        self.sat_math
    }

    pub fn expenses(&self) -> Option<f64> {
        self.expenses
    }

    pub fn scale_academics(&self) -> Option<u8> {
        self.scale_academics
    }

    pub fn scale_social(&self) -> Option<u8> {
        self.scale_social
    }

    pub fn scale_quality_of_life(&self) -> Option<u8> {
        self.scale_quality_of_life
    }

    pub fn webpage_url(&self) -> Option<&str> {
        self.webpage_url.as_deref()
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn emphases(&self) -> &[String] {
        &self.emphases
    }

    pub fn set_state(&mut self, state: Option<&str>) -> DomainResult<()> {
        self.state = upper_text("State", state)?;
        Ok(())
    }

    pub fn set_location(&mut self, location: Option<&str>) -> DomainResult<()> {
        self.location = upper_text("Location", location)?;
        Ok(())
    }

    pub fn set_control(&mut self, control: Option<&str>) -> DomainResult<()> {
        self.control = upper_text("Control", control)?;
        Ok(())
    }

    pub fn set_num_students(&mut self, num_students: Option<u32>) {
        self.num_students = num_students;
    }

    pub fn set_num_applicants(&mut self, num_applicants: Option<u32>) {
        self.num_applicants = num_applicants;
    }

    pub fn set_percent_female(&mut self, value: Option<f64>) -> DomainResult<()> {
        self.percent_female = bounded("Percent Female", value, PERCENT_MIN, PERCENT_MAX)?;
        Ok(())
    }

    pub fn set_percent_financial_aid(&mut self, value: Option<f64>) -> DomainResult<()> {
        self.percent_financial_aid =
            bounded("Percent Financial Aid", value, PERCENT_MIN, PERCENT_MAX)?;
        Ok(())
    }

    pub fn set_percent_admitted(&mut self, value: Option<f64>) -> DomainResult<()> {
        self.percent_admitted = bounded("Percent Admitted", value, PERCENT_MIN, PERCENT_MAX)?;
        Ok(())
    }

    pub fn set_percent_enrolled(&mut self, value: Option<f64>) -> DomainResult<()> {
        self.percent_enrolled = bounded("Percent Enrolled", value, PERCENT_MIN, PERCENT_MAX)?;
        Ok(())
    }

    pub fn set_sat_verbal(&mut self, value: Option<f64>) -> DomainResult<()> {
        self.sat_verbal = bounded("SAT Verbal", value, SAT_MIN, SAT_MAX)?;
        Ok(())
    }

    pub fn set_sat_math(&mut self, value: Option<f64>) -> DomainResult<()> {
        self.sat_math = bounded("SAT Math", value, SAT_MIN, SAT_MAX)?;
        Ok(())
    }

    pub fn set_expenses(&mut self, value: Option<f64>) -> DomainResult<()> {
        self.expenses = bounded("Expenses", value, 0.0, f64::INFINITY)?;
        Ok(())
    }

    pub fn set_scale_academics(&mut self, value: Option<u8>) -> DomainResult<()> {
        self.scale_academics = scale("Academics Scale", value)?;
        Ok(())
    }

    pub fn set_scale_social(&mut self, value: Option<u8>) -> DomainResult<()> {
        self.scale_social = scale("Social Scale", value)?;
        Ok(())
    }

    pub fn set_scale_quality_of_life(&mut self, value: Option<u8>) -> DomainResult<()> {
        self.scale_quality_of_life = scale("Quality of Life Scale", value)?;
        Ok(())
    }

    pub fn set_webpage_url(&mut self, url: Option<&str>) {
        self.webpage_url = url.and_then(|url| text_from_sentinel(url.trim()));
    }

    pub fn set_image_url(&mut self, url: Option<&str>) {
        self.image_url = url.and_then(|url| text_from_sentinel(url.trim()));
    }

    pub fn add_emphasis(&mut self, emphasis: &str) {
        self.emphases.push(emphasis.to_string());
    }

    /// Removes the first matching emphasis, reporting whether one was found.
    pub fn remove_emphasis(&mut self, emphasis: &str) -> bool {
        match self.emphases.iter().position(|value| value == emphasis) {
            Some(index) => {
                self.emphases.remove(index);
                true
            }
            None => false,
        }
    }

    /// Current value of `field`, or `None` when unknown.
    pub fn field_value(&self, field: UniversityField) -> Option<String> {
        match field {
            UniversityField::State => self.state.clone(),
            UniversityField::Location => self.location.clone(),
            UniversityField::Control => self.control.clone(),
            UniversityField::NumStudents => self.num_students.map(|v| v.to_string()),
            UniversityField::PercentFemale => self.percent_female.map(|v| v.to_string()),
            UniversityField::SatVerbal => self.sat_verbal.map(|v| v.to_string()),
            UniversityField::SatMath => self.sat_math.map(|v| v.to_string()),
            UniversityField::Expenses => self.expenses.map(|v| v.to_string()),
            UniversityField::PercentFinancialAid => {
                self.percent_financial_aid.map(|v| v.to_string())
            }
            UniversityField::NumApplicants => self.num_applicants.map(|v| v.to_string()),
            UniversityField::PercentAdmitted => self.percent_admitted.map(|v| v.to_string()),
            UniversityField::PercentEnrolled => self.percent_enrolled.map(|v| v.to_string()),
            UniversityField::ScaleAcademics => self.scale_academics.map(|v| v.to_string()),
            UniversityField::ScaleSocial => self.scale_social.map(|v| v.to_string()),
            UniversityField::ScaleQualityOfLife => {
                self.scale_quality_of_life.map(|v| v.to_string())
            }
            UniversityField::WebpageUrl => self.webpage_url.clone(),
            UniversityField::ImageUrl => self.image_url.clone(),
        }
    }

    /// Parses `raw` and assigns it to `field`.
    ///
    /// An empty string or `-1` clears the value.
    pub fn set_field(&mut self, field: UniversityField, raw: &str) -> DomainResult<()> {
        let raw = raw.trim();
        match field {
            UniversityField::State => self.set_state(Some(raw)),
            UniversityField::Location => self.set_location(Some(raw)),
            UniversityField::Control => self.set_control(Some(raw)),
            UniversityField::NumStudents => {
                self.set_num_students(parse_value(field, raw)?);
                Ok(())
            }
            UniversityField::NumApplicants => {
                self.set_num_applicants(parse_value(field, raw)?);
                Ok(())
            }
            UniversityField::PercentFemale => self.set_percent_female(parse_real(field, raw)?),
            UniversityField::SatVerbal => self.set_sat_verbal(parse_real(field, raw)?),
            UniversityField::SatMath => self.set_sat_math(parse_real(field, raw)?),
            UniversityField::Expenses => self.set_expenses(parse_real(field, raw)?),
            UniversityField::PercentFinancialAid => {
                self.set_percent_financial_aid(parse_real(field, raw)?)
            }
            UniversityField::PercentAdmitted => self.set_percent_admitted(parse_real(field, raw)?),
            UniversityField::PercentEnrolled => self.set_percent_enrolled(parse_real(field, raw)?),
            UniversityField::ScaleAcademics => self.set_scale_academics(parse_value(field, raw)?),
            UniversityField::ScaleSocial => self.set_scale_social(parse_value(field, raw)?),
            UniversityField::ScaleQualityOfLife => {
                self.set_scale_quality_of_life(parse_value(field, raw)?)
            }
            UniversityField::WebpageUrl => {
                self.set_webpage_url(Some(raw));
                Ok(())
            }
            UniversityField::ImageUrl => {
                self.set_image_url(Some(raw));
                Ok(())
            }
        }
    }
}

fn is_upper_case(value: &str) -> bool {
    value.to_uppercase() == value
}

fn upper_text(field: &'static str, value: Option<&str>) -> DomainResult<Option<String>> {
    match value.and_then(text_from_sentinel) {
        Some(value) if !is_upper_case(&value) => Err(DomainError::NotUpperCase { field, value }),
        other => Ok(other),
    }
}

fn bounded(field: &'static str, value: Option<f64>, min: f64, max: f64) -> DomainResult<Option<f64>> {
    match value {
        Some(value) if !(min..=max).contains(&value) => Err(DomainError::OutOfRange {
            field,
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }),
        other => Ok(other),
    }
}

fn scale(field: &'static str, value: Option<u8>) -> DomainResult<Option<u8>> {
    match value {
        Some(value) if value > SCALE_MAX => Err(DomainError::OutOfRange {
            field,
            value: value.to_string(),
            min: "0".to_string(),
            max: SCALE_MAX.to_string(),
        }),
        other => Ok(other),
    }
}

fn parse_value<T: FromStr>(field: UniversityField, raw: &str) -> DomainResult<Option<T>> {
    if raw.is_empty() || raw == SENTINEL_TEXT {
        return Ok(None);
    }
    raw.parse::<T>()
        .map(Some)
        .map_err(|_| DomainError::InvalidNumber {
            field: field.label(),
            value: raw.to_string(),
        })
}

fn parse_real(field: UniversityField, raw: &str) -> DomainResult<Option<f64>> {
    Ok(parse_value::<f64>(field, raw)?.filter(|value| *value != SENTINEL_FLOAT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_lower_case_and_blank_names() {
        assert!(University::new("AUGSBURG").is_ok());
        assert_eq!(
            University::new("Augsburg"),
            Err(DomainError::InvalidName("Augsburg".to_string()))
        );
        assert!(University::new("  ").is_err());
    }

    #[test]
    fn text_setters_require_upper_case_and_drop_sentinels() {
        let mut university = University::new("AUGSBURG").expect("valid name");

        assert!(university.set_state(Some("minnesota")).is_err());
        university.set_state(Some("MINNESOTA")).expect("upper case state");
        assert_eq!(university.state(), Some("MINNESOTA"));

        university.set_state(Some("-1")).expect("sentinel clears");
        assert_eq!(university.state(), None);
    }

    #[test]
    fn numeric_setters_enforce_bounds() {
        let mut university = University::new("AUGSBURG").expect("valid name");

        assert!(university.set_sat_math(Some(199.0)).is_err());
        assert!(university.set_sat_math(Some(800.0)).is_ok());
        assert!(university.set_percent_admitted(Some(100.5)).is_err());
        assert!(university.set_percent_admitted(Some(0.0)).is_ok());
        assert!(university.set_scale_social(Some(6)).is_err());
        assert!(university.set_expenses(Some(-3.0)).is_err());
        assert!(university.set_expenses(Some(f64::NAN)).is_err());
    }

    #[test]
    fn remove_emphasis_only_drops_first_match() {
        let mut university = University::new("AUGSBURG").expect("valid name");
        university.add_emphasis("MUSIC");
        university.add_emphasis("MUSIC");

        assert!(university.remove_emphasis("MUSIC"));
        assert_eq!(university.emphases(), ["MUSIC".to_string()]);
        assert!(!university.remove_emphasis("NURSING"));
    }

    #[test]
    fn set_field_parses_and_clears_values() {
        let mut university = University::new("AUGSBURG").expect("valid name");

        university
            .set_field(UniversityField::NumStudents, " 10000 ")
            .expect("count parses");
        assert_eq!(university.num_students(), Some(10000));

        university
            .set_field(UniversityField::PercentAdmitted, "-1.0")
            .expect("sentinel clears");
        assert_eq!(university.percent_admitted(), None);

        university
            .set_field(UniversityField::NumStudents, "-1")
            .expect("sentinel clears");
        assert_eq!(university.num_students(), None);

        assert!(matches!(
            university.set_field(UniversityField::SatMath, "lots"),
            Err(DomainError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn links_keep_their_case_and_clear_with_sentinel() {
        let mut university = University::new("AUGSBURG").expect("valid name");

        university
            .set_field(UniversityField::WebpageUrl, " https://www.augsburg.edu/ ")
            .expect("any text is a link");
        university.set_image_url(Some("https://example.org/Augsburg.png"));

        assert_eq!(university.webpage_url(), Some("https://www.augsburg.edu/"));
        assert_eq!(
            university.field_value(UniversityField::ImageUrl),
            Some("https://example.org/Augsburg.png".to_string())
        );
        assert!(UniversityField::ImageUrl.is_link());
        assert!(!UniversityField::State.is_link());

        university
            .set_field(UniversityField::WebpageUrl, "-1")
            .expect("sentinel clears");
        assert_eq!(university.webpage_url(), None);
    }

    #[test]
    fn field_value_reports_unknown_as_none() {
        let mut university = University::new("AUGSBURG").expect("valid name");
        university.set_scale_academics(Some(4)).expect("valid scale");

        assert_eq!(
            university.field_value(UniversityField::ScaleAcademics),
            Some("4".to_string())
        );
        assert_eq!(university.field_value(UniversityField::Location), None);
    }
}
