//! Filter and similarity search over the university catalog.
//!
//! Both searches pull a fresh snapshot from the injected
//! [`UniversityReader`] on every call and return matches in catalog order.
//! Reader failures are returned unchanged.

use crate::domain::sentinel::{SENTINEL_FLOAT, SENTINEL_TEXT};
use crate::domain::university::University;
use crate::repository::{RepositoryResult, UniversityReader};
use crate::{
    ACADEMIC_SCALE_TOLERANCE, ADMISSION_RATE_TOLERANCE, MIN_COMBINED_SAT, SAT_TOLERANCE,
    SIMILARITY_THRESHOLD, STUDENT_COUNT_TOLERANCE,
};

/// Exact-match criteria for [`SearchEngine::filter`]. `None` ignores a criterion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    /// Upper-cased state name.
    pub state: Option<String>,
    pub num_students: Option<i64>,
}

impl SearchFilter {
    /// Builds a filter from raw user input.
    ///
    /// A missing or empty state and a negative student count each disable
    /// their criterion.
    pub fn new(state: Option<&str>, num_students: i64) -> Self {
        Self {
            state: state
                .filter(|state| !state.is_empty())
                .map(str::to_uppercase),
            num_students: (num_students >= 0).then_some(num_students),
        }
    }

    pub fn matches(&self, university: &University) -> bool {
        let state_match = match &self.state {
            None => true,
            Some(state) => university
                .state()
                .is_some_and(|value| value.to_uppercase() == *state),
        };

        let count_match = match self.num_students {
            None => true,
            Some(count) => university
                .num_students()
                .is_some_and(|value| i64::from(value) == count),
        };

        state_match && count_match
    }
}

/// The seven independent comparisons behind [`similarity_score`].
///
/// Each criterion is only considered when both universities carry usable
/// data for it; otherwise it contributes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    Location,
    Control,
    State,
    StudentCount,
    CombinedSat,
    AdmissionRate,
    AcademicScale,
}

impl Criterion {
    pub const ALL: [Criterion; 7] = [
        Criterion::Location,
        Criterion::Control,
        Criterion::State,
        Criterion::StudentCount,
        Criterion::CombinedSat,
        Criterion::AdmissionRate,
        Criterion::AcademicScale,
    ];

    /// Whether `candidate` earns this criterion's point against `target`.
    pub fn matches(self, target: &University, candidate: &University) -> bool {
        match self {
            Criterion::Location => same_text(target.location(), candidate.location()),
            Criterion::Control => same_text(target.control(), candidate.control()),
            Criterion::State => same_text(target.state(), candidate.state()),
            Criterion::StudentCount => match (target.num_students(), candidate.num_students()) {
                (Some(target), Some(candidate)) if target > 0 && candidate > 0 => {
                    let target = f64::from(target);
                    let lower = target * (1.0 - STUDENT_COUNT_TOLERANCE);
                    let upper = target * (1.0 + STUDENT_COUNT_TOLERANCE);
                    (lower..=upper).contains(&f64::from(candidate))
                }
                _ => false,
            },
            Criterion::CombinedSat => {
                let target = combined_sat(target);
                let candidate = combined_sat(candidate);
                target >= MIN_COMBINED_SAT
                    && candidate >= MIN_COMBINED_SAT
                    && (target - candidate).abs() <= SAT_TOLERANCE
            }
            Criterion::AdmissionRate => {
                match (target.percent_admitted(), candidate.percent_admitted()) {
                    (Some(target), Some(candidate)) if target >= 0.0 && candidate >= 0.0 => {
                        (target - candidate).abs() <= ADMISSION_RATE_TOLERANCE
                    }
                    _ => false,
                }
            }
            Criterion::AcademicScale => {
                match (target.scale_academics(), candidate.scale_academics()) {
                    (Some(target), Some(candidate)) if target > 0 && candidate > 0 => {
                        target.abs_diff(candidate) <= ACADEMIC_SCALE_TOLERANCE
                    }
                    _ => false,
                }
            }
        }
    }
}

/// True when `value` holds meaningful text: present, non-empty and not the
/// `"-1"` placeholder.
pub fn is_valid_value(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.is_empty() && value != SENTINEL_TEXT)
}

fn same_text(target: Option<&str>, candidate: Option<&str>) -> bool {
    is_valid_value(target) && is_valid_value(candidate) && target == candidate
}

// A single missing section counts as -1, so verbal-only or math-only data
// can still clear the MIN_COMBINED_SAT floor.
fn combined_sat(university: &University) -> f64 {
    university.sat_verbal().unwrap_or(SENTINEL_FLOAT)
        + university.sat_math().unwrap_or(SENTINEL_FLOAT)
}

/// Number of [`Criterion`]s on which `candidate` matches `target`.
pub fn similarity_score(target: &University, candidate: &University) -> u32 {
    Criterion::ALL
        .iter()
        .filter(|criterion| criterion.matches(target, candidate))
        .count() as u32
}

/// Search operations over the catalog supplied by `R`.
pub struct SearchEngine<R> {
    catalog: R,
}

impl<R> SearchEngine<R>
where
    R: UniversityReader,
{
    pub fn new(catalog: R) -> Self {
        Self { catalog }
    }

    /// Universities in `state` (case-insensitive) with exactly
    /// `num_students` students. An empty state or negative count is ignored.
    pub fn search(&self, state: Option<&str>, num_students: i64) -> RepositoryResult<Vec<University>> {
        self.filter(&SearchFilter::new(state, num_students))
    }

    pub fn filter(&self, filter: &SearchFilter) -> RepositoryResult<Vec<University>> {
        let universities = self.catalog.list_universities()?;

        let matches = universities
            .into_iter()
            .filter(|university| filter.matches(university))
            .collect::<Vec<_>>();

        log::debug!("Search {filter:?} matched {} universities", matches.len());

        Ok(matches)
    }

    /// Universities sharing at least [`SIMILARITY_THRESHOLD`] criteria with
    /// `target`, excluding any record with the target's name.
    ///
    /// `target` does not need to exist in the catalog. A missing target
    /// yields an empty list without touching the catalog.
    pub fn find_similar(&self, target: Option<&University>) -> RepositoryResult<Vec<University>> {
        let Some(target) = target else {
            return Ok(Vec::new());
        };

        let universities = self.catalog.list_universities()?;

        let similar = universities
            .into_iter()
            .filter(|candidate| candidate.name() != target.name())
            .filter(|candidate| similarity_score(target, candidate) >= SIMILARITY_THRESHOLD)
            .collect::<Vec<_>>();

        log::debug!(
            "Found {} universities similar to {}",
            similar.len(),
            target.name()
        );

        Ok(similar)
    }
}
