use crate::domain::DomainError;
use crate::domain::university::University;
use crate::repository::{RepositoryError, UniversityReader, UniversityWriter};
use crate::services::{ServiceError, ServiceResult, require_affected};

/// Administrator operations on university records and their emphases.
pub struct UniversityService<R> {
    repo: R,
}

impl<R> UniversityService<R>
where
    R: UniversityReader + UniversityWriter,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Looks up a university by its exact upper-case name.
    pub fn get_university(&self, name: &str) -> ServiceResult<Option<University>> {
        if !University::is_valid_name(name) {
            return Err(DomainError::InvalidName(name.to_string()).into());
        }

        match self.repo.get_university(name) {
            Ok(university) => Ok(Some(university)),
            Err(RepositoryError::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn list_universities(&self) -> ServiceResult<Vec<University>> {
        Ok(self.repo.list_universities()?)
    }

    pub fn list_emphases(&self) -> ServiceResult<Vec<String>> {
        Ok(self.repo.list_emphases()?)
    }

    /// Fails with a repository conflict when the name is already taken.
    pub fn add_university(&self, university: &University) -> ServiceResult<()> {
        self.repo.create_university(university)?;
        log::info!("Added university {}", university.name());
        Ok(())
    }

    pub fn edit_university(&self, university: &University) -> ServiceResult<()> {
        let affected = self.repo.update_university(university)?;
        require_affected(affected, university.name())?;
        log::info!("Updated university {}", university.name());
        Ok(())
    }

    /// Deletes the university, its emphases and every saved-school entry
    /// pointing at it.
    pub fn remove_university(&self, name: &str) -> ServiceResult<()> {
        let affected = self.repo.delete_university(name)?;
        require_affected(affected, name)?;
        log::info!("Removed university {name}");
        Ok(())
    }

    pub fn add_emphasis(&self, name: &str, emphasis: &str) -> ServiceResult<()> {
        match self.repo.add_emphasis(name, emphasis) {
            Ok(_) => Ok(()),
            Err(RepositoryError::NotFound) => Err(ServiceError::NotFound(name.to_string())),
            Err(e) => Err(e.into()),
        }
    }

    /// Returns `false` when the university had no such emphasis.
    pub fn remove_emphasis(&self, name: &str, emphasis: &str) -> ServiceResult<bool> {
        Ok(self.repo.remove_emphasis(name, emphasis)? > 0)
    }
}
