use std::sync::Arc;

use super::domain::{Candidate, CandidateInput, Education, Resume, SavedCandidate, WorkExperience};
use super::repository::{CandidateRepository, PersistenceError};
use super::validator::{validate_candidate_data, ValidationError};

/// Service composing the validator and the persistence port into the intake
/// pipeline.
pub struct CandidateIntakeService<R> {
    repository: Arc<R>,
}

impl<R> CandidateIntakeService<R>
where
    R: CandidateRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Add a candidate: validate the submission, assemble the aggregate,
    /// persist the primary record, then cascade the child records.
    ///
    /// Linear pipeline with short-circuit on failure. Validation failures
    /// surface before any entity exists or any I/O happens. The primary
    /// insert is the only point where a duplicate email can be reported;
    /// no child is persisted unless it succeeds. Child inserts run
    /// sequentially in attachment order and are not rolled back: a failing
    /// child does not undo the primary or its siblings, and the remaining
    /// children are still attempted before the first failure is surfaced.
    pub async fn add_candidate(
        &self,
        input: CandidateInput,
    ) -> Result<SavedCandidate, CandidateIntakeError> {
        validate_candidate_data(&input)?;

        let mut candidate = Candidate::from_input(&input);
        for education in input.educations.iter().flatten() {
            candidate.attach_education(Education::from_input(education));
        }
        for experience in input.work_experiences.iter().flatten() {
            candidate.attach_work_experience(WorkExperience::from_input(experience));
        }
        if let Some(cv) = &input.cv {
            candidate.attach_resume(Resume::from_input(cv));
        }

        let saved = match self.repository.insert_candidate(&candidate).await {
            Ok(saved) => saved,
            Err(PersistenceError::UniqueViolation { .. }) => {
                return Err(CandidateIntakeError::DuplicateEmail);
            }
            Err(other) => return Err(CandidateIntakeError::Persistence(other)),
        };

        let mut first_failure: Option<PersistenceError> = None;

        for education in candidate.education() {
            if let Err(err) = self.repository.insert_education(saved.id, education).await {
                first_failure.get_or_insert(err);
            }
        }
        for experience in candidate.work_experience() {
            if let Err(err) = self
                .repository
                .insert_work_experience(saved.id, experience)
                .await
            {
                first_failure.get_or_insert(err);
            }
        }
        for resume in candidate.resumes() {
            if let Err(err) = self.repository.insert_resume(saved.id, resume).await {
                first_failure.get_or_insert(err);
            }
        }

        match first_failure {
            Some(err) => Err(CandidateIntakeError::Persistence(err)),
            None => Ok(saved),
        }
    }
}

/// Error raised by the intake service, in propagation priority order.
#[derive(Debug, thiserror::Error)]
pub enum CandidateIntakeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("The email already exists in the database")]
    DuplicateEmail,
    #[error(transparent)]
    Persistence(PersistenceError),
}
