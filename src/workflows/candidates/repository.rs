use async_trait::async_trait;

use super::domain::{Candidate, CandidateId, Education, Resume, SavedCandidate, WorkExperience};

/// Storage abstraction so the intake workflow can be exercised in isolation.
///
/// Each insert is an independent await point. The primary insert resolves with
/// the stored representation carrying the backend-assigned identity; child
/// inserts establish the ownership relationship against that identity.
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    async fn insert_candidate(
        &self,
        candidate: &Candidate,
    ) -> Result<SavedCandidate, PersistenceError>;

    async fn insert_education(
        &self,
        candidate_id: CandidateId,
        education: &Education,
    ) -> Result<(), PersistenceError>;

    async fn insert_work_experience(
        &self,
        candidate_id: CandidateId,
        experience: &WorkExperience,
    ) -> Result<(), PersistenceError>;

    async fn insert_resume(
        &self,
        candidate_id: CandidateId,
        resume: &Resume,
    ) -> Result<(), PersistenceError>;
}

/// Error enumeration for persistence failures.
///
/// The backend error is opaque except for one recognized discriminator: a
/// rejected write caused by a uniqueness constraint, which backends report
/// with a structured code and adapters translate into `UniqueViolation`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistenceError {
    #[error("unique constraint violated on {constraint}")]
    UniqueViolation { constraint: String },
    #[error("{0}")]
    Backend(String),
}
