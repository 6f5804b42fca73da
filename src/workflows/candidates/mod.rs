//! Candidate intake: validation, aggregate assembly, and cascaded persistence.
//!
//! The service is the only public operation with non-trivial control flow: it
//! validates the raw submission, builds the candidate aggregate with its
//! education, work-experience, and résumé children, persists the primary
//! record, cascades the child records, and classifies persistence failures
//! into the intake error taxonomy.

pub mod domain;
pub mod memory;
pub mod repository;
pub mod router;
pub mod service;
pub mod validator;

#[cfg(test)]
mod tests;

pub use domain::{
    Candidate, CandidateId, CandidateInput, Education, EducationInput, Resume, ResumeInput,
    SavedCandidate, WorkExperience, WorkExperienceInput,
};
pub use memory::InMemoryCandidateRepository;
pub use repository::{CandidateRepository, PersistenceError};
pub use router::candidate_router;
pub use service::{CandidateIntakeError, CandidateIntakeService};
pub use validator::{validate_candidate_data, ValidationError};
