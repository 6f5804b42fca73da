use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::domain::{Candidate, CandidateId, Education, Resume, SavedCandidate, WorkExperience};
use super::repository::{CandidateRepository, PersistenceError};

const EMAIL_CONSTRAINT: &str = "candidates.email";

/// Thread-safe in-process adapter behind the repository port.
///
/// Assigns sequential identities, enforces the unique-email constraint the
/// way a backing database would, and keeps child records keyed by candidate
/// id. Used by the service binary and by the integration tests.
#[derive(Default)]
pub struct InMemoryCandidateRepository {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    next_id: i64,
    candidates: Vec<SavedCandidate>,
    educations: HashMap<CandidateId, Vec<Education>>,
    work_experiences: HashMap<CandidateId, Vec<WorkExperience>>,
    resumes: HashMap<CandidateId, Vec<Resume>>,
}

impl InMemoryCandidateRepository {
    pub fn candidates(&self) -> Vec<SavedCandidate> {
        self.state
            .lock()
            .expect("repository mutex poisoned")
            .candidates
            .clone()
    }

    pub fn educations_for(&self, candidate_id: CandidateId) -> Vec<Education> {
        let state = self.state.lock().expect("repository mutex poisoned");
        state
            .educations
            .get(&candidate_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn work_experiences_for(&self, candidate_id: CandidateId) -> Vec<WorkExperience> {
        let state = self.state.lock().expect("repository mutex poisoned");
        state
            .work_experiences
            .get(&candidate_id)
            .cloned()
            .unwrap_or_default()
    }

    pub fn resumes_for(&self, candidate_id: CandidateId) -> Vec<Resume> {
        let state = self.state.lock().expect("repository mutex poisoned");
        state
            .resumes
            .get(&candidate_id)
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl CandidateRepository for InMemoryCandidateRepository {
    async fn insert_candidate(
        &self,
        candidate: &Candidate,
    ) -> Result<SavedCandidate, PersistenceError> {
        let mut state = self.state.lock().expect("repository mutex poisoned");

        let duplicate = state
            .candidates
            .iter()
            .any(|existing| existing.email.eq_ignore_ascii_case(candidate.email()));
        if duplicate {
            return Err(PersistenceError::UniqueViolation {
                constraint: EMAIL_CONSTRAINT.to_string(),
            });
        }

        state.next_id += 1;
        let saved = SavedCandidate {
            id: CandidateId(state.next_id),
            name: candidate.name().to_string(),
            email: candidate.email().to_string(),
            phone: candidate.phone().map(str::to_string),
            address: candidate.address().map(str::to_string),
        };
        state.candidates.push(saved.clone());
        Ok(saved)
    }

    async fn insert_education(
        &self,
        candidate_id: CandidateId,
        education: &Education,
    ) -> Result<(), PersistenceError> {
        let mut state = self.state.lock().expect("repository mutex poisoned");
        if !state.candidates.iter().any(|c| c.id == candidate_id) {
            return Err(PersistenceError::Backend(format!(
                "unknown candidate id {}",
                candidate_id.0
            )));
        }
        state
            .educations
            .entry(candidate_id)
            .or_default()
            .push(education.clone());
        Ok(())
    }

    async fn insert_work_experience(
        &self,
        candidate_id: CandidateId,
        experience: &WorkExperience,
    ) -> Result<(), PersistenceError> {
        let mut state = self.state.lock().expect("repository mutex poisoned");
        if !state.candidates.iter().any(|c| c.id == candidate_id) {
            return Err(PersistenceError::Backend(format!(
                "unknown candidate id {}",
                candidate_id.0
            )));
        }
        state
            .work_experiences
            .entry(candidate_id)
            .or_default()
            .push(experience.clone());
        Ok(())
    }

    async fn insert_resume(
        &self,
        candidate_id: CandidateId,
        resume: &Resume,
    ) -> Result<(), PersistenceError> {
        let mut state = self.state.lock().expect("repository mutex poisoned");
        if !state.candidates.iter().any(|c| c.id == candidate_id) {
            return Err(PersistenceError::Backend(format!(
                "unknown candidate id {}",
                candidate_id.0
            )));
        }
        state
            .resumes
            .entry(candidate_id)
            .or_default()
            .push(resume.clone());
        Ok(())
    }
}
