use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::Value;

use crate::workflows::candidates::domain::{
    Candidate, CandidateId, CandidateInput, Education, EducationInput, Resume, ResumeInput,
    SavedCandidate, WorkExperience, WorkExperienceInput,
};
use crate::workflows::candidates::repository::{CandidateRepository, PersistenceError};
use crate::workflows::candidates::service::CandidateIntakeService;

pub(super) fn minimal_input(name: &str, email: &str) -> CandidateInput {
    CandidateInput {
        name: name.to_string(),
        email: email.to_string(),
        ..CandidateInput::default()
    }
}

pub(super) fn input_with_educations() -> CandidateInput {
    CandidateInput {
        educations: Some(vec![
            EducationInput {
                title: "Grado".to_string(),
                institution: "Uni".to_string(),
                year: 2020,
            },
            EducationInput {
                title: "Máster".to_string(),
                institution: "Uni2".to_string(),
                year: 2022,
            },
        ]),
        ..minimal_input("Ana", "ana@email.com")
    }
}

pub(super) fn input_with_work_experience() -> CandidateInput {
    CandidateInput {
        work_experiences: Some(vec![WorkExperienceInput {
            position: "Dev".to_string(),
            company: "Empresa1".to_string(),
            year: 2021,
        }]),
        ..minimal_input("Luis", "luis@email.com")
    }
}

pub(super) fn input_with_cv() -> CandidateInput {
    CandidateInput {
        cv: Some(ResumeInput {
            url: "cv.pdf".to_string(),
            file_type: "pdf".to_string(),
        }),
        ..minimal_input("Marta", "marta@email.com")
    }
}

pub(super) fn saved_from(candidate: &Candidate, id: i64) -> SavedCandidate {
    SavedCandidate {
        id: CandidateId(id),
        name: candidate.name().to_string(),
        email: candidate.email().to_string(),
        phone: candidate.phone().map(str::to_string),
        address: candidate.address().map(str::to_string),
    }
}

/// Repository double recording every insert in call order.
#[derive(Default)]
pub(super) struct RecordingRepository {
    calls: Mutex<Vec<String>>,
}

impl RecordingRepository {
    pub(super) fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("call log mutex poisoned").clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().expect("call log mutex poisoned").push(call);
    }
}

#[async_trait]
impl CandidateRepository for RecordingRepository {
    async fn insert_candidate(
        &self,
        candidate: &Candidate,
    ) -> Result<SavedCandidate, PersistenceError> {
        self.record(format!("candidate:{}", candidate.email()));
        Ok(saved_from(candidate, 1))
    }

    async fn insert_education(
        &self,
        _candidate_id: CandidateId,
        education: &Education,
    ) -> Result<(), PersistenceError> {
        self.record(format!("education:{}", education.title));
        Ok(())
    }

    async fn insert_work_experience(
        &self,
        _candidate_id: CandidateId,
        experience: &WorkExperience,
    ) -> Result<(), PersistenceError> {
        self.record(format!("work_experience:{}", experience.position));
        Ok(())
    }

    async fn insert_resume(
        &self,
        _candidate_id: CandidateId,
        resume: &Resume,
    ) -> Result<(), PersistenceError> {
        self.record(format!("resume:{}", resume.url));
        Ok(())
    }
}

/// Repository double whose primary insert always reports the uniqueness
/// discriminator.
#[derive(Default)]
pub(super) struct DuplicateEmailRepository;

#[async_trait]
impl CandidateRepository for DuplicateEmailRepository {
    async fn insert_candidate(
        &self,
        _candidate: &Candidate,
    ) -> Result<SavedCandidate, PersistenceError> {
        Err(PersistenceError::UniqueViolation {
            constraint: "candidates.email".to_string(),
        })
    }

    async fn insert_education(
        &self,
        _candidate_id: CandidateId,
        _education: &Education,
    ) -> Result<(), PersistenceError> {
        panic!("no child may be persisted when the primary insert fails");
    }

    async fn insert_work_experience(
        &self,
        _candidate_id: CandidateId,
        _experience: &WorkExperience,
    ) -> Result<(), PersistenceError> {
        panic!("no child may be persisted when the primary insert fails");
    }

    async fn insert_resume(
        &self,
        _candidate_id: CandidateId,
        _resume: &Resume,
    ) -> Result<(), PersistenceError> {
        panic!("no child may be persisted when the primary insert fails");
    }
}

/// Repository double whose primary insert fails with an arbitrary backend
/// message.
pub(super) struct FailingPrimaryRepository {
    pub(super) message: String,
}

#[async_trait]
impl CandidateRepository for FailingPrimaryRepository {
    async fn insert_candidate(
        &self,
        _candidate: &Candidate,
    ) -> Result<SavedCandidate, PersistenceError> {
        Err(PersistenceError::Backend(self.message.clone()))
    }

    async fn insert_education(
        &self,
        _candidate_id: CandidateId,
        _education: &Education,
    ) -> Result<(), PersistenceError> {
        panic!("no child may be persisted when the primary insert fails");
    }

    async fn insert_work_experience(
        &self,
        _candidate_id: CandidateId,
        _experience: &WorkExperience,
    ) -> Result<(), PersistenceError> {
        panic!("no child may be persisted when the primary insert fails");
    }

    async fn insert_resume(
        &self,
        _candidate_id: CandidateId,
        _resume: &Resume,
    ) -> Result<(), PersistenceError> {
        panic!("no child may be persisted when the primary insert fails");
    }
}

/// Repository double where one education insert fails while the primary and
/// every other child insert succeed, recording the attempts.
#[derive(Default)]
pub(super) struct FlakyEducationRepository {
    recorder: RecordingRepository,
    pub(super) failing_title: String,
}

impl FlakyEducationRepository {
    pub(super) fn failing_on(title: &str) -> Self {
        Self {
            recorder: RecordingRepository::default(),
            failing_title: title.to_string(),
        }
    }

    pub(super) fn calls(&self) -> Vec<String> {
        self.recorder.calls()
    }
}

#[async_trait]
impl CandidateRepository for FlakyEducationRepository {
    async fn insert_candidate(
        &self,
        candidate: &Candidate,
    ) -> Result<SavedCandidate, PersistenceError> {
        self.recorder.insert_candidate(candidate).await
    }

    async fn insert_education(
        &self,
        candidate_id: CandidateId,
        education: &Education,
    ) -> Result<(), PersistenceError> {
        if education.title == self.failing_title {
            return Err(PersistenceError::Backend(format!(
                "write failed for {}",
                education.title
            )));
        }
        self.recorder.insert_education(candidate_id, education).await
    }

    async fn insert_work_experience(
        &self,
        candidate_id: CandidateId,
        experience: &WorkExperience,
    ) -> Result<(), PersistenceError> {
        self.recorder
            .insert_work_experience(candidate_id, experience)
            .await
    }

    async fn insert_resume(
        &self,
        candidate_id: CandidateId,
        resume: &Resume,
    ) -> Result<(), PersistenceError> {
        self.recorder.insert_resume(candidate_id, resume).await
    }
}

pub(super) fn service_over<R: CandidateRepository + 'static>(
    repository: R,
) -> (CandidateIntakeService<R>, Arc<R>) {
    let repository = Arc::new(repository);
    (CandidateIntakeService::new(repository.clone()), repository)
}

pub(super) async fn read_json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
