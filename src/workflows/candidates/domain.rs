use serde::{Deserialize, Serialize};

/// Identifier assigned to a candidate by the persistence backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub i64);

/// Raw, untrusted intake submission as received from the outer transport.
///
/// Every field defaults when missing so that shape problems surface as
/// validation errors rather than deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub educations: Option<Vec<EducationInput>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_experiences: Option<Vec<WorkExperienceInput>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv: Option<ResumeInput>,
}

/// One education entry of a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationInput {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub year: i32,
}

/// One work-experience entry of a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperienceInput {
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub year: i32,
}

/// Résumé descriptor of a submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeInput {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub file_type: String,
}

/// Education record owned by exactly one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Education {
    pub title: String,
    pub institution: String,
    pub year: i32,
}

impl Education {
    pub fn from_input(input: &EducationInput) -> Self {
        Self {
            title: input.title.clone(),
            institution: input.institution.clone(),
            year: input.year,
        }
    }
}

/// Work-experience record owned by exactly one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkExperience {
    pub position: String,
    pub company: String,
    pub year: i32,
}

impl WorkExperience {
    pub fn from_input(input: &WorkExperienceInput) -> Self {
        Self {
            position: input.position.clone(),
            company: input.company.clone(),
            year: input.year,
        }
    }
}

/// Résumé record owned by exactly one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resume {
    pub url: String,
    pub file_type: String,
}

impl Resume {
    pub fn from_input(input: &ResumeInput) -> Self {
        Self {
            url: input.url.clone(),
            file_type: input.file_type.clone(),
        }
    }
}

/// The primary intake aggregate: candidate fields plus the child records
/// attached ahead of persistence.
///
/// Construction copies only the top-level fields; the three ownership
/// collections start empty and children are attached in a separate, explicit
/// step. Attachment order is persistence order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    name: String,
    email: String,
    phone: Option<String>,
    address: Option<String>,
    education: Vec<Education>,
    work_experience: Vec<WorkExperience>,
    resumes: Vec<Resume>,
}

impl Candidate {
    pub fn from_input(input: &CandidateInput) -> Self {
        Self {
            name: input.name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            address: input.address.clone(),
            education: Vec::new(),
            work_experience: Vec::new(),
            resumes: Vec::new(),
        }
    }

    pub fn attach_education(&mut self, education: Education) {
        self.education.push(education);
    }

    pub fn attach_work_experience(&mut self, experience: WorkExperience) {
        self.work_experience.push(experience);
    }

    pub fn attach_resume(&mut self, resume: Resume) {
        self.resumes.push(resume);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn education(&self) -> &[Education] {
        &self.education
    }

    pub fn work_experience(&self) -> &[WorkExperience] {
        &self.work_experience
    }

    pub fn resumes(&self) -> &[Resume] {
        &self.resumes
    }
}

/// Persisted primary representation returned to callers once the backend has
/// assigned an identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedCandidate {
    pub id: CandidateId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}
