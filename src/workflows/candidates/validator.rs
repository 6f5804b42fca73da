use super::domain::CandidateInput;

/// Raised when a submission fails intake validation. The message travels to
/// the caller verbatim; the orchestrator never rewrites it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

const MIN_YEAR: i32 = 1900;
const MAX_YEAR: i32 = 2100;

/// Check a raw submission against the intake rules, reporting the first
/// defect found. Pure: no side effects, safe to call concurrently.
pub fn validate_candidate_data(input: &CandidateInput) -> Result<(), ValidationError> {
    if input.name.trim().is_empty() {
        return Err(ValidationError::new("Candidate name must not be empty"));
    }

    if !is_plausible_email(&input.email) {
        return Err(ValidationError::new(format!(
            "'{}' is not a valid email address",
            input.email
        )));
    }

    for education in input.educations.iter().flatten() {
        if education.title.trim().is_empty() {
            return Err(ValidationError::new("Education title must not be empty"));
        }
        if education.institution.trim().is_empty() {
            return Err(ValidationError::new(
                "Education institution must not be empty",
            ));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&education.year) {
            return Err(ValidationError::new(format!(
                "Education year {} is out of range",
                education.year
            )));
        }
    }

    for experience in input.work_experiences.iter().flatten() {
        if experience.position.trim().is_empty() {
            return Err(ValidationError::new(
                "Work experience position must not be empty",
            ));
        }
        if experience.company.trim().is_empty() {
            return Err(ValidationError::new(
                "Work experience company must not be empty",
            ));
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&experience.year) {
            return Err(ValidationError::new(format!(
                "Work experience year {} is out of range",
                experience.year
            )));
        }
    }

    if let Some(cv) = &input.cv {
        if cv.url.trim().is_empty() {
            return Err(ValidationError::new("Resume url must not be empty"));
        }
        if cv.file_type.trim().is_empty() {
            return Err(ValidationError::new("Resume file type must not be empty"));
        }
    }

    Ok(())
}

// Syntactic plausibility only; deliverability is the mail system's problem.
fn is_plausible_email(value: &str) -> bool {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !value.contains(char::is_whitespace)
}
