//! Patient submission types.
//!
//! A [`Submission`] is what the form hands over, unvalidated. A [`PatientInput`] is the validated
//! triple that response producers receive.

use crate::constants::EMPTY_SYMPTOMS_MESSAGE;
use crate::{GuideError, GuideResult};
use medguide_types::{Age, Gender, NonEmptyText};

/// Raw form values for one submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Submission {
    pub age: i64,
    pub gender: Gender,
    pub symptoms: String,
}

impl Submission {
    pub fn new(age: i64, gender: Gender, symptoms: impl Into<String>) -> Self {
        Self {
            age,
            gender,
            symptoms: symptoms.into(),
        }
    }

    /// Validate the raw values.
    ///
    /// An empty symptom description is reported before any other problem. Only a zero-length
    /// description counts as empty; whitespace is passed through to the producer as written.
    ///
    /// # Errors
    ///
    /// Returns `GuideError::InvalidInput` with a user-facing message if the symptoms are empty
    /// or the age is outside `0..=120`.
    pub fn validate(&self) -> GuideResult<PatientInput> {
        let symptoms = NonEmptyText::new(self.symptoms.clone())
            .map_err(|_| GuideError::InvalidInput(EMPTY_SYMPTOMS_MESSAGE.into()))?;
        let age = Age::new(self.age).map_err(|_| {
            GuideError::InvalidInput(format!("Age must be between 0 and {}.", Age::MAX))
        })?;

        Ok(PatientInput {
            age,
            gender: self.gender,
            symptoms,
        })
    }
}

/// Validated patient details passed to a response producer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatientInput {
    pub age: Age,
    pub gender: Gender,
    pub symptoms: NonEmptyText,
}
