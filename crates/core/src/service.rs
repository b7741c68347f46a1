//! Submission handling shared by every front end.

use std::sync::Arc;

use crate::config::{CoreConfig, ProducerMode};
use crate::emergency::{detect_emergency, matched_keywords, EmergencyNotice};
use crate::patient::Submission;
use crate::producer::{build_producer, ResponseProducer};
use crate::{GuideError, GuideResult};

/// Educational guidance returned by a producer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Guidance {
    /// Markdown body.
    pub text: String,
    pub mode: ProducerMode,
}

/// The single result of one submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The submission was rejected before screening.
    Invalid(String),
    /// An emergency keyword was found; no guidance was produced.
    Emergency(EmergencyNotice),
    /// Guidance was produced.
    Guidance(Guidance),
    /// The producer failed; the message is shown as `Error: <message>`.
    Failed(String),
}

impl Outcome {
    /// Short machine-readable tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::Invalid(_) => "invalid",
            Outcome::Emergency(_) => "emergency",
            Outcome::Guidance(_) => "guidance",
            Outcome::Failed(_) => "error",
        }
    }
}

/// Runs the validate → screen → produce flow.
#[derive(Clone)]
pub struct GuidanceService {
    producer: Arc<dyn ResponseProducer>,
}

impl GuidanceService {
    /// Creates a service around an existing producer.
    pub fn new(producer: Arc<dyn ResponseProducer>) -> Self {
        Self { producer }
    }

    /// Creates a service with the producer selected by `cfg`.
    ///
    /// # Errors
    ///
    /// Returns an error if the live producer cannot build its HTTP client.
    pub fn from_config(cfg: &CoreConfig) -> GuideResult<Self> {
        Ok(Self::new(build_producer(cfg)?))
    }

    pub fn mode(&self) -> ProducerMode {
        self.producer.mode()
    }

    /// Assess one submission.
    ///
    /// Emergency screening always runs before the producer, and the producer is never invoked
    /// once an emergency keyword matches.
    pub async fn assess(&self, submission: Submission) -> Outcome {
        let input = match submission.validate() {
            Ok(input) => input,
            Err(GuideError::InvalidInput(msg)) => return Outcome::Invalid(msg),
            Err(other) => return Outcome::Invalid(other.to_string()),
        };

        if detect_emergency(input.symptoms.as_str()) {
            tracing::warn!(
                keywords = ?matched_keywords(input.symptoms.as_str()),
                "emergency keywords detected"
            );
            return Outcome::Emergency(EmergencyNotice::default());
        }

        match self.producer.produce(&input).await {
            Ok(text) => Outcome::Guidance(Guidance {
                text,
                mode: self.producer.mode(),
            }),
            Err(e) => {
                tracing::error!(mode = %self.producer.mode(), error = %e, "guidance producer failed");
                Outcome::Failed(e.to_string())
            }
        }
    }
}
