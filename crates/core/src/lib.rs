//! # MedGuide Core
//!
//! Core logic for the MedGuide symptom guidance form.
//!
//! This crate contains:
//! - Emergency keyword screening
//! - The `ResponseProducer` seam with an offline template producer and a live completion producer
//! - `GuidanceService`, which turns one form submission into one `Outcome`
//!
//! **No API concerns**: HTTP routing, HTML rendering and CLI parsing belong in `api-rest`,
//! `api-shared` or `medguide-cli`.

pub mod config;
pub mod constants;
pub mod emergency;
pub mod error;
pub mod patient;
pub mod producer;
pub mod prompt;
pub mod service;

pub use config::{CompletionConfig, CoreConfig, ProducerMode};
pub use emergency::{detect_emergency, EmergencyNotice};
pub use error::{GuideError, GuideResult};
pub use medguide_types::{Age, Gender, NonEmptyText};
pub use patient::{PatientInput, Submission};
pub use producer::{CompletionProducer, MockProducer, ResponseProducer};
pub use service::{Guidance, GuidanceService, Outcome};
