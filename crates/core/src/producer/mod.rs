//! Response producers: the seam between a validated submission and the guidance text.
//!
//! Two implementations exist: [`MockProducer`] selects a canned template locally and
//! [`CompletionProducer`] asks a remote chat-completion service. Both return Markdown.

pub mod live;
pub mod mock;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{CoreConfig, ProducerMode};
use crate::patient::PatientInput;
use crate::GuideResult;

pub use live::CompletionProducer;
pub use mock::{MockProducer, TemplateCategory};

/// Produces educational guidance text for a non-emergency submission.
#[async_trait]
pub trait ResponseProducer: Send + Sync {
    /// Which variant this producer implements.
    fn mode(&self) -> ProducerMode;

    /// Produce Markdown guidance for `input`.
    async fn produce(&self, input: &PatientInput) -> GuideResult<String>;
}

/// Build the producer selected by `cfg`.
///
/// # Errors
///
/// Returns `GuideError::HttpClientBuild` if the live producer's HTTP client cannot be built.
pub fn build_producer(cfg: &CoreConfig) -> GuideResult<Arc<dyn ResponseProducer>> {
    match cfg.mode() {
        ProducerMode::Mock => Ok(Arc::new(MockProducer::new())),
        ProducerMode::Live => Ok(Arc::new(CompletionProducer::new(cfg.completion().clone())?)),
    }
}
