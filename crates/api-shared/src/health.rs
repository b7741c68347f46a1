use crate::types::HealthRes;

/// Simple health service used by the REST API
///
/// Reports liveness together with the active producer mode so operators can tell at a glance
/// whether the service is answering from templates or from the remote model.
#[derive(Clone)]
pub struct HealthService {
    mode: String,
}

impl HealthService {
    /// Creates a new instance of HealthService for the given producer mode.
    pub fn new(mode: impl Into<String>) -> Self {
        Self { mode: mode.into() }
    }

    /// Check health.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health(&self) -> HealthRes {
        HealthRes {
            ok: true,
            message: "MedGuide is alive".into(),
            mode: self.mode.clone(),
        }
    }
}
