//! JSON request and response bodies.

use medguide_types::{Age, Gender};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

fn default_age() -> i64 {
    i64::from(Age::DEFAULT.years())
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
    /// Active producer: `mock` or `live`.
    pub mode: String,
}

/// A symptom submission.
///
/// Age is range-checked by the service, not by deserialisation, so out-of-range values produce
/// an `invalid` outcome rather than a 4xx.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GuidanceReq {
    #[serde(default = "default_age")]
    #[schema(example = 30)]
    pub age: i64,
    #[serde(default)]
    #[schema(value_type = String, example = "female")]
    pub gender: Gender,
    #[serde(default)]
    #[schema(example = "fever and cough for two days")]
    pub symptoms: String,
}

/// Result of one submission.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GuidanceRes {
    pub assessment_id: String,
    /// RFC 3339 timestamp.
    pub assessed_at: String,
    /// One of `invalid`, `emergency`, `guidance`, `error`.
    pub outcome: String,
    /// Headline to show the user.
    pub message: String,
    /// Markdown guidance, present only for `guidance`.
    pub guidance: Option<String>,
    /// Call-emergency-services conditions, non-empty only for `emergency`.
    pub emergency_conditions: Vec<String>,
    pub disclaimer: String,
    /// Producer mode that served the request.
    pub mode: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_defaults_missing_fields() {
        let req: GuidanceReq = serde_json::from_str(r#"{"symptoms":"cough"}"#).expect("parse");
        assert_eq!(req.age, 30);
        assert_eq!(req.gender, Gender::Unspecified);
        assert_eq!(req.symptoms, "cough");
    }

    #[test]
    fn request_accepts_lowercase_gender() {
        let req: GuidanceReq =
            serde_json::from_str(r#"{"age":61,"gender":"male","symptoms":"back pain"}"#)
                .expect("parse");
        assert_eq!(req.gender, Gender::Male);
        assert_eq!(req.age, 61);
    }

    #[test]
    fn request_accepts_mixed_case_gender() {
        let req: GuidanceReq =
            serde_json::from_str(r#"{"gender":"Female","symptoms":"rash"}"#).expect("parse");
        assert_eq!(req.gender, Gender::Female);
    }

    #[test]
    fn schema_carries_field_examples() {
        let (name, schema) = <GuidanceReq as ToSchema>::schema();
        assert_eq!(name, "GuidanceReq");
        let json = serde_json::to_value(&schema).expect("schema json");
        assert_eq!(json["properties"]["gender"]["example"], "female");
        assert_eq!(json["properties"]["age"]["example"], 30);
    }
}
