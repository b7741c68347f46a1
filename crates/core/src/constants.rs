//! Constants used throughout the MedGuide core crate.
//!
//! Fixed user-facing copy and configuration defaults live here so the HTML page, the JSON API
//! and the CLI present identical wording.

/// Phrases whose presence in symptom text triggers the emergency override.
pub const EMERGENCY_KEYWORDS: &[&str] = &[
    "chest pain",
    "difficulty breathing",
    "can't breathe",
    "suicidal",
    "unconscious",
    "stroke",
    "seizure",
    "severe bleeding",
];

/// Headline shown when an emergency keyword is detected.
pub const EMERGENCY_HEADLINE: &str = "This may be a medical emergency. Please seek immediate medical care. Do not wait for online guidance.";

/// Lead-in for the list of call-emergency-services conditions.
pub const EMERGENCY_CALL_PROMPT: &str =
    "Call emergency services (911 or local emergency number) immediately if:";

/// Conditions listed under the emergency banner.
pub const EMERGENCY_CONDITIONS: &[&str] = &[
    "You're having difficulty breathing",
    "You have chest pain or pressure",
    "You're severely bleeding",
    "Someone is unconscious",
];

/// Banner shown above the form at all times.
pub const EDUCATIONAL_WARNING: &str =
    "This chatbot is for educational purposes only. It is NOT medical advice.";

/// Footer shown after every guidance response.
pub const DISCLAIMER: &str = "Remember: This is educational information only. Always consult a healthcare professional for medical advice.";

/// Notice shown while the offline producer is active.
pub const DEMO_MODE_NOTICE: &str = "Demo Mode: Using sample responses (no API key required)";

/// Validation message for an empty symptom description.
pub const EMPTY_SYMPTOMS_MESSAGE: &str = "Please describe your symptoms.";

/// Default completion model identifier.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Default base URL of the OpenAI-compatible completion API.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Default sampling temperature for completions.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Default HTTP bind address.
pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";
