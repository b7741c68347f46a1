//! Emergency keyword screening.
//!
//! Matching is plain case-insensitive substring containment against
//! [`EMERGENCY_KEYWORDS`]: no tokenisation and no word boundaries, so "strokes" matches "stroke".

use crate::constants::{
    EMERGENCY_CALL_PROMPT, EMERGENCY_CONDITIONS, EMERGENCY_HEADLINE, EMERGENCY_KEYWORDS,
};

/// Returns `true` if any emergency keyword occurs in `text`, ignoring case.
pub fn detect_emergency(text: &str) -> bool {
    let lowered = text.to_lowercase();
    EMERGENCY_KEYWORDS.iter().any(|kw| lowered.contains(kw))
}

/// Returns every emergency keyword found in `text`, in keyword-list order.
pub fn matched_keywords(text: &str) -> Vec<&'static str> {
    let lowered = text.to_lowercase();
    EMERGENCY_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| lowered.contains(kw))
        .collect()
}

/// Static content shown in place of guidance when an emergency is detected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmergencyNotice {
    pub headline: &'static str,
    pub call_prompt: &'static str,
    pub conditions: &'static [&'static str],
}

impl Default for EmergencyNotice {
    fn default() -> Self {
        Self {
            headline: EMERGENCY_HEADLINE,
            call_prompt: EMERGENCY_CALL_PROMPT,
            conditions: EMERGENCY_CONDITIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_keyword_in_sentence() {
        assert!(detect_emergency("I have chest pain"));
        assert!(!detect_emergency("I have a mild headache"));
    }

    #[test]
    fn detection_ignores_case() {
        assert!(detect_emergency("CHEST PAIN since this morning"));
        assert!(detect_emergency("Having a Seizure"));
        assert!(detect_emergency("I CAN'T BREATHE"));
    }

    #[test]
    fn every_keyword_triggers_detection() {
        for kw in EMERGENCY_KEYWORDS {
            assert!(detect_emergency(kw), "keyword '{kw}' should trigger");
            let shouted = format!("patient reports {} today", kw.to_uppercase());
            assert!(detect_emergency(&shouted), "uppercase '{kw}' should trigger");
        }
    }

    #[test]
    fn empty_text_is_not_an_emergency() {
        assert!(!detect_emergency(""));
        assert!(matched_keywords("").is_empty());
    }

    #[test]
    fn matches_substrings_without_word_boundaries() {
        assert!(detect_emergency("history of strokes"));
        assert!(detect_emergency("feeling suicidality"));
    }

    #[test]
    fn partial_phrases_do_not_trigger() {
        assert!(!detect_emergency("chest tightness and back pain"));
        assert!(!detect_emergency("some difficulty sleeping"));
    }

    #[test]
    fn matched_keywords_follow_list_order() {
        let hits = matched_keywords("Seizure after a stroke, now unconscious");
        assert_eq!(hits, vec!["unconscious", "stroke", "seizure"]);
    }

    #[test]
    fn notice_lists_call_conditions() {
        let notice = EmergencyNotice::default();
        assert_eq!(notice.conditions.len(), 4);
        assert!(notice.headline.contains("medical emergency"));
    }
}
