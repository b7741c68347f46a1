//! Offline producer backed by canned Markdown templates.

use async_trait::async_trait;
use rand::seq::SliceRandom;

use super::ResponseProducer;
use crate::config::ProducerMode;
use crate::patient::PatientInput;
use crate::GuideResult;

const HEADACHE: &str = "\
**Possible Causes:**
- Tension headache from stress
- Dehydration
- Eye strain
- Migraine (if severe or with light sensitivity)

**Red Flags:**
- Worst headache of your life
- Headache after head injury
- With fever and stiff neck
- Sudden severe onset

**Home Care Advice:**
- Rest in a quiet, dark room
- Stay hydrated
- Apply cold or warm compress to forehead
- Over-the-counter pain relievers (follow package directions)

**When to See a Doctor:**
- If headache persists for more than 3 days
- If over-the-counter medications don't help
- For recurrent or severe headaches
";

const RESPIRATORY: &str = "\
**Possible Causes:**
- Common viral infection (like cold or flu)
- Upper respiratory infection
- Seasonal allergies (if no fever)

**Red Flags:**
- High fever over 103°F (39.4°C)
- Difficulty breathing
- Chest pain
- Confusion or disorientation

**Home Care Advice:**
- Rest and stay hydrated
- Use a humidifier for cough
- Warm tea with honey for sore throat
- Monitor temperature regularly

**When to See a Doctor:**
- Fever lasting more than 3 days
- Symptoms worsening after initial improvement
- Difficulty breathing develops
";

const GASTROINTESTINAL: &str = "\
**Possible Causes:**
- Food poisoning
- Viral gastroenteritis (stomach flu)
- Indigestion
- Stress or anxiety

**Red Flags:**
- Severe abdominal pain
- Blood in vomit or stool
- Signs of dehydration (no urination for 8+ hours)
- High fever with abdominal pain

**Home Care Advice:**
- Small sips of clear fluids
- BRAT diet (bananas, rice, applesauce, toast)
- Avoid dairy, caffeine, and fatty foods
- Rest your stomach

**When to See a Doctor:**
- If unable to keep fluids down for 24 hours
- Severe pain develops
- Symptoms persist beyond 3-4 days
";

const BACK_PAIN: &str = "\
**Possible Causes:**
- Muscle strain
- Poor posture
- Lifting injury
- Prolonged sitting

**Red Flags:**
- Loss of bladder/bowel control
- Numbness in legs or groin area
- Pain after a fall or injury
- With unexplained fever or weight loss

**Home Care Advice:**
- Alternate ice and heat therapy
- Gentle stretching (if not painful)
- Maintain good posture
- Use supportive chair or lumbar cushion

**When to See a Doctor:**
- Pain persists beyond 2 weeks
- Pain radiates down legs
- Weakness or numbness develops
";

pub(crate) const GENERAL: [&str; 2] = [
    "\
**Possible Causes:**
- Common viral illness
- Stress-related symptoms
- Minor infection or inflammation
- Could be related to lifestyle factors

**Red Flags:**
- Severe or worsening pain
- High fever
- Difficulty breathing
- Bleeding or unusual discharge

**Home Care Advice:**
- Rest and hydration are essential
- Monitor symptoms for changes
- Over-the-counter remedies as appropriate
- Maintain healthy diet and sleep

**When to See a Doctor:**
- If symptoms persist beyond 5-7 days
- If they significantly worsen
- For proper diagnosis and treatment
- Always trust your instincts about your health
",
    "\
**Based on the symptoms described:**

**Possible Causes:**
- Minor infection or inflammation
- Muscle tension or strain
- Environmental factors
- Stress response

**Red Flags to Watch For:**
- Worsening symptoms despite home care
- Development of new symptoms
- Interference with daily activities
- Signs of infection (redness, swelling, fever)

**Self-Care Recommendations:**
- Get adequate rest
- Stay well hydrated
- Maintain good nutrition
- Avoid known triggers

**Medical Consultation:**
- If no improvement in 3-5 days
- If symptoms become severe
- For persistent or recurrent issues
- For peace of mind and proper evaluation
",
];

/// Symptom category that decides which template is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateCategory {
    Headache,
    Respiratory,
    Gastrointestinal,
    BackPain,
    General,
}

impl TemplateCategory {
    /// Classify symptom text. The first matching rule wins, in declaration order.
    pub fn classify(symptoms: &str) -> Self {
        let text = symptoms.to_lowercase();
        let has = |needle: &str| text.contains(needle);

        if has("headache") {
            TemplateCategory::Headache
        } else if has("fever") || has("cough") || has("cold") {
            TemplateCategory::Respiratory
        } else if has("stomach") || has("nausea") || has("vomit") {
            TemplateCategory::Gastrointestinal
        } else if has("pain") && has("back") {
            TemplateCategory::BackPain
        } else {
            TemplateCategory::General
        }
    }

    /// Candidate templates for this category; `General` has more than one.
    pub fn templates(&self) -> &'static [&'static str] {
        match self {
            TemplateCategory::Headache => &[HEADACHE],
            TemplateCategory::Respiratory => &[RESPIRATORY],
            TemplateCategory::Gastrointestinal => &[GASTROINTESTINAL],
            TemplateCategory::BackPain => &[BACK_PAIN],
            TemplateCategory::General => &GENERAL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateCategory::Headache => "headache",
            TemplateCategory::Respiratory => "respiratory",
            TemplateCategory::Gastrointestinal => "gastrointestinal",
            TemplateCategory::BackPain => "back_pain",
            TemplateCategory::General => "general",
        }
    }
}

/// Template-lookup producer. Needs no network or credentials.
#[derive(Clone, Debug, Default)]
pub struct MockProducer;

impl MockProducer {
    pub fn new() -> Self {
        Self
    }

    /// Select the response for `symptoms`, picking uniformly among candidates.
    ///
    /// Age and gender are not consulted.
    pub fn respond(&self, symptoms: &str) -> &'static str {
        let category = TemplateCategory::classify(symptoms);
        tracing::debug!(category = category.as_str(), "mock template selected");
        category
            .templates()
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(GENERAL[0])
    }
}

#[async_trait]
impl ResponseProducer for MockProducer {
    fn mode(&self) -> ProducerMode {
        ProducerMode::Mock
    }

    async fn produce(&self, input: &PatientInput) -> GuideResult<String> {
        Ok(self.respond(input.symptoms.as_str()).to_string())
    }
}
