//! The HTML form page.
//!
//! `GET /` renders an empty form; `POST /` re-renders it with the submitted values and exactly
//! one outcome panel underneath.

use askama::Template;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;

use medguide_core::constants::{DEMO_MODE_NOTICE, DISCLAIMER, EDUCATIONAL_WARNING};
use medguide_core::{Age, Gender, Outcome, ProducerMode, Submission};

use crate::AppState;

/// Raw form fields. Every field is optional so a partial post still reaches validation.
#[derive(Debug, Default, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub age: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub symptoms: String,
}

impl FormInput {
    /// Convert to a [`Submission`].
    ///
    /// A non-numeric age becomes `-1` so it fails the range check after the symptoms check. An
    /// unknown gender falls back to unspecified.
    fn to_submission(&self) -> Submission {
        let age = self.age.trim().parse::<i64>().unwrap_or(-1);
        let gender = self.gender.parse::<Gender>().unwrap_or_default();
        Submission::new(age, gender, self.symptoms.clone())
    }
}

struct GenderOption {
    value: &'static str,
    label: &'static str,
    selected: bool,
}

fn gender_options(selected: Gender) -> Vec<GenderOption> {
    Gender::ALL
        .iter()
        .map(|g| GenderOption {
            value: g.as_str(),
            label: match g {
                Gender::Unspecified => "Select",
                other => other.label(),
            },
            selected: *g == selected,
        })
        .collect()
}

struct EmergencyView {
    headline: &'static str,
    call_prompt: &'static str,
    conditions: Vec<&'static str>,
}

#[derive(Default)]
struct OutcomeView {
    invalid: Option<String>,
    emergency: Option<EmergencyView>,
    guidance_html: Option<String>,
    failure: Option<String>,
}

impl From<&Outcome> for OutcomeView {
    fn from(outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Invalid(msg) => OutcomeView {
                invalid: Some(msg.clone()),
                ..Default::default()
            },
            Outcome::Emergency(notice) => OutcomeView {
                emergency: Some(EmergencyView {
                    headline: notice.headline,
                    call_prompt: notice.call_prompt,
                    conditions: notice.conditions.to_vec(),
                }),
                ..Default::default()
            },
            Outcome::Guidance(guidance) => OutcomeView {
                guidance_html: Some(render_markdown(&guidance.text)),
                ..Default::default()
            },
            Outcome::Failed(msg) => OutcomeView {
                failure: Some(msg.clone()),
                ..Default::default()
            },
        }
    }
}

/// Render guidance Markdown to HTML. Raw HTML in the input is escaped.
pub(crate) fn render_markdown(text: &str) -> String {
    markdown::to_html(text.trim())
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Medical Chatbot</title>
    <style>
      body { font-family: system-ui, sans-serif; max-width: 46rem; margin: 2rem auto; padding: 0 1rem; color: #1e293b; }
      .banner { padding: .75rem 1rem; border-radius: .5rem; margin: .75rem 0; }
      .warning { background: #fef9c3; }
      .info { background: #e0f2fe; }
      .error { background: #fee2e2; }
      .success { background: #dcfce7; }
      label { display: block; font-weight: 600; margin-top: 1rem; }
      input, select, textarea { width: 100%; padding: .5rem; margin-top: .25rem; box-sizing: border-box; }
      textarea { min-height: 7rem; }
      button { margin-top: 1rem; padding: .6rem 1.2rem; font-weight: 600; }
      .caption { color: #64748b; font-size: .9rem; }
    </style>
  </head>
  <body>
    <h1>AI Medical Chatbot</h1>
    <div class="banner warning">{{ warning }}</div>
    {% if let Some(notice) = demo_notice %}
    <div class="banner info">{{ notice }}</div>
    {% endif %}

    <form method="post" action="/">
      <label for="age">Patient Age</label>
      <input id="age" name="age" type="number" min="0" max="{{ age_max }}" step="1" value="{{ age }}" />

      <label for="gender">Patient Gender</label>
      <select id="gender" name="gender">
        {% for opt in genders %}
        <option value="{{ opt.value }}"{% if opt.selected %} selected{% endif %}>{{ opt.label }}</option>
        {% endfor %}
      </select>

      <label for="symptoms">Describe your symptoms</label>
      <textarea id="symptoms" name="symptoms" placeholder="e.g., headache, fever, cough...">{{ symptoms }}</textarea>

      <button type="submit">Get Medical Guidance</button>
    </form>

    {% if let Some(msg) = outcome.invalid %}
    <div class="banner error" id="outcome-invalid">{{ msg }}</div>
    {% endif %}

    {% if let Some(em) = outcome.emergency %}
    <div class="banner error" id="outcome-emergency"><strong>{{ em.headline }}</strong></div>
    <p><strong>{{ em.call_prompt }}</strong></p>
    <ul>
      {% for condition in em.conditions %}
      <li>{{ condition }}</li>
      {% endfor %}
    </ul>
    {% endif %}

    {% if let Some(html) = outcome.guidance_html %}
    <div class="banner success"><strong>Educational Medical Guidance:</strong></div>
    <section id="outcome-guidance">{{ html|safe }}</section>
    <hr />
    <p class="caption">{{ disclaimer }}</p>
    {% endif %}

    {% if let Some(msg) = outcome.failure %}
    <div class="banner error" id="outcome-error">Error: {{ msg }}</div>
    {% endif %}
  </body>
</html>
"#,
    ext = "html"
)]
struct FormPage<'a> {
    warning: &'static str,
    demo_notice: Option<&'static str>,
    age: String,
    age_max: u8,
    genders: Vec<GenderOption>,
    symptoms: &'a str,
    outcome: OutcomeView,
    disclaimer: &'static str,
}

fn render_page(
    mode: ProducerMode,
    age: String,
    gender: Gender,
    symptoms: &str,
    outcome: OutcomeView,
) -> Response {
    let page = FormPage {
        warning: EDUCATIONAL_WARNING,
        demo_notice: (mode == ProducerMode::Mock).then_some(DEMO_MODE_NOTICE),
        age,
        age_max: Age::MAX,
        genders: gender_options(gender),
        symptoms,
        outcome,
        disclaimer: DISCLAIMER,
    };

    match page.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Render form page error: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
        }
    }
}

/// `GET /`: the empty form.
pub async fn form_page(State(state): State<AppState>) -> Response {
    render_page(
        state.service.mode(),
        Age::DEFAULT.to_string(),
        Gender::Unspecified,
        "",
        OutcomeView::default(),
    )
}

/// `POST /`: assess the submission and re-render the form with the outcome.
pub async fn submit_form(State(state): State<AppState>, Form(input): Form<FormInput>) -> Response {
    let submission = input.to_submission();
    let gender = submission.gender;
    let outcome = state.service.assess(submission).await;
    tracing::info!(outcome = outcome.kind(), "form submission assessed");

    render_page(
        state.service.mode(),
        input.age.trim().to_string(),
        gender,
        &input.symptoms,
        OutcomeView::from(&outcome),
    )
}
