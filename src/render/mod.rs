//! HTML rendering
//!
//! Pure render layer: embedded minijinja templates, no I/O. Pages are a
//! function of the session state handed in by the handlers.

pub mod charts;

use minijinja::{context, Environment};

use crate::error::AppError;
use crate::logic::session::Session;
use crate::models::patient::form_fields;

pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("shell.html", include_str!("templates/shell.html"))?;
        env.add_template("home.html", include_str!("templates/home.html"))?;
        env.add_template("about.html", include_str!("templates/about.html"))?;
        env.add_template("predict.html", include_str!("templates/predict.html"))?;
        Ok(Self { env })
    }

    pub fn home_page(&self) -> Result<String, AppError> {
        let html = self
            .env
            .get_template("home.html")?
            .render(context! { active => "home" })?;
        Ok(html)
    }

    pub fn about_page(&self) -> Result<String, AppError> {
        let html = self
            .env
            .get_template("about.html")?
            .render(context! { active => "about" })?;
        Ok(html)
    }

    /// The predict page: the form when there are no results, the result
    /// view (banner, risk score, explanation charts) after a successful
    /// submission, and the error banner whenever the session carries one.
    pub fn predict_page(&self, session: &Session) -> Result<String, AppError> {
        let results = match &session.prediction {
            Some(prediction) => {
                let sections = session
                    .explanation
                    .as_ref()
                    .map(charts::explanation_sections)
                    .transpose()?;
                Some(context! {
                    banner_title => prediction.banner_title(),
                    banner_description => prediction.banner_description(),
                    banner_kind => prediction.banner_kind(),
                    percent => prediction.risk_percent_display(),
                    band_color => prediction.band_color(),
                    sections => sections,
                })
            }
            None => None,
        };

        let html = self.env.get_template("predict.html")?.render(context! {
            active => "predict",
            error => session.error.clone(),
            fields => form_fields(),
            results => results,
        })?;
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::patient::sample_record;
    use crate::models::{ExplanationRecord, PredictionResult};
    use serde_json::json;

    fn renderer() -> Renderer {
        Renderer::new().unwrap()
    }

    fn prediction(class: u8, probability: f64) -> PredictionResult {
        PredictionResult {
            prediction: class,
            probability,
            risk_level: None,
        }
    }

    fn explanation() -> ExplanationRecord {
        serde_json::from_value(json!({
            "shap_values": {"age": 0.31, "chol": -0.12},
            "feature_importance": {"age": 0.31},
            "lime_explanation": {"age": 0.25}
        }))
        .unwrap()
    }

    #[test]
    fn empty_session_renders_the_form() {
        let html = renderer().predict_page(&Session::new()).unwrap();
        for name in ["age", "sex", "cp", "trestbps", "chol", "fbs", "restecg", "thalach", "exang", "oldpeak", "slope", "ca", "thal"] {
            assert!(html.contains(&format!(r#"name="{name}""#)), "missing field {name}");
        }
        assert!(html.contains("Predict Risk"));
        assert!(!html.contains("Your Results"));
    }

    #[test]
    fn high_probability_renders_severe_band() {
        let mut session = Session::new();
        session.submit(sample_record());
        session.succeed(prediction(1, 0.753), explanation());

        let html = renderer().predict_page(&session).unwrap();
        assert!(html.contains("75.3%"));
        assert!(html.contains("#f5222d"));
        assert!(html.contains("Heart Disease Risk Detected"));
        assert!(html.contains("SHAP Values"));
        assert!(html.contains("LIME Explanation"));
    }

    #[test]
    fn low_probability_renders_minimal_band() {
        let mut session = Session::new();
        session.submit(sample_record());
        session.succeed(prediction(0, 0.10), explanation());

        let html = renderer().predict_page(&session).unwrap();
        assert!(html.contains("10.0%"));
        assert!(html.contains("#52c41a"));
        assert!(html.contains("Low Heart Disease Risk"));
    }

    #[test]
    fn missing_explanation_shows_placeholder_instead_of_charts() {
        let mut session = Session::new();
        session.submit(sample_record());
        session.prediction = Some(prediction(1, 0.9));
        session.explanation = None;

        let html = renderer().predict_page(&session).unwrap();
        assert!(html.contains("No explanation data available for this prediction."));
        assert!(!html.contains("SHAP Values"));
    }

    #[test]
    fn error_renders_banner_with_try_again() {
        let mut session = Session::new();
        session.fail("Model not loaded");

        let html = renderer().predict_page(&session).unwrap();
        assert!(html.contains("Model not loaded"));
        assert!(html.contains("Try Again"));
        // back to the form, no partial results
        assert!(html.contains("Predict Risk"));
        assert!(!html.contains("Your Results"));
    }

    #[test]
    fn static_pages_render() {
        let r = renderer();
        let home = r.home_page().unwrap();
        assert!(home.contains("Heart Disease Prediction with Explainable AI"));

        let about = r.about_page().unwrap();
        assert!(about.contains("SHAP"));
        assert!(about.contains("LIME"));
    }
}
