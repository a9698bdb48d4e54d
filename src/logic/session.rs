//! Predict page session state
//!
//! The page is a pure function of this record; submit, succeed, fail and
//! reset are its only mutators. Results are replaced wholesale, never
//! partially updated.

use crate::models::{ExplanationRecord, PatientRecord, PredictionResult};

#[derive(Debug, Clone, Default)]
pub struct Session {
    pub patient: Option<PatientRecord>,
    pub prediction: Option<PredictionResult>,
    pub explanation: Option<ExplanationRecord>,
    pub error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// A submission begins: keep the patient data, drop stale results
    pub fn submit(&mut self, patient: PatientRecord) {
        self.patient = Some(patient);
        self.prediction = None;
        self.explanation = None;
        self.error = None;
    }

    /// Both calls succeeded
    pub fn succeed(&mut self, prediction: PredictionResult, explanation: ExplanationRecord) {
        self.prediction = Some(prediction);
        self.explanation = Some(explanation);
        self.error = None;
    }

    /// Any failure clears both results; no partial display
    pub fn fail(&mut self, message: impl Into<String>) {
        self.prediction = None;
        self.explanation = None;
        self.error = Some(message.into());
    }

    /// "Try Again" / "Start Over": back to the empty form
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
