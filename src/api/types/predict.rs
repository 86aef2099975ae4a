//! Prediction API request and response types

use serde::{Deserialize, Serialize};

use crate::domain::{Assessment, Disease, FeatureField, Outcome};

/// A form value sent either as text or as a JSON number
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawInput {
    Number(f64),
    Text(String),
}

impl RawInput {
    pub fn into_text(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

/// POST /v1/predict/{disease}
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    /// Values in the disease's field order
    pub inputs: Vec<RawInput>,
}

impl PredictRequest {
    pub fn into_texts(self) -> Vec<String> {
        self.inputs.into_iter().map(RawInput::into_text).collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    pub disease: Disease,
    pub label: u8,
    pub at_risk: bool,
    pub result: String,
    pub recommendations: Vec<String>,
}

impl From<Assessment> for PredictResponse {
    fn from(assessment: Assessment) -> Self {
        Self {
            disease: assessment.disease,
            label: assessment.outcome.label(),
            at_risk: assessment.outcome == Outcome::AtRisk,
            result: assessment.result,
            recommendations: assessment
                .recommendations
                .iter()
                .map(|r| r.to_string())
                .collect(),
        }
    }
}

/// Catalogue entry for GET /v1/diseases
#[derive(Debug, Clone, Serialize)]
pub struct DiseaseInfo {
    pub slug: &'static str,
    pub title: &'static str,
    pub model_id: &'static str,
    pub fields: &'static [FeatureField],
}

impl From<Disease> for DiseaseInfo {
    fn from(disease: Disease) -> Self {
        Self {
            slug: disease.slug(),
            title: disease.title(),
            model_id: disease.model_id(),
            fields: disease.fields(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DiseasesResponse {
    pub object: &'static str,
    pub data: Vec<DiseaseInfo>,
}

impl DiseasesResponse {
    pub fn all() -> Self {
        Self {
            object: "list",
            data: Disease::ALL.into_iter().map(DiseaseInfo::from).collect(),
        }
    }
}
