//! Outcome mapping and static recommendation lists

use serde::Serialize;

use super::Disease;
use crate::domain::DomainError;

/// Binary outcome of a prediction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    AtRisk,
    NotAtRisk,
}

impl Outcome {
    /// Maps a model label to an outcome; only 0 and 1 are valid labels
    pub fn from_label(label: u8) -> Result<Self, DomainError> {
        match label {
            1 => Ok(Self::AtRisk),
            0 => Ok(Self::NotAtRisk),
            other => Err(DomainError::prediction(format!(
                "Unexpected label {}: expected 0 or 1",
                other
            ))),
        }
    }

    pub fn label(&self) -> u8 {
        match self {
            Self::AtRisk => 1,
            Self::NotAtRisk => 0,
        }
    }

    pub fn is_at_risk(&self) -> bool {
        matches!(self, Self::AtRisk)
    }
}

const DIABETES_RISK: &[&str] = &[
    "Monitor blood glucose levels regularly",
    "Maintain a balanced diet rich in fiber and low in refined carbohydrates",
    "Engage in regular physical activity (150 minutes/week)",
    "Maintain a healthy BMI (18.5-24.9)",
    "Consider consulting an endocrinologist",
];

const DIABETES_HEALTHY: &[&str] = &[
    "Continue maintaining a healthy lifestyle",
    "Regular exercise (30 minutes daily)",
    "Balanced nutrition with whole grains",
    "Regular health check-ups",
    "Adequate sleep (7-9 hours)",
];

const HEART_RISK: &[&str] = &[
    "Monitor blood pressure and cholesterol levels",
    "Follow a heart-healthy diet (Mediterranean diet recommended)",
    "Regular cardiovascular exercise (at least 30 minutes daily)",
    "Stress management through relaxation techniques",
    "Consider consulting a cardiologist",
    "Quit smoking and limit alcohol intake",
];

const HEART_HEALTHY: &[&str] = &[
    "Maintain heart-healthy lifestyle",
    "Regular blood pressure monitoring",
    "Stay physically active",
    "Annual cardiac check-ups",
    "Maintain healthy weight",
];

const PARKINSONS_RISK: &[&str] = &[
    "Consult a neurologist for detailed evaluation",
    "Consider physical therapy for mobility",
    "Engage in regular exercise (tai chi, yoga recommended)",
    "Speech therapy may be beneficial",
    "Focus on balance and coordination exercises",
    "Maintain a consistent sleep schedule",
];

const PARKINSONS_HEALTHY: &[&str] = &[
    "Regular physical activity",
    "Brain-stimulating activities",
    "Balanced nutrition with antioxidants",
    "Regular medical check-ups",
    "Maintain social connections",
];

/// Rendered verdict for a disease page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub disease: Disease,
    pub outcome: Outcome,
    pub result: String,
    pub recommendations: &'static [&'static str],
}

impl Assessment {
    pub fn new(disease: Disease, outcome: Outcome) -> Self {
        let result = match outcome {
            Outcome::AtRisk => format!("The person is at risk of {}", disease.condition()),
            Outcome::NotAtRisk => format!("The person is not at risk of {}", disease.condition()),
        };

        Self {
            disease,
            outcome,
            result,
            recommendations: disease.recommendations(outcome),
        }
    }
}

impl Disease {
    /// Recommendation bullets shown for an outcome
    pub fn recommendations(&self, outcome: Outcome) -> &'static [&'static str] {
        match (self, outcome) {
            (Self::Diabetes, Outcome::AtRisk) => DIABETES_RISK,
            (Self::Diabetes, Outcome::NotAtRisk) => DIABETES_HEALTHY,
            (Self::HeartDisease, Outcome::AtRisk) => HEART_RISK,
            (Self::HeartDisease, Outcome::NotAtRisk) => HEART_HEALTHY,
            (Self::Parkinsons, Outcome::AtRisk) => PARKINSONS_RISK,
            (Self::Parkinsons, Outcome::NotAtRisk) => PARKINSONS_HEALTHY,
        }
    }

    pub fn assess(&self, outcome: Outcome) -> Assessment {
        Assessment::new(*self, outcome)
    }
}
