//! Disease catalogue: page identity, model binding and ordered input fields

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::DomainError;

/// A single labeled numeric input of a disease form
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureField {
    /// Form field name
    pub key: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Range hint shown next to the label (may carry units or encodings)
    pub hint: &'static str,
    /// Smallest accepted value
    pub min: f64,
    /// Largest accepted value
    pub max: f64,
}

impl FeatureField {
    const fn new(
        key: &'static str,
        label: &'static str,
        hint: &'static str,
        min: f64,
        max: f64,
    ) -> Self {
        Self {
            key,
            label,
            hint,
            min,
            max,
        }
    }

    /// Label as rendered on the form, e.g. `Age (21-90)`
    pub fn display_label(&self) -> String {
        format!("{} ({})", self.label, self.hint)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

const DIABETES_FIELDS: [FeatureField; 8] = [
    FeatureField::new("pregnancies", "Number of Pregnancies", "0-17", 0.0, 17.0),
    FeatureField::new("glucose", "Glucose Level", "70-200 mg/dL", 70.0, 200.0),
    FeatureField::new("bp", "Blood Pressure", "60-140 mm Hg", 60.0, 140.0),
    FeatureField::new("skin", "Skin Thickness", "0-100 mm", 0.0, 100.0),
    FeatureField::new("insulin", "Insulin Level", "0-850 mu U/ml", 0.0, 850.0),
    FeatureField::new("bmi", "BMI", "18.5-40", 18.5, 40.0),
    FeatureField::new("pedigree", "Diabetes Pedigree Function", "0.0-2.5", 0.0, 2.5),
    FeatureField::new("age", "Age", "21-90", 21.0, 90.0),
];

const HEART_DISEASE_FIELDS: [FeatureField; 13] = [
    FeatureField::new("heart_age", "Age", "20-95", 20.0, 95.0),
    FeatureField::new("heart_sex", "Sex", "1=male, 0=female", 0.0, 1.0),
    FeatureField::new("heart_cp", "Chest Pain Type", "0-3", 0.0, 3.0),
    FeatureField::new("heart_bp", "Resting Blood Pressure", "90-200 mm Hg", 90.0, 200.0),
    FeatureField::new("heart_chol", "Cholesterol", "100-600 mg/dl", 100.0, 600.0),
    FeatureField::new(
        "heart_fbs",
        "Fasting Blood Sugar > 120 mg/dl",
        "1=true, 0=false",
        0.0,
        1.0,
    ),
    FeatureField::new("heart_ecg", "Resting ECG Results", "0-2", 0.0, 2.0),
    FeatureField::new("heart_rate", "Maximum Heart Rate", "60-220 bpm", 60.0, 220.0),
    FeatureField::new("heart_exang", "Exercise Induced Angina", "1=yes, 0=no", 0.0, 1.0),
    FeatureField::new("heart_st", "ST Depression", "0.0-6.0", 0.0, 6.0),
    FeatureField::new("heart_slope", "ST Slope", "0-2", 0.0, 2.0),
    FeatureField::new("heart_vessels", "Number of Major Vessels", "0-4", 0.0, 4.0),
    FeatureField::new(
        "heart_thal",
        "Thalassemia",
        "0=normal, 1=fixed defect, 2=reversible defect",
        0.0,
        2.0,
    ),
];

const PARKINSONS_FIELDS: [FeatureField; 22] = [
    FeatureField::new("park_fo", "MDVP:Fo(Hz)", "80-260 Hz", 80.0, 260.0),
    FeatureField::new("park_fhi", "MDVP:Fhi(Hz)", "100-280 Hz", 100.0, 280.0),
    FeatureField::new("park_flo", "MDVP:Flo(Hz)", "60-240 Hz", 60.0, 240.0),
    FeatureField::new("park_jitter_p", "Jitter(%)", "0.0-5.0%", 0.0, 5.0),
    FeatureField::new("park_jitter_a", "Jitter(Abs)", "0.0-1.0", 0.0, 1.0),
    FeatureField::new(
        "park_rap",
        "RAP - Relative Amplitude Perturbation",
        "0.0-1.0",
        0.0,
        1.0,
    ),
    FeatureField::new("park_ppq", "PPQ - Period Perturbation Quotient", "0.0-1.0", 0.0, 1.0),
    FeatureField::new("park_ddp", "DDP - Average Differences", "0.0-1.0", 0.0, 1.0),
    FeatureField::new("park_shimmer", "Shimmer Local", "0.0-1.0", 0.0, 1.0),
    FeatureField::new("park_shimmer_db", "Shimmer(dB)", "0.0-2.0", 0.0, 2.0),
    FeatureField::new("park_apq3", "APQ3 - Amplitude Perturbation", "0.0-1.0", 0.0, 1.0),
    FeatureField::new("park_apq5", "APQ5 - Amplitude Perturbation", "0.0-1.0", 0.0, 1.0),
    FeatureField::new(
        "park_apq",
        "APQ - Amplitude Perturbation Quotient",
        "0.0-1.0",
        0.0,
        1.0,
    ),
    FeatureField::new("park_dda", "DDA - Directional Differences", "0.0-1.0", 0.0, 1.0),
    FeatureField::new("park_nhr", "NHR - Noise to Harmonic Ratio", "0.0-1.0", 0.0, 1.0),
    FeatureField::new("park_hnr", "HNR - Harmonic to Noise Ratio", "0-40 dB", 0.0, 40.0),
    FeatureField::new(
        "park_rpde",
        "RPDE - Recurrence Period Density Entropy",
        "0.0-1.0",
        0.0,
        1.0,
    ),
    FeatureField::new(
        "park_dfa",
        "DFA - Detrended Fluctuation Analysis",
        "0.0-1.0",
        0.0,
        1.0,
    ),
    FeatureField::new("park_spread1", "Spread1", "0.0-1.0", 0.0, 1.0),
    FeatureField::new("park_spread2", "Spread2", "0.0-1.0", 0.0, 1.0),
    FeatureField::new("park_d2", "D2 - Correlation Dimension", "0.0-5.0", 0.0, 5.0),
    FeatureField::new("park_ppe", "PPE - Pitch Period Entropy", "0.0-1.0", 0.0, 1.0),
];

/// The three supported prediction pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Disease {
    Diabetes,
    HeartDisease,
    Parkinsons,
}

impl Disease {
    /// All diseases in sidebar order
    pub const ALL: [Disease; 3] = [Disease::Diabetes, Disease::HeartDisease, Disease::Parkinsons];

    /// URL path segment of the disease page
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Diabetes => "diabetes",
            Self::HeartDisease => "heart",
            Self::Parkinsons => "parkinsons",
        }
    }

    /// Identifier of the model artifact backing this page
    pub fn model_id(&self) -> &'static str {
        match self {
            Self::Diabetes => "diabetes_model",
            Self::HeartDisease => "heart_disease_model",
            Self::Parkinsons => "parkinsons_model",
        }
    }

    /// Sidebar entry
    pub fn menu_label(&self) -> &'static str {
        match self {
            Self::Diabetes => "Diabetes Prediction",
            Self::HeartDisease => "Heart Disease Prediction",
            Self::Parkinsons => "Parkinsons Prediction",
        }
    }

    /// Page header
    pub fn title(&self) -> &'static str {
        match self {
            Self::Diabetes => "Diabetes Prediction",
            Self::HeartDisease => "Heart Disease Prediction",
            Self::Parkinsons => "Parkinson's Disease Prediction",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Diabetes => "Predict Diabetes Risk",
            Self::HeartDisease => "Predict Heart Disease Risk",
            Self::Parkinsons => "Predict Parkinson's Disease Risk",
        }
    }

    /// Condition name used in result sentences
    pub fn condition(&self) -> &'static str {
        match self {
            Self::Diabetes => "diabetes",
            Self::HeartDisease => "heart disease",
            Self::Parkinsons => "Parkinson's disease",
        }
    }

    /// Ordered input fields; the order is the feature vector order
    pub fn fields(&self) -> &'static [FeatureField] {
        match self {
            Self::Diabetes => &DIABETES_FIELDS,
            Self::HeartDisease => &HEART_DISEASE_FIELDS,
            Self::Parkinsons => &PARKINSONS_FIELDS,
        }
    }

    pub fn feature_count(&self) -> usize {
        self.fields().len()
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for Disease {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.slug() == s)
            .ok_or_else(|| DomainError::not_found(format!("Disease '{}' not found", s)))
    }
}
