//! HTML rendering of the disease pages

use minijinja::Environment;
use serde::Serialize;

use crate::domain::{Assessment, Disease};

/// Compiled page templates
#[derive(Debug)]
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template("base.html", include_str!("../../../templates/base.html"))?;
        env.add_template(
            "disease.html",
            include_str!("../../../templates/disease.html"),
        )?;
        env.add_template(
            "not_found.html",
            include_str!("../../../templates/not_found.html"),
        )?;
        Ok(Self { env })
    }

    pub fn disease_page(&self, page: &DiseasePage) -> Result<String, minijinja::Error> {
        self.env.get_template("disease.html")?.render(page)
    }

    pub fn not_found_page(&self, slug: &str) -> Result<String, minijinja::Error> {
        self.env.get_template("not_found.html")?.render(NotFoundPage {
            menu: menu(None),
            slug,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct MenuItem {
    pub slug: &'static str,
    pub label: &'static str,
    pub active: bool,
}

fn menu(active: Option<Disease>) -> Vec<MenuItem> {
    Disease::ALL
        .into_iter()
        .map(|disease| MenuItem {
            slug: disease.slug(),
            label: disease.menu_label(),
            active: Some(disease) == active,
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct FieldView {
    pub key: &'static str,
    pub label: String,
    pub hint: &'static str,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct AssessmentView {
    pub at_risk: bool,
    pub result: String,
    pub recommendations: &'static [&'static str],
}

impl From<Assessment> for AssessmentView {
    fn from(assessment: Assessment) -> Self {
        Self {
            at_risk: assessment.outcome.is_at_risk(),
            result: assessment.result,
            recommendations: assessment.recommendations,
        }
    }
}

/// Everything a disease page shows: the form, its values and at most one
/// of an error or an assessment
#[derive(Debug, Serialize)]
pub struct DiseasePage {
    pub menu: Vec<MenuItem>,
    pub slug: &'static str,
    pub title: &'static str,
    pub submit_label: &'static str,
    pub fields: Vec<FieldView>,
    pub error: Option<String>,
    pub assessment: Option<AssessmentView>,
}

impl DiseasePage {
    /// Empty form
    pub fn blank(disease: Disease) -> Self {
        Self::with_values(disease, &[])
    }

    /// Form pre-filled with submitted values in field order
    pub fn with_values(disease: Disease, values: &[String]) -> Self {
        let fields = disease
            .fields()
            .iter()
            .enumerate()
            .map(|(i, field)| FieldView {
                key: field.key,
                label: field.display_label(),
                hint: field.hint,
                value: values.get(i).cloned().unwrap_or_default(),
            })
            .collect();

        Self {
            menu: menu(Some(disease)),
            slug: disease.slug(),
            title: disease.title(),
            submit_label: disease.submit_label(),
            fields,
            error: None,
            assessment: None,
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_assessment(mut self, assessment: Assessment) -> Self {
        self.assessment = Some(assessment.into());
        self
    }
}

#[derive(Serialize)]
struct NotFoundPage<'a> {
    menu: Vec<MenuItem>,
    slug: &'a str,
}
