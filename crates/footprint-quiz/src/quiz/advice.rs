use super::category::Category;
use super::scoring::CalculationResult;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PROFESSIONAL_SCHOOL: &str = "Biología";

/// Student details printed on the report and sent along with advice requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    pub name: String,
    pub student_code: String,
    #[serde(default)]
    pub course_cycle: String,
    #[serde(default = "default_professional_school")]
    pub professional_school: String,
}

fn default_professional_school() -> String {
    DEFAULT_PROFESSIONAL_SCHOOL.to_string()
}

impl Default for StudentProfile {
    fn default() -> Self {
        Self {
            name: String::new(),
            student_code: String::new(),
            course_cycle: String::new(),
            professional_school: default_professional_school(),
        }
    }
}

impl StudentProfile {
    pub fn new(name: impl Into<String>, student_code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            student_code: student_code.into(),
            ..Self::default()
        }
    }

    /// Name and student code are the only required fields.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.student_code.trim().is_empty()
    }
}

/// Payload handed to an external text generator for personalised recommendations.
#[derive(Debug, Clone, Serialize)]
pub struct AdviceRequest {
    pub profile: StudentProfile,
    pub result: CalculationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant_category: Option<Category>,
    pub prompt: String,
}

impl AdviceRequest {
    pub fn new(profile: StudentProfile, result: CalculationResult) -> Result<Self, AdviceError> {
        if !profile.is_complete() {
            return Err(AdviceError::IncompleteProfile);
        }

        let dominant_category = result.dominant_category();
        let prompt = build_prompt(&profile, &result, dominant_category);

        Ok(Self {
            profile,
            result,
            dominant_category,
            prompt,
        })
    }
}

fn build_prompt(
    profile: &StudentProfile,
    result: &CalculationResult,
    dominant: Option<Category>,
) -> String {
    let breakdown = Category::ordered()
        .into_iter()
        .map(|category| format!("{}: {:.2} gha", category.label(), result.subtotal(category)))
        .collect::<Vec<_>>()
        .join(", ");
    let focus = dominant
        .map(|category| format!(" Prioriza la categoría {}.", category.label()))
        .unwrap_or_default();

    format!(
        "Actúa como un tutor de ecología. El estudiante {} de la escuela profesional de {} \
         tiene una huella ecológica de {:.2} gha ({:.1} planetas), emite {:.2} t de CO2 al año \
         y su día de sobrecapacidad es el {}. Desglose: {}.{} Da tres recomendaciones breves, \
         concretas y medibles para reducir su huella.",
        profile.name.trim(),
        profile.professional_school.trim(),
        result.total_gha,
        result.number_earths,
        result.carbon_footprint,
        result.overshoot_date,
        breakdown,
        focus
    )
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdviceError {
    #[error("student name and code are required before requesting advice")]
    IncompleteProfile,
}
