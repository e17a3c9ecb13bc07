use crate::quiz::category::Category;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CategoryShareEntry {
    pub category: Category,
    pub category_label: &'static str,
    pub description: &'static str,
    pub gha: f64,
    /// Percent of the total footprint, one decimal.
    pub share_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct BenchmarkEntry {
    pub label: &'static str,
    pub gha: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FootprintLevel {
    Sustainable,
    AboveBiocapacity,
    AboveWorldAverage,
}

impl FootprintLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sustainable => "Dentro de la biocapacidad",
            Self::AboveBiocapacity => "Sobre la biocapacidad",
            Self::AboveWorldAverage => "Sobre la media mundial",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FootprintInsights {
    pub level: FootprintLevel,
    pub level_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant_category: Option<Category>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub observations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommended_actions: Vec<&'static str>,
    pub reflective_questions: Vec<&'static str>,
}

/// Reader-facing definitions of the four headline metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricExplanations {
    pub gha: &'static str,
    pub earths: &'static str,
    pub co2: &'static str,
    pub overshoot: &'static str,
}
