use serde::{Deserialize, Serialize};

/// Biocapacity available per person, in global hectares.
pub const BIOCAPACITY_PER_PERSON: f64 = 1.6;

/// Split of the ecological footprint attributed to carbon emissions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarbonFactors {
    /// Share of the food subtotal counted as carbon-intensive.
    pub food_share: f64,
    /// Share of the housing subtotal counted as carbon-intensive.
    pub housing_share: f64,
    /// Tonnes of CO2 per year represented by one global hectare.
    pub tonnes_co2_per_gha: f64,
}

impl Default for CarbonFactors {
    fn default() -> Self {
        Self {
            food_share: 0.5,
            housing_share: 0.5,
            tonnes_co2_per_gha: 2.5,
        }
    }
}

/// Parameters the scorer applies on top of the catalog weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub biocapacity_per_person: f64,
    pub carbon: CarbonFactors,
    /// Fail instead of scoring unanswered questions as zero.
    pub require_complete: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            biocapacity_per_person: BIOCAPACITY_PER_PERSON,
            carbon: CarbonFactors::default(),
            require_complete: false,
        }
    }
}
