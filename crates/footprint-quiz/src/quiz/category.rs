use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Consumption area a question contributes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Food,
    Housing,
    Transport,
    Goods,
    Services,
}

impl Category {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Food,
            Self::Housing,
            Self::Transport,
            Self::Goods,
            Self::Services,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Food => "Alimentación",
            Self::Housing => "Vivienda",
            Self::Transport => "Transporte",
            Self::Goods => "Bienes",
            Self::Services => "Servicios",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Housing => "housing",
            Self::Transport => "transport",
            Self::Goods => "goods",
            Self::Services => "services",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Food => "Impacto de la producción, procesamiento y transporte de alimentos.",
            Self::Housing => "Uso de suelo para vivienda y consumo de energía en el hogar.",
            Self::Transport => "Emisiones por movilidad diaria y viajes de larga distancia.",
            Self::Goods => {
                "Huella ecológica incorporada en la compra de ropa, electrónicos y otros bienes."
            }
            Self::Services => {
                "Servicios públicos, infraestructura compartida y gestión de residuos."
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown footprint category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Accepts the snake_case key or the display label, ignoring case.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim().to_lowercase();
        Self::ordered()
            .into_iter()
            .find(|category| {
                category.key() == needle || category.label().to_lowercase() == needle
            })
            .ok_or_else(|| UnknownCategory(raw.trim().to_string()))
    }
}
