use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Basico,
    Parceiro,
    Profissional,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Basico => "basico",
            Tier::Parceiro => "parceiro",
            Tier::Profissional => "profissional",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Tier::Basico => "Básico",
            Tier::Parceiro => "Parceiro",
            Tier::Profissional => "Profissional",
        }
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Tier {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "basico" => Some(Tier::Basico),
            "parceiro" => Some(Tier::Parceiro),
            "profissional" => Some(Tier::Profissional),
            _ => None,
        }
    }
}
