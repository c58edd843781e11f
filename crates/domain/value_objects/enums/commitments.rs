use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
    Mensal,
    Trimestral,
}

impl Commitment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Commitment::Mensal => "mensal",
            Commitment::Trimestral => "trimestral",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Commitment::Mensal => "Mensal",
            Commitment::Trimestral => "Trimestral",
        }
    }

    /// Number of months covered by one billing cycle.
    pub fn months(&self) -> u32 {
        match self {
            Commitment::Mensal => 1,
            Commitment::Trimestral => 3,
        }
    }
}

impl Display for Commitment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Commitment {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "mensal" => Some(Commitment::Mensal),
            "trimestral" => Some(Commitment::Trimestral),
            _ => None,
        }
    }
}
