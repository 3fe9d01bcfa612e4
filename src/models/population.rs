//! Population types for criteria selection
//!
//! The population type selects which branch of the range-based criteria
//! (vital signs, symptoms) applies to a referral. It is resolved once per
//! evaluation and used consistently by every evaluator that branches on it.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Patient population, selecting the applicable criteria tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopulationType {
    /// Adult patient (18 years or older, not pregnant)
    Adult,
    /// Minor patient (under 18 years)
    Minor,
    /// Pregnant patient (any age, pregnancy criteria take precedence)
    Pregnant,
}

impl PopulationType {
    /// Get the Spanish display name used in reports
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Adult => "Adulto",
            Self::Minor => "Menor de edad",
            Self::Pregnant => "Embarazada",
        }
    }

    /// Get all population types
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Adult, Self::Minor, Self::Pregnant]
    }
}

impl fmt::Display for PopulationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
