//! Scored findings and category results
//!
//! A finding is one scored observation about a referral, with its point
//! value, risk label and a one-line rationale. Findings are produced by the
//! category evaluators and never mutated downstream.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Risk label derived from a finding's point value (5 down to 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLabel {
    /// No prioritization criterion applies (0 points)
    NotPrioritized = 0,
    /// Very low risk (1 point)
    VeryLow = 1,
    /// Low risk (2 points)
    Low = 2,
    /// Intermediate risk (3 points)
    Intermediate = 3,
    /// High risk (4 points)
    High = 4,
    /// Very high risk (5 points)
    VeryHigh = 5,
}

impl RiskLabel {
    /// Convert a point value (0-5) to its risk label
    #[must_use]
    pub const fn from_points(points: u8) -> Self {
        match points {
            5 => Self::VeryHigh,
            4 => Self::High,
            3 => Self::Intermediate,
            2 => Self::Low,
            1 => Self::VeryLow,
            _ => Self::NotPrioritized,
        }
    }

    /// Get the numeric value for this label
    #[must_use]
    pub const fn as_points(self) -> u8 {
        self as u8
    }

    /// Get the Spanish display name used in reports
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::VeryHigh => "Muy Alto",
            Self::High => "Alto",
            Self::Intermediate => "Intermedio",
            Self::Low => "Bajo",
            Self::VeryLow => "Muy Bajo",
            Self::NotPrioritized => "No Prioritario",
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The eight scoring categories, in their fixed contractual order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreCategory {
    /// Demographic data: age and referring institution
    General,
    /// Clinical/temporal data: population type and admission recency
    Clinical,
    /// Measured vital signs
    VitalSigns,
    /// Reported symptoms
    Symptoms,
    /// Requested services
    Services,
    /// Requested specialty consults
    Specialties,
    /// Requested diagnostic-support studies
    DiagnosticSupport,
    /// Insurance/financial coverage
    Insurance,
}

impl ScoreCategory {
    /// Get the Spanish display name used in reports
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::General => "Datos Generales",
            Self::Clinical => "Datos Clínicos",
            Self::VitalSigns => "Signos Vitales",
            Self::Symptoms => "Sintomatología",
            Self::Services => "Servicios Solicitados",
            Self::Specialties => "Especialidades",
            Self::DiagnosticSupport => "Apoyo Diagnóstico",
            Self::Insurance => "Aseguranza y Cobertura",
        }
    }

    /// Get all categories in the fixed evaluation order
    ///
    /// Insurance is contractually last: every clinical category is scored
    /// before financial coverage enters the total.
    #[must_use]
    pub const fn all_in_order() -> [Self; 8] {
        [
            Self::General,
            Self::Clinical,
            Self::VitalSigns,
            Self::Symptoms,
            Self::Services,
            Self::Specialties,
            Self::DiagnosticSupport,
            Self::Insurance,
        ]
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One scored observation about a referral
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Name of the criterion that produced this finding
    pub criterion: String,
    /// Observed value, rendered for the report
    pub observed: String,
    /// Points awarded (0-5)
    pub points: u8,
    /// Risk label derived from the points
    pub label: RiskLabel,
    /// One-line clinical interpretation
    pub rationale: String,
}

impl Finding {
    /// Create a finding, deriving the label from the points
    #[must_use]
    pub fn new(criterion: String, observed: String, points: u8, rationale: String) -> Self {
        Self {
            criterion,
            observed,
            points,
            label: RiskLabel::from_points(points),
            rationale,
        }
    }
}

/// The findings of one category, with their subtotal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryResult {
    /// Category that produced these findings
    pub category: ScoreCategory,
    /// Findings in insertion order
    pub findings: Vec<Finding>,
    /// Sum of the findings' points
    pub subtotal: u32,
}

impl CategoryResult {
    /// Build a category result, computing the subtotal from the findings
    #[must_use]
    pub fn from_findings(category: ScoreCategory, findings: Vec<Finding>) -> Self {
        let subtotal = findings.iter().map(|f| u32::from(f.points)).sum();
        Self {
            category,
            findings,
            subtotal,
        }
    }
}
