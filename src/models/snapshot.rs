//! Patient snapshot model
//!
//! This module contains the `PatientSnapshot`, the single input of the
//! scoring engine. It is produced upstream by the document-ingestion
//! collaborator; many fields are optional and absence is never an error,
//! only scored (or omitted) according to the criteria rules.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::models::population::PopulationType;

/// Vital signs measured at referral time
///
/// Every field is optional: a vital that was not measured is simply not
/// scored, so absence never implies a normal reading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VitalSigns {
    /// Heart rate in beats per minute
    pub heart_rate: Option<f64>,
    /// Respiratory rate in breaths per minute
    pub respiratory_rate: Option<f64>,
    /// Systolic blood pressure in mmHg
    pub systolic_pressure: Option<f64>,
    /// Diastolic blood pressure in mmHg
    pub diastolic_pressure: Option<f64>,
    /// Body temperature in degrees Celsius
    pub temperature: Option<f64>,
    /// Peripheral oxygen saturation in percent
    pub oxygen_saturation: Option<f64>,
    /// Glasgow coma scale score (3-15)
    pub glasgow_score: Option<u8>,
}

impl VitalSigns {
    /// Check whether any vital sign was measured
    #[must_use]
    pub const fn any_present(&self) -> bool {
        self.heart_rate.is_some()
            || self.respiratory_rate.is_some()
            || self.systolic_pressure.is_some()
            || self.diastolic_pressure.is_some()
            || self.temperature.is_some()
            || self.oxygen_saturation.is_some()
            || self.glasgow_score.is_some()
    }
}

/// Structured snapshot of a referral, as extracted upstream
///
/// Immutable for the duration of an evaluation. The triage level is carried
/// for fidelity with the referring form but is never scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientSnapshot {
    /// Opaque reference identifying the patient/referral
    pub patient_ref: String,
    /// Age in completed years
    #[serde(default)]
    pub age_years: Option<u32>,
    /// Explicit population type; derived from age/pregnancy when absent
    #[serde(default)]
    pub population: Option<PopulationType>,
    /// Whether the patient is pregnant
    #[serde(default)]
    pub pregnant: Option<bool>,
    /// Name of the insurer covering the patient
    #[serde(default)]
    pub insurer: Option<String>,
    /// Name of the referring institution
    #[serde(default)]
    pub referring_institution: Option<String>,
    /// Instant the patient was admitted at the referring institution
    #[serde(default)]
    pub admitted_at: Option<DateTime<Utc>>,
    /// Vital signs measured at referral time
    #[serde(default)]
    pub vital_signs: VitalSigns,
    /// Reported symptoms, by name
    #[serde(default)]
    pub symptoms: Vec<String>,
    /// Requested services, by name
    #[serde(default)]
    pub services: Vec<String>,
    /// Requested specialty consults, by name
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Requested diagnostic-support studies, by name
    #[serde(default)]
    pub diagnostic_studies: Vec<String>,
    /// Triage/acuity level assigned upstream; excluded from scoring
    #[serde(default)]
    pub triage_level: Option<String>,
}

impl PatientSnapshot {
    /// Create a minimal snapshot with only the required reference
    #[must_use]
    pub fn new(patient_ref: String) -> Self {
        Self {
            patient_ref,
            age_years: None,
            population: None,
            pregnant: None,
            insurer: None,
            referring_institution: None,
            admitted_at: None,
            vital_signs: VitalSigns::default(),
            symptoms: Vec::new(),
            services: Vec::new(),
            specialties: Vec::new(),
            diagnostic_studies: Vec::new(),
            triage_level: None,
        }
    }

    /// Resolve the population type for this snapshot
    ///
    /// The explicit field wins; otherwise pregnancy, then age decide. A
    /// snapshot with no population-derivable data at all is the one
    /// malformed-input case the engine refuses to score.
    pub fn resolve_population(&self) -> Result<PopulationType> {
        if let Some(population) = self.population {
            return Ok(population);
        }

        if self.pregnant == Some(true) {
            return Ok(PopulationType::Pregnant);
        }

        match self.age_years {
            Some(age) if age < 18 => Ok(PopulationType::Minor),
            Some(_) => Ok(PopulationType::Adult),
            None => Err(EngineError::MissingRequiredElement(
                "population type (no population, pregnancy or age data)",
            )),
        }
    }
}
