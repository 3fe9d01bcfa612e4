//! Criteria catalog for referral priority scoring
//!
//! This module centralizes every lookup table the category evaluators use:
//! age buckets, admission recency, institutions, population points,
//! population-specific vital-sign bands and symptom vocabularies, services,
//! specialties, diagnostic studies and insurers. The catalog is read-only
//! after construction and fully serializable, so the clinical rule set can
//! be versioned and audited as data instead of code.

mod defaults;

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};
use crate::models::population::PopulationType;

/// Maximum points a single criterion may award
pub const MAX_CRITERION_POINTS: u8 = 5;

/// The vital-sign metrics the catalog carries band tables for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VitalMetric {
    /// Heart rate in beats per minute
    HeartRate,
    /// Respiratory rate in breaths per minute
    RespiratoryRate,
    /// Systolic blood pressure in mmHg
    SystolicPressure,
    /// Diastolic blood pressure in mmHg
    DiastolicPressure,
    /// Body temperature in degrees Celsius
    Temperature,
    /// Peripheral oxygen saturation in percent
    OxygenSaturation,
    /// Glasgow coma scale score
    GlasgowScore,
}

impl VitalMetric {
    /// Get the Spanish display name used in reports
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::HeartRate => "Frecuencia cardíaca",
            Self::RespiratoryRate => "Frecuencia respiratoria",
            Self::SystolicPressure => "Presión sistólica",
            Self::DiastolicPressure => "Presión diastólica",
            Self::Temperature => "Temperatura",
            Self::OxygenSaturation => "Saturación de oxígeno",
            Self::GlasgowScore => "Escala de Glasgow",
        }
    }

    /// Get the measurement unit for this metric
    #[must_use]
    pub const fn unit(self) -> &'static str {
        match self {
            Self::HeartRate => "lpm",
            Self::RespiratoryRate => "rpm",
            Self::SystolicPressure | Self::DiastolicPressure => "mmHg",
            Self::Temperature => "°C",
            Self::OxygenSaturation => "%",
            Self::GlasgowScore => "puntos",
        }
    }

    /// Get all metrics in report order
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::HeartRate,
            Self::RespiratoryRate,
            Self::SystolicPressure,
            Self::DiastolicPressure,
            Self::Temperature,
            Self::OxygenSaturation,
            Self::GlasgowScore,
        ]
    }
}

impl fmt::Display for VitalMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One age bucket mapping an inclusive year range to points
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeBucket {
    /// Lower bound in completed years, inclusive
    pub min_years: u32,
    /// Upper bound in completed years, inclusive; `None` is open-ended
    pub max_years: Option<u32>,
    /// Points awarded for ages in this bucket
    pub points: u8,
}

/// One admission-recency bucket mapping elapsed hours to points
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecencyBucket {
    /// Exclusive upper bound in elapsed hours; `None` is open-ended
    pub upto_hours: Option<u64>,
    /// Points awarded for admissions in this bucket
    pub points: u8,
}

/// One value band of a vital-sign metric: `min <= value < max`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitalBand {
    /// Inclusive lower bound
    pub min: f64,
    /// Exclusive upper bound; `None` is open-ended
    pub max: Option<f64>,
    /// Points awarded for values in this band
    pub points: u8,
    /// Spanish descriptor of the band (e.g. "Taquicardia")
    pub descriptor: String,
}

impl VitalBand {
    /// Check whether a measured value falls inside this band
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && self.max.is_none_or(|max| value < max)
    }
}

/// Band tables for the seven metrics of one population
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationVitals {
    /// Heart-rate bands
    pub heart_rate: Vec<VitalBand>,
    /// Respiratory-rate bands
    pub respiratory_rate: Vec<VitalBand>,
    /// Systolic-pressure bands
    pub systolic_pressure: Vec<VitalBand>,
    /// Diastolic-pressure bands
    pub diastolic_pressure: Vec<VitalBand>,
    /// Temperature bands
    pub temperature: Vec<VitalBand>,
    /// Oxygen-saturation bands
    pub oxygen_saturation: Vec<VitalBand>,
    /// Glasgow-score bands
    pub glasgow_score: Vec<VitalBand>,
}

impl PopulationVitals {
    /// Get the band table for a metric
    #[must_use]
    pub fn bands_for(&self, metric: VitalMetric) -> &[VitalBand] {
        match metric {
            VitalMetric::HeartRate => &self.heart_rate,
            VitalMetric::RespiratoryRate => &self.respiratory_rate,
            VitalMetric::SystolicPressure => &self.systolic_pressure,
            VitalMetric::DiastolicPressure => &self.diastolic_pressure,
            VitalMetric::Temperature => &self.temperature,
            VitalMetric::OxygenSaturation => &self.oxygen_saturation,
            VitalMetric::GlasgowScore => &self.glasgow_score,
        }
    }
}

/// Vital-sign band tables per population
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VitalTables {
    /// Adult band tables
    pub adult: PopulationVitals,
    /// Pediatric band tables
    pub minor: PopulationVitals,
    /// Pregnancy band tables
    pub pregnant: PopulationVitals,
}

/// Symptom vocabularies per population
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomTables {
    /// Adult symptom vocabulary
    pub adult: FxHashMap<String, u8>,
    /// Pediatric symptom vocabulary
    pub minor: FxHashMap<String, u8>,
    /// Pregnancy symptom vocabulary
    pub pregnant: FxHashMap<String, u8>,
}

/// Points awarded per population type
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationPoints {
    /// Points for adult patients
    pub adult: u8,
    /// Points for minor patients
    pub minor: u8,
    /// Points for pregnant patients
    pub pregnant: u8,
}

/// The complete, versioned criteria catalog
///
/// Unknown keys never error: each lookup degrades to the defined default
/// of its category (0 for most, 3 for specialties and insurers).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Version identifier of this rule set
    pub version: String,
    /// Age buckets, scanned in order
    pub age_buckets: Vec<AgeBucket>,
    /// Referring institutions with non-zero points
    pub institutions: FxHashMap<String, u8>,
    /// Points per population type
    pub population_points: PopulationPoints,
    /// Admission-recency buckets, scanned in order
    pub admission_buckets: Vec<RecencyBucket>,
    /// Population-specific vital-sign bands
    pub vitals: VitalTables,
    /// Population-specific symptom vocabularies
    pub symptoms: SymptomTables,
    /// Requested-service table, default 0
    pub services: FxHashMap<String, u8>,
    /// Specialty table
    pub specialties: FxHashMap<String, u8>,
    /// Default points for unrecognized specialties
    pub specialty_default: u8,
    /// Diagnostic-support study table, default 0
    pub studies: FxHashMap<String, u8>,
    /// Insurer table
    pub insurers: FxHashMap<String, u8>,
    /// Default points for unrecognized or absent insurers
    pub insurer_default: u8,
    /// Canned clinical interpretations, indexed by point value 0-5
    pub interpretations: Vec<String>,
}

impl Catalog {
    /// Parse a catalog from its versioned JSON representation
    pub fn from_json(data: &str) -> Result<Self> {
        let catalog: Self =
            serde_json::from_str(data).map_err(|e| EngineError::CatalogData(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Serialize the catalog to JSON for versioning
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| EngineError::CatalogData(e.to_string()))
    }

    /// Check that every table stays within the 0-5 point scale
    pub fn validate(&self) -> Result<()> {
        let table_points = self
            .institutions
            .values()
            .chain(self.services.values())
            .chain(self.specialties.values())
            .chain(self.studies.values())
            .chain(self.insurers.values())
            .chain(self.symptoms.adult.values())
            .chain(self.symptoms.minor.values())
            .chain(self.symptoms.pregnant.values());

        for &points in table_points {
            if points > MAX_CRITERION_POINTS {
                return Err(EngineError::CatalogData(format!(
                    "criterion points {points} exceed the 0-{MAX_CRITERION_POINTS} scale"
                )));
            }
        }

        if self.interpretations.len() != usize::from(MAX_CRITERION_POINTS) + 1 {
            return Err(EngineError::CatalogData(format!(
                "expected {} interpretations, found {}",
                usize::from(MAX_CRITERION_POINTS) + 1,
                self.interpretations.len()
            )));
        }

        Ok(())
    }

    /// Points for an age in completed years
    #[must_use]
    pub fn age_points(&self, age_years: u32) -> u8 {
        self.age_buckets
            .iter()
            .find(|b| age_years >= b.min_years && b.max_years.is_none_or(|max| age_years <= max))
            .map_or(0, |b| b.points)
    }

    /// Points for a referring institution; unknown institutions score 0
    #[must_use]
    pub fn institution_points(&self, name: &str) -> u8 {
        self.institutions.get(name).copied().unwrap_or(0)
    }

    /// Points for a population type
    #[must_use]
    pub const fn population_points(&self, population: PopulationType) -> u8 {
        match population {
            PopulationType::Adult => self.population_points.adult,
            PopulationType::Minor => self.population_points.minor,
            PopulationType::Pregnant => self.population_points.pregnant,
        }
    }

    /// Points for an admission made `elapsed_hours` ago
    #[must_use]
    pub fn admission_points(&self, elapsed_hours: u64) -> u8 {
        self.admission_buckets
            .iter()
            .find(|b| b.upto_hours.is_none_or(|upto| elapsed_hours < upto))
            .map_or(0, |b| b.points)
    }

    /// Find the band a measured vital value falls into
    #[must_use]
    pub fn vital_band(
        &self,
        population: PopulationType,
        metric: VitalMetric,
        value: f64,
    ) -> Option<&VitalBand> {
        let tables = match population {
            PopulationType::Adult => &self.vitals.adult,
            PopulationType::Minor => &self.vitals.minor,
            PopulationType::Pregnant => &self.vitals.pregnant,
        };
        tables.bands_for(metric).iter().find(|b| b.contains(value))
    }

    /// Points for a symptom under a population vocabulary
    ///
    /// `None` means the symptom is not clinically weighted for this
    /// population; the caller still records it as a 0-point finding.
    #[must_use]
    pub fn symptom_points(&self, population: PopulationType, name: &str) -> Option<u8> {
        let table = match population {
            PopulationType::Adult => &self.symptoms.adult,
            PopulationType::Minor => &self.symptoms.minor,
            PopulationType::Pregnant => &self.symptoms.pregnant,
        };
        table.get(name).copied()
    }

    /// Points for a requested service; unknown services score 0
    #[must_use]
    pub fn service_points(&self, name: &str) -> u8 {
        self.services.get(name).copied().unwrap_or(0)
    }

    /// Points for a specialty consult; unknown specialties score the
    /// intermediate default, since any consult implies non-trivial
    /// complexity
    #[must_use]
    pub fn specialty_points(&self, name: &str) -> u8 {
        self.specialties
            .get(name)
            .copied()
            .unwrap_or(self.specialty_default)
    }

    /// Points for a diagnostic-support study; unknown studies score 0
    #[must_use]
    pub fn study_points(&self, name: &str) -> u8 {
        self.studies.get(name).copied().unwrap_or(0)
    }

    /// Points for an insurer; unknown insurers score the "other" tier
    #[must_use]
    pub fn insurer_points(&self, name: &str) -> u8 {
        self.insurers
            .get(name)
            .copied()
            .unwrap_or(self.insurer_default)
    }

    /// Canned one-line clinical interpretation for a point value
    #[must_use]
    pub fn interpretation_for(&self, points: u8) -> &str {
        let index = usize::from(points.min(MAX_CRITERION_POINTS));
        &self.interpretations[index]
    }
}

impl Default for Catalog {
    fn default() -> Self {
        defaults::default_catalog()
    }
}
