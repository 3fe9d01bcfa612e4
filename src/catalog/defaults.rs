//! Embedded default criteria catalog
//!
//! These tables are the authoritative deterministic rule set. They are kept
//! as data (not branching code) so a serialized copy of the catalog can be
//! diffed and versioned when the clinical rules change.

use rustc_hash::FxHashMap;

use super::{
    AgeBucket, Catalog, PopulationPoints, PopulationVitals, RecencyBucket, SymptomTables,
    VitalBand, VitalTables,
};

/// Version identifier of the embedded rule set
pub const DEFAULT_CATALOG_VERSION: &str = "2025.1";

fn band(min: f64, max: Option<f64>, points: u8, descriptor: &str) -> VitalBand {
    VitalBand {
        min,
        max,
        points,
        descriptor: descriptor.to_string(),
    }
}

fn table(entries: &[(&str, u8)]) -> FxHashMap<String, u8> {
    entries
        .iter()
        .map(|(name, points)| ((*name).to_string(), *points))
        .collect()
}

fn adult_vitals() -> PopulationVitals {
    PopulationVitals {
        heart_rate: vec![
            band(0.0, Some(40.0), 5, "Bradicardia severa"),
            band(40.0, Some(60.0), 3, "Bradicardia"),
            band(60.0, Some(101.0), 0, "Normal"),
            band(101.0, Some(131.0), 4, "Taquicardia"),
            band(131.0, None, 5, "Taquicardia severa"),
        ],
        respiratory_rate: vec![
            band(0.0, Some(10.0), 5, "Bradipnea severa"),
            band(10.0, Some(12.0), 3, "Bradipnea"),
            band(12.0, Some(21.0), 0, "Normal"),
            band(21.0, Some(30.0), 3, "Taquipnea"),
            band(30.0, None, 5, "Taquipnea severa"),
        ],
        systolic_pressure: vec![
            band(0.0, Some(90.0), 5, "Hipotensión"),
            band(90.0, Some(140.0), 0, "Normal"),
            band(140.0, Some(180.0), 3, "Hipertensión"),
            band(180.0, None, 5, "Crisis hipertensiva"),
        ],
        diastolic_pressure: vec![
            band(0.0, Some(60.0), 4, "Hipotensión diastólica"),
            band(60.0, Some(90.0), 0, "Normal"),
            band(90.0, Some(110.0), 3, "Hipertensión diastólica"),
            band(110.0, None, 5, "Crisis hipertensiva"),
        ],
        temperature: vec![
            band(0.0, Some(35.0), 4, "Hipotermia"),
            band(35.0, Some(38.0), 0, "Normal"),
            band(38.0, Some(39.5), 3, "Fiebre"),
            band(39.5, None, 5, "Fiebre alta"),
        ],
        oxygen_saturation: vec![
            band(0.0, Some(85.0), 5, "Hipoxemia severa"),
            band(85.0, Some(90.0), 4, "Hipoxemia"),
            band(90.0, Some(94.0), 3, "Saturación límite"),
            band(94.0, None, 0, "Normal"),
        ],
        glasgow_score: vec![
            band(0.0, Some(9.0), 5, "Compromiso severo de conciencia"),
            band(9.0, Some(13.0), 4, "Compromiso moderado de conciencia"),
            band(13.0, Some(15.0), 3, "Compromiso leve de conciencia"),
            band(15.0, None, 0, "Normal"),
        ],
    }
}

fn minor_vitals() -> PopulationVitals {
    PopulationVitals {
        heart_rate: vec![
            band(0.0, Some(80.0), 4, "Bradicardia"),
            band(80.0, Some(141.0), 0, "Normal"),
            band(141.0, Some(161.0), 3, "Taquicardia"),
            band(161.0, None, 5, "Taquicardia severa"),
        ],
        respiratory_rate: vec![
            band(0.0, Some(20.0), 3, "Bradipnea"),
            band(20.0, Some(41.0), 0, "Normal"),
            band(41.0, Some(61.0), 4, "Taquipnea"),
            band(61.0, None, 5, "Taquipnea severa"),
        ],
        systolic_pressure: vec![
            band(0.0, Some(80.0), 5, "Hipotensión"),
            band(80.0, Some(120.0), 0, "Normal"),
            band(120.0, None, 3, "Presión elevada"),
        ],
        diastolic_pressure: vec![
            band(0.0, Some(50.0), 3, "Hipotensión diastólica"),
            band(50.0, Some(80.0), 0, "Normal"),
            band(80.0, None, 3, "Presión diastólica elevada"),
        ],
        temperature: vec![
            band(0.0, Some(35.0), 4, "Hipotermia"),
            band(35.0, Some(38.0), 0, "Normal"),
            band(38.0, Some(39.5), 4, "Fiebre"),
            band(39.5, None, 5, "Fiebre alta"),
        ],
        oxygen_saturation: vec![
            band(0.0, Some(85.0), 5, "Hipoxemia severa"),
            band(85.0, Some(92.0), 4, "Hipoxemia"),
            band(92.0, Some(95.0), 2, "Saturación límite"),
            band(95.0, None, 0, "Normal"),
        ],
        glasgow_score: vec![
            band(0.0, Some(9.0), 5, "Compromiso severo de conciencia"),
            band(9.0, Some(13.0), 4, "Compromiso moderado de conciencia"),
            band(13.0, Some(15.0), 2, "Compromiso leve de conciencia"),
            band(15.0, None, 0, "Normal"),
        ],
    }
}

fn pregnant_vitals() -> PopulationVitals {
    PopulationVitals {
        heart_rate: vec![
            band(0.0, Some(50.0), 5, "Bradicardia severa"),
            band(50.0, Some(61.0), 3, "Bradicardia"),
            band(61.0, Some(91.0), 0, "Normal"),
            band(91.0, Some(121.0), 4, "Taquicardia"),
            band(121.0, None, 5, "Taquicardia severa"),
        ],
        respiratory_rate: vec![
            band(0.0, Some(12.0), 4, "Bradipnea"),
            band(12.0, Some(23.0), 0, "Normal"),
            band(23.0, Some(31.0), 4, "Taquipnea"),
            band(31.0, None, 5, "Taquipnea severa"),
        ],
        systolic_pressure: vec![
            band(0.0, Some(90.0), 5, "Hipotensión"),
            band(90.0, Some(130.0), 0, "Normal"),
            band(130.0, Some(140.0), 3, "Presión elevada"),
            band(140.0, None, 5, "Hipertensión gestacional"),
        ],
        diastolic_pressure: vec![
            band(0.0, Some(50.0), 4, "Hipotensión diastólica"),
            band(50.0, Some(85.0), 0, "Normal"),
            band(85.0, Some(90.0), 3, "Presión diastólica elevada"),
            band(90.0, None, 5, "Hipertensión gestacional"),
        ],
        temperature: vec![
            band(0.0, Some(35.0), 4, "Hipotermia"),
            band(35.0, Some(38.0), 0, "Normal"),
            band(38.0, Some(39.0), 4, "Fiebre"),
            band(39.0, None, 5, "Fiebre alta"),
        ],
        oxygen_saturation: vec![
            band(0.0, Some(90.0), 5, "Hipoxemia severa"),
            band(90.0, Some(95.0), 4, "Hipoxemia"),
            band(95.0, None, 0, "Normal"),
        ],
        glasgow_score: vec![
            band(0.0, Some(9.0), 5, "Compromiso severo de conciencia"),
            band(9.0, Some(13.0), 4, "Compromiso moderado de conciencia"),
            band(13.0, Some(15.0), 3, "Compromiso leve de conciencia"),
            band(15.0, None, 0, "Normal"),
        ],
    }
}

/// Build the embedded default catalog
#[must_use]
pub fn default_catalog() -> Catalog {
    Catalog {
        version: DEFAULT_CATALOG_VERSION.to_string(),
        age_buckets: vec![
            AgeBucket {
                min_years: 0,
                max_years: Some(5),
                points: 5,
            },
            AgeBucket {
                min_years: 6,
                max_years: Some(17),
                points: 4,
            },
            AgeBucket {
                min_years: 18,
                max_years: Some(69),
                points: 1,
            },
            AgeBucket {
                min_years: 70,
                max_years: None,
                points: 4,
            },
        ],
        institutions: table(&[
            ("Hospital Escuela Universitario", 5),
            ("Hospital Mario Catarino Rivas", 5),
        ]),
        population_points: PopulationPoints {
            adult: 1,
            minor: 4,
            pregnant: 5,
        },
        admission_buckets: vec![
            RecencyBucket {
                upto_hours: Some(24),
                points: 5,
            },
            RecencyBucket {
                upto_hours: Some(48),
                points: 4,
            },
            RecencyBucket {
                upto_hours: Some(144),
                points: 3,
            },
            RecencyBucket {
                upto_hours: None,
                points: 1,
            },
        ],
        vitals: VitalTables {
            adult: adult_vitals(),
            minor: minor_vitals(),
            pregnant: pregnant_vitals(),
        },
        symptoms: SymptomTables {
            adult: table(&[
                ("Dolor torácico agudo (Menos de 24 horas)", 5),
                ("Dificultad respiratoria severa", 5),
                ("Alteración del estado de conciencia", 5),
                ("Hemorragia activa", 5),
                ("Déficit neurológico focal", 5),
                ("Dolor abdominal intenso", 4),
                ("Cefalea súbita e intensa", 4),
                ("Síncope", 4),
                ("Palpitaciones", 3),
                ("Fiebre persistente (Más de 72 horas)", 3),
                ("Vómitos persistentes", 3),
                ("Edema de miembros inferiores", 2),
                ("Dolor crónico", 1),
                ("Mareo ocasional", 1),
            ]),
            minor: table(&[
                ("Dificultad respiratoria", 5),
                ("Convulsiones", 5),
                ("Rechazo al alimento", 4),
                ("Fiebre alta (Más de 39 grados)", 4),
                ("Decaimiento marcado", 4),
                ("Vómitos persistentes", 4),
                ("Diarrea con deshidratación", 4),
                ("Llanto inconsolable", 3),
                ("Erupción cutánea con fiebre", 3),
                ("Tos persistente", 2),
            ]),
            pregnant: table(&[
                ("Sangrado vaginal", 5),
                ("Cefalea intensa con visión borrosa", 5),
                ("Ausencia de movimientos fetales", 5),
                ("Contracciones antes de término", 5),
                ("Edema súbito de manos y cara", 4),
                ("Dolor epigástrico intenso", 4),
                ("Fiebre", 3),
                ("Náuseas y vómitos severos", 3),
            ]),
        },
        services: table(&[
            ("Emergencia", 5),
            ("Unidad de Cuidados Intensivos", 5),
            ("Quirófano", 4),
            ("Hospitalización", 4),
            ("Observación", 2),
            ("Consulta Externa", 1),
        ]),
        specialties: table(&[
            ("Cardiología", 5),
            ("Neurocirugía", 5),
            ("Oncología", 5),
            ("Neurología", 4),
            ("Cirugía General", 4),
            ("Medicina Interna", 4),
            ("Ginecología y Obstetricia", 4),
            ("Pediatría", 4),
            ("Traumatología", 3),
            ("Dermatología", 1),
            ("Oftalmología", 1),
        ]),
        specialty_default: 3,
        studies: table(&[
            ("Angiografía", 5),
            ("Tomografía Axial Computarizada", 4),
            ("Resonancia Magnética", 4),
            ("Ecocardiograma", 3),
            ("Electrocardiograma", 3),
            ("Endoscopía", 3),
            ("Ultrasonido", 2),
            ("Rayos X", 1),
            ("Laboratorio Clínico", 1),
        ]),
        insurers: table(&[
            ("Sin Aseguranza", 5),
            ("Subsidio Estatal", 4),
            ("IHSS", 2),
            ("Seguro Privado", 1),
        ]),
        insurer_default: 3,
        interpretations: vec![
            "Sin criterio de priorización aplicable.".to_string(),
            "Hallazgo de riesgo muy bajo, de relevancia clínica limitada.".to_string(),
            "Hallazgo de riesgo bajo, sin impacto mayor en la priorización.".to_string(),
            "Hallazgo de riesgo intermedio que amerita seguimiento.".to_string(),
            "Hallazgo de alto riesgo con impacto directo en la priorización.".to_string(),
            "Hallazgo crítico que requiere atención inmediata.".to_string(),
        ],
    }
}
