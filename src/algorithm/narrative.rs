//! Narrative generation
//!
//! Turns the scored findings into a sectioned, deterministic Spanish
//! report: decision headline, per-category breakdown, high- and low-risk
//! factor lists, cross-category correlation notes, recommendations and a
//! technical conclusion. Pure string assembly; the same input always
//! produces byte-identical output, which keeps the narrative testable
//! against golden expectations.

use itertools::Itertools;
use smallvec::SmallVec;

use crate::algorithm::aggregate::Decision;
use crate::catalog::VitalMetric;
use crate::config::ScoringConfig;
use crate::models::finding::{CategoryResult, Finding, ScoreCategory};
use crate::models::population::PopulationType;

/// Findings with at least this many points are flagged as high risk
const HIGH_RISK_POINTS: u8 = 4;

/// Findings with at most this many points are flagged as low risk
const LOW_RISK_POINTS: u8 = 2;

fn points_phrase(points: u32) -> String {
    if points == 1 {
        "1 punto".to_string()
    } else {
        format!("{points} puntos")
    }
}

fn category_findings(categories: &[CategoryResult], category: ScoreCategory) -> &[Finding] {
    match categories.iter().find(|c| c.category == category) {
        Some(result) => &result.findings,
        None => &[],
    }
}

fn vital_points(categories: &[CategoryResult], metric: VitalMetric) -> u8 {
    category_findings(categories, ScoreCategory::VitalSigns)
        .iter()
        .find(|f| f.criterion == metric.display_name())
        .map_or(0, |f| f.points)
}

fn symptom_present(categories: &[CategoryResult], needle: &str) -> bool {
    category_findings(categories, ScoreCategory::Symptoms)
        .iter()
        .any(|f| f.observed.to_lowercase().contains(needle))
}

/// Evaluate the fixed cross-category correlation patterns
fn correlation_notes(
    population: PopulationType,
    categories: &[CategoryResult],
) -> Vec<&'static str> {
    let mut notes = Vec::new();

    let heart_alert = vital_points(categories, VitalMetric::HeartRate) >= HIGH_RISK_POINTS;
    let pressure_alert = vital_points(categories, VitalMetric::SystolicPressure) >= 3
        || vital_points(categories, VitalMetric::DiastolicPressure) >= 3;
    let respiratory_alert = vital_points(categories, VitalMetric::RespiratoryRate) >= 3;
    let saturation_alert = vital_points(categories, VitalMetric::OxygenSaturation) >= 3;
    let fever_alert = vital_points(categories, VitalMetric::Temperature) >= 3;
    let consciousness_alert = vital_points(categories, VitalMetric::GlasgowScore) >= 3;

    if heart_alert && pressure_alert && symptom_present(categories, "torácico") {
        notes.push(
            "Taquicardia, presión arterial elevada y dolor torácico: patrón compatible con \
             síndrome cardiovascular agudo.",
        );
    }

    if saturation_alert && respiratory_alert {
        notes.push(
            "Saturación de oxígeno reducida con frecuencia respiratoria alterada: compromiso \
             respiratorio en curso.",
        );
    }

    if fever_alert && heart_alert {
        notes.push("Fiebre con taquicardia: posible proceso infeccioso sistémico en evolución.");
    }

    if consciousness_alert
        && (symptom_present(categories, "cefalea")
            || symptom_present(categories, "conciencia")
            || symptom_present(categories, "neurológico"))
    {
        notes.push(
            "Alteración de conciencia con sintomatología neurológica: deterioro que amerita \
             evaluación urgente.",
        );
    }

    if population == PopulationType::Pregnant
        && pressure_alert
        && (symptom_present(categories, "cefalea")
            || symptom_present(categories, "edema")
            || symptom_present(categories, "visión"))
    {
        notes.push(
            "Hipertensión en paciente embarazada con síntomas de alarma: descartar \
             preeclampsia de forma urgente.",
        );
    }

    notes
}

/// Render the full narrative for an evaluation
#[must_use]
pub fn narrate(
    patient_ref: &str,
    population: PopulationType,
    categories: &[CategoryResult],
    decision: &Decision,
    config: &ScoringConfig,
) -> String {
    let mut out = String::new();

    // (a) decision headline
    out.push_str("INFORME DE PRIORIZACIÓN CLÍNICA\n");
    out.push_str(&format!("Referencia: {patient_ref}\n"));
    out.push_str(&format!("Población evaluada: {population}\n\n"));
    if decision.prioritize {
        out.push_str("DECISIÓN: CASO PRIORIZADO\n");
    } else {
        out.push_str("DECISIÓN: CASO NO PRIORIZADO\n");
    }
    out.push_str(&format!(
        "Puntaje total: {} de un máximo teórico de {} (umbral de priorización: {}).\n\n",
        points_phrase(decision.total_score),
        config.max_theoretical_score,
        config.threshold
    ));

    // (b) per-category breakdown
    out.push_str("DESGLOSE POR CATEGORÍA\n");
    for category in categories {
        out.push_str(&format!(
            "{} — subtotal: {}\n",
            category.category,
            points_phrase(category.subtotal)
        ));
        if category.findings.is_empty() {
            out.push_str("  (sin hallazgos registrados)\n");
        }
        for finding in &category.findings {
            out.push_str(&format!(
                "  - {}: {} | {}, riesgo {}. {}\n",
                finding.criterion,
                finding.observed,
                points_phrase(u32::from(finding.points)),
                finding.label,
                finding.rationale
            ));
        }
    }
    out.push('\n');

    // (c) high-risk factors, category-then-insertion order
    let high_risk: SmallVec<[&Finding; 16]> = categories
        .iter()
        .flat_map(|c| c.findings.iter())
        .filter(|f| f.points >= HIGH_RISK_POINTS)
        .collect();
    out.push_str("FACTORES DE ALTO RIESGO\n");
    if high_risk.is_empty() {
        out.push_str("  Sin factores de alto riesgo identificados.\n");
    }
    for finding in &high_risk {
        out.push_str(&format!(
            "  - {} ({}): {}\n",
            finding.criterion,
            finding.observed,
            points_phrase(u32::from(finding.points))
        ));
    }
    out.push('\n');

    // (d) low-risk or absent factors
    let low_risk: SmallVec<[&Finding; 16]> = categories
        .iter()
        .flat_map(|c| c.findings.iter())
        .filter(|f| f.points <= LOW_RISK_POINTS)
        .collect();
    out.push_str("FACTORES DE BAJO RIESGO O AUSENTES\n");
    if low_risk.is_empty() {
        out.push_str("  Sin hallazgos de bajo riesgo.\n");
    }
    for finding in &low_risk {
        out.push_str(&format!(
            "  - {} ({}): {}\n",
            finding.criterion,
            finding.observed,
            points_phrase(u32::from(finding.points))
        ));
    }
    out.push('\n');

    // (e) cross-category correlations
    out.push_str("CORRELACIONES CLÍNICAS\n");
    let notes = correlation_notes(population, categories);
    if notes.is_empty() {
        out.push_str("  Sin correlaciones clínicas relevantes entre categorías.\n");
    }
    for note in &notes {
        out.push_str(&format!("  - {note}\n"));
    }
    out.push('\n');

    // (f) recommendations, branching only on the decision
    out.push_str("RECOMENDACIONES\n");
    let recommendations: &[&str] = if decision.prioritize {
        &[
            "Gestionar cupo prioritario en el servicio receptor.",
            "Notificar al servicio de destino la condición clínica del paciente.",
            "Reevaluar los signos vitales al momento del ingreso.",
        ]
    } else {
        &[
            "Programar la referencia por la vía ordinaria.",
            "Indicar al paciente los signos de alarma para reconsulta inmediata.",
            "Reevaluar la priorización ante cualquier cambio clínico.",
        ]
    };
    for recommendation in recommendations {
        out.push_str(&format!("  - {recommendation}\n"));
    }
    out.push('\n');

    // (g) technical conclusion
    let display_percentage = decision.percentage.clamp(0.0, 100.0);
    out.push_str("CONCLUSIÓN TÉCNICA\n");
    out.push_str(&format!(
        "El caso {patient_ref} obtuvo {}, equivalentes al {display_percentage:.1}% del máximo \
         teórico de {}. ",
        points_phrase(decision.total_score),
        config.max_theoretical_score
    ));
    if decision.prioritize {
        out.push_str(&format!(
            "El puntaje alcanza el umbral de priorización de {}, por lo que el caso SE \
             PRIORIZA con una prioridad {}.",
            config.threshold,
            decision.tier
        ));
    } else {
        out.push_str(&format!(
            "El puntaje no alcanza el umbral de priorización de {}, por lo que el caso NO SE \
             PRIORIZA y se clasifica con una prioridad {}.",
            config.threshold,
            decision.tier
        ));
    }
    if !high_risk.is_empty() {
        let determinants = high_risk
            .iter()
            .map(|f| format!("{} ({})", f.criterion, f.observed))
            .join("; ");
        out.push_str(&format!(" Factores determinantes: {determinants}."));
    }
    out.push('\n');

    out
}
