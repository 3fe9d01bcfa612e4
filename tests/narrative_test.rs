#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Utc};
    use prio_engine::{
        Catalog, PatientSnapshot, PopulationType, ScoringConfig, evaluate_referral_at,
    };

    fn evaluation_instant() -> DateTime<Utc> {
        "2025-06-10T12:00:00Z".parse().unwrap()
    }

    fn cardiovascular_snapshot() -> PatientSnapshot {
        let mut snapshot = PatientSnapshot::new("REF-2000".to_string());
        snapshot.age_years = Some(58);
        snapshot.population = Some(PopulationType::Adult);
        snapshot.admitted_at = Some(evaluation_instant() - Duration::hours(6));
        snapshot.vital_signs.heart_rate = Some(125.0);
        snapshot.vital_signs.systolic_pressure = Some(165.0);
        snapshot
            .symptoms
            .push("Dolor torácico agudo (Menos de 24 horas)".to_string());
        snapshot.insurer = Some("Otras".to_string());
        snapshot
    }

    #[test]
    fn test_sections_render_in_fixed_order() {
        let catalog = Catalog::default();
        let config = ScoringConfig::default();
        let snapshot = cardiovascular_snapshot();

        let report =
            evaluate_referral_at(&snapshot, &catalog, &config, evaluation_instant()).unwrap();

        let positions: Vec<usize> = [
            "INFORME DE PRIORIZACIÓN CLÍNICA",
            "DECISIÓN:",
            "DESGLOSE POR CATEGORÍA",
            "FACTORES DE ALTO RIESGO",
            "FACTORES DE BAJO RIESGO O AUSENTES",
            "CORRELACIONES CLÍNICAS",
            "RECOMENDACIONES",
            "CONCLUSIÓN TÉCNICA",
        ]
        .iter()
        .map(|section| report.narrative.find(section).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_headline_reflects_decision_and_threshold() {
        let catalog = Catalog::default();
        let config = ScoringConfig::default();
        let snapshot = cardiovascular_snapshot();

        let report =
            evaluate_referral_at(&snapshot, &catalog, &config, evaluation_instant()).unwrap();

        assert!(report.prioritize);
        assert!(report.narrative.contains("DECISIÓN: CASO PRIORIZADO"));
        assert!(report.narrative.contains("umbral de priorización: 15"));
        assert!(
            report
                .narrative
                .contains(&format!("Puntaje total: {} puntos", report.total_score))
        );
    }

    #[test]
    fn test_high_risk_factors_listed_in_category_order() {
        let catalog = Catalog::default();
        let config = ScoringConfig::default();
        let snapshot = cardiovascular_snapshot();

        let report =
            evaluate_referral_at(&snapshot, &catalog, &config, evaluation_instant()).unwrap();

        let section_start = report.narrative.find("FACTORES DE ALTO RIESGO").unwrap();
        let section_end = report.narrative.find("FACTORES DE BAJO RIESGO").unwrap();
        let section = &report.narrative[section_start..section_end];

        // Clinical (admission) precedes vitals (heart rate) which precedes
        // the symptom, per category-then-insertion order
        let admission = section.find("Tiempo desde la admisión").unwrap();
        let heart = section.find("Frecuencia cardíaca").unwrap();
        let symptom = section.find("Dolor torácico agudo").unwrap();
        assert!(admission < heart);
        assert!(heart < symptom);
    }

    #[test]
    fn test_cardiovascular_correlation_note() {
        let catalog = Catalog::default();
        let config = ScoringConfig::default();
        let snapshot = cardiovascular_snapshot();

        let report =
            evaluate_referral_at(&snapshot, &catalog, &config, evaluation_instant()).unwrap();

        assert!(
            report
                .narrative
                .contains("patrón compatible con síndrome cardiovascular agudo")
        );
    }

    #[test]
    fn test_preeclampsia_correlation_note() {
        let catalog = Catalog::default();
        let config = ScoringConfig::default();
        let mut snapshot = PatientSnapshot::new("REF-2001".to_string());
        snapshot.age_years = Some(31);
        snapshot.population = Some(PopulationType::Pregnant);
        snapshot.vital_signs.systolic_pressure = Some(150.0);
        snapshot
            .symptoms
            .push("Cefalea intensa con visión borrosa".to_string());

        let report =
            evaluate_referral_at(&snapshot, &catalog, &config, evaluation_instant()).unwrap();

        assert!(report.narrative.contains("descartar"));
        assert!(report.narrative.contains("preeclampsia"));
    }

    #[test]
    fn test_low_score_narrative_recommends_ordinary_track() {
        let catalog = Catalog::default();
        let config = ScoringConfig::default();
        let mut snapshot = PatientSnapshot::new("REF-2002".to_string());
        snapshot.age_years = Some(30);
        snapshot.population = Some(PopulationType::Adult);

        let report =
            evaluate_referral_at(&snapshot, &catalog, &config, evaluation_instant()).unwrap();

        assert!(!report.prioritize);
        assert!(report.narrative.contains("DECISIÓN: CASO NO PRIORIZADO"));
        assert!(report.narrative.contains("vía ordinaria"));
        assert!(!report.narrative.contains("cupo prioritario"));
        assert!(
            report
                .narrative
                .contains("Sin correlaciones clínicas relevantes")
        );
    }

    #[test]
    fn test_conclusion_restates_score_percentage_and_tier() {
        let catalog = Catalog::default();
        let config = ScoringConfig::default();
        let snapshot = cardiovascular_snapshot();

        let report =
            evaluate_referral_at(&snapshot, &catalog, &config, evaluation_instant()).unwrap();

        let conclusion_start = report.narrative.find("CONCLUSIÓN TÉCNICA").unwrap();
        let conclusion = &report.narrative[conclusion_start..];

        assert!(conclusion.contains(&format!("{} puntos", report.total_score)));
        assert!(conclusion.contains(&format!("{:.1}%", report.percentage)));
        assert!(conclusion.contains(report.tier.display_name()));
        assert!(conclusion.contains("Factores determinantes"));
    }

    #[test]
    fn test_narrative_is_byte_identical_across_calls() {
        let catalog = Catalog::default();
        let config = ScoringConfig::default();
        let snapshot = cardiovascular_snapshot();

        let first =
            evaluate_referral_at(&snapshot, &catalog, &config, evaluation_instant()).unwrap();
        let second =
            evaluate_referral_at(&snapshot, &catalog, &config, evaluation_instant()).unwrap();

        assert_eq!(first.narrative, second.narrative);
    }

    #[test]
    fn test_empty_categories_marked_in_breakdown() {
        let catalog = Catalog::default();
        let config = ScoringConfig::default();
        let mut snapshot = PatientSnapshot::new("REF-2003".to_string());
        snapshot.age_years = Some(30);
        snapshot.population = Some(PopulationType::Adult);

        let report =
            evaluate_referral_at(&snapshot, &catalog, &config, evaluation_instant()).unwrap();

        assert!(report.narrative.contains("(sin hallazgos registrados)"));
    }
}
