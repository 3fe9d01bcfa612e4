#[cfg(test)]
mod tests {
    use prio_engine::{
        Catalog, PatientSnapshot, PopulationType, RiskLabel, ScoreCategory, ScoringConfig,
        evaluate_referral,
    };

    fn snapshot_for(population: PopulationType) -> PatientSnapshot {
        let mut snapshot = PatientSnapshot::new("REF-1000".to_string());
        snapshot.population = Some(population);
        snapshot
    }

    #[test]
    fn test_heart_rate_scores_diverge_between_populations() {
        let catalog = Catalog::default();
        let config = ScoringConfig::default();

        let mut adult = snapshot_for(PopulationType::Adult);
        adult.vital_signs.heart_rate = Some(95.0);
        let mut pregnant = snapshot_for(PopulationType::Pregnant);
        pregnant.vital_signs.heart_rate = Some(95.0);
        let mut minor = snapshot_for(PopulationType::Minor);
        minor.vital_signs.heart_rate = Some(95.0);

        let adult_report = evaluate_referral(&adult, &catalog, &config).unwrap();
        let pregnant_report = evaluate_referral(&pregnant, &catalog, &config).unwrap();
        let minor_report = evaluate_referral(&minor, &catalog, &config).unwrap();

        let vitals = |report: &prio_engine::EvaluationReport| {
            report
                .category(ScoreCategory::VitalSigns)
                .unwrap()
                .findings[0]
                .points
        };

        assert_eq!(vitals(&adult_report), 0);
        assert_eq!(vitals(&pregnant_report), 4);
        assert_eq!(vitals(&minor_report), 0);
    }

    #[test]
    fn test_absent_vitals_do_not_appear_in_report() {
        let catalog = Catalog::default();
        let config = ScoringConfig::default();
        let mut snapshot = snapshot_for(PopulationType::Adult);
        snapshot.vital_signs.temperature = Some(37.0);

        let report = evaluate_referral(&snapshot, &catalog, &config).unwrap();
        let vitals = report.category(ScoreCategory::VitalSigns).unwrap();

        // Only the measured temperature appears; nothing implies a normal
        // reading for the six unmeasured metrics
        assert_eq!(vitals.findings.len(), 1);
        assert_eq!(vitals.findings[0].criterion, "Temperatura");
    }

    #[test]
    fn test_unknown_specialty_scores_intermediate() {
        let catalog = Catalog::default();
        let config = ScoringConfig::default();
        let mut snapshot = snapshot_for(PopulationType::Adult);
        snapshot.specialties.push("Medicina Hiperbárica".to_string());

        let report = evaluate_referral(&snapshot, &catalog, &config).unwrap();
        let specialties = report.category(ScoreCategory::Specialties).unwrap();

        assert_eq!(specialties.findings[0].points, 3);
        assert_eq!(specialties.findings[0].label, RiskLabel::Intermediate);
    }

    #[test]
    fn test_unknown_service_scores_zero() {
        let catalog = Catalog::default();
        let config = ScoringConfig::default();
        let mut snapshot = snapshot_for(PopulationType::Adult);
        snapshot.services.push("Traslado en Ambulancia".to_string());

        let report = evaluate_referral(&snapshot, &catalog, &config).unwrap();
        let services = report.category(ScoreCategory::Services).unwrap();

        assert_eq!(services.findings[0].points, 0);
        assert_eq!(services.findings[0].label, RiskLabel::NotPrioritized);
    }

    #[test]
    fn test_unmatched_symptom_still_recorded() {
        let catalog = Catalog::default();
        let config = ScoringConfig::default();
        let mut snapshot = snapshot_for(PopulationType::Adult);
        snapshot.symptoms.push("Visión de halos de colores".to_string());

        let report = evaluate_referral(&snapshot, &catalog, &config).unwrap();
        let symptoms = report.category(ScoreCategory::Symptoms).unwrap();

        assert_eq!(symptoms.findings.len(), 1);
        assert_eq!(symptoms.findings[0].points, 0);
        assert_eq!(symptoms.subtotal, 0);
    }

    #[test]
    fn test_population_resolution_from_age_and_pregnancy() {
        let catalog = Catalog::default();
        let config = ScoringConfig::default();

        let mut minor = PatientSnapshot::new("REF-1001".to_string());
        minor.age_years = Some(9);
        let report = evaluate_referral(&minor, &catalog, &config).unwrap();
        let clinical = report.category(ScoreCategory::Clinical).unwrap();
        assert_eq!(clinical.findings[0].observed, "Menor de edad");
        assert_eq!(clinical.findings[0].points, 4);

        let mut pregnant = PatientSnapshot::new("REF-1002".to_string());
        pregnant.age_years = Some(28);
        pregnant.pregnant = Some(true);
        let report = evaluate_referral(&pregnant, &catalog, &config).unwrap();
        let clinical = report.category(ScoreCategory::Clinical).unwrap();
        assert_eq!(clinical.findings[0].observed, "Embarazada");
        assert_eq!(clinical.findings[0].points, 5);
    }

    #[test]
    fn test_catalog_round_trip_scores_identically() {
        let catalog = Catalog::default();
        let restored = Catalog::from_json(&catalog.to_json().unwrap()).unwrap();
        let config = ScoringConfig::default();

        let mut snapshot = snapshot_for(PopulationType::Pregnant);
        snapshot.age_years = Some(24);
        snapshot.vital_signs.heart_rate = Some(95.0);
        snapshot.symptoms.push("Sangrado vaginal".to_string());
        snapshot.specialties.push("Medicina Aeroespacial".to_string());

        let first = evaluate_referral(&snapshot, &catalog, &config).unwrap();
        let second = evaluate_referral(&snapshot, &restored, &config).unwrap();

        assert_eq!(first.total_score, second.total_score);
        assert_eq!(first.categories, second.categories);
    }

    #[test]
    fn test_snapshot_json_boundary_with_sparse_fields() {
        let catalog = Catalog::default();
        let config = ScoringConfig::default();

        let json = r#"{
            "patient_ref": "REF-1003",
            "age_years": 67,
            "symptoms": ["Palpitaciones"],
            "insurer": "IHSS"
        }"#;
        let snapshot: PatientSnapshot = serde_json::from_str(json).unwrap();

        let report = evaluate_referral(&snapshot, &catalog, &config).unwrap();

        // age(1) + population(1) + symptom(3) + insurer(2) = 7
        assert_eq!(report.total_score, 7);
        assert!(!report.prioritize);
    }
}
