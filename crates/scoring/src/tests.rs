use crate::math::sigmoid;
use crate::schema::{
    IDX_CONTRACT_24_MONTH, IDX_CONTRACT_6_MONTH, IDX_CONTRACT_MONTH_TO_MONTH,
    IDX_PLAN_DATA_VOICE, IDX_PLAN_PREMIUM_BUNDLE, IDX_REGION_REGIONAL_CITY, IDX_REGION_RURAL_AREA,
    IDX_TECH_3G, IDX_TECH_4G_LTE, IDX_TECH_5G,
};
use crate::*;

fn base_profile() -> CustomerProfile {
    CustomerProfile {
        tenure_months: 12,
        monthly_charges_etb: 550.0,
        support_calls_3m: 1,
        outage_score: 1,
        region: Region::AddisAbaba,
        contract: ContractType::TwelveMonth,
        technology: NetworkTechnology::ModernBase,
        plan: ServicePlan::BasicVoice,
    }
}

fn test_model() -> ChurnModel {
    ChurnModel {
        model_id: "test-v1".to_string(),
        model_version: "1.0.0".to_string(),
        weights: vec![
            -0.05, // Tenure_Months
            0.001, // Monthly_Charges_ETB
            0.4,   // Support_Calls_3Months
            0.9,   // Network_Outage_Score_0_5
            -0.0001, // Total_Charges_ETB
            0.8,   // Region_Regional City
            1.2,   // Region_Rural Area
            -0.3,  // Contract_Type_24-Month
            0.7,   // Contract_Type_6-Month
            1.1,   // Contract_Type_Month-to-month
            0.1,   // Service_Plan_Data/Internet + Voice
            -0.2,  // Service_Plan_Premium Bundle
            0.9,   // Network_Technology_3G
            0.3,   // Network_Technology_4G/LTE
            -0.4,  // Network_Technology_5G
        ],
        bias: -1.5,
        threshold: 0.5,
        feature_names: FEATURE_COLUMNS.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn schema_has_no_duplicate_columns() {
    for (i, a) in FEATURE_COLUMNS.iter().enumerate() {
        for b in FEATURE_COLUMNS.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn encode_is_deterministic() {
    let profile = CustomerProfile {
        tenure_months: 33,
        monthly_charges_etb: 1234.5,
        support_calls_3m: 7,
        outage_score: 4,
        region: Region::RuralArea,
        contract: ContractType::MonthToMonth,
        technology: NetworkTechnology::ThreeG,
        plan: ServicePlan::PremiumBundle,
    };
    assert_eq!(FeatureVector::encode(&profile), FeatureVector::encode(&profile));
}

#[test]
fn base_profile_encodes_to_expected_vector() {
    let v = FeatureVector::encode(&base_profile());
    let expected = [
        12.0, 550.0, 1.0, 1.0, 6600.0, // numerics, total = 550 × 12
        0.0, 0.0, // region base
        0.0, 0.0, 0.0, // contract base
        0.0, 0.0, // plan base
        0.0, 0.0, 1.0, // tech base collapses into the 5G column
    ];
    assert_eq!(v.values, expected);
}

#[test]
fn region_group_sets_at_most_one_indicator() {
    let region_slots = [IDX_REGION_REGIONAL_CITY, IDX_REGION_RURAL_AREA];
    for (region, expected_set) in [
        (Region::AddisAbaba, None),
        (Region::RegionalCity, Some(IDX_REGION_REGIONAL_CITY)),
        (Region::RuralArea, Some(IDX_REGION_RURAL_AREA)),
    ] {
        let mut profile = base_profile();
        profile.region = region;
        let v = FeatureVector::encode(&profile);
        for slot in region_slots {
            let want = if Some(slot) == expected_set { 1.0 } else { 0.0 };
            assert_eq!(v.values[slot], want, "region {:?} slot {}", region, slot);
        }
    }
}

#[test]
fn contract_group_sets_at_most_one_indicator() {
    let contract_slots = [
        IDX_CONTRACT_24_MONTH,
        IDX_CONTRACT_6_MONTH,
        IDX_CONTRACT_MONTH_TO_MONTH,
    ];
    for (contract, expected_set) in [
        (ContractType::TwelveMonth, None),
        (ContractType::TwentyFourMonth, Some(IDX_CONTRACT_24_MONTH)),
        (ContractType::SixMonth, Some(IDX_CONTRACT_6_MONTH)),
        (ContractType::MonthToMonth, Some(IDX_CONTRACT_MONTH_TO_MONTH)),
    ] {
        let mut profile = base_profile();
        profile.contract = contract;
        let v = FeatureVector::encode(&profile);
        for slot in contract_slots {
            let want = if Some(slot) == expected_set { 1.0 } else { 0.0 };
            assert_eq!(v.values[slot], want, "contract {:?} slot {}", contract, slot);
        }
    }
}

#[test]
fn plan_group_sets_at_most_one_indicator() {
    let plan_slots = [IDX_PLAN_DATA_VOICE, IDX_PLAN_PREMIUM_BUNDLE];
    for (plan, expected_set) in [
        (ServicePlan::BasicVoice, None),
        (ServicePlan::DataVoice, Some(IDX_PLAN_DATA_VOICE)),
        (ServicePlan::PremiumBundle, Some(IDX_PLAN_PREMIUM_BUNDLE)),
    ] {
        let mut profile = base_profile();
        profile.plan = plan;
        let v = FeatureVector::encode(&profile);
        for slot in plan_slots {
            let want = if Some(slot) == expected_set { 1.0 } else { 0.0 };
            assert_eq!(v.values[slot], want, "plan {:?} slot {}", plan, slot);
        }
    }
}

#[test]
fn technology_base_maps_onto_5g_column() {
    let tech_slots = [IDX_TECH_3G, IDX_TECH_4G_LTE, IDX_TECH_5G];
    for (tech, expected_set) in [
        (NetworkTechnology::ModernBase, IDX_TECH_5G),
        (NetworkTechnology::ThreeG, IDX_TECH_3G),
        (NetworkTechnology::FourGLte, IDX_TECH_4G_LTE),
    ] {
        let mut profile = base_profile();
        profile.technology = tech;
        let v = FeatureVector::encode(&profile);
        for slot in tech_slots {
            let want = if slot == expected_set { 1.0 } else { 0.0 };
            assert_eq!(v.values[slot], want, "tech {:?} slot {}", tech, slot);
        }
    }
}

#[test]
fn total_charges_is_product_of_tenure_and_monthly() {
    let mut profile = base_profile();
    profile.tenure_months = 84;
    profile.monthly_charges_etb = 2999.5;
    let v = FeatureVector::encode(&profile);
    assert_eq!(v.values[4], 2999.5 * 84.0);
    assert_eq!(v.values[4], profile.total_charges_etb());
}

#[test]
fn valid_model_passes_validation() {
    test_model().validate().unwrap();
}

#[test]
fn wrong_weight_count_is_rejected() {
    let mut model = test_model();
    model.weights.pop();
    assert!(matches!(
        model.validate(),
        Err(ModelError::DimensionMismatch { expected: 15, got: 14 })
    ));
}

#[test]
fn out_of_range_threshold_is_rejected() {
    let mut model = test_model();
    model.threshold = 1.5;
    assert!(matches!(model.validate(), Err(ModelError::InvalidThreshold(_))));
}

#[test]
fn non_finite_weight_is_rejected() {
    let mut model = test_model();
    model.weights[3] = f64::NAN;
    assert!(matches!(
        model.validate(),
        Err(ModelError::NonFiniteWeight { index: 3, .. })
    ));
}

#[test]
fn non_finite_bias_is_rejected() {
    let mut model = test_model();
    model.bias = f64::INFINITY;
    assert!(matches!(model.validate(), Err(ModelError::NonFiniteBias(_))));
}

#[test]
fn permuted_feature_names_are_rejected() {
    let mut model = test_model();
    model.feature_names.swap(0, 1);
    assert!(matches!(
        model.validate(),
        Err(ModelError::SchemaMismatch { index: 0, .. })
    ));
}

#[test]
fn renamed_feature_is_rejected_at_its_column() {
    let mut model = test_model();
    model.feature_names[7] = "Contract_Type_18-Month".to_string();
    match model.validate() {
        Err(ModelError::SchemaMismatch { index, expected, .. }) => {
            assert_eq!(index, 7);
            assert_eq!(expected, "Contract_Type_24-Month");
        }
        other => panic!("expected schema mismatch, got {:?}", other),
    }
}

#[test]
fn model_without_declared_names_is_accepted_on_length() {
    let mut model = test_model();
    model.feature_names.clear();
    model.validate().unwrap();
}

#[test]
fn exported_model_maps_named_weights_to_positions() {
    let json = r#"{
        "model_version": "2.3.0",
        "features": ["Tenure_Months", "Network_Outage_Score_0_5", "Legacy_Unused"],
        "weights": {
            "Tenure_Months": -0.07,
            "Network_Outage_Score_0_5": 1.25,
            "Legacy_Unused": 9.9
        },
        "bias": -2.0,
        "training_samples": 4200
    }"#;
    let export = ExportedModel::from_json(json).unwrap();
    let model = export.to_runtime_model();
    assert_eq!(model.weights.len(), FEATURE_COUNT);
    assert_eq!(model.weights[0], -0.07);
    assert_eq!(model.weights[3], 1.25);
    // Unknown exported names are dropped; unnamed columns default to 0.
    assert!(model.weights[1..3].iter().all(|&w| w == 0.0));
    assert_eq!(model.threshold, 0.5);
    model.validate().unwrap();
}

#[test]
fn from_json_auto_detects_export_format() {
    let json = r#"{
        "model_version": "2.3.0",
        "features": ["Tenure_Months"],
        "weights": {"Tenure_Months": -0.07},
        "bias": -2.0
    }"#;
    let model = ChurnModel::from_json_auto(json).unwrap();
    assert_eq!(model.model_id, "export-2.3.0");
    assert_eq!(model.model_version, "2.3.0");
}

#[test]
fn predict_agrees_with_probability_and_threshold() {
    let classifier = ChurnClassifier::with_model(test_model()).unwrap();

    let mut risky = base_profile();
    risky.outage_score = 5;
    risky.support_calls_3m = 9;
    risky.contract = ContractType::MonthToMonth;
    risky.region = Region::RuralArea;
    risky.technology = NetworkTechnology::ThreeG;

    for profile in [base_profile(), risky] {
        let v = FeatureVector::encode(&profile);
        let proba = classifier.predict_proba(&v);
        assert!((0.0..=1.0).contains(&proba));
        assert_eq!(classifier.predict(&v), proba >= classifier.threshold());
    }
}

#[test]
fn high_risk_profile_scores_above_base_profile() {
    let classifier = ChurnClassifier::with_model(test_model()).unwrap();

    let mut risky = base_profile();
    risky.outage_score = 5;
    risky.support_calls_3m = 9;
    risky.contract = ContractType::MonthToMonth;
    risky.region = Region::RuralArea;

    let p_base = classifier.predict_proba(&FeatureVector::encode(&base_profile()));
    let p_risky = classifier.predict_proba(&FeatureVector::encode(&risky));
    assert!(p_risky > p_base);
}

#[test]
fn explain_reports_sorted_nonzero_contributions() {
    let classifier = ChurnClassifier::with_model(test_model()).unwrap();
    let mut profile = base_profile();
    profile.outage_score = 5;
    profile.contract = ContractType::MonthToMonth;

    let contributions = classifier.explain(&FeatureVector::encode(&profile));
    assert!(!contributions.is_empty());
    assert!(contributions.len() <= 5);
    for pair in contributions.windows(2) {
        assert!(pair[0].1 >= pair[1].1);
    }
    for (_, c) in &contributions {
        assert!(*c != 0.0);
    }
}

#[test]
fn sigmoid_properties() {
    assert!((sigmoid(0.0) - 0.5).abs() < 1e-10);
    assert!(sigmoid(10.0) > 0.999);
    assert!(sigmoid(-10.0) < 0.001);
    assert!(sigmoid(1000.0).is_finite());
    assert!(sigmoid(-1000.0).is_finite());
}

#[test]
fn categorical_labels_round_trip_through_serde() {
    let profile = CustomerProfile {
        tenure_months: 5,
        monthly_charges_etb: 300.0,
        support_calls_3m: 2,
        outage_score: 0,
        region: Region::RegionalCity,
        contract: ContractType::SixMonth,
        technology: NetworkTechnology::FourGLte,
        plan: ServicePlan::DataVoice,
    };
    let json = serde_json::to_string(&profile).unwrap();
    assert!(json.contains("Regional City (Mid Density)"));
    assert!(json.contains("6-Month"));
    let back: CustomerProfile = serde_json::from_str(&json).unwrap();
    assert_eq!(back, profile);
}

#[test]
fn unknown_categorical_label_fails_to_parse() {
    assert!(serde_json::from_str::<NetworkTechnology>("\"2G Only\"").is_err());
    assert!(serde_json::from_str::<Region>("\"Addis Ababa\"").is_err());
}
