use mindcheck_core::error::CoreError;
use mindcheck_core::models::region::Region;
use mindcheck_core::models::risk::{RiskRequest, RiskScores};
use pretty_assertions::assert_eq;

#[test]
fn region_list_is_complete_and_ordered() {
    assert_eq!(Region::ALL.len(), 17);
    assert_eq!(Region::ALL[0], Region::Seoul);
    assert_eq!(Region::ALL[16], Region::Jeju);
}

#[test]
fn region_parses_from_id_and_display_name() {
    assert_eq!("busan".parse::<Region>().unwrap(), Region::Busan);
    assert_eq!("Busan".parse::<Region>().unwrap(), Region::Busan);
    assert_eq!("제주특별자치도".parse::<Region>().unwrap(), Region::Jeju);
}

#[test]
fn unknown_region_is_rejected() {
    let err = "atlantis".parse::<Region>().unwrap_err();
    assert!(matches!(err, CoreError::UnknownRegion(ref s) if s == "atlantis"));
}

#[test]
fn region_serializes_as_snake_case_id() {
    for region in Region::ALL {
        let json = serde_json::to_string(&region).unwrap();
        assert_eq!(json, format!("\"{}\"", region.id()));
    }
}

#[test]
fn risk_request_uses_wire_field_names() {
    let request = RiskRequest {
        phq_total: 12,
        gad_total: 8,
        k10_total: 24,
        phq_item9: 1,
        asq_any_yes: false,
    };

    let value = serde_json::to_value(request).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "phq_total": 12,
            "gad_total": 8,
            "k10_total": 24,
            "phq_item9": 1,
            "asq_any_yes": false,
        })
    );
}

#[test]
fn risk_scores_deserialize_from_backend_body() {
    let scores: RiskScores = serde_json::from_str(
        r#"{"suicidal_signal_pct": 3.5, "depression_risk_pct": 41.0, "stress_risk_pct": 77.25}"#,
    )
    .unwrap();

    assert_eq!(scores.depression_risk_pct, 41.0);
    assert_eq!(scores.stress_risk_pct, 77.25);
}
