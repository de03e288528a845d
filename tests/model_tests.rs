use template_pack_server::pack::models::CompanyProfileRequest;
use template_pack_server::ErrorResponse;

#[test]
fn test_company_profile_request_deserialization() {
    let json = r#"{
        "name": "Borneo Crane Services",
        "phone": "+60 82-555 0199",
        "email": "hello@borneocrane.example",
        "address": "Lot 18, Jalan Pending, 93450 Kuching",
        "tax_id": "SST-9876-5432",
        "reg_no": "201901054321",
        "bank_name": "CIMB Bank",
        "bank_account": "8001 2345 6789",
        "swift_code": "CIBBMYKL"
    }"#;

    let request: CompanyProfileRequest = serde_json::from_str(json).unwrap();
    let profile = request.validate().unwrap();
    assert_eq!(profile.name, "Borneo Crane Services");
    assert_eq!(profile.swift_code, "CIBBMYKL");
}

#[test]
fn test_partial_request_reports_every_missing_field() {
    let json = r#"{
        "name": "Borneo Crane Services",
        "phone": "+60 82-555 0199"
    }"#;

    let request: CompanyProfileRequest = serde_json::from_str(json).unwrap();
    let message = request.validate().unwrap_err();
    for field in [
        "email",
        "address",
        "tax_id",
        "reg_no",
        "bank_name",
        "bank_account",
        "swift_code",
    ] {
        assert!(message.contains(field), "missing {field} in: {message}");
    }
    assert!(!message.contains("phone,"), "present fields must not be listed");
}

#[test]
fn test_values_are_trimmed_during_validation() {
    let json = r#"{
        "name": "  Borneo Crane Services  ",
        "phone": "+60 82-555 0199",
        "email": "hello@borneocrane.example",
        "address": "Lot 18, Jalan Pending, 93450 Kuching",
        "tax_id": "SST-9876-5432",
        "reg_no": "201901054321",
        "bank_name": "CIMB Bank",
        "bank_account": "8001 2345 6789",
        "swift_code": "CIBBMYKL"
    }"#;

    let request: CompanyProfileRequest = serde_json::from_str(json).unwrap();
    let profile = request.validate().unwrap();
    assert_eq!(profile.name, "Borneo Crane Services");
}

#[test]
fn test_error_response_serialization() {
    let response = ErrorResponse::new("missing required company profile fields: name");
    let json = serde_json::to_string(&response).unwrap();
    assert_eq!(
        json,
        r#"{"error":"missing required company profile fields: name"}"#
    );

    let roundtrip: ErrorResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(roundtrip.error, response.error);
}
