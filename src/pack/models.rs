use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::generators::validation::{validate_required, ValidationErrors};

/// Raw request body for pack generation. Every field is optional at the wire
/// level; validation converts this into a fully-populated [`CompanyProfile`]
/// or reports exactly which fields are missing.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CompanyProfileRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub tax_id: Option<String>,
    #[serde(default)]
    pub reg_no: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub bank_account: Option<String>,
    #[serde(default)]
    pub swift_code: Option<String>,
}

/// Validated company identity, contact and banking details substituted into
/// every template. Immutable for the duration of one request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CompanyProfile {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub tax_id: String,
    pub reg_no: String,
    pub bank_name: String,
    pub bank_account: String,
    pub swift_code: String,
}

impl CompanyProfileRequest {
    /// Validate all fields at once and build the profile. The error message
    /// names every missing field.
    pub fn validate(self) -> Result<CompanyProfile, String> {
        let mut errors = ValidationErrors::new();

        let name = validate_required(self.name.as_deref(), "name", "Company Name", &mut errors);
        let phone = validate_required(self.phone.as_deref(), "phone", "Phone", &mut errors);
        let email = validate_required(self.email.as_deref(), "email", "Email", &mut errors);
        let address = validate_required(self.address.as_deref(), "address", "Address", &mut errors);
        let tax_id = validate_required(self.tax_id.as_deref(), "tax_id", "Tax ID", &mut errors);
        let reg_no = validate_required(
            self.reg_no.as_deref(),
            "reg_no",
            "Registration No.",
            &mut errors,
        );
        let bank_name = validate_required(
            self.bank_name.as_deref(),
            "bank_name",
            "Bank Name",
            &mut errors,
        );
        let bank_account = validate_required(
            self.bank_account.as_deref(),
            "bank_account",
            "Bank Account",
            &mut errors,
        );
        let swift_code = validate_required(
            self.swift_code.as_deref(),
            "swift_code",
            "SWIFT Code",
            &mut errors,
        );

        errors.into_result()?;

        Ok(CompanyProfile {
            name,
            phone,
            email,
            address,
            tax_id,
            reg_no,
            bank_name,
            bank_account,
            swift_code,
        })
    }
}

/// Fully populated profile for unit tests across the crate.
#[cfg(test)]
pub(crate) fn sample_profile() -> CompanyProfile {
    CompanyProfile {
        name: "Kuala Machinery Sdn Bhd".to_string(),
        phone: "+60 3-1234 5678".to_string(),
        email: "ops@kualamachinery.example".to_string(),
        address: "12 Jalan Industri, 81200 Johor Bahru".to_string(),
        tax_id: "SST-1234-5678".to_string(),
        reg_no: "202201012345".to_string(),
        bank_name: "Maybank".to_string(),
        bank_account: "5123 4567 8901".to_string(),
        swift_code: "MBBEMYKL".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CompanyProfileRequest {
        CompanyProfileRequest {
            name: Some("Kuala Machinery Sdn Bhd".to_string()),
            phone: Some("+60 3-1234 5678".to_string()),
            email: Some("ops@kualamachinery.example".to_string()),
            address: Some("12 Jalan Industri, 81200 Johor Bahru".to_string()),
            tax_id: Some("SST-1234-5678".to_string()),
            reg_no: Some("202201012345".to_string()),
            bank_name: Some("Maybank".to_string()),
            bank_account: Some("5123 4567 8901".to_string()),
            swift_code: Some("MBBEMYKL".to_string()),
        }
    }

    #[test]
    fn test_validate_full_request() {
        let profile = full_request().validate().unwrap();
        assert_eq!(profile.name, "Kuala Machinery Sdn Bhd");
        assert_eq!(profile.swift_code, "MBBEMYKL");
    }

    #[test]
    fn test_validate_reports_all_missing_fields() {
        let mut request = full_request();
        request.bank_name = None;
        request.swift_code = Some("  ".to_string());

        let err = request.validate().unwrap_err();
        assert!(err.contains("bank_name"));
        assert!(err.contains("swift_code"));
        assert!(!err.contains("email"));
    }

    #[test]
    fn test_request_deserialization_with_missing_keys() {
        let request: CompanyProfileRequest =
            serde_json::from_str(r#"{"name": "ACME"}"#).unwrap();
        assert_eq!(request.name.as_deref(), Some("ACME"));
        assert!(request.bank_account.is_none());
    }
}
