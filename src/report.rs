//! Machine-readable report of a validation run.

use serde::Serialize;

use crate::env::EnvSnapshot;
use crate::provider::{Provider, ProviderFlags};
use crate::validate::{validate, Violation};

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    /// `None` when more than one provider flag is set
    pub provider: Option<Provider>,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn from_env(env: &EnvSnapshot) -> Self {
        let result = validate(env);
        Self {
            valid: result.is_valid(),
            provider: ProviderFlags::from_env(env).selection(),
            violations: result.violations().to_vec(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::vars;
    use serde_json::json;

    #[test]
    fn test_valid_report() {
        let env = EnvSnapshot::from_pairs([(vars::OAUTH_TOKEN, "tok")]);
        let value = serde_json::to_value(ValidationReport::from_env(&env)).unwrap();
        assert_eq!(
            value,
            json!({ "valid": true, "provider": "direct", "violations": [] })
        );
    }

    #[test]
    fn test_conflicting_report() {
        let env = EnvSnapshot::from_pairs([(vars::USE_BEDROCK, "1"), (vars::USE_VERTEX, "1")]);
        let report = ValidationReport::from_env(&env);
        assert!(!report.valid);
        assert_eq!(report.provider, None);

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["provider"], json!(null));
        assert_eq!(value["violations"][0]["rule"], json!("multiple_providers"));
        assert_eq!(value["violations"][1]["rule"], json!("bedrock_region"));
    }
}
