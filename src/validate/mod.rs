//! Environment validation for provider selection.
//!
//! [`validate`] is a pure function over an [`EnvSnapshot`]. It collects every
//! violated rule before returning, so a user sees all problems at once.
//!
//! ## Rule order
//!
//! 1. Provider exclusivity (more than one `NEOPILOT_USE_*` flag set)
//! 2. Requirements of the effective provider only. When several flags are
//!    set, Bedrock is checked before Vertex before Foundry and only the first
//!    set one is evaluated.


use serde::Serialize;

use crate::env::{vars, EnvSnapshot};
use crate::provider::{Provider, ProviderFlags};

/// Header line of the aggregated failure message
pub const FAILURE_HEADER: &str = "Environment variable validation failed:";

/// Which rule a violation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    MultipleProviders,
    DirectCredentials,
    BedrockRegion,
    BedrockCredentials,
    VertexVariable,
    FoundryEndpoint,
}

/// A single unmet configuration requirement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub rule: Rule,
    pub message: String,
}

impl Violation {
    fn new(rule: Rule, message: impl Into<String>) -> Self {
        Self {
            rule,
            message: message.into(),
        }
    }

    fn multiple_providers() -> Self {
        Self::new(
            Rule::MultipleProviders,
            format!(
                "Cannot use multiple providers simultaneously. Please set only one of: {}, {}, or {}.",
                vars::USE_BEDROCK,
                vars::USE_VERTEX,
                vars::USE_FOUNDRY
            ),
        )
    }

    fn vertex_variable(name: &str) -> Self {
        Self::new(
            Rule::VertexVariable,
            format!("{} is required when using {}.", name, Provider::Vertex),
        )
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Outcome of a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    /// Always non-empty, in rule evaluation order
    Invalid(Vec<Violation>),
}

impl ValidationResult {
    fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(violations)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            ValidationResult::Valid => &[],
            ValidationResult::Invalid(violations) => violations,
        }
    }

    /// Violation messages, in order
    pub fn messages(&self) -> Vec<&str> {
        self.violations().iter().map(|v| v.message.as_str()).collect()
    }

    pub fn into_result(self) -> Result<(), EnvironmentValidationError> {
        match self {
            ValidationResult::Valid => Ok(()),
            ValidationResult::Invalid(violations) => {
                Err(EnvironmentValidationError { violations })
            }
        }
    }
}

/// One or more configuration rules were violated.
///
/// `Display` renders the aggregated report: a header line followed by one
/// indented bullet per violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", format_report(.violations))]
pub struct EnvironmentValidationError {
    violations: Vec<Violation>,
}

impl EnvironmentValidationError {
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }
}

fn format_report(violations: &[Violation]) -> String {
    let bullets: Vec<String> = violations.iter().map(|v| format!("  - {}", v)).collect();
    format!("{}\n{}", FAILURE_HEADER, bullets.join("\n"))
}

/// Validate a snapshot against the provider rules.
pub fn validate(env: &EnvSnapshot) -> ValidationResult {
    let flags = ProviderFlags::from_env(env);
    let mut violations = Vec::new();

    if flags.is_conflicting() {
        violations.push(Violation::multiple_providers());
    }

    match flags.effective() {
        Provider::Direct => check_direct(env, &mut violations),
        Provider::Bedrock => check_bedrock(env, &mut violations),
        Provider::Vertex => check_vertex(env, &mut violations),
        Provider::Foundry => check_foundry(env, &mut violations),
    }

    ValidationResult::from_violations(violations)
}

/// Validate and convert to a `Result`, returning the selected provider.
pub fn ensure_valid(env: &EnvSnapshot) -> Result<Provider, EnvironmentValidationError> {
    validate(env).into_result()?;
    // A valid snapshot never has conflicting flags
    Ok(ProviderFlags::from_env(env).effective())
}

/// Snapshot the process environment and validate it.
///
/// Thin wrapper over [`ensure_valid`] with [`EnvSnapshot::from_process`];
/// only recognised variables are read, once.
pub fn validate_environment_variables() -> Result<Provider, EnvironmentValidationError> {
    ensure_valid(&EnvSnapshot::from_process())
}

fn check_direct(env: &EnvSnapshot, violations: &mut Vec<Violation>) {
    if !env.is_present(vars::API_KEY) && !env.is_present(vars::OAUTH_TOKEN) {
        violations.push(Violation::new(
            Rule::DirectCredentials,
            format!(
                "Either {} or {} is required when using {}.",
                vars::API_KEY,
                vars::OAUTH_TOKEN,
                Provider::Direct
            ),
        ));
    }
}

fn check_bedrock(env: &EnvSnapshot, violations: &mut Vec<Violation>) {
    if !env.is_present(vars::AWS_REGION) {
        violations.push(Violation::new(
            Rule::BedrockRegion,
            format!("{} is required when using {}.", vars::AWS_REGION, Provider::Bedrock),
        ));
    }

    let has_access_keys =
        env.is_present(vars::AWS_ACCESS_KEY_ID) && env.is_present(vars::AWS_SECRET_ACCESS_KEY);
    let has_bearer_token = env.is_present(vars::AWS_BEARER_TOKEN_BEDROCK);

    if !has_access_keys && !has_bearer_token {
        violations.push(Violation::new(
            Rule::BedrockCredentials,
            format!(
                "Either {} or both {} and {} are required when using {}.",
                vars::AWS_BEARER_TOKEN_BEDROCK,
                vars::AWS_ACCESS_KEY_ID,
                vars::AWS_SECRET_ACCESS_KEY,
                Provider::Bedrock
            ),
        ));
    }
}

fn check_vertex(env: &EnvSnapshot, violations: &mut Vec<Violation>) {
    violations.extend(
        vars::VERTEX_REQUIRED
            .iter()
            .filter(|name| !env.is_present(name))
            .map(|name| Violation::vertex_variable(name)),
    );
}

fn check_foundry(env: &EnvSnapshot, violations: &mut Vec<Violation>) {
    if !env.is_present(vars::FOUNDRY_RESOURCE) && !env.is_present(vars::FOUNDRY_BASE_URL) {
        violations.push(Violation::new(
            Rule::FoundryEndpoint,
            format!(
                "Either {} or {} is required when using {}.",
                vars::FOUNDRY_RESOURCE,
                vars::FOUNDRY_BASE_URL,
                Provider::Foundry
            ),
        ));
    }
}
