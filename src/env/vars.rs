//! Names of every environment variable the validator reads.

// Provider selector flags
pub const USE_BEDROCK: &str = "NEOPILOT_USE_BEDROCK";
pub const USE_VERTEX: &str = "NEOPILOT_USE_VERTEX";
pub const USE_FOUNDRY: &str = "NEOPILOT_USE_FOUNDRY";

// Direct API
pub const API_KEY: &str = "NEOPILOT_API_KEY";
pub const OAUTH_TOKEN: &str = "NEOPILOT_OAUTH_TOKEN";

// AWS Bedrock
pub const AWS_REGION: &str = "AWS_REGION";
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const AWS_BEARER_TOKEN_BEDROCK: &str = "AWS_BEARER_TOKEN_BEDROCK";

// Google Vertex AI
pub const VERTEX_PROJECT_ID: &str = "NEOPILOT_VERTEX_PROJECT_ID";
pub const ML_REGION: &str = "NEOPILOT_ML_REGION";

// Microsoft Foundry
pub const FOUNDRY_RESOURCE: &str = "NEOPILOT_FOUNDRY_RESOURCE";
pub const FOUNDRY_BASE_URL: &str = "NEOPILOT_FOUNDRY_BASE_URL";

/// Flag value that selects a provider. Anything else (including "true") does not.
pub const FLAG_ON: &str = "1";

/// Vertex variables, each independently required, in reporting order.
pub const VERTEX_REQUIRED: &[&str] = &[VERTEX_PROJECT_ID, ML_REGION];

/// Every variable captured from the process environment.
pub const ALL: &[&str] = &[
    USE_BEDROCK,
    USE_VERTEX,
    USE_FOUNDRY,
    API_KEY,
    OAUTH_TOKEN,
    AWS_REGION,
    AWS_ACCESS_KEY_ID,
    AWS_SECRET_ACCESS_KEY,
    AWS_BEARER_TOKEN_BEDROCK,
    VERTEX_PROJECT_ID,
    ML_REGION,
    FOUNDRY_RESOURCE,
    FOUNDRY_BASE_URL,
];
