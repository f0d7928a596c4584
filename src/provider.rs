//! Backend provider selection.

use serde::Serialize;

use crate::env::{vars, EnvSnapshot};

/// Backend service that will handle requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// Neopilot API with an API key or OAuth token
    Direct,
    /// AWS Bedrock
    Bedrock,
    /// Google Vertex AI
    Vertex,
    /// Microsoft Foundry
    Foundry,
}

impl Provider {
    /// Human-readable name, as used in violation messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::Direct => "direct Neopilot API",
            Provider::Bedrock => "AWS Bedrock",
            Provider::Vertex => "Google Vertex AI",
            Provider::Foundry => "Microsoft Foundry",
        }
    }

    /// Selector flag for this provider, if it has one
    pub fn flag(&self) -> Option<&'static str> {
        match self {
            Provider::Direct => None,
            Provider::Bedrock => Some(vars::USE_BEDROCK),
            Provider::Vertex => Some(vars::USE_VERTEX),
            Provider::Foundry => Some(vars::USE_FOUNDRY),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The three selector flags as read from a snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProviderFlags {
    pub bedrock: bool,
    pub vertex: bool,
    pub foundry: bool,
}

impl ProviderFlags {
    pub fn from_env(env: &EnvSnapshot) -> Self {
        Self {
            bedrock: env.is_flag_set(vars::USE_BEDROCK),
            vertex: env.is_flag_set(vars::USE_VERTEX),
            foundry: env.is_flag_set(vars::USE_FOUNDRY),
        }
    }

    /// Number of flags set
    pub fn count(&self) -> usize {
        [self.bedrock, self.vertex, self.foundry]
            .iter()
            .filter(|set| **set)
            .count()
    }

    /// More than one provider requested at once
    pub fn is_conflicting(&self) -> bool {
        self.count() > 1
    }

    /// Branch whose requirements are checked.
    ///
    /// Flags are tried in the order Bedrock, Vertex, Foundry and the first set
    /// one wins, even when others are also set.
    pub fn effective(&self) -> Provider {
        if self.bedrock {
            Provider::Bedrock
        } else if self.vertex {
            Provider::Vertex
        } else if self.foundry {
            Provider::Foundry
        } else {
            Provider::Direct
        }
    }

    /// The selected provider, or `None` when flags conflict.
    pub fn selection(&self) -> Option<Provider> {
        if self.is_conflicting() {
            None
        } else {
            Some(self.effective())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(pairs: &[(&str, &str)]) -> ProviderFlags {
        ProviderFlags::from_env(&EnvSnapshot::from_pairs(pairs.iter().copied()))
    }

    #[test]
    fn test_no_flags_selects_direct() {
        let f = flags(&[]);
        assert_eq!(f.count(), 0);
        assert_eq!(f.selection(), Some(Provider::Direct));
    }

    #[test]
    fn test_single_flag_selects_provider() {
        assert_eq!(flags(&[(vars::USE_VERTEX, "1")]).selection(), Some(Provider::Vertex));
        assert_eq!(flags(&[(vars::USE_FOUNDRY, "1")]).selection(), Some(Provider::Foundry));
        assert_eq!(flags(&[(vars::USE_BEDROCK, "0")]).selection(), Some(Provider::Direct));
    }

    #[test]
    fn test_conflicting_flags() {
        let f = flags(&[(vars::USE_VERTEX, "1"), (vars::USE_FOUNDRY, "1")]);
        assert!(f.is_conflicting());
        assert_eq!(f.selection(), None);
        assert_eq!(f.effective(), Provider::Vertex);

        let f = flags(&[
            (vars::USE_BEDROCK, "1"),
            (vars::USE_VERTEX, "1"),
            (vars::USE_FOUNDRY, "1"),
        ]);
        assert_eq!(f.count(), 3);
        assert_eq!(f.effective(), Provider::Bedrock);
    }

    #[test]
    fn test_provider_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Provider::Bedrock).unwrap(), "\"bedrock\"");
        assert_eq!(Provider::Vertex.to_string(), "Google Vertex AI");
        assert_eq!(Provider::Direct.flag(), None);
    }
}
