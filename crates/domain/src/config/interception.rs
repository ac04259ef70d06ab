use serde::{Deserialize, Serialize};

/// What a matching rule does with the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleAction {
    /// Answer with NXDOMAIN.
    Nxdomain,
    /// Answer with REFUSED.
    Refused,
    /// Answer with an explicit SERVFAIL.
    Servfail,
    /// Stop without a specific answer; the proxy falls back to its generic failure.
    Fail,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InterceptionRule {
    pub domain: String,

    pub action: RuleAction,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl InterceptionRule {
    /// Exact or subdomain match, case-insensitive, trailing dots ignored.
    pub fn matches_domain(&self, query_domain: &str) -> bool {
        let query_lower = query_domain.trim_end_matches('.').to_lowercase();
        let rule_lower = self.domain.trim_end_matches('.').to_lowercase();

        if query_lower == rule_lower {
            return true;
        }

        query_lower.ends_with(&format!(".{}", rule_lower))
    }

    pub fn reason(&self) -> String {
        self.reason
            .clone()
            .unwrap_or_else(|| format!("domain {} matched interception rule", self.domain))
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InterceptionConfig {
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub refuse_non_local: bool,

    #[serde(default)]
    pub local_networks: Vec<String>,

    #[serde(default)]
    pub rules: Vec<InterceptionRule>,
}

impl InterceptionConfig {
    /// True when the config would make any decision other than "continue".
    pub fn is_active(&self) -> bool {
        self.enabled && (self.refuse_non_local || !self.rules.is_empty())
    }
}
