//! Authorization verdicts.

use serde::{Deserialize, Serialize};

/// Effect of an authorization decision. Serializes as `"Allow"`/`"Deny"`,
/// the gateway's spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    Allow,
    Deny,
}

/// The outcome of one evaluation: an effect plus the wire-format resource
/// strings it applies to. Deny verdicts carry an empty scope list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub effect: Effect,
    pub scoped_resources: Vec<String>,
}

impl Verdict {
    pub fn allow(scoped_resources: Vec<String>) -> Self {
        Self {
            effect: Effect::Allow,
            scoped_resources,
        }
    }

    pub fn deny() -> Self {
        Self {
            effect: Effect::Deny,
            scoped_resources: Vec::new(),
        }
    }

    pub fn is_allow(&self) -> bool {
        self.effect == Effect::Allow
    }
}
