//! Typed HTTP verb set for access rules.

use serde::{Deserialize, Serialize};

/// An HTTP verb a rule may grant, plus the any-method wildcard.
///
/// Wire form is the uppercase method name (`GET`, `POST`, ...) or `*` for
/// [`HttpVerb::Any`]. Parsing any other string is an error, which makes an
/// uninterpretable method in a capability table a load-time failure rather
/// than a silent no-op rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    /// Any method.
    #[serde(rename = "*")]
    Any,
}

impl HttpVerb {
    /// Wire form of the verb.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Options => "OPTIONS",
            Self::Head => "HEAD",
            Self::Any => "*",
        }
    }

    /// Whether a requested method (carried as an opaque string by the
    /// codec) is granted by this verb. `Any` grants everything; the named
    /// verbs compare verbatim.
    pub fn grants(self, method: &str) -> bool {
        matches!(self, Self::Any) || self.as_str() == method
    }
}

impl std::fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a string outside the verb set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown HTTP verb: {0}")]
pub struct UnknownVerb(pub String);

impl std::str::FromStr for HttpVerb {
    type Err = UnknownVerb;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            "PATCH" => Ok(Self::Patch),
            "OPTIONS" => Ok(Self::Options),
            "HEAD" => Ok(Self::Head),
            "*" => Ok(Self::Any),
            other => Err(UnknownVerb(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [HttpVerb; 8] = [
        HttpVerb::Get,
        HttpVerb::Post,
        HttpVerb::Put,
        HttpVerb::Delete,
        HttpVerb::Patch,
        HttpVerb::Options,
        HttpVerb::Head,
        HttpVerb::Any,
    ];

    #[test]
    fn test_wire_form_round_trip() {
        for verb in ALL {
            assert_eq!(verb.to_string().parse::<HttpVerb>().unwrap(), verb);
        }
    }

    #[test]
    fn test_serde_round_trip() {
        for verb in ALL {
            let json = serde_json::to_string(&verb).unwrap();
            assert_eq!(serde_json::from_str::<HttpVerb>(&json).unwrap(), verb);
        }
        assert_eq!(serde_json::to_string(&HttpVerb::Any).unwrap(), "\"*\"");
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "FETCH".parse::<HttpVerb>(),
            Err(UnknownVerb("FETCH".to_string()))
        );
        // Lowercase is not the wire form.
        assert!("get".parse::<HttpVerb>().is_err());
    }

    #[test]
    fn test_grants() {
        assert!(HttpVerb::Get.grants("GET"));
        assert!(!HttpVerb::Get.grants("POST"));
        assert!(!HttpVerb::Get.grants("get"));
        assert!(HttpVerb::Any.grants("GET"));
        assert!(HttpVerb::Any.grants("FETCH"));
    }
}
