//! Method-ARN parsing.
//!
//! Wire format:
//! `arn:aws:execute-api:{region}:{accountId}:{apiId}/{stage}/{httpMethod}/{resource}[/{childResource}]`
//! — six colon-delimited top-level fields, the sixth further slash-delimited
//! into at least four path segments. Decoding and encoding are exact
//! inverses of each other.

use serde::{Deserialize, Serialize};

use crate::error::{reasons, ArnError, ArnResult};

const ARN_LITERAL: &str = "arn";
const PARTITION_LITERAL: &str = "aws";
const SERVICE_LITERAL: &str = "execute-api";

/// A parsed API Gateway method ARN.
///
/// `http_method` is carried verbatim; the codec never validates it against
/// the verb set. The resolver interprets it, and an unknown method can
/// never match a typed rule, so it degrades to Deny there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceArn {
    pub region: String,
    pub account_id: String,
    pub api_id: String,
    pub stage: String,
    pub http_method: String,
    /// First path segment after the method.
    pub resource: String,
    /// Remaining path segments rejoined with `/`; empty when absent.
    pub child_resource: String,
}

impl ResourceArn {
    /// Parse a wire-format method ARN.
    ///
    /// # Examples
    ///
    /// ```
    /// use turnstile_core::ResourceArn;
    ///
    /// let arn = ResourceArn::parse(
    ///     "arn:aws:execute-api:eu-west-2:1234:cafe-babe/develop/GET/clinics/42",
    /// )?;
    /// assert_eq!(arn.region, "eu-west-2");
    /// assert_eq!(arn.resource, "clinics");
    /// assert_eq!(arn.child_resource, "42");
    /// # Ok::<(), turnstile_core::ArnError>(())
    /// ```
    pub fn parse(wire: &str) -> ArnResult<Self> {
        let wire = wire.trim();

        if wire.is_empty() {
            return Err(ArnError::Empty);
        }

        let parts: Vec<&str> = wire.split(':').collect();
        if parts.len() != 6 {
            return Err(ArnError::Malformed {
                reason: reasons::NOT_SIX_PARTS,
            });
        }
        if parts[0] != ARN_LITERAL {
            return Err(ArnError::Malformed {
                reason: reasons::BAD_ARN_LITERAL,
            });
        }
        if parts[1] != PARTITION_LITERAL {
            return Err(ArnError::Malformed {
                reason: reasons::BAD_PARTITION_LITERAL,
            });
        }
        if parts[2] != SERVICE_LITERAL {
            return Err(ArnError::Malformed {
                reason: reasons::WRONG_SERVICE,
            });
        }

        let segments: Vec<&str> = parts[5].split('/').collect();
        if segments.len() < 4 {
            return Err(ArnError::Malformed {
                reason: reasons::PATH_TOO_SHORT,
            });
        }

        Ok(Self {
            region: parts[3].to_string(),
            account_id: parts[4].to_string(),
            api_id: segments[0].to_string(),
            stage: segments[1].to_string(),
            http_method: segments[2].to_string(),
            resource: segments[3].to_string(),
            child_resource: segments[4..].join("/"),
        })
    }

    /// The requested resource path the matcher sees: `resource`, plus
    /// `/{child_resource}` when a child is present.
    pub fn full_path(&self) -> String {
        if self.child_resource.is_empty() {
            self.resource.clone()
        } else {
            format!("{}/{}", self.resource, self.child_resource)
        }
    }
}

impl std::fmt::Display for ResourceArn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{ARN_LITERAL}:{PARTITION_LITERAL}:{SERVICE_LITERAL}:{}:{}:{}/{}/{}/{}",
            self.region, self.account_id, self.api_id, self.stage, self.http_method, self.resource
        )?;
        if !self.child_resource.is_empty() {
            write!(f, "/{}", self.child_resource)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for ResourceArn {
    type Err = ArnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str =
        "arn:aws:execute-api:eu-west-2:1234:cafe-babe/develop/GET/myResource/my/child/resource";

    fn canonical_arn() -> ResourceArn {
        ResourceArn {
            region: "eu-west-2".to_string(),
            account_id: "1234".to_string(),
            api_id: "cafe-babe".to_string(),
            stage: "develop".to_string(),
            http_method: "GET".to_string(),
            resource: "myResource".to_string(),
            child_resource: "my/child/resource".to_string(),
        }
    }

    #[test]
    fn test_parse_canonical() {
        assert_eq!(ResourceArn::parse(CANONICAL).unwrap(), canonical_arn());
    }

    #[test]
    fn test_display_canonical() {
        assert_eq!(canonical_arn().to_string(), CANONICAL);
    }

    #[test]
    fn test_display_without_child() {
        let arn = ResourceArn {
            resource: "clinics".to_string(),
            child_resource: String::new(),
            ..canonical_arn()
        };
        assert_eq!(
            arn.to_string(),
            "arn:aws:execute-api:eu-west-2:1234:cafe-babe/develop/GET/clinics"
        );
        assert_eq!(ResourceArn::parse(&arn.to_string()).unwrap(), arn);
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(ResourceArn::parse(""), Err(ArnError::Empty));
        assert_eq!(ResourceArn::parse("   "), Err(ArnError::Empty));
    }

    #[test]
    fn test_parse_wrong_part_count() {
        let result =
            ResourceArn::parse("arnaws:execute-api:eu-west-2:1234:cafe-babe/develop/GET/clinics");
        assert_eq!(
            result,
            Err(ArnError::Malformed {
                reason: reasons::NOT_SIX_PARTS
            })
        );
    }

    #[test]
    fn test_parse_bad_arn_literal() {
        let result = ResourceArn::parse(
            "test:aws:execute-api:eu-west-2:1234:cafe-babe/develop/GET/clinics",
        );
        assert_eq!(
            result,
            Err(ArnError::Malformed {
                reason: reasons::BAD_ARN_LITERAL
            })
        );
    }

    #[test]
    fn test_parse_bad_partition_literal() {
        let result = ResourceArn::parse(
            "arn:test:execute-api:eu-west-2:1234:cafe-babe/develop/GET/clinics",
        );
        assert_eq!(
            result,
            Err(ArnError::Malformed {
                reason: reasons::BAD_PARTITION_LITERAL
            })
        );
    }

    #[test]
    fn test_parse_wrong_service() {
        let result =
            ResourceArn::parse("arn:aws:test:eu-west-2:1234:cafe-babe/develop/GET/clinics");
        assert_eq!(
            result,
            Err(ArnError::Malformed {
                reason: reasons::WRONG_SERVICE
            })
        );
    }

    #[test]
    fn test_parse_path_too_short() {
        let result = ResourceArn::parse("arn:aws:execute-api:eu-west-2:1234:cafe-babe/develop");
        assert_eq!(
            result,
            Err(ArnError::Malformed {
                reason: reasons::PATH_TOO_SHORT
            })
        );
    }

    #[test]
    fn test_error_messages_are_stable() {
        assert_eq!(
            ResourceArn::parse("").unwrap_err().to_string(),
            "ARN is null or blank"
        );
        assert_eq!(
            ResourceArn::parse("a:b:c").unwrap_err().to_string(),
            "ARN does not consist of six colon-delimited parts"
        );
    }

    #[test]
    fn test_full_path() {
        assert_eq!(canonical_arn().full_path(), "myResource/my/child/resource");
        let bare = ResourceArn {
            child_resource: String::new(),
            ..canonical_arn()
        };
        assert_eq!(bare.full_path(), "myResource");
    }

    #[test]
    fn test_from_str() {
        let arn: ResourceArn = CANONICAL.parse().unwrap();
        assert_eq!(arn, canonical_arn());
    }
}
