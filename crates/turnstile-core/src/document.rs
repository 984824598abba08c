//! Gateway-native policy document synthesis.
//!
//! Field names serialize exactly as the gateway expects: PascalCase inside
//! the policy document, camelCase on the response envelope. These types are
//! outbound only, so they implement `Serialize` but not `Deserialize`.

use serde::Serialize;

use crate::arn::ResourceArn;
use crate::verdict::{Effect, Verdict};

/// The only action this engine ever grants or denies.
pub const INVOKE_ACTION: &str = "execute-api:Invoke";

/// Fixed policy language version.
pub const POLICY_VERSION: &str = "2012-10-17";

/// Principal recorded on a Deny response.
pub const UNAUTHORISED_PRINCIPAL: &str = "Unauthorised";

/// One policy statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Statement {
    #[serde(rename = "Action")]
    pub action: &'static str,
    #[serde(rename = "Effect")]
    pub effect: Effect,
    #[serde(rename = "Resource")]
    pub resource: Vec<String>,
}

/// The policy document inside an authorizer response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyDocument {
    #[serde(rename = "Version")]
    pub version: &'static str,
    #[serde(rename = "Statement")]
    pub statement: Vec<Statement>,
}

/// The full response handed to the enforcement layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizerResponse {
    pub principal_id: String,
    pub policy_document: PolicyDocument,
}

impl AuthorizerResponse {
    /// Build the response for a verdict.
    ///
    /// Allow carries the caller's principal and the verdict's scoped
    /// resources. Deny carries the `Unauthorised` principal and a Deny
    /// statement naming the requested identifier, since the gateway needs
    /// an explicit resource to attach the denial to.
    pub fn from_verdict(principal_id: &str, verdict: &Verdict, requested: &ResourceArn) -> Self {
        let (principal, statement) = if verdict.is_allow() {
            (
                principal_id.to_string(),
                Statement {
                    action: INVOKE_ACTION,
                    effect: Effect::Allow,
                    resource: verdict.scoped_resources.clone(),
                },
            )
        } else {
            (
                UNAUTHORISED_PRINCIPAL.to_string(),
                Statement {
                    action: INVOKE_ACTION,
                    effect: Effect::Deny,
                    resource: vec![requested.to_string()],
                },
            )
        };

        Self {
            principal_id: principal,
            policy_document: PolicyDocument {
                version: POLICY_VERSION,
                statement: vec![statement],
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn requested() -> ResourceArn {
        ResourceArn::parse("arn:aws:execute-api:eu-west-2:1234:cafe-babe/develop/GET/clinics/42")
            .unwrap()
    }

    #[test]
    fn test_allow_response_shape() {
        let requested = requested();
        let verdict = Verdict::allow(vec![requested.to_string()]);
        let response = AuthorizerResponse::from_verdict("user-7", &verdict, &requested);

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "principalId": "user-7",
                "policyDocument": {
                    "Version": "2012-10-17",
                    "Statement": [{
                        "Action": "execute-api:Invoke",
                        "Effect": "Allow",
                        "Resource": [
                            "arn:aws:execute-api:eu-west-2:1234:cafe-babe/develop/GET/clinics/42"
                        ],
                    }],
                },
            })
        );
    }

    #[test]
    fn test_deny_response_names_requested_arn() {
        let requested = requested();
        let response = AuthorizerResponse::from_verdict("user-7", &Verdict::deny(), &requested);

        assert_eq!(response.principal_id, "Unauthorised");
        let statement = &response.policy_document.statement[0];
        assert_eq!(statement.effect, Effect::Deny);
        assert_eq!(statement.resource, vec![requested.to_string()]);
    }
}
