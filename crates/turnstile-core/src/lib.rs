//! Gateway authorization decision engine.
//!
//! This crate decides *what* an already-identified caller, presented as a
//! set of capability names, may do against an API Gateway:
//!
//! - Method-ARN codec: exact, bidirectional mapping between the wire
//!   string and [`ResourceArn`] (round-trip invariant)
//! - Policy resolver: capability set + requested identifier against a
//!   declarative [`CapabilityTable`] with wildcard path matching
//! - Policy document builder: the gateway-native allow/deny JSON document
//!
//! Authentication is out of scope; this engine computes decisions and
//! never enforces them.
//!
//! # Quick Start
//!
//! ```
//! use std::collections::BTreeSet;
//! use turnstile_core::{CapabilityTable, PolicyResolver, ResourceArn};
//!
//! let requested = ResourceArn::parse(
//!     "arn:aws:execute-api:eu-west-2:1234:cafe-babe/develop/GET/clinics",
//! )?;
//!
//! let resolver = PolicyResolver::new(CapabilityTable::builtin());
//! let held: BTreeSet<String> = ["Clinics.ReadAll".to_string()].into();
//!
//! let verdict = resolver.evaluate(&held, &requested);
//! assert!(verdict.is_allow());
//! # Ok::<(), turnstile_core::ArnError>(())
//! ```

pub mod arn;
pub mod document;
pub mod error;
pub mod pattern;
pub mod resolver;
pub mod table;
pub mod verb;
pub mod verdict;

// Re-export main types
pub use arn::ResourceArn;
pub use document::{
    AuthorizerResponse, PolicyDocument, Statement, INVOKE_ACTION, POLICY_VERSION,
    UNAUTHORISED_PRINCIPAL,
};
pub use error::{reasons, ArnError, ArnResult, TableError, TableResult};
pub use pattern::{PathPattern, WILDCARD_SEGMENT};
pub use resolver::PolicyResolver;
pub use table::{AccessRule, CapabilityTable};
pub use verb::{HttpVerb, UnknownVerb};
pub use verdict::{Effect, Verdict};
