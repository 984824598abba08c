//! Capability table: the declarative access-control configuration.
//!
//! The table maps a capability name (a grant a caller may hold) to one or
//! more access rules. It is built once at process start — either the
//! compiled-in [`CapabilityTable::builtin`] grants or a YAML file — and is
//! read-only for the process lifetime.
//!
//! YAML form:
//!
//! ```yaml
//! Clinics.ReadAll:
//!   - methods: [GET, OPTIONS]
//!     path: clinics
//! Clinics.ReadOwn:
//!   - methods: [GET]
//!     path: clinics/?*
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{TableError, TableResult};
use crate::pattern::PathPattern;
use crate::verb::HttpVerb;

/// One grant line: the methods allowed against a path pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRule {
    pub methods: Vec<HttpVerb>,
    pub path: PathPattern,
}

impl AccessRule {
    /// Whether this rule admits the requested method and path.
    pub fn allows(&self, method: &str, path: &str) -> bool {
        self.methods.iter().any(|verb| verb.grants(method)) && self.path.matches(path)
    }
}

/// Mapping from capability name to its access rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityTable(BTreeMap<String, Vec<AccessRule>>);

impl CapabilityTable {
    /// The compiled-in default grants of the service.
    ///
    /// Rules carry only method + path; region/account/api/stage scoping
    /// happens at encode time from the requested identifier.
    pub fn builtin() -> Self {
        use HttpVerb::*;

        let mut table = BTreeMap::new();
        table.insert(
            "Clinics.ReadAll".to_string(),
            vec![rule(&[Get, Options], "clinics"), rule(&[Get], "clinics/?*")],
        );
        table.insert(
            "Clinics.ReadOwn".to_string(),
            vec![rule(&[Get], "clinics/?*")],
        );
        table.insert(
            "Clinics.WriteAll".to_string(),
            vec![rule(&[Post], "clinics"), rule(&[Put, Delete], "clinics/?*")],
        );
        table.insert(
            "Applicants.Read".to_string(),
            vec![rule(&[Get], "applicant"), rule(&[Get], "applicant/?*")],
        );
        table.insert(
            "Applicants.Write".to_string(),
            vec![
                rule(&[Post, Put], "applicant"),
                rule(&[Post, Put], "applicant/?*"),
            ],
        );
        table.insert(
            "Application.Read".to_string(),
            vec![rule(&[Get], "application"), rule(&[Get], "application/?*")],
        );
        table.insert(
            "Application.Write".to_string(),
            vec![
                rule(&[Post, Put], "application"),
                rule(&[Post, Put], "application/?*"),
            ],
        );
        table.insert("SystemAdmin.read".to_string(), vec![rule(&[Get], "?*")]);
        table.insert("SystemAdmin.write".to_string(), vec![rule(&[Any], "?*")]);
        Self(table)
    }

    /// Parse a table from a YAML string and validate it.
    pub fn from_yaml(yaml: &str) -> TableResult<Self> {
        let table: Self = serde_yaml::from_str(yaml)?;
        table.validate()?;
        Ok(table)
    }

    /// Load a table from a YAML file and validate it.
    pub fn from_file(path: &Path) -> TableResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_yaml(&content)?;
        info!(path = %path.display(), capabilities = table.len(), "loaded capability table");
        Ok(table)
    }

    /// Check internal consistency: every capability has at least one rule
    /// and every rule's method set is non-empty.
    pub fn validate(&self) -> TableResult<()> {
        for (capability, rules) in &self.0 {
            if rules.is_empty() {
                return Err(TableError::NoRules {
                    capability: capability.clone(),
                });
            }
            if rules.iter().any(|rule| rule.methods.is_empty()) {
                return Err(TableError::NoMethods {
                    capability: capability.clone(),
                });
            }
        }
        Ok(())
    }

    /// Render the table as YAML (the `table show` surface).
    pub fn to_yaml(&self) -> TableResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Rules for a capability, if the table knows it.
    pub fn rules(&self, capability: &str) -> Option<&[AccessRule]> {
        self.0.get(capability).map(Vec::as_slice)
    }

    /// Capability names in the table, in sorted order.
    pub fn capabilities(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn rule(methods: &[HttpVerb], path: &str) -> AccessRule {
    AccessRule {
        methods: methods.to_vec(),
        path: PathPattern::new(path),
    }
}
