//! Policy resolver: capability set + requested identifier → verdict.

use std::collections::BTreeSet;

use tracing::{debug, trace};

use crate::arn::ResourceArn;
use crate::table::CapabilityTable;
use crate::verdict::Verdict;

/// Resolves a caller's capability set against a capability table.
///
/// The table is injected at construction and never mutated, so a resolver
/// is `Send + Sync` and one instance serves concurrent evaluations without
/// locking. Evaluation is a pure function of its inputs and never returns
/// an error: unrecognized capability names, unknown resources, and methods
/// outside the verb set all degrade to Deny.
#[derive(Debug, Clone)]
pub struct PolicyResolver {
    table: CapabilityTable,
}

impl PolicyResolver {
    pub fn new(table: CapabilityTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &CapabilityTable {
        &self.table
    }

    /// Decide Allow/Deny for one (capabilities, requested) pair.
    ///
    /// Allow when at least one rule of at least one held capability admits
    /// the requested method and path; the verdict's scope is the requested
    /// identifier re-encoded to wire form, deduplicated across matching
    /// rules in deterministic (sorted) order.
    pub fn evaluate(&self, capabilities: &BTreeSet<String>, requested: &ResourceArn) -> Verdict {
        if capabilities.is_empty() {
            debug!(arn = %requested, "deny: caller holds no capabilities");
            return Verdict::deny();
        }

        let path = requested.full_path();
        let mut scopes = BTreeSet::new();

        for capability in capabilities {
            let Some(rules) = self.table.rules(capability) else {
                trace!(capability, "capability not in table");
                continue;
            };
            for rule in rules {
                if rule.allows(&requested.http_method, &path) {
                    trace!(capability, pattern = %rule.path, "rule matched");
                    scopes.insert(requested.to_string());
                }
            }
        }

        if scopes.is_empty() {
            debug!(arn = %requested, "deny: no rule matched");
            Verdict::deny()
        } else {
            debug!(arn = %requested, "allow");
            Verdict::allow(scopes.into_iter().collect())
        }
    }
}
