//! Adversary lookup use case
//!
//! "Adversary" is a caller-facing category, not a single collection:
//! the name may belong to a campaign, an intrusion set, or either
//! threat-actor kind. The lookup compiles the name/alias filter once
//! and fans it out across all four kinds.

use crate::ports::graph_query::{GraphQuery, GraphQueryPort};
use crate::use_cases::{LookupError, fan_out};
use octi_domain::{ADVERSARY_KINDS, AdversaryCriteria, AdversaryRecord, normalize_adversary};
use std::sync::Arc;
use tracing::{debug, info};

/// Use case for looking up adversary-like entities by name or alias.
pub struct LookupAdversaryUseCase {
    port: Arc<dyn GraphQueryPort>,
}

impl LookupAdversaryUseCase {
    pub fn new(port: Arc<dyn GraphQueryPort>) -> Self {
        Self { port }
    }

    /// Execute the lookup. Returns `None` when no kind matched; a
    /// single match still comes back as a one-element sequence.
    pub async fn execute(
        &self,
        criteria: AdversaryCriteria,
    ) -> Result<Option<Vec<AdversaryRecord>>, LookupError> {
        let filter = criteria.compile();
        debug!(filter = %filter.to_value(), "Compiled adversary filter");

        let query = GraphQuery::filtered(filter);
        let hits = fan_out(self.port.as_ref(), &ADVERSARY_KINDS, &query).await?;

        let mut records = Vec::with_capacity(hits.len());
        for (kind, raw) in &hits {
            debug!(kind = %kind, "Normalizing adversary hit");
            records.push(normalize_adversary(raw)?);
        }

        if records.is_empty() {
            info!(name = %criteria.name_or_alias, "No adversary matched any kind");
            return Ok(None);
        }

        Ok(Some(records))
    }
}
