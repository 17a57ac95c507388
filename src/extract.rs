//! Relationship extraction: one entity record in, relationship triples out.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::resolve::resolve_name;
use crate::schema::EntityRecord;

/// One extracted relationship edge (entity_1 --relationship--> entity_2).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipTriple {
    /// Resolved canonical name of the source entity.
    pub entity_1: String,
    /// Relationship type label, e.g. `Associate Of`.
    pub relationship: String,
    /// Identifier of the related party as given in the source.
    pub entity_2: String,
}

/// Extract all relationship triples for one entity.
///
/// `Ok(None)` means the entity carries no relationship data at all, which is
/// the common case. `Ok(Some(vec![]))` means relationship records existed but
/// every one lacked a related party; the distinction matters to callers that
/// count entities with relationship data.
pub fn extract(entity: &EntityRecord) -> Result<Option<Vec<RelationshipTriple>>> {
    let Some(records) = entity.relationships.as_deref() else {
        return Ok(None);
    };

    let entity_name = resolve_name(&entity.names)?;

    let mut triples = Vec::new();
    for record in records {
        // A relationship without a related party points outside the data
        // set; dropped silently, in keeping with the feed's conventions.
        let Some(related) = record.related_entity.as_deref() else {
            continue;
        };
        triples.push(RelationshipTriple {
            entity_1: entity_name.to_string(),
            relationship: record.kind.clone(),
            entity_2: related.to_string(),
        });
    }

    Ok(Some(triples))
}
