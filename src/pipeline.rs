//! End-to-end extraction: source XML in, formatted relationship triples out.

use crate::error::{RelgraphError, Result};
use crate::extract::{extract, RelationshipTriple};
use crate::format::format_name;
use crate::normalize::{normalize, Value};
use crate::schema::{entity_type_of, EntityRecord};
use crate::xml::parse_document;

/// Entity classifications that take part in extraction.
const EXTRACTED_ENTITY_TYPES: [&str; 2] = ["Individual", "Entity"];

/// Outcome of one extraction run.
#[derive(Debug, Clone)]
pub struct ExtractionReport {
    /// Formatted triples across all entities, in source order.
    pub triples: Vec<RelationshipTriple>,
    /// Entities present in the document, before the type filter.
    pub entities_total: usize,
    /// Entities that carried relationship data and were processed cleanly.
    pub entities_with_relationships: usize,
    /// Entities skipped because of a schema or resolution failure.
    pub skipped: Vec<SkippedEntity>,
}

/// One entity that could not be processed, with the reason.
#[derive(Debug, Clone)]
pub struct SkippedEntity {
    /// Zero-based position in the document's entity list.
    pub index: usize,
    pub reason: String,
}

/// Run the full pipeline over a source document.
///
/// A malformed document or a missing entity list is fatal. A schema or
/// resolution failure on a single entity is not: that entity is recorded in
/// [`ExtractionReport::skipped`] and the batch continues.
pub fn extract_document(content: &str) -> Result<ExtractionReport> {
    let root = parse_document(content)?;
    if root.name != "sanctionsData" {
        return Err(RelgraphError::Schema(format!(
            "expected sanctionsData document root, found <{}>",
            root.name
        )));
    }

    let tree = normalize(&root);
    let entities = entity_list(&tree)?;

    let mut report = ExtractionReport {
        triples: Vec::new(),
        entities_total: entities.len(),
        entities_with_relationships: 0,
        skipped: Vec::new(),
    };

    for (index, value) in entities.iter().enumerate() {
        match process_entity(value) {
            Ok(Some(mut triples)) => {
                report.entities_with_relationships += 1;
                report.triples.append(&mut triples);
            }
            // Filtered out by entity type, or no relationship data
            Ok(None) => {}
            Err(e) => {
                log::warn!("skipping entity {}: {}", index, e);
                report.skipped.push(SkippedEntity {
                    index,
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}

/// Locate `entities/entity` under the document root.
fn entity_list(tree: &Value) -> Result<&[Value]> {
    tree.as_map()
        .and_then(|root| root.get_one("entities"))
        .and_then(Value::as_map)
        .and_then(|entities| entities.get("entity"))
        .map(|entry| entry.values())
        .ok_or_else(|| {
            RelgraphError::Schema("document has no entities/entity list".to_string())
        })
}

/// Process one entity value: filter, build the typed record, extract, format.
fn process_entity(value: &Value) -> Result<Option<Vec<RelationshipTriple>>> {
    let entity_type = entity_type_of(value)?;
    if !EXTRACTED_ENTITY_TYPES.contains(&entity_type) {
        return Ok(None);
    }

    let record = EntityRecord::from_value(value)?;
    let Some(triples) = extract(&record)? else {
        return Ok(None);
    };

    Ok(Some(
        triples
            .into_iter()
            .map(|triple| RelationshipTriple {
                entity_1: format_name(&triple.entity_1),
                entity_2: format_name(&triple.entity_2),
                ..triple
            })
            .collect(),
    ))
}
