//! Typed views over the normalized value tree.
//!
//! The sanctions feed encodes booleans as the string literals "true"/"false",
//! leaves optional elements either absent or present-but-empty, and repeats
//! elements without any list marker. All of that is resolved here, once, so
//! the resolver and extractor only ever see plain Rust types.

use crate::error::{RelgraphError, Result};
use crate::normalize::{Value, ValueMap};

/// One sanctioned party with its names and outgoing relationships.
#[derive(Debug, Clone)]
pub struct EntityRecord {
    /// Classification from `generalInfo/entityType`, e.g. "Individual".
    pub entity_type: String,
    /// Name records; aliases included, at most one flagged primary.
    pub names: Vec<NameRecord>,
    /// `None` when the `relationships` element is absent or empty.
    pub relationships: Option<Vec<RelationshipRecord>>,
}

/// A name record with its script translations.
#[derive(Debug, Clone)]
pub struct NameRecord {
    pub is_primary: bool,
    pub translations: Vec<Translation>,
}

/// One script rendering of a name.
#[derive(Debug, Clone)]
pub struct Translation {
    pub script: Option<String>,
    pub formatted_full_name: String,
}

/// One outgoing relationship edge.
#[derive(Debug, Clone)]
pub struct RelationshipRecord {
    /// Relationship type label, e.g. "Associate Of".
    pub kind: String,
    /// Related party identifier; `None` when the element is absent or empty.
    pub related_entity: Option<String>,
}

/// Read `generalInfo/entityType` without building the full record, so the
/// entity-type filter can run before any deeper validation.
pub fn entity_type_of(value: &Value) -> Result<&str> {
    let map = as_record(value, "entity")?;
    map.get_one("generalInfo")
        .and_then(Value::as_map)
        .and_then(|info| info.get_one("entityType"))
        .and_then(Value::as_text)
        .ok_or_else(|| missing("generalInfo/entityType"))
}

impl EntityRecord {
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = as_record(value, "entity")?;

        let entity_type = entity_type_of(value)?.to_string();

        let names = map
            .get_one("names")
            .and_then(Value::as_map)
            .and_then(|names| names.get("name"))
            .ok_or_else(|| missing("names/name"))?
            .values()
            .iter()
            .map(NameRecord::from_value)
            .collect::<Result<Vec<_>>>()?;

        let relationships = match map.get_one("relationships") {
            None => None,
            // <relationships/> or text-only content: explicitly empty
            Some(Value::Text(_)) => None,
            Some(Value::Map(group)) => match group.get("relationship") {
                None => None,
                Some(entry) => Some(
                    entry
                        .values()
                        .iter()
                        .map(RelationshipRecord::from_value)
                        .collect::<Result<Vec<_>>>()?,
                ),
            },
        };

        Ok(Self {
            entity_type,
            names,
            relationships,
        })
    }
}

impl NameRecord {
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = as_record(value, "name")?;

        // String-typed boolean: only the literal "true" counts. An absent
        // flag reads as non-primary, which keeps single-name records valid.
        let is_primary = map
            .get_one("isPrimary")
            .and_then(Value::as_text)
            .map(|raw| raw == "true")
            .unwrap_or(false);

        let translations = map
            .get_one("translations")
            .and_then(Value::as_map)
            .and_then(|translations| translations.get("translation"))
            .ok_or_else(|| missing("name/translations/translation"))?
            .values()
            .iter()
            .map(Translation::from_value)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            is_primary,
            translations,
        })
    }
}

impl Translation {
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = as_record(value, "translation")?;

        let script = map
            .get_one("script")
            .and_then(Value::as_text)
            .map(str::to_string);

        let formatted_full_name = map
            .get_one("formattedFullName")
            .and_then(Value::as_text)
            .ok_or_else(|| missing("translation/formattedFullName"))?
            .to_string();

        Ok(Self {
            script,
            formatted_full_name,
        })
    }
}

impl RelationshipRecord {
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = as_record(value, "relationship")?;

        let kind = map
            .get_one("type")
            .and_then(Value::as_text)
            .ok_or_else(|| missing("relationship/type"))?
            .to_string();

        // An empty <relatedEntity/> normalizes to empty text; treat it the
        // same as an absent element.
        let related_entity = map
            .get_one("relatedEntity")
            .and_then(Value::as_text)
            .filter(|text| !text.is_empty())
            .map(str::to_string);

        Ok(Self {
            kind,
            related_entity,
        })
    }
}

fn as_record<'a>(value: &'a Value, what: &str) -> Result<&'a ValueMap> {
    value
        .as_map()
        .ok_or_else(|| RelgraphError::Schema(format!("{} record is not a structure", what)))
}

fn missing(path: &str) -> RelgraphError {
    RelgraphError::Schema(format!("required field {} is missing", path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use crate::xml::parse_document;

    fn entity(doc: &str) -> Value {
        normalize(&parse_document(doc).unwrap())
    }

    const FULL_ENTITY: &str = r#"
        <entity>
            <generalInfo><entityType>Individual</entityType></generalInfo>
            <names>
                <name>
                    <isPrimary>true</isPrimary>
                    <translations>
                        <translation>
                            <script>Latin</script>
                            <formattedFullName>DOE, John</formattedFullName>
                        </translation>
                    </translations>
                </name>
            </names>
            <relationships>
                <relationship>
                    <type>Associate Of</type>
                    <relatedEntity>SMITH, Jane</relatedEntity>
                </relationship>
            </relationships>
        </entity>"#;

    #[test]
    fn test_full_entity_parses() {
        let record = EntityRecord::from_value(&entity(FULL_ENTITY)).unwrap();
        assert_eq!(record.entity_type, "Individual");
        assert_eq!(record.names.len(), 1);
        assert!(record.names[0].is_primary);
        assert_eq!(
            record.names[0].translations[0].formatted_full_name,
            "DOE, John"
        );
        let rels = record.relationships.unwrap();
        assert_eq!(rels.len(), 1);
        assert_eq!(rels[0].kind, "Associate Of");
        assert_eq!(rels[0].related_entity.as_deref(), Some("SMITH, Jane"));
    }

    #[test]
    fn test_entity_type_of_shortcut() {
        let value = entity(FULL_ENTITY);
        assert_eq!(entity_type_of(&value).unwrap(), "Individual");
    }

    #[test]
    fn test_missing_entity_type_is_schema_error() {
        let value = entity("<entity><names><name/></names></entity>");
        assert!(matches!(
            entity_type_of(&value),
            Err(RelgraphError::Schema(_))
        ));
    }

    #[test]
    fn test_missing_names_is_schema_error() {
        let value = entity(
            "<entity><generalInfo><entityType>Entity</entityType></generalInfo></entity>",
        );
        let err = EntityRecord::from_value(&value).unwrap_err();
        assert!(err.to_string().contains("names/name"));
    }

    #[test]
    fn test_absent_relationships_is_none() {
        let doc = r#"
            <entity>
                <generalInfo><entityType>Entity</entityType></generalInfo>
                <names><name>
                    <translations><translation>
                        <formattedFullName>ACME</formattedFullName>
                    </translation></translations>
                </name></names>
            </entity>"#;
        let record = EntityRecord::from_value(&entity(doc)).unwrap();
        assert!(record.relationships.is_none());
    }

    #[test]
    fn test_empty_relationships_element_is_none() {
        let doc = r#"
            <entity>
                <generalInfo><entityType>Entity</entityType></generalInfo>
                <names><name>
                    <translations><translation>
                        <formattedFullName>ACME</formattedFullName>
                    </translation></translations>
                </name></names>
                <relationships/>
            </entity>"#;
        let record = EntityRecord::from_value(&entity(doc)).unwrap();
        assert!(record.relationships.is_none());
    }

    #[test]
    fn test_is_primary_only_literal_true() {
        for (raw, expected) in [("true", true), ("false", false), ("TRUE", false)] {
            let doc = format!(
                r#"
                <entity>
                    <generalInfo><entityType>Individual</entityType></generalInfo>
                    <names><name>
                        <isPrimary>{raw}</isPrimary>
                        <translations><translation>
                            <formattedFullName>X</formattedFullName>
                        </translation></translations>
                    </name></names>
                </entity>"#
            );
            let record = EntityRecord::from_value(&entity(&doc)).unwrap();
            assert_eq!(record.names[0].is_primary, expected, "raw = {raw}");
        }
    }

    #[test]
    fn test_empty_related_entity_is_none() {
        let doc = r#"
            <entity>
                <generalInfo><entityType>Individual</entityType></generalInfo>
                <names><name>
                    <translations><translation>
                        <formattedFullName>X</formattedFullName>
                    </translation></translations>
                </name></names>
                <relationships>
                    <relationship>
                        <type>Owned By</type>
                        <relatedEntity/>
                    </relationship>
                </relationships>
            </entity>"#;
        let record = EntityRecord::from_value(&entity(doc)).unwrap();
        let rels = record.relationships.unwrap();
        assert_eq!(rels.len(), 1);
        assert!(rels[0].related_entity.is_none());
    }

    #[test]
    fn test_repeated_names_become_list() {
        let doc = r#"
            <entity>
                <generalInfo><entityType>Individual</entityType></generalInfo>
                <names>
                    <name>
                        <isPrimary>false</isPrimary>
                        <translations><translation>
                            <formattedFullName>Alias</formattedFullName>
                        </translation></translations>
                    </name>
                    <name>
                        <isPrimary>true</isPrimary>
                        <translations><translation>
                            <formattedFullName>Real</formattedFullName>
                        </translation></translations>
                    </name>
                </names>
            </entity>"#;
        let record = EntityRecord::from_value(&entity(doc)).unwrap();
        assert_eq!(record.names.len(), 2);
        assert!(!record.names[0].is_primary);
        assert!(record.names[1].is_primary);
    }
}
