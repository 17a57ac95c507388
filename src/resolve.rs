//! Canonical name resolution over an entity's name records.

use crate::error::{RelgraphError, Result};
use crate::schema::NameRecord;

/// Resolve the canonical display name for an entity.
///
/// A lone name record is taken as-is; among several, only the record flagged
/// primary is considered, with no fallback to aliases. The same rule repeats
/// one level down: a lone translation is returned regardless of script, while
/// several translations require the Latin one.
pub fn resolve_name(names: &[NameRecord]) -> Result<&str> {
    let record = match names {
        [only] => only,
        _ => names
            .iter()
            .find(|name| name.is_primary)
            .ok_or_else(|| RelgraphError::Resolution("no primary name".to_string()))?,
    };

    let translation = match record.translations.as_slice() {
        [only] => only,
        translations => translations
            .iter()
            .find(|t| t.script.as_deref() == Some("Latin"))
            .ok_or_else(|| RelgraphError::Resolution("no Latin translation".to_string()))?,
    };

    Ok(&translation.formatted_full_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Translation;

    fn name(is_primary: bool, translations: Vec<Translation>) -> NameRecord {
        NameRecord {
            is_primary,
            translations,
        }
    }

    fn translation(script: Option<&str>, full_name: &str) -> Translation {
        Translation {
            script: script.map(str::to_string),
            formatted_full_name: full_name.to_string(),
        }
    }

    #[test]
    fn test_single_name_single_translation_ignores_script() {
        // Non-Latin script is fine when there is nothing to choose between
        let names = vec![name(false, vec![translation(Some("Cyrillic"), "ИВАНОВ")])];
        assert_eq!(resolve_name(&names).unwrap(), "ИВАНОВ");
    }

    #[test]
    fn test_single_name_many_translations_requires_latin() {
        let names = vec![name(
            true,
            vec![
                translation(Some("Cyrillic"), "ИВАНОВ"),
                translation(Some("Latin"), "IVANOV, Ivan"),
            ],
        )];
        assert_eq!(resolve_name(&names).unwrap(), "IVANOV, Ivan");
    }

    #[test]
    fn test_many_names_selects_only_the_primary() {
        let names = vec![
            name(false, vec![translation(Some("Latin"), "Alias One")]),
            name(
                true,
                vec![
                    translation(Some("Arabic"), "محمد"),
                    translation(Some("Latin"), "MOHAMMED, Ali"),
                ],
            ),
            name(false, vec![translation(Some("Latin"), "Alias Two")]),
        ];
        assert_eq!(resolve_name(&names).unwrap(), "MOHAMMED, Ali");
    }

    #[test]
    fn test_no_primary_among_aliases_fails() {
        // No fallback: perfectly good alias names are still not canonical
        let names = vec![
            name(false, vec![translation(Some("Latin"), "Alias One")]),
            name(false, vec![translation(Some("Latin"), "Alias Two")]),
        ];
        let err = resolve_name(&names).unwrap_err();
        assert!(err.to_string().contains("no primary name"));
    }

    #[test]
    fn test_no_latin_translation_fails() {
        let names = vec![name(
            true,
            vec![
                translation(Some("Cyrillic"), "ИВАНОВ"),
                translation(Some("Arabic"), "محمد"),
            ],
        )];
        let err = resolve_name(&names).unwrap_err();
        assert!(err.to_string().contains("no Latin translation"));
    }

    #[test]
    fn test_missing_script_never_matches_latin() {
        let names = vec![name(
            true,
            vec![
                translation(None, "Unlabelled"),
                translation(Some("Latin"), "LABELLED"),
            ],
        )];
        assert_eq!(resolve_name(&names).unwrap(), "LABELLED");
    }
}
