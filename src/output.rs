//! CSV serialization of extracted relationship triples.

use std::io::Write;

use crate::error::Result;
use crate::extract::RelationshipTriple;

const HEADER: &str = "entity_1,relationship,entity_2";

/// Write triples as UTF-8 CSV with a header row and no index column.
///
/// Quoting is minimal: a field is double-quoted only when it contains a
/// comma, a quote, or a line break, with embedded quotes doubled.
pub fn write_csv<W: Write>(writer: &mut W, triples: &[RelationshipTriple]) -> Result<()> {
    writeln!(writer, "{}", HEADER)?;
    for triple in triples {
        writeln!(
            writer,
            "{},{},{}",
            escape_field(&triple.entity_1),
            escape_field(&triple.relationship),
            escape_field(&triple.entity_2),
        )?;
    }
    writer.flush()?;
    Ok(())
}

fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
