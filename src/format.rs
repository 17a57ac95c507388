//! Canonical display formatting for extracted names.

use regex::Regex;

/// Normalize a raw name into display form. Pure and total.
///
/// Three passes, in order:
/// 1. `"Surname, Given"` inverts at the first `", "` to `"Given Surname"`;
///    any later comma stays verbatim inside the moved part.
/// 2. Title-casing: each alphabetic run starts upper-case, continues
///    lower-case; anything non-alphabetic is a boundary.
/// 3. Parenthesized spans are fully upper-cased, overriding pass 2. Spans
///    run to the first closing parenthesis; nesting is not supported.
pub fn format_name(raw: &str) -> String {
    let inverted = match raw.find(", ") {
        Some(idx) => format!("{} {}", &raw[idx + 2..], &raw[..idx]),
        None => raw.to_string(),
    };

    let cased = title_case(&inverted);

    let parenthetical = Regex::new(r"\(([^)]+)\)").expect("Invalid regex pattern");
    parenthetical
        .replace_all(&cased, |caps: &regex::Captures| {
            format!("({})", caps[1].to_uppercase())
        })
        .into_owned()
}

/// Word-initial capitalization with word boundaries at non-letter characters.
fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}
