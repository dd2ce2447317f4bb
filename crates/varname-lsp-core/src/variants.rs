//! Naming conventions derived from a raw declaration

use crate::abbreviations::abbreviate_word;

/// Prefix for the full variant of a temporary declaration
pub const FULL_TEMP_PREFIX: &str = "Temp";
/// Prefix for the short and tag variants of a temporary declaration
pub const TEMP_PREFIX: &str = "Tmp";

/// The naming convention a suggestion follows
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NameVariant {
    Full,
    Short,
    Tag,
}

impl NameVariant {
    /// Presentation order of the suggestions
    pub const ALL: [NameVariant; 3] = [NameVariant::Full, NameVariant::Short, NameVariant::Tag];

    /// Completion label shown in the editor
    pub fn label(&self) -> &'static str {
        match self {
            NameVariant::Full => "vFull",
            NameVariant::Short => "vShort",
            NameVariant::Tag => "vTag",
        }
    }

    /// Build this variant's text from a raw declaration name
    pub fn build(&self, raw_name: &str, is_temporary: bool) -> String {
        match self {
            NameVariant::Full => build_full(raw_name, is_temporary),
            NameVariant::Short => build_short(raw_name, is_temporary),
            NameVariant::Tag => build_tag(raw_name, is_temporary),
        }
    }
}

fn with_prefix(prefix: &str, text: String, is_temporary: bool) -> String {
    if is_temporary {
        format!("{}{}", prefix, text)
    } else {
        text
    }
}

/// `"Sales Line"` becomes `SalesLine`
pub fn build_full(raw_name: &str, is_temporary: bool) -> String {
    let full: String = raw_name
        .trim()
        .chars()
        .filter(|c| *c != '"' && *c != ' ')
        .collect();
    with_prefix(FULL_TEMP_PREFIX, full, is_temporary)
}

/// Abbreviate every space-separated word and join them without separator.
///
/// Words missing from the table keep their original spelling; only single
/// spaces separate words, so tabs stay inside a word.
pub fn build_short(raw_name: &str, is_temporary: bool) -> String {
    let unquoted = raw_name.replace('"', "");
    let short: String = unquoted.split(' ').map(abbreviate_word).collect();
    with_prefix(TEMP_PREFIX, short, is_temporary)
}

/// Keep only the upper-case ASCII letters: `"Sales Line"` becomes `SL`
pub fn build_tag(raw_name: &str, is_temporary: bool) -> String {
    let tag: String = raw_name.chars().filter(char::is_ascii_uppercase).collect();
    with_prefix(TEMP_PREFIX, tag, is_temporary)
}

/// Whether `candidate` already occurs anywhere in the document.
///
/// Plain case-sensitive substring test: `Cust` collides with `CustLedgEntry`.
pub fn has_collision(document: &str, candidate: &str) -> bool {
    document.contains(candidate)
}
