//! Declaration extraction from a single source line.

use crate::keyword::DeclarationKeyword;

const TEMPORARY_TERMINATOR: &str = "TEMPORARY;";
const TERMINATOR: char = ';';

/// The text naming the declared object, as written between the keyword
/// and the terminator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawDeclaration {
    pub keyword: DeclarationKeyword,
    /// Untouched slice of the line, quotes and surrounding spaces included
    pub name: String,
    pub is_temporary: bool,
}

/// Extract the declared object name from `line`.
///
/// Returns `None` when the line holds no declaration keyword or when no
/// terminator follows the keyword.
pub fn extract(line: &str) -> Option<RawDeclaration> {
    let (keyword, start) = DeclarationKeyword::find_in(line)?;
    let rest = &line[start..];

    // Byte offsets are shared between `rest` and its ASCII upper-casing
    let upper = rest.to_ascii_uppercase();
    let (end, is_temporary) = match upper.find(TEMPORARY_TERMINATOR) {
        Some(end) => (end, true),
        None => (upper.find(TERMINATOR)?, false),
    };

    Some(RawDeclaration {
        keyword,
        name: rest[..end].to_string(),
        is_temporary,
    })
}
