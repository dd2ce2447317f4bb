//! Suggestion assembly and presentation
//!
//! Ties the extractor and the variant builders together and produces the
//! data carried by each completion item. The presentation step
//! ([`SuggestionData::describe`]) works from that data alone so it can run
//! in a later, independent resolve request.

use serde::{Deserialize, Serialize};

use crate::declaration::extract;
use crate::variants::{has_collision, NameVariant};

/// Appended to the documentation of a suggestion that collides
pub const COLLISION_NOTE: &str = "There might be an already declared variable with the same name.";

/// Payload stored on a completion item between completion and resolve
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionData {
    pub text: String,
    pub warning: bool,
}

/// One proposed variable name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NameSuggestion {
    pub variant: NameVariant,
    pub data: SuggestionData,
}

impl NameSuggestion {
    pub fn label(&self) -> &'static str {
        self.variant.label()
    }
}

/// Human readable rendering of a suggestion
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuggestionDetail {
    pub detail: String,
    pub documentation: String,
    pub insert_text: String,
}

impl SuggestionData {
    /// Render detail and documentation, decorating collisions with `!!`
    pub fn describe(&self) -> SuggestionDetail {
        let (detail, documentation) = if self.warning {
            (
                format!("!!{}!!", self.text),
                format!("Insert {}\n{}", self.text, COLLISION_NOTE),
            )
        } else {
            (self.text.clone(), format!("Insert {}", self.text))
        };

        SuggestionDetail {
            detail,
            documentation,
            insert_text: self.text.clone(),
        }
    }
}

/// Suggest variable names for the declaration on `line`.
///
/// Returns either nothing or exactly one suggestion per [`NameVariant`], in
/// the order Full, Short, Tag. Each suggestion is checked against
/// `document` on its own.
pub fn suggest(document: &str, line: &str) -> Vec<NameSuggestion> {
    let Some(decl) = extract(line) else {
        return Vec::new();
    };

    NameVariant::ALL
        .iter()
        .map(|variant| {
            let text = variant.build(&decl.name, decl.is_temporary);
            let warning = has_collision(document, &text);
            NameSuggestion {
                variant: *variant,
                data: SuggestionData { text, warning },
            }
        })
        .collect()
}
