//! Core variable-name suggestions for object declarations
//!
//! Given the text of a document and of the line under the cursor, this crate
//! recognises declarations such as `Rec: Record "Sales Line";` and proposes
//! three names for the variable:
//!
//! - **Full**: the object name without quotes and spaces (`SalesLine`)
//! - **Short**: each word abbreviated through a fixed table (`SalesLn`)
//! - **Tag**: the upper-case letters of the name (`SL`)
//!
//! Temporary declarations get a `Temp`/`Tmp` prefix, and every suggestion is
//! flagged when its text already occurs in the document.
//!
//! # Example
//!
//! ```
//! use varname_lsp_core::suggest;
//!
//! let line = "CU: Codeunit \"General Ledger Setup\";";
//! let names: Vec<String> = suggest(line, line)
//!     .into_iter()
//!     .map(|s| s.data.text)
//!     .collect();
//! assert_eq!(names, ["GeneralLedgerSetup", "GenLedgSetup", "GLS"]);
//! ```

pub mod abbreviations;
pub mod completion;
pub mod declaration;
pub mod keyword;
pub mod variants;

// Re-export main types for convenience
pub use abbreviations::{abbreviate_word, abbreviations, lookup, ABBREVIATION_ENTRIES};
pub use completion::{suggest, NameSuggestion, SuggestionData, SuggestionDetail, COLLISION_NOTE};
pub use declaration::{extract, RawDeclaration};
pub use keyword::DeclarationKeyword;
pub use variants::{
    build_full, build_short, build_tag, has_collision, NameVariant, FULL_TEMP_PREFIX, TEMP_PREFIX,
};
