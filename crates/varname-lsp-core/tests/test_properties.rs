//! Property-based tests for name suggestions

use proptest::prelude::*;
use varname_lsp_core::{build_short, build_tag, suggest, DeclarationKeyword};

fn contains_keyword(line: &str) -> bool {
    let upper = line.to_ascii_uppercase();
    DeclarationKeyword::ALL
        .iter()
        .any(|k| upper.contains(k.as_str()))
}

proptest! {
    /// Lines without any declaration keyword never produce suggestions.
    #[test]
    fn prop_no_keyword_no_suggestions(line in "[a-zA-Z0-9 :;\"]{0,60}") {
        prop_assume!(!contains_keyword(&line));
        prop_assert!(suggest("", &line).is_empty());
    }

    /// Suggestions always come as a full set or not at all.
    #[test]
    fn prop_zero_or_three(line in "[a-zA-Z :;\"]{0,60}") {
        let count = suggest("", &line).len();
        prop_assert!(count == 0 || count == 3);
    }

    /// Words without a table entry pass through unchanged.
    #[test]
    fn prop_short_is_idempotent(words in prop::collection::vec("(Xq|Zz)[a-z]{0,6}", 1..5)) {
        let name = words.join(" ");
        let once = build_short(&name, false);
        prop_assert_eq!(&once, &words.concat());
        prop_assert_eq!(build_short(&once, false), once);
    }

    /// The tag only ever holds upper-case ASCII letters.
    #[test]
    fn prop_tag_is_upper_ascii(name in "\\PC{0,40}") {
        let tag = build_tag(&name, false);
        prop_assert!(tag.chars().all(|c| c.is_ascii_uppercase()));
    }
}
