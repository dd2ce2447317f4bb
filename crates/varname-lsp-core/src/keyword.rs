//! Declaration keywords that introduce a typed object variable.

/// A keyword declaring a variable of an application object type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeclarationKeyword {
    Record,
    Codeunit,
    Report,
    Query,
    Page,
}

impl DeclarationKeyword {
    /// Search priority. The first keyword present in a line wins, regardless
    /// of where in the line the other keywords occur.
    pub const ALL: [DeclarationKeyword; 5] = [
        DeclarationKeyword::Record,
        DeclarationKeyword::Codeunit,
        DeclarationKeyword::Report,
        DeclarationKeyword::Query,
        DeclarationKeyword::Page,
    ];

    /// Upper-case spelling used for matching
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKeyword::Record => "RECORD",
            DeclarationKeyword::Codeunit => "CODEUNIT",
            DeclarationKeyword::Report => "REPORT",
            DeclarationKeyword::Query => "QUERY",
            DeclarationKeyword::Page => "PAGE",
        }
    }

    /// Number of characters from the keyword start to where the name begins.
    ///
    /// REPORT skips one character less than its length, so its trailing `T`
    /// becomes part of the name.
    pub fn skip_len(&self) -> usize {
        match self {
            DeclarationKeyword::Record => 6,
            DeclarationKeyword::Codeunit => 8,
            DeclarationKeyword::Report => 5,
            DeclarationKeyword::Query => 5,
            DeclarationKeyword::Page => 4,
        }
    }

    /// Find the first keyword (in priority order) that occurs in `line`.
    ///
    /// Matching ignores ASCII case. Returns the keyword together with the
    /// byte offset just past it.
    pub fn find_in(line: &str) -> Option<(DeclarationKeyword, usize)> {
        // ASCII-only upper-casing keeps byte offsets valid for `line`
        let upper = line.to_ascii_uppercase();
        Self::ALL.iter().find_map(|keyword| {
            upper
                .find(keyword.as_str())
                .map(|start| (*keyword, start + keyword.skip_len()))
        })
    }
}

impl std::fmt::Display for DeclarationKeyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert_eq!(
            DeclarationKeyword::ALL.map(|k| k.as_str()),
            ["RECORD", "CODEUNIT", "REPORT", "QUERY", "PAGE"]
        );
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let found = DeclarationKeyword::find_in("Cust: record Customer;");
        assert_eq!(found, Some((DeclarationKeyword::Record, 12)));
    }

    #[test]
    fn test_priority_beats_position() {
        // PAGE appears first in the text but REPORT has higher priority
        let line = "PageRep: Page \"Report Selection\"; Rpt: Report Foo;";
        let (keyword, _) = DeclarationKeyword::find_in(line).unwrap();
        assert_eq!(keyword, DeclarationKeyword::Report);
    }

    #[test]
    fn test_report_keeps_trailing_t() {
        let (keyword, end) = DeclarationKeyword::find_in("R: Report \"X\";").unwrap();
        assert_eq!(keyword, DeclarationKeyword::Report);
        assert_eq!(&"R: Report \"X\";"[end..], "t \"X\";");
    }

    #[test]
    fn test_skip_lengths() {
        assert_eq!(
            DeclarationKeyword::ALL.map(|k| k.skip_len()),
            [6, 8, 5, 5, 4]
        );
    }

    #[test]
    fn test_non_ascii_case_does_not_match() {
        // Dotless i does not fold to ASCII I
        assert_eq!(DeclarationKeyword::find_in("CU: Codeun\u{131}t Foo;"), None);
    }

    #[test]
    fn test_no_keyword() {
        assert_eq!(DeclarationKeyword::find_in("x: Integer;"), None);
        assert_eq!(DeclarationKeyword::find_in(""), None);
    }

    #[test]
    fn test_keyword_inside_identifier_matches() {
        // Plain substring search: no word boundaries
        let (keyword, _) = DeclarationKeyword::find_in("Pages: Integer;").unwrap();
        assert_eq!(keyword, DeclarationKeyword::Page);
    }
}
