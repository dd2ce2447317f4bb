use tower_lsp::lsp_types::*;
use varname_lsp_core::{suggest, NameSuggestion, SuggestionData};

use crate::document::Document;
use crate::error::ResolveError;

/// Convert a core suggestion to an LSP completion item.
///
/// Only the label and payload are set here; detail, documentation and
/// insert text are added by [`resolve_completion`].
fn convert_to_lsp_completion(suggestion: NameSuggestion) -> CompletionItem {
    CompletionItem {
        label: suggestion.label().to_string(),
        kind: Some(CompletionItemKind::TEXT),
        data: serde_json::to_value(&suggestion.data).ok(),
        ..Default::default()
    }
}

/// Get completion items for a position in the document
pub fn get_completions(doc: &Document, position: Position) -> Vec<CompletionItem> {
    let Some(line) = doc.line(position.line) else {
        return vec![];
    };

    suggest(doc.text(), line)
        .into_iter()
        .map(convert_to_lsp_completion)
        .collect()
}

/// Fill in detail, documentation and insert text from the item's payload
pub fn resolve_completion(mut item: CompletionItem) -> Result<CompletionItem, ResolveError> {
    let data = item
        .data
        .take()
        .ok_or_else(|| ResolveError::MissingData(item.label.clone()))?;
    let suggestion: SuggestionData = serde_json::from_value(data.clone())?;
    let detail = suggestion.describe();

    item.detail = Some(detail.detail);
    item.documentation = Some(Documentation::String(detail.documentation));
    item.insert_text = Some(detail.insert_text);
    item.data = Some(data);
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completions(text: &str, line: u32) -> Vec<CompletionItem> {
        let doc = Document::new(text.to_string());
        get_completions(&doc, Position::new(line, 0))
    }

    #[test]
    fn test_declaration_line() {
        let items = completions("var\n    Rec: Record \"Sales Line\";\n", 1);
        let labels: Vec<&str> = items.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, vec!["vFull", "vShort", "vTag"]);
        assert!(items.iter().all(|c| c.kind == Some(CompletionItemKind::TEXT)));
        assert_eq!(
            items[0].data,
            Some(serde_json::json!({ "text": "SalesLine", "warning": false }))
        );
    }

    #[test]
    fn test_only_cursor_line_is_used() {
        let items = completions("Rec: Record Customer;\nx: Integer;\n", 1);
        assert!(items.is_empty());
    }

    #[test]
    fn test_line_out_of_range() {
        assert!(completions("Rec: Record Customer;", 5).is_empty());
    }

    #[test]
    fn test_collision_uses_whole_document() {
        let items = completions("Cust: Integer;\nRec: Record Customer;\n", 1);
        assert_eq!(
            items[1].data,
            Some(serde_json::json!({ "text": "Cust", "warning": true }))
        );
    }

    #[test]
    fn test_resolve_plain() {
        let items = completions("Rec: Record \"Sales Line\";", 0);
        let item = resolve_completion(items[2].clone()).unwrap();
        assert_eq!(item.detail.as_deref(), Some("SL"));
        assert_eq!(
            item.documentation,
            Some(Documentation::String("Insert SL".to_string()))
        );
        assert_eq!(item.insert_text.as_deref(), Some("SL"));
        assert!(item.data.is_some());
    }

    #[test]
    fn test_resolve_collision() {
        let item = CompletionItem {
            label: "vFull".to_string(),
            data: Some(serde_json::json!({ "text": "SalesLine", "warning": true })),
            ..Default::default()
        };
        let item = resolve_completion(item).unwrap();
        assert_eq!(item.detail.as_deref(), Some("!!SalesLine!!"));
        assert_eq!(
            item.documentation,
            Some(Documentation::String(
                "Insert SalesLine\nThere might be an already declared variable with the same name."
                    .to_string()
            ))
        );
        assert_eq!(item.insert_text.as_deref(), Some("SalesLine"));
    }

    #[test]
    fn test_resolve_missing_data() {
        let item = CompletionItem::new_simple("vFull".to_string(), String::new());
        let err = resolve_completion(item).unwrap_err();
        assert!(matches!(err, ResolveError::MissingData(label) if label == "vFull"));
    }

    #[test]
    fn test_resolve_invalid_data() {
        let item = CompletionItem {
            label: "vTag".to_string(),
            data: Some(serde_json::json!({ "text": 3 })),
            ..Default::default()
        };
        assert!(matches!(
            resolve_completion(item),
            Err(ResolveError::InvalidData(_))
        ));
    }
}
