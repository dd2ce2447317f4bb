/// Represents an open document in the LSP server
pub struct Document {
    /// The current text content of the document
    text: String,
    /// Lines of the document (cached for position lookups)
    lines: Vec<String>,
}

impl Document {
    pub fn new(text: String) -> Self {
        let lines = split_lines(&text);
        Self { text, lines }
    }

    pub fn update_text(&mut self, new_text: String) {
        self.lines = split_lines(&new_text);
        self.text = new_text;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the text of a line without its line ending
    pub fn line(&self, line: u32) -> Option<&str> {
        self.lines.get(line as usize).map(String::as_str)
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(|s| s.to_string()).collect()
}
