use chrono::NaiveDate;

use crate::types::{WarekiDate, WarekiError, Yen};

/// Escapes the five XML reserved characters and nothing else.
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Compact XML builder for the report schema.
///
/// Elements are written without indentation or line breaks. Empty text and absent
/// amounts become self-closing tags.
#[derive(Debug, Default)]
pub struct XmlWriter {
    buffer: String
}

impl XmlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, tag: &str) {
        self.buffer.push('<');
        self.buffer.push_str(tag);
        self.buffer.push('>');
    }

    pub fn close(&mut self, tag: &str) {
        self.buffer.push_str("</");
        self.buffer.push_str(tag);
        self.buffer.push('>');
    }

    pub fn empty(&mut self, tag: &str) {
        self.buffer.push('<');
        self.buffer.push_str(tag);
        self.buffer.push_str("/>");
    }

    /// Writes already-escaped content between an opening and closing tag.
    fn element(&mut self, tag: &str, content: &str) {
        self.open(tag);
        self.buffer.push_str(content);
        self.close(tag);
    }

    pub fn text(&mut self, tag: &str, value: &str) {
        if value.is_empty() {
            self.empty(tag);
        } else {
            self.element(tag, &escape_xml(value));
        }
    }

    pub fn amount(&mut self, tag: &str, value: Yen) {
        self.element(tag, &value.to_string());
    }

    pub fn optional_amount(&mut self, tag: &str, value: Option<Yen>) {
        match value {
            Some(value) => self.amount(tag, value),
            None => self.empty(tag)
        }
    }

    pub fn number(&mut self, tag: &str, value: impl ToString) {
        self.element(tag, &value.to_string());
    }

    pub fn date(&mut self, tag: &str, value: NaiveDate) -> Result<(), WarekiError> {
        let wareki = WarekiDate::from_gregorian(value)?;
        self.element(tag, &wareki.to_string());

        Ok(())
    }

    /// Appends a fragment produced by another writer.
    pub fn raw(&mut self, fragment: &str) {
        self.buffer.push_str(fragment);
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}
