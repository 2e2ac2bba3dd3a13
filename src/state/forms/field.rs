//! Form field value objects

/// Represents a single text input with its configuration and value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    /// Shown dimmed while the value is empty
    pub placeholder: Option<String>,
    /// Inline validation message from the last check
    pub error: Option<String>,
    /// Carried with the submission but not editable
    pub is_hidden: bool,
}

impl FormField {
    /// Create a new editable text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            placeholder: None,
            error: None,
            is_hidden: false,
        }
    }

    /// Create a hidden field with a fixed value
    pub fn hidden(name: &str, value: String) -> Self {
        Self {
            value,
            is_hidden: true,
            ..Self::text(name, name)
        }
    }

    pub fn with_placeholder(mut self, placeholder: Option<String>) -> Self {
        self.placeholder = placeholder.filter(|p| !p.is_empty());
        self
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Value with the character appended, leaving the field untouched
    pub fn with_char(&self, c: char) -> String {
        let mut value = self.value.clone();
        value.push(c);
        value
    }

    /// Value with the last character removed, leaving the field untouched
    pub fn without_last_char(&self) -> String {
        let mut value = self.value.clone();
        value.pop();
        value
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> &str {
        if self.value.is_empty() {
            self.placeholder.as_deref().unwrap_or("")
        } else {
            &self.value
        }
    }

    /// True when the rendered text is the placeholder rather than a value
    pub fn shows_placeholder(&self) -> bool {
        self.value.is_empty() && self.placeholder.is_some()
    }
}
