//! Form field value objects

use super::phone::{backspace_phone, format_phone};

/// Kind tag of a field; drives validation and rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    /// Carries a fixed value; never validated or shown
    #[cfg_attr(not(test), allow(dead_code))]
    Hidden,
    Checkbox,
    /// Option grid; the value is the key of the selected option
    Select,
}

/// One choice of a select field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOption {
    pub key: &'static str,
    pub label: &'static str,
}

impl FieldOption {
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self { key, label }
    }
}

/// Type-safe field values
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Checked(bool),
    Choice {
        options: Vec<FieldOption>,
        selected: Option<usize>,
    },
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: FieldValue,
    /// Set by a failed validation, cleared by the next edit
    pub flagged: bool,
}

impl FormField {
    fn build(name: &str, label: &str, kind: FieldKind, required: bool, value: FieldValue) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required,
            value,
            flagged: false,
        }
    }

    /// Create a free-text field of the given kind (text, email or tel)
    pub fn text(name: &str, label: &str, kind: FieldKind, required: bool) -> Self {
        Self::build(name, label, kind, required, FieldValue::Text(String::new()))
    }

    /// Create a hidden field carrying a fixed value
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn hidden(name: &str, value: &str) -> Self {
        Self::build(
            name,
            name,
            FieldKind::Hidden,
            false,
            FieldValue::Text(value.to_string()),
        )
    }

    /// Create an unchecked checkbox
    pub fn checkbox(name: &str, label: &str, required: bool) -> Self {
        Self::build(name, label, FieldKind::Checkbox, required, FieldValue::Checked(false))
    }

    /// Create a select field with nothing selected
    pub fn select(name: &str, label: &str, options: &[FieldOption], required: bool) -> Self {
        Self::build(
            name,
            label,
            FieldKind::Select,
            required,
            FieldValue::Choice {
                options: options.to_vec(),
                selected: None,
            },
        )
    }

    /// Get the raw string value.
    ///
    /// Select fields yield the selected option key and checkboxes yield
    /// `"on"` when checked, empty otherwise.
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Checked(true) => "on",
            FieldValue::Checked(false) => "",
            FieldValue::Choice { options, selected } => selected
                .and_then(|i| options.get(i))
                .map(|o| o.key)
                .unwrap_or(""),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.as_text().is_empty()
    }

    pub fn is_checked(&self) -> bool {
        matches!(self.value, FieldValue::Checked(true))
    }

    /// Whether the user can type into this field
    pub fn accepts_text(&self) -> bool {
        matches!(self.kind, FieldKind::Text | FieldKind::Email | FieldKind::Tel)
    }

    /// Mark the field as failing validation
    pub fn flag(&mut self) {
        self.flagged = true;
    }

    /// Any edit clears the validation flag
    fn touch(&mut self) {
        self.flagged = false;
    }

    /// Set the text value (phone fields are re-masked)
    pub fn set_text(&mut self, value: &str) {
        if let FieldValue::Text(s) = &mut self.value {
            *s = match self.kind {
                FieldKind::Tel => format_phone(value),
                _ => value.to_string(),
            };
            self.flagged = false;
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        let kind = self.kind;
        if let FieldValue::Text(s) = &mut self.value {
            if kind == FieldKind::Tel {
                s.push(c);
                *s = format_phone(s);
            } else {
                s.push(c);
            }
            self.touch();
        }
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        let kind = self.kind;
        if let FieldValue::Text(s) = &mut self.value {
            if kind == FieldKind::Tel {
                *s = backspace_phone(s);
            } else {
                s.pop();
            }
            self.touch();
        }
    }

    /// Flip a checkbox
    pub fn toggle(&mut self) {
        if let FieldValue::Checked(checked) = &mut self.value {
            *checked = !*checked;
            self.touch();
        }
    }

    /// Move the selection of a select field forward (wraps around)
    pub fn next_option(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(match *selected {
                Some(i) => (i + 1) % options.len(),
                None => 0,
            });
            self.touch();
        }
    }

    /// Move the selection of a select field backward (wraps around)
    pub fn prev_option(&mut self) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if options.is_empty() {
                return;
            }
            *selected = Some(match *selected {
                Some(0) | None => options.len() - 1,
                Some(i) => i - 1,
            });
            self.touch();
        }
    }

    /// Select the option with the given key, if present
    #[cfg(test)]
    pub fn select_key(&mut self, key: &str) {
        if let FieldValue::Choice { options, selected } = &mut self.value {
            if let Some(i) = options.iter().position(|o| o.key == key) {
                *selected = Some(i);
                self.flagged = false;
            }
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Checked(true) => "[x]".to_string(),
            FieldValue::Checked(false) => "[ ]".to_string(),
            FieldValue::Choice { options, selected } => options
                .iter()
                .enumerate()
                .map(|(i, o)| {
                    if Some(i) == *selected {
                        format!("(•) {}", o.label)
                    } else {
                        format!("( ) {}", o.label)
                    }
                })
                .collect::<Vec<_>>()
                .join("  "),
        }
    }
}
