//! Contact form state: fields, live error feedback, phone formatting

use crate::gateway::SubmissionRequest;
use crate::validate::{check_on_blur, ValidationError, ValidationReason};

/// Stable field identifiers, also used to address validation results
pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PHONE: &str = "phone";
pub const FIELD_SUBJECT: &str = "subject";
pub const FIELD_MESSAGE: &str = "message";

/// Submit control labels
pub const SUBMIT_LABEL: &str = "إرسال";
pub const SENDING_LABEL: &str = "جاري الإرسال...";

/// Input kind of a contact field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

/// A single contact form field with its configuration, value and error slot
#[derive(Debug, Clone)]
pub struct ContactField {
    pub name: &'static str,
    pub label: &'static str,
    pub value: String,
    pub required: bool,
    pub kind: FieldKind,
    /// At most one visible error at a time; a new one replaces the previous
    pub error: Option<ValidationReason>,
}

impl ContactField {
    fn new(name: &'static str, label: &'static str, required: bool, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            value: String::new(),
            required,
            kind,
            error: None,
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::TextArea
    }
}

/// The contact form: five fields plus a submit control row
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: Vec<ContactField>,
    /// Active row index; `fields.len()` addresses the submit control
    active: usize,
    /// True while the simulated round trip is in flight; blocks re-submit
    pub sending: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: vec![
                ContactField::new(FIELD_NAME, "الاسم الكامل", true, FieldKind::Text),
                ContactField::new(FIELD_EMAIL, "البريد الإلكتروني", true, FieldKind::Email),
                ContactField::new(FIELD_PHONE, "رقم الهاتف", false, FieldKind::Text),
                ContactField::new(FIELD_SUBJECT, "الموضوع", true, FieldKind::Text),
                ContactField::new(FIELD_MESSAGE, "الرسالة", true, FieldKind::TextArea),
            ],
            active: 0,
            sending: false,
        }
    }

    pub fn fields(&self) -> &[ContactField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&ContactField> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut ContactField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Set a field value directly (used by tests and config-driven prefill)
    pub fn set_value(&mut self, name: &str, value: &str) {
        if let Some(field) = self.field_mut(name) {
            field.value = value.to_string();
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Row count including the submit control
    pub fn row_count(&self) -> usize {
        self.fields.len() + 1
    }

    pub fn is_on_submit_row(&self) -> bool {
        self.active == self.fields.len()
    }

    pub fn active_field(&self) -> Option<&ContactField> {
        self.fields.get(self.active)
    }

    pub fn active_field_mut(&mut self) -> Option<&mut ContactField> {
        self.fields.get_mut(self.active)
    }

    /// Move focus to the next row, running blur feedback on the field left
    pub fn next_field(&mut self) {
        self.blur_active();
        self.active = (self.active + 1) % self.row_count();
    }

    /// Focus a row directly (mouse click), running blur feedback on the
    /// field left
    pub fn focus_row(&mut self, row: usize) {
        if row == self.active {
            return;
        }
        self.blur_active();
        self.active = row.min(self.fields.len());
    }

    /// Move focus to the previous row, running blur feedback on the field left
    pub fn prev_field(&mut self) {
        self.blur_active();
        self.active = if self.active == 0 {
            self.row_count() - 1
        } else {
            self.active - 1
        };
    }

    /// Blur feedback for the field losing focus: a required empty field or an
    /// invalid email shows its error immediately; otherwise the slot clears.
    fn blur_active(&mut self) {
        if let Some(field) = self.fields.get_mut(self.active) {
            field.error = check_on_blur(field.kind, field.required, &field.value);
        }
    }

    /// Type a character into the active field.
    ///
    /// Any edit clears the field's error optimistically; it is not
    /// re-validated until the next blur or submit.
    pub fn input_char(&mut self, c: char) {
        let is_phone = self
            .active_field()
            .is_some_and(|f| f.name == FIELD_PHONE);
        if let Some(field) = self.active_field_mut() {
            field.error = None;
            field.value.push(c);
            if is_phone {
                field.value = format_saudi_phone(&field.value);
            }
        }
    }

    /// Delete the last character of the active field
    pub fn backspace(&mut self) {
        let is_phone = self
            .active_field()
            .is_some_and(|f| f.name == FIELD_PHONE);
        if let Some(field) = self.active_field_mut() {
            field.error = None;
            if is_phone {
                // The formatter re-inserts separators, so drop trailing
                // non-digits until a digit has actually been removed.
                while matches!(field.value.chars().last(), Some(c) if !c.is_ascii_digit()) {
                    field.value.pop();
                }
                field.value.pop();
                field.value = format_saudi_phone(&field.value);
            } else {
                field.value.pop();
            }
        }
    }

    /// Attach submit-time validation results to their fields
    pub fn apply_errors(&mut self, errors: &[ValidationError]) {
        self.clear_errors();
        for error in errors {
            if let Some(field) = self.field_mut(error.field) {
                field.error = Some(error.reason);
            }
        }
    }

    pub fn clear_errors(&mut self) {
        for field in &mut self.fields {
            field.error = None;
        }
    }

    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.error.is_some())
    }

    /// Clear all values and error states after a successful submission
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
            field.error = None;
        }
        self.active = 0;
    }

    /// Snapshot the current values into a submission request
    pub fn to_request(&self) -> SubmissionRequest {
        let value = |name| {
            self.field(name)
                .map(|f: &ContactField| f.value.clone())
                .unwrap_or_default()
        };
        SubmissionRequest {
            name: value(FIELD_NAME),
            email: value(FIELD_EMAIL),
            phone: value(FIELD_PHONE),
            subject: value(FIELD_SUBJECT),
            message: value(FIELD_MESSAGE),
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Live formatting for Saudi phone numbers.
///
/// Non-digits are stripped; numbers entered as `966…` or `05…` are grouped
/// as `+966 XX XXX XXXX`. Anything else stays digits-only.
pub fn format_saudi_phone(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();

    let seg = |from: usize, to: usize| -> &str {
        &digits[from.min(digits.len())..to.min(digits.len())]
    };

    let grouped: Vec<&str> = if digits.starts_with("966") {
        vec![seg(3, 5), seg(5, 8), seg(8, 12)]
    } else if digits.starts_with("05") {
        vec![seg(1, 3), seg(3, 6), seg(6, 10)]
    } else {
        return digits;
    };

    let mut out = String::from("+966");
    for part in grouped.into_iter().filter(|p| !p.is_empty()) {
        out.push(' ');
        out.push_str(part);
    }
    out
}
