//! Contact form validation rules with Arabic feedback messages

use crate::state::{ContactForm, FieldKind, FIELD_EMAIL, FIELD_MESSAGE, FIELD_NAME};
use thiserror::Error;

/// Minimum message length in characters
pub const MIN_MESSAGE_CHARS: usize = 10;
/// Minimum name length in characters
pub const MIN_NAME_CHARS: usize = 2;

/// Why a field value was rejected. `Display` is the user-facing Arabic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationReason {
    #[error("هذا الحقل مطلوب")]
    Required,
    #[error("يرجى إدخال بريد إلكتروني صحيح")]
    InvalidEmail,
    #[error("يجب أن تكون الرسالة 10 أحرف على الأقل")]
    MessageTooShort,
    #[error("يجب أن يكون الاسم حرفين على الأقل")]
    NameTooShort,
}

/// One violated rule, attached to the field it concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: ValidationReason,
}

/// Validate the whole form.
///
/// All rules run in a fixed order and every violation is reported, so the
/// caller can surface each one inline. Pure: no field state is touched.
pub fn validate(form: &ContactForm) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // Rule 1: required fields must have a non-empty trimmed value
    for field in form.fields() {
        if field.required && field.value.trim().is_empty() {
            errors.push(ValidationError {
                field: field.name,
                reason: ValidationReason::Required,
            });
        }
    }

    // Rule 2: a non-empty email must look like an email
    if let Some(email) = form.field(FIELD_EMAIL) {
        if !email.value.is_empty() && !is_valid_email(&email.value) {
            errors.push(ValidationError {
                field: FIELD_EMAIL,
                reason: ValidationReason::InvalidEmail,
            });
        }
    }

    // Rule 3: a non-empty message must carry at least 10 characters
    if let Some(message) = form.field(FIELD_MESSAGE) {
        let len = message.value.trim().chars().count();
        if !message.value.is_empty() && len < MIN_MESSAGE_CHARS {
            errors.push(ValidationError {
                field: FIELD_MESSAGE,
                reason: ValidationReason::MessageTooShort,
            });
        }
    }

    // Rule 4: a non-empty name must carry at least 2 characters
    if let Some(name) = form.field(FIELD_NAME) {
        let len = name.value.trim().chars().count();
        if !name.value.is_empty() && len < MIN_NAME_CHARS {
            errors.push(ValidationError {
                field: FIELD_NAME,
                reason: ValidationReason::NameTooShort,
            });
        }
    }

    errors
}

/// Field-level check run when a field loses focus.
///
/// Only the immediate feedback rules apply here: a required field must not be
/// empty, and a non-empty email field must hold a valid address. Length rules
/// wait for submit, matching the live-feedback behavior of the site.
pub fn check_on_blur(
    kind: FieldKind,
    required: bool,
    value: &str,
) -> Option<ValidationReason> {
    if required && value.trim().is_empty() {
        return Some(ValidationReason::Required);
    }
    if kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
        return Some(ValidationReason::InvalidEmail);
    }
    None
}

/// Check an email address against `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
///
/// Hand-rolled equivalent of the pattern: no whitespace anywhere, exactly one
/// `@` with a non-empty local part, and a domain with an interior dot.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // The domain must match `[^\s@]+\.[^\s@]+`: a dot with at least one
    // character on each side. Count in chars; the value may be non-ASCII.
    let chars: Vec<char> = domain.chars().collect();
    chars.len() >= 3 && chars[1..chars.len() - 1].contains(&'.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ContactForm, FIELD_PHONE, FIELD_SUBJECT};
    use pretty_assertions::assert_eq;

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_value(FIELD_NAME, "أحمد السالم");
        form.set_value(FIELD_EMAIL, "ahmed@example.com");
        form.set_value(FIELD_PHONE, "+966 50 123 4567");
        form.set_value(FIELD_SUBJECT, "استفسار عن الخدمات");
        form.set_value(FIELD_MESSAGE, "أرغب في معرفة المزيد عن خدماتكم.");
        form
    }

    mod email {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_accepts_plain_address() {
            assert!(is_valid_email("a@b.co"));
            assert!(is_valid_email("user.name@mail.example.org"));
        }

        #[test]
        fn test_rejects_missing_dot_in_domain() {
            assert!(!is_valid_email("a@b"));
        }

        #[test]
        fn test_rejects_whitespace() {
            assert!(!is_valid_email("a b@c.com"));
            assert!(!is_valid_email(" a@c.com"));
            assert!(!is_valid_email("a@c.com "));
        }

        #[test]
        fn test_rejects_empty_parts() {
            assert!(!is_valid_email(""));
            assert!(!is_valid_email("@b.co"));
            assert!(!is_valid_email("a@"));
            assert!(!is_valid_email("a@.c"));
            assert!(!is_valid_email("a@c."));
        }

        #[test]
        fn test_rejects_double_at() {
            assert!(!is_valid_email("a@@b.co"));
            assert!(!is_valid_email("a@b@c.co"));
        }

        #[test]
        fn test_accepts_interior_dot_anywhere_in_domain() {
            // `[^\s@]` includes dots, so multiple dots are fine
            assert!(is_valid_email("a@b..c"));
            assert!(is_valid_email("a@x.y.z"));
        }
    }

    mod full_pass {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_form_produces_no_errors() {
            assert_eq!(validate(&filled_form()), vec![]);
        }

        #[test]
        fn test_empty_form_reports_every_required_field() {
            let form = ContactForm::new();
            let errors = validate(&form);
            let required: Vec<&str> = errors
                .iter()
                .filter(|e| e.reason == ValidationReason::Required)
                .map(|e| e.field)
                .collect();
            assert_eq!(
                required,
                vec![FIELD_NAME, FIELD_EMAIL, FIELD_SUBJECT, FIELD_MESSAGE]
            );
        }

        #[test]
        fn test_phone_is_optional() {
            let mut form = filled_form();
            form.set_value(FIELD_PHONE, "");
            assert_eq!(validate(&form), vec![]);
        }

        #[test]
        fn test_required_error_is_independent_of_other_fields() {
            let mut form = filled_form();
            form.set_value(FIELD_SUBJECT, "   ");
            let errors = validate(&form);
            assert_eq!(
                errors,
                vec![ValidationError {
                    field: FIELD_SUBJECT,
                    reason: ValidationReason::Required,
                }]
            );
        }

        #[test]
        fn test_invalid_email_reported() {
            let mut form = filled_form();
            form.set_value(FIELD_EMAIL, "ahmed@example");
            let errors = validate(&form);
            assert_eq!(
                errors,
                vec![ValidationError {
                    field: FIELD_EMAIL,
                    reason: ValidationReason::InvalidEmail,
                }]
            );
        }

        #[test]
        fn test_short_message_reported() {
            let mut form = filled_form();
            form.set_value(FIELD_MESSAGE, "شكراً");
            let errors = validate(&form);
            assert_eq!(
                errors,
                vec![ValidationError {
                    field: FIELD_MESSAGE,
                    reason: ValidationReason::MessageTooShort,
                }]
            );
        }

        #[test]
        fn test_short_name_reported() {
            let mut form = filled_form();
            form.set_value(FIELD_NAME, "م");
            let errors = validate(&form);
            assert_eq!(
                errors,
                vec![ValidationError {
                    field: FIELD_NAME,
                    reason: ValidationReason::NameTooShort,
                }]
            );
        }

        #[test]
        fn test_message_length_counts_characters_not_bytes() {
            let mut form = filled_form();
            // 10 Arabic characters, well over 10 bytes
            form.set_value(FIELD_MESSAGE, "مرحبا بكمم");
            assert_eq!(validate(&form), vec![]);
        }

        #[test]
        fn test_all_rules_reported_together_in_order() {
            let mut form = ContactForm::new();
            form.set_value(FIELD_NAME, "م");
            form.set_value(FIELD_EMAIL, "bad@mail");
            form.set_value(FIELD_SUBJECT, "موضوع");
            form.set_value(FIELD_MESSAGE, "قصير");
            let errors = validate(&form);
            assert_eq!(
                errors,
                vec![
                    ValidationError {
                        field: FIELD_EMAIL,
                        reason: ValidationReason::InvalidEmail,
                    },
                    ValidationError {
                        field: FIELD_MESSAGE,
                        reason: ValidationReason::MessageTooShort,
                    },
                    ValidationError {
                        field: FIELD_NAME,
                        reason: ValidationReason::NameTooShort,
                    },
                ]
            );
        }
    }

    mod blur {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_required_empty_field_errors_on_blur() {
            assert_eq!(
                check_on_blur(FieldKind::Text, true, "   "),
                Some(ValidationReason::Required)
            );
        }

        #[test]
        fn test_optional_empty_field_passes_on_blur() {
            assert_eq!(check_on_blur(FieldKind::Text, false, ""), None);
        }

        #[test]
        fn test_invalid_email_errors_on_blur() {
            assert_eq!(
                check_on_blur(FieldKind::Email, true, "not-an-email"),
                Some(ValidationReason::InvalidEmail)
            );
        }

        #[test]
        fn test_valid_email_passes_on_blur() {
            assert_eq!(check_on_blur(FieldKind::Email, true, "a@b.co"), None);
        }

        #[test]
        fn test_short_values_wait_for_submit() {
            // Length rules are not part of blur feedback
            assert_eq!(check_on_blur(FieldKind::TextArea, true, "قصير"), None);
        }

        #[test]
        fn test_messages_are_arabic() {
            assert_eq!(ValidationReason::Required.to_string(), "هذا الحقل مطلوب");
            assert_eq!(
                ValidationReason::InvalidEmail.to_string(),
                "يرجى إدخال بريد إلكتروني صحيح"
            );
        }
    }
}
