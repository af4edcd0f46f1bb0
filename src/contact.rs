//! Client-side contact form validation. Nothing is sent anywhere.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    pub fn id(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email Address",
            Self::Message => "Message",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FieldIssue {
    Missing,
    InvalidEmail,
}

impl FieldIssue {
    pub fn message(self, field: ContactField) -> String {
        match self {
            Self::Missing => format!("{} is required.", field.label()),
            Self::InvalidEmail => "Enter a valid email address.".to_string(),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ValidationReport {
    issues: Vec<(ContactField, FieldIssue)>,
}

impl ValidationReport {
    pub fn issue_for(&self, field: ContactField) -> Option<FieldIssue> {
        self.issues
            .iter()
            .find(|(candidate, _)| *candidate == field)
            .map(|(_, issue)| *issue)
    }

    #[cfg(test)]
    pub fn issues(&self) -> &[(ContactField, FieldIssue)] {
        &self.issues
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}

/// A draft that passed validation, trimmed.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<ContactMessage, ValidationReport> {
        let mut report = ValidationReport::default();

        for field in ContactField::ALL {
            let value = self.value(field).trim();
            if value.is_empty() {
                report.issues.push((field, FieldIssue::Missing));
            } else if field == ContactField::Email && !is_valid_email(value) {
                report.issues.push((field, FieldIssue::InvalidEmail));
            }
        }

        if !report.is_empty() {
            return Err(report);
        }

        Ok(ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Blocked(ValidationReport),
    Ready,
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ContactForm {
    pub draft: ContactDraft,
    pub status: FormStatus,
}

impl ContactForm {
    /// Updates one field. A blocked form re-validates so inline errors clear as the
    /// user fixes them.
    pub fn edit(&mut self, field: ContactField, value: String) {
        self.draft.set(field, value);

        self.status = match &self.status {
            FormStatus::Blocked(_) => match self.draft.validate() {
                Ok(_) => FormStatus::Editing,
                Err(report) => FormStatus::Blocked(report),
            },
            _ => FormStatus::Editing,
        };
    }

    /// Validates the draft. The returned message is the only thing a submission
    /// side effect may act on; blocked submissions return `None`.
    pub fn submit(&mut self) -> Option<ContactMessage> {
        match self.draft.validate() {
            Ok(message) => {
                self.status = FormStatus::Ready;
                Some(message)
            }
            Err(report) => {
                self.status = FormStatus::Blocked(report);
                None
            }
        }
    }

    pub fn issue_for(&self, field: ContactField) -> Option<FieldIssue> {
        match &self.status {
            FormStatus::Blocked(report) => report.issue_for(field),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn is_blocked(&self) -> bool {
        matches!(self.status, FormStatus::Blocked(_))
    }
}

const LOCAL_PART_SYMBOLS: &str = ".!#$%&'*+/=?^_`{|}~-";
const MAX_DOMAIN_LABEL_LEN: usize = 63;

/// The HTML `type="email"` rule: a non-empty local part of letters, digits and
/// `LOCAL_PART_SYMBOLS`, then one or more dot-separated domain labels.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || LOCAL_PART_SYMBOLS.contains(c));

    local_ok && domain.split('.').all(is_domain_label)
}

/// Letters, digits and inner hyphens, at most 63 characters.
fn is_domain_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            bytes.len() <= MAX_DOMAIN_LABEL_LEN
                && first.is_ascii_alphanumeric()
                && last.is_ascii_alphanumeric()
                && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(ContactField::Name, "Ada".to_string());
        form.edit(ContactField::Email, "ada@example.com".to_string());
        form.edit(ContactField::Message, "Hello there".to_string());
        form
    }

    #[test]
    fn any_missing_field_blocks_submission() {
        for missing in ContactField::ALL {
            let mut form = filled();
            form.edit(missing, String::new());

            let mut sent = Vec::new();
            if let Some(message) = form.submit() {
                sent.push(message);
            }

            assert!(sent.is_empty(), "{missing:?} should block");
            assert!(form.is_blocked());
            assert_eq!(form.issue_for(missing), Some(FieldIssue::Missing));
        }
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut form = filled();
        form.edit(ContactField::Message, "   \n ".to_string());

        assert!(form.submit().is_none());
        assert_eq!(form.issue_for(ContactField::Message), Some(FieldIssue::Missing));
    }

    #[test]
    fn invalid_email_is_reported_inline() {
        let mut form = filled();
        form.edit(ContactField::Email, "ada.example.com".to_string());

        assert!(form.submit().is_none());
        assert_eq!(form.issue_for(ContactField::Email), Some(FieldIssue::InvalidEmail));
        assert_eq!(form.issue_for(ContactField::Name), None);
    }

    #[test]
    fn complete_form_clears_the_blocked_state() {
        let mut form = ContactForm::default();
        assert!(form.submit().is_none());
        assert!(form.is_blocked());

        form.edit(ContactField::Name, "Ada".to_string());
        assert!(form.is_blocked());
        form.edit(ContactField::Email, "ada@example.com".to_string());
        form.edit(ContactField::Message, "Hi".to_string());
        assert!(!form.is_blocked());

        let message = form.submit().expect("complete form validates");
        assert_eq!(message.email, "ada@example.com");
        assert_eq!(form.status, FormStatus::Ready);
    }

    #[test]
    fn report_lists_issues_in_field_order() {
        let report = ContactDraft::default()
            .validate()
            .expect_err("empty draft is invalid");

        let fields: Vec<ContactField> = report.issues().iter().map(|(field, _)| *field).collect();
        assert_eq!(fields, ContactField::ALL.to_vec());
    }

    #[test]
    fn validated_message_is_trimmed() {
        let draft = ContactDraft {
            name: "  Ada ".to_string(),
            email: " ada@example.com".to_string(),
            message: "hi \n".to_string(),
        };

        let message = draft.validate().expect("valid draft");
        assert_eq!(message.name, "Ada");
        assert_eq!(message.message, "hi");
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@mail.example.org"));
        assert!(is_valid_email("a@localhost"));
        assert!(is_valid_email("o'neil!#$%&*/=?^_`{|}~-@x-y.io"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b..co"));
        assert!(!is_valid_email("a@b@c.co"));
        assert!(!is_valid_email("a b@c.co"));
        assert!(!is_valid_email("a(b)@c.d"));
        assert!(!is_valid_email("a@-bad-.com"));
        assert!(!is_valid_email("a@b_c.com"));
        assert!(!is_valid_email("a@b.co."));
    }

    #[test]
    fn domain_labels_stop_at_sixty_three_characters() {
        let longest = "x".repeat(63);
        assert!(is_valid_email(&format!("a@{longest}.com")));
        assert!(!is_valid_email(&format!("a@{longest}x.com")));
    }

    #[test]
    fn dotless_domain_passes_form_validation() {
        let mut form = filled();
        form.edit(ContactField::Email, "ada@localhost".to_string());

        assert!(form.submit().is_some());
    }

    #[test]
    fn missing_message_names_the_field() {
        assert_eq!(
            FieldIssue::Missing.message(ContactField::Email),
            "Email Address is required."
        );
    }
}
