/// A contact form submission that passed the presence check.
///
/// Nothing is sent anywhere; the page only acknowledges it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
}

impl Submission {
    /// `None` unless both fields are non-empty. No format validation.
    pub fn from_fields(name: &str, email: &str) -> Option<Self> {
        if name.is_empty() || email.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_owned(),
            email: email.to_owned(),
        })
    }

    pub fn confirmation(&self) -> String {
        format!(
            "Thanks {}! I'll get back to you at {} soon.",
            self.name, self.email
        )
    }
}
