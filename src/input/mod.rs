//! Field-level input validation. A [`FieldInput`] holds one field's value and
//! focus state and reports the error or subtext it should display. The form
//! controller only sees the aggregated `has_field_error` flag.

mod debounce;

pub use debounce::{Debounce, ENTER_DEBOUNCE};

use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

pub const EMAIL_ERROR: &str = "Please enter a valid mail address";
pub const PASSWORD_ERROR: &str = "Passwords must be at least 8 characters long";
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
    Number,
}

static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$"));

#[must_use]
pub fn is_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_ok_and(|pattern| pattern.is_match(email))
}

#[must_use]
pub fn is_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// Validation error for a value of the given kind, ignoring focus state.
#[must_use]
pub fn validation_error(kind: InputKind, value: &str) -> Option<&'static str> {
    match kind {
        InputKind::Email if !is_email(value) => Some(EMAIL_ERROR),
        InputKind::Password if !is_password(value) => Some(PASSWORD_ERROR),
        _ => None,
    }
}

#[derive(Clone, Debug, Default)]
pub struct FieldInput {
    kind: InputKind,
    value: String,
    blurred: bool,
    focused: bool,
    limit: Option<usize>,
    subtext: Option<String>,
    error: Option<String>,
}

impl FieldInput {
    #[must_use]
    pub fn new(kind: InputKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    /// Caps the value at `limit` characters and shows a `len / limit` counter.
    #[must_use]
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn with_subtext(mut self, subtext: impl Into<String>) -> Self {
        self.subtext = Some(subtext.into());
        self
    }

    #[must_use]
    pub fn kind(&self) -> InputKind {
        self.kind
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn is_blurred(&self) -> bool {
        self.blurred
    }

    #[must_use]
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        let mut value = value.into();
        if let Some(limit) = self.limit {
            if let Some((index, _)) = value.char_indices().nth(limit) {
                value.truncate(index);
            }
        }
        self.value = value;
    }

    /// Error supplied by the owner of the field, shown once blurred.
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.blurred = true;
        self.focused = false;
    }

    /// Validation only runs after the first blur.
    #[must_use]
    pub fn validation_error(&self) -> Option<&'static str> {
        if self.blurred {
            validation_error(self.kind, &self.value)
        } else {
            None
        }
    }

    #[must_use]
    pub fn show_error(&self) -> bool {
        self.blurred
            && (self.validation_error().is_some()
                || self.error.as_deref().is_some_and(|error| !error.is_empty()))
    }

    #[must_use]
    pub fn show_subtext(&self) -> bool {
        self.limit.is_some() || self.show_error() || self.subtext.is_some()
    }

    #[must_use]
    pub fn subtext_text(&self) -> Option<Cow<'_, str>> {
        if let Some(error) = self.validation_error() {
            return Some(Cow::Borrowed(error));
        }
        if let Some(error) = self.error.as_deref().filter(|error| !error.is_empty()) {
            return Some(Cow::Borrowed(error));
        }
        if let Some(limit) = self.limit {
            return Some(Cow::Owned(format!(
                "{} / {limit}",
                self.value.chars().count()
            )));
        }
        self.subtext.as_deref().map(Cow::Borrowed)
    }

    /// Handles the Enter key. Returns true when the form should submit;
    /// otherwise the field is marked blurred so its error shows.
    pub fn enter_pressed(&mut self) -> bool {
        let submit = validation_error(self.kind, &self.value).is_none();
        if !submit {
            self.blurred = true;
        }
        submit
    }
}

/// True if any of the fields currently shows an error.
#[must_use]
pub fn any_error<'a>(fields: impl IntoIterator<Item = &'a FieldInput>) -> bool {
    fields.into_iter().any(FieldInput::show_error)
}
