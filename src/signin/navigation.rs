//! Navigation paths the sign-in form reads and writes. The form persists its
//! mode in the path so a reload lands on the same screen.

use std::{
    fmt,
    sync::{Arc, Mutex, PoisonError},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathName {
    SignUp,
    SignIn,
    ResetPassword,
    Onboarding,
    Home,
}

impl PathName {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            PathName::SignUp => "/sign-up",
            PathName::SignIn => "/sign-in",
            PathName::ResetPassword => "/forgot",
            PathName::Onboarding => "/onboarding",
            PathName::Home => "/home",
        }
    }

    /// Matches a path, ignoring a trailing slash. Returns `None` for paths the
    /// app does not route.
    #[must_use]
    pub fn parse(path: &str) -> Option<Self> {
        let trimmed = path.trim();
        let path = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };
        [
            PathName::SignUp,
            PathName::SignIn,
            PathName::ResetPassword,
            PathName::Onboarding,
            PathName::Home,
        ]
        .into_iter()
        .find(|candidate| candidate.as_str() == path)
    }
}

impl fmt::Display for PathName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Side channel to the router: read the current path, push a new one.
pub trait Navigator: Send + Sync {
    fn current_path(&self) -> String;
    fn push_path(&self, path: PathName);
}

/// In-memory history stack, used by the CLI and in tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryHistory {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MemoryHistory {
    #[must_use]
    pub fn new(initial_path: &str) -> Self {
        Self {
            entries: Arc::new(Mutex::new(vec![initial_path.to_string()])),
        }
    }

    /// Every path visited, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Navigator for MemoryHistory {
    fn current_path(&self) -> String {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
            .unwrap_or_else(|| "/".to_string())
    }

    fn push_path(&self, path: PathName) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.as_str().to_string());
    }
}
