//! Login form rules and the client-side session state.
//!
//! There is no credential check anywhere: a form whose fields have the
//! right shape is accepted and the session is marked authenticated. This is
//! a placeholder and must not be mistaken for real authentication.

use serde::{Deserialize, Serialize};

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

/// Pause before a submitted login is accepted, standing in for a network call
pub const LOGIN_SIMULATED_DELAY_MS: u32 = 1000;

/// Where the user lands after logging in
pub const HOME_ROUTE: &str = "/";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Per-field validation messages; a field without a message is valid
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginValidation {
    pub username_error: Option<String>,
    pub password_error: Option<String>,
}

impl LoginValidation {
    pub fn is_valid(&self) -> bool {
        self.username_error.is_none() && self.password_error.is_none()
    }
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check minimum lengths only, counted in characters
    pub fn validate(&self) -> LoginValidation {
        let username_error = (self.username.chars().count() < MIN_USERNAME_LEN).then(|| {
            format!("Username must be at least {} characters.", MIN_USERNAME_LEN)
        });
        let password_error = (self.password.chars().count() < MIN_PASSWORD_LEN).then(|| {
            format!("Password must be at least {} characters.", MIN_PASSWORD_LEN)
        });

        LoginValidation {
            username_error,
            password_error,
        }
    }
}

/// Authentication flag for the current browser session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticated { username: String },
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated { .. })
    }

    pub fn username(&self) -> Option<&str> {
        match self {
            AuthState::Authenticated { username } => Some(username),
            AuthState::Unauthenticated => None,
        }
    }

    pub fn login(&mut self, username: impl Into<String>) {
        *self = AuthState::Authenticated {
            username: username.into(),
        };
    }

    pub fn logout(&mut self) {
        *self = AuthState::Unauthenticated;
    }

    /// Route to send the user to when the login page is opened
    pub fn login_page_redirect(&self) -> Option<&'static str> {
        self.is_authenticated().then_some(HOME_ROUTE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginPhase {
    Editing,
    Submitting,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Field errors were recorded; nothing else changed
    Rejected,
    /// The form is valid; wait `LOGIN_SIMULATED_DELAY_MS` then call `complete`
    Accepted { username: String },
    /// A submission is already in flight or finished
    Ignored,
}

/// Login page state: editing, then submitting, then completed
#[derive(Debug, Clone, PartialEq)]
pub struct LoginFlow {
    phase: LoginPhase,
    validation: LoginValidation,
    pending_username: Option<String>,
}

impl Default for LoginFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginFlow {
    pub fn new() -> Self {
        Self {
            phase: LoginPhase::Editing,
            validation: LoginValidation::default(),
            pending_username: None,
        }
    }

    pub fn phase(&self) -> LoginPhase {
        self.phase
    }

    pub fn validation(&self) -> &LoginValidation {
        &self.validation
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Verifying..."
        } else {
            "Sign in"
        }
    }

    pub fn submit(&mut self, form: &LoginForm) -> SubmitOutcome {
        if self.phase != LoginPhase::Editing {
            return SubmitOutcome::Ignored;
        }

        self.validation = form.validate();
        if !self.validation.is_valid() {
            return SubmitOutcome::Rejected;
        }

        self.phase = LoginPhase::Submitting;
        self.pending_username = Some(form.username.clone());
        SubmitOutcome::Accepted {
            username: form.username.clone(),
        }
    }

    /// Finish an accepted submission: mark the session authenticated and
    /// return the route to redirect to.
    pub fn complete(&mut self, auth: &mut AuthState) -> Option<&'static str> {
        if self.phase != LoginPhase::Submitting {
            return None;
        }

        let username = self.pending_username.take()?;
        auth.login(username);
        self.phase = LoginPhase::Completed;
        Some(HOME_ROUTE)
    }
}
