//! Sign-in / sign-up form state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Accounts are not implemented. The form validates its own fields and the
//! page only logs and notifies on submit; nothing is sent or stored.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use classroom::GradeLevel;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::SignIn => Self::SignUp,
            Self::SignUp => Self::SignIn,
        }
    }

    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Self::SignIn => "Welcome Back",
            Self::SignUp => "Join Gurumitra",
        }
    }

    #[must_use]
    pub fn subtitle(self) -> &'static str {
        match self {
            Self::SignIn => "Sign in to your teacher account",
            Self::SignUp => "Create your teacher account to get started",
        }
    }

    #[must_use]
    pub fn submit_label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Create Account",
        }
    }

    /// Prompt and link text for switching to the other mode.
    #[must_use]
    pub fn switch_copy(self) -> (&'static str, &'static str) {
        match self {
            Self::SignIn => ("Don't have an account?", "Sign up"),
            Self::SignUp => ("Already have an account?", "Sign in"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub username: String,
    pub email: String,
    pub password: String,
    pub grades: Option<GradeLevel>,
}

impl AuthForm {
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// First empty required field, if any.
    ///
    /// # Errors
    ///
    /// Returns the first required field left empty, in form order.
    pub fn check(&self) -> Result<(), MissingAuthField> {
        if self.mode == AuthMode::SignUp && self.username.trim().is_empty() {
            return Err(MissingAuthField::Username);
        }
        if self.email.trim().is_empty() {
            return Err(MissingAuthField::Email);
        }
        if self.password.is_empty() {
            return Err(MissingAuthField::Password);
        }
        Ok(())
    }
}

/// Required auth field left empty on submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingAuthField {
    Username,
    Email,
    Password,
}

impl MissingAuthField {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Username => "Please enter your username",
            Self::Email => "Please enter your email address",
            Self::Password => "Please enter your password",
        }
    }

    #[must_use]
    pub fn hint(self) -> &'static str {
        match self {
            Self::Username => "Pick the name other teachers will see",
            Self::Email => "Your school or personal email works",
            Self::Password => "A password is required to continue",
        }
    }
}
