//! Session and role guard.

use log::{info, warn};
use shared::SettingsView;

use crate::domain::commands::auth::LoginCommand;
use crate::domain::errors::DomainError;
use crate::domain::models::{Role, Session};

struct Account {
    email: &'static str,
    password: &'static str,
    name: &'static str,
    role: Role,
}

/// Hard-coded credential check standing in for a real identity provider.
///
/// Two fixed accounts exist, one per role. Logout is a UI concern: the
/// frontend drops its `Session` and returns to the login screen.
pub struct AuthService {
    accounts: Vec<Account>,
}

impl AuthService {
    pub fn new() -> Self {
        Self {
            accounts: vec![
                Account {
                    email: "staff@example.com",
                    password: "password",
                    name: "Staff User",
                    role: Role::Staff,
                },
                Account {
                    email: "admin@example.com",
                    password: "password",
                    name: "Admin User",
                    role: Role::Admin,
                },
            ],
        }
    }

    pub fn login(&self, command: LoginCommand) -> Result<Session, DomainError> {
        let matched = self
            .accounts
            .iter()
            .find(|a| a.email == command.email && a.password == command.password);

        match matched {
            Some(account) => {
                info!("Login succeeded for {} ({})", account.email, account.role.label());
                Ok(Session {
                    email: account.email.to_string(),
                    name: account.name.to_string(),
                    role: account.role,
                })
            }
            None => {
                warn!("Login rejected for {}", command.email);
                Err(DomainError::InvalidCredential)
            }
        }
    }
}

impl Default for AuthService {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only projection of the current session for the settings page.
pub fn settings_view(session: &Session) -> SettingsView {
    SettingsView {
        name: session.name.clone(),
        email: session.email.clone(),
        role_label: session.role.label().to_string(),
    }
}
