use crate::domain::errors::DomainError;

/// Role attached to an authenticated session.
///
/// Staff may view everything and check customers in; admins may
/// additionally create, reschedule, delete, and drag-move bookings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Staff,
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Uppercase badge text shown in the header.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Staff => "STAFF",
            Role::Admin => "ADMIN",
        }
    }
}

/// An authenticated identity. Exists only while logged in; logging out
/// drops the session and returns the UI to the login screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl Session {
    /// Gate for admin-only actions. `action` names the operation in the
    /// user-visible rejection, e.g. "delete bookings".
    pub fn require_admin(&self, action: &str) -> Result<(), DomainError> {
        if self.role.is_admin() {
            Ok(())
        } else {
            Err(DomainError::PermissionDenied(action.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff() -> Session {
        Session {
            email: "staff@example.com".to_string(),
            name: "Staff User".to_string(),
            role: Role::Staff,
        }
    }

    #[test]
    fn test_require_admin_rejects_staff() {
        let err = staff().require_admin("delete bookings").unwrap_err();
        assert_eq!(
            err,
            DomainError::PermissionDenied("delete bookings".to_string())
        );
        assert_eq!(err.to_string(), "Only admins can delete bookings");
    }

    #[test]
    fn test_require_admin_allows_admin() {
        let session = Session {
            role: Role::Admin,
            ..staff()
        };
        assert!(session.require_admin("delete bookings").is_ok());
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::Staff.label(), "STAFF");
        assert_eq!(Role::Admin.label(), "ADMIN");
        assert!(!Role::Staff.is_admin());
        assert!(Role::Admin.is_admin());
    }
}
