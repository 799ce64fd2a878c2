//! Auth data models.

use std::fmt::{Display, Formatter, Result as FmtResult};

use dbesto::CustomerRef;

use crate::auth::AuthServiceError;

/// Which part of the application a user works in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Role {
    #[default]
    Customer,
    Owner,
    Employee,
}

impl Role {
    /// Unknown or missing role names fall back to [`Role::Customer`].
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(|name| name.trim().to_ascii_lowercase()).as_deref() {
            Some("owner") => Self::Owner,
            Some("employee") => Self::Employee,
            _ => Self::Customer,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Owner => "owner",
            Self::Employee => "employee",
        }
    }

    /// Whether users with this role may perform `capability`.
    pub fn allows(self, capability: Capability) -> bool {
        match capability {
            Capability::BrowseMenu => true,
            Capability::PlaceOrder => self == Self::Customer,
            Capability::ManageMenu => self == Self::Owner,
            Capability::ViewOrders | Capability::UpdateOrderStatus => self == Self::Employee,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Actions the application shell gates by role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    BrowseMenu,
    PlaceOrder,
    ManageMenu,
    ViewOrders,
    UpdateOrderStatus,
}

impl Display for Capability {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::BrowseMenu => "browse the menu",
            Self::PlaceOrder => "place orders",
            Self::ManageMenu => "manage the menu",
            Self::ViewOrders => "view orders",
            Self::UpdateOrderStatus => "update order status",
        })
    }
}

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    /// Identity assigned by the auth provider.
    pub uid: String,

    pub email: String,

    pub role: Role,
}

impl SessionUser {
    /// Check that the user's role grants `capability`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::Forbidden`] when it does not.
    pub fn require(&self, capability: Capability) -> Result<(), AuthServiceError> {
        if self.role.allows(capability) {
            Ok(())
        } else {
            Err(AuthServiceError::Forbidden {
                role: self.role,
                capability,
            })
        }
    }

    /// Reference attached to orders this user submits.
    pub fn customer_ref(&self) -> CustomerRef {
        CustomerRef {
            uid: self.uid.clone(),
            email: self.email.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> SessionUser {
        SessionUser {
            uid: "user-1".to_string(),
            email: "ana@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn role_names_default_to_customer() {
        assert_eq!(Role::from_name(Some("Owner")), Role::Owner);
        assert_eq!(Role::from_name(Some(" employee ")), Role::Employee);
        assert_eq!(Role::from_name(Some("admin")), Role::Customer);
        assert_eq!(Role::from_name(None), Role::Customer);
    }

    #[test]
    fn every_role_can_browse() {
        for role in [Role::Customer, Role::Owner, Role::Employee] {
            assert!(role.allows(Capability::BrowseMenu), "{role} should browse");
        }
    }

    #[test]
    fn capabilities_follow_roles() {
        assert!(Role::Customer.allows(Capability::PlaceOrder));
        assert!(!Role::Customer.allows(Capability::ManageMenu));
        assert!(!Role::Customer.allows(Capability::ViewOrders));

        assert!(Role::Owner.allows(Capability::ManageMenu));
        assert!(!Role::Owner.allows(Capability::PlaceOrder));

        assert!(Role::Employee.allows(Capability::ViewOrders));
        assert!(Role::Employee.allows(Capability::UpdateOrderStatus));
        assert!(!Role::Employee.allows(Capability::ManageMenu));
    }

    #[test]
    fn require_reports_role_and_capability() {
        let result = user(Role::Employee).require(Capability::PlaceOrder);

        assert!(
            matches!(
                result,
                Err(AuthServiceError::Forbidden {
                    role: Role::Employee,
                    capability: Capability::PlaceOrder,
                })
            ),
            "expected Forbidden, got {result:?}"
        );
    }

    #[test]
    fn customer_ref_copies_identity() {
        let reference = user(Role::Customer).customer_ref();

        assert_eq!(reference.uid, "user-1");
        assert_eq!(reference.email, "ana@example.com");
    }
}
