//! Session Records

use serde::Deserialize;

use crate::auth::{Role, SessionUser};

/// Body of the store's session endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SessionDocument {
    pub uid: String,
    pub email: String,
    pub role: Option<String>,
}

impl From<SessionDocument> for SessionUser {
    fn from(document: SessionDocument) -> Self {
        Self {
            role: Role::from_name(document.role.as_deref()),
            uid: document.uid,
            email: document.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn missing_role_reads_as_customer() -> TestResult {
        let document: SessionDocument =
            serde_json::from_value(json!({ "uid": "user-1", "email": "ana@example.com" }))?;

        let user = SessionUser::from(document);

        assert_eq!(user.role, Role::Customer);
        assert_eq!(user.uid, "user-1");

        Ok(())
    }

    #[test]
    fn reads_staff_roles() -> TestResult {
        let document: SessionDocument =
            serde_json::from_value(json!({ "uid": "user-2", "role": "employee" }))?;

        assert_eq!(SessionUser::from(document).role, Role::Employee);

        Ok(())
    }
}
