//! Auth service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    auth::{AuthServiceError, SessionUser, records::SessionDocument},
    store::StoreClient,
};

const SESSION: &str = "session";

#[derive(Debug, Clone)]
pub struct HttpAuthService {
    client: StoreClient,
}

impl HttpAuthService {
    #[must_use]
    pub fn new(client: StoreClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    #[tracing::instrument(name = "auth.service.current_user", skip(self), err)]
    async fn current_user(&self) -> Result<SessionUser, AuthServiceError> {
        self.client
            .get::<SessionDocument>(SESSION)
            .await?
            .map(SessionUser::from)
            .ok_or(AuthServiceError::Unauthenticated)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve the user behind the configured session token.
    async fn current_user(&self) -> Result<SessionUser, AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        auth::{Capability, Role},
        test::TestContext,
    };

    use super::*;

    #[tokio::test]
    async fn signed_out_session_is_unauthenticated() {
        let ctx = TestContext::new();

        let result = ctx.auth.current_user().await;

        assert!(
            matches!(result, Err(AuthServiceError::Unauthenticated)),
            "expected Unauthenticated, got {result:?}"
        );
    }

    #[tokio::test]
    async fn signed_in_employee_can_only_work_the_queue() -> TestResult {
        let ctx = TestContext::new();

        ctx.store
            .sign_in(SessionUser {
                uid: "staff-1".to_string(),
                email: "staff@example.com".to_string(),
                role: Role::Employee,
            })
            .await;

        let user = ctx.auth.current_user().await?;

        user.require(Capability::ViewOrders)?;
        user.require(Capability::UpdateOrderStatus)?;

        assert!(user.require(Capability::PlaceOrder).is_err());

        Ok(())
    }
}
