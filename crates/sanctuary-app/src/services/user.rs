use std::sync::Arc;

use sanctuary_core::types::User;
use sanctuary_core::{Gateway, Result, Role};

/// Current user and the demo role switcher.
#[derive(Clone)]
pub struct UserService {
    gateway: Arc<dyn Gateway>,
}

impl UserService {
    /// Service over `gateway`.
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self { gateway }
    }

    /// The signed-in user.
    pub async fn current_user(&self) -> Result<User> {
        self.gateway.current_user().await
    }

    /// Change `user_id`'s role; returns the updated user.
    pub async fn switch_role(&self, user_id: &str, role: Role) -> Result<User> {
        self.gateway.update_role(user_id, role).await
    }
}
