// Requests
// Spawns API calls off the UI loop and routes their results back to it

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;
use user_service::{ServiceResult, User, UserApi, UserId, UserPage, UserUpdate};

/// Identifies one mounted view. A response tagged with an older token
/// belongs to a view that is gone and must be dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewToken(u64);

impl ViewToken {
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Sender for API responses
pub type ApiSender = mpsc::UnboundedSender<ApiEvent>;

/// Receiver for API responses
pub type ApiReceiver = mpsc::UnboundedReceiver<ApiEvent>;

pub fn api_channel() -> (ApiSender, ApiReceiver) {
    mpsc::unbounded_channel()
}

/// Completed API calls, tagged with the view that issued them
#[derive(Debug)]
pub enum ApiEvent {
    PageLoaded {
        token: ViewToken,
        page: u32,
        result: ServiceResult<UserPage>,
    },

    UserLoaded {
        token: ViewToken,
        id: UserId,
        result: ServiceResult<User>,
    },

    UserUpdated {
        token: ViewToken,
        id: UserId,
        result: ServiceResult<()>,
    },

    UserDeleted {
        token: ViewToken,
        id: UserId,
        result: ServiceResult<()>,
    },
}

impl ApiEvent {
    pub fn token(&self) -> ViewToken {
        match self {
            ApiEvent::PageLoaded { token, .. }
            | ApiEvent::UserLoaded { token, .. }
            | ApiEvent::UserUpdated { token, .. }
            | ApiEvent::UserDeleted { token, .. } => *token,
        }
    }
}

/// Issues API calls as background tasks. Nothing is cancelled: a call
/// outlives the view that made it and its result is filtered on arrival.
#[derive(Clone)]
pub struct RequestDispatcher {
    api: Arc<dyn UserApi>,
    sender: ApiSender,
}

impl RequestDispatcher {
    pub fn new(api: Arc<dyn UserApi>, sender: ApiSender) -> Self {
        Self { api, sender }
    }

    pub fn list_users(&self, token: ViewToken, page: u32) {
        debug!(page, "requesting users page");
        let api = Arc::clone(&self.api);
        let tx = self.sender.clone();
        tokio::spawn(async move {
            let result = api.list_users(page).await;
            let _ = tx.send(ApiEvent::PageLoaded {
                token,
                page,
                result,
            });
        });
    }

    pub fn get_user(&self, token: ViewToken, id: UserId) {
        debug!(%id, "requesting user");
        let api = Arc::clone(&self.api);
        let tx = self.sender.clone();
        tokio::spawn(async move {
            let result = api.get_user(id).await;
            let _ = tx.send(ApiEvent::UserLoaded { token, id, result });
        });
    }

    pub fn update_user(&self, token: ViewToken, id: UserId, update: UserUpdate) {
        debug!(%id, "updating user");
        let api = Arc::clone(&self.api);
        let tx = self.sender.clone();
        tokio::spawn(async move {
            let result = api.update_user(id, &update).await;
            let _ = tx.send(ApiEvent::UserUpdated { token, id, result });
        });
    }

    pub fn delete_user(&self, token: ViewToken, id: UserId) {
        debug!(%id, "deleting user");
        let api = Arc::clone(&self.api);
        let tx = self.sender.clone();
        tokio::spawn(async move {
            let result = api.delete_user(id).await;
            let _ = tx.send(ApiEvent::UserDeleted { token, id, result });
        });
    }
}
