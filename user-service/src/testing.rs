// Test Doubles
// In-memory users API that records every call

use crate::client::UserApi;
use crate::error::{ServiceError, ServiceResult};
use crate::models::{User, UserId, UserPage, UserUpdate};

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    List(u32),
    Get(UserId),
    Update(UserId, UserUpdate),
    Delete(UserId),
}

/// Scripted `UserApi` for view and command tests
#[derive(Default)]
pub struct MockUserApi {
    pages: HashMap<u32, Vec<User>>,
    users: HashMap<UserId, User>,
    failing_pages: HashSet<u32>,
    fail_get: bool,
    fail_update: bool,
    fail_delete: bool,
    calls: Mutex<Vec<ApiCall>>,
}

impl MockUserApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `users` for `page`; each user is also reachable by id
    pub fn with_page(mut self, page: u32, users: Vec<User>) -> Self {
        for user in &users {
            self.users.insert(user.id, user.clone());
        }
        self.pages.insert(page, users);
        self
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.users.insert(user.id, user);
        self
    }

    pub fn failing_page(mut self, page: u32) -> Self {
        self.failing_pages.insert(page);
        self
    }

    pub fn failing_get(mut self) -> Self {
        self.fail_get = true;
        self
    }

    pub fn failing_update(mut self) -> Self {
        self.fail_update = true;
        self
    }

    pub fn failing_delete(mut self) -> Self {
        self.fail_delete = true;
        self
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: ApiCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn server_error() -> ServiceError {
        ServiceError::Status {
            status: 500,
            url: "http://mock/api".to_string(),
        }
    }
}

#[async_trait::async_trait]
impl UserApi for MockUserApi {
    async fn list_users(&self, page: u32) -> ServiceResult<UserPage> {
        self.record(ApiCall::List(page));
        if self.failing_pages.contains(&page) {
            return Err(Self::server_error());
        }
        let data = self.pages.get(&page).cloned().unwrap_or_default();
        Ok(UserPage {
            page,
            per_page: 6,
            total: self.users.len() as u32,
            total_pages: self.pages.len() as u32,
            data,
        })
    }

    async fn get_user(&self, id: UserId) -> ServiceResult<User> {
        self.record(ApiCall::Get(id));
        if self.fail_get {
            return Err(Self::server_error());
        }
        self.users
            .get(&id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("/api/users/{}", id)))
    }

    async fn update_user(&self, id: UserId, update: &UserUpdate) -> ServiceResult<()> {
        self.record(ApiCall::Update(id, update.clone()));
        if self.fail_update {
            return Err(Self::server_error());
        }
        Ok(())
    }

    async fn delete_user(&self, id: UserId) -> ServiceResult<()> {
        self.record(ApiCall::Delete(id));
        if self.fail_delete {
            return Err(Self::server_error());
        }
        Ok(())
    }
}

/// A reqres-style fixture user; ids 1-4 have distinct names
pub fn sample_user(id: u64) -> User {
    let (first, last) = match id {
        1 => ("George", "Bluth"),
        2 => ("Janet", "Weaver"),
        3 => ("Emma", "Wong"),
        4 => ("Eve", "Holt"),
        _ => ("Charles", "Morris"),
    };
    User::new(
        id,
        first,
        last,
        format!("{}.{}@reqres.in", first.to_lowercase(), last.to_lowercase()),
    )
    .with_avatar(format!("https://reqres.in/img/faces/{}-image.jpg", id))
}
