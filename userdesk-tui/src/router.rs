// Router
// Maps the client-side paths onto the three screens

use std::fmt;
use std::str::FromStr;

use user_service::UserId;

/// A client-side location. The user identifier is the only state that
/// crosses from one screen to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/` - login stub
    Login,
    /// `/users` - paginated list
    Users,
    /// `/edit/{id}` - edit form for one user
    EditUser(UserId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteError(pub String);

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "No route matches '{}'", self.0)
    }
}

impl std::error::Error for RouteError {}

impl Route {
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim();
        let normalized = if trimmed.len() > 1 {
            trimmed.trim_end_matches('/')
        } else {
            trimmed
        };

        match normalized {
            "/" => Ok(Route::Login),
            "/users" => Ok(Route::Users),
            other => other
                .strip_prefix("/edit/")
                .filter(|id| !id.contains('/'))
                .and_then(|id| id.parse::<UserId>().ok())
                .map(Route::EditUser)
                .ok_or_else(|| RouteError(path.to_string())),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/".to_string(),
            Route::Users => "/users".to_string(),
            Route::EditUser(id) => format!("/edit/{}", id),
        }
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
