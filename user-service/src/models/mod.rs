pub mod user;

pub use user::{is_valid_email, User, UserEnvelope, UserId, UserPage, UserUpdate};
