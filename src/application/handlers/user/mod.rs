//! User query handlers.

mod find_user;
mod list_users;

pub use find_user::{FindUserHandler, FindUserQuery};
pub use list_users::ListUsersHandler;
