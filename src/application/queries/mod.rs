pub mod articles;
pub mod auth;
pub mod categories;
