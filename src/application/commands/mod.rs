pub mod articles;
pub mod contact;
