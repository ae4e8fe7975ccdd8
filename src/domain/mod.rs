// src/domain/mod.rs
pub mod archive;
pub mod article;
pub mod category;
pub mod comment;
pub mod errors;
pub mod pagination;
