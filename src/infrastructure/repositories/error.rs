// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_ARTICLE_CATEGORY: &str = "articles_category_id_fkey";
const CNT_ARTICLE_VIEW_COUNT_CHECK: &str = "articles_view_count_non_negative_chk";
const CNT_CATEGORY_NAME: &str = "categories_name_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            match db_err.constraint() {
                Some(CNT_ARTICLE_CATEGORY) => {
                    return DomainError::Integrity("referenced category does not exist".into());
                }
                Some(CNT_CATEGORY_NAME) => {
                    return DomainError::Conflict("category name already exists".into());
                }
                Some(CNT_ARTICLE_VIEW_COUNT_CHECK) => {
                    return DomainError::Validation("view count cannot be negative".into());
                }
                // Unnamed or unknown constraints are classified by SQLSTATE.
                _ => {}
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::Integrity("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
