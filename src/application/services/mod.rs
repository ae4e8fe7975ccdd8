// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, contact::ContactCommandService},
        ports::{
            notification::ContactNotifier, security::CredentialVerifier, time::Clock,
        },
        queries::{
            articles::ArticleQueryService, auth::AuthQueryService,
            categories::CategoryQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        category::CategoryRepository,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub category_queries: Arc<CategoryQueryService>,
    pub auth_queries: Arc<AuthQueryService>,
    pub contact_commands: Arc<ContactCommandService>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        category_repo: Arc<dyn CategoryRepository>,
        credential_verifier: Arc<dyn CredentialVerifier>,
        contact_notifier: Arc<dyn ContactNotifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&category_repo),
            Arc::clone(&clock),
        ));

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));
        let category_queries = Arc::new(CategoryQueryService::new(Arc::clone(&category_repo)));
        let auth_queries = Arc::new(AuthQueryService::new(credential_verifier));
        let contact_commands = Arc::new(ContactCommandService::new(
            contact_notifier,
            Arc::clone(&clock),
        ));

        Self {
            article_commands,
            article_queries,
            category_queries,
            auth_queries,
            contact_commands,
        }
    }
}
