//! `Users.*` methods for [`Session`].

use serde::Serialize;

use crate::client::Session;
use crate::error::Result;
use crate::models::{BulkResult, CreateResults, KId, ListPage, SearchQuery, User};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GetParams<'a> {
    query: SearchQuery,
    domain_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateParams<'a> {
    users: &'a [User],
    domain_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SetParams<'a> {
    user_ids: &'a [KId],
    details: &'a User,
    domain_id: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RemoveParams<'a> {
    user_ids: &'a [KId],
    domain_id: &'a str,
}

impl Session {
    /// List users of `domain_id` matching `query`. The page may carry warnings.
    pub async fn get_users(
        &mut self,
        query: &SearchQuery,
        domain_id: &str,
    ) -> Result<ListPage<User>> {
        let params = GetParams {
            query: query.normalized(),
            domain_id,
        };
        self.call("Users.get", &params).await
    }

    /// Create users in `domain_id` (only the local domain accepts new users).
    pub async fn create_users(&mut self, users: &[User], domain_id: &str) -> Result<CreateResults> {
        self.call("Users.create", &CreateParams { users, domain_id })
            .await
    }

    pub async fn set_users(
        &mut self,
        user_ids: &[KId],
        details: &User,
        domain_id: &str,
    ) -> Result<BulkResult> {
        let params = SetParams {
            user_ids,
            details,
            domain_id,
        };
        self.call("Users.set", &params).await
    }

    pub async fn remove_users(&mut self, user_ids: &[KId], domain_id: &str) -> Result<BulkResult> {
        self.call("Users.remove", &RemoveParams { user_ids, domain_id })
            .await
    }
}
