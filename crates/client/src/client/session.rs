//! Login, logout and `Session.*` methods for [`Session`].
//!
//! # What this module handles:
//! - Obtaining and dropping the session token
//! - Session variables, configuration timestamps and login details
//!
//! # What this module does NOT handle:
//! - Token storage (in [`crate::auth::AuthState`])
//! - Re-login after expiry: callers decide when to log in again

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::Session;
use crate::error::Result;
use crate::models::{ApiApplication, ClientTimestamp, KId, LoginType};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LoginParams<'a> {
    user_name: &'a str,
    password: &'a str,
    application: &'a ApiApplication,
}

#[derive(Deserialize)]
struct TokenResult {
    token: String,
}

#[derive(Serialize)]
struct VariableName<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct Variable<'a> {
    name: &'a str,
    value: &'a str,
}

#[derive(Deserialize)]
struct ValueResult {
    value: String,
}

#[derive(Deserialize)]
struct NameResult {
    name: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Timestamps {
    client_timestamp_list: Vec<ClientTimestamp>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfirmParams<'a> {
    client_timestamp_list: &'a [ClientTimestamp],
}

#[derive(Deserialize)]
struct ConfirmResult {
    confirmed: bool,
}

#[derive(Deserialize)]
struct IdResult {
    id: KId,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginTypeResult {
    login_type: LoginType,
}

impl Session {
    /// Log in and keep the returned token for subsequent calls.
    ///
    /// `application` defaults to the identity configured on the builder.
    /// On failure the session keeps whatever token it had before.
    pub async fn login(
        &mut self,
        user_name: &str,
        password: &str,
        application: Option<&ApiApplication>,
    ) -> Result<()> {
        let application = application.cloned().unwrap_or_else(|| self.application.clone());
        let params = LoginParams {
            user_name,
            password,
            application: &application,
        };
        let result: TokenResult = self.call("Session.login", &params).await?;
        self.auth.set_token(result.token);
        debug!(user = user_name, "logged in");
        Ok(())
    }

    /// Log out. The token is dropped even if the call fails.
    pub async fn logout(&mut self) -> Result<()> {
        let result = self.call_void_no_params("Session.logout").await;
        self.auth.clear();
        result
    }

    /// Token against cross-site request forgery, for use in the `X-Token` header of browser requests.
    pub async fn get_csrf_token(&mut self) -> Result<String> {
        let result: TokenResult = self.call_no_params("Session.getCsrfToken").await?;
        Ok(result.token)
    }

    /// Name of the logged-in user.
    pub async fn get_user_name(&mut self) -> Result<String> {
        let result: NameResult = self.call_no_params("Session.getUserName").await?;
        Ok(result.name)
    }

    pub async fn get_session_variable(&mut self, name: &str) -> Result<String> {
        let result: ValueResult = self
            .call("Session.getSessionVariable", &VariableName { name })
            .await?;
        Ok(result.value)
    }

    pub async fn set_session_variable(&mut self, name: &str, value: &str) -> Result<()> {
        self.call_void("Session.setSessionVariable", &Variable { name, value })
            .await
    }

    /// Discard configuration changes made in this session but not yet applied.
    pub async fn reset_session(&mut self) -> Result<()> {
        self.call_void_no_params("Session.reset").await
    }

    pub async fn get_config_timestamp(&mut self) -> Result<Vec<ClientTimestamp>> {
        let result: Timestamps = self.call_no_params("Session.getConfigTimestamp").await?;
        Ok(result.client_timestamp_list)
    }

    /// Confirm a configuration change that requires confirmation
    /// (e.g. after changing the admin interface). Returns `true` when accepted.
    pub async fn confirm_config(&mut self, timestamps: &[ClientTimestamp]) -> Result<bool> {
        let params = ConfirmParams {
            client_timestamp_list: timestamps,
        };
        let result: ConfirmResult = self.call("Session.confirmConfig", &params).await?;
        Ok(result.confirmed)
    }

    /// Id of the interface the client is connected through.
    pub async fn get_connected_interface(&mut self) -> Result<KId> {
        let result: IdResult = self.call_no_params("Session.getConnectedInterface").await?;
        Ok(result.id)
    }

    pub async fn get_login_type(&mut self) -> Result<LoginType> {
        let result: LoginTypeResult = self.call_no_params("Session.getLoginType").await?;
        Ok(result.login_type)
    }
}
