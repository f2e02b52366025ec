//! CLI errors and exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError` variants and CLI-level failures to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 130 is reserved for Ctrl+C (Unix standard: 128 + SIGINT).

use control_client::ClientError;
use control_client::error::{INVALID_PARAMS, METHOD_NOT_FOUND};

/// Structured exit codes for control-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled or generic failure, including application errors from the appliance.
    GeneralError = 1,

    /// Login rejected, access denied, or HTTP 401/403.
    ///
    /// Scripts should check credentials and the account's rights.
    AuthenticationFailed = 2,

    /// Network failure, timeout, or unusable server address.
    ///
    /// Scripts may retry with backoff.
    ConnectionError = 3,

    /// Bad input or a response that breaks the JSON-RPC contract.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Ctrl+C (128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Http(_) | ClientError::InvalidUrl(_) => ExitCode::ConnectionError,

            ClientError::HttpStatus {
                status: 401 | 403, ..
            } => ExitCode::AuthenticationFailed,
            ClientError::HttpStatus { .. } => ExitCode::GeneralError,

            ClientError::Rpc(e) if e.is_access_denied() => ExitCode::AuthenticationFailed,
            ClientError::Rpc(e) if e.code == INVALID_PARAMS || e.code == METHOD_NOT_FOUND => {
                ExitCode::ValidationError
            }
            ClientError::Rpc(_) => ExitCode::GeneralError,

            ClientError::InvalidResponse(_)
            | ClientError::Protocol(_)
            | ClientError::Serialization(_) => ExitCode::ValidationError,
        }
    }
}

/// Failures raised by the CLI itself rather than the client library.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Login did not yield a session.
    #[error("login as '{username}' failed")]
    LoginFailed {
        username: String,
        #[source]
        source: ClientError,
    },

    /// Command-line input that cannot be sent.
    #[error("{0}")]
    InvalidInput(String),

    /// Ctrl+C arrived while a command was running.
    #[error("cancelled")]
    Cancelled,
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::LoginFailed {
                source: ClientError::Rpc(_),
                ..
            } => ExitCode::AuthenticationFailed,
            CliError::LoginFailed { source, .. } => ExitCode::from(source),
            CliError::InvalidInput(_) => ExitCode::ValidationError,
            CliError::Cancelled => ExitCode::Interrupted,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(cli_err) = cause.downcast_ref::<CliError>() {
                return ExitCode::from(cli_err);
            }
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
        }
        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use control_client::RpcError;

    fn rpc(code: i64) -> ClientError {
        ClientError::Rpc(RpcError {
            code,
            message: "test".to_string(),
            data: None,
        })
    }

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::AuthenticationFailed.as_i32(), 2);
        assert_eq!(ExitCode::ConnectionError.as_i32(), 3);
        assert_eq!(ExitCode::ValidationError.as_i32(), 5);
        assert_eq!(ExitCode::Interrupted.as_i32(), 130);
    }

    #[test]
    fn test_rpc_codes() {
        assert_eq!(ExitCode::from(&rpc(1004)), ExitCode::AuthenticationFailed);
        assert_eq!(ExitCode::from(&rpc(-32602)), ExitCode::ValidationError);
        assert_eq!(ExitCode::from(&rpc(-32601)), ExitCode::ValidationError);
        assert_eq!(ExitCode::from(&rpc(1000)), ExitCode::GeneralError);
    }

    #[test]
    fn test_http_status() {
        let status = |status| ClientError::HttpStatus {
            status,
            url: "https://fw:4081/admin/api/jsonrpc".to_string(),
            body: String::new(),
        };
        assert_eq!(ExitCode::from(&status(401)), ExitCode::AuthenticationFailed);
        assert_eq!(ExitCode::from(&status(403)), ExitCode::AuthenticationFailed);
        assert_eq!(ExitCode::from(&status(500)), ExitCode::GeneralError);
    }

    #[test]
    fn test_contract_violations_are_validation_errors() {
        let err = ClientError::Protocol("both result and error".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationError);
        let err = ClientError::InvalidResponse("bad".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationError);
    }

    #[test]
    fn test_login_failure_exit_codes() {
        let err = CliError::LoginFailed {
            username: "admin".to_string(),
            source: rpc(1000),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::AuthenticationFailed);

        let err = CliError::LoginFailed {
            username: "admin".to_string(),
            source: ClientError::InvalidUrl("empty".to_string()),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::ConnectionError);

        let err = CliError::LoginFailed {
            username: "admin".to_string(),
            source: ClientError::HttpStatus {
                status: 401,
                url: "https://fw:4081/admin/api/jsonrpc".to_string(),
                body: String::new(),
            },
        };
        assert_eq!(ExitCode::from(&err), ExitCode::AuthenticationFailed);

        let err = CliError::LoginFailed {
            username: "admin".to_string(),
            source: ClientError::Protocol("neither result nor error".to_string()),
        };
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationError);
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let err = anyhow::Error::from(rpc(1004)).context("listing users");
        assert_eq!(err.exit_code(), ExitCode::AuthenticationFailed);

        let err: anyhow::Result<()> = Err(CliError::Cancelled).context("reading log");
        assert_eq!(err.unwrap_err().exit_code(), ExitCode::Interrupted);

        assert_eq!(anyhow::anyhow!("other").exit_code(), ExitCode::GeneralError);
    }
}
