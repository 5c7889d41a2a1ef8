//! HTTP client for `POST /functions/v1/{name}`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::FunctionsConfig;

/// Longest accepted function name.
const MAX_NAME_LEN: usize = 64;

/// Errors from invoking a remote function.
#[derive(Debug, thiserror::Error)]
pub enum FunctionError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout, decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The function answered with a non-2xx status.
    #[error("Function returned HTTP {status}: {message}")]
    Remote { status: u16, message: String },

    /// The name is empty or contains characters outside `[A-Za-z0-9_-]`.
    #[error("Invalid function name: {0:?}")]
    InvalidName(String),
}

/// Invokes named functions on the hosted backend.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct FunctionsClient {
    client: reqwest::Client,
    config: FunctionsConfig,
}

impl FunctionsClient {
    pub fn new(config: FunctionsConfig) -> Result<Self, FunctionError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    /// Full URL of the function called `name`.
    pub fn function_url(&self, name: &str) -> String {
        format!("{}/functions/v1/{}", self.config.base_url, name)
    }

    /// Invoke `name` with a JSON body and decode the JSON response.
    pub async fn invoke<T, B>(&self, name: &str, body: &B) -> Result<T, FunctionError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        validate_name(name)?;

        let mut request = self.client.post(self.function_url(name)).json(body);
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key).header("apikey", key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(&body);
            tracing::warn!(function = name, status = status.as_u16(), %message, "Function call failed");
            return Err(FunctionError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        tracing::debug!(function = name, "Function call succeeded");
        Ok(response.json::<T>().await?)
    }
}

fn validate_name(name: &str) -> Result<(), FunctionError> {
    let valid = !name.is_empty()
        && name.len() <= MAX_NAME_LEN
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(FunctionError::InvalidName(name.to_string()))
    }
}

/// Use the body's `error` (or `message`) field when it is JSON, else the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .or_else(|| v.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string())
}
