//! Client for the hosted KV store's REST API.
//!
//! Vercel KV speaks the Upstash REST protocol: every command is a `POST` to
//! the base URL whose body is the command as a JSON array (`["GET", "key"]`),
//! authorized with a bearer token. Replies are `{"result": ...}` on success
//! and `{"error": "..."}` otherwise.
//!
//! Values follow the JavaScript SDK's conventions so records written here can
//! be read by the application: strings are stored verbatim, everything else as
//! JSON text, and reads parse JSON where possible.

use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::config::KvCredentials;

/// Key written and read back by [`KvClient::ping`].
pub const PING_KEY: &str = "setup_test";
const PING_VALUE: &str = "success";

/// Errors returned by [`KvClient`].
#[derive(Debug, Error)]
pub enum KvError {
    #[error("invalid KV REST API URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("KV request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("KV store responded with HTTP {status}: {message}")]
    Status { status: StatusCode, message: String },
    #[error("KV store rejected command {command}: {message}")]
    Command { command: String, message: String },
    #[error("KV reply carried neither a result nor an error")]
    MalformedReply,
    #[error("failed to encode value for key '{key}': {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
}

/// REST client bound to one KV database.
#[derive(Debug, Clone)]
pub struct KvClient {
    http: reqwest::Client,
    base_url: Url,
    token: String,
}

impl KvClient {
    pub fn new(credentials: &KvCredentials) -> Result<Self, KvError> {
        let base_url =
            Url::parse(&credentials.rest_api_url).map_err(|source| KvError::InvalidUrl {
                url: credentials.rest_api_url.clone(),
                source,
            })?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            token: credentials.rest_api_token.clone(),
        })
    }

    /// Reads `key`. Returns `None` when the key does not exist.
    pub async fn get(&self, key: &str) -> Result<Option<Value>, KvError> {
        let result = self.command(&["GET", key]).await?;
        Ok(decode_value(result))
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub async fn set<T>(&self, key: &str, value: &T) -> Result<(), KvError>
    where
        T: Serialize + ?Sized,
    {
        let encoded = encode_value(value).map_err(|source| KvError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.command(&["SET", key, encoded.as_str()]).await?;
        Ok(())
    }

    /// Round-trips a marker value to prove the store accepts writes and reads.
    pub async fn ping(&self) -> Result<bool, KvError> {
        self.set(PING_KEY, PING_VALUE).await?;
        let read_back = self.get(PING_KEY).await?;
        Ok(read_back.as_ref().and_then(Value::as_str) == Some(PING_VALUE))
    }

    async fn command(&self, args: &[&str]) -> Result<Value, KvError> {
        let name = args.first().copied().unwrap_or_default().to_string();
        log::debug!("KV command {} {:?}", name, args.get(1));

        let response = self
            .http
            .post(self.base_url.clone())
            .bearer_auth(&self.token)
            .json(args)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let reply: Option<Value> = serde_json::from_str(&body).ok();

        if let Some(message) = reply
            .as_ref()
            .and_then(|r| r.get("error"))
            .and_then(Value::as_str)
        {
            return Err(KvError::Command {
                command: name,
                message: message.to_string(),
            });
        }
        if !status.is_success() {
            return Err(KvError::Status {
                status,
                message: body,
            });
        }

        reply
            .and_then(|mut r| r.get_mut("result").map(Value::take))
            .ok_or(KvError::MalformedReply)
    }
}

fn encode_value<T>(value: &T) -> serde_json::Result<String>
where
    T: Serialize + ?Sized,
{
    match serde_json::to_value(value)? {
        Value::String(raw) => Ok(raw),
        other => serde_json::to_string(&other),
    }
}

fn decode_value(result: Value) -> Option<Value> {
    match result {
        Value::Null => None,
        Value::String(raw) => {
            Some(serde_json::from_str(&raw).unwrap_or(Value::String(raw)))
        }
        other => Some(other),
    }
}
