//! Request payloads and response wrappers for the ServerPilot API.
//!
//! # Design
//! Every create-or-update body is a small `Serialize` struct. Optional
//! fields are `Option<T>` with `skip_serializing_if`, so `None` never
//! reaches the wire while an explicit `Some(false)` or `Some("")` does.
//! Responses stay generic (`serde_json::Value` or raw text) and can be
//! converted to caller-chosen types through `ApiResponse::deserialize`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// WordPress install settings for `app_create`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Wordpress {
    pub site_title: String,
    pub admin_user: String,
    /// At least 8 characters.
    pub admin_password: String,
    pub admin_email: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct NameParams<'a> {
    pub name: &'a str,
}

#[derive(Debug, Default, Serialize)]
pub(crate) struct ServerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firewall: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoupdates: Option<bool>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SshKeyAdd<'a> {
    pub name: &'a str,
    pub public_key: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SysUserCreate<'a> {
    pub serverid: &'a str,
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sshkey_id: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct PasswordParams<'a> {
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SshKeyRef<'a> {
    pub sshkey_id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct AppCreate<'a> {
    pub name: &'a str,
    pub sysuserid: &'a str,
    pub runtime: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wordpress: Option<&'a Wordpress>,
}

#[derive(Debug, Serialize)]
pub(crate) struct AppUpdate<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<&'a [String]>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SslAuto {
    pub auto: bool,
}

/// `cacerts` is always sent; the API accepts `null` when there is no chain.
#[derive(Debug, Serialize)]
pub(crate) struct SslAdd<'a> {
    pub key: &'a str,
    pub cert: &'a str,
    pub cacerts: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct SslForce {
    pub force: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct DatabaseCreate<'a> {
    pub appid: &'a str,
    pub name: &'a str,
    pub user: NewDatabaseUser<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewDatabaseUser<'a> {
    pub name: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct DatabaseUpdate<'a> {
    pub user: DatabaseUserPassword<'a>,
}

#[derive(Debug, Serialize)]
pub(crate) struct DatabaseUserPassword<'a> {
    pub id: &'a str,
    pub password: &'a str,
}

/// Payload returned by a successful call.
///
/// `Json` when the client decodes responses, `Raw` when it was configured
/// with `decode = false`.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Json(Value),
    Raw(String),
}

impl ApiResponse {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::Raw(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&str> {
        match self {
            ApiResponse::Raw(body) => Some(body),
            ApiResponse::Json(_) => None,
        }
    }

    /// JSON value of the payload, parsing it first when it is raw text.
    pub fn into_json(self) -> Result<Value, ApiError> {
        match self {
            ApiResponse::Json(value) => Ok(value),
            ApiResponse::Raw(body) => {
                serde_json::from_str(&body).map_err(|e| ApiError::Deserialization(e.to_string()))
            }
        }
    }

    /// Convert the payload into a typed structure.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        match self {
            ApiResponse::Json(value) => {
                serde_json::from_value(value).map_err(|e| ApiError::Deserialization(e.to_string()))
            }
            ApiResponse::Raw(body) => {
                serde_json::from_str(&body).map_err(|e| ApiError::Deserialization(e.to_string()))
            }
        }
    }

    /// `actionid` of a mutating call, if the payload is decoded and has one.
    pub fn action_id(&self) -> Option<&str> {
        self.as_json()?.get("actionid")?.as_str()
    }
}

/// Standard `{"actionid": .., "data": ..}` response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actionid: Option<String>,
    pub data: T,
}

/// Progress of an asynchronous action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Open,
    Error,
    Success,
}

/// Result of `action_info`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Action {
    pub id: String,
    pub status: ActionStatus,
    #[serde(default)]
    pub serverid: Option<String>,
    #[serde(default)]
    pub datecreated: Option<i64>,
}

impl Action {
    pub fn is_done(&self) -> bool {
        self.status != ActionStatus::Open
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn server_update_omits_unset_fields() {
        let body = serde_json::to_value(ServerUpdate::default()).unwrap();
        assert_eq!(body, json!({}));
    }

    #[test]
    fn server_update_keeps_explicit_false() {
        let body = serde_json::to_value(ServerUpdate {
            firewall: Some(false),
            autoupdates: None,
        })
        .unwrap();
        assert_eq!(body, json!({"firewall": false}));
    }

    #[test]
    fn ssl_add_sends_null_cacerts() {
        let body = serde_json::to_value(SslAdd {
            key: "k",
            cert: "c",
            cacerts: None,
        })
        .unwrap();
        assert_eq!(body, json!({"key": "k", "cert": "c", "cacerts": null}));
    }

    #[test]
    fn raw_response_can_still_be_deserialized() {
        let resp = ApiResponse::Raw(r#"{"data":{"id":"a1","status":"success"}}"#.to_string());
        let env: Envelope<Action> = resp.deserialize().unwrap();
        assert_eq!(env.actionid, None);
        assert_eq!(env.data.id, "a1");
        assert!(env.data.is_done());
    }

    #[test]
    fn action_id_reads_decoded_payload() {
        let resp = ApiResponse::Json(json!({"actionid": "act1", "data": {}}));
        assert_eq!(resp.action_id(), Some("act1"));
        assert_eq!(ApiResponse::Raw("{}".to_string()).action_id(), None);
    }

    #[test]
    fn into_json_rejects_non_json_raw_body() {
        let err = ApiResponse::Raw("<html>".to_string()).into_json().unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn open_action_is_not_done() {
        let action: Action =
            serde_json::from_value(json!({"id": "a", "status": "open", "serverid": "s", "datecreated": 1403130000}))
                .unwrap();
        assert!(!action.is_done());
        assert_eq!(action.serverid.as_deref(), Some("s"));
    }
}
