//! One method per ServerPilot API operation.
//!
//! Every method maps to a fixed path and verb and hands a parameter struct
//! to the shared executor in `client.rs`. Optional arguments are `Option`s
//! and are left out of the body entirely when `None`.

use crate::client::ServerPilot;
use crate::error::ApiError;
use crate::transport::Transport;
use crate::types::{
    ApiResponse, AppCreate, AppUpdate, DatabaseCreate, DatabaseUpdate, DatabaseUserPassword,
    NameParams, NewDatabaseUser, PasswordParams, ServerUpdate, SshKeyAdd, SshKeyRef, SslAdd,
    SslAuto, SslForce, SysUserCreate, Wordpress,
};

type ApiResult = Result<ApiResponse, ApiError>;

// ---------------------------------------------------------------------------
// Servers
// ---------------------------------------------------------------------------

impl<T: Transport> ServerPilot<T> {
    pub fn server_list(&self) -> ApiResult {
        self.get("servers")
    }

    /// Register a new server. `name` is 1-255 chars of `[a-z0-9.-]`.
    pub fn server_create(&self, name: &str) -> ApiResult {
        self.post("servers", &NameParams { name })
    }

    pub fn server_info(&self, id: &str) -> ApiResult {
        self.get(&format!("servers/{id}"))
    }

    pub fn server_delete(&self, id: &str) -> ApiResult {
        self.delete(&format!("servers/{id}"))
    }

    /// Toggle the firewall and automatic updates. `None` leaves a setting
    /// untouched; `Some(false)` turns it off.
    pub fn server_update(
        &self,
        id: &str,
        firewall: Option<bool>,
        autoupdates: Option<bool>,
    ) -> ApiResult {
        self.post(
            &format!("servers/{id}"),
            &ServerUpdate {
                firewall,
                autoupdates,
            },
        )
    }
}

// ---------------------------------------------------------------------------
// SSH keys
// ---------------------------------------------------------------------------

impl<T: Transport> ServerPilot<T> {
    pub fn sshkeys_list(&self) -> ApiResult {
        self.get("sshkeys")
    }

    pub fn sshkeys_add(&self, name: &str, public_key: &str) -> ApiResult {
        self.post("sshkeys", &SshKeyAdd { name, public_key })
    }

    pub fn sshkeys_retrieve(&self, id: &str) -> ApiResult {
        self.get(&format!("sshkeys/{id}"))
    }

    pub fn sshkeys_rename(&self, id: &str, name: &str) -> ApiResult {
        self.post(&format!("sshkeys/{id}"), &NameParams { name })
    }
}

// ---------------------------------------------------------------------------
// System users
// ---------------------------------------------------------------------------

impl<T: Transport> ServerPilot<T> {
    pub fn sysuser_list(&self) -> ApiResult {
        self.get("sysusers")
    }

    /// Create a system user on `server_id`. Without a password the user
    /// cannot log in with one.
    pub fn sysuser_create(
        &self,
        server_id: &str,
        name: &str,
        password: Option<&str>,
        sshkey_id: Option<&str>,
    ) -> ApiResult {
        self.post(
            "sysusers",
            &SysUserCreate {
                serverid: server_id,
                name,
                password,
                sshkey_id,
            },
        )
    }

    pub fn sysuser_info(&self, id: &str) -> ApiResult {
        self.get(&format!("sysusers/{id}"))
    }

    pub fn sysuser_delete(&self, id: &str) -> ApiResult {
        self.delete(&format!("sysusers/{id}"))
    }

    pub fn sysuser_update(&self, id: &str, password: &str) -> ApiResult {
        self.post(&format!("sysusers/{id}"), &PasswordParams { password })
    }

    pub fn sysuser_sshkey_add(&self, user_id: &str, sshkey_id: &str) -> ApiResult {
        self.post(&format!("sysusers/{user_id}/sshkeys"), &SshKeyRef { sshkey_id })
    }

    pub fn sysuser_sshkey_remove(&self, user_id: &str, sshkey_id: &str) -> ApiResult {
        self.delete(&format!("sysusers/{user_id}/sshkeys/{sshkey_id}"))
    }

    pub fn sysuser_sshkey_list(&self, user_id: &str) -> ApiResult {
        self.get(&format!("sysusers/{user_id}/sshkeys"))
    }
}

// ---------------------------------------------------------------------------
// Apps
// ---------------------------------------------------------------------------

impl<T: Transport> ServerPilot<T> {
    pub fn app_list(&self) -> ApiResult {
        self.get("apps")
    }

    /// Create an app owned by `sysuser_id`, which also picks the server.
    ///
    /// `domains` must be the complete list; `wordpress` installs WordPress.
    pub fn app_create(
        &self,
        name: &str,
        sysuser_id: &str,
        runtime: &str,
        domains: Option<&[String]>,
        wordpress: Option<&Wordpress>,
    ) -> ApiResult {
        self.post(
            "apps",
            &AppCreate {
                name,
                sysuserid: sysuser_id,
                runtime,
                domains,
                wordpress,
            },
        )
    }

    pub fn app_info(&self, id: &str) -> ApiResult {
        self.get(&format!("apps/{id}"))
    }

    pub fn app_delete(&self, id: &str) -> ApiResult {
        self.delete(&format!("apps/{id}"))
    }

    pub fn app_update(&self, id: &str, runtime: Option<&str>, domains: Option<&[String]>) -> ApiResult {
        self.post(&format!("apps/{id}"), &AppUpdate { runtime, domains })
    }
}

// ---------------------------------------------------------------------------
// SSL
// ---------------------------------------------------------------------------

impl<T: Transport> ServerPilot<T> {
    /// Enable AutoSSL. Requires a paid plan; undo with `ssl_delete`.
    pub fn ssl_auto(&self, app_id: &str) -> ApiResult {
        self.post(&format!("apps/{app_id}/ssl"), &SslAuto { auto: true })
    }

    pub fn ssl_add(&self, app_id: &str, key: &str, cert: &str, cacerts: Option<&str>) -> ApiResult {
        self.post(&format!("apps/{app_id}/ssl"), &SslAdd { key, cert, cacerts })
    }

    pub fn ssl_delete(&self, app_id: &str) -> ApiResult {
        self.delete(&format!("apps/{app_id}/ssl"))
    }

    pub fn ssl_force(&self, app_id: &str, force: bool) -> ApiResult {
        self.post(&format!("apps/{app_id}/ssl"), &SslForce { force })
    }
}

// ---------------------------------------------------------------------------
// Databases
// ---------------------------------------------------------------------------

impl<T: Transport> ServerPilot<T> {
    pub fn database_list(&self) -> ApiResult {
        self.get("dbs")
    }

    pub fn database_info(&self, id: &str) -> ApiResult {
        self.get(&format!("dbs/{id}"))
    }

    pub fn database_create(&self, app_id: &str, name: &str, username: &str, password: &str) -> ApiResult {
        self.post(
            "dbs",
            &DatabaseCreate {
                appid: app_id,
                name,
                user: NewDatabaseUser {
                    name: username,
                    password,
                },
            },
        )
    }

    pub fn database_delete(&self, id: &str) -> ApiResult {
        self.delete(&format!("dbs/{id}"))
    }

    /// Change the password of database user `user_id`.
    pub fn database_update(&self, id: &str, user_id: &str, password: &str) -> ApiResult {
        self.post(
            &format!("dbs/{id}"),
            &DatabaseUpdate {
                user: DatabaseUserPassword {
                    id: user_id,
                    password,
                },
            },
        )
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

impl<T: Transport> ServerPilot<T> {
    pub fn action_info(&self, action_id: &str) -> ApiResult {
        self.get(&format!("actions/{action_id}"))
    }
}
