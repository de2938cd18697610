use std::{
    collections::HashMap,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    extract::{Path, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Credentials accepted by `app()`.
pub const API_ID: &str = "mock-client";
pub const API_KEY: &str = "mock-key";

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Server {
    pub id: String,
    pub name: String,
    pub firewall: bool,
    pub autoupdates: bool,
    pub datecreated: u64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SshKey {
    pub id: String,
    pub name: String,
    pub public_key: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SysUser {
    pub id: String,
    pub serverid: String,
    pub name: String,
    #[serde(default)]
    pub sshkeys: Vec<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Ssl {
    pub auto: bool,
    pub force: bool,
    pub cert: Option<String>,
    pub cacerts: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct App {
    pub id: String,
    pub name: String,
    pub sysuserid: String,
    pub serverid: String,
    pub runtime: String,
    pub domains: Vec<String>,
    pub wordpress: bool,
    pub ssl: Option<Ssl>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DbUser {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Database {
    pub id: String,
    pub name: String,
    pub appid: String,
    pub serverid: String,
    pub user: DbUser,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Action {
    pub id: String,
    pub status: String,
    pub serverid: Option<String>,
    pub datecreated: u64,
}

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct CreateServer {
    name: String,
}

#[derive(Deserialize)]
struct UpdateServer {
    firewall: Option<bool>,
    autoupdates: Option<bool>,
}

#[derive(Deserialize)]
struct CreateSshKey {
    name: String,
    public_key: String,
}

#[derive(Deserialize)]
struct RenameSshKey {
    name: String,
}

#[derive(Deserialize)]
struct CreateSysUser {
    serverid: String,
    name: String,
    password: Option<String>,
    sshkey_id: Option<String>,
}

#[derive(Deserialize)]
struct UpdateSysUser {
    password: String,
}

#[derive(Deserialize)]
struct AttachSshKey {
    sshkey_id: String,
}

#[derive(Deserialize)]
struct WordpressParams {
    site_title: String,
    admin_user: String,
    admin_password: String,
    admin_email: String,
}

#[derive(Deserialize)]
struct CreateApp {
    name: String,
    sysuserid: String,
    runtime: String,
    domains: Option<Vec<String>>,
    wordpress: Option<WordpressParams>,
}

#[derive(Deserialize)]
struct UpdateApp {
    runtime: Option<String>,
    domains: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct SslParams {
    auto: Option<bool>,
    force: Option<bool>,
    key: Option<String>,
    cert: Option<String>,
    cacerts: Option<String>,
}

#[derive(Deserialize)]
struct NewDbUser {
    name: String,
    password: String,
}

#[derive(Deserialize)]
struct CreateDatabase {
    appid: String,
    name: String,
    user: NewDbUser,
}

#[derive(Deserialize)]
struct DbUserPassword {
    id: String,
    password: String,
}

#[derive(Deserialize)]
struct UpdateDatabase {
    user: DbUserPassword,
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct Store {
    pub servers: HashMap<String, Server>,
    pub sshkeys: HashMap<String, SshKey>,
    pub sysusers: HashMap<String, SysUser>,
    pub apps: HashMap<String, App>,
    pub dbs: HashMap<String, Database>,
    pub actions: HashMap<String, Action>,
}

impl Store {
    /// Record a completed action and return its id.
    fn record_action(&mut self, serverid: Option<&str>) -> String {
        let action = Action {
            id: new_id(),
            status: "success".to_string(),
            serverid: serverid.map(str::to_string),
            datecreated: now(),
        };
        let id = action.id.clone();
        self.actions.insert(id.clone(), action);
        id
    }
}

pub type Db = Arc<RwLock<Store>>;

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    authorization: Arc<str>,
}

/// Error response in the service's `{"error": {"message": ..}}` shape, or
/// with an empty body when `message` is `None`.
#[derive(Debug)]
pub struct ApiFailure {
    status: StatusCode,
    message: Option<String>,
}

impl ApiFailure {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: Some(message.into()),
        }
    }

    fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: Some(message.into()),
        }
    }

    fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: None,
        }
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        match self.message {
            Some(message) => (self.status, Json(json!({"error": {"message": message}}))).into_response(),
            None => self.status.into_response(),
        }
    }
}

type ApiResult = Result<Json<Value>, ApiFailure>;

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

pub fn app() -> Router {
    app_with_credentials(API_ID, API_KEY)
}

/// Router under `/v1` that only accepts the given basic auth credentials.
pub fn app_with_credentials(id: &str, key: &str) -> Router {
    let state = AppState {
        db: Arc::new(RwLock::new(Store::default())),
        authorization: format!("Basic {}", STANDARD.encode(format!("{id}:{key}"))).into(),
    };
    let api = Router::new()
        .route("/servers", get(list_servers).post(create_server))
        .route("/servers/{id}", get(get_server).post(update_server).delete(delete_server))
        .route("/sshkeys", get(list_sshkeys).post(create_sshkey))
        .route("/sshkeys/{id}", get(get_sshkey).post(rename_sshkey))
        .route("/sysusers", get(list_sysusers).post(create_sysuser))
        .route("/sysusers/{id}", get(get_sysuser).post(update_sysuser).delete(delete_sysuser))
        .route("/sysusers/{id}/sshkeys", get(list_sysuser_sshkeys).post(attach_sysuser_sshkey))
        .route("/sysusers/{id}/sshkeys/{key_id}", axum::routing::delete(detach_sysuser_sshkey))
        .route("/apps", get(list_apps).post(create_app))
        .route("/apps/{id}", get(get_app).post(update_app).delete(delete_app))
        .route("/apps/{id}/ssl", post(update_ssl).delete(delete_ssl))
        .route("/dbs", get(list_dbs).post(create_db))
        .route("/dbs/{id}", get(get_db).post(update_db).delete(delete_db))
        .route("/actions/{id}", get(get_action))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state);
    Router::new().nest("/v1", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn require_auth(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let supplied = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    tracing::debug!(method = %request.method(), uri = %request.uri(), "request");
    if supplied != Some(&*state.authorization) {
        tracing::warn!(uri = %request.uri(), "rejected request with invalid credentials");
        return ApiFailure {
            status: StatusCode::UNAUTHORIZED,
            message: Some("Invalid API credentials.".to_string()),
        }
        .into_response();
    }
    next.run(request).await
}

fn parse<T: DeserializeOwned>(body: &str) -> Result<T, ApiFailure> {
    serde_json::from_str(body).map_err(|e| ApiFailure::bad_request(e.to_string()))
}

fn list<T: Serialize>(items: impl Iterator<Item = T>) -> Json<Value> {
    Json(json!({ "data": items.collect::<Vec<_>>() }))
}

fn data<T: Serialize>(item: &T) -> Json<Value> {
    Json(json!({ "data": item }))
}

fn acted<T: Serialize>(action: String, item: &T) -> Json<Value> {
    Json(json!({ "actionid": action, "data": item }))
}

fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

fn now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

fn valid_server_name(name: &str) -> bool {
    (1..=255).contains(&name.len())
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-')
}

fn valid_app_name(name: &str) -> bool {
    (3..=30).contains(&name.len()) && name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
}

// ---------------------------------------------------------------------------
// Servers
// ---------------------------------------------------------------------------

async fn list_servers(State(state): State<AppState>) -> Json<Value> {
    list(state.db.read().await.servers.values())
}

async fn create_server(State(state): State<AppState>, body: String) -> ApiResult {
    let input: CreateServer = parse(&body)?;
    if !valid_server_name(&input.name) {
        return Err(ApiFailure::bad_request("Server name is invalid."));
    }
    let mut db = state.db.write().await;
    if db.servers.values().any(|s| s.name == input.name) {
        return Err(ApiFailure::conflict("A server with that name already exists."));
    }
    let server = Server {
        id: new_id(),
        name: input.name,
        firewall: true,
        autoupdates: true,
        datecreated: now(),
    };
    let action = db.record_action(Some(server.id.as_str()));
    db.servers.insert(server.id.clone(), server.clone());
    Ok(acted(action, &server))
}

async fn get_server(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let db = state.db.read().await;
    db.servers.get(&id).map(data).ok_or_else(ApiFailure::not_found)
}

async fn update_server(State(state): State<AppState>, Path(id): Path<String>, body: String) -> ApiResult {
    let input: UpdateServer = parse(&body)?;
    let mut db = state.db.write().await;
    let server = db.servers.get_mut(&id).ok_or_else(ApiFailure::not_found)?;
    if let Some(firewall) = input.firewall {
        server.firewall = firewall;
    }
    if let Some(autoupdates) = input.autoupdates {
        server.autoupdates = autoupdates;
    }
    let server = server.clone();
    let action = db.record_action(Some(id.as_str()));
    Ok(acted(action, &server))
}

async fn delete_server(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let mut db = state.db.write().await;
    db.servers.remove(&id).ok_or_else(ApiFailure::not_found)?;
    db.sysusers.retain(|_, u| u.serverid != id);
    db.apps.retain(|_, a| a.serverid != id);
    db.dbs.retain(|_, d| d.serverid != id);
    let action = db.record_action(Some(id.as_str()));
    Ok(acted(action, &json!({})))
}

// ---------------------------------------------------------------------------
// SSH keys
// ---------------------------------------------------------------------------

async fn list_sshkeys(State(state): State<AppState>) -> Json<Value> {
    list(state.db.read().await.sshkeys.values())
}

async fn create_sshkey(State(state): State<AppState>, body: String) -> ApiResult {
    let input: CreateSshKey = parse(&body)?;
    if !input.public_key.starts_with("ssh-") {
        return Err(ApiFailure::bad_request("Public key is not a valid SSH key."));
    }
    let mut db = state.db.write().await;
    let key = SshKey {
        id: new_id(),
        name: input.name,
        public_key: input.public_key,
    };
    db.sshkeys.insert(key.id.clone(), key.clone());
    let action = db.record_action(None);
    Ok(acted(action, &key))
}

async fn get_sshkey(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let db = state.db.read().await;
    db.sshkeys.get(&id).map(data).ok_or_else(ApiFailure::not_found)
}

async fn rename_sshkey(State(state): State<AppState>, Path(id): Path<String>, body: String) -> ApiResult {
    let input: RenameSshKey = parse(&body)?;
    let mut db = state.db.write().await;
    let key = db.sshkeys.get_mut(&id).ok_or_else(ApiFailure::not_found)?;
    key.name = input.name;
    let key = key.clone();
    let action = db.record_action(None);
    Ok(acted(action, &key))
}

// ---------------------------------------------------------------------------
// System users
// ---------------------------------------------------------------------------

async fn list_sysusers(State(state): State<AppState>) -> Json<Value> {
    list(state.db.read().await.sysusers.values())
}

async fn create_sysuser(State(state): State<AppState>, body: String) -> ApiResult {
    let input: CreateSysUser = parse(&body)?;
    if input.password.as_deref().is_some_and(|p| p.len() < 8) {
        return Err(ApiFailure::bad_request("Password must be at least 8 characters."));
    }
    let mut db = state.db.write().await;
    if !db.servers.contains_key(&input.serverid) {
        return Err(ApiFailure::bad_request("Unknown serverid."));
    }
    if db
        .sysusers
        .values()
        .any(|u| u.serverid == input.serverid && u.name == input.name)
    {
        return Err(ApiFailure::conflict("A system user with that name already exists."));
    }
    let mut sshkeys = Vec::new();
    if let Some(key_id) = input.sshkey_id {
        if !db.sshkeys.contains_key(&key_id) {
            return Err(ApiFailure::bad_request("Unknown sshkey_id."));
        }
        sshkeys.push(key_id);
    }
    let user = SysUser {
        id: new_id(),
        serverid: input.serverid,
        name: input.name,
        sshkeys,
    };
    db.sysusers.insert(user.id.clone(), user.clone());
    let action = db.record_action(Some(user.serverid.as_str()));
    Ok(acted(action, &user))
}

async fn get_sysuser(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let db = state.db.read().await;
    db.sysusers.get(&id).map(data).ok_or_else(ApiFailure::not_found)
}

async fn update_sysuser(State(state): State<AppState>, Path(id): Path<String>, body: String) -> ApiResult {
    let input: UpdateSysUser = parse(&body)?;
    if input.password.len() < 8 {
        return Err(ApiFailure::bad_request("Password must be at least 8 characters."));
    }
    let mut db = state.db.write().await;
    let user = db.sysusers.get(&id).cloned().ok_or_else(ApiFailure::not_found)?;
    let action = db.record_action(Some(user.serverid.as_str()));
    Ok(acted(action, &user))
}

async fn delete_sysuser(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let mut db = state.db.write().await;
    let user = db.sysusers.remove(&id).ok_or_else(ApiFailure::not_found)?;
    let removed_apps: Vec<String> = db
        .apps
        .values()
        .filter(|a| a.sysuserid == id)
        .map(|a| a.id.clone())
        .collect();
    db.apps.retain(|_, a| a.sysuserid != id);
    db.dbs.retain(|_, d| !removed_apps.contains(&d.appid));
    let action = db.record_action(Some(user.serverid.as_str()));
    Ok(acted(action, &json!({})))
}

async fn list_sysuser_sshkeys(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let db = state.db.read().await;
    let user = db.sysusers.get(&id).ok_or_else(ApiFailure::not_found)?;
    Ok(list(user.sshkeys.iter().filter_map(|k| db.sshkeys.get(k))))
}

async fn attach_sysuser_sshkey(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: String,
) -> ApiResult {
    let input: AttachSshKey = parse(&body)?;
    let mut db = state.db.write().await;
    if !db.sshkeys.contains_key(&input.sshkey_id) {
        return Err(ApiFailure::bad_request("Unknown sshkey_id."));
    }
    let user = db.sysusers.get_mut(&id).ok_or_else(ApiFailure::not_found)?;
    if user.sshkeys.contains(&input.sshkey_id) {
        return Err(ApiFailure::conflict("SSH key is already attached."));
    }
    user.sshkeys.push(input.sshkey_id);
    let user = user.clone();
    let action = db.record_action(Some(user.serverid.as_str()));
    Ok(acted(action, &user))
}

async fn detach_sysuser_sshkey(
    State(state): State<AppState>,
    Path((id, key_id)): Path<(String, String)>,
) -> ApiResult {
    let mut db = state.db.write().await;
    let user = db.sysusers.get_mut(&id).ok_or_else(ApiFailure::not_found)?;
    let before = user.sshkeys.len();
    user.sshkeys.retain(|k| *k != key_id);
    if user.sshkeys.len() == before {
        return Err(ApiFailure::not_found());
    }
    let serverid = user.serverid.clone();
    let action = db.record_action(Some(serverid.as_str()));
    Ok(acted(action, &json!({})))
}

// ---------------------------------------------------------------------------
// Apps
// ---------------------------------------------------------------------------

async fn list_apps(State(state): State<AppState>) -> Json<Value> {
    list(state.db.read().await.apps.values())
}

async fn create_app(State(state): State<AppState>, body: String) -> ApiResult {
    let input: CreateApp = parse(&body)?;
    if !valid_app_name(&input.name) {
        return Err(ApiFailure::bad_request("App name is invalid."));
    }
    if !input.runtime.starts_with("php") {
        return Err(ApiFailure::bad_request("Unsupported runtime."));
    }
    if let Some(wp) = &input.wordpress {
        let complete = [&wp.site_title, &wp.admin_user, &wp.admin_email]
            .iter()
            .all(|v| !v.is_empty());
        if !complete || wp.admin_password.len() < 8 {
            return Err(ApiFailure::bad_request("Invalid WordPress settings."));
        }
    }
    let mut db = state.db.write().await;
    let serverid = db
        .sysusers
        .get(&input.sysuserid)
        .map(|u| u.serverid.clone())
        .ok_or_else(|| ApiFailure::bad_request("Unknown sysuserid."))?;
    if db
        .apps
        .values()
        .any(|a| a.sysuserid == input.sysuserid && a.name == input.name)
    {
        return Err(ApiFailure::conflict("An app with that name already exists."));
    }
    let app = App {
        id: new_id(),
        name: input.name,
        sysuserid: input.sysuserid,
        serverid,
        runtime: input.runtime,
        domains: input.domains.unwrap_or_default(),
        wordpress: input.wordpress.is_some(),
        ssl: None,
    };
    db.apps.insert(app.id.clone(), app.clone());
    let action = db.record_action(Some(app.serverid.as_str()));
    Ok(acted(action, &app))
}

async fn get_app(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let db = state.db.read().await;
    db.apps.get(&id).map(data).ok_or_else(ApiFailure::not_found)
}

async fn update_app(State(state): State<AppState>, Path(id): Path<String>, body: String) -> ApiResult {
    let input: UpdateApp = parse(&body)?;
    let mut db = state.db.write().await;
    let app = db.apps.get_mut(&id).ok_or_else(ApiFailure::not_found)?;
    if let Some(runtime) = input.runtime {
        app.runtime = runtime;
    }
    if let Some(domains) = input.domains {
        app.domains = domains;
    }
    let app = app.clone();
    let action = db.record_action(Some(app.serverid.as_str()));
    Ok(acted(action, &app))
}

async fn delete_app(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let mut db = state.db.write().await;
    let app = db.apps.remove(&id).ok_or_else(ApiFailure::not_found)?;
    db.dbs.retain(|_, d| d.appid != id);
    let action = db.record_action(Some(app.serverid.as_str()));
    Ok(acted(action, &json!({})))
}

// ---------------------------------------------------------------------------
// SSL
// ---------------------------------------------------------------------------

async fn update_ssl(State(state): State<AppState>, Path(id): Path<String>, body: String) -> ApiResult {
    let input: SslParams = parse(&body)?;
    let mut db = state.db.write().await;
    let app = db.apps.get_mut(&id).ok_or_else(ApiFailure::not_found)?;
    match (input.auto, input.force, input.key, input.cert) {
        (Some(true), _, _, _) => {
            app.ssl = Some(Ssl {
                auto: true,
                ..Ssl::default()
            });
        }
        (_, Some(force), _, _) => {
            let ssl = app
                .ssl
                .as_mut()
                .ok_or_else(|| ApiFailure::bad_request("SSL is not enabled for this app."))?;
            ssl.force = force;
        }
        (_, _, Some(_key), Some(cert)) => {
            app.ssl = Some(Ssl {
                auto: false,
                force: false,
                cert: Some(cert),
                cacerts: input.cacerts,
            });
        }
        _ => return Err(ApiFailure::bad_request("Missing SSL parameters.")),
    }
    let ssl = app.ssl.clone();
    let serverid = app.serverid.clone();
    let action = db.record_action(Some(serverid.as_str()));
    Ok(acted(action, &ssl))
}

async fn delete_ssl(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let mut db = state.db.write().await;
    let app = db.apps.get_mut(&id).ok_or_else(ApiFailure::not_found)?;
    app.ssl.take().ok_or_else(ApiFailure::not_found)?;
    let serverid = app.serverid.clone();
    let action = db.record_action(Some(serverid.as_str()));
    Ok(acted(action, &json!({})))
}

// ---------------------------------------------------------------------------
// Databases
// ---------------------------------------------------------------------------

async fn list_dbs(State(state): State<AppState>) -> Json<Value> {
    list(state.db.read().await.dbs.values())
}

async fn create_db(State(state): State<AppState>, body: String) -> ApiResult {
    let input: CreateDatabase = parse(&body)?;
    if !(1..=16).contains(&input.user.password.len()) {
        return Err(ApiFailure::bad_request("Database password must be 1 to 16 characters."));
    }
    let mut db = state.db.write().await;
    let serverid = db
        .apps
        .get(&input.appid)
        .map(|a| a.serverid.clone())
        .ok_or_else(|| ApiFailure::bad_request("Unknown appid."))?;
    if db.dbs.values().any(|d| d.serverid == serverid && d.name == input.name) {
        return Err(ApiFailure::conflict("A database with that name already exists."));
    }
    let database = Database {
        id: new_id(),
        name: input.name,
        appid: input.appid,
        serverid,
        user: DbUser {
            id: new_id(),
            name: input.user.name,
        },
    };
    db.dbs.insert(database.id.clone(), database.clone());
    let action = db.record_action(Some(database.serverid.as_str()));
    Ok(acted(action, &database))
}

async fn get_db(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let db = state.db.read().await;
    db.dbs.get(&id).map(data).ok_or_else(ApiFailure::not_found)
}

async fn update_db(State(state): State<AppState>, Path(id): Path<String>, body: String) -> ApiResult {
    let input: UpdateDatabase = parse(&body)?;
    if !(1..=16).contains(&input.user.password.len()) {
        return Err(ApiFailure::bad_request("Database password must be 1 to 16 characters."));
    }
    let mut db = state.db.write().await;
    let database = db.dbs.get(&id).cloned().ok_or_else(ApiFailure::not_found)?;
    if database.user.id != input.user.id {
        return Err(ApiFailure::bad_request("Unknown database user."));
    }
    let action = db.record_action(Some(database.serverid.as_str()));
    Ok(acted(action, &database))
}

async fn delete_db(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let mut db = state.db.write().await;
    let database = db.dbs.remove(&id).ok_or_else(ApiFailure::not_found)?;
    let action = db.record_action(Some(database.serverid.as_str()));
    Ok(acted(action, &json!({})))
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

async fn get_action(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult {
    let db = state.db.read().await;
    db.actions.get(&id).map(data).ok_or_else(ApiFailure::not_found)
}
