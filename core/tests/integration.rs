//! Full resource lifecycle against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives every resource
//! family through `ServerPilot` over real HTTP with the default ureq
//! transport. Checks that paths, verbs, bodies, auth and the status
//! mapping agree with what the server actually accepts.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use serverpilot_core::{
    Action, ActionStatus, ApiError, ClientConfig, Envelope, HttpMethod, ServerPilot, Transport, UreqTransport,
    Wordpress,
};

/// Run the mock server on its own runtime thread and return its address.
fn spawn_server() -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

fn config(addr: SocketAddr) -> ClientConfig {
    ClientConfig::new(mock_server::API_ID, mock_server::API_KEY)
        .unwrap()
        .with_endpoint(&format!("http://{addr}/v1"))
}

fn data(value: &serverpilot_core::ApiResponse) -> &Value {
    &value.as_json().expect("decoded response")["data"]
}

fn id_of(value: &serverpilot_core::ApiResponse) -> String {
    data(value)["id"].as_str().expect("id").to_string()
}

#[test]
fn resource_lifecycle() {
    let addr = spawn_server();
    let sp = ServerPilot::new(config(addr));

    // Step 1: servers start empty.
    let servers = sp.server_list().unwrap();
    assert!(data(&servers).as_array().unwrap().is_empty());

    // Step 2: create and inspect a server.
    let created = sp.server_create("mybox").unwrap();
    assert_eq!(data(&created)["name"], "mybox");
    let server_id = id_of(&created);
    let info = sp.server_info(&server_id).unwrap();
    assert_eq!(data(&info)["firewall"], true);

    // Step 3: explicit `false` reaches the server; `None` leaves autoupdates alone.
    let updated = sp.server_update(&server_id, Some(false), None).unwrap();
    assert_eq!(data(&updated)["firewall"], false);
    assert_eq!(data(&updated)["autoupdates"], true);

    // Step 4: ssh key on the account.
    let key = sp.sshkeys_add("laptop", "ssh-ed25519 AAAAC3Nza laptop").unwrap();
    let key_id = id_of(&key);
    let renamed = sp.sshkeys_rename(&key_id, "workstation").unwrap();
    assert_eq!(data(&renamed)["name"], "workstation");
    assert_eq!(data(&sp.sshkeys_retrieve(&key_id).unwrap())["name"], "workstation");
    assert_eq!(data(&sp.sshkeys_list().unwrap()).as_array().unwrap().len(), 1);

    // Step 5: system user with the key attached at creation.
    let user = sp
        .sysuser_create(&server_id, "deploy", Some("hunter2hunter2"), Some(&key_id))
        .unwrap();
    let user_id = id_of(&user);
    let keys = sp.sysuser_sshkey_list(&user_id).unwrap();
    assert_eq!(data(&keys)[0]["id"], key_id.as_str());
    sp.sysuser_update(&user_id, "correcthorsebattery").unwrap();
    sp.sysuser_sshkey_remove(&user_id, &key_id).unwrap();
    sp.sysuser_sshkey_add(&user_id, &key_id).unwrap();
    assert_eq!(data(&sp.sysuser_info(&user_id).unwrap())["name"], "deploy");
    assert_eq!(data(&sp.sysuser_list().unwrap()).as_array().unwrap().len(), 1);

    // Step 6: app with domains and WordPress.
    let domains = vec!["example.com".to_string(), "www.example.com".to_string()];
    let wordpress = Wordpress {
        site_title: "Example".to_string(),
        admin_user: "admin".to_string(),
        admin_password: "correcthorse".to_string(),
        admin_email: "admin@example.com".to_string(),
    };
    let app = sp
        .app_create("blog", &user_id, "php8.2", Some(&domains), Some(&wordpress))
        .unwrap();
    let app_id = id_of(&app);
    assert_eq!(data(&app)["wordpress"], true);
    assert_eq!(data(&app)["serverid"], server_id.as_str());

    let updated = sp.app_update(&app_id, Some("php8.3"), None).unwrap();
    assert_eq!(data(&updated)["runtime"], "php8.3");
    assert_eq!(data(&updated)["domains"].as_array().unwrap().len(), 2);
    assert_eq!(data(&sp.app_info(&app_id).unwrap())["runtime"], "php8.3");
    assert_eq!(data(&sp.app_list().unwrap()).as_array().unwrap().len(), 1);

    // Step 7: SSL on the app.
    sp.ssl_add(&app_id, "-----KEY-----", "-----CERT-----", None).unwrap();
    let auto = sp.ssl_auto(&app_id).unwrap();
    assert_eq!(data(&auto)["auto"], true);
    let forced = sp.ssl_force(&app_id, true).unwrap();
    assert_eq!(data(&forced)["force"], true);
    sp.ssl_delete(&app_id).unwrap();

    // Step 8: database with a nested user.
    let db = sp.database_create(&app_id, "mydb", "dbuser", "pw123456").unwrap();
    let db_id = id_of(&db);
    let db_user_id = data(&db)["user"]["id"].as_str().unwrap().to_string();
    let db_update = sp.database_update(&db_id, &db_user_id, "newpw").unwrap();
    assert_eq!(data(&sp.database_info(&db_id).unwrap())["name"], "mydb");
    assert_eq!(data(&sp.database_list().unwrap()).as_array().unwrap().len(), 1);

    // Step 9: the update's action can be polled and read as a typed struct.
    let action_id = db_update.action_id().unwrap().to_string();
    let action: Envelope<Action> = sp.action_info(&action_id).unwrap().deserialize().unwrap();
    assert_eq!(action.data.id, action_id);
    assert_eq!(action.data.status, ActionStatus::Success);
    assert_eq!(action.data.serverid.as_deref(), Some(server_id.as_str()));

    // Step 10: tear down.
    sp.database_delete(&db_id).unwrap();
    sp.app_delete(&app_id).unwrap();
    sp.sysuser_delete(&user_id).unwrap();
    sp.server_delete(&server_id).unwrap();

    // Step 11: deleted resources use the default 404 message.
    let err = sp.app_delete(&app_id).unwrap_err();
    match err {
        ApiError::Service { code, message } => {
            assert_eq!(code, 404);
            assert_eq!(message, "You requested a resource that does not exist.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(sp.server_info(&server_id).unwrap_err().is_not_found());
}

#[test]
fn service_messages_are_passed_through() {
    let addr = spawn_server();
    let sp = ServerPilot::new(config(addr));

    sp.server_create("dup").unwrap();
    let err = sp.server_create("dup").unwrap_err();
    assert!(matches!(
        err,
        ApiError::Service { code: 409, ref message } if message == "A server with that name already exists."
    ));

    let err = sp.server_create("Not Valid").unwrap_err();
    assert_eq!(err.status(), Some(400));
}

#[test]
fn bad_credentials_are_401() {
    let addr = spawn_server();
    let config = ClientConfig::new(mock_server::API_ID, "wrong-key")
        .unwrap()
        .with_endpoint(&format!("http://{addr}/v1"));
    let err = ServerPilot::new(config).server_list().unwrap_err();
    assert!(matches!(
        err,
        ApiError::Service { code: 401, ref message } if message == "Invalid API credentials."
    ));
}

#[test]
fn raw_mode_returns_body_unchanged() {
    let addr = spawn_server();
    let sp = ServerPilot::new(config(addr).with_decode(false));

    let resp = sp.server_list().unwrap();
    assert_eq!(resp.as_raw(), Some(r#"{"data":[]}"#));
    assert!(resp.as_json().is_none());

    let parsed: Value = resp.into_json().unwrap();
    assert_eq!(parsed["data"], Value::Array(Vec::new()));
}

#[test]
fn unreachable_endpoint_is_transport_error() {
    // Bind then drop to get a port with nothing listening.
    let addr = std::net::TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let sp = ServerPilot::new(config(addr).with_timeout(Duration::from_secs(5)));
    let err = sp.server_list().unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "unexpected error: {err:?}");

    let raw = ServerPilot::new(config(addr).with_decode(false));
    assert!(matches!(raw.action_info("a1").unwrap_err(), ApiError::Transport(_)));
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn client_is_send_and_sync() {
    assert_send_sync::<ServerPilot<UreqTransport>>();
    assert_send_sync::<ClientConfig>();
}

#[test]
fn silent_server_times_out_on_every_thread() {
    // The kernel completes the handshake into the backlog; nothing ever replies.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let sp = Arc::new(ServerPilot::new(config(addr).with_timeout(Duration::from_millis(300))));

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let sp = Arc::clone(&sp);
            std::thread::spawn(move || sp.server_list())
        })
        .collect();
    for handle in handles {
        let err = handle.join().unwrap().unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)), "unexpected error: {err:?}");
    }
    drop(listener);
}

#[test]
fn transport_returns_response_headers() {
    let addr = spawn_server();
    let sp = ServerPilot::new(config(addr));

    let req = sp.build_request::<()>("servers", None, HttpMethod::Get).unwrap();
    let resp = sp.transport().execute(&req).unwrap();
    assert_eq!(resp.status, 200);
    assert_eq!(resp.header("Content-Type"), Some("application/json"));

    // Non-200 statuses come back as data too.
    let req = sp.build_request::<()>("servers/missing", None, HttpMethod::Get).unwrap();
    assert_eq!(sp.transport().execute(&req).unwrap().status, 404);
}
