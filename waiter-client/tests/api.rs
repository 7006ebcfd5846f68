// waiter-client/tests/api.rs
// WaiterApi and StatusBoard against a scripted HttpClient

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use shared::models::{CreateOrderRequest, OrderItemInput, OrderStatus, UserRole};
use waiter_client::{
    ClientError, ClientResult, CredentialStore, HttpClient, MemoryCredentialStore, MenuProvider,
    OrderService, StatusBoard, StatusError, TableProvider, WaiterApi,
};

// ========================================================================
// Scripted HTTP client
// ========================================================================

#[derive(Clone)]
enum Reply {
    Json(Value),
    Unauthorized(&'static str),
    NotModified,
    Internal(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
struct Call {
    method: &'static str,
    path: String,
    query: Vec<(String, String)>,
    body: Option<Value>,
}

#[derive(Default)]
struct ScriptedHttp {
    replies: Mutex<HashMap<String, Reply>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedHttp {
    fn reply(self, path: &str, reply: Reply) -> Self {
        self.replies.lock().unwrap().insert(path.to_string(), reply);
        self
    }

    fn set_reply(&self, path: &str, reply: Reply) {
        self.replies.lock().unwrap().insert(path.to_string(), reply);
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn respond(
        &self,
        method: &'static str,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> ClientResult<Value> {
        self.calls.lock().unwrap().push(Call {
            method,
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            body,
        });
        let reply = self.replies.lock().unwrap().get(path).cloned();
        match reply {
            Some(Reply::Json(value)) => Ok(value),
            Some(Reply::Unauthorized(msg)) => Err(ClientError::Unauthorized(msg.into())),
            Some(Reply::NotModified) => Err(ClientError::NotModified),
            Some(Reply::Internal(msg)) => Err(ClientError::Internal(msg.into())),
            None => Err(ClientError::NotFound(path.to_string())),
        }
    }
}

#[async_trait]
impl HttpClient for ScriptedHttp {
    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> ClientResult<T> {
        let value = self.respond("GET", path, query, None)?;
        Ok(serde_json::from_value(value)?)
    }

    async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let value = self.respond("POST", path, &[], Some(serde_json::to_value(body)?))?;
        Ok(serde_json::from_value(value)?)
    }

    async fn post_ack<B: Serialize + Sync>(&self, path: &str, body: &B) -> ClientResult<()> {
        self.respond("POST", path, &[], Some(serde_json::to_value(body)?))
            .map(|_| ())
    }
}

fn api(http: ScriptedHttp) -> (WaiterApi<ScriptedHttp>, Arc<MemoryCredentialStore>) {
    let store = Arc::new(MemoryCredentialStore::new());
    (WaiterApi::new(http, store.clone()), store)
}

fn login_reply() -> Reply {
    Reply::Json(json!({
        "token": "jwt-abc",
        "user": {
            "id": "u1",
            "username": "budi",
            "role": "WAITER",
            "entityId": "E1",
            "entity": "Warung Pusat"
        }
    }))
}

// ========================================================================
// Auth
// ========================================================================

#[tokio::test]
async fn test_entities() {
    let http = ScriptedHttp::default().reply(
        "/api/entities",
        Reply::Json(json!([{"id": "E1", "name": "Pusat"}, {"id": "E2", "name": "Cabang"}])),
    );
    let (api, _) = api(http);

    let entities = api.entities().await.unwrap();

    assert_eq!(entities.len(), 2);
    assert_eq!(entities[1].name, "Cabang");
}

#[tokio::test]
async fn test_login_stores_token_and_user() {
    let (api, store) = api(ScriptedHttp::default().reply("/api/login", login_reply()));

    let user = api.login("budi", "secret", "E1").await.unwrap();

    assert_eq!(user.role, UserRole::Waiter);
    assert_eq!(user.entity_id.as_deref(), Some("E1"));
    assert_eq!(store.token().await.as_deref(), Some("jwt-abc"));
    assert_eq!(api.current_user().await, Some(user));

    let call = &api.http().calls()[0];
    assert_eq!(call.method, "POST");
    assert_eq!(
        call.body,
        Some(json!({"username": "budi", "password": "secret", "entityId": "E1"}))
    );
}

#[tokio::test]
async fn test_login_failure_uses_server_message() {
    let (api, store) = api(
        ScriptedHttp::default().reply("/api/login", Reply::Unauthorized("Invalid credentials")),
    );

    let err = api.login("budi", "wrong", "E1").await.unwrap_err();

    assert!(matches!(err, ClientError::Auth(ref msg) if msg == "Invalid credentials"));
    assert!(store.token().await.is_none());
}

#[tokio::test]
async fn test_login_failure_without_message() {
    let (api, _) = api(ScriptedHttp::default().reply("/api/login", Reply::Unauthorized("")));

    let err = api.login("budi", "wrong", "E1").await.unwrap_err();

    assert!(matches!(err, ClientError::Auth(ref msg) if msg == "Login failed"));
}

#[tokio::test]
async fn test_logout_clears_credentials() {
    let (api, store) = api(ScriptedHttp::default().reply("/api/login", login_reply()));
    api.login("budi", "secret", "E1").await.unwrap();

    api.logout().await.unwrap();

    assert!(store.load().await.is_none());
    assert!(api.current_user().await.is_none());
}

// ========================================================================
// Providers
// ========================================================================

#[tokio::test]
async fn test_menu_and_tables_are_entity_scoped() {
    let http = ScriptedHttp::default()
        .reply(
            "/api/foods",
            Reply::Json(json!([
                {"id": "f1", "name": "Nasi", "price": 10000,
                 "options": [{"id": "o1", "name": "Telur", "available": true, "extraPrice": 2000}]}
            ])),
        )
        .reply("/api/tables", Reply::Json(json!([{"id": "t1", "number": 4}])));
    let (api, _) = api(http);

    let foods = api.fetch_menu("E1").await.unwrap();
    let tables = api.fetch_tables("E1").await.unwrap();

    assert_eq!(foods[0].options[0].name, "Telur");
    assert_eq!(tables[0].number, 4);
    for call in api.http().calls() {
        assert_eq!(call.method, "GET");
        assert_eq!(call.query, vec![("entityId".to_string(), "E1".to_string())]);
    }
}

#[tokio::test]
async fn test_submit_order_posts_payload() {
    let (api, _) = api(ScriptedHttp::default().reply("/api/create", Reply::Json(Value::Null)));
    let request = CreateOrderRequest {
        dining_table_id: "t1".into(),
        waiter_id: "u1".into(),
        entity_id: "E1".into(),
        items: vec![OrderItemInput {
            food_id: "f1".into(),
            quantity: 2,
            options: vec![],
        }],
        remark: String::new(),
    };

    api.submit_order(&request).await.unwrap();

    let call = &api.http().calls()[0];
    assert_eq!(call.path, "/api/create");
    assert_eq!(call.body.as_ref().unwrap()["items"][0]["foodId"], "f1");
}

#[tokio::test]
async fn test_submit_order_failure() {
    let (api, _) = api(ScriptedHttp::default().reply("/api/create", Reply::Internal("boom")));
    let request = CreateOrderRequest {
        dining_table_id: "t1".into(),
        waiter_id: "u1".into(),
        entity_id: "E1".into(),
        items: vec![],
        remark: String::new(),
    };

    assert!(api.submit_order(&request).await.is_err());
}

// ========================================================================
// Status board
// ========================================================================

fn status_reply() -> Reply {
    Reply::Json(json!([
        {"id": "o1", "status": "PENDING", "diningTable": {"number": 3},
         "waiter": {"username": "budi"}, "items": [{"id": "i1", "food": {"name": "Nasi"}, "quantity": 1}]},
        {"id": "o2", "status": "SERVED", "diningTable": {"number": 5}, "items": []},
        {"id": "o3", "status": "PAID", "diningTable": {"number": 3}, "items": []}
    ]))
}

#[tokio::test]
async fn test_status_board_groups_by_table() {
    let (api, _) = api(ScriptedHttp::default().reply("/api/status", status_reply()));
    let mut board = StatusBoard::new(api, Some("E1".into()));

    board.refresh().await.unwrap();

    let groups = board.grouped_by_table();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0, "3");
    assert_eq!(
        groups[0].1.iter().map(|o| o.id.as_str()).collect::<Vec<_>>(),
        vec!["o1", "o3"]
    );
    assert_eq!(groups[1].0, "5");
    assert_eq!(groups[1].1[0].status, OrderStatus::Served);
}

#[tokio::test]
async fn test_status_board_without_entity_makes_no_request() {
    let (api, _) = api(ScriptedHttp::default().reply("/api/status", status_reply()));
    let mut board = StatusBoard::new(api, None);

    board.refresh().await.unwrap();

    assert!(board.orders().is_empty());
}

#[tokio::test]
async fn test_status_board_not_modified_keeps_orders() {
    let (api, _) = api(ScriptedHttp::default().reply("/api/status", status_reply()));
    let mut board = StatusBoard::new(api, Some("E1".into()));
    board.refresh().await.unwrap();

    board.provider().http().set_reply("/api/status", Reply::NotModified);
    board.refresh().await.unwrap();

    assert_eq!(board.orders().len(), 3);
    assert_eq!(board.provider().http().calls().len(), 2);
}

#[tokio::test]
async fn test_status_board_failure_clears_orders() {
    let (api, _) = api(ScriptedHttp::default().reply("/api/status", status_reply()));
    let mut board = StatusBoard::new(api, Some("E1".into()));
    board.refresh().await.unwrap();
    assert_eq!(board.orders().len(), 3);

    board.provider().http().set_reply("/api/status", Reply::Internal("down"));
    let err = board.refresh().await.unwrap_err();

    assert!(matches!(err, StatusError::Load(ClientError::Internal(_))));
    assert_eq!(err.to_string(), "Failed to load orders");
    assert!(board.orders().is_empty());
}

#[tokio::test]
async fn test_status_board_entity_switch_drops_orders() {
    let (api, _) = api(ScriptedHttp::default().reply("/api/status", status_reply()));
    let mut board = StatusBoard::new(api, Some("E1".into()));
    board.refresh().await.unwrap();
    board.toggle_expanded("o1");

    board.set_entity(Some("E2".into()));

    assert!(board.orders().is_empty());
    assert!(!board.is_expanded("o1"));
}

#[tokio::test]
async fn test_status_board_single_expanded_order() {
    let (api, _) = api(ScriptedHttp::default().reply("/api/status", status_reply()));
    let mut board = StatusBoard::new(api, Some("E1".into()));
    board.refresh().await.unwrap();

    board.toggle_expanded("o1");
    assert!(board.is_expanded("o1"));

    board.toggle_expanded("o2");
    assert!(!board.is_expanded("o1"));
    assert!(board.is_expanded("o2"));

    board.toggle_expanded("o2");
    assert!(!board.is_expanded("o2"));
}
