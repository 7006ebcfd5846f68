//! Ordering API
//!
//! Provider traits consumed by the composer and the status board, and
//! [`WaiterApi`], their HTTP implementation on top of an [`HttpClient`].

use std::sync::Arc;

use async_trait::async_trait;
use shared::client::{LoginRequest, LoginResponse};
use shared::models::{CreateOrderRequest, DiningTable, Entity, Food, OrderRecord, User};

use crate::credential::{Credential, CredentialStore};
use crate::http::HttpClient;
use crate::{ClientError, ClientResult};

/// Menu catalog of an entity
#[async_trait]
pub trait MenuProvider: Send + Sync {
    async fn fetch_menu(&self, entity_id: &str) -> ClientResult<Vec<Food>>;
}

/// Dining tables of an entity
#[async_trait]
pub trait TableProvider: Send + Sync {
    async fn fetch_tables(&self, entity_id: &str) -> ClientResult<Vec<DiningTable>>;
}

/// Order submission
#[async_trait]
pub trait OrderService: Send + Sync {
    async fn submit_order(&self, request: &CreateOrderRequest) -> ClientResult<()>;
}

/// Active orders of an entity
#[async_trait]
pub trait StatusProvider: Send + Sync {
    async fn fetch_order_status(&self, entity_id: &str) -> ClientResult<Vec<OrderRecord>>;
}

/// HTTP implementation of the ordering API
pub struct WaiterApi<H> {
    http: H,
    credentials: Arc<dyn CredentialStore>,
}

impl<H: HttpClient> WaiterApi<H> {
    /// `credentials` must be the store `http` reads its bearer token from
    pub fn new(http: H, credentials: Arc<dyn CredentialStore>) -> Self {
        Self { http, credentials }
    }

    /// Underlying HTTP client
    pub fn http(&self) -> &H {
        &self.http
    }

    /// Credential store shared with the HTTP client
    pub fn credentials(&self) -> &Arc<dyn CredentialStore> {
        &self.credentials
    }

    // ========== Auth API ==========

    /// List the entities a user can sign into
    pub async fn entities(&self) -> ClientResult<Vec<Entity>> {
        self.http.get("/api/entities", &[]).await
    }

    /// Login and store the issued token
    pub async fn login(&self, username: &str, password: &str, entity_id: &str) -> ClientResult<User> {
        let req = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
            entity_id: entity_id.to_string(),
        };

        let resp: LoginResponse = self.http.post("/api/login", &req).await.map_err(|e| {
            if let Some(msg) = e.server_message() {
                return ClientError::Auth(msg.to_string());
            }
            match e {
                ClientError::Http(_) => e,
                _ => ClientError::Auth("Login failed".into()),
            }
        })?;

        self.credentials
            .save(Credential::new(resp.token, Some(resp.user.clone())))
            .await?;
        tracing::info!(user_id = %resp.user.id, username = %resp.user.username, "Logged in");
        Ok(resp.user)
    }

    /// Forget the stored token
    pub async fn logout(&self) -> ClientResult<()> {
        self.credentials.clear().await?;
        tracing::info!("Logged out");
        Ok(())
    }

    /// Signed-in user, if any
    pub async fn current_user(&self) -> Option<User> {
        self.credentials.user().await
    }
}

#[async_trait]
impl<H: HttpClient> MenuProvider for WaiterApi<H> {
    async fn fetch_menu(&self, entity_id: &str) -> ClientResult<Vec<Food>> {
        self.http.get("/api/foods", &[("entityId", entity_id)]).await
    }
}

#[async_trait]
impl<H: HttpClient> TableProvider for WaiterApi<H> {
    async fn fetch_tables(&self, entity_id: &str) -> ClientResult<Vec<DiningTable>> {
        self.http.get("/api/tables", &[("entityId", entity_id)]).await
    }
}

#[async_trait]
impl<H: HttpClient> OrderService for WaiterApi<H> {
    async fn submit_order(&self, request: &CreateOrderRequest) -> ClientResult<()> {
        self.http.post_ack("/api/create", request).await
    }
}

#[async_trait]
impl<H: HttpClient> StatusProvider for WaiterApi<H> {
    async fn fetch_order_status(&self, entity_id: &str) -> ClientResult<Vec<OrderRecord>> {
        self.http.get("/api/status", &[("entityId", entity_id)]).await
    }
}
