/// REST client for the Apotik backend.
///
/// One thin wrapper around `reqwest::Client` covering the endpoints the
/// dashboard pages call. The client is cheap to clone (`reqwest::Client` is
/// reference-counted internally). When a [`Session`] is installed, its token
/// rides along as a bearer header on every call.
///
/// The client never caches: pages refetch their collection after every
/// mutating call and feed the result through
/// [`ListState::apply_fetch`](crate::listview::ListState::apply_fetch).
///
/// # Example
///
/// ```ignore
/// use apotik_admin::client::ApotikClient;
///
/// let mut client = ApotikClient::new();
/// let session = client.login("admin@apotik.id", "rahasia").await?;
/// client.set_session(session);
///
/// let products = client.list_products().await?;
/// ```

use log::debug;
use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::entity::{
    AccountTable, Consultation, ConsultationUpdate, Order, OrderItem, OrderStatus, Product, User,
    UserUpdate,
};
use crate::error::ApiError;
use crate::session::{LoginResponse, Session, SignupRequest};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct ApotikClient {
    base_url: String,
    http: reqwest::Client,
    session: Option<Session>,
}

impl ApotikClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        ApotikClient {
            base_url: base_url.into(),
            http: reqwest::Client::new(),
            session: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Installs the session whose token authenticates subsequent calls.
    pub fn set_session(&mut self, session: Session) {
        self.session = Some(session);
    }

    /// Forgets the session (logout).
    pub fn clear_session(&mut self) {
        self.session = None;
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    // ---- auth --------------------------------------------------------------

    /// Signs in against the admin table. Returns the session; installing it
    /// is the caller's decision.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let response: LoginResponse = self
            .send_json(self.request(Method::POST, "/api/login?tbname=admin").json(&body))
            .await?;
        Ok(Session::from(response))
    }

    /// Registers an admin/doctor account and signs it in.
    pub async fn signup(&self, request: &SignupRequest) -> Result<Session, ApiError> {
        let response: LoginResponse = self
            .send_json(
                self.request(Method::POST, "/api/signup?tbname=admin")
                    .json(request),
            )
            .await?;
        Ok(Session::from(response))
    }

    // ---- products ----------------------------------------------------------

    pub async fn list_products(&self) -> Result<Vec<Product>, ApiError> {
        self.send_json(self.request(Method::GET, "/api/produk"))
            .await
    }

    pub async fn create_product(&self, form: ProductForm) -> Result<(), ApiError> {
        self.send_ok(
            self.request(Method::POST, "/api/produk")
                .multipart(form.into_multipart()),
        )
        .await
    }

    pub async fn update_product(&self, id: i64, form: ProductForm) -> Result<(), ApiError> {
        self.send_ok(
            self.request(Method::PUT, &format!("/api/produk/{}", id))
                .multipart(form.into_multipart()),
        )
        .await
    }

    pub async fn delete_product(&self, id: i64) -> Result<(), ApiError> {
        self.send_ok(self.request(Method::DELETE, &format!("/api/produk/{}", id)))
            .await
    }

    // ---- orders ------------------------------------------------------------

    pub async fn list_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.send_json(self.request(Method::GET, "/api/pesanan"))
            .await
    }

    /// The line items of one order, addressed by its order code.
    pub async fn order_details(&self, code: &str) -> Result<Vec<OrderItem>, ApiError> {
        self.send_json(self.request(Method::GET, &format!("/api/pesanan/detail_pesanan/{}", code)))
            .await
    }

    pub async fn update_order_status(&self, id: i64, status: OrderStatus) -> Result<(), ApiError> {
        let body = serde_json::json!({ "status_pembelian": status });
        self.send_ok(
            self.request(Method::PUT, &format!("/api/pesanan/{}", id))
                .json(&body),
        )
        .await
    }

    /// Completing an order goes through its own endpoint, addressed by order
    /// code, so the backend can settle stock and payment in one step.
    pub async fn complete_order(&self, code: &str) -> Result<(), ApiError> {
        self.send_ok(self.request(Method::PUT, &format!("/api/pesanan/selesai/{}", code)))
            .await
    }

    pub async fn delete_order(&self, id: i64) -> Result<(), ApiError> {
        self.send_ok(self.request(Method::DELETE, &format!("/api/pesanan/{}", id)))
            .await
    }

    // ---- consultations -----------------------------------------------------

    pub async fn list_consultations(&self) -> Result<Vec<Consultation>, ApiError> {
        self.send_json(self.request(Method::GET, "/api/konsultasi"))
            .await
    }

    pub async fn update_consultation(
        &self,
        id: i64,
        update: &ConsultationUpdate,
    ) -> Result<(), ApiError> {
        self.send_ok(
            self.request(Method::PUT, &format!("/api/konsultasi/{}", id))
                .json(update),
        )
        .await
    }

    pub async fn delete_consultation(&self, id: i64) -> Result<(), ApiError> {
        self.send_ok(self.request(Method::DELETE, &format!("/api/konsultasi/{}", id)))
            .await
    }

    // ---- users -------------------------------------------------------------

    /// The merged account list across both tables.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.send_json(self.request(Method::GET, "/api/users/users"))
            .await
    }

    /// One account table on its own, as the dashboard counters consume it.
    pub async fn list_accounts(&self, table: AccountTable) -> Result<Vec<User>, ApiError> {
        self.send_json(self.request(Method::GET, &format!("/api/users?tbname={}", table.as_str())))
            .await
    }

    pub async fn update_user(
        &self,
        id: i64,
        table: AccountTable,
        update: &UserUpdate,
    ) -> Result<(), ApiError> {
        self.send_ok(
            self.request(
                Method::PUT,
                &format!("/api/users/{}?tbname={}", id, table.as_str()),
            )
            .json(update),
        )
        .await
    }

    pub async fn delete_user(&self, id: i64, table: AccountTable) -> Result<(), ApiError> {
        self.send_ok(self.request(
            Method::DELETE,
            &format!("/api/users/{}?tbname={}", id, table.as_str()),
        ))
        .await
    }

    // ---- plumbing ----------------------------------------------------------

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!("{} {}", method, path);
        let mut request = self.http.request(method, self.endpoint(path));
        if let Some(session) = &self.session {
            request = request.bearer_auth(session.token());
        }
        request
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        if response.status().is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::error_from(response).await)
        }
    }

    async fn send_ok(&self, request: RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from(response).await)
        }
    }

    async fn error_from(response: Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&body)
            .map(|b| b.error)
            .unwrap_or(body);
        ApiError::http(status, message)
    }
}

impl Default for ApotikClient {
    fn default() -> Self {
        ApotikClient::new()
    }
}

/// Error body shape of the backend: `{"error": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Fields of the product create/edit form. Sent as multipart form data, the
/// image part included only when a new file was picked (an edit without a new
/// image keeps the stored one).
#[derive(Debug, Clone)]
pub struct ProductForm {
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub stock: i64,
    pub image: Option<ProductImage>,
}

/// An image file picked in the form.
#[derive(Debug, Clone)]
pub struct ProductImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ProductForm {
    fn into_multipart(self) -> Form {
        let mut form = Form::new()
            .text("nama", self.name)
            .text("kategori", self.category)
            .text("deskripsi", self.description)
            .text("harga", self.price.to_string())
            .text("stok", self.stock.to_string());
        if let Some(image) = self.image {
            form = form.part("gambar", Part::bytes(image.bytes).file_name(image.file_name));
        }
        form
    }
}
