use crate::config::FrontendConfig;
use crate::session::SessionStore;
use futures::future::{Either, select};
use futures::pin_mut;
use gloo_timers::future::TimeoutFuture;
use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::models::{
    ApiResponse, BlogPost, Course, CourseFilter, CreateOrderRequest, EnrollResponse,
    ErrorResponse, Internship, LoginRequest, LoginResponse, PaymentOrder, Profile,
    UpdateProfileRequest, VerifyPaymentRequest, VerifyPaymentResponse,
};
use thiserror::Error;
use uuid::Uuid;

/// Generous bound so a cold-starting backend still answers.
const REQUEST_TIMEOUT_MS: u32 = 30_000;

thread_local! {
    static SHARED_CLIENT: OnceCell<CampusBridgeClient> = OnceCell::new();
}

#[derive(Debug, Error)]
enum RequestError {
    #[error("request timed out")]
    Timeout,
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Thin HTTP client for the CampusBridge backend.
///
/// Every call attaches the current session token when present, bounds the
/// wait with a timeout, and resolves to an [`ApiResponse`]. Transport and
/// parse failures are folded into `success: false`, never thrown.
#[derive(Clone, Debug)]
pub struct CampusBridgeClient {
    base_url: String,
    client: Client,
}

impl CampusBridgeClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Attach the session token as a bearer credential, if logged in.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match SessionStore::load().token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(builder: RequestBuilder) -> Result<Response, RequestError> {
        let request = builder.send();
        let timeout = TimeoutFuture::new(REQUEST_TIMEOUT_MS);
        pin_mut!(request);
        pin_mut!(timeout);
        match select(request, timeout).await {
            Either::Left((result, _)) => Ok(result?),
            Either::Right(((), _)) => Err(RequestError::Timeout),
        }
    }

    /// Idempotent reads get one extra attempt; writes go through [`send`]
    /// exactly once and surface their failure to the caller.
    async fn send_read<F>(build: F) -> Result<Response, RequestError>
    where
        F: Fn() -> RequestBuilder,
    {
        match Self::send(build()).await {
            Ok(response) => Ok(response),
            Err(err) => {
                log::debug!("read failed ({err}), retrying once");
                Self::send(build()).await
            }
        }
    }

    async fn normalize<T>(result: Result<Response, RequestError>) -> ApiResponse<T>
    where
        T: DeserializeOwned,
    {
        let response = match result {
            Ok(response) => response,
            Err(err) => return ApiResponse::fail(err.to_string()),
        };
        let status = response.status();
        if status.is_success() {
            match response.json::<T>().await {
                Ok(data) => ApiResponse::ok(data),
                Err(_) => ApiResponse::fail("invalid response body"),
            }
        } else {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map_or_else(|_| format!("request failed: {status}"), |body| body.error);
            ApiResponse::fail(message)
        }
    }

    /// List catalog courses, optionally filtered. `GET /courses`.
    pub async fn list_courses(&self, filter: &CourseFilter) -> ApiResponse<Vec<Course>> {
        let url = self.api_url("courses");
        let result =
            Self::send_read(|| self.authorize(self.client.get(url.clone())).query(filter)).await;
        Self::normalize(result).await
    }

    /// Fetch a single course. `GET /courses/:id`.
    pub async fn get_course(&self, course_id: &Uuid) -> ApiResponse<Course> {
        let url = self.api_url(&format!("courses/{course_id}"));
        let result = Self::send_read(|| self.authorize(self.client.get(url.clone()))).await;
        Self::normalize(result).await
    }

    /// Enroll the current user in a course. `POST /courses/:id/enroll`.
    /// Never retried.
    pub async fn enroll(&self, course_id: &Uuid) -> ApiResponse<EnrollResponse> {
        let url = self.api_url(&format!("courses/{course_id}/enroll"));
        let result = Self::send(self.authorize(self.client.post(url))).await;
        Self::normalize(result).await
    }

    /// Authenticate. `POST /auth/login`. Never retried.
    pub async fn login(&self, payload: &LoginRequest) -> ApiResponse<LoginResponse> {
        let url = self.api_url("auth/login");
        let result = Self::send(self.client.post(url).json(payload)).await;
        Self::normalize(result).await
    }

    /// Fetch the authenticated user's profile. `GET /users/me`.
    pub async fn get_profile(&self) -> ApiResponse<Profile> {
        let url = self.api_url("users/me");
        let result = Self::send_read(|| self.authorize(self.client.get(url.clone()))).await;
        Self::normalize(result).await
    }

    /// Update the profile and return the fresh copy. `PATCH /users/me`.
    /// Never retried.
    pub async fn update_profile(&self, payload: &UpdateProfileRequest) -> ApiResponse<Profile> {
        let url = self.api_url("users/me");
        let result = Self::send(self.authorize(self.client.patch(url)).json(payload)).await;
        Self::normalize(result).await
    }

    /// Open a payment order. `POST /payments/orders`. Never retried.
    pub async fn create_payment_order(
        &self,
        payload: &CreateOrderRequest,
    ) -> ApiResponse<PaymentOrder> {
        let url = self.api_url("payments/orders");
        let result = Self::send(self.authorize(self.client.post(url)).json(payload)).await;
        Self::normalize(result).await
    }

    /// Confirm a settled payment. `POST /payments/verify`. Never retried.
    pub async fn verify_payment(
        &self,
        payload: &VerifyPaymentRequest,
    ) -> ApiResponse<VerifyPaymentResponse> {
        let url = self.api_url("payments/verify");
        let result = Self::send(self.authorize(self.client.post(url)).json(payload)).await;
        Self::normalize(result).await
    }

    /// List published blog posts. `GET /blog`.
    pub async fn list_blog_posts(&self) -> ApiResponse<Vec<BlogPost>> {
        let url = self.api_url("blog");
        let result = Self::send_read(|| self.authorize(self.client.get(url.clone()))).await;
        Self::normalize(result).await
    }

    /// Fetch one blog post. `GET /blog/:id`.
    pub async fn get_blog_post(&self, id: u64) -> ApiResponse<BlogPost> {
        let url = self.api_url(&format!("blog/{id}"));
        let result = Self::send_read(|| self.authorize(self.client.get(url.clone()))).await;
        Self::normalize(result).await
    }

    /// List internship openings. `GET /internships`.
    pub async fn list_internships(&self) -> ApiResponse<Vec<Internship>> {
        let url = self.api_url("internships");
        let result = Self::send_read(|| self.authorize(self.client.get(url.clone()))).await;
        Self::normalize(result).await
    }

    /// Backend liveness probe. `GET /health`.
    pub async fn health(&self) -> ApiResponse<serde_json::Value> {
        let url = self.api_url("health");
        let result = Self::send_read(|| self.client.get(url.clone())).await;
        Self::normalize(result).await
    }
}
