use std::time::Duration;

use anyhow::{Context, anyhow};
use async_trait::async_trait;
use reqwest::{StatusCode, header::AUTHORIZATION};
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::{
    domain::{
        entities::invites::{AcceptInviteResponse, InviteEntity},
        repositories::invites::{InviteError, InviteRepository},
        value_objects::invites::AcceptInviteRequest,
    },
    infra::http::session::SessionContext,
};

/// reqwest client for `/api/invites/{token}` on the Rekan API.
pub struct InviteHttpClient {
    http: reqwest::Client,
    base_url: Url,
    session: Option<SessionContext>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    message: Option<String>,
}

impl InviteHttpClient {
    pub fn new(
        base_url: Url,
        request_timeout: Duration,
        session: Option<SessionContext>,
    ) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .context("failed to build invite HTTP client")?;

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    fn invite_url(&self, token: &str, action: Option<&str>) -> anyhow::Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| anyhow!("API url cannot be a base: {}", self.base_url))?;
            segments.pop_if_empty().extend(["api", "invites", token]);
            if let Some(action) = action {
                segments.push(action);
            }
        }
        Ok(url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.session {
            Some(session) => request.header(AUTHORIZATION, session.authorization_header()),
            None => request,
        }
    }

    async fn ensure_success(
        resp: reqwest::Response,
        context: &str,
    ) -> Result<reqwest::Response, InviteError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorEnvelope>(&body)
            .ok()
            .and_then(|envelope| envelope.message)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("error").to_string());

        debug!(status = %status, context = %context, "invite_client: request rejected");

        match status {
            StatusCode::NOT_FOUND => Err(InviteError::NotFound),
            StatusCode::GONE => Err(InviteError::Expired),
            StatusCode::CONFLICT => Err(InviteError::Conflict(message)),
            _ => {
                warn!(
                    status = %status,
                    context = %context,
                    message = %message,
                    "invite_client: unexpected API response"
                );
                Err(InviteError::UnexpectedStatus {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}

#[async_trait]
impl InviteRepository for InviteHttpClient {
    async fn find_by_token(&self, token: &str) -> Result<InviteEntity, InviteError> {
        let url = self.invite_url(token, None)?;
        let resp = self
            .authorize(self.http.get(url))
            .send()
            .await
            .context("failed to reach invite API")?;
        let resp = Self::ensure_success(resp, "load invite").await?;

        let invite = resp
            .json::<InviteEntity>()
            .await
            .context("invite API returned an unreadable invite")?;
        Ok(invite)
    }

    async fn accept(
        &self,
        token: &str,
        request: &AcceptInviteRequest,
    ) -> Result<AcceptInviteResponse, InviteError> {
        let url = self.invite_url(token, Some("accept"))?;
        let resp = self
            .authorize(self.http.post(url))
            .json(request)
            .send()
            .await
            .context("failed to reach invite API")?;
        let resp = Self::ensure_success(resp, "accept invite").await?;

        let accepted = resp
            .json::<AcceptInviteResponse>()
            .await
            .context("invite API returned an unreadable accept response")?;
        Ok(accepted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::enums::invite_statuses::InviteStatus;
    use axum::{
        Json, Router,
        extract::Path,
        http::{HeaderMap, StatusCode as AxumStatus},
        routing::{get, post},
    };
    use serde_json::{Value, json};

    async fn spawn_api(router: Router) -> Url {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        Url::parse(&format!("http://{addr}")).unwrap()
    }

    fn client(base_url: Url, session: Option<SessionContext>) -> InviteHttpClient {
        InviteHttpClient::new(base_url, Duration::from_secs(5), session).unwrap()
    }

    async fn show_invite(Path(token): Path<String>) -> (AxumStatus, Json<Value>) {
        match token.as_str() {
            "ok" => (
                AxumStatus::OK,
                Json(json!({
                    "business_name": "Doces da Ana",
                    "client_name": "Ana",
                    "status": "accepted",
                    "tier": "parceiro",
                    "commitment": "trimestral",
                    "price": 299.7,
                    "commitment_months": 3,
                    "qr_payload": "000201PIX"
                })),
            ),
            "old" => (
                AxumStatus::GONE,
                Json(json!({"code": 410, "message": "Invite expired."})),
            ),
            "boom" => (
                AxumStatus::INTERNAL_SERVER_ERROR,
                Json(json!({"code": 500, "message": "database offline"})),
            ),
            _ => (
                AxumStatus::NOT_FOUND,
                Json(json!({"code": 404, "message": "Not found."})),
            ),
        }
    }

    async fn accept_invite(
        Path(token): Path<String>,
        headers: HeaderMap,
        Json(body): Json<Value>,
    ) -> (AxumStatus, Json<Value>) {
        if token == "taken" {
            return (
                AxumStatus::CONFLICT,
                Json(json!({"code": 409, "message": "Invite already accepted."})),
            );
        }
        let auth = headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        (
            AxumStatus::OK,
            Json(json!({"qr_payload": format!("{}|{}", body["cpf_cnpj"].as_str().unwrap_or(""), auth)})),
        )
    }

    fn router() -> Router {
        Router::new()
            .route("/api/invites/:token", get(show_invite))
            .route("/api/invites/:token/accept", post(accept_invite))
    }

    #[tokio::test]
    async fn loads_invite_and_accepts_deprecated_status_field() {
        let base_url = spawn_api(router()).await;
        let invite = client(base_url, None).find_by_token("ok").await.unwrap();

        assert_eq!(invite.business_name, "Doces da Ana");
        assert_eq!(invite.invite_status, InviteStatus::Accepted);
        assert_eq!(invite.qr_payload(), Some("000201PIX"));
        assert_eq!(invite.price_first_month(), 299.7);
    }

    #[tokio::test]
    async fn maps_http_statuses_to_invite_errors() {
        let base_url = spawn_api(router()).await;
        let client = client(base_url, None);

        assert!(matches!(
            client.find_by_token("missing").await,
            Err(InviteError::NotFound)
        ));
        assert!(matches!(
            client.find_by_token("old").await,
            Err(InviteError::Expired)
        ));
        match client.find_by_token("boom").await {
            Err(InviteError::UnexpectedStatus { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "database offline");
            }
            other => panic!("expected unexpected status, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn accept_posts_digits_with_session_token() {
        let base_url = spawn_api(router()).await;
        let client = client(base_url, Some(SessionContext::new("session-token")));

        let accepted = client
            .accept("ok", &AcceptInviteRequest::new("52998224725"))
            .await
            .unwrap();
        assert_eq!(accepted.qr_payload, "52998224725|session-token");

        assert!(matches!(
            client.accept("taken", &AcceptInviteRequest::new("52998224725")).await,
            Err(InviteError::Conflict(message)) if message == "Invite already accepted."
        ));
    }

    #[tokio::test]
    async fn unreachable_api_is_an_internal_error() {
        let client = client(Url::parse("http://127.0.0.1:9").unwrap(), None);
        assert!(matches!(
            client.find_by_token("ok").await,
            Err(InviteError::Internal(_))
        ));
    }

    #[test]
    fn invite_urls_keep_base_path() {
        let client = client(Url::parse("https://rekan.app/backend/").unwrap(), None);
        assert_eq!(
            client.invite_url("t 1", Some("accept")).unwrap().as_str(),
            "https://rekan.app/backend/api/invites/t%201/accept"
        );
    }
}
