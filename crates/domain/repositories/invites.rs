use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;

use crate::domain::{
    entities::invites::{AcceptInviteResponse, InviteEntity},
    value_objects::invites::AcceptInviteRequest,
};

#[derive(Debug, Error)]
pub enum InviteError {
    #[error("invite not found")]
    NotFound,
    #[error("invite expired")]
    Expired,
    #[error("invite already handled: {0}")]
    Conflict(String),
    #[error("unexpected invite API response ({status}): {message}")]
    UnexpectedStatus { status: u16, message: String },
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[automock]
#[async_trait]
pub trait InviteRepository {
    async fn find_by_token(&self, token: &str) -> Result<InviteEntity, InviteError>;

    async fn accept(
        &self,
        token: &str,
        request: &AcceptInviteRequest,
    ) -> Result<AcceptInviteResponse, InviteError>;
}
