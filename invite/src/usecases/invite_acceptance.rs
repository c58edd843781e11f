use std::{sync::Arc, time::Duration};

use crates::domain::{
    entities::invites::InviteEntity,
    repositories::invites::{InviteError, InviteRepository},
    value_objects::{
        enums::invite_statuses::InviteStatus,
        invites::{AcceptanceSubmission, SubmissionError},
    },
};
use tracing::{error, info, warn};

use crate::usecases::invite_polling::{PollHandle, spawn_poller};

pub const GENERIC_FAILURE_MESSAGE: &str = "Não foi possível carregar o convite. Tente novamente.";

/// What the invite screen shows for one token.
#[derive(Debug, Clone, PartialEq)]
pub enum InviteView {
    Invited(InviteEntity),
    /// Payment pending. The PIX payload is absent until the backend has one.
    Accepted { qr_payload: Option<String> },
    Active { client_name: String },
    /// HTTP 410.
    Expired,
    /// HTTP 404.
    Invalid,
    /// Cancelled or payment failed.
    Unavailable(InviteStatus),
    Failed(String),
}

impl InviteView {
    pub fn from_invite(invite: InviteEntity) -> Self {
        match invite.invite_status {
            InviteStatus::Invited => InviteView::Invited(invite),
            InviteStatus::Accepted => InviteView::Accepted {
                qr_payload: invite.qr_payload().map(str::to_string),
            },
            InviteStatus::Active => InviteView::Active {
                client_name: invite.client_name,
            },
            status @ (InviteStatus::Cancelled | InviteStatus::PaymentFailed) => {
                InviteView::Unavailable(status)
            }
            InviteStatus::Unknown => InviteView::Failed(GENERIC_FAILURE_MESSAGE.to_string()),
        }
    }

    pub fn from_error(err: &InviteError) -> Self {
        match err {
            InviteError::NotFound => InviteView::Invalid,
            InviteError::Expired => InviteView::Expired,
            _ => InviteView::Failed(GENERIC_FAILURE_MESSAGE.to_string()),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            InviteView::Active { .. }
                | InviteView::Expired
                | InviteView::Invalid
                | InviteView::Unavailable(_)
        )
    }

    /// Status on the invite record this view was built from, if any.
    pub fn status(&self) -> Option<InviteStatus> {
        match self {
            InviteView::Invited(_) => Some(InviteStatus::Invited),
            InviteView::Accepted { .. } => Some(InviteStatus::Accepted),
            InviteView::Active { .. } => Some(InviteStatus::Active),
            InviteView::Unavailable(status) => Some(*status),
            InviteView::Expired | InviteView::Invalid | InviteView::Failed(_) => None,
        }
    }
}

pub struct InviteAcceptanceUseCase {
    invite_repository: Arc<dyn InviteRepository + Send + Sync>,
}

impl InviteAcceptanceUseCase {
    pub fn new(invite_repository: Arc<dyn InviteRepository + Send + Sync>) -> Self {
        Self { invite_repository }
    }

    pub async fn load(&self, token: &str) -> InviteView {
        match self.invite_repository.find_by_token(token).await {
            Ok(invite) => {
                let view = InviteView::from_invite(invite);
                info!(status = ?view.status(), "invite_acceptance: invite loaded");
                view
            }
            Err(err) => {
                log_invite_error(&err, "invite_acceptance: failed to load invite");
                InviteView::from_error(&err)
            }
        }
    }

    /// Validates locally, then accepts. Nothing is sent when validation fails.
    pub async fn submit(
        &self,
        token: &str,
        submission: &AcceptanceSubmission,
    ) -> Result<InviteView, SubmissionError> {
        let request = submission.validate().map_err(|err| {
            info!(reason = %err, "invite_acceptance: submission rejected locally");
            err
        })?;

        match self.invite_repository.accept(token, &request).await {
            Ok(accepted) => {
                info!("invite_acceptance: invite accepted, awaiting payment");
                Ok(InviteView::Accepted {
                    qr_payload: Some(accepted.qr_payload).filter(|payload| !payload.is_empty()),
                })
            }
            Err(InviteError::Conflict(message)) => {
                // Someone already moved the invite forward; show where it is now.
                warn!(message = %message, "invite_acceptance: invite changed concurrently, reloading");
                Ok(self.load(token).await)
            }
            Err(InviteError::UnexpectedStatus { status, message }) if status < 500 => {
                warn!(status, message = %message, "invite_acceptance: accept refused");
                Ok(InviteView::Failed(message))
            }
            Err(err) => {
                log_invite_error(&err, "invite_acceptance: failed to accept invite");
                Ok(InviteView::from_error(&err))
            }
        }
    }

    /// Re-fetches the invite every `interval` until it reaches a terminal view.
    pub fn start_polling(&self, token: &str, interval: Duration, initial: InviteView) -> PollHandle {
        spawn_poller(
            Arc::clone(&self.invite_repository),
            token.to_string(),
            interval,
            initial,
        )
    }
}

fn log_invite_error(err: &InviteError, message: &'static str) {
    match err {
        InviteError::NotFound | InviteError::Expired => info!(error = %err, "{}", message),
        _ => error!(error = %err, "{}", message),
    }
}
