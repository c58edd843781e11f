use std::{sync::Arc, time::Duration};

use crates::domain::repositories::invites::{InviteError, InviteRepository};
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::MissedTickBehavior,
};
use tracing::{debug, info, warn};

use crate::usecases::invite_acceptance::InviteView;

/// Running poll for one invite. Dropping the handle stops the poll.
pub struct PollHandle {
    receiver: watch::Receiver<InviteView>,
    task: JoinHandle<()>,
}

impl PollHandle {
    pub fn current(&self) -> InviteView {
        self.receiver.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<InviteView> {
        self.receiver.clone()
    }

    /// Resolves with the first terminal view, or the last published one if the poll was cancelled.
    pub async fn wait_for_terminal(&mut self) -> InviteView {
        let reached = self
            .receiver
            .wait_for(InviteView::is_terminal)
            .await
            .map(|view| view.clone());
        reached.unwrap_or_else(|_| self.receiver.borrow().clone())
    }

    pub fn cancel(&self) {
        self.task.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

pub(crate) fn spawn_poller(
    invite_repository: Arc<dyn InviteRepository + Send + Sync>,
    token: String,
    interval: Duration,
    initial: InviteView,
) -> PollHandle {
    let (sender, receiver) = watch::channel(initial.clone());
    let task = tokio::spawn(poll_until_terminal(
        invite_repository,
        token,
        interval,
        initial,
        sender,
    ));

    PollHandle { receiver, task }
}

async fn poll_until_terminal(
    invite_repository: Arc<dyn InviteRepository + Send + Sync>,
    token: String,
    interval: Duration,
    initial: InviteView,
    sender: watch::Sender<InviteView>,
) {
    if initial.is_terminal() {
        return;
    }
    info!(interval_ms = interval.as_millis() as u64, "invite_polling: started");

    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick fires immediately; the initial view already covers it.
    ticker.tick().await;

    let mut current = initial;
    loop {
        ticker.tick().await;

        let fetched = match invite_repository.find_by_token(&token).await {
            Ok(invite) => InviteView::from_invite(invite),
            Err(err @ (InviteError::NotFound | InviteError::Expired)) => InviteView::from_error(&err),
            Err(err) => {
                warn!(error = %err, "invite_polling: poll failed, retrying on next tick");
                continue;
            }
        };

        let Some(next) = advance(&current, fetched) else {
            continue;
        };

        debug!(status = ?next.status(), "invite_polling: view changed");
        current = next.clone();
        if sender.send(next).is_err() {
            debug!("invite_polling: no listeners left");
            break;
        }

        if current.is_terminal() {
            info!(status = ?current.status(), "invite_polling: reached terminal state");
            break;
        }
    }
}

/// Decides what to publish after a poll. `None` keeps the current view.
fn advance(current: &InviteView, fetched: InviteView) -> Option<InviteView> {
    // An unreadable record says nothing about progress; keep what is on screen.
    if let InviteView::Failed(message) = &fetched {
        warn!(message = %message, "invite_polling: unreadable invite, retrying on next tick");
        return None;
    }

    if let (Some(from), Some(to)) = (current.status(), fetched.status()) {
        if from.is_regression_to(to) {
            warn!(from = %from, to = %to, "invite_polling: ignoring status regression");
            return None;
        }
    }

    // A poll without the PIX payload must not wipe the one already on screen.
    let next = match (current, fetched) {
        (
            InviteView::Accepted {
                qr_payload: Some(known),
            },
            InviteView::Accepted { qr_payload: None },
        ) => InviteView::Accepted {
            qr_payload: Some(known.clone()),
        },
        (_, fetched) => fetched,
    };

    if &next == current { None } else { Some(next) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crates::domain::{
        entities::invites::InviteEntity, repositories::invites::MockInviteRepository,
        value_objects::enums::invite_statuses::InviteStatus,
    };
    use std::sync::atomic::{AtomicUsize, Ordering};

    const TICK: Duration = Duration::from_millis(10);
    const PAYLOAD: &str = "00020126580014br.gov.bcb.pix0136test-payload";

    fn invite(status: InviteStatus, qr_payload: Option<&str>) -> InviteEntity {
        InviteEntity {
            client_name: "Ana".to_string(),
            invite_status: status,
            qr_payload: qr_payload.map(str::to_string),
            ..InviteEntity::default()
        }
    }

    fn accepted_view() -> InviteView {
        InviteView::Accepted {
            qr_payload: Some(PAYLOAD.to_string()),
        }
    }

    /// Mock that answers with `responses` in order, repeating the last one.
    fn scripted(responses: Vec<fn() -> Result<InviteEntity, InviteError>>) -> MockInviteRepository {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut repo = MockInviteRepository::new();
        repo.expect_find_by_token().returning(move |_| {
            let call = calls.fetch_add(1, Ordering::SeqCst);
            let respond = responses[call.min(responses.len() - 1)];
            respond()
        });
        repo
    }

    async fn finish(handle: &mut PollHandle) -> InviteView {
        tokio::time::timeout(Duration::from_secs(5), handle.wait_for_terminal())
            .await
            .expect("poll did not reach a terminal view")
    }

    #[tokio::test]
    async fn accepted_then_active_ends_in_success() {
        let repo = scripted(vec![
            || Ok(invite(InviteStatus::Accepted, Some(PAYLOAD))),
            || Ok(invite(InviteStatus::Active, None)),
        ]);

        let mut handle = spawn_poller(Arc::new(repo), "tok".to_string(), TICK, accepted_view());
        assert_eq!(handle.current(), accepted_view());

        let view = finish(&mut handle).await;
        assert_eq!(
            view,
            InviteView::Active {
                client_name: "Ana".to_string()
            }
        );

        tokio::time::sleep(TICK * 3).await;
        assert!(handle.is_finished());
    }

    #[tokio::test]
    async fn regressions_and_failures_are_skipped() {
        let repo = scripted(vec![
            || Ok(invite(InviteStatus::Invited, None)),
            || {
                Err(InviteError::UnexpectedStatus {
                    status: 503,
                    message: "unavailable".to_string(),
                })
            },
            || Ok(invite(InviteStatus::Accepted, None)),
            || Ok(invite(InviteStatus::Active, None)),
        ]);

        let mut handle = spawn_poller(Arc::new(repo), "tok".to_string(), TICK, accepted_view());
        let view = finish(&mut handle).await;
        assert!(matches!(view, InviteView::Active { .. }));
    }

    #[tokio::test]
    async fn expiry_while_waiting_is_terminal() {
        let repo = scripted(vec![|| Err(InviteError::Expired)]);

        let mut handle = spawn_poller(Arc::new(repo), "tok".to_string(), TICK, accepted_view());
        assert_eq!(finish(&mut handle).await, InviteView::Expired);
    }

    #[tokio::test]
    async fn terminal_initial_view_never_polls() {
        let mut repo = MockInviteRepository::new();
        repo.expect_find_by_token().never();

        let initial = InviteView::Active {
            client_name: "Ana".to_string(),
        };
        let mut handle = spawn_poller(Arc::new(repo), "tok".to_string(), TICK, initial.clone());
        assert_eq!(finish(&mut handle).await, initial);
    }

    #[tokio::test]
    async fn cancelled_poll_stops_fetching() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut repo = MockInviteRepository::new();
        repo.expect_find_by_token().returning(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(invite(InviteStatus::Accepted, Some(PAYLOAD)))
        });

        let handle = spawn_poller(Arc::new(repo), "tok".to_string(), TICK, accepted_view());
        tokio::time::sleep(TICK * 5).await;
        handle.cancel();
        tokio::time::sleep(TICK * 2).await;

        let seen = calls.load(Ordering::SeqCst);
        tokio::time::sleep(TICK * 5).await;
        assert_eq!(calls.load(Ordering::SeqCst), seen);
        assert!(handle.is_finished());
        assert_eq!(handle.current(), accepted_view());
    }

    #[test]
    fn backwards_moves_are_not_published() {
        assert_eq!(
            advance(&accepted_view(), InviteView::Invited(InviteEntity::default())),
            None
        );
        assert_eq!(advance(&accepted_view(), accepted_view()), None);
        assert_eq!(
            advance(&accepted_view(), InviteView::Unavailable(InviteStatus::Cancelled)),
            Some(InviteView::Unavailable(InviteStatus::Cancelled))
        );
    }

    #[test]
    fn unreadable_status_does_not_open_a_regression() {
        let unknown = InviteView::from_invite(invite(InviteStatus::Unknown, None));
        assert_eq!(advance(&accepted_view(), unknown), None);

        let invited = InviteView::from_invite(invite(InviteStatus::Invited, None));
        assert_eq!(advance(&accepted_view(), invited), None);

        let active = InviteView::from_invite(invite(InviteStatus::Active, None));
        assert_eq!(
            advance(&accepted_view(), active),
            Some(InviteView::Active {
                client_name: "Ana".to_string()
            })
        );
    }

    #[tokio::test]
    async fn unknown_status_keeps_the_payload_on_screen() {
        let repo = scripted(vec![
            || Ok(invite(InviteStatus::Unknown, None)),
            || Ok(invite(InviteStatus::Invited, None)),
            || Ok(invite(InviteStatus::Accepted, None)),
            || Ok(invite(InviteStatus::Active, None)),
        ]);

        let mut handle = spawn_poller(Arc::new(repo), "tok".to_string(), TICK, accepted_view());
        let mut updates = handle.subscribe();
        let mut seen = Vec::new();
        let view = tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                if updates.changed().await.is_err() {
                    break updates.borrow().clone();
                }
                let view = updates.borrow_and_update().clone();
                seen.push(view.clone());
                if view.is_terminal() {
                    break view;
                }
            }
        })
        .await
        .expect("poll did not reach a terminal view");

        assert!(matches!(view, InviteView::Active { .. }));
        assert!(
            seen.iter()
                .all(|v| matches!(v, InviteView::Active { .. })),
            "unexpected intermediate views: {seen:?}"
        );
        assert!(matches!(finish(&mut handle).await, InviteView::Active { .. }));
    }

    #[test]
    fn payload_survives_polls_without_it() {
        let fetched = InviteView::Accepted { qr_payload: None };
        assert_eq!(advance(&accepted_view(), fetched), None);

        let from_invited = InviteView::Accepted { qr_payload: None };
        assert_eq!(
            advance(&InviteView::Invited(InviteEntity::default()), from_invited.clone()),
            Some(from_invited)
        );
    }
}
