use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InviteStatus {
    #[default]
    Invited,
    Accepted,
    Active,
    Cancelled,
    PaymentFailed,
    #[serde(other)]
    Unknown,
}

impl InviteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InviteStatus::Invited => "invited",
            InviteStatus::Accepted => "accepted",
            InviteStatus::Active => "active",
            InviteStatus::Cancelled => "cancelled",
            InviteStatus::PaymentFailed => "payment_failed",
            InviteStatus::Unknown => "unknown",
        }
    }

    /// Position on the invited -> accepted -> active track. Statuses outside it have none.
    pub fn progress(&self) -> Option<u8> {
        match self {
            InviteStatus::Invited => Some(0),
            InviteStatus::Accepted => Some(1),
            InviteStatus::Active => Some(2),
            _ => None,
        }
    }

    /// True when `next` would move the invite backwards on the progress track.
    pub fn is_regression_to(&self, next: InviteStatus) -> bool {
        match (self.progress(), next.progress()) {
            (Some(current), Some(next)) => next < current,
            _ => false,
        }
    }
}

impl Display for InviteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_values() {
        let status: InviteStatus = serde_json::from_str("\"payment_failed\"").unwrap();
        assert_eq!(status, InviteStatus::PaymentFailed);
        let status: InviteStatus = serde_json::from_str("\"active\"").unwrap();
        assert_eq!(status, InviteStatus::Active);
        let status: InviteStatus = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(status, InviteStatus::Unknown);
    }

    #[test]
    fn only_backward_moves_on_the_track_are_regressions() {
        assert!(InviteStatus::Active.is_regression_to(InviteStatus::Accepted));
        assert!(InviteStatus::Accepted.is_regression_to(InviteStatus::Invited));
        assert!(!InviteStatus::Invited.is_regression_to(InviteStatus::Active));
        assert!(!InviteStatus::Accepted.is_regression_to(InviteStatus::PaymentFailed));
    }
}
