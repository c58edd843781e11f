use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{
    enums::{commitments::Commitment, invite_statuses::InviteStatus, tiers::Tier},
    pricing::price,
};

/// Invite as returned by `GET /api/invites/{token}`.
///
/// `invite_status` is the canonical field; the older `status` name is still read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InviteEntity {
    #[serde(default)]
    pub business_name: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default, alias = "status")]
    pub invite_status: InviteStatus,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub commitment: Option<String>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub commitment_months: u32,
    #[serde(default)]
    pub qr_payload: Option<String>,
}

impl InviteEntity {
    pub fn plan(&self) -> Option<(Tier, Commitment)> {
        let tier = self.tier.as_deref().and_then(Tier::parse)?;
        let commitment = self.commitment.as_deref().and_then(Commitment::parse)?;
        Some((tier, commitment))
    }

    /// First charge: the whole billing period is paid up front.
    /// Falls back to the list price when the backend sent none.
    pub fn price_first_month(&self) -> f64 {
        if self.price > 0.0 {
            return self.price;
        }
        self.plan()
            .map(|(tier, commitment)| price(tier, commitment))
            .unwrap_or(0.0)
    }

    pub fn qr_payload(&self) -> Option<&str> {
        self.qr_payload.as_deref().filter(|payload| !payload.is_empty())
    }
}

/// Body of a successful `POST /api/invites/{token}/accept`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AcceptInviteResponse {
    pub qr_payload: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_canonical_payload() {
        let invite: InviteEntity = serde_json::from_str(
            r#"{
                "business_name": "Padaria Dona Elza",
                "client_name": "Ana",
                "invite_status": "accepted",
                "tier": "parceiro",
                "commitment": "trimestral",
                "price": 299.7,
                "commitment_months": 3,
                "qr_payload": "00020126580014br.gov.bcb.pix0136test-payload"
            }"#,
        )
        .unwrap();

        assert_eq!(invite.invite_status, InviteStatus::Accepted);
        assert_eq!(invite.plan(), Some((Tier::Parceiro, Commitment::Trimestral)));
        assert_eq!(invite.price_first_month(), 299.7);
        assert!(invite.qr_payload().is_some());
    }

    #[test]
    fn reads_deprecated_status_field() {
        let invite: InviteEntity = serde_json::from_str(r#"{"status": "active"}"#).unwrap();
        assert_eq!(invite.invite_status, InviteStatus::Active);
        assert_eq!(invite.price_first_month(), 0.0);
    }

    #[test]
    fn missing_price_falls_back_to_the_list_price() {
        let invite: InviteEntity = serde_json::from_str(
            r#"{"invite_status": "invited", "tier": "basico", "commitment": "trimestral", "price": 0}"#,
        )
        .unwrap();
        assert_eq!(invite.price_first_month(), 179.70);
    }

    #[test]
    fn unknown_plan_values_are_ignored() {
        let invite: InviteEntity =
            serde_json::from_str(r#"{"invite_status": "invited", "tier": "", "commitment": "mensal"}"#)
                .unwrap();
        assert_eq!(invite.plan(), None);
    }
}
