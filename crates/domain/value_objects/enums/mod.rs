pub mod commitments;
pub mod invite_statuses;
pub mod tiers;
