pub mod discovered_accounts;
pub mod invites;
