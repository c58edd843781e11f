pub mod discover_accounts;
