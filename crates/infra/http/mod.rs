pub mod invite_client;
pub mod session;
