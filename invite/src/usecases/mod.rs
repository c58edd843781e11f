pub mod invite_acceptance;
pub mod invite_polling;
