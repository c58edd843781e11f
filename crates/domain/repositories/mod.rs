pub mod invites;
pub mod page_renderer;
pub mod search_engine;
