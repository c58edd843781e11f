pub mod driver;
pub mod google_search;
pub mod page_renderer;
