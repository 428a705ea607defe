//! UI Components
//!
//! Page-level Leptos components.

mod create_item_form;
mod fetch_item_form;
mod home_page;
mod items_page;

pub use create_item_form::CreateItemForm;
pub use fetch_item_form::FetchItemForm;
pub use home_page::HomePage;
pub use items_page::ItemsPage;
