//! UI Components
//!
//! Reusable Leptos components.

mod alert_banner;
mod auth_modals;
mod category_select;
mod delete_confirm_button;
mod filter_bar;
mod header;
mod pagination;
mod request_card;
mod request_form;
mod request_list;
mod stats_dashboard;

pub use alert_banner::AlertBanner;
pub use auth_modals::AuthModals;
pub use category_select::CategorySelect;
pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_bar::FilterBar;
pub use header::Header;
pub use pagination::Pagination;
pub use request_card::RequestCard;
pub use request_form::RequestForm;
pub use request_list::RequestList;
pub use stats_dashboard::StatsDashboard;
