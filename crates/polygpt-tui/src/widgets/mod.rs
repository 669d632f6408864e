//! Custom widget components

mod chat_view;
mod dashboard;
mod header;
mod input_bar;
mod notice;
mod sidebar;

pub use chat_view::{feature_boxes, wrap_text, ChatView};
pub use dashboard::{format_thousands, Dashboard, LEDGER_TITLE};
pub use header::{engine_label, network_label, MainHeader};
pub use input_bar::{inference_cost, placeholder, InputBar};
pub use notice::NoticeLine;
pub use sidebar::Sidebar;
