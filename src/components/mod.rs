//! UI Components
//!
//! Leptos views over the shared application store.

mod auth_panel;
mod banners;
mod email_log;
mod modal_frame;
mod preparation_panel;
mod purchase_details;
mod purchase_list;
mod purchase_modal;
mod sidebar;
mod supplier_modal;
mod supplier_table;

pub use auth_panel::AuthPanel;
pub use banners::Banners;
pub use email_log::EmailLog;
pub use modal_frame::{ModalActions, ModalFrame};
pub use preparation_panel::PreparationPanel;
pub use purchase_details::PurchaseDetails;
pub use purchase_list::PurchaseList;
pub use purchase_modal::{PurchaseEditModal, PurchaseModal};
pub use sidebar::Sidebar;
pub use supplier_modal::{ContactModal, SupplierModal};
pub use supplier_table::SupplierSection;
