//! Admin console for the instrument catalog
//!
//! Drives the remote catalog API from a terminal session: listing products,
//! creating, editing and deleting them, and uploading a thumbnail per
//! product. The form controller and table renderer are plain types with no
//! terminal attached, so every state transition is testable on its own.

pub mod app;
pub mod config;
pub mod form;
pub mod validation;
pub mod view;

pub use app::App;
pub use config::AppConfig;
pub use form::{BrandInput, Field, FormError, FormMode, ProductForm};
pub use view::ProductTable;
