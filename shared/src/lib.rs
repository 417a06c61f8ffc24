//! Shared types for the instrument catalog admin
//!
//! Data models, static reference data and currency formatting used by both
//! the catalog client and the admin console.

pub mod models;
pub mod money;
pub mod reference;

// Re-exports
pub use models::{Brand, Category, CategoryInfo, Product, ProductPayload};
pub use money::{CurrencyOptions, Locale, format_currency};
pub use reference::{find_brand_by_id, find_brand_by_name, find_category_info_by_id};
