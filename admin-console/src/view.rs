//! Product table rendering
//!
//! Renders the fetched product list as a text table. Every render pass
//! rebuilds the whole table, so no stale rows survive a refresh.

use shared::models::Product;
use shared::money::{CurrencyOptions, format_currency};
use shared::reference::find_category_info_by_id;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};

/// Column headers, in render order
const HEADERS: [&str; 9] = [
    "ID",
    "Thumbnail",
    "Name",
    "Description",
    "Brand",
    "Price",
    "Available",
    "Category",
    "Actions",
];

/// Renders the product list
#[derive(Debug, Clone)]
pub struct ProductTable {
    asset_url: String,
    currency: CurrencyOptions,
}

impl ProductTable {
    /// Create a renderer resolving thumbnails against the given asset base
    pub fn new(asset_url: impl Into<String>) -> Self {
        Self {
            asset_url: asset_url.into().trim_end_matches('/').to_string(),
            currency: CurrencyOptions::default(),
        }
    }

    /// Override the currency formatting options
    pub fn with_currency(mut self, currency: CurrencyOptions) -> Self {
        self.currency = currency;
        self
    }

    /// Resolve a thumbnail path against the asset base URL
    fn thumbnail_url(&self, thumbnail: Option<&str>) -> String {
        match thumbnail {
            Some(path) => format!("{}{}", self.asset_url, path),
            None => String::new(),
        }
    }

    /// Availability badge: mark plus its tooltip text
    fn availability_badge(available: bool) -> &'static str {
        if available { "✔ Available" } else { "✘ Not available" }
    }

    /// Category badge: name and icon, degrading for unknown categories
    fn category_badge(raw_id: &str) -> String {
        let info = find_category_info_by_id(raw_id);
        match (info.name, info.icon) {
            (Some(name), Some(icon)) => format!("{name} ({icon})"),
            _ => "unknown category".to_string(),
        }
    }

    fn row(&self, product: &Product) -> [String; 9] {
        let price = format_currency(&format!("{:.2}", product.price), &self.currency)
            .unwrap_or_else(|_| format!("{:.2}", product.price));
        let actions = product
            .id
            .map(|id| format!("edit {id} | delete {id}"))
            .unwrap_or_default();

        [
            product.id.map(|id| id.to_string()).unwrap_or_default(),
            self.thumbnail_url(product.thumbnail.as_deref()),
            product.name.clone(),
            product.description.clone(),
            product.brand.clone(),
            price,
            Self::availability_badge(product.available).to_string(),
            Self::category_badge(&product.category_id.to_string()),
            actions,
        ]
    }

    /// Render the whole table, one row per product
    pub fn render(&self, products: &[Product]) -> String {
        let mut builder = Builder::default();
        builder.push_record(HEADERS);
        for product in products {
            builder.push_record(self.row(product));
        }

        let mut table = builder.build();
        table.with(Style::sharp());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(0..1), Alignment::right());
        table.modify(Columns::new(5..6), Alignment::right());
        table.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: Some(7),
            name: "Telecaster".to_string(),
            description: "Classic solid-body electric".to_string(),
            brand: "Fender".to_string(),
            price: 1234.5,
            available: true,
            thumbnail: Some("/uploads/tele.jpg".to_string()),
            category_id: 1,
        }
    }

    #[test]
    fn rows_carry_resolved_and_formatted_cells() {
        let table = ProductTable::new("http://localhost:8080/");
        let rendered = table.render(&[sample_product()]);

        assert!(rendered.contains("http://localhost:8080/uploads/tele.jpg"));
        assert!(rendered.contains("1.234,50"));
        assert!(rendered.contains("✔ Available"));
        assert!(rendered.contains("Guitars & Strings"));
        assert!(rendered.contains("edit 7 | delete 7"));
    }

    #[test]
    fn unknown_category_degrades_gracefully() {
        let mut product = sample_product();
        product.category_id = 99;
        product.available = false;

        let rendered = ProductTable::new("http://localhost:8080").render(&[product]);
        assert!(rendered.contains("unknown category"));
        assert!(rendered.contains("✘ Not available"));
    }

    #[test]
    fn rerender_replaces_all_rows() {
        let table = ProductTable::new("http://localhost:8080");
        let first = table.render(&[sample_product()]);

        let second = table.render(&[]);
        assert!(first.contains("Telecaster"));
        assert!(!second.contains("Telecaster"));
    }

    #[test]
    fn missing_thumbnail_renders_an_empty_cell() {
        let mut product = sample_product();
        product.thumbnail = None;

        let rendered = ProductTable::new("http://localhost:8080").render(&[product]);
        assert!(!rendered.contains("http://localhost:8080/uploads"));
    }
}
