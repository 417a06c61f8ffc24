//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity as served by the catalog API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Server-assigned id, absent for unsaved drafts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    /// Known brand name, or free text for a new brand
    pub brand: String,
    pub price: f64,
    pub available: bool,
    /// Server path of the uploaded thumbnail
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Category reference
    pub category_id: i64,
}

/// Create/update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    pub brand: String,
    pub price: f64,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    pub category_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_serializes_typed_fields() {
        let payload = ProductPayload {
            name: "Stratocaster".to_string(),
            description: "Solid-body electric guitar".to_string(),
            brand: "Fender".to_string(),
            price: 19.99,
            available: true,
            thumbnail: Some("/uploads/strat.jpg".to_string()),
            category_id: 3,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["price"], serde_json::json!(19.99));
        assert_eq!(value["categoryId"], serde_json::json!(3));
        assert_eq!(value["thumbnail"], serde_json::json!("/uploads/strat.jpg"));
    }

    #[test]
    fn unsaved_product_omits_id() {
        let product = Product {
            id: None,
            name: "Djembe".to_string(),
            description: "Hand drum".to_string(),
            brand: "Tycoon".to_string(),
            price: 120.0,
            available: false,
            thumbnail: None,
            category_id: 4,
        };

        let value = serde_json::to_value(&product).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("thumbnail").is_none());
    }

    #[test]
    fn product_deserializes_from_wire_shape() {
        let json = r#"{
            "id": 7,
            "name": "Upright",
            "description": "Acoustic piano in good shape",
            "brand": "Yamaha",
            "price": 3200.5,
            "available": true,
            "thumbnail": "/uploads/upright.jpg",
            "categoryId": 3
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, Some(7));
        assert_eq!(product.category_id, 3);
        assert_eq!(product.thumbnail.as_deref(), Some("/uploads/upright.jpg"));
    }
}
