//! Records served by the travel journal API.

use serde::{Deserialize, Serialize};

/// A browsable travel category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A promotional offer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Promo {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "imageUrl")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub promo_code: Option<String>,
    #[serde(default)]
    pub promo_discount_price: Option<f64>,
    #[serde(default)]
    pub minimum_claim_price: Option<f64>,
    #[serde(default)]
    pub terms_condition: Option<String>,
    #[serde(default, rename = "validUntil")]
    pub valid_until: Option<String>,
}

/// Body of `POST /add-cart`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddCartRequest {
    pub category_id: String,
    pub quantity: u32,
}

impl AddCartRequest {
    /// One unit of `category_id`.
    #[must_use]
    pub fn single(category_id: impl Into<String>) -> Self {
        Self {
            category_id: category_id.into(),
            quantity: 1,
        }
    }
}

/// Answer to `POST /add-cart`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_reads_camel_case_fields() {
        let category: Category = serde_json::from_value(json!({
            "id": "c1",
            "name": "Beach",
            "imageUrl": "https://img/beach.png",
            "updatedAt": "2024-01-02"
        }))
        .unwrap();
        assert_eq!(category.image_url.as_deref(), Some("https://img/beach.png"));
        assert_eq!(category.updated_at.as_deref(), Some("2024-01-02"));
        assert_eq!(category.description, None);
    }

    #[test]
    fn promo_mixes_snake_and_camel_case() {
        let promo: Promo = serde_json::from_value(json!({
            "id": "p1",
            "title": "Summer",
            "imageUrl": "https://img/summer.png",
            "promo_discount_price": 25,
            "validUntil": "2024-12-31"
        }))
        .unwrap();
        assert_eq!(promo.promo_discount_price, Some(25.0));
        assert_eq!(promo.valid_until.as_deref(), Some("2024-12-31"));
    }

    #[test]
    fn add_cart_request_serializes_camel_case() {
        let body = serde_json::to_value(AddCartRequest::single("c9")).unwrap();
        assert_eq!(body, json!({ "categoryId": "c9", "quantity": 1 }));
    }
}
