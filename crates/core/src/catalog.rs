//! Catalog records and their display form.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::{CurrencyCode, Price, ProductId};

/// A product as served by the catalog service (`GET /products`).
///
/// The price travels as a JSON number and is read into a `Decimal` so that
/// formatting never sees binary floating point artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub id: ProductId,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
}

/// A catalog record with its price formatted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRecord {
    pub id: ProductId,
    pub title: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub image: String,
    pub price_formatted: String,
}

impl DisplayRecord {
    /// Build the display form of a record, formatting its price in `currency`.
    #[must_use]
    pub fn from_record(record: CatalogRecord, currency: CurrencyCode) -> Self {
        let price_formatted = Price::new(record.price, currency).display();
        Self {
            id: record.id,
            title: record.title,
            price: record.price,
            image: record.image,
            price_formatted,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_record_decodes_from_catalog_json() {
        let json = r#"{"id": 1, "title": "Tênis de Caminhada Leve Confortável", "price": 179.9, "image": "https://example.com/a.png"}"#;
        let record: CatalogRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, ProductId::new(1));
        assert_eq!(record.price, "179.9".parse::<Decimal>().unwrap());
        assert_eq!(record.image, "https://example.com/a.png");
    }

    #[test]
    fn test_integer_price_decodes() {
        let json = r#"{"id": 2, "title": "Tênis", "price": 139, "image": "b.png"}"#;
        let record: CatalogRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.price, Decimal::new(139, 0));
    }

    #[test]
    fn test_large_id_decodes() {
        let json = r#"{"id": 3000000000, "title": "Tênis", "price": 99.9, "image": "x.png"}"#;
        let record: CatalogRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, ProductId::new(3_000_000_000));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"id": 3, "title": "Tênis", "image": "c.png"}"#;
        assert!(serde_json::from_str::<CatalogRecord>(json).is_err());
    }

    #[test]
    fn test_display_record_formats_price() {
        let record = CatalogRecord {
            id: ProductId::new(1),
            title: "Tênis".to_string(),
            price: "179.9".parse().unwrap(),
            image: "a.png".to_string(),
        };

        let display = DisplayRecord::from_record(record, CurrencyCode::BRL);

        assert_eq!(display.id, ProductId::new(1));
        assert_eq!(display.title, "Tênis");
        assert_eq!(display.image, "a.png");
        assert_eq!(display.price_formatted, "R$\u{a0}179,90");
    }

    #[test]
    fn test_display_record_serializes_camel_case() {
        let record = CatalogRecord {
            id: ProductId::new(5),
            title: "Tênis".to_string(),
            price: "10".parse().unwrap(),
            image: "e.png".to_string(),
        };
        let value = serde_json::to_value(DisplayRecord::from_record(record, CurrencyCode::USD))
            .unwrap();

        assert_eq!(value["priceFormatted"], "$10.00");
        assert_eq!(value["id"], 5);
    }
}
