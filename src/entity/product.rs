/// Products (`/api/produk`).

use serde::{Deserialize, Serialize};

use crate::listview::Matcher;
use crate::schema::{ColumnDef, Record};
use crate::value::Value;

/// One pharmacy product as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nama")]
    pub name: String,
    #[serde(rename = "kategori")]
    pub category: String,
    #[serde(rename = "deskripsi")]
    pub description: String,
    #[serde(rename = "harga")]
    pub price: f64,
    #[serde(rename = "stok")]
    pub stock: i64,
    /// Server-side path of the product image, when one was uploaded.
    #[serde(rename = "gambar", default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductField {
    Id,
    Name,
    Category,
    Description,
    Price,
    Stock,
    Image,
}

impl Record for Product {
    type Field = ProductField;

    fn get(&self, field: ProductField) -> Value {
        match field {
            ProductField::Id => self.id.into(),
            ProductField::Name => self.name.clone().into(),
            ProductField::Category => self.category.clone().into(),
            ProductField::Description => self.description.clone().into(),
            ProductField::Price => self.price.into(),
            ProductField::Stock => self.stock.into(),
            ProductField::Image => self.image.clone().into(),
        }
    }
}

impl Product {
    /// The product table's columns.
    pub fn columns() -> Vec<ColumnDef<Product>> {
        vec![
            ColumnDef::new(ProductField::Id, "ID"),
            ColumnDef::new(ProductField::Name, "Nama"),
            ColumnDef::new(ProductField::Category, "Kategori"),
            ColumnDef::new(ProductField::Description, "Deskripsi"),
            ColumnDef::new(ProductField::Price, "Harga").with_render(price_cell),
            ColumnDef::new(ProductField::Stock, "Stok"),
            ColumnDef::new(ProductField::Image, "Gambar").not_sortable(),
        ]
    }

    /// Fields the page's free-text search runs over.
    pub fn search_fields() -> Vec<ProductField> {
        vec![ProductField::Name, ProductField::Category]
    }

    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Shorthand constructor for examples and tests.
    pub fn sample(id: i64, name: &str, category: &str, price: f64, stock: i64) -> Self {
        Product {
            id,
            name: name.to_string(),
            category: category.to_string(),
            description: String::new(),
            price,
            stock,
            image: None,
        }
    }
}

/// The stock availability dropdown: out of stock (`habis`) or in stock
/// (`tersedia`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockFilter {
    Out,
    Available,
}

impl StockFilter {
    pub fn matcher(self) -> Matcher {
        match self {
            StockFilter::Out => Matcher::Where(|v| v.as_i64() == Some(0)),
            StockFilter::Available => Matcher::Where(|v| v.as_i64().is_some_and(|n| n > 0)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StockFilter::Out => "habis",
            StockFilter::Available => "tersedia",
        }
    }
}

/// Renders a price with thousands separators, e.g. `15.000`.
fn price_cell(product: &Product) -> String {
    group_thousands(product.price.round() as i64)
}

fn group_thousands(n: i64) -> String {
    let digits = n.abs().to_string();
    let mut out = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    if n < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_format() {
        let json = r#"{
            "id": 3,
            "nama": "Paracetamol",
            "kategori": "obat",
            "deskripsi": "Pereda demam",
            "harga": 5000,
            "stok": 30,
            "gambar": "/uploads/paracetamol.jpg"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.name, "Paracetamol");
        assert_eq!(product.price, 5000.0);
        assert_eq!(product.image.as_deref(), Some("/uploads/paracetamol.jpg"));
    }

    #[test]
    fn test_missing_image_is_none() {
        let json = r#"{"id":1,"nama":"X","kategori":"obat","deskripsi":"","harga":1,"stok":0}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.image.is_none());
        assert_eq!(product.get(ProductField::Image), Value::Null);
    }

    #[test]
    fn test_price_rendering() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(15000), "15.000");
        assert_eq!(group_thousands(1234567), "1.234.567");
    }

    #[test]
    fn test_stock_filter_matchers() {
        let out = StockFilter::Out.matcher();
        let available = StockFilter::Available.matcher();
        assert!(out.matches(&Value::Int(0)));
        assert!(!out.matches(&Value::Int(3)));
        assert!(available.matches(&Value::Int(3)));
        assert!(!available.matches(&Value::Int(0)));
    }

    #[test]
    fn test_columns_cover_every_data_field() {
        let columns = Product::columns();
        assert_eq!(columns.len(), 7);
        let price_col = columns
            .iter()
            .find(|c| c.field == ProductField::Price)
            .unwrap();
        let product = Product::sample(1, "X", "obat", 15000.0, 1);
        assert_eq!(price_col.cell_text(&product), "15.000");
    }
}
