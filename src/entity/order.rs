/// Orders (`/api/pesanan`).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::listview::Matcher;
use crate::schema::{ColumnDef, Record};
use crate::value::Value;

/// One purchase order row. `customer` comes from a join on the user table and
/// can be absent when the account was deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    /// Human-facing order code, e.g. `PSN-20240503-0007`.
    #[serde(rename = "id_pesanan")]
    pub code: String,
    #[serde(rename = "nama", default)]
    pub customer: Option<String>,
    #[serde(rename = "tanggal_pembelian")]
    pub purchased_at: DateTime<Utc>,
    #[serde(rename = "status_pembelian")]
    pub status: OrderStatus,
    /// Path of the uploaded payment proof, once the customer paid.
    #[serde(rename = "bukti_pembayaran", default)]
    pub payment_proof: Option<String>,
}

/// Purchase lifecycle. Wire values are the backend's Indonesian status names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "menunggu")]
    Pending,
    #[serde(rename = "dibayar")]
    Paid,
    #[serde(rename = "diterima")]
    Received,
    #[serde(rename = "selesai")]
    Completed,
    #[serde(rename = "dibatalkan")]
    Cancelled,
}

impl OrderStatus {
    /// The admissible statuses, in the order the edit form offers them.
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Paid,
        OrderStatus::Received,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "menunggu",
            OrderStatus::Paid => "dibayar",
            OrderStatus::Received => "diterima",
            OrderStatus::Completed => "selesai",
            OrderStatus::Cancelled => "dibatalkan",
        }
    }

    /// Capitalized display label.
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Menunggu",
            OrderStatus::Paid => "Dibayar",
            OrderStatus::Received => "Diterima",
            OrderStatus::Completed => "Selesai",
            OrderStatus::Cancelled => "Dibatalkan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Id,
    Code,
    Customer,
    PurchasedAt,
    Status,
    PaymentProof,
}

impl Record for Order {
    type Field = OrderField;

    fn get(&self, field: OrderField) -> Value {
        match field {
            OrderField::Id => self.id.into(),
            OrderField::Code => self.code.clone().into(),
            OrderField::Customer => self.customer.clone().into(),
            OrderField::PurchasedAt => self.purchased_at.into(),
            OrderField::Status => self.status.as_str().into(),
            OrderField::PaymentProof => self.payment_proof.clone().into(),
        }
    }
}

impl Order {
    pub fn columns() -> Vec<ColumnDef<Order>> {
        vec![
            ColumnDef::new(OrderField::Id, "ID"),
            ColumnDef::new(OrderField::Code, "ID Pesanan"),
            ColumnDef::new(OrderField::Customer, "Nama User"),
            ColumnDef::new(OrderField::PurchasedAt, "Tanggal"),
            ColumnDef::new(OrderField::Status, "Status").with_render(status_cell),
            ColumnDef::new(OrderField::PaymentProof, "Bukti Bayar").not_sortable(),
        ]
    }

    /// Column subset for the CSV export, with the export's header names.
    pub fn export_columns() -> Vec<ColumnDef<Order>> {
        vec![
            ColumnDef::new(OrderField::Id, "ID"),
            ColumnDef::new(OrderField::Code, "ID_Pesanan"),
            ColumnDef::new(OrderField::Customer, "Nama"),
            ColumnDef::new(OrderField::PurchasedAt, "Tanggal"),
            ColumnDef::new(OrderField::Status, "Status"),
        ]
    }

    pub fn search_fields() -> Vec<OrderField> {
        vec![OrderField::Code, OrderField::Customer]
    }

    /// Matcher for the date filter: matches orders purchased on `day`.
    /// Compares rendered calendar days, so the time component is ignored.
    pub fn date_filter(day: NaiveDate) -> Matcher {
        Matcher::Equals(day.format("%d-%m-%Y").to_string())
    }
}

/// One line of an order's detail breakdown
/// (`/api/pesanan/detail_pesanan/{code}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "id_produk")]
    pub product_id: i64,
    #[serde(rename = "jumlah")]
    pub quantity: i64,
    #[serde(rename = "harga")]
    pub unit_price: f64,
    pub total: f64,
}

fn status_cell(order: &Order) -> String {
    order.status.label().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: i64, code: &str, status: OrderStatus, timestamp: &str) -> Order {
        Order {
            id,
            code: code.to_string(),
            customer: Some("Budi".to_string()),
            purchased_at: timestamp.parse().unwrap(),
            status,
            payment_proof: None,
        }
    }

    #[test]
    fn test_status_wire_round_trip() {
        for status in OrderStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: OrderStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn test_deserialize_wire_format() {
        let json = r#"{
            "id": 9,
            "id_pesanan": "PSN-20240503-0007",
            "nama": "Budi",
            "tanggal_pembelian": "2024-05-03T10:15:00.000Z",
            "status_pembelian": "dibayar",
            "bukti_pembayaran": "/uploads/bukti/9.jpg"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, OrderStatus::Paid);
        assert_eq!(order.customer.as_deref(), Some("Budi"));
        assert_eq!(order.get(OrderField::PurchasedAt).to_string(), "03-05-2024");
    }

    #[test]
    fn test_missing_customer_and_proof() {
        let json = r#"{
            "id": 1,
            "id_pesanan": "PSN-1",
            "tanggal_pembelian": "2024-01-01T00:00:00Z",
            "status_pembelian": "menunggu"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert!(order.customer.is_none());
        assert_eq!(order.get(OrderField::Customer), Value::Null);
        assert_eq!(order.get(OrderField::PaymentProof), Value::Null);
    }

    #[test]
    fn test_date_filter_ignores_time_of_day() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 3).unwrap();
        let matcher = Order::date_filter(day);

        let morning = sample(1, "PSN-1", OrderStatus::Pending, "2024-05-03T06:00:00Z");
        let evening = sample(2, "PSN-2", OrderStatus::Pending, "2024-05-03T22:45:00Z");
        let other = sample(3, "PSN-3", OrderStatus::Pending, "2024-05-04T06:00:00Z");

        assert!(matcher.matches(&morning.get(OrderField::PurchasedAt)));
        assert!(matcher.matches(&evening.get(OrderField::PurchasedAt)));
        assert!(!matcher.matches(&other.get(OrderField::PurchasedAt)));
    }

    #[test]
    fn test_order_item_wire_format() {
        let json = r#"{"id_produk": 3, "jumlah": 2, "harga": 5000, "total": 10000}"#;
        let item: OrderItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.quantity, 2);
        assert_eq!(item.total, 10000.0);
    }
}
