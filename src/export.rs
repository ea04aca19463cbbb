/// CSV export of a filtered collection.
///
/// Builds the text of the file; handing it to the user as a download is the
/// host UI's job.

use crate::schema::{ColumnDef, Record};

/// Renders rows to CSV: one literal header row from the column labels, then
/// one line per row through the column renderers. Fields containing a comma,
/// quote, or newline are quoted with doubled inner quotes.
///
/// Pages export their *filtered* rows, so this takes whatever iterator of
/// rows the caller derived, a full collection or a [`Page`]'s rows alike.
///
/// [`Page`]: crate::listview::Page
///
/// # Examples
///
/// ```
/// use apotik_admin::entity::Product;
/// use apotik_admin::export::csv_export;
///
/// let rows = vec![Product::sample(1, "Bodrex", "obat", 8000.0, 12)];
/// let csv = csv_export(&Product::columns(), &rows);
/// assert!(csv.starts_with("ID,Nama,Kategori,"));
/// assert!(csv.contains("1,Bodrex,obat,"));
/// ```
pub fn csv_export<'a, R, I>(columns: &[ColumnDef<R>], rows: I) -> String
where
    R: Record + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let mut out = String::new();

    let header: Vec<String> = columns.iter().map(|c| escape(c.label)).collect();
    out.push_str(&header.join(","));
    out.push('\n');

    for row in rows {
        let cells: Vec<String> = columns.iter().map(|c| escape(&c.cell_text(row))).collect();
        out.push_str(&cells.join(","));
        out.push('\n');
    }

    out
}

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Order, OrderStatus, Product};

    #[test]
    fn test_header_and_rows() {
        let rows = vec![
            Product::sample(1, "Bodrex", "obat", 8000.0, 12),
            Product::sample(2, "Vitamin C", "vitamin", 12000.0, 7),
        ];
        let csv = csv_export(&Product::columns(), &rows);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ID,Nama,Kategori,Deskripsi,Harga,Stok,Gambar");
        assert_eq!(lines[1], "1,Bodrex,obat,,8.000,12,");
    }

    #[test]
    fn test_escaping() {
        let mut product = Product::sample(1, "Obat \"keras\"", "obat", 100.0, 1);
        product.description = "tablet, strip 10".to_string();
        let csv = csv_export(&Product::columns(), &[product]);
        assert!(csv.contains("\"Obat \"\"keras\"\"\""));
        assert!(csv.contains("\"tablet, strip 10\""));
    }

    #[test]
    fn test_order_export_shape() {
        let order = Order {
            id: 9,
            code: "PSN-9".to_string(),
            customer: Some("Budi".to_string()),
            purchased_at: "2024-05-03T10:15:00Z".parse().unwrap(),
            status: OrderStatus::Paid,
            payment_proof: Some("/uploads/bukti/9.jpg".to_string()),
        };
        let csv = csv_export(&Order::export_columns(), &[order]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "ID,ID_Pesanan,Nama,Tanggal,Status");
        // The export column set leaves the payment proof out.
        assert_eq!(lines[1], "9,PSN-9,Budi,03-05-2024,dibayar");
    }

    #[test]
    fn test_empty_collection_is_header_only() {
        let rows: Vec<Product> = Vec::new();
        let csv = csv_export(&Product::columns(), &rows);
        assert_eq!(csv.lines().count(), 1);
    }
}
