/// Apotik Admin - Dashboard Data Engine
///
/// The data layer of the Apotik pharmacy admin dashboard: typed entities over
/// the backend's REST API, one shared filter/sort/paginate pipeline for every
/// entity table, an owned auth session, dashboard aggregates, and CSV export.

pub mod client;
pub mod dashboard;
pub mod entity;
pub mod error;
pub mod export;
pub mod listview;
pub mod schema;
pub mod session;
pub mod value;

pub use client::{ApotikClient, ProductForm, ProductImage};
pub use dashboard::{
    orders_per_day, pending_consultations, pending_orders, DailyOrderCount, DashboardStats,
};
pub use entity::{
    AccountTable, Consultation, ConsultationField, ConsultationStatus, ConsultationUpdate, Gender,
    Order, OrderField, OrderItem, OrderStatus, Product, ProductField, Role, StockFilter, User,
    UserField, UserUpdate,
};
pub use error::ApiError;
pub use export::csv_export;
pub use listview::{
    compute_visible_rows, FetchId, FieldFilter, FilterSet, ListState, Matcher, Page, Pagination,
    SortKey, SortOrder, SortState,
};
pub use schema::{ColumnDef, Record};
pub use session::{AuthUser, LoginResponse, Session, SignupRequest};
pub use value::Value;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_complete_product_page_workflow() {
        // The collection a fetch would deliver.
        let fetched = vec![
            Product::sample(1, "Bodrex", "obat", 8000.0, 12),
            Product::sample(2, "Amoxicillin", "antibiotik", 15000.0, 0),
            Product::sample(3, "Paracetamol", "obat", 5000.0, 30),
            Product::sample(4, "Vitamin C", "vitamin", 12000.0, 7),
            Product::sample(5, "Betadine", "obat", 9000.0, 3),
        ];

        let mut page_state = ListState::new(Product::search_fields());
        let fetch = page_state.begin_fetch();
        assert!(page_state.apply_fetch(fetch, fetched));

        // Search narrows by name or category, case-insensitively.
        page_state.set_search("obat");
        assert_eq!(page_state.visible().total, 3);

        // Stack the in-stock filter on top.
        page_state.set_filter(ProductField::Stock, StockFilter::Available.matcher());
        let names: Vec<String> = page_state
            .visible()
            .rows
            .iter()
            .map(|p| p.name.clone())
            .collect();
        assert_eq!(names, vec!["Bodrex", "Paracetamol", "Betadine"]);

        // A header click sorts ascending by price.
        page_state.toggle_sort(ProductField::Price);
        let names: Vec<String> = page_state
            .visible()
            .rows
            .iter()
            .map(|p| p.name.clone())
            .collect();
        assert_eq!(names, vec!["Paracetamol", "Bodrex", "Betadine"]);

        // Export the filtered, sorted rows.
        let csv = csv_export(&Product::columns(), page_state.visible().rows);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("3,Paracetamol"));

        // A refetch after a mutation replaces the collection wholesale.
        let refetch = page_state.begin_fetch();
        assert!(page_state.apply_fetch(
            refetch,
            vec![Product::sample(3, "Paracetamol", "obat", 5500.0, 29)]
        ));
        assert_eq!(page_state.visible().rows[0].price, 5500.0);
    }
}
