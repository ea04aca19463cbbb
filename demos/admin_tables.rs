/// Entity Table Walkthrough
///
/// This example demonstrates:
/// - Loading a collection into a page's list state
/// - Searching, filtering, and sorting it
/// - Paginating the derived view
/// - Exporting the filtered rows as CSV

use apotik_admin::entity::{Product, ProductField, StockFilter};
use apotik_admin::export::csv_export;
use apotik_admin::listview::ListState;

fn main() {
    env_logger::init();

    println!("=== Apotik Admin Table Example ===\n");

    // 1. The collection a page fetch would deliver
    println!("1. Loading products...");
    let fetched = vec![
        Product::sample(1, "Bodrex", "obat", 8000.0, 12),
        Product::sample(2, "Amoxicillin", "antibiotik", 15000.0, 0),
        Product::sample(3, "Paracetamol", "obat", 5000.0, 30),
        Product::sample(4, "Vitamin C", "vitamin", 12000.0, 7),
        Product::sample(5, "Betadine", "obat", 9000.0, 3),
        Product::sample(6, "OBH Combi", "obat", 14000.0, 0),
    ];
    let mut state = ListState::new(Product::search_fields()).with_page_size(3);
    let fetch = state.begin_fetch();
    state.apply_fetch(fetch, fetched);
    println!("   {} products loaded\n", state.rows().len());

    // 2. Free-text search over name and category
    println!("2. Searching for \"obat\"...");
    state.set_search("obat");
    println!("   {} rows match\n", state.visible().total);

    // 3. Stack the out-of-stock filter
    println!("3. Filtering out-of-stock products...");
    state.set_filter(ProductField::Stock, StockFilter::Out.matcher());
    for product in &state.visible().rows {
        println!("   {} (stok {})", product.name, product.stock);
    }
    state.clear_filter(ProductField::Stock);
    println!();

    // 4. Header clicks cycle the sort
    println!("4. Sorting by price (ascending)...");
    state.toggle_sort(ProductField::Price);
    for product in &state.visible().rows {
        println!("   {} - Rp {}", product.name, product.price);
    }
    println!();

    // 5. Pagination over the derived view
    println!("5. Paging...");
    let page = state.visible();
    println!(
        "   page 1 of {} ({} rows total), can_next = {}",
        page.page_count, page.total, page.can_next
    );
    state.next_page();
    let page = state.visible();
    println!("   advanced: {} rows on this page\n", page.rows.len());

    // 6. Export the filtered rows
    println!("6. CSV export:");
    let csv = csv_export(&Product::columns(), state.visible().rows);
    for line in csv.lines() {
        println!("   {}", line);
    }
}
