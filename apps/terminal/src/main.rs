//! # Stockbook Terminal Demo
//!
//! Seeds a small catalog and walks every store operation end to end:
//! add/merge, search, update, delete, invoice acceptance and rejection,
//! revenue reports, and a near-expiry markdown pass.
//!
//! ## Usage
//! ```bash
//! cargo run -p stockbook-terminal --bin stockbook
//!
//! # With debug-level store logging
//! RUST_LOG=debug cargo run -p stockbook-terminal --bin stockbook
//! ```
//!
//! ## Responsibilities
//! This binary is the presentation boundary. It owns:
//! - stdout (the store renders tables as `String`, this crate prints them)
//! - the system clock (`today` is read ONCE here and passed down)
//! - error messaging (store failures become printed lines here)

use chrono::{Datelike, Duration, NaiveDate, Utc};
use tracing::info;
use tracing_subscriber::EnvFilter;

use stockbook_core::error::StoreResult;
use stockbook_core::{Invoice, LineItem, Product, ProductChange, DATE_FORMAT};
use stockbook_store::{
    render_product_table, render_revenue_table, AddOutcome, DeleteOutcome, Ranking, Store,
    UpdateOutcome,
};

fn main() -> StoreResult<()> {
    init_tracing();

    // The only clock read in the whole system.
    let today = Utc::now().date_naive();
    info!(%today, "Starting Stockbook terminal demo");

    let mut store = Store::new();

    // -------------------------------------------------------------------------
    // Seed the catalog
    // -------------------------------------------------------------------------

    add_and_report(
        &mut store,
        Product::new(
            "MILK-1L",
            "Whole Milk 1L",
            1250,
            900,
            40,
            &text_date(today - Duration::days(10)),
            &text_date(today + Duration::days(21)), // lands on the markdown threshold
        )?,
    );
    add_and_report(
        &mut store,
        Product::new(
            "BREAD-W",
            "White Bread",
            350,
            200,
            25,
            &text_date(today - Duration::days(1)),
            &text_date(today + Duration::days(4)), // well inside the threshold
        )?,
    );
    add_and_report(
        &mut store,
        Product::new(
            "RICE-5K",
            "Jasmine Rice 5kg",
            2200,
            1700,
            12,
            &text_date(today - Duration::days(60)),
            &text_date(today + Duration::days(300)),
        )?,
    );

    // Restocking an existing code merges quantities
    add_and_report(
        &mut store,
        Product::new(
            "MILK-1L",
            "Whole Milk 1L",
            1195,
            880,
            20,
            &text_date(today - Duration::days(2)),
            &text_date(today + Duration::days(21)),
        )?,
    );

    print!("{}", render_product_table(store.products()));

    // -------------------------------------------------------------------------
    // Search
    // -------------------------------------------------------------------------

    let hits = store.search_products(Some("milk"))?;
    println!("Search for 'milk' found {} product(s).", hits.len());

    match store.search_products(Some("")) {
        Ok(_) => {}
        Err(e) => println!("Search error: {e}"),
    }

    // -------------------------------------------------------------------------
    // Update and delete
    // -------------------------------------------------------------------------

    let changes = vec![
        ProductChange::parse("selling_price", "3.25")?,
        ProductChange::parse("quantity", "30")?,
    ];
    match store.update_product("BREAD-W", &changes)? {
        UpdateOutcome::Updated => println!("Product information updated successfully."),
        UpdateOutcome::NotFound => println!("Product not found."),
    }

    match ProductChange::parse("bogus_field", "1") {
        Ok(_) => {}
        Err(e) => println!("Update error: {e}"),
    }

    match store.delete_product("NO-SUCH") {
        DeleteOutcome::Removed => println!("Product deleted successfully."),
        DeleteOutcome::NotFound => println!("Product not found."),
    }

    // -------------------------------------------------------------------------
    // Invoices: one accepted, one rejected
    // -------------------------------------------------------------------------

    let sale = Invoice {
        code: "INV-001".to_string(),
        date: today,
        lines: vec![
            LineItem::new("MILK-1L", 3, 3 * 1195),
            LineItem::new("BREAD-W", 2, 2 * 325),
        ],
    };
    report_invoice(&mut store, sale);

    // 99 units of rice are more than the 12 in stock; the store must
    // reject the whole invoice without touching anything.
    let overdraft = Invoice {
        code: "INV-002".to_string(),
        date: today,
        lines: vec![LineItem::new("RICE-5K", 99, 99 * 2200)],
    };
    report_invoice(&mut store, overdraft);

    // -------------------------------------------------------------------------
    // Revenue reports
    // -------------------------------------------------------------------------

    let daily = store.revenue_by_product(today);
    println!("Products with revenue today: {}", daily.len());

    let monthly = store.revenue_by_store(today.month(), today.year())?;
    println!(
        "Products with revenue in {}-{:02}: {}",
        today.year(),
        today.month(),
        monthly.len()
    );

    let top = store.top_products(Ranking::Top, 5, today);
    print!("{}", render_revenue_table("Top 5 Products:", &top));

    let bottom = store.top_products(Ranking::Bottom, 5, today);
    print!("{}", render_revenue_table("Bottom 5 Products:", &bottom));

    // -------------------------------------------------------------------------
    // Near-expiry markdown pass
    // -------------------------------------------------------------------------

    let markdowns = store.apply_near_expiry_markdowns(today);
    for markdown in &markdowns {
        println!(
            "Marked down {} ({} day(s) to expiry): {} -> {}",
            markdown.code, markdown.days_left, markdown.old_price, markdown.new_price
        );
    }

    print!("{}", render_product_table(store.products()));

    info!("Demo finished");
    Ok(())
}

/// Adds a product and prints the outcome message.
fn add_and_report(store: &mut Store, product: Product) {
    let code = product.code.clone();
    match store.add_product(product) {
        AddOutcome::Added => println!("The product has been added successfully."),
        AddOutcome::Merged => println!(
            "Products with the code {code} already exist in the list. Information has been updated."
        ),
    }
}

/// Submits an invoice and prints the outcome. Store failures are caught
/// and reported as a message here; the store itself never prints.
fn report_invoice(store: &mut Store, invoice: Invoice) {
    match store.add_invoice(invoice) {
        Ok(()) => println!("The invoice is added successfully."),
        Err(e) => println!("Error adding invoice: {e}"),
    }
}

/// Formats a date in the fixed text format the domain accepts.
fn text_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Installs the global tracing subscriber.
///
/// Defaults to `info` overall with `debug` for the stockbook crates;
/// `RUST_LOG` overrides.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,stockbook=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
