//! Walk through the console pages the way a pharmacist would
//!
//! Run with `RUST_LOG=pharmadesk=debug` to see every pipeline recompute.
//! An optional YAML file with page settings can be passed as the first argument.

use pharmadesk::pages::{alerts, inventory, prescriptions};
use pharmadesk::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("💊 Pharmadesk console demo\n");

    let config = match std::env::args().nth(1) {
        Some(path) => ConsoleConfig::from_yaml_file(path)?,
        None => ConsoleConfig::default(),
    };
    let registry = PageRegistry::new(config);

    let mut toasts = registry.notifications().subscribe();
    let session = SessionContext::User {
        user_id: Uuid::new_v4(),
        roles: vec!["pharmacist".to_string()],
    };

    let pages: Vec<_> = registry
        .visible_pages(&session)
        .into_iter()
        .map(ConsolePage::title)
        .collect();
    println!("📋 Pages: {}\n", pages.join(", "));

    // Inventory: low stock, five per page
    let mut stock = registry.open::<InventoryItem>(&session, seed::inventory())?;
    stock.set_filter("status", StockLevel::LowStock);
    stock.set_page_size(5)?;
    println!("📦 Low stock ({})", stock.page_info().summary());
    for item in &stock.page().items {
        println!("   {:<22} {:>4} / {}", item.name, item.quantity, item.min_stock);
    }
    inventory::restock(&mut stock, "INV-003", 240)?;
    let summary = inventory::summary(&stock);
    println!(
        "   after restock: {} low, {} out of stock\n",
        summary.low_stock, summary.out_of_stock
    );

    // Deliveries: search from a deep link
    let params = QueryParams::from_query_string("?q=smith&sort=scheduled_for:asc");
    let deliveries = registry.open_with_params::<Delivery>(&session, seed::deliveries(), &params)?;
    println!("🚚 Deliveries matching \"smith\": {}", deliveries.filtered().len());
    for delivery in deliveries.filtered() {
        println!("   {} {} ({})", delivery.id, delivery.patient, delivery.status);
    }
    println!();

    // Prescriptions: push one through the workflow
    let mut queue = registry.open::<Prescription>(&session, seed::prescriptions())?;
    let rx = prescriptions::advance(&mut queue, "RX-1001")?;
    println!("📝 {} is now {}", rx.id, rx.status);
    if let Err(err) = prescriptions::cancel(&mut queue, "RX-1005") {
        println!("   refused: {}", err);
    }
    println!();

    // Alerts: archive everything resolved
    let mut alert_view = registry.open::<Alert>(&session, seed::alerts())?;
    let resolved: Vec<String> = alert_view
        .filtered()
        .iter()
        .filter(|alert| alert.status == AlertStatus::Resolved)
        .map(|alert| alert.id.clone())
        .collect();
    for id in &resolved {
        alerts::archive(&mut alert_view, id)?;
    }
    let activities = registry.open::<Activity>(&session, seed::activities())?;
    let feed = alerts::feed(&alert_view, &activities);
    println!(
        "🔔 {} active alerts, {} feed items need action",
        alerts::active_count(&alert_view),
        alerts::needing_action(&feed)
    );

    // Admin-only page
    if let Err(err) = registry.open::<StaffMember>(&session, seed::staff()) {
        println!("🔒 {}", err);
    }

    println!("\n📣 Toasts:");
    while let Ok(toast) = toasts.try_recv() {
        println!("   [{:?}] {}", toast.level, toast.message());
    }

    Ok(())
}
