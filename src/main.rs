use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod application;
mod domain;
mod infrastructure;

use application::customer::{
    CreateCustomer, CreateCustomerUseCase, GetCustomers, GetCustomersUseCase,
};
use chrono::{TimeZone, Utc};
use infrastructure::InMemoryCustomerRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Structured logging with environment-based filtering.
    // Default to INFO level, can be overridden with RUST_LOG env var.
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,customer_mgmt=debug")),
        )
        .init();

    tracing::info!("🚀 Starting customer console application");

    // === Composition root: one repository shared by both use cases ===
    let repository = Arc::new(InMemoryCustomerRepository::new());
    let create_customer = CreateCustomer::new(repository.clone());
    let get_customers = GetCustomers::new(repository);

    // === 1. List customers (empty initially) ===
    let customers = get_customers.execute().await?;
    tracing::info!(count = customers.len(), "Customers initially");

    // === 2. Create Mario ===
    tracing::info!("Creating customer Mario...");
    create_customer
        .execute(
            "Mario",
            Utc.with_ymd_and_hms(1970, 12, 18, 0, 0, 0).unwrap(),
            "99990-000",
        )
        .await?;

    // === 3. Create Luigi ===
    tracing::info!("Creating customer Luigi...");
    create_customer
        .execute(
            "Luigi",
            Utc.with_ymd_and_hms(1985, 5, 15, 0, 0, 0).unwrap(),
            "88880-111",
        )
        .await?;

    // === 4. List customers again ===
    let customers = get_customers.execute().await?;
    tracing::info!(count = customers.len(), "Customers after creation");
    for (idx, customer) in customers.iter().enumerate() {
        let primitives = customer.lock().await.to_primitives();
        println!(
            "Customer #{}: {}",
            idx + 1,
            serde_json::to_string_pretty(&primitives)?
        );
    }

    // === 5. Advance the first customer's status ===
    tracing::info!("Advancing first customer's status...");
    {
        let mut first = customers[0].lock().await;
        first.next_status();
        tracing::info!(status = ?first.status(), "New status");
    }

    // === 6. Final list ===
    let customers = get_customers.execute().await?;
    for (idx, customer) in customers.iter().enumerate() {
        let primitives = customer.lock().await.to_primitives();
        println!(
            "Customer #{}: {}",
            idx + 1,
            serde_json::to_string_pretty(&primitives)?
        );
    }

    tracing::info!("✅ Finished");
    Ok(())
}
