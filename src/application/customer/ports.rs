use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::customer::SharedCustomer;

// ============================================================================
// Inbound Ports - Capability Surface for External Callers
// ============================================================================

/// Create a customer from raw inputs.
///
/// Validation failures propagate unchanged and nothing is persisted.
#[async_trait]
pub trait CreateCustomerUseCase: Send + Sync {
    async fn execute(&self, name: &str, birthday: DateTime<Utc>, zip_code: &str) -> Result<()>;
}

/// List all customers in insertion order.
#[async_trait]
pub trait GetCustomersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SharedCustomer>>;
}
