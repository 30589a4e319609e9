use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;

use super::entity::Customer;

// ============================================================================
// Customer Repository Port
// ============================================================================

/// Handle to a stored customer.
///
/// `find_all` hands out the stored instances, not copies: advancing a
/// returned customer's status is visible to subsequent reads.
pub type SharedCustomer = Arc<Mutex<Customer>>;

/// Outbound storage contract for customers.
///
/// Append-only, no uniqueness check, ordered by insertion. The in-memory
/// implementation never fails; the `Result` exists for real backends.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn save(&self, customer: Customer) -> Result<()>;

    async fn find_all(&self) -> Result<Vec<SharedCustomer>>;
}
