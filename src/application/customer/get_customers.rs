use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::customer::{CustomerRepository, SharedCustomer};

use super::ports::GetCustomersUseCase;

// ============================================================================
// Get Customers Use Case
// ============================================================================

pub struct GetCustomers {
    repository: Arc<dyn CustomerRepository>,
}

impl GetCustomers {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl GetCustomersUseCase for GetCustomers {
    async fn execute(&self) -> Result<Vec<SharedCustomer>> {
        // Pass-through read: no filtering, sorting, or pagination.
        self.repository.find_all().await
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
