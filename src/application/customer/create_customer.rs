use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::customer::{Address, Customer, CustomerRepository, Name, ZipCode};

use super::ports::CreateCustomerUseCase;

// ============================================================================
// Create Customer Use Case
// ============================================================================
//
// Orchestrates: raw input → value objects → Customer::create_new → save
//
// ============================================================================

pub struct CreateCustomer {
    repository: Arc<dyn CustomerRepository>,
}

impl CreateCustomer {
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CreateCustomerUseCase for CreateCustomer {
    async fn execute(&self, name: &str, birthday: DateTime<Utc>, zip_code: &str) -> Result<()> {
        // Fail fast: any validation error aborts before the save.
        let name = Name::new(name)?;
        let zip_code = ZipCode::new(zip_code)?;
        let customer = Customer::create_new(name, birthday, Address::new(zip_code))?;

        self.repository.save(customer).await?;
        tracing::info!(%birthday, "Customer created");
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
