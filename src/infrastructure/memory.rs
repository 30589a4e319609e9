use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::customer::{Customer, CustomerRepository, SharedCustomer};

// ============================================================================
// In-Memory Customer Repository
// ============================================================================
//
// Reference implementation of the repository port: a plain ordered list.
// No uniqueness checks, no transactions. Reads share the stored instances,
// so status changes on a returned customer are visible to later reads.
//
// ============================================================================

pub struct InMemoryCustomerRepository {
    customers: Mutex<Vec<SharedCustomer>>,
}

impl InMemoryCustomerRepository {
    pub fn new() -> Self {
        Self {
            customers: Mutex::new(Vec::new()),
        }
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn save(&self, customer: Customer) -> Result<()> {
        let mut customers = self.customers.lock().await;
        customers.push(Arc::new(Mutex::new(customer)));
        tracing::debug!(total = customers.len(), "Customer appended to store");
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<SharedCustomer>> {
        Ok(self.customers.lock().await.clone())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::{Address, CustomerStatus, Name, ZipCode};
    use chrono::{TimeZone, Utc};

    fn create_test_customer(name: &str, zip: &str) -> Customer {
        Customer::create_new(
            Name::new(name).unwrap(),
            Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap(),
            Address::new(ZipCode::new(zip).unwrap()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_find_all_is_empty_initially() {
        let repository = InMemoryCustomerRepository::new();
        assert!(repository.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_then_find_all_preserves_insertion_order() {
        let repository = InMemoryCustomerRepository::new();

        repository
            .save(create_test_customer("John Doe", "12345-678"))
            .await
            .unwrap();
        repository
            .save(create_test_customer("Jane Doe", "98765-432"))
            .await
            .unwrap();

        let customers = repository.find_all().await.unwrap();
        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].lock().await.name().as_str(), "John Doe");
        assert_eq!(customers[1].lock().await.name().as_str(), "Jane Doe");
    }

    #[tokio::test]
    async fn test_find_all_shares_stored_instances() {
        let repository = InMemoryCustomerRepository::new();
        repository
            .save(create_test_customer("John Doe", "12345-678"))
            .await
            .unwrap();

        let customers = repository.find_all().await.unwrap();
        customers[0].lock().await.next_status();

        // The mutation is visible through a fresh read.
        let customers_again = repository.find_all().await.unwrap();
        assert_eq!(
            customers_again[0].lock().await.status(),
            CustomerStatus::Pending
        );
    }
}
