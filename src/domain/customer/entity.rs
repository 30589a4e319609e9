use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use super::errors::CustomerError;
use super::value_objects::{Address, CustomerStatus, Name};

// ============================================================================
// Customer Aggregate - Entity with Lifecycle
// ============================================================================
//
// Construction goes through one of two named constructors:
// - `create_new`: validates the birthday against the clock, starts at Draft
// - `restore`: rehydration from storage, any status, no temporal check
//
// The only mutation after construction is `next_status`.
//
// ============================================================================

#[derive(Debug, Clone)]
pub struct Customer {
    name: Name,
    birthday: DateTime<Utc>,
    address: Address,
    status: CustomerStatus,
}

impl Customer {
    /// Create a fresh customer with Draft status.
    ///
    /// Fails when `birthday` is strictly later than the current wall-clock
    /// time at the moment of the call.
    pub fn create_new(
        name: Name,
        birthday: DateTime<Utc>,
        address: Address,
    ) -> Result<Self, CustomerError> {
        Self::create_new_at(name, birthday, address, Utc::now())
    }

    // Clock injection seam for the time-sensitive check.
    fn create_new_at(
        name: Name,
        birthday: DateTime<Utc>,
        address: Address,
        now: DateTime<Utc>,
    ) -> Result<Self, CustomerError> {
        if birthday > now {
            return Err(CustomerError::FutureBirthday(birthday));
        }
        Ok(Self {
            name,
            birthday,
            address,
            status: CustomerStatus::Draft,
        })
    }

    /// Reconstruct a customer from stored state.
    ///
    /// Accepts any status and skips the future-birthday check: a previously
    /// valid customer must not fail rehydration because time has passed.
    pub fn restore(
        name: Name,
        birthday: DateTime<Utc>,
        address: Address,
        status: CustomerStatus,
    ) -> Self {
        Self {
            name,
            birthday,
            address,
            status,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn birthday(&self) -> DateTime<Utc> {
        self.birthday
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn zip_code(&self) -> &str {
        self.address.zip_code()
    }

    pub fn status(&self) -> CustomerStatus {
        self.status
    }

    /// Advance the lifecycle: Draft → Pending → Finished. No-op at Finished.
    pub fn next_status(&mut self) {
        self.status = self.status.next();
    }

    /// Deterministic serializable snapshot for display or wire transfer.
    pub fn to_primitives(&self) -> CustomerPrimitives {
        CustomerPrimitives {
            name: self.name.as_str().to_string(),
            birthday: self.birthday.to_rfc3339_opts(SecondsFormat::Millis, true),
            status: self.status,
            address: AddressPrimitives {
                zip_code: self.address.zip_code().to_string(),
            },
        }
    }
}

/// Flat representation of a customer: ISO-8601 UTC birthday, status tag,
/// camelCase field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPrimitives {
    pub name: String,
    pub birthday: String,
    pub status: CustomerStatus,
    pub address: AddressPrimitives,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressPrimitives {
    pub zip_code: String,
}

// ============================================================================
// Unit Tests
// ============================================================================
