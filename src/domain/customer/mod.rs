// ============================================================================
// Customer Domain - Business Logic for the Customer Aggregate
// ============================================================================
//
// This module contains ALL Customer-specific code:
// - Value objects (Name, ZipCode, Address, CustomerStatus)
// - Errors (CustomerError enum)
// - Entity (Customer with its lifecycle)
// - Repository port (CustomerRepository)
//
// This layer has no knowledge of concrete storage or of the console driver.
//
// ============================================================================

pub mod entity;
pub mod errors;
pub mod repository;
pub mod value_objects;

// Re-export for convenience
pub use entity::*;
pub use errors::*;
pub use repository::*;
pub use value_objects::*;
