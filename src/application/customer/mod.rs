// ============================================================================
// Customer Use Cases
// ============================================================================
//
// Thin orchestration over the domain:
// - Inbound ports (capability traits consumed by external callers)
// - CreateCustomer (validate, construct, persist)
// - GetCustomers (pass-through read)
//
// ============================================================================

pub mod create_customer;
pub mod get_customers;
pub mod ports;

pub use create_customer::CreateCustomer;
pub use get_customers::GetCustomers;
pub use ports::{CreateCustomerUseCase, GetCustomersUseCase};

// ============================================================================
// End-to-End Tests (use cases wired to the in-memory repository)
// ============================================================================
