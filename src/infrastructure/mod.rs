// ============================================================================
// Infrastructure Layer - Concrete Adapters
// ============================================================================
//
// Implementations of the domain's outbound ports. Only an in-memory store
// exists today; a durable backend plugs in by implementing the same port.
//
// ============================================================================

pub mod memory;

pub use memory::InMemoryCustomerRepository;
