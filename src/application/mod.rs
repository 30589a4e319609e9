// ============================================================================
// Application Layer - Use Cases
// ============================================================================
//
// One submodule per aggregate, each exposing inbound ports and their
// reference services. No domain rules live here; this layer only wires
// domain operations to repository calls.
//
// ============================================================================

pub mod customer;
