// ============================================================================
// Domain Layer - Business Logic
// ============================================================================
//
// Each aggregate has its own subdirectory with:
// - Value objects
// - Errors
// - Entity
// - Repository port
//
// This layer is completely separate from infrastructure and from callers.
//
// ============================================================================

pub mod customer;
