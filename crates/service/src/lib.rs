//! Service layer providing the store operations on top of models.
//! - Separates business rules (non-empty names, existence checks) from data access.
//! - Repositories are swappable: SeaORM-backed or in-memory.

pub mod errors;
pub mod store;
#[cfg(test)]
pub mod test_support;
