//! Group records, membership changes and the authorization predicates built on them.

mod access;
mod membership;
mod store;

pub use store::GroupStore;
