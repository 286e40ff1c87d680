//! Domain entities and invariants.

#![forbid(unsafe_code)]

pub mod access;
mod permission;
mod role;

pub use permission::Permission;
pub use role::Role;
