//! Application services and ports.

#![forbid(unsafe_code)]

mod access_guard;

pub use access_guard::AccessGuard;
