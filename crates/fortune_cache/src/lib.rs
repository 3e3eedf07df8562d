//! Caching for computed fortune results.
//!
//! This crate provides:
//! - [`CacheKey`], the deterministic composite key for a person and target
//! - The [`CacheStore`] trait and an in-memory TTL implementation
//! - [`get_or_compute`], which falls back to computing on any cache failure

pub mod compute;
pub mod error;
pub mod key;
pub mod store;

pub use compute::{get_or_compute, get_or_try_compute};
pub use error::CacheError;
pub use key::{CacheKey, KEY_PREFIX};
pub use store::{CacheStore, MemoryCache};
