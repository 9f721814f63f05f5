//! Typed key-value storage contracts shared across browser adapters and app crates.
//!
//! This crate is the API-first boundary for client-side persistence. It exposes the
//! [`KvStore`] contract with in-memory and no-op implementations, typed JSON helpers, and
//! the auth-token resolution rules used by the HTTP transport layer. Concrete browser
//! adapters (`localStorage` / `sessionStorage`) live in `platform_store_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod kv;
pub mod token;

pub use kv::{load_kv_with, save_kv_with, KvStore, KvStoreFuture, MemoryKvStore, NoopKvStore};
pub use token::{clear_tokens, resolve_token, TOKEN_KEY};
