//! # Garb Architecture
//!
//! Garb is a **UI-agnostic wardrobe-catalog library** with a CLI client on
//! top. The library owns all data and logic; the binary only parses
//! arguments and formats output.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                     │
//! │  - Parses arguments, prints, prompts, sleeps                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Supplies ambient inputs (random source)                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic over the catalog and composer             │
//! │  - Returns structured CmdResult values, never prints         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core + Storage (catalog.rs, composer.rs, store/)           │
//! │  - Catalog lifecycle over the KvStore trait                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence policy
//!
//! The catalog mirrors to two fixed keys on every mutation and hydrates from
//! them at startup. Failures never reach the user: unreadable or malformed
//! stored text hydrates to an empty catalog, and failed writes are logged
//! and swallowed with the in-memory state staying authoritative for the
//! session. See [`catalog`].
//!
//! ## Module Overview
//!
//! - [`api`]: the API facade, entry point for all operations
//! - [`commands`]: business logic for each command
//! - [`catalog`]: the two persisted collections and their lifecycle
//! - [`composer`]: the outfit-generation heuristic
//! - [`model`]: core data types (`WardrobeItem`, `Outfit`, `Category`, ...)
//! - [`store`]: the key-value storage abstraction and backends
//! - [`image`]: data-URL encoding for attached item photos
//! - [`error`]: error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod composer;
pub mod error;
pub mod image;
pub mod model;
pub mod store;
