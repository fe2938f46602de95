//! # Spotz Architecture
//!
//! Spotz is a **UI-agnostic venue catalog library**. This is not a CLI
//! application that happens to have some library code—it's a library that
//! happens to have a CLI client.
//!
//! ## The Layer Stack
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (the spotz binary)                                     │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (display indexes → UUIDs)              │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic: create, update, pick, notes, ...    │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog + Storage (catalog.rs, store/)                     │
//! │  - RecordStore / BlobStore traits                           │
//! │  - JsonRecordStore + DirBlobStore (production)              │
//! │  - MemRecordStore + MemBlobStore (testing)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, catalog, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//! - **Never** assumes a terminal environment
//!
//! The same core could serve a web UI or any other client.
//!
//! ## Records Are Forever
//!
//! The record file outlives any one release of this code. Older releases
//! wrote fewer fields, and people edit the file by hand. [`model`] absorbs
//! that drift at load time instead of rejecting it; see
//! [`model::normalize`].
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): thorough unit tests of business
//!    logic against the in-memory stores. This is where the lion's share
//!    of testing lives.
//! 2. **Stores** (`store/*`): filesystem adapters tested against real
//!    temp directories.
//! 3. **CLI**: end-to-end tests driving the compiled binary.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`catalog`]: The in-memory working list over the stores
//! - [`store`]: Storage traits and implementations
//! - [`model`]: Core data types and record normalization
//! - [`media`]: Photo blob naming and lifecycle
//! - [`filter`]: Composable place filters
//! - [`picker`]: Random pick engine with last-pick memory
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod media;
pub mod model;
pub mod picker;
pub mod store;
