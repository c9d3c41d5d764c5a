//! # Supz Architecture
//!
//! Supz is a **UI-agnostic supplier registry library**. The interactive
//! terminal session is just one client; the same core could sit behind a
//! form UI or a test harness without changing a line of registry logic.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, runs the session loop, renders output  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, one method per operation      │
//! │  - Owns the store and the media capability                  │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic over the store                       │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  State & Capabilities (store.rs, media.rs)                  │
//! │  - SupplierStore: the one owner of collection + draft       │
//! │  - MediaAccess trait: FileMedia (prod), ScriptedMedia (test)│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result<CmdResult>` values, and never touches stdout, stderr, or
//! `std::process::exit`. The one deliberate exception is [`media::FileMedia`],
//! the production implementation of the gallery capability, which lives at
//! the device boundary just like a file-backed store would.
//!
//! ## State Model
//!
//! All registry state lives in a single process-local [`store::SupplierStore`]:
//! an insertion-ordered, append-only supplier collection and one mutable
//! draft. Mutations happen sequentially on user events; nothing is shared,
//! nothing is persisted, everything dies with the process. The only setting
//! that survives restarts is the placeholder image reference in
//! [`config::SupzConfig`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade — entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Owner of the supplier collection and the draft
//! - [`filter`]: Case-insensitive name/category substring filter
//! - [`media`]: Gallery capability trait and implementations
//! - [`model`]: Core data types (`Supplier`, `Draft`, `Field`)
//! - [`config`]: Configuration (placeholder image reference)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod media;
pub mod model;
pub mod store;
