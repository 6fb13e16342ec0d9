//! # Shoplist Architecture
//!
//! Shoplist is a **UI-agnostic shopping-list library** with an interactive
//! terminal client. The library owns the list; the client is just one way
//! to drive it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell layer (args.rs + main.rs, binary only)               │
//! │  - Tokenizes input lines, parses commands, colors output    │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the ItemManager          │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command layer (commands/*.rs)                              │
//! │  - Per-operation business logic over the manager            │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core model (model.rs, manager.rs)                          │
//! │  - ShoppingItem and Unit with validated setters             │
//! │  - ItemManager: sole owner of the ordered item list         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Positions vs. Indexes
//!
//! The shell addresses items by the **1-based position** shown in the
//! list; the manager is **0-based**. The mapping lives in one place,
//! `commands::helpers::resolve_position`, so off-by-one bugs cannot creep
//! in per command.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns regular
//! `Result<CmdResult>` values, never writes to stdout/stderr, and never
//! assumes a terminal. The same core could serve a GUI form or a web
//! endpoint.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`manager`]: The collection manager owning the item list
//! - [`model`]: Core data types (`ShoppingItem`, `Unit`)
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod manager;
pub mod model;
