//! # Phonebook Architecture
//!
//! Phonebook is a small **UI-agnostic contact directory**. The interactive menu is one
//! client of the library; the record store and the commands know nothing about terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Binary (main.rs, args.rs)                                  │
//! │  - Parses flags, installs logging, loads config             │
//! │  - The ONLY place that touches stdin/stdout/exit codes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session + UI (session.rs, ui/)                             │
//! │  - Menu loop, prompts, table rendering                      │
//! │  - Talks to the operator only through the `Ui` trait        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic, returns `CmdResult`                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - `ContactStore` trait, `InMemoryStore`                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Names are keys, loosely
//!
//! A person's name acts as the lookup key, but the store does not enforce uniqueness.
//! Two entries may share a name; find and delete always act on the one added first.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each menu action
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: The `Person` record
//! - [`session`]: The menu loop
//! - [`ui`]: The `Ui` capability trait, console implementation and table rendering
//! - [`config`]: Display configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
pub mod ui;
