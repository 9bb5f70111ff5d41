//! # Modeswap Architecture
//!
//! Modeswap flips design-document layers between light and dark variants using
//! nothing but a naming convention. A shared style or symbol called
//! `button/light/primary` has a dark sibling called `button/dark/primary`; switching
//! a layer repoints its reference from one to the other and leaves everything else
//! alone.
//!
//! Like the rest of the tool, this is a library that happens to have a CLI client.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, print.rs)                           │
//! │  - Parses arguments, prints reports, installs logging       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Loads/saves the document, resolves selectors             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - switch, toggle, inspect, doctor, config                  │
//! │  - Builds user-facing reports                               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core                                                       │
//! │  walk → engine → resolve → catalog / naming                 │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Containment
//!
//! A switch over a large selection should finish as much as it can. Layers with
//! unresolvable references are logged and counted as skipped in [`walk`]; nothing
//! below the command layer aborts a traversal. Errors that do reach the caller come
//! from around the core: loading the document, resolving selectors, reading config.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Entry points and their reports
//! - [`walk`]: Subtree traversal and tally aggregation
//! - [`engine`]: Per-layer switch decision
//! - [`resolve`]: Mode detection
//! - [`catalog`]: Style and symbol catalogs, name lookup
//! - [`naming`]: The `component/mode/variant` convention
//! - [`selection`]: Layer addressing and selectors
//! - [`model`]: Document, layers, shared styles, symbol masters
//! - [`store`]: Document storage abstraction and implementations
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod model;
pub mod naming;
pub mod resolve;
pub mod selection;
pub mod store;
pub mod walk;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
