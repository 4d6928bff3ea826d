//! TUI system information panel: CPU, memory, and host identity.
//!
//! The core is [`system::collector::Collector`], which re-reads a fixed
//! set of well-known system files on demand and exposes the result as a
//! [`system::snapshot::SystemSnapshot`]. The UI layers on top are thin
//! consumers.

pub mod action;
pub mod app;
pub mod config;
pub mod event;
pub mod format;
pub mod system;
pub mod ui;
