//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the keyword workflow and session state so route
//! handlers can stay focused on request parsing and status mapping.

pub mod generate;
pub mod session;
