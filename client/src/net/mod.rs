//! Networking modules for the device REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls the devices page needs and `types` defines the
//! wire schema shared with the server.

pub mod api;
pub mod types;
