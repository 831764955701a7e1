//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! `device` owns validation and the `DeviceRepository` seam; `memory` and
//! `postgres` are the two repository backends selected at startup.

pub mod device;
pub mod memory;
pub mod postgres;
