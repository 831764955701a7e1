//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State types are plain structs wrapped in `RwSignal` by the page, so their
//! transitions can be unit-tested without a reactive runtime.

pub mod device_form;
pub mod devices;
