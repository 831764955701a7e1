//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational: they take data and callbacks as props and
//! leave persistence to the page that owns the device list.

pub mod device_form;
pub mod device_list;
