//! Output drivers, debounced inputs, and peripheral bring-up.

pub mod button;
pub mod hw_init;
pub mod lamp;
pub mod low_beam;
