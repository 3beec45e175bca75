//! Pure DSP core: coefficient data, shelf parameter model, filter primitives.

pub mod db;
pub mod dvf;
pub mod dvf_table;
pub mod iir;
pub mod util;
