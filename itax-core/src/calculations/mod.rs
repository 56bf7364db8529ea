//! The liability calculation pipeline: slab tables, slab-wise tax,
//! rebate, surcharge, cess and the breakdown assembler. Every step is a
//! pure transformation; the engine holds no state between calls.

pub mod breakdown;
pub mod common;
pub mod levies;
pub mod slab_tax;
pub mod slabs;

pub use breakdown::calculate_tax;
