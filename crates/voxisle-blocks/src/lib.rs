//! Material identifier crate.
#![forbid(unsafe_code)]

pub mod types;

pub use types::Voxel;
