//! Pattern module - Address mapping, payload folding and Life 1.05 rendering.

mod address;
mod fingerprint;
mod life105;

pub use address::*;
pub use fingerprint::*;
pub use life105::*;
