//! Statistics primitives shared by the feature builder and the engine.

pub mod describe;
pub mod normal;

pub use describe::{mean, sample_std};
pub use normal::norm_ppf;
