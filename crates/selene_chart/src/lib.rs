//! Chart-side consumption of moon phases.
//!
//! Drawing is left to the host. This crate provides what a host needs
//! around the calculator:
//! - `PhasePalette`: per-phase colours with a shared alpha
//! - `PhaseBandTracker`: grouping of per-bar samples into phase bands
//! - `sample_bands`: band list for an evenly sampled time range

pub mod bands;
pub mod config;
pub mod error;
pub mod palette;

pub use bands::{BandUpdate, PhaseBand, PhaseBandTracker, same_band, sample_bands};
pub use config::{ChartConfig, MAX_SAMPLES};
pub use error::ChartError;
pub use palette::{DEFAULT_ALPHA, PhasePalette, Rgba};
