//! tdsim — relativistic time dilation under three closed-form models:
//! velocity (special relativity), gravity (Schwarzschild metric), and
//! relativistic muon decay.
//!
//! The [`dilation`] engines are pure batch functions over caller-supplied
//! inputs and the immutable [`PhysicalConstants`]; [`datasets`], [`ingest`],
//! [`plot`], and [`tui`] are the presentation glue built on top of them.

pub mod constants;
pub mod datasets;
pub mod dilation;
pub mod ingest;
pub mod plot;
pub mod tui;

pub use constants::PhysicalConstants;
pub use dilation::DilationError;
