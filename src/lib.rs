//! # wavepack - Discrete wavelet and Fourier transforms for Rust
//!
//! One-dimensional transforms over `f64` signals built around a single
//! filter-bank primitive:
//!
//! - **Pyramid** multiresolution transform ([`fwt::FastWaveletTransform`])
//! - **Packet** full binary-tree transform ([`wpt::WaveletPacketTransform`])
//! - **Discrete Fourier** transform as an O(N²) baseline ([`dft::DiscreteFourierTransform`])
//!
//! Wavelet kernels (Haar, Daubechies, Coiflet) live in [`wavelet`]. The
//! [`transform::Transform`] facade holds one algorithm and exposes a uniform
//! `forward`/`reverse` entry point.
//!
//! ## Cargo Features
//!
//! - `std` (default): implements `std::error::Error` for [`TransformError`]
//! - `verbose-logging`: per-level tracing through the `log` facade
//!
//! ## Example
//!
//! ```
//! use wavepack::{Transform, Wavelet, AlgorithmKind};
//!
//! let t = Transform::builder()
//!     .algorithm(AlgorithmKind::Fwt)
//!     .wavelet(Wavelet::daub04())
//!     .build()
//!     .unwrap();
//! let signal = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//! let hilb = t.forward(&signal).unwrap();
//! let reco = t.reverse(&hilb).unwrap();
//! for (a, b) in signal.iter().zip(reco.iter()) {
//!     assert!((a - b).abs() < 1e-9);
//! }
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Level tracing that compiles away without `verbose-logging`.
#[cfg(feature = "verbose-logging")]
macro_rules! trace_level {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}
#[cfg(not(feature = "verbose-logging"))]
macro_rules! trace_level {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

#[cfg(feature = "verbose-logging")]
macro_rules! debug_dispatch {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}
#[cfg(not(feature = "verbose-logging"))]
macro_rules! debug_dispatch {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

/// Complex numbers and small numeric helpers.
pub mod num;

/// Error type shared by every transform.
pub mod error;

/// Wavelet filter kernels
///
/// A kernel holds the low-pass (scales) and high-pass (coeffs) filter taps
/// and performs one level of analysis or synthesis with periodic boundaries.
pub mod wavelet;

/// Pyramid ("fast") wavelet transform
pub mod fwt;

/// Wavelet packet transform
pub mod wpt;

/// Discrete Fourier Transform (DFT)
///
/// Direct O(N²) summation, kept as a frequency-domain reference.
pub mod dft;

/// Algorithm selection and the transform facade.
pub mod transform;

pub use dft::DiscreteFourierTransform;
pub use error::TransformError;
pub use fwt::FastWaveletTransform;
pub use num::Complex64;
pub use transform::{Algorithm, AlgorithmKind, BasicTransform, Transform, TransformBuilder};
pub use wavelet::{Wavelet, WaveletFamily};
pub use wpt::WaveletPacketTransform;
