//! Wavelet filter kernels
//! Orthonormal Haar, Daubechies and Coiflet families plus the plain orthogonal Haar
//! no_std + alloc compatible

#![allow(clippy::excessive_precision)]

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::str::FromStr;
use libm::sqrt;

use crate::error::TransformError;
use crate::num::is_power_of_two;

const SQRT_2: f64 = core::f64::consts::SQRT_2;

// Loose enough for the tabulated Daub08 taps.
const UNIT_ENERGY_TOLERANCE: f64 = 1e-4;

/// A two-channel filter bank: `wave_length` low-pass taps (`scales`) and
/// `wave_length` high-pass taps (`coeffs`).
///
/// Kernels are immutable after construction and can be shared read-only
/// between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct Wavelet {
    name: String,
    wave_length: usize,
    scales: Vec<f64>,
    coeffs: Vec<f64>,
    synthesis_gain: f64,
}

impl Wavelet {
    /// Build an orthonormal kernel from its low-pass taps. The high-pass taps
    /// follow the alternating flip `coeffs[i] = (-1)^i * scales[L-1-i]`.
    pub fn orthonormal(name: impl Into<String>, scales: &[f64]) -> Result<Self, TransformError> {
        let coeffs = quadrature_mirror(scales);
        Self::from_filters(name, scales, &coeffs, 1.0)
    }

    /// Build a kernel from independent low/high-pass vectors.
    ///
    /// `synthesis_gain` multiplies every reconstructed sample after
    /// accumulation; orthonormal kernels use `1.0`.
    pub fn from_filters(
        name: impl Into<String>,
        scales: &[f64],
        coeffs: &[f64],
        synthesis_gain: f64,
    ) -> Result<Self, TransformError> {
        if scales.is_empty() || scales.len() % 2 != 0 {
            return Err(TransformError::InvalidKernel {
                reason: "tap count must be even and at least 2",
            });
        }
        if scales.len() != coeffs.len() {
            return Err(TransformError::InvalidKernel {
                reason: "scales and coeffs differ in length",
            });
        }
        if !synthesis_gain.is_finite() || synthesis_gain == 0.0 {
            return Err(TransformError::InvalidKernel {
                reason: "synthesis gain must be finite and non-zero",
            });
        }
        if scales.iter().chain(coeffs.iter()).any(|v| !v.is_finite()) {
            return Err(TransformError::InvalidKernel {
                reason: "filter taps must be finite",
            });
        }
        Ok(Self {
            name: name.into(),
            wave_length: scales.len(),
            scales: scales.to_vec(),
            coeffs: coeffs.to_vec(),
            synthesis_gain,
        })
    }

    /// Alfred Haar's orthonormal wavelet.
    pub fn haar02() -> Self {
        let s = 1.0 / SQRT_2;
        Self::from_table("Haar02", &[s, s])
    }

    /// Haar's orthogonal but not normalised wavelet: taps `{1, 1}` and
    /// `{1, -1}`. Each analysis step grows the norm by `sqrt(2)`, so synthesis
    /// applies a gain of `0.5`.
    pub fn haar02_orthogonal() -> Self {
        Self {
            name: String::from("Haar02Orthogonal"),
            wave_length: 2,
            scales: vec![1.0, 1.0],
            coeffs: vec![1.0, -1.0],
            synthesis_gain: 0.5,
        }
    }

    /// Ingrid Daubechies' orthonormal wavelet of four taps.
    pub fn daub04() -> Self {
        let sqrt3 = sqrt(3.0);
        let d = 4.0 * SQRT_2;
        Self::from_table(
            "Daub04",
            &[
                (1.0 + sqrt3) / d,
                (3.0 + sqrt3) / d,
                (3.0 - sqrt3) / d,
                (1.0 - sqrt3) / d,
            ],
        )
    }

    /// Daubechies' orthonormal wavelet of six taps.
    pub fn daub06() -> Self {
        let sqrt10 = sqrt(10.0);
        let a = sqrt(5.0 + 2.0 * sqrt10);
        let r = SQRT_2 / 32.0;
        Self::from_table(
            "Daub06",
            &[
                (1.0 + sqrt10 + a) * r,
                (5.0 + sqrt10 + 3.0 * a) * r,
                (10.0 - 2.0 * sqrt10 + 2.0 * a) * r,
                (10.0 - 2.0 * sqrt10 - 2.0 * a) * r,
                (5.0 + sqrt10 - 3.0 * a) * r,
                (1.0 + sqrt10 - a) * r,
            ],
        )
    }

    /// Daubechies' wavelet of eight taps.
    ///
    /// The table is only accurate to roughly `1e-3`, so reconstruction error
    /// is of that order rather than machine precision.
    pub fn daub08() -> Self {
        let table = [
            0.32580343,
            1.01094572,
            0.8922014,
            -0.03967503,
            -0.2645071,
            0.0436163,
            0.0465036,
            -0.01498699,
        ];
        let scales: Vec<f64> = table.iter().map(|v| v / SQRT_2).collect();
        Self::from_table("Daub08", &scales)
    }

    /// Six-tap Coiflet.
    pub fn coif06() -> Self {
        let sqrt15 = sqrt(15.0);
        let r = SQRT_2 / 32.0;
        Self::from_table(
            "Coif06",
            &[
                (sqrt15 - 3.0) * r,
                (1.0 - sqrt15) * r,
                (6.0 - 2.0 * sqrt15) * r,
                (2.0 * sqrt15 + 6.0) * r,
                (sqrt15 + 13.0) * r,
                (9.0 - sqrt15) * r,
            ],
        )
    }

    // Built-in tables are even-length and finite.
    fn from_table(name: &str, scales: &[f64]) -> Self {
        Self {
            name: String::from(name),
            wave_length: scales.len(),
            scales: scales.to_vec(),
            coeffs: quadrature_mirror(scales),
            synthesis_gain: 1.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of filter taps; also the shortest buffer one step accepts.
    pub fn wave_length(&self) -> usize {
        self.wave_length
    }

    /// Low-pass taps.
    pub fn scales(&self) -> &[f64] {
        &self.scales
    }

    /// High-pass taps.
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    pub fn synthesis_gain(&self) -> f64 {
        self.synthesis_gain
    }

    /// `true` when both filters carry unit energy and synthesis needs no
    /// gain correction.
    pub fn is_orthonormal(&self) -> bool {
        let unit = |taps: &[f64]| {
            (taps.iter().map(|v| v * v).sum::<f64>() - 1.0).abs() < UNIT_ENERGY_TOLERANCE
        };
        self.synthesis_gain == 1.0 && unit(&self.scales) && unit(&self.coeffs)
    }

    /// Region sizes a multi-level decomposition of a `len`-sample buffer
    /// visits, largest first: `len, len/2, ...` while at least `wave_length`.
    ///
    /// Buffers shorter than the kernel yield no levels (pass-through); longer
    /// buffers must be a power of two.
    pub fn level_sizes(&self, len: usize) -> Result<Vec<usize>, TransformError> {
        if len < self.wave_length {
            return Ok(Vec::new());
        }
        if !is_power_of_two(len) {
            return Err(TransformError::NotPowerOfTwo { len });
        }
        let mut sizes = Vec::new();
        let mut h = len;
        while h >= self.wave_length {
            sizes.push(h);
            h >>= 1;
        }
        Ok(sizes)
    }

    fn check_len(&self, len: usize) -> Result<(), TransformError> {
        if len % 2 != 0 {
            return Err(TransformError::OddLength { len });
        }
        if len < self.wave_length {
            return Err(TransformError::ShorterThanKernel {
                len,
                wave_length: self.wave_length,
            });
        }
        Ok(())
    }

    /// One analysis step.
    ///
    /// The output keeps the input length: `[0, h)` holds the low-pass
    /// ("energy") half and `[h, 2h)` the high-pass ("detail") half, with
    /// `h = len / 2`. Indices wrap modulo the length, treating the signal as
    /// periodic.
    pub fn forward(&self, time: &[f64]) -> Result<Vec<f64>, TransformError> {
        self.check_len(time.len())?;
        let len = time.len();
        let h = len >> 1;
        let mut hilb = vec![0.0; len];
        for i in 0..h {
            for j in 0..self.wave_length {
                let mut k = (i << 1) + j;
                while k >= len {
                    k -= len;
                }
                hilb[i] += time[k] * self.scales[j];
                hilb[i + h] += time[k] * self.coeffs[j];
            }
        }
        Ok(hilb)
    }

    /// One synthesis step, the inverse of [`Wavelet::forward`] for the same
    /// buffer length.
    pub fn reverse(&self, hilb: &[f64]) -> Result<Vec<f64>, TransformError> {
        self.check_len(hilb.len())?;
        let len = hilb.len();
        let h = len >> 1;
        let mut time = vec![0.0; len];
        for i in 0..h {
            for j in 0..self.wave_length {
                let mut k = (i << 1) + j;
                while k >= len {
                    k -= len;
                }
                time[k] += hilb[i] * self.scales[j] + hilb[i + h] * self.coeffs[j];
            }
        }
        if self.synthesis_gain != 1.0 {
            for v in time.iter_mut() {
                *v *= self.synthesis_gain;
            }
        }
        Ok(time)
    }
}

/// High-pass taps of an orthonormal bank: reverse the low-pass taps and
/// negate every odd index.
fn quadrature_mirror(scales: &[f64]) -> Vec<f64> {
    scales
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &tap)| if i % 2 == 0 { tap } else { -tap })
        .collect()
}

/// Identifiers of the built-in kernels, parsed case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WaveletFamily {
    Haar02,
    Haar02Orthogonal,
    Daub04,
    Daub06,
    Daub08,
    Coif06,
}

impl WaveletFamily {
    pub const ALL: [WaveletFamily; 6] = [
        WaveletFamily::Haar02,
        WaveletFamily::Haar02Orthogonal,
        WaveletFamily::Daub04,
        WaveletFamily::Daub06,
        WaveletFamily::Daub08,
        WaveletFamily::Coif06,
    ];

    pub fn name(self) -> &'static str {
        match self {
            WaveletFamily::Haar02 => "Haar02",
            WaveletFamily::Haar02Orthogonal => "Haar02Orthogonal",
            WaveletFamily::Daub04 => "Daub04",
            WaveletFamily::Daub06 => "Daub06",
            WaveletFamily::Daub08 => "Daub08",
            WaveletFamily::Coif06 => "Coif06",
        }
    }

    /// Construct the kernel for this family.
    pub fn wavelet(self) -> Wavelet {
        match self {
            WaveletFamily::Haar02 => Wavelet::haar02(),
            WaveletFamily::Haar02Orthogonal => Wavelet::haar02_orthogonal(),
            WaveletFamily::Daub04 => Wavelet::daub04(),
            WaveletFamily::Daub06 => Wavelet::daub06(),
            WaveletFamily::Daub08 => Wavelet::daub08(),
            WaveletFamily::Coif06 => Wavelet::coif06(),
        }
    }
}

impl core::fmt::Display for WaveletFamily {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WaveletFamily {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        WaveletFamily::ALL
            .iter()
            .copied()
            .find(|family| family.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TransformError::UnknownWavelet(String::from(s)))
    }
}

impl From<WaveletFamily> for Wavelet {
    fn from(family: WaveletFamily) -> Self {
        family.wavelet()
    }
}
