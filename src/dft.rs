//! Discrete Fourier Transform module
//! Direct O(N²) summation over f64, any length
//! no_std + alloc compatible
//!
//! The buffer form ([`BasicTransform::forward`]) packs the spectrum of a real
//! signal of length `N` into `N` reals, half-complex style:
//!
//! - `out[k] = Re X[k]` for `0 <= k <= N/2`
//! - `out[N - k] = Im X[k]` for `0 < k < (N + 1) / 2`
//!
//! The remaining bins follow from `X[N - k] = conj(X[k])`. [`BasicTransform::reverse`]
//! unpacks, applies the inverse sum and the `1/N` normalisation.

use alloc::vec;
use alloc::vec::Vec;
use core::f64::consts::PI;

use crate::error::TransformError;
use crate::num::Complex64;
use crate::transform::BasicTransform;

/// Naive DFT, kept as a frequency-domain reference for the wavelet
/// algorithms.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscreteFourierTransform;

impl DiscreteFourierTransform {
    pub fn new() -> Self {
        Self
    }

    /// `X[k] = sum_n x[n] * exp(-2*pi*i*k*n/N)`, unnormalised.
    pub fn spectrum(&self, time: &[f64]) -> Result<Vec<Complex64>, TransformError> {
        let n = time.len();
        if n == 0 {
            return Err(TransformError::EmptyInput);
        }
        let mut freq = vec![Complex64::zero(); n];
        for (k, bin) in freq.iter_mut().enumerate() {
            let mut sum = Complex64::zero();
            // kt tracks k*t mod N without forming the product
            let mut kt = 0;
            for &x in time {
                sum += Complex64::expi(-twiddle_angle(kt, n)).scale(x);
                kt = step_index(kt, k, n);
            }
            *bin = sum;
        }
        trace_level!("dft spectrum of {} samples", n);
        Ok(freq)
    }

    /// Inverse of [`spectrum`](Self::spectrum):
    /// `x[n] = 1/N * sum_k X[k] * exp(2*pi*i*k*n/N)`, real part.
    pub fn synthesize(&self, freq: &[Complex64]) -> Result<Vec<f64>, TransformError> {
        Ok(self
            .synthesize_complex(freq)?
            .into_iter()
            .map(|c| c.re)
            .collect())
    }

    /// Inverse sum keeping the imaginary part, for spectra that are not
    /// Hermitian.
    pub fn synthesize_complex(&self, freq: &[Complex64]) -> Result<Vec<Complex64>, TransformError> {
        let n = freq.len();
        if n == 0 {
            return Err(TransformError::EmptyInput);
        }
        let norm = 1.0 / n as f64;
        let mut time = vec![Complex64::zero(); n];
        for (t, sample) in time.iter_mut().enumerate() {
            let mut sum = Complex64::zero();
            let mut kt = 0;
            for &bin in freq {
                sum += bin * Complex64::expi(twiddle_angle(kt, n));
                kt = step_index(kt, t, n);
            }
            *sample = sum.scale(norm);
        }
        trace_level!("dft synthesis of {} bins", n);
        Ok(time)
    }

    /// Pack a Hermitian spectrum into `N` reals (see module docs).
    pub fn pack(freq: &[Complex64]) -> Vec<f64> {
        let n = freq.len();
        let mut packed = vec![0.0; n];
        if n == 0 {
            return packed;
        }
        for k in 0..=n / 2 {
            packed[k] = freq[k].re;
        }
        for k in 1..(n + 1) / 2 {
            packed[n - k] = freq[k].im;
        }
        packed
    }

    /// Rebuild the full spectrum from the packed layout.
    pub fn unpack(packed: &[f64]) -> Vec<Complex64> {
        let n = packed.len();
        let mut freq = vec![Complex64::zero(); n];
        if n == 0 {
            return freq;
        }
        for k in 0..=n / 2 {
            let im = if k > 0 && k < (n + 1) / 2 {
                packed[n - k]
            } else {
                0.0
            };
            freq[k] = Complex64::new(packed[k], im);
            if k > 0 && k < n - k {
                freq[n - k] = freq[k].conj();
            }
        }
        freq
    }
}

/// `(kt + step) mod n` for `kt, step < n`, without overflowing.
#[inline]
fn step_index(kt: usize, step: usize, n: usize) -> usize {
    if kt >= n - step {
        kt - (n - step)
    } else {
        kt + step
    }
}

#[inline]
fn twiddle_angle(kn: usize, n: usize) -> f64 {
    2.0 * PI * kn as f64 / n as f64
}

impl BasicTransform for DiscreteFourierTransform {
    fn name(&self) -> &'static str {
        "DFT"
    }

    fn forward(&self, time: &[f64]) -> Result<Vec<f64>, TransformError> {
        let freq = self.spectrum(time)?;
        Ok(Self::pack(&freq))
    }

    fn reverse(&self, packed: &[f64]) -> Result<Vec<f64>, TransformError> {
        if packed.is_empty() {
            return Err(TransformError::EmptyInput);
        }
        self.synthesize(&Self::unpack(packed))
    }
}
