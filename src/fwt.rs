//! Pyramid ("fast") wavelet transform
//!
//! Each level filters only the leading low-pass region of the previous level,
//! halving it until it is shorter than the kernel. The detail bands of every
//! level are carried through untouched, giving the classic
//! `[approx | d_n | ... | d_2 | d_1]` layout.

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::error::TransformError;
use crate::transform::BasicTransform;
use crate::wavelet::Wavelet;

/// Multiresolution decomposition driven by one [`Wavelet`] kernel.
#[derive(Debug, Clone)]
pub struct FastWaveletTransform {
    wavelet: Arc<Wavelet>,
}

impl FastWaveletTransform {
    pub fn new(wavelet: impl Into<Arc<Wavelet>>) -> Self {
        Self {
            wavelet: wavelet.into(),
        }
    }

    pub fn wavelet(&self) -> &Wavelet {
        &self.wavelet
    }

    /// Active region size of every forward level, largest first.
    pub fn levels(&self, len: usize) -> Result<Vec<usize>, TransformError> {
        self.wavelet.level_sizes(len)
    }
}

impl BasicTransform for FastWaveletTransform {
    fn name(&self) -> &'static str {
        "FWT"
    }

    fn forward(&self, time: &[f64]) -> Result<Vec<f64>, TransformError> {
        let levels = self.levels(time.len())?;
        let mut hilb = time.to_vec();
        for (level, &h) in levels.iter().enumerate() {
            trace_level!(
                "fwt forward level {} on {} of {} samples ({})",
                level,
                h,
                hilb.len(),
                self.wavelet.name()
            );
            let band = self.wavelet.forward(&hilb[..h])?;
            hilb[..h].copy_from_slice(&band);
        }
        Ok(hilb)
    }

    fn reverse(&self, hilb: &[f64]) -> Result<Vec<f64>, TransformError> {
        let levels = self.levels(hilb.len())?;
        let mut time = hilb.to_vec();
        for (level, &h) in levels.iter().enumerate().rev() {
            trace_level!(
                "fwt reverse level {} on {} of {} samples ({})",
                level,
                h,
                time.len(),
                self.wavelet.name()
            );
            let band = self.wavelet.reverse(&time[..h])?;
            time[..h].copy_from_slice(&band);
        }
        Ok(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_haar_pyramid_constant_signal() {
        // all energy collapses into the first coefficient
        let fwt = FastWaveletTransform::new(Wavelet::haar02());
        let x = vec![1.0; 8];
        let y = fwt.forward(&x).unwrap();
        assert!((y[0] - 8.0f64.sqrt()).abs() < 1e-12, "{}", y[0]);
        for v in &y[1..] {
            assert!(v.abs() < 1e-12);
        }
        let z = fwt.reverse(&y).unwrap();
        for v in z {
            assert!((v - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_pyramid_keeps_details() {
        let fwt = FastWaveletTransform::new(Wavelet::haar02());
        let x = [4.0, 2.0, 5.0, 5.0, 0.0, 0.0, 1.0, 3.0];
        let first = Wavelet::haar02().forward(&x).unwrap();
        let y = fwt.forward(&x).unwrap();
        // the finest detail band is produced by the first level only
        for (a, b) in first[4..].iter().zip(y[4..].iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_pyramid_passthrough_short() {
        let fwt = FastWaveletTransform::new(Wavelet::daub08());
        let x = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(fwt.forward(&x).unwrap(), x.to_vec());
        assert_eq!(fwt.reverse(&x).unwrap(), x.to_vec());
    }

    #[test]
    fn test_pyramid_rejects_non_power_of_two() {
        let fwt = FastWaveletTransform::new(Wavelet::haar02());
        assert_eq!(
            fwt.forward(&[1.0; 12]),
            Err(TransformError::NotPowerOfTwo { len: 12 })
        );
    }
}
