//! Wavelet packet transform
//!
//! Every level splits every sub-band, low and high alike, so the forward pass
//! builds a full binary tree whose leaves are packets of the smallest visited
//! region size.

use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::error::TransformError;
use crate::transform::BasicTransform;
use crate::wavelet::Wavelet;

/// Full packet decomposition driven by one [`Wavelet`] kernel.
#[derive(Debug, Clone)]
pub struct WaveletPacketTransform {
    wavelet: Arc<Wavelet>,
}

impl WaveletPacketTransform {
    pub fn new(wavelet: impl Into<Arc<Wavelet>>) -> Self {
        Self {
            wavelet: wavelet.into(),
        }
    }

    pub fn wavelet(&self) -> &Wavelet {
        &self.wavelet
    }

    /// Packet size of every forward level, largest first. Level `l` holds
    /// `len / levels[l]` packets.
    pub fn levels(&self, len: usize) -> Result<Vec<usize>, TransformError> {
        self.wavelet.level_sizes(len)
    }
}

impl BasicTransform for WaveletPacketTransform {
    fn name(&self) -> &'static str {
        "WPT"
    }

    fn forward(&self, time: &[f64]) -> Result<Vec<f64>, TransformError> {
        let levels = self.levels(time.len())?;
        let mut hilb = time.to_vec();
        for (level, &h) in levels.iter().enumerate() {
            trace_level!(
                "wpt forward level {}: {} packets of {} ({})",
                level,
                hilb.len() / h,
                h,
                self.wavelet.name()
            );
            for packet in hilb.chunks_exact_mut(h) {
                let band = self.wavelet.forward(packet)?;
                packet.copy_from_slice(&band);
            }
        }
        Ok(hilb)
    }

    fn reverse(&self, hilb: &[f64]) -> Result<Vec<f64>, TransformError> {
        let levels = self.levels(hilb.len())?;
        let mut time = hilb.to_vec();
        for (level, &h) in levels.iter().enumerate().rev() {
            trace_level!(
                "wpt reverse level {}: {} packets of {} ({})",
                level,
                time.len() / h,
                h,
                self.wavelet.name()
            );
            for packet in time.chunks_exact_mut(h) {
                let band = self.wavelet.reverse(packet)?;
                packet.copy_from_slice(&band);
            }
        }
        Ok(time)
    }

    fn forward_2d(&self, _matrix: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, TransformError> {
        Err(TransformError::Unsupported {
            operation: "2-D forward wavelet packet transform",
        })
    }

    fn reverse_2d(&self, _matrix: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, TransformError> {
        Err(TransformError::Unsupported {
            operation: "2-D reverse wavelet packet transform",
        })
    }
}
