use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::str::FromStr;

use crate::dft::DiscreteFourierTransform;
use crate::error::TransformError;
use crate::fwt::FastWaveletTransform;
use crate::wavelet::{Wavelet, WaveletFamily};
use crate::wpt::WaveletPacketTransform;

/// Common interface of the transform algorithms.
///
/// `forward` maps the time domain to the transform domain and `reverse`
/// undoes it. Both return a new buffer of the input's length.
pub trait BasicTransform {
    fn name(&self) -> &'static str;
    fn forward(&self, time: &[f64]) -> Result<Vec<f64>, TransformError>;
    fn reverse(&self, hilb: &[f64]) -> Result<Vec<f64>, TransformError>;

    fn forward_2d(&self, _matrix: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, TransformError> {
        Err(TransformError::Unsupported {
            operation: "2-D forward transform",
        })
    }

    fn reverse_2d(&self, _matrix: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, TransformError> {
        Err(TransformError::Unsupported {
            operation: "2-D reverse transform",
        })
    }
}

/// Algorithm identifiers accepted at the selection boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    /// Discrete Fourier transform.
    Dft,
    /// Pyramid wavelet transform.
    Fwt,
    /// Wavelet packet transform.
    Wpt,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 3] = [AlgorithmKind::Dft, AlgorithmKind::Fwt, AlgorithmKind::Wpt];

    pub fn name(self) -> &'static str {
        match self {
            AlgorithmKind::Dft => "DFT",
            AlgorithmKind::Fwt => "FWT",
            AlgorithmKind::Wpt => "WPT",
        }
    }

    pub fn needs_wavelet(self) -> bool {
        !matches!(self, AlgorithmKind::Dft)
    }
}

impl core::fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AlgorithmKind {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        AlgorithmKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| TransformError::UnknownAlgorithm(String::from(s)))
    }
}

/// One concrete algorithm, chosen once and never swapped.
#[derive(Debug, Clone)]
pub enum Algorithm {
    Dft(DiscreteFourierTransform),
    Fwt(FastWaveletTransform),
    Wpt(WaveletPacketTransform),
}

impl Algorithm {
    pub fn kind(&self) -> AlgorithmKind {
        match self {
            Algorithm::Dft(_) => AlgorithmKind::Dft,
            Algorithm::Fwt(_) => AlgorithmKind::Fwt,
            Algorithm::Wpt(_) => AlgorithmKind::Wpt,
        }
    }

    fn as_transform(&self) -> &dyn BasicTransform {
        match self {
            Algorithm::Dft(t) => t,
            Algorithm::Fwt(t) => t,
            Algorithm::Wpt(t) => t,
        }
    }
}

impl From<DiscreteFourierTransform> for Algorithm {
    fn from(t: DiscreteFourierTransform) -> Self {
        Algorithm::Dft(t)
    }
}

impl From<FastWaveletTransform> for Algorithm {
    fn from(t: FastWaveletTransform) -> Self {
        Algorithm::Fwt(t)
    }
}

impl From<WaveletPacketTransform> for Algorithm {
    fn from(t: WaveletPacketTransform) -> Self {
        Algorithm::Wpt(t)
    }
}

impl BasicTransform for Algorithm {
    fn name(&self) -> &'static str {
        self.as_transform().name()
    }

    fn forward(&self, time: &[f64]) -> Result<Vec<f64>, TransformError> {
        self.as_transform().forward(time)
    }

    fn reverse(&self, hilb: &[f64]) -> Result<Vec<f64>, TransformError> {
        self.as_transform().reverse(hilb)
    }

    fn forward_2d(&self, matrix: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, TransformError> {
        self.as_transform().forward_2d(matrix)
    }

    fn reverse_2d(&self, matrix: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, TransformError> {
        self.as_transform().reverse_2d(matrix)
    }
}

/// Single entry point for callers: holds one [`Algorithm`] and delegates to
/// it.
///
/// ```
/// use wavepack::Transform;
///
/// let t = Transform::from_names("WPT", "haar02").unwrap();
/// let hilb = t.forward(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// let time = t.reverse(&hilb).unwrap();
/// assert!((time[3] - 4.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Transform {
    algorithm: Algorithm,
}

impl Transform {
    pub fn new(algorithm: impl Into<Algorithm>) -> Self {
        Self {
            algorithm: algorithm.into(),
        }
    }

    pub fn builder() -> TransformBuilder {
        TransformBuilder::new()
    }

    /// Resolve both identifiers case-insensitively, e.g. `("fwt", "Daub04")`.
    /// The wavelet name is still validated for the Fourier algorithm.
    pub fn from_names(algorithm: &str, wavelet: &str) -> Result<Self, TransformError> {
        let kind: AlgorithmKind = algorithm.parse()?;
        let family: WaveletFamily = wavelet.parse()?;
        TransformBuilder::new()
            .algorithm(kind)
            .wavelet(family.wavelet())
            .build()
    }

    pub fn algorithm(&self) -> &Algorithm {
        &self.algorithm
    }

    pub fn kind(&self) -> AlgorithmKind {
        self.algorithm.kind()
    }

    pub fn forward(&self, time: &[f64]) -> Result<Vec<f64>, TransformError> {
        debug_dispatch!("{} forward on {} samples", self.algorithm.name(), time.len());
        self.algorithm.forward(time)
    }

    pub fn reverse(&self, hilb: &[f64]) -> Result<Vec<f64>, TransformError> {
        debug_dispatch!("{} reverse on {} samples", self.algorithm.name(), hilb.len());
        self.algorithm.reverse(hilb)
    }

    pub fn forward_2d(&self, matrix: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, TransformError> {
        self.algorithm.forward_2d(matrix)
    }

    pub fn reverse_2d(&self, matrix: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, TransformError> {
        self.algorithm.reverse_2d(matrix)
    }

    /// Forward transform of several independent signals. Stops at the first
    /// failing signal.
    pub fn forward_batch(&self, signals: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, TransformError> {
        signals.iter().map(|s| self.forward(s)).collect()
    }

    pub fn reverse_batch(&self, signals: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, TransformError> {
        signals.iter().map(|s| self.reverse(s)).collect()
    }
}

/// Collects an algorithm choice and an optional kernel, then validates that
/// the combination is complete.
#[derive(Debug, Clone, Default)]
pub struct TransformBuilder {
    kind: Option<AlgorithmKind>,
    wavelet: Option<Arc<Wavelet>>,
}

impl TransformBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn algorithm(mut self, kind: AlgorithmKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn wavelet(mut self, wavelet: impl Into<Arc<Wavelet>>) -> Self {
        self.wavelet = Some(wavelet.into());
        self
    }

    pub fn build(self) -> Result<Transform, TransformError> {
        let kind = self.kind.ok_or(TransformError::MissingAlgorithm)?;
        let algorithm = match kind {
            AlgorithmKind::Dft => Algorithm::Dft(DiscreteFourierTransform::new()),
            AlgorithmKind::Fwt => Algorithm::Fwt(FastWaveletTransform::new(
                self.wavelet.ok_or(TransformError::MissingWavelet)?,
            )),
            AlgorithmKind::Wpt => Algorithm::Wpt(WaveletPacketTransform::new(
                self.wavelet.ok_or(TransformError::MissingWavelet)?,
            )),
        };
        Ok(Transform { algorithm })
    }
}
