use alloc::string::String;

/// Errors returned by kernels, algorithms and the transform facade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// The Fourier transform received a zero-length buffer.
    EmptyInput,
    /// A single filter step needs an even number of samples.
    OddLength { len: usize },
    /// A single filter step needs at least `wave_length` samples.
    ShorterThanKernel { len: usize, wave_length: usize },
    /// Multi-level wavelet algorithms decompose power-of-two lengths only.
    NotPowerOfTwo { len: usize },
    /// Two buffers that must agree in length do not.
    MismatchedLengths { expected: usize, actual: usize },
    /// Filter taps rejected at kernel construction.
    InvalidKernel { reason: &'static str },
    /// Requested operation is not available for this algorithm.
    Unsupported { operation: &'static str },
    /// Wavelet identifier did not resolve to a known family.
    UnknownWavelet(String),
    /// Algorithm identifier did not resolve to DFT, FWT or WPT.
    UnknownAlgorithm(String),
    /// A wavelet algorithm was selected without a kernel.
    MissingWavelet,
    /// The facade was built without an algorithm.
    MissingAlgorithm,
}

impl core::fmt::Display for TransformError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TransformError::EmptyInput => write!(f, "input buffer is empty"),
            TransformError::OddLength { len } => {
                write!(f, "buffer length {len} is odd")
            }
            TransformError::ShorterThanKernel { len, wave_length } => write!(
                f,
                "buffer length {len} is shorter than the kernel's {wave_length} taps"
            ),
            TransformError::NotPowerOfTwo { len } => {
                write!(f, "buffer length {len} is not a power of two")
            }
            TransformError::MismatchedLengths { expected, actual } => {
                write!(f, "expected length {expected}, got {actual}")
            }
            TransformError::InvalidKernel { reason } => write!(f, "invalid kernel: {reason}"),
            TransformError::Unsupported { operation } => {
                write!(f, "{operation} is not implemented yet")
            }
            TransformError::UnknownWavelet(name) => write!(f, "unknown wavelet '{name}'"),
            TransformError::UnknownAlgorithm(name) => write!(f, "unknown transform '{name}'"),
            TransformError::MissingWavelet => {
                write!(f, "wavelet transform requested without a wavelet")
            }
            TransformError::MissingAlgorithm => write!(f, "no transform algorithm selected"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TransformError {}
