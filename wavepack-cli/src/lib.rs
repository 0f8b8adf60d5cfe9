use anyhow::{Context, Result};
use wavepack::{AlgorithmKind, Transform, WaveletFamily};

/// Signal used when no `--signal` is given: twelve ones.
pub const DEFAULT_SIGNAL: [f64; 12] = [1.0; 12];

/// Column layout for printed buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columns {
    pub width: usize,
    pub precision: usize,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            width: 9,
            precision: 6,
        }
    }
}

/// Format values as fixed-width right-aligned columns without separators.
pub fn format_row(values: &[f64], columns: Columns) -> String {
    values
        .iter()
        .map(|v| format!("{:>w$.p$}", v, w = columns.width, p = columns.precision))
        .collect()
}

/// Parse a comma separated list of samples, e.g. `1,2.5,-3`.
pub fn parse_signal(text: &str) -> Result<Vec<f64>> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .with_context(|| format!("invalid sample '{}'", s))
        })
        .collect()
}

/// Usage lines listing the accepted identifiers.
pub fn usage() -> String {
    let transforms: Vec<&str> = AlgorithmKind::ALL.iter().map(|k| k.name()).collect();
    let wavelets: Vec<&str> = WaveletFamily::ALL.iter().map(|f| f.name()).collect();
    format!(
        "usage: wavepack [transformType] [waveletType]\n\ntransformType: {}\nwaveletType  : {}",
        transforms.join(", "),
        wavelets.join(", ")
    )
}

/// The three buffers of one demo run.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub kind: AlgorithmKind,
    pub time: Vec<f64>,
    pub transformed: Vec<f64>,
    pub reconstruction: Vec<f64>,
}

impl Report {
    pub fn render(&self, columns: Columns) -> String {
        let domain = match self.kind {
            AlgorithmKind::Dft => "frequency domain:",
            AlgorithmKind::Fwt | AlgorithmKind::Wpt => "hilbert domain:",
        };
        format!(
            "\ntime domain:\n{}\n{}\n{}\nreconstruction:\n{}\n",
            format_row(&self.time, columns),
            domain,
            format_row(&self.transformed, columns),
            format_row(&self.reconstruction, columns)
        )
    }
}

/// Resolve both names, run forward then reverse on `signal`.
pub fn run(transform: &str, wavelet: &str, signal: &[f64]) -> Result<Report> {
    let kind: AlgorithmKind = transform.parse().with_context(usage)?;
    let family: WaveletFamily = wavelet.parse().with_context(usage)?;
    log::info!("{} with {} on {} samples", kind, family, signal.len());
    let t = Transform::builder()
        .algorithm(kind)
        .wavelet(family.wavelet())
        .build()?;
    let transformed = t
        .forward(signal)
        .with_context(|| format!("{} forward with {} failed", kind, family))?;
    let reconstruction = t
        .reverse(&transformed)
        .with_context(|| format!("{} reverse with {} failed", kind, family))?;
    Ok(Report {
        kind,
        time: signal.to_vec(),
        transformed,
        reconstruction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_formatting() {
        let row = format_row(&[1.0, -0.5], Columns::default());
        assert_eq!(row, " 1.000000-0.500000");
    }

    #[test]
    fn signal_parsing() {
        assert_eq!(parse_signal("1, 2.5,-3").unwrap(), vec![1.0, 2.5, -3.0]);
        assert!(parse_signal("1,x").is_err());
    }

    #[test]
    fn dft_report_reconstructs() {
        let report = run("dft", "haar02", &DEFAULT_SIGNAL).unwrap();
        assert_eq!(report.kind, AlgorithmKind::Dft);
        assert!((report.transformed[0] - 12.0).abs() < 1e-9);
        for v in &report.reconstruction {
            assert!((v - 1.0).abs() < 1e-9);
        }
        assert!(report.render(Columns::default()).contains("frequency domain:"));
    }

    #[test]
    fn unknown_names_show_usage() {
        let err = run("fft", "haar02", &DEFAULT_SIGNAL).unwrap_err();
        assert!(format!("{:#}", err).contains("transformType: DFT, FWT, WPT"));
        let err = run("fwt", "db4", &DEFAULT_SIGNAL).unwrap_err();
        assert!(format!("{:#}", err).contains("unknown wavelet 'db4'"));
    }
}
