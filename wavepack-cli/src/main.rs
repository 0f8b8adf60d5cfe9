use clap::Parser;
use wavepack_cli::{parse_signal, run, Columns, DEFAULT_SIGNAL};

/// Forward and reverse transform a small signal and print the three domains.
#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    /// Transform type: DFT, FWT or WPT
    transform: String,

    /// Wavelet type: Haar02, Haar02Orthogonal, Daub04, Daub06, Daub08, Coif06
    wavelet: String,

    /// Comma separated samples; defaults to twelve ones
    #[arg(long, allow_hyphen_values = true)]
    signal: Option<String>,

    /// Digits after the decimal point
    #[arg(long, default_value_t = 6)]
    precision: usize,

    /// Column width
    #[arg(long, default_value_t = 9)]
    width: usize,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let signal = match cli.signal.as_deref() {
        Some(text) => parse_signal(text)?,
        None => DEFAULT_SIGNAL.to_vec(),
    };
    let report = run(&cli.transform, &cli.wavelet, &signal)?;
    print!(
        "{}",
        report.render(Columns {
            width: cli.width,
            precision: cli.precision,
        })
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_positional_and_flags() {
        let cli = Cli::parse_from(["wavepack", "fwt", "daub04", "--signal", "1,2,3,4", "--precision", "3"]);
        assert_eq!(cli.transform, "fwt");
        assert_eq!(cli.wavelet, "daub04");
        assert_eq!(cli.signal.as_deref(), Some("1,2,3,4"));
        assert_eq!(cli.precision, 3);
        assert_eq!(cli.width, 9);
    }
}
