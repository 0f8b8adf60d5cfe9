use wavepack::{AlgorithmKind, BasicTransform, Complex64, DiscreteFourierTransform, Transform};

#[test]
/// A constant signal has all its energy in the DC bin.
fn constant_signal_spectrum() {
    let dft = DiscreteFourierTransform::new();
    for n in [4usize, 7, 12, 16] {
        let freq = dft.spectrum(&vec![1.0; n]).unwrap();
        assert!((freq[0].re - n as f64).abs() < 1e-9, "n={} dc={:?}", n, freq[0]);
        assert!(freq[0].im.abs() < 1e-9);
        for c in &freq[1..] {
            assert!(c.abs() < 1e-9, "n={} {:?}", n, c);
        }
    }
}

#[test]
/// Packed buffer of a constant signal is (N, 0, 0, ...).
fn constant_signal_packed() {
    let packed = DiscreteFourierTransform::new().forward(&[1.0; 12]).unwrap();
    assert_eq!(packed.len(), 12);
    assert!((packed[0] - 12.0).abs() < 1e-9);
    for v in &packed[1..] {
        assert!(v.abs() < 1e-9, "{}", v);
    }
}

#[test]
/// Twelve ones survive DFT forward then reverse through the facade.
fn twelve_ones_end_to_end() {
    let t = Transform::builder()
        .algorithm(AlgorithmKind::Dft)
        .build()
        .unwrap();
    let x = [1.0; 12];
    let freq = t.forward(&x).unwrap();
    let reco = t.reverse(&freq).unwrap();
    assert_eq!(reco.len(), 12);
    for v in reco {
        assert!((v - 1.0).abs() < 1e-9, "{}", v);
    }
}

#[test]
/// A pure cosine at bin 3 peaks at bins 3 and N-3.
fn cosine_peaks() {
    let n = 16;
    let x: Vec<f64> = (0..n)
        .map(|i| (2.0 * std::f64::consts::PI * 3.0 * i as f64 / n as f64).cos())
        .collect();
    let freq = DiscreteFourierTransform::new().spectrum(&x).unwrap();
    for (k, c) in freq.iter().enumerate() {
        if k == 3 || k == n - 3 {
            assert!((c.re - n as f64 / 2.0).abs() < 1e-9, "bin {}: {:?}", k, c);
        } else {
            assert!(c.abs() < 1e-9, "bin {}: {:?}", k, c);
        }
    }
}

#[test]
/// Odd lengths and arbitrary data round-trip through the packed layout.
fn packed_roundtrip_arbitrary_lengths() {
    let dft = DiscreteFourierTransform::new();
    for n in 1..20usize {
        let x: Vec<f64> = (0..n).map(|i| ((i * 5 + 3) % 9) as f64 - 4.0).collect();
        let reco = dft.reverse(&dft.forward(&x).unwrap()).unwrap();
        for (a, b) in x.iter().zip(reco.iter()) {
            assert!((a - b).abs() < 1e-9, "n={}: {} vs {}", n, a, b);
        }
    }
}

#[test]
/// Complex synthesis inverts a spectrum that is not Hermitian.
fn complex_synthesis_roundtrip() {
    let dft = DiscreteFourierTransform::new();
    let freq = vec![
        Complex64::new(1.0, 2.0),
        Complex64::new(-0.5, 0.0),
        Complex64::new(0.0, 3.0),
    ];
    let time = dft.synthesize_complex(&freq).unwrap();
    // forward sum on the complex samples by hand
    let n = freq.len();
    for (k, want) in freq.iter().enumerate() {
        let mut got = Complex64::zero();
        for (t, &s) in time.iter().enumerate() {
            let angle = -2.0 * std::f64::consts::PI * (k * t) as f64 / n as f64;
            got += s * Complex64::expi(angle);
        }
        assert!((got - *want).abs() < 1e-9, "{:?} vs {:?}", got, want);
    }
}
