use proptest::prelude::*;
use wavepack::num::l2_norm;
use wavepack::{Transform, WaveletFamily};

fn family_strategy() -> impl Strategy<Value = WaveletFamily> {
    prop::sample::select(vec![
        WaveletFamily::Haar02,
        WaveletFamily::Haar02Orthogonal,
        WaveletFamily::Daub04,
        WaveletFamily::Daub06,
        WaveletFamily::Coif06,
    ])
}

proptest! {
    #[test]
    fn prop_wavelet_roundtrip(
        family in family_strategy(),
        alg in prop::sample::select(vec!["FWT", "WPT"]),
        exp in 3u32..8,
        ref seed in prop::collection::vec(-100.0f64..100.0, 128),
    ) {
        let len = 1usize << exp;
        let x = &seed[..len];
        let t = Transform::from_names(alg, family.name()).unwrap();
        let z = t.reverse(&t.forward(x).unwrap()).unwrap();
        for (a, b) in x.iter().zip(z.iter()) {
            prop_assert!((a - b).abs() < 1e-9 * (1.0 + a.abs()), "{} vs {}", a, b);
        }
    }

    #[test]
    fn prop_energy_conserved(
        family in family_strategy(),
        exp in 3u32..8,
        ref seed in prop::collection::vec(-10.0f64..10.0, 128),
    ) {
        let wavelet = family.wavelet();
        prop_assume!(wavelet.is_orthonormal());
        let x = &seed[..1usize << exp];
        let t = Transform::from_names("FWT", family.name()).unwrap();
        let e = l2_norm(x);
        let eh = l2_norm(&t.forward(x).unwrap());
        prop_assert!((e - eh).abs() <= 1e-9 * (1.0 + e));
    }

    #[test]
    fn prop_dft_roundtrip(ref x in prop::collection::vec(-50.0f64..50.0, 1..40)) {
        let t = Transform::from_names("DFT", "Haar02").unwrap();
        let z = t.reverse(&t.forward(x).unwrap()).unwrap();
        for (a, b) in x.iter().zip(z.iter()) {
            prop_assert!((a - b).abs() < 1e-8, "{} vs {}", a, b);
        }
    }
}
