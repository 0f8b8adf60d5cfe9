use wavepack::num::l2_norm;
use wavepack::{AlgorithmKind, Transform, Wavelet};

fn main() {
    let signal = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];

    for kind in AlgorithmKind::ALL {
        let t = Transform::builder()
            .algorithm(kind)
            .wavelet(Wavelet::daub04())
            .build()
            .unwrap();
        let hilb = t.forward(&signal).unwrap();
        let recon = t.reverse(&hilb).unwrap();
        println!("{} forward: {:?}", kind, hilb);
        println!("{} recon:   {:?}", kind, recon);
        println!("{} norms:   {:.6} -> {:.6}", kind, l2_norm(&signal), l2_norm(&hilb));
    }
}
