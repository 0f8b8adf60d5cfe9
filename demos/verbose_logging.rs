//! Demonstrates enabling verbose logging for wavepack.
use wavepack::Transform;

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let signal = vec![1.0; 16];
    let t = Transform::from_names("WPT", "Coif06").unwrap();
    let hilb = t.forward(&signal).unwrap();
    t.reverse(&hilb).unwrap();
}
