// Drives the exported surface end to end: construct the module the way a
// host binding would, then exercise every operation on it.

use bench::Bench;

#[test]
fn module_reports_fixed_name() {
    let module = Bench::new();
    assert_eq!(module.name(), "Bench");
    // Stable across repeated calls.
    assert_eq!(module.name(), "Bench");
}

#[test]
fn multiply_matches_known_products() {
    let module = Bench::new();
    assert_eq!(module.multiply(2.0, 3.0), 6.0);
    assert_eq!(module.multiply(-1.5, 4.0), -6.0);
    assert_eq!(module.multiply(3.0, 2.0), module.multiply(2.0, 3.0));
}

#[test]
fn cpu_metrics_report_a_plausible_reading() {
    let module = Bench::new();
    let metrics = module.get_cpu().expect("cpu sample");
    assert!(
        (0.0..=100.0).contains(&metrics.cpu),
        "cpu = {}",
        metrics.cpu
    );
}
