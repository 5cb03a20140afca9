//! Basic smoke test to verify the public API surface is exported.

#[test]
fn crate_compiles() {
    // If this test runs, the crate skeleton is valid.
    let _ = std::any::type_name::<lk::License>();
    let _ = std::any::type_name::<lk::LicenseConfig>();
    let _ = std::any::type_name::<lk::LkError>();
    assert_eq!(lk::CURVE_NAME, "P-256");
}
