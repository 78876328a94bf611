use super::*;

#[test]
fn version_label_prefixes_package_version() {
    let label = version_label();
    assert_eq!(label, format!("v{}", env!("CARGO_PKG_VERSION")));
    assert!(label.starts_with("v0."));
}
