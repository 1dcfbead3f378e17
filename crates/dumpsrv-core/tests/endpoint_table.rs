//! Endpoint table contract tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use dumpsrv_core::ENDPOINTS;

#[test]
fn four_fixed_endpoints() {
    let got: Vec<(&str, u16, &str)> = ENDPOINTS.iter().map(|e| (e.path, e.status, e.label)).collect();
    assert_eq!(
        got,
        vec![
            ("/test200", 200, "test200"),
            ("/test400", 400, "test400"),
            ("/test401", 401, "test401"),
            ("/test404", 404, "test404"),
        ]
    );
}

#[test]
fn labels_are_not_paths() {
    for e in ENDPOINTS.iter() {
        assert!(e.path.starts_with('/'));
        assert!(!e.label.contains('/'));
        assert_eq!(&e.path[1..], e.label);
    }
}
