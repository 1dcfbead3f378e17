#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::time::Duration;

use dumpsrv_server::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
server:
  listen: "0.0.0.0:8080"
  read_timout_ms: 1000 # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.kind().as_str(), "CONFIG");
}

#[test]
fn empty_document_uses_defaults() {
    let cfg = config::load_from_str("{}").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.server.listen, "0.0.0.0:8080");
    assert_eq!(cfg.server.read_timeout(), Duration::from_secs(15));
    assert_eq!(cfg.server.write_timeout(), Duration::from_secs(15));
}

#[test]
fn ok_full_config() {
    let ok = r#"
version: 1
server:
  listen: "127.0.0.1:9090"
  read_timeout_ms: 5000
  write_timeout_ms: 7000
  max_body_bytes: 1024
log_level: "info,dumpsrv_server=debug"
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 9090);
    assert_eq!(cfg.server.write_timeout(), Duration::from_millis(7000));
    assert_eq!(cfg.server.max_body_bytes, 1024);
    assert_eq!(cfg.log_level, "info,dumpsrv_server=debug");
}

#[test]
fn bad_listen_rejected() {
    let bad = r#"
server:
  listen: "not-an-addr"
"#;
    let err = config::load_from_str(bad).expect_err("must fail");
    assert!(err.to_string().contains("server.listen"));
}

#[test]
fn unsupported_version_rejected() {
    let err = config::load_from_str("version: 2").expect_err("must fail");
    assert!(!err.to_string().is_empty());
    assert!(err.is_fatal());
}

#[test]
fn missing_file_is_config_error() {
    let err = config::load_from_file("does/not/exist.yaml").expect_err("must fail");
    assert_eq!(err.kind().as_str(), "CONFIG");
}

#[test]
fn no_path_means_defaults() {
    let cfg = config::load_or_default(None).expect("defaults");
    assert_eq!(cfg.server.listen_addr().unwrap().port(), 8080);
}
