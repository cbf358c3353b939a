/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Tests for input validation and parsing functions

use carplant_core::input::*;

#[test]
fn test_port_in_range() {
    let port = port_in_range("5432").unwrap();
    assert_eq!(port, 5432);

    let port = port_in_range("65535").unwrap();
    assert_eq!(port, 65535);

    let port = port_in_range("65536").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("0").unwrap_err();
    assert_eq!(port, "port not in range 1-65535");

    let port = port_in_range("not-a-port").unwrap_err();
    assert_eq!(port, "`not-a-port` is not a port number");
}

#[test]
fn test_vec_to_hex() {
    assert_eq!(vec_to_hex(&[]), "");
    assert_eq!(vec_to_hex(&[0x00]), "00");
    assert_eq!(vec_to_hex(&[0x00, 0xab, 0xff]), "00abff");
    assert_eq!(vec_to_hex(&[0x12, 0x34]), "1234");
}

#[test]
fn test_load_secret() {
    let path = std::env::temp_dir().join(format!("carplant-secret-{}", std::process::id()));
    std::fs::write(&path, "s3cret\n").unwrap();

    let secret = load_secret(path.to_str().unwrap()).unwrap();
    assert_eq!(secret, "s3cret");

    std::fs::remove_file(&path).unwrap();

    let missing = load_secret("/nonexistent/secret");
    assert!(missing.is_err());
}
