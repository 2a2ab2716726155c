extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

#[test]
fn renders_a_binary_ppm() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("mandel.ppm");

    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["-o", out.to_str().unwrap(), "-s", "80x60", "-i", "50"])
        .assert()
        .success();

    let bytes = fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"P6"));
    // Payload is exactly three bytes per pixel; whatever is left over
    // is the ASCII header, which should be short.
    assert!(bytes.len() > 80 * 60 * 3);
    let header_len = bytes.len() - 80 * 60 * 3;
    assert!(header_len < 32);
}

#[test]
fn gray_policy_renders_too() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("gray.ppm");

    Command::cargo_bin("mandel")
        .unwrap()
        .args(&[
            "-o",
            out.to_str().unwrap(),
            "-s",
            "40x30",
            "-i",
            "50",
            "-c",
            "gray",
        ])
        .assert()
        .success();

    assert!(out.exists());
}

#[test]
fn rejects_a_malformed_size() {
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&["-o", "unused.ppm", "-s", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not parse output image size"));
}

#[test]
fn rejects_swapped_plane_corners() {
    Command::cargo_bin("mandel")
        .unwrap()
        .args(&[
            "-o",
            "unused.ppm",
            "-l",
            "1.2,1.2",
            "-r",
            "-2.0,-1.2",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
