// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

macro_rules! cargo_run {
    ($($args:expr),*) => {{
        let mut cmd = Command::cargo_bin("lower-body-shade").unwrap();
        $(cmd.arg($args);)*
        cmd.assert()
    }};
}

#[test]
fn shade_dataset() {
    let root = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    common::write_unit(&root, "000001_0");
    common::write_orphan(&root, "000002_0");

    cargo_run!("shade", "--input", root.path(), "--output", out.path())
        .success()
        .stdout(predicate::str::contains("1 image shaded, 1 failure"))
        .stdout(predicate::str::contains("Results saved to"))
        .stderr(predicate::str::contains("000002_0.png"));

    let shaded = image::open(out.path().join("shaded_000001_0.png"))
        .unwrap()
        .into_rgb8();
    assert_eq!(*shaded.get_pixel(4, 4), common::expected(4, 4));
    assert!(!out.path().join("shaded_000002_0.png").exists());
}

#[test]
fn shade_quiet() {
    let root = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    common::write_unit(&root, "a");

    cargo_run!("shade", "-i", root.path(), "-o", out.path(), "--verbose", "false")
        .success()
        .stdout(predicate::str::contains("image 1/1").not());

    assert!(out.path().join("shaded_a.png").exists());
}

#[test]
fn shade_missing_dataset() {
    let out = TempDir::new().unwrap();

    cargo_run!("shade", "--input", out.path().join("nope"), "--output", out.path())
        .failure()
        .stderr(predicate::str::contains("Failed to list dataset"));
}

#[test]
fn shade_all_failures() {
    let root = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    common::write_orphan(&root, "x");

    cargo_run!("shade", "-i", root.path(), "-o", out.path())
        .failure()
        .stderr(predicate::str::contains("All 1 image failed"));
}

#[test]
fn shade_rejects_bad_color() {
    cargo_run!("shade", "--color", "1,2")
        .failure()
        .stderr(predicate::str::contains("three comma-separated channels"));
}
