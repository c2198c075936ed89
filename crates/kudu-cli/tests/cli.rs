//! Integration tests for the kudu binary.

use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name)
}

fn kudu() -> Command {
    Command::cargo_bin("kudu").unwrap()
}

#[test]
fn spot_prints_table() {
    kudu()
        .arg("spot")
        .arg(demo("spot.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("roundedAip"))
        .stdout(predicate::str::contains("roundedClean"));
}

#[test]
fn asset_swap_prints_json() {
    let output = kudu()
        .args(["--format", "json", "asset-swap"])
        .arg(demo("asset_swap.toml"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let spread = json["assetSwapSpread"].as_f64().unwrap();
    assert!(spread.is_finite());
    assert!(json["denominatorCFs"].as_f64().unwrap() < 0.0);
}

#[test]
fn forward_price_prints_adjusted_price() {
    kudu()
        .args(["forward-price"])
        .arg(demo("forward_price.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("AdjustedForwardPrice"));
}

#[test]
fn wednesday_settlement_fails() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[bond]
maturity = "2030-01-31"
coupon_rate = 0.08
coupon_dates = [[1, 31], [7, 31]]

[trade]
settle = "2025-06-04"
ytm = 0.085

[future]
forward_date = "2025-08-07"
repo = 0.07
"#
    )
    .unwrap();

    kudu()
        .arg("forward-price")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Tuesday or Thursday"));
}

#[test]
fn missing_file_fails() {
    kudu()
        .args(["spot", "no-such-file.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}
