//! End-to-end tests: library use cases and the sealant-calculator binary

use httpmock::prelude::*;
use sealant_app::app::{create_share_link, run_estimate, EstimateRequest};
use sealant_app::config::Config;
use sealant_domain::service::{cartridges_needed, estimate, EstimateOptions};
use sealant_domain::{CartridgeOption, JointProfile, JointSpec};
use sealant_infra::TinyUrlShortener;
use sealant_types::Error;
use std::path::Path;
use std::process::{Command, Output};

const EPS: f64 = 1e-9;

fn run_cli(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_sealant-calculator"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run sealant-calculator")
}

fn request(profile: &str, width: f64, depth: f64, length: f64) -> EstimateRequest {
    EstimateRequest {
        profile: Some(profile.to_string()),
        width_mm: Some(width),
        depth_mm: Some(depth),
        length_m: Some(length),
        no_wastage: true,
        ..EstimateRequest::default()
    }
}

// ==========================================
// Worked examples
// ==========================================

#[test]
fn test_square_12x6_is_72ml() {
    let report = run_estimate(&Config::default(), &request("square", 12.0, 6.0, 1.0)).unwrap();
    assert!((report.estimate.result().volume_ml - 72.0).abs() < EPS);
    assert_eq!(report.estimate.result().cartridges_needed, 1);
}

#[test]
fn test_v_12x6_is_36ml() {
    let report = run_estimate(&Config::default(), &request("v", 12.0, 6.0, 1.0)).unwrap();
    assert!((report.estimate.result().volume_ml - 36.0).abs() < EPS);
}

#[test]
fn test_310ml_needs_two_300ml_cartridges() {
    let cartridge = CartridgeOption::new("cartridge-300", "Cartridge (300ml)", 300.0).unwrap();
    assert_eq!(cartridges_needed(310.0, &cartridge).unwrap(), 2);
    assert_eq!(cartridges_needed(0.0, &cartridge).unwrap(), 1);
}

// ==========================================
// Properties over a grid of joints
// ==========================================

#[test]
fn test_rectangular_formula_and_v_half() {
    let cartridge = CartridgeOption::new("sausage-600", "Sausage (600ml)", 600.0).unwrap();
    let options = EstimateOptions::exact();

    for &(w, d, l) in &[(3.0, 3.0, 0.5), (12.0, 6.0, 1.0), (20.0, 10.0, 7.25), (25.0, 30.0, 40.0)] {
        let expected = w * d * (l * 1000.0) / 1000.0;
        for profile in [JointProfile::Square, JointProfile::Deep, JointProfile::Wide] {
            let joint = JointSpec::new(w, d, l, profile).unwrap();
            let est = estimate(&joint, &cartridge, &options).unwrap();
            assert!((est.base_volume_ml - expected).abs() < 1e-6);
            assert_eq!(
                est.cartridges_needed,
                ((expected / 600.0).ceil() as u32).max(1)
            );
        }

        let v = JointSpec::new(w, d, l, JointProfile::V).unwrap();
        let est = estimate(&v, &cartridge, &options).unwrap();
        assert!((est.base_volume_ml * 2.0 - expected).abs() < 1e-6);
    }
}

#[test]
fn test_non_positive_dimensions_rejected() {
    for (w, d, l) in [(0.0, 6.0, 1.0), (12.0, 0.0, 1.0), (12.0, 6.0, 0.0), (-1.0, 6.0, 1.0)] {
        let err = run_estimate(&Config::default(), &request("square", w, d, l)).unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }), "{:?}", err);
    }
}

// ==========================================
// Share link through a mocked shortener
// ==========================================

#[test]
fn test_share_link_with_mock_shortener() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/create");
        then.status(200).body("https://sho.rt/abc");
    });

    let shortener = TinyUrlShortener::with_endpoint(&server.url("/create")).unwrap();
    let link = create_share_link(
        &Config::default(),
        &request("wide", 20.0, 10.0, 3.0),
        Some("https://calc.example.com/"),
        Some(&shortener),
    )
    .unwrap();

    mock.assert();
    assert_eq!(link.short_url.as_deref(), Some("https://sho.rt/abc"));
    assert!(link.long_url.starts_with("https://calc.example.com/?profile=wide"));
}

// ==========================================
// Binary
// ==========================================

#[test]
fn test_cli_calc_json() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    let output = run_cli(
        &config,
        &["--format", "json", "calc", "-w", "12", "-d", "6", "-l", "1", "--no-wastage"],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let total = json["estimate"]["total_volume_ml"].as_f64().unwrap();
    assert!((total - 72.0).abs() < EPS);
    assert_eq!(json["estimate"]["cartridges_needed"], 1);
    assert_eq!(json["estimate"]["joint"]["profile"], "square");
}

#[test]
fn test_cli_invalid_dimension_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    let output = run_cli(&config, &["calc", "-w", "0", "-d", "6", "-l", "1"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Invalid width_mm"), "{}", stderr);
}

#[test]
fn test_cli_config_roundtrip_changes_default_cartridge() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    let output = run_cli(&config, &["config", "--set-cartridge", "600", "--set-wastage", "false"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let output = run_cli(&config, &["-f", "json", "calc", "-w", "10", "-d", "10", "-l", "7"]);
    assert!(output.status.success());

    // 700 mL in 600 mL sausages, no wastage
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["estimate"]["cartridge"]["key"], "sausage-600");
    assert_eq!(json["estimate"]["cartridges_needed"], 2);
}

#[test]
fn test_cli_config_show_names_the_active_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("custom").join("config.json");

    let output = run_cli(&config, &["config", "--show"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = format!("Config file:       {}", config.display());
    assert!(stdout.contains(&expected), "{}", stdout);
}

#[test]
fn test_cli_calc_export() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    let export = dir.path().join("summary.xlsx");

    let output = run_cli(
        &config,
        &["calc", "-p", "v", "-l", "2", "-o", export.to_str().unwrap()],
    );
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(export.exists());
}
