//! End-to-end tests for the network file format and the binary
//!
//! The binary tests run the compiled program the way a user would and
//! assert on its exit status and console output.

use std::fs;
use std::path::PathBuf;
use std::process::Command;

use crossroad_sim::simulation::NetworkConfig;

fn write_network_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(name);
    fs::write(&path, contents).expect("failed to write network file");
    path
}

#[test]
fn test_network_config_load() {
    let path = write_network_file("crossroad_sim_load.txt", "12 34\n5\n");
    let config = NetworkConfig::load(&path).unwrap();
    assert_eq!(config.height, 12);
    assert_eq!(config.width, 34);
    assert_eq!(config.vehicle_count, 5);
}

#[test]
fn test_network_config_rejects_bad_tokens() {
    let path = write_network_file("crossroad_sim_bad.txt", "twelve 34\n5\n");
    assert!(NetworkConfig::load(&path).is_err());

    let path = write_network_file("crossroad_sim_short.txt", "12 34\n");
    assert!(NetworkConfig::load(&path).is_err());

    assert!(NetworkConfig::load(&std::env::temp_dir().join("crossroad_sim_missing.txt")).is_err());
}

/// Test that a malformed network file fails the process before any grid is printed
#[test]
fn test_malformed_network_file_fails_the_process() {
    let path = write_network_file("crossroad_sim_cli_bad.txt", "five by five\nlots\n");

    let output = Command::new("cargo")
        .args(["run", "--quiet", "--", path.to_str().unwrap()])
        .output()
        .expect("failed to execute simulation");

    assert!(
        !output.status.success(),
        "malformed input should fail the process"
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        !stdout.contains("Initial map:"),
        "no grid should be printed on bad input. stdout: {}",
        stdout
    );
}

/// Test that a valid network file runs to completion and drains the grid
#[test]
fn test_valid_network_file_runs_to_completion() {
    let path = write_network_file("crossroad_sim_cli_ok.txt", "6 7\n3\n");

    let output = Command::new("cargo")
        .args([
            "run",
            "--quiet",
            "--",
            path.to_str().unwrap(),
            "--seed",
            "3",
            "--tick-ms",
            "10",
        ])
        .output()
        .expect("failed to execute simulation");

    assert!(
        output.status.success(),
        "simulation failed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Initial map:"), "missing initial render");
    assert!(stdout.contains("Final map:"), "missing final render");

    let (initial, final_map) = stdout
        .split_once("Final map:")
        .expect("output should contain both renders");
    assert_eq!(
        initial.matches('*').count(),
        3,
        "initial render should show every placed vehicle"
    );
    assert!(
        !final_map.contains('*'),
        "final render should hold no vehicles. output: {}",
        final_map
    );
}
