/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const ENV_VARS: [&str; 4] = [
    "TRUSTIFY_DA_CARGO_PATH",
    "TRUSTIFY_DA_GO_PATH",
    "TRUSTIFY_DA_TOOL_TIMEOUT_SECONDS",
    "TRUSTIFY_DA_IGNORE_METHOD",
];

fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(relative)
}

/// The binary with no inherited settings
fn sbom_cmd() -> Command {
    let mut cmd = cargo_bin_cmd!("trustify-sbom");
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_cargo_project(dir: &Path) -> PathBuf {
    let manifest = dir.join("Cargo.toml");
    fs::copy(fixture_path("cargo/Cargo.toml"), &manifest).unwrap();
    manifest
}

/// Writes an executable shell script standing in for a native tool
#[cfg(unix)]
fn write_tool_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn parse_bom(output: &[u8]) -> serde_json::Value {
    serde_json::from_slice(output).expect("stdout should be a CycloneDX JSON document")
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        sbom_cmd().arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        sbom_cmd()
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        sbom_cmd().arg("--invalid-option").assert().code(2);
    }

    /// Exit code 2: Missing subcommand
    #[test]
    fn test_exit_code_missing_subcommand() {
        sbom_cmd().assert().code(2);
    }

    /// Exit code 2: Invalid ignore method
    #[test]
    fn test_exit_code_invalid_ignore_method() {
        sbom_cmd()
            .args(["stack", "Cargo.toml", "--ignore-method", "strict"])
            .assert()
            .code(2);
    }

    /// Exit code 2: Zero timeout
    #[test]
    fn test_exit_code_zero_timeout() {
        sbom_cmd()
            .args(["stack", "Cargo.toml", "--timeout", "0"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - non-existent manifest
    #[test]
    fn test_exit_code_nonexistent_manifest() {
        sbom_cmd()
            .args(["stack", "/nonexistent/path/Cargo.toml"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Manifest file not found"));
    }

    /// Exit code 3: Application error - unsupported manifest
    #[test]
    fn test_exit_code_unsupported_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = temp_dir.path().join("package.json");
        fs::write(&manifest, "{}").unwrap();

        sbom_cmd()
            .args(["component", manifest.to_str().unwrap()])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Unsupported manifest"));
    }

    /// Exit code 3: Application error - manifest without identity
    #[test]
    fn test_exit_code_manifest_without_identity() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = temp_dir.path().join("Cargo.toml");
        fs::write(&manifest, "[dependencies]\nserde = \"1.0\"\n").unwrap();

        sbom_cmd()
            .args(["stack", manifest.to_str().unwrap()])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("no [package] or [workspace]"));
    }
}

mod degraded_output_tests {
    use super::*;

    #[test]
    fn test_missing_tool_produces_root_only_sbom() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = write_cargo_project(temp_dir.path());

        let assert = sbom_cmd()
            .args(["stack", manifest.to_str().unwrap()])
            .args(["--cargo-path", "/nonexistent/bin/cargo"])
            .assert()
            .code(0)
            .stderr(predicate::str::contains("Warning"));

        let bom = parse_bom(&assert.get_output().stdout);
        assert_eq!(bom["bomFormat"], "CycloneDX");
        assert_eq!(bom["metadata"]["component"]["purl"], "pkg:cargo/app@0.1.0");
        assert!(bom["components"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_tool_path_from_environment() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("go.mod"),
            "module example.com/app\n\ngo 1.22\n",
        )
        .unwrap();

        sbom_cmd()
            .env("TRUSTIFY_DA_GO_PATH", "/nonexistent/bin/go")
            .args(["component", temp_dir.path().to_str().unwrap(), "-v"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("pkg:golang/example.com/app@v0.0.0"))
            .stderr(predicate::str::contains("/nonexistent/bin/go"));
    }

    #[test]
    fn test_relative_workspace_path_uses_directory_name() {
        let temp_dir = TempDir::new().unwrap();
        let workspace = temp_dir.path().join("my-workspace");
        fs::create_dir(&workspace).unwrap();
        fs::copy(
            fixture_path("cargo/my-workspace/Cargo.toml"),
            workspace.join("Cargo.toml"),
        )
        .unwrap();

        for manifest_arg in [".", "Cargo.toml"] {
            let assert = sbom_cmd()
                .current_dir(&workspace)
                .args(["stack", manifest_arg])
                .args(["--cargo-path", "/nonexistent/bin/cargo"])
                .assert()
                .code(0);

            let bom = parse_bom(&assert.get_output().stdout);
            assert_eq!(
                bom["metadata"]["component"]["purl"], "pkg:cargo/my-workspace@2.0.0-beta.1",
                "manifest argument {}",
                manifest_arg
            );
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_slow_tool_is_killed_after_timeout() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = write_cargo_project(temp_dir.path());
        let slow = write_tool_script(temp_dir.path(), "slow-cargo", "exec sleep 30");

        let started = std::time::Instant::now();
        let assert = sbom_cmd()
            .args(["stack", manifest.to_str().unwrap()])
            .args(["--cargo-path", slow.to_str().unwrap(), "--timeout", "1"])
            .assert()
            .code(0)
            .stderr(predicate::str::contains("timed out"));

        assert!(started.elapsed() < std::time::Duration::from_secs(20));
        let bom = parse_bom(&assert.get_output().stdout);
        assert!(bom["components"].as_array().unwrap().is_empty());
    }
}

#[cfg(unix)]
mod scripted_tool_tests {
    use super::*;

    fn fake_cargo(dir: &Path) -> PathBuf {
        let metadata = fixture_path("cargo/metadata.json");
        write_tool_script(dir, "fake-cargo", &format!("cat '{}'", metadata.display()))
    }

    fn fake_go(dir: &Path) -> PathBuf {
        let graph = fixture_path("go/mod_graph.txt");
        let list = fixture_path("go/list_all.txt");
        write_tool_script(
            dir,
            "fake-go",
            &format!(
                "if [ \"$1\" = mod ]; then cat '{}'; else cat '{}'; fi",
                graph.display(),
                list.display()
            ),
        )
    }

    #[test]
    fn test_cargo_stack_to_stdout() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = write_cargo_project(temp_dir.path());
        let cargo = fake_cargo(temp_dir.path());

        let assert = sbom_cmd()
            .args(["stack", manifest.to_str().unwrap(), "-q"])
            .args(["--cargo-path", cargo.to_str().unwrap()])
            .assert()
            .code(0);

        let bom = parse_bom(&assert.get_output().stdout);
        let purls: Vec<&str> = bom["components"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["purl"].as_str().unwrap())
            .collect();
        assert_eq!(
            purls,
            vec![
                "pkg:cargo/serde@1.0.219",
                "pkg:cargo/serde_derive@1.0.219",
                "pkg:cargo/log@0.4.27",
            ]
        );
        assert_eq!(
            bom["metadata"]["properties"][1]["value"],
            serde_json::json!("stack")
        );
    }

    #[test]
    fn test_cargo_sensitive_from_environment() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = write_cargo_project(temp_dir.path());
        let cargo = fake_cargo(temp_dir.path());

        sbom_cmd()
            .env("TRUSTIFY_DA_CARGO_PATH", cargo.to_str().unwrap())
            .env("TRUSTIFY_DA_IGNORE_METHOD", "sensitive")
            .args(["stack", manifest.to_str().unwrap()])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("pkg:cargo/cfg-if@1.0.1"))
            .stdout(predicate::str::contains("pkg:cargo/anyhow").not());
    }

    #[test]
    fn test_go_component_to_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::copy(fixture_path("go/go.mod"), temp_dir.path().join("go.mod")).unwrap();
        let go = fake_go(temp_dir.path());
        let output = temp_dir.path().join("sbom.json");

        sbom_cmd()
            .args(["component", temp_dir.path().to_str().unwrap()])
            .args(["--go-path", go.to_str().unwrap()])
            .args(["-o", output.to_str().unwrap()])
            .assert()
            .code(0)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Output complete"));

        let bom = parse_bom(&fs::read(&output).unwrap());
        let root = &bom["dependencies"][0];
        assert_eq!(root["ref"], "pkg:golang/github.com/acme/service@v0.0.0");
        assert_eq!(
            root["dependsOn"],
            serde_json::json!([
                "pkg:golang/github.com/google/uuid@v1.6.0",
                "pkg:golang/golang.org/x/net@v0.25.0",
                "pkg:golang/golang.org/x/text@v0.14.0",
            ])
        );
    }

    #[test]
    fn test_output_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let manifest = write_cargo_project(temp_dir.path());
        let cargo = fake_cargo(temp_dir.path());

        sbom_cmd()
            .args(["stack", manifest.to_str().unwrap()])
            .args(["--cargo-path", cargo.to_str().unwrap()])
            .args(["-o", "/nonexistent/dir/sbom.json"])
            .assert()
            .code(3);
    }
}
