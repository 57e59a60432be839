//! Integration tests driving the built `gxp` binary.

use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;

fn gxp_binary() -> PathBuf {
	let mut path = std::env::current_exe().unwrap();
	path.pop();
	path.pop();
	path.push("gxp");
	path
}

fn parse_stdout(output: &std::process::Output) -> Value {
	let stdout = String::from_utf8_lossy(&output.stdout);
	serde_json::from_str(stdout.trim()).unwrap_or_else(|_| panic!("expected JSON, got: {stdout}"))
}

#[test]
fn launch_without_install_dir_names_the_variable() {
	let output = Command::new(gxp_binary())
		.env_remove("SOCETGXPEXE")
		.args(["-f", "json", "launch"])
		.output()
		.expect("failed to execute gxp");

	assert!(!output.status.success());
	let json = parse_stdout(&output);
	assert_eq!(json["ok"], false);
	let message = json["error"]["message"].as_str().unwrap_or_default();
	assert!(
		message.contains("SOCETGXPEXE"),
		"expected the variable name in: {message}"
	);

	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("SOCETGXPEXE"));
}

#[test]
fn launch_against_a_missing_executable_reports_an_os_code() {
	let dir = tempfile::tempdir().unwrap();
	let output = Command::new(gxp_binary())
		.args(["-f", "json", "launch", "--install-dir"])
		.arg(dir.path())
		.output()
		.expect("failed to execute gxp");

	assert!(!output.status.success());
	let json = parse_stdout(&output);
	assert_eq!(json["ok"], false);
	assert!(json["error"]["os_code"].is_i64() || json["error"]["os_code"].is_u64());
}

#[cfg(unix)]
#[test]
fn launch_reports_pid_and_exit_code() {
	use std::os::unix::fs::PermissionsExt;

	let dir = tempfile::tempdir().unwrap();
	let exe = dir.path().join("SocetGxp");
	std::fs::write(&exe, "#!/bin/sh\nexit 0\n").unwrap();
	std::fs::set_permissions(&exe, std::fs::Permissions::from_mode(0o755)).unwrap();

	let output = Command::new(gxp_binary())
		.env("SOCETGXPEXE", dir.path())
		.args(["-f", "json", "launch", "--wait"])
		.output()
		.expect("failed to execute gxp");

	assert!(output.status.success());
	let json = parse_stdout(&output);
	assert_eq!(json["ok"], true);
	assert!(json["data"]["pid"].as_u64().unwrap() > 0);
	assert_eq!(json["data"]["exit_code"], 0);
}

#[test]
fn resolve_joins_relative_paths_onto_the_working_directory() {
	let dir = tempfile::tempdir().unwrap();
	let output = Command::new(gxp_binary())
		.current_dir(dir.path())
		.args(["-f", "json", "resolve", "logs/run.txt"])
		.output()
		.expect("failed to execute gxp");

	assert!(output.status.success());
	let json = parse_stdout(&output);
	assert_eq!(json["ok"], true);
	let path = json["data"]["path"].as_str().unwrap();
	assert!(path.ends_with("logs/run.txt") || path.ends_with(r"logs\run.txt"));
	assert_ne!(path, "logs/run.txt");
}

#[test]
fn resolve_leaves_drive_prefixed_paths_unchanged() {
	let output = Command::new(gxp_binary())
		.args(["-f", "json", "resolve", r"C:\SOCET_GXP\bin"])
		.output()
		.expect("failed to execute gxp");

	assert!(output.status.success());
	let json = parse_stdout(&output);
	assert_eq!(json["data"]["path"], r"C:\SOCET_GXP\bin");
}
