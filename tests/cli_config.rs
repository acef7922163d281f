//! Configuration discovery, warnings, and validation through the binary.

#![cfg(unix)]

mod common;

use common::*;

#[test]
fn project_config_is_picked_up() {
    let env = TestEnv::bare();
    env.write_repo_file("octoship.toml", "[workspace]\nprefix = \"octopress_deployment\"\n");

    let result = env.run(&["version"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert_output_contains!(result, "octoship.toml");
}

#[test]
fn unknown_key_warns_with_suggestion() {
    let env = TestEnv::bare();
    env.write_repo_file("octoship.toml", "[build]\noutput_dri = \"public\"\n");

    let result = env.run(&["version"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert!(result.stderr.contains("Unknown config key 'output_dri'"));
    assert!(result.stderr.contains("Did you mean 'output_dir'?"));
}

#[test]
fn warnings_stay_off_stdout_in_json_mode() {
    let env = TestEnv::bare();
    env.write_repo_file("octoship.toml", "[build]\noutput_dri = \"public\"\n");

    let result = env.run(&["version", "--json"]);
    assert!(result.is_success());
    assert_eq!(result.json_lines().len(), 1);
}

#[test]
fn escaping_output_dir_is_rejected() {
    let env = TestEnv::bare();
    env.write_repo_file("octoship.toml", "[build]\noutput_dir = \"../outside\"\n");

    let result = env.run(&["version"]);
    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "invalid configuration");
    assert_output_contains!(result, "build.output_dir '../outside'");
}

#[test]
fn workspace_prefix_from_env_cannot_leave_temp_dir() {
    let env = TestEnv::bare();

    let result = env.run_with_env(&["version"], &[("OCTOSHIP_WORKSPACE_PREFIX", "../escape")]);
    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "invalid configuration");
    assert_output_contains!(result, "workspace.prefix '../escape'");
}

#[test]
fn malformed_toml_names_the_file() {
    let env = TestEnv::bare();
    env.write_repo_file("octoship.toml", "[build\n");

    let result = env.run(&["version"]);
    assert_eq!(result.exit_code, 1);
    assert_output_contains!(result, "octoship.toml");
}

#[test]
fn explicit_config_path_wins() {
    let env = TestEnv::bare();
    env.write_repo_file("octoship.toml", "[build]\noutput_dir = \"../outside\"\n");
    env.write_repo_file("ship/alt.toml", "[sync]\nprogram = \"s3cmd\"\n");

    let result = env.run(&["version", "--config", "ship/alt.toml"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert_output_contains!(result, "Config: ship/alt.toml");
}

#[test]
fn missing_explicit_config_is_an_error() {
    let env = TestEnv::bare();

    let result = env.run(&["version", "--config", "nowhere.toml"]);
    assert_eq!(result.exit_code, 1);
}

#[test]
fn user_config_applies_without_project_file() {
    let env = TestEnv::bare();
    let user_dir = env.home_dir.path().join(".config/octoship");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(user_dir.join("config.toml"), "[tools]\ntar = \"gtar-from-home\"\n").unwrap();

    let result = env.run(&["version"]);
    assert!(result.is_success(), "{}", result.combined_output());
    assert_output_contains!(result, "gtar-from-home");
}
