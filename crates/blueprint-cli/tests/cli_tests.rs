//! Integration tests for the `blueprint` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const APP_MODULE: &str = "\
import { NgModule } from '@angular/core';

import { AppComponent } from './app.component';

@NgModule({
  declarations: [AppComponent],
  providers: [],
  bootstrap: [AppComponent]
})
export class AppModule { }
";

/// A workspace with `blueprint.toml` and `src/app/app.module.ts`.
fn workspace() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("blueprint.toml"), "").unwrap();
    fs::create_dir_all(temp.path().join("src/app")).unwrap();
    fs::write(temp.path().join("src/app/app.module.ts"), APP_MODULE).unwrap();
    temp
}

fn blueprint(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("blueprint");
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".user-config"))
        .env_remove("RUST_LOG")
        .env_remove("BLUEPRINT_DEFAULTS__SERVICE__SPEC")
        .env_remove("BLUEPRINT_DEFAULTS__SERVICE__FLAT")
        .arg("--no-color");
    cmd
}

#[test]
fn test_help_flag() {
    let temp = TempDir::new().unwrap();
    blueprint(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_generate_service_with_module() {
    let temp = workspace();

    blueprint(temp.path())
        .args(["generate", "service", "user-profile", "--module", "app.module"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "create src/app/user-profile/user-profile.service.ts",
        ))
        .stdout(predicate::str::contains(
            "create src/app/user-profile/user-profile.service.spec.ts",
        ))
        .stdout(predicate::str::contains("update src/app/app.module.ts"));

    let service =
        fs::read_to_string(temp.path().join("src/app/user-profile/user-profile.service.ts"))
            .unwrap();
    assert!(service.contains("export class UserProfileService"));

    let module = fs::read_to_string(temp.path().join("src/app/app.module.ts")).unwrap();
    assert!(module.contains(
        "import { UserProfileService } from './user-profile/user-profile.service';"
    ));
    assert!(module.contains("providers: [UserProfileService],"));
}

#[test]
fn test_generate_without_module_warns() {
    let temp = workspace();

    blueprint(temp.path())
        .args(["g", "s", "foo"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "WARNING Service is generated but not provided",
        ));

    let module = fs::read_to_string(temp.path().join("src/app/app.module.ts")).unwrap();
    assert_eq!(module, APP_MODULE);
}

#[test]
fn test_missing_project_file_is_configuration_error() {
    let temp = TempDir::new().unwrap();

    blueprint(temp.path())
        .args(["g", "s", "foo"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No blueprint.toml found"))
        .stderr(predicate::str::contains("blueprint init"));
}

#[test]
fn test_missing_host_module_writes_nothing() {
    let temp = workspace();

    blueprint(temp.path())
        .args(["g", "s", "foo", "--module", "missing.module"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Module specified does not exist"));

    assert!(!temp.path().join("src/app/foo").exists());
}

#[test]
fn test_spec_false_skips_spec_file() {
    let temp = workspace();

    blueprint(temp.path())
        .args(["g", "s", "foo", "--spec=false"])
        .assert()
        .success();

    assert!(temp.path().join("src/app/foo/foo.service.ts").exists());
    assert!(!temp.path().join("src/app/foo/foo.service.spec.ts").exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = workspace();

    blueprint(temp.path())
        .args(["g", "s", "foo", "--flat", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("create src/app/foo.service.ts"))
        .stdout(predicate::str::contains("no changes were made"));

    assert!(!temp.path().join("src/app/foo.service.ts").exists());
}

#[test]
fn test_json_output() {
    let temp = workspace();

    let assert = blueprint(temp.path())
        .args(["--output-format", "json", "g", "s", "foo", "--flat"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["created"][0], "src/app/foo.service.ts");
    assert_eq!(report["dry_run"], false);
}

#[test]
fn test_env_overrides_project_defaults() {
    let temp = workspace();

    blueprint(temp.path())
        .env("BLUEPRINT_DEFAULTS__SERVICE__SPEC", "false")
        .args(["g", "s", "foo"])
        .assert()
        .success();

    assert!(temp.path().join("src/app/foo/foo.service.ts").exists());
    assert!(!temp.path().join("src/app/foo/foo.service.spec.ts").exists());
}

#[test]
fn test_init_creates_project_file() {
    let temp = TempDir::new().unwrap();

    blueprint(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project file created"));

    let contents = fs::read_to_string(temp.path().join("blueprint.toml")).unwrap();
    assert!(contents.contains("root = \"src\""));
}

#[test]
fn test_init_does_not_overwrite_without_force() {
    let temp = workspace();

    blueprint(temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    let contents = fs::read_to_string(temp.path().join("blueprint.toml")).unwrap();
    assert!(contents.is_empty());
}

#[test]
fn test_config_get() {
    let temp = workspace();

    blueprint(temp.path())
        .args(["config", "get", "defaults.service.spec"])
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));

    blueprint(temp.path())
        .args(["config", "get", "no.such.key"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown config key"));
}
