//! Integration tests for `modes`, `init` and `config`.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn help_lists_commands() {
    svg_to_xaml!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("modes"));
}

#[test]
fn modes_lists_labels() {
    svg_to_xaml!()
        .arg("modes")
        .assert()
        .success()
        .stdout(predicate::str::contains("WPF Path (Single Color)"))
        .stdout(predicate::str::contains(
            "WPF/Avalonia Drawing Brush (Multi Color)",
        ))
        .stdout(predicate::str::contains(
            "Avalonia Stream Geometry (Single Color)",
        ));
}

#[test]
fn init_creates_default_config_file() {
    let fixture = TestFixture::new();

    svg_to_xaml!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = std::fs::read_to_string(fixture.path().join(".svg-to-xaml.toml")).unwrap();
    assert!(content.contains("[convert]"));
    assert!(content.contains("default_color"));
}

#[test]
fn init_fails_if_config_exists() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    svg_to_xaml!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn init_error_honours_color_choice() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    svg_to_xaml!()
        .current_dir(fixture.path())
        .args(["--color", "always", "init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\x1b[31m✖ Config:"));

    svg_to_xaml!()
        .current_dir(fixture.path())
        .args(["--color", "never", "init"])
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("✖ Config:"))
        .stderr(predicate::str::contains("\x1b[").not());
}

#[test]
fn init_then_validate() {
    let fixture = TestFixture::new();

    svg_to_xaml!()
        .current_dir(fixture.path())
        .arg("init")
        .assert()
        .success();

    svg_to_xaml!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn config_validate_rejects_bad_color() {
    let fixture = TestFixture::new();
    fixture.create_config("[convert]\ndefault_color = \"white\"\n");

    svg_to_xaml!()
        .current_dir(fixture.path())
        .args(["config", "validate"])
        .assert()
        .code(2);
}

#[test]
fn config_show_json() {
    let fixture = TestFixture::new();
    fixture.create_config("[convert]\nmode = \"drawing-brush\"\n");

    let output = svg_to_xaml!()
        .current_dir(fixture.path())
        .args(["config", "show", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["convert"]["mode"], "drawing-brush");
    assert_eq!(json["parser"]["allow_dtd"], true);
}

#[test]
fn config_show_no_config_uses_defaults() {
    let fixture = TestFixture::new();
    fixture.create_config("[convert]\nmode = \"drawing-brush\"\n");

    svg_to_xaml!()
        .current_dir(fixture.path())
        .args(["--no-config", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "# mode: path (WPF Path (Single Color))",
        ));
}
