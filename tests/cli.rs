use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

const RECTANGLE_SCRIPT: &str = r#"[
    {"action": "tool", "tool": "rectangle"},
    {"action": "color", "color": "red"},
    {"action": "press", "x": 10, "y": 10},
    {"action": "move", "x": 60, "y": 40},
    {"action": "release", "x": 100, "y": 80},
    {"action": "tool", "tool": "pencil"},
    {"action": "press", "x": 20, "y": 150},
    {"action": "move", "x": 150, "y": 150},
    {"action": "leave"}
]"#;

/// Runs the binary with an isolated config home.
fn whiteboard_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("whiteboard").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn whiteboard_help_prints_usage() {
    let temp = TempDir::new().unwrap();
    whiteboard_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Headless whiteboard: replay drawing gestures and export PNG",
        ));
}

#[test]
fn no_arguments_prints_quick_usage() {
    let temp = TempDir::new().unwrap();
    whiteboard_cmd(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("whiteboard --script"));
}

#[test]
fn script_exports_to_output_path() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("gestures.json");
    std::fs::write(&script, RECTANGLE_SCRIPT).unwrap();
    let output = temp.path().join("out").join("board.png");

    whiteboard_cmd(&temp)
        .args(["--width", "200", "--height", "200"])
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported"))
        .stdout(predicate::str::contains("board.png"));

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[..8], &PNG_SIGNATURE);
}

#[test]
fn script_without_output_uses_configured_directory() {
    let temp = TempDir::new().unwrap();
    let export_dir = temp.path().join("exports");
    let script = temp.path().join("gestures.json");
    std::fs::write(&script, RECTANGLE_SCRIPT).unwrap();

    let config = temp.path().join("whiteboard.toml");
    std::fs::write(
        &config,
        format!(
            "[canvas]\nwidth = 160\nheight = 120\n\n[export]\ndirectory = {:?}\n",
            export_dir.to_string_lossy()
        ),
    )
    .unwrap();

    whiteboard_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .assert()
        .success();

    assert!(export_dir.join("whiteboard_drawing.png").exists());
}

#[test]
fn invalid_script_reports_error() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("broken.json");
    std::fs::write(&script, r#"[{"action": "teleport"}]"#).unwrap();

    whiteboard_cmd(&temp)
        .arg("--script")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid script"));
}

#[test]
fn unknown_tool_names_failing_step() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("tool.json");
    std::fs::write(
        &script,
        r#"[{"action": "width", "width": 3}, {"action": "tool", "tool": "spray"}]"#,
    )
    .unwrap();

    whiteboard_cmd(&temp)
        .arg("--script")
        .arg(&script)
        .arg("--output")
        .arg(temp.path().join("never.png"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Script step 1 failed"));
}

#[test]
fn chat_prints_message_and_simulated_reply() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("chat.toml");
    std::fs::write(&config, "[chat]\nreply_delay_ms = 10\n").unwrap();

    whiteboard_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .args(["--chat", "hello board"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User1: hello board"))
        .stdout(predicate::str::contains("User2: Thanks for your message!"));
}

#[test]
fn blank_chat_message_sends_nothing() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("chat.toml");
    std::fs::write(&config, "[chat]\nreply_delay_ms = 10\n").unwrap();

    whiteboard_cmd(&temp)
        .arg("--config")
        .arg(&config)
        .args(["--chat", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("User2").not());
}
