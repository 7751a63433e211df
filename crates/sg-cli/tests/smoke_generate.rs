use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn demo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("demos")
        .join("petclinic")
}

fn copy_demo(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time should be monotonic")
        .as_nanos();
    let root = std::env::temp_dir().join(format!("sg-cli-smoke-{}-{}", name, nanos));
    fs::create_dir_all(&root).expect("root should be created");
    for file in ["scaffold.json", "pom.xml"] {
        fs::copy(demo_root().join(file), root.join(file)).expect("demo file should copy");
    }
    root
}

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_sg-cli"))
        .args(args)
        .output()
        .expect("sg-cli should run")
}

fn line_value<'a>(stdout: &'a str, key: &str) -> Option<&'a str> {
    stdout
        .lines()
        .find_map(|line| line.strip_prefix(key)?.strip_prefix(':'))
}

#[test]
fn generate_creates_test_case_for_every_creatable_demo_controller() {
    let root = copy_demo("all");
    let project_dir = root.to_str().expect("path should be utf-8");

    for (controller, steps) in [
        ("com.example.petclinic.web.PetController", "10"),
        ("com.example.petclinic.web.OwnerController", "10"),
        ("com.example.petclinic.web.VisitController", "7"),
    ] {
        let output = run_cli(&[
            "generate",
            "--project-dir",
            project_dir,
            "--controller",
            controller,
            "--now",
            "2024-06-15T12:00:00+00:00",
        ]);
        assert!(output.status.success(), "generate failed for {}", controller);
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert_eq!(line_value(&stdout, "RESULT"), Some("OK"));
        assert_eq!(line_value(&stdout, "STEPS"), Some(steps), "{}", controller);

        let test_path = line_value(&stdout, "TEST_PATH").expect("test path should be printed");
        assert!(root.join(test_path).is_file(), "missing {}", test_path);
    }

    let suite = fs::read_to_string(root.join("src/main/webapp/selenium/test-suite.xhtml"))
        .expect("suite should exist");
    assert_eq!(suite.matches("<a href=").count(), 3);

    let pom = fs::read_to_string(root.join("pom.xml")).expect("pom should exist");
    assert_eq!(pom.matches("<artifactId>selenium-maven-plugin</artifactId>").count(), 1);
}

#[test]
fn generate_reports_skip_and_errors_on_stdout() {
    let root = copy_demo("errors");
    let project_dir = root.to_str().expect("path should be utf-8");

    let skipped = run_cli(&[
        "generate",
        "--project-dir",
        project_dir,
        "--controller",
        "com.example.petclinic.web.VetController",
    ]);
    assert!(skipped.status.success());
    assert!(String::from_utf8_lossy(&skipped.stdout).contains("RESULT:SKIPPED"));

    let plain = run_cli(&[
        "generate",
        "--project-dir",
        project_dir,
        "--controller",
        "com.example.petclinic.web.HomeController",
    ]);
    assert_eq!(plain.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&plain.stdout);
    assert_eq!(line_value(&stdout, "RESULT"), Some("ERROR"));
    assert_eq!(
        line_value(&stdout, "ERROR_CODE"),
        Some("CONTROLLER_NOT_SCAFFOLDED")
    );
    assert!(line_value(&stdout, "ERROR_MSG_JSON").is_some());
}

#[test]
fn check_reports_mvc_feature() {
    let output = run_cli(&[
        "check",
        "--project-dir",
        demo_root().to_str().expect("path should be utf-8"),
    ]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(line_value(&stdout, "GENERATION_POSSIBLE"), Some("true"));
}
