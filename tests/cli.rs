use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gauge(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("stressgauge").unwrap();
    cmd.env("STRESSGAUGE_DATA_DIR", dir.path());
    cmd
}

fn set(dir: &TempDir, field: &str, amount: &str) {
    gauge(dir)
        .args(["snapshot", "set", field, amount])
        .assert()
        .success();
}

fn reference_household(dir: &TempDir) {
    gauge(dir).arg("init").assert().success();
    for (field, amount) in [
        ("income", "4000"),
        ("rent", "1200"),
        ("utilities", "200"),
        ("transport", "300"),
        ("food", "500"),
        ("debt", "100"),
        ("subscriptions", "50"),
        ("savings", "600"),
    ] {
        set(dir, field, amount);
    }
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();
    gauge(&dir)
        .args(["init", "--currency", "$"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized StressGauge"));

    assert!(dir.path().join("config.json").exists());
    gauge(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Currency symbol:   $"));
}

#[test]
fn score_of_reference_household() {
    let dir = TempDir::new().unwrap();
    reference_household(&dir);

    gauge(&dir)
        .arg("score")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stress score: 34 (Moderate Stress)"));

    let output = gauge(&dir).args(["score", "--json"]).output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["score"], 34);
    assert_eq!(json["category"], "Moderate Stress");
}

#[test]
fn empty_profile_is_moderate() {
    let dir = TempDir::new().unwrap();
    gauge(&dir)
        .arg("score")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stress score: 55 (Moderate Stress)"));
}

#[test]
fn goal_lifecycle() {
    let dir = TempDir::new().unwrap();
    reference_household(&dir);

    gauge(&dir)
        .args(["goal", "add", "Car Deposit", "6000", "12", "--category", "car"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created goal: Car Deposit"))
        .stdout(predicate::str::contains("Car/Vehicle"));

    gauge(&dir)
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Realistic"));

    gauge(&dir)
        .args(["goal", "edit", "car deposit", "--months", "3"])
        .assert()
        .success();

    gauge(&dir)
        .args(["goal", "show", "Car Deposit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("RM 2,000.00"))
        .stdout(predicate::str::contains("Danger"));

    gauge(&dir)
        .args(["goal", "remove", "Car Deposit"])
        .assert()
        .success();

    gauge(&dir)
        .args(["goal", "show", "Car Deposit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Goal not found: Car Deposit"));
}

#[test]
fn zero_month_goal_is_rejected() {
    let dir = TempDir::new().unwrap();
    gauge(&dir)
        .args(["goal", "add", "Trip", "1000", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid goal 'Trip': deadline must be at least 1 month",
        ));

    gauge(&dir)
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No goals yet"));
}

#[test]
fn allocation_and_subsidy_toggle() {
    let dir = TempDir::new().unwrap();
    reference_household(&dir);
    gauge(&dir)
        .args(["subsidy", "add", "Childcare", "120"])
        .assert()
        .success();

    gauge(&dir)
        .arg("allocate")
        .assert()
        .success()
        .stdout(predicate::str::contains("BALANCE LEFT"))
        .stdout(predicate::str::contains("RM 1,050.00"))
        .stdout(predicate::str::contains("SUBSIDIES").not());

    gauge(&dir).args(["subsidy", "enable"]).assert().success();

    gauge(&dir)
        .arg("allocate")
        .assert()
        .success()
        .stdout(predicate::str::contains("SUBSIDIES"));
}

#[test]
fn optimizations_move_into_balance_left() {
    let dir = TempDir::new().unwrap();
    reference_household(&dir);
    gauge(&dir)
        .args(["optimize", "add", "Transportation", "100"])
        .assert()
        .success();

    let output = gauge(&dir).args(["export", "--format", "csv"]).output().unwrap();
    let csv = String::from_utf8(output.stdout).unwrap();
    assert!(csv.starts_with("bucket,kind,goal_id,amount,share"));
    assert!(csv.contains("BALANCE LEFT,balance_left,,1150.00,"));
    assert!(csv.contains("TRANSPORT,transport,,200.00,"));

    gauge(&dir).args(["optimize", "clear"]).assert().success();
    gauge(&dir)
        .args(["optimize", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No optimizations recorded."));
}

#[test]
fn json_export_to_file() {
    let dir = TempDir::new().unwrap();
    reference_household(&dir);
    let out = dir.path().join("export.json");

    gauge(&dir)
        .args(["export", "--format", "json", "--output"])
        .arg(&out)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(json["dashboard"]["stress"]["score"], 34);
    assert_eq!(json["profile"]["snapshot"]["rent"], 1200.0);
}

#[test]
fn dashboard_and_audit() {
    let dir = TempDir::new().unwrap();
    reference_household(&dir);
    gauge(&dir)
        .args(["strategy", "add", "Index Fund", "250"])
        .assert()
        .success();

    gauge(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Stress Score:  34 / 100"))
        .stdout(predicate::str::contains("INDEX FUND"));

    gauge(&dir)
        .args(["audit", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Strategy"))
        .stdout(predicate::str::contains("Index Fund"));
}

fn break_first_goal_deadline(dir: &TempDir) {
    let path = dir.path().join("data").join("profile.json");
    let mut profile: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    profile["goals"][0]["deadlineMonths"] = serde_json::json!(0);
    std::fs::write(&path, serde_json::to_string_pretty(&profile).unwrap()).unwrap();
}

#[test]
fn invalid_goal_on_disk_can_be_repaired() {
    let dir = TempDir::new().unwrap();
    gauge(&dir).arg("init").assert().success();
    gauge(&dir)
        .args(["goal", "add", "Trip", "1000", "5"])
        .assert()
        .success();
    break_first_goal_deadline(&dir);

    gauge(&dir).arg("config").assert().success();
    gauge(&dir).arg("score").assert().success();
    gauge(&dir)
        .arg("dashboard")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Invalid goal 'Trip': deadline must be at least 1 month",
        ));

    gauge(&dir)
        .args(["goal", "edit", "Trip", "--months", "4"])
        .assert()
        .success();
    gauge(&dir).args(["goal", "list"]).assert().success();

    break_first_goal_deadline(&dir);
    gauge(&dir)
        .args(["goal", "remove", "Trip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed goal: Trip"));
    gauge(&dir)
        .arg("dashboard")
        .assert()
        .success();
}
