use assert_cmd::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.write_stdin("1\n2\n3\n0\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--- Global Checkout System ---"))
        .stdout(predicate::str::contains("Option: "))
        .stdout(predicate::str::contains(
            "Processing $50.00 via Credit Card",
        ))
        .stdout(predicate::str::contains("Processing $50.00 via PayPal"))
        .stdout(predicate::str::contains(
            "Aha! You're using Bitcoin! Processing $50.00 via Bitcoin",
        ))
        .stdout(predicate::str::ends_with("Goodbye! Salamat Shapi\n"));

    Ok(())
}

#[test]
fn test_cli_invalid_then_exit() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.write_stdin("cc\n\n0\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid option. Please choose 1, 2, 3, 4, or 0.",
        ))
        .stdout(predicate::str::contains("Checkout with").not())
        .stdout(predicate::str::contains("Goodbye! Salamat Shapi"));

    Ok(())
}

#[test]
fn test_cli_closed_stdin_exits_cleanly() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.write_stdin("");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Option: "))
        .stdout(predicate::str::contains("Goodbye").not());

    Ok(())
}

#[test]
fn test_cli_logs_go_to_stderr() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.env_remove("RUST_LOG")
        .args(["--log-level", "debug", "--log-format", "json"])
        .write_stdin("4\n0\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("selection parsed").not())
        .stderr(predicate::str::contains("selection parsed"))
        .stderr(predicate::str::contains("gateway created"));

    Ok(())
}

#[test]
fn test_cli_rejects_unknown_log_format() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.args(["--log-format", "xml"]);

    cmd.assert().failure();

    Ok(())
}
