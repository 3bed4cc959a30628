use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{mc_defaults, positions};
use medcabinet::cli::shell::ShellCommand;

fn shell(dir: &tempfile::TempDir, script: &str) -> (String, String) {
    let output = mc_defaults(dir)
        .arg("shell")
        .write_stdin(script)
        .output()
        .unwrap();
    assert!(output.status.success(), "shell exited with {:?}", output.status);
    (
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn test_parse_commands() {
    assert_eq!(ShellCommand::parse("   ").unwrap(), None);
    assert_eq!(
        ShellCommand::parse("category Blood Pressure").unwrap(),
        Some(ShellCommand::Category("Blood Pressure".into()))
    );
    assert_eq!(
        ShellCommand::parse("DELETE").unwrap(),
        Some(ShellCommand::Delete(None))
    );
    assert_eq!(
        ShellCommand::parse("delete 4").unwrap(),
        Some(ShellCommand::Delete(Some("4".into())))
    );
    assert!(ShellCommand::parse("show").is_err());
    assert!(ShellCommand::parse("teleport 3").is_err());
}

#[test]
fn test_shell_alert_once_then_filters() {
    let dir = tempfile::tempdir().unwrap();

    let (stdout, _) = shell(
        &dir,
        "category Blood Pressure\nstatus active\nreset\nquit\n",
    );

    assert_eq!(stdout.matches("Low Quantity Alert").count(), 1);
    assert!(stdout.contains("[Blood Pressure | Active]"));
    assert!(stdout.contains("Filters reset."));
    assert!(stdout.contains("Bye."));
}

#[test]
fn test_shell_keeps_state_across_turns() {
    let dir = tempfile::tempdir().unwrap();

    let (stdout, _) = shell(
        &dir,
        "show 5\nauto-refill on\nclose\ncategory Digestive\nshow 5\nquit\n",
    );

    assert!(stdout.contains("Auto-refill enabled for Omeprazole"));
    // reopened after refiltering, the edit is still there
    let last_card = &stdout[stdout.rfind("Auto-refill:").unwrap()..];
    assert!(last_card.contains("Enabled"));
}

#[test]
fn test_shell_delete_needs_confirm() {
    let dir = tempfile::tempdir().unwrap();

    let (stdout, _) = shell(
        &dir,
        "delete 8\ncancel\nlist\ndelete 8\nconfirm\nlist\nlog\nquit\n",
    );

    assert!(stdout.contains("This will permanently delete Gabapentin"));
    assert!(stdout.contains("Deletion cancelled."));
    assert!(stdout.contains("Gabapentin has been removed from your cabinet"));

    // the last table no longer lists it
    let start = stdout.rfind("NAME").unwrap();
    let end = stdout.rfind("Activity log").unwrap();
    assert!(!stdout[start..end].contains("Gabapentin"));
    assert!(stdout[end..].contains("(8)"));
}

#[test]
fn test_shell_delete_open_prescription() {
    let dir = tempfile::tempdir().unwrap();

    let (stdout, _) = shell(&dir, "show 1\ndelete\nyes\nquit\n");

    assert!(stdout.contains("[All | All] #1 >"));
    assert!(stdout.contains("[All | All] #1 delete #1? >"));
    // detail view closed by the deletion
    let after = &stdout[stdout.find("Lisinopril has been removed").unwrap()..];
    assert!(after.contains("[All | All] > "));
    assert!(!after.contains("#1"));
}

#[test]
fn test_shell_errors_do_not_end_the_session() {
    let dir = tempfile::tempdir().unwrap();

    let (stdout, stderr) = shell(
        &dir,
        "show 99\nconfirm\nstatus sleepy\nfly\nlist\nquit\n",
    );

    assert!(stderr.contains("No prescription found with id 99"));
    assert!(stderr.contains("No deletion is waiting for confirmation"));
    assert!(stderr.contains("Invalid status filter"));
    assert!(stderr.contains("Invalid command: fly"));
    assert!(stdout.contains("Bye."));
}

#[test]
fn test_shell_dismiss_and_alerts() {
    let dir = tempfile::tempdir().unwrap();

    mc_defaults(&dir)
        .arg("shell")
        .write_stdin("alerts\ndismiss\nalerts\nquit\n")
        .assert()
        .success()
        .stdout(contains("1 alert(s) dismissed."))
        .stdout(contains("No open alerts."));
}

#[test]
fn test_shell_restart_reloads_seed() {
    let dir = tempfile::tempdir().unwrap();

    let (stdout, _) = shell(&dir, "delete 4\nconfirm\nrestart\nlist\nquit\n");

    assert!(stdout.contains("Cabinet reloaded."));
    let last_table = &stdout[stdout.rfind("NAME").unwrap()..];
    assert_eq!(positions(last_table, &["Sertraline"]).len(), 1);
}

#[test]
fn test_shell_cabinet_and_categories() {
    let dir = tempfile::tempdir().unwrap();

    mc_defaults(&dir)
        .args(["--no-alert", "shell"])
        .write_stdin("cabinet\ncategories\nhelp\n")
        .assert()
        .success()
        .stdout(contains("#11").and(contains("* All")))
        .stdout(contains("Low Quantity Alert").not())
        .stdout(contains("auto-refill <on|off>"));
}
