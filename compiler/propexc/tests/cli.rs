//! End-to-end tests of the `propex` binary.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn propex(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_propex"))
        .args(args)
        .env_remove("PROPEX_LOG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .output()
        .expect("failed to run propex")
}

fn write_source(dir: &Path, text: &str) -> String {
    let path = dir.join("Account.cs");
    std::fs::write(&path, text).unwrap();
    path.display().to_string()
}

const ACCOUNT: &str = "\
namespace Bank
{
    public class Account
    {
        #region State
        public decimal Balance { get; set; }
        #endregion
    }
}
";

#[test]
fn help_and_version() {
    let help = propex(&["help"]);
    assert!(help.status.success());
    assert!(String::from_utf8_lossy(&help.stdout).contains("explode <file.cs> <Property>"));

    let version = propex(&["--version"]);
    assert!(version.status.success());
    assert_eq!(
        String::from_utf8_lossy(&version.stdout),
        format!("propex {}\n", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn explode_then_crunch_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(dir.path(), ACCOUNT);

    let explode = propex(&["explode", &file, "Account.Balance", "--write"]);
    assert!(explode.status.success(), "{explode:?}");
    assert!(explode.stdout.is_empty());
    let exploded = std::fs::read_to_string(&file).unwrap();
    assert!(exploded.contains("        private decimal _balance;\n"));
    assert!(exploded.contains(
        "        public decimal Balance { get { return _balance; } set { _balance = value; } }\n"
    ));

    let classify = propex(&["classify", &file, "Balance"]);
    assert_eq!(String::from_utf8_lossy(&classify.stdout), "crunch\n");

    let crunch = propex(&["crunch", &file, "Balance", "-w"]);
    assert!(crunch.status.success(), "{crunch:?}");
    assert_eq!(std::fs::read_to_string(&file).unwrap(), ACCOUNT);
}

#[test]
fn explode_prints_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(dir.path(), ACCOUNT);

    let output = propex(&["explode", &file, "Balance"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("return _balance;"));
    assert_eq!(std::fs::read_to_string(&file).unwrap(), ACCOUNT);
}

#[test]
fn failures_exit_with_one() {
    let dir = tempfile::tempdir().unwrap();
    let file = write_source(dir.path(), ACCOUNT);

    let unknown = propex(&["explode", &file, "Missing"]);
    assert_eq!(unknown.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&unknown.stderr).contains("no property `Missing`"));

    let usage = propex(&["crunch", &file]);
    assert_eq!(usage.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&usage.stderr).contains("usage: propex crunch"));

    let broken = write_source(dir.path(), "class Account {\n");
    let parse = propex(&["parse", &broken]);
    assert_eq!(parse.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&parse.stderr).contains("Account.cs"));
}
