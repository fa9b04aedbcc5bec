//! Integration tests for the `signature` command.

use assert_cmd::Command;
use predicates::prelude::*;

fn solty() -> Command {
    Command::new(env!("CARGO_BIN_EXE_solty"))
}

#[test]
fn signature_with_params_and_returns() {
    solty()
        .args([
            "signature",
            "--params",
            "bytes32,uint8,bytes32,bytes32",
            "--returns",
            "address",
            "--mutability",
            "pure",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "function (bytes32,uint8,bytes32,bytes32) pure returns (address)\n",
        ));
}

#[test]
fn signature_external_view() {
    solty()
        .args([
            "signature",
            "--params",
            "string memory",
            "--returns",
            "bool",
            "--kind",
            "external",
            "--mutability",
            "view",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "function (string memory) view external returns (bool)\n",
        ));
}

#[test]
fn signature_arbitrary_parameters() {
    solty()
        .args([
            "signature",
            "--returns",
            "bytes memory",
            "--arbitrary-parameters",
            "--mutability",
            "pure",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff(
            "function (...) pure returns (bytes memory)\n",
        ));
}

#[test]
fn signature_bad_name_fails() {
    solty()
        .args(["signature", "--params", "mapping", "--no-color"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unreachable"));
}
