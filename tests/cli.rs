use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn prints_three_greetings_in_order() {
    cargo_bin_cmd!("hello_greeter")
        .assert()
        .success()
        .code(0)
        .stdout("Hello, World!\nHello, C++!\nHello, C++ OOP!\n");
}

#[test]
fn debug_logging_stays_off_stdout() {
    cargo_bin_cmd!("hello_greeter")
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout("Hello, World!\nHello, C++!\nHello, C++ OOP!\n")
        .stderr(predicate::str::contains("printing greeting"));
}

#[test]
fn output_is_identical_across_runs() {
    let first = cargo_bin_cmd!("hello_greeter").output().unwrap();
    let second = cargo_bin_cmd!("hello_greeter").output().unwrap();

    assert_eq!(first.stdout, second.stdout);
}
