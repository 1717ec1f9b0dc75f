//! Spawns the puzzles binary and checks stdout against the judge's expected output.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_puzzles"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn puzzles");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(stdin.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait")
}

fn stdout_of(args: &[&str], stdin: &str) -> String {
    let output = run(args, stdin);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).expect("utf8 stdout")
}

#[test]
fn solve_by_name_and_by_id_agree() {
    let input = "3\n1\n6\n7\n";
    let by_name = stdout_of(&["solve", "coprimes"], input);
    let by_id = stdout_of(&["solve", "7"], input);
    assert_eq!(by_name, "1\n1 5 \n1 2 3 4 5 6 \n");
    assert_eq!(by_name, by_id);
}

#[test]
fn cipher() {
    assert_eq!(stdout_of(&["solve", "fib-cipher"], "abcde\n"), "acege\n");
}

#[test]
fn modified_fib_prompt_toggle() {
    let with_prompt = stdout_of(&["solve", "9"], "1\n5 2\n");
    assert_eq!(
        with_prompt,
        "Enter n and k: The 5th element of the modified Fibonacci sequence is: 17\n"
    );
    let bare = stdout_of(&["solve", "9", "--no-prompt"], "1\n5 2\n");
    assert_eq!(bare, "The 5th element of the modified Fibonacci sequence is: 17\n");
}

#[test]
fn bounded_mex_and_magic_number() {
    assert_eq!(stdout_of(&["solve", "bounded-mex"], "1\n3 1\n1 2 3\n"), "4\n");
    assert_eq!(stdout_of(&["solve", "13"], "3\n19\n20\n0\n"), "YES\nNO\nNO\n");
}

#[test]
fn reads_input_file() {
    let temp = tempfile::tempdir().expect("tempdir");
    let path = temp.path().join("input.txt");
    std::fs::write(&path, "2\n10\n28\n").expect("write input");

    let out = stdout_of(&["solve", "magic-number", "--input", path.to_str().unwrap()], "");
    assert_eq!(out, "YES\nYES\n");
}

#[test]
fn list_names_every_problem() {
    let out = stdout_of(&["list"], "");
    for name in ["coprimes", "fib-cipher", "modified-fib", "bounded-mex", "magic-number"] {
        assert!(out.contains(name), "missing {name} in {out}");
    }
    assert_eq!(out.lines().count(), 5);
}

#[test]
fn show_prints_formats() {
    let out = stdout_of(&["show", "10"], "");
    assert!(out.starts_with("10 (bounded-mex)"));
    assert!(out.contains("input: "));
    assert!(out.contains("output: "));
}

#[test]
fn unknown_problem_fails() {
    let output = run(&["solve", "42"], "");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn truncated_input_fails_with_message() {
    let output = run(&["solve", "coprimes"], "2\n6\n");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unexpected end of input"), "stderr: {stderr}");
}
