use assert_cmd::prelude::*;
use std::process::Command;

fn run(args: &[&str]) -> (bool, String, String) {
    let output = Command::main_binary()
        .unwrap()
        .args(args)
        .output()
        .unwrap();
    (
        output.status.success(),
        String::from_utf8(output.stdout).unwrap(),
        String::from_utf8(output.stderr).unwrap(),
    )
}

#[test]
fn run_corridor() {
    let (success, stdout, stderr) = run(&["--quiet", "boards/corridor.txt"]);
    assert!(success);
    assert_eq!(stderr, "");
    assert!(stdout.starts_with("Solving boards/corridor.txt using bfs...\n"));
    assert!(stdout.contains("Depth"), "{}", stdout);
    assert!(!stdout.contains("Visited new depth"));

    let solution = r"Found solution:
wwwwwwwwwwwww
wr**b****b*gw
wwwwwwwwwwwww

(1, 1)
(1, 2)
(1, 3)
(1, 4)
(1, 5)
(1, 6)
(1, 7)
(1, 8)
(1, 9)
(1, 10)
(1, 11)
Steps: 10
";
    assert!(stdout.ends_with(solution), "{}", stdout);
}

#[test]
fn run_with_status() {
    let (success, stdout, _) = run(&["-m", "astar", "boards/example.txt"]);
    assert!(success);
    assert!(stdout.starts_with("Solving boards/example.txt using astar...\n"));
    assert!(stdout.contains("Visited new depth: 1\n"));
    assert!(stdout.contains("States created total: "));
    assert!(stdout.contains("Depth"), "{}", stdout);
    assert!(stdout.contains("Found solution:\n"));
    assert!(stdout.contains("\n(4, 4)\n"));
    assert!(stdout.contains("\n(0, 4)\nSteps: "));
}

#[test]
fn run_no_solution() {
    let (success, stdout, _) = run(&["-q", "--method", "greedy", "boards/walled.txt"]);
    assert!(success);
    assert!(stdout.ends_with("No solution\n"));
}

#[test]
fn run_missing_file() {
    let (success, stdout, stderr) = run(&["boards/does-not-exist.txt"]);
    assert!(!success);
    assert_eq!(stdout, "");
    assert!(stderr.starts_with("Can't load board boards/does-not-exist.txt in "));
}

#[test]
fn run_unknown_method() {
    let (success, _, stderr) = run(&["--method", "dfs", "boards/example.txt"]);
    assert!(!success);
    assert!(stderr.contains("dfs"));
}
