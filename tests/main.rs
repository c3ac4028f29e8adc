use assert_cmd::Command;
use rand::{thread_rng, Rng};
use rstest::rstest;

fn adder(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_adder"))
        .args(args)
        .env_remove("ADDER_LOG")
        .output()
        .expect("run adder")
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf8 stdout")
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8(output.stderr.clone()).expect("utf8 stderr")
}

#[test]
fn add() {
    let output = adder(&["add", "--a=5", "--b=10"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "15\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn add_negative() {
    let output = adder(&["add", "--a", "2", "--b", "-2"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0\n");
}

#[rstest]
#[case(vec!["add", "--a=5", "--b=10"])]
#[case(vec!["add", "--a", "5", "--b", "10"])]
#[case(vec!["add", "--b", "10", "--a", "5"])]
#[case(vec!["add", "--b=10", "--a", "5"])]
fn add_equivalent_syntax(#[case] args: Vec<&str>) {
    let output = adder(args.as_slice());
    assert!(output.status.success());
    assert_eq!(stdout(&output), "15\n");
}

#[test]
fn add_random() {
    for _ in 0..10 {
        let a: i64 = thread_rng().gen_range(-1_000_000_000..1_000_000_000);
        let b: i64 = thread_rng().gen_range(-1_000_000_000..1_000_000_000);
        let a_value = a.to_string();
        let b_value = b.to_string();

        let output = adder(&["add", "--a", &a_value, "--b", &b_value]);
        assert!(output.status.success());
        assert_eq!(stdout(&output), format!("{}\n", a + b));
    }
}

#[rstest]
#[case(vec!["add", "--a=5"], "adder: error [MissingRequired]: Missing required option '--b' (Second integer).\nadd --a=5\n          ^\n")]
#[case(vec!["add", "--a=foo", "--b=1"], "adder: error [InvalidValue]: Option 'a' cannot take value 'foo'; expected a base-10 integer.\nadd --a=foo --b=1\n    ^\n")]
#[case(vec!["multiply", "--a=1", "--b=1"], "adder: error [UnknownCommand]: Unknown command 'multiply'; expected one of {'add'}.\nmultiply --a=1 --b=1\n^\n")]
#[case(vec!["add", "--a", "1", "-2", "--b", "2"], "adder: error [UnknownFlag]: Unknown flag '-2'.\nadd --a 1 -2 --b 2\n          ^\n")]
#[case(vec![], "adder: error [UnknownCommand]: Missing command; expected one of {'add'}.\n\n^\n")]
fn add_error(#[case] args: Vec<&str>, #[case] expected: &str) {
    let output = adder(args.as_slice());
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert_eq!(stderr(&output), expected);
}

#[test]
fn add_overflow() {
    let output = adder(&["add", "--a", "9223372036854775807", "--b", "1"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert_eq!(
        stderr(&output),
        "adder: error: The sum of 9223372036854775807 and 1 overflows a 64-bit signed integer.\n"
    );
}

#[test]
fn idempotent() {
    let first = adder(&["add", "--a", "2", "--b", "-2"]);
    let second = adder(&["add", "--a", "2", "--b", "-2"]);
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn logging_stays_off_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_adder"))
        .args(["add", "--a", "2", "--b", "-2"])
        .env("ADDER_LOG", "debug")
        .output()
        .expect("run adder");
    assert!(output.status.success());
    assert_eq!(stdout(&output), "0\n");
    assert!(stderr(&output).contains("Selected command 'add'."));
}
