//! Command-line front end tests.

use nomage::cli::{Exit, run};
use rstest::rstest;

struct Output {
    exit: Exit,
    stdout: String,
    stderr: String,
}

fn nomage(args: &[&str]) -> Output {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let argv = std::iter::once("nomage").chain(args.iter().copied());
    let exit = run(argv, &mut stdout, &mut stderr).unwrap();
    Output {
        exit,
        stdout: String::from_utf8(stdout).unwrap(),
        stderr: String::from_utf8(stderr).unwrap(),
    }
}

#[test]
fn test_no_args() {
    let output = nomage(&[]);
    assert_eq!(output.exit, Exit::Usage);
    assert_eq!(output.exit.code(), 2);
    assert!(output.stdout.contains("Usage:"));
}

#[test]
fn test_empty_identifier_shows_usage() {
    let output = nomage(&[""]);
    assert_eq!(output.exit, Exit::Usage);
    assert!(output.stdout.contains("Usage:"));
    assert!(output.stderr.is_empty());
}

#[test]
fn test_help() {
    let output = nomage(&["--help"]);
    assert_eq!(output.exit, Exit::Success);
    assert!(output.stdout.contains("Usage:"));
    assert!(output.stdout.contains("--check"));
}

#[test]
fn test_version_flag() {
    let output = nomage(&["--version"]);
    assert_eq!(output.exit, Exit::Success);
    assert!(output.stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_flag() {
    let output = nomage(&["--frobnicate", "x"]);
    assert_eq!(output.exit, Exit::Usage);
    assert!(!output.stderr.is_empty());
}

#[rstest]
#[case("MyIdentifier", "Detected: PascalCase / UpperCamelCase / StudlyCase\n")]
#[case("my_identifier", "Detected: snake_case / snail_case / pothole_case\n")]
#[case("myidentifier", "Detected: flatcase / lowercase\n")]
fn test_detect(#[case] input: &str, #[case] expected: &str) {
    let output = nomage(&[input]);
    assert_eq!(output.exit, Exit::Success);
    assert_eq!(output.stdout, expected);
}

#[test]
fn test_unrecognized_identifier() {
    let output = nomage(&["MyIdentifie_R"]);
    assert_eq!(output.exit, Exit::Unrecognized);
    assert_eq!(
        output.stderr,
        "No matching naming convention, invalid identifier 'MyIdentifie_R'\n"
    );
    assert!(output.stdout.is_empty());
}

#[test]
fn test_check_matching() {
    let output = nomage(&["MyIdentifier", "--check", "pascal"]);
    assert_eq!(output.exit, Exit::Success);
    assert_eq!(output.stdout, "Matching.\n");
}

#[test]
fn test_check_not_matching() {
    let output = nomage(&["MyIdentifier", "-c", "httpheader"]);
    assert_eq!(output.exit, Exit::Mismatch);
    assert_eq!(
        output.stderr,
        "Not matching convention: Train-Case / Http-Header-Case\n"
    );
}

#[test]
fn test_check_unknown_convention() {
    let output = nomage(&["MyIdentifier", "--check", "snack"]);
    assert_eq!(output.exit, Exit::UnknownConvention);
    assert_eq!(output.stderr, "Could not find naming convention 'snack'\n");
}

#[rstest]
#[case("snake", "my_identifier\n")]
#[case("kebab-case", "my-identifier\n")]
#[case("SCREAMING_SNAKE_CASE", "MY_IDENTIFIER\n")]
fn test_convert(#[case] target: &str, #[case] expected: &str) {
    let output = nomage(&["MyIdentifier", "--to", target]);
    assert_eq!(output.exit, Exit::Success);
    assert_eq!(output.stdout, expected);
}

#[test]
fn test_convert_unknown_convention() {
    let output = nomage(&["MyIdentifier", "-t", "snack"]);
    assert_eq!(output.exit, Exit::UnknownConvention);
    assert_eq!(output.stderr, "Could not find naming convention 'snack'\n");
    assert!(output.stdout.is_empty());
}

#[test]
fn test_check_then_convert() {
    let output = nomage(&["MyIdentifier", "--check", "pascal", "--to", "snake"]);
    assert_eq!(output.exit, Exit::Success);
    assert_eq!(output.stdout, "my_identifier\n");

    let output = nomage(&["MyIdentifier", "--check", "snake", "--to", "snake"]);
    assert_eq!(output.exit, Exit::Mismatch);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_failure_codes_are_distinct() {
    let unrecognized = nomage(&["my__identifier"]).exit;
    let unknown = nomage(&["myIdentifier", "--to", "snack"]).exit;
    let mismatch = nomage(&["myIdentifier", "--check", "snake"]).exit;
    assert_ne!(unrecognized, unknown);
    assert_ne!(unrecognized, mismatch);
    assert_ne!(unknown, mismatch);
}

#[rstest]
#[case(&["MyIdentifier", "--check", ""])]
#[case(&["MyIdentifier", "--to", ""])]
#[case(&["MyIdentifier", "-c", "", "-t", ""])]
fn test_empty_convention_names_are_ignored(#[case] args: &[&str]) {
    let output = nomage(args);
    assert_eq!(output.exit, Exit::Success);
    assert_eq!(
        output.stdout,
        "Detected: PascalCase / UpperCamelCase / StudlyCase\n"
    );
}

#[test]
fn test_empty_check_with_conversion() {
    let output = nomage(&["MyIdentifier", "--check", "", "--to", "kebab"]);
    assert_eq!(output.exit, Exit::Success);
    assert_eq!(output.stdout, "my-identifier\n");
}
