//! Conversion tests between conventions.

use nomage::{NamingError, builtins, identify};
use rstest::rstest;

use crate::helpers::convention_fixtures::EXTENDED;

#[rstest]
#[case("flatcase", "myidentifier")]
#[case("UPPERCASE", "MYIDENTIFIER")]
#[case("camel", "myIdentifier")]
#[case("pascal", "MyIdentifier")]
#[case("snake", "my_identifier")]
#[case("constant", "MY_IDENTIFIER")]
#[case("camel_Snake_Case", "my_Identifier")]
#[case("kebab-case", "my-identifier")]
#[case("screaming-kebab", "MY-IDENTIFIER")]
#[case("Http Header", "My-Identifier")]
fn test_convert_from_snake(#[case] target: &str, #[case] expected: &str) {
    let id = identify("my_identifier").unwrap();
    assert_eq!(id.to(target).unwrap(), expected);
}

#[rstest]
#[case("myIdentifier")]
#[case("MyIdentifier")]
#[case("MY_IDENTIFIER")]
#[case("my-identifier")]
#[case("My-Identifier")]
fn test_convert_to_kebab(#[case] input: &str) {
    assert_eq!(
        identify(input).unwrap().to("kebab-case").unwrap(),
        "my-identifier"
    );
}

#[test]
fn test_convert_unknown_name() {
    let id = identify("myIdentifier").unwrap();
    let err = id.to("snack").unwrap_err();
    assert_eq!(err, NamingError::unknown_convention("snack"));
    assert!(err.to_string().contains("'snack'"));

    // Callers may fall back to the original rendering
    assert_eq!(
        id.to("snack").unwrap_or_else(|_| id.to_string()),
        "myIdentifier"
    );
}

#[test]
fn test_render_with_resolved_convention() {
    let id = identify("MyIdentifier").unwrap();
    let train = builtins().get("train").unwrap();
    assert_eq!(id.render(train), "My-Identifier");
    assert_eq!(id.render(train), id.to("Train-Case").unwrap());
}

#[test]
fn test_convert_into_custom_convention() {
    let id = identify("MyIdentifier").unwrap();
    assert_eq!(id.to_in("dotted", &EXTENDED).unwrap(), "my.identifier");
    assert!(id.to("dotted").is_err());
}

#[rstest]
#[case("MyIdentifier", "pascal", true)]
#[case("MyIdentifier", "httpheader", false)]
#[case("word", "snake", true)]
#[case("word", "kebab", true)]
#[case("word", "UPPERCASE", false)]
#[case("my_identifier", "camel_Snake_Case", false)]
fn test_conforms_to(#[case] input: &str, #[case] name: &str, #[case] expected: bool) {
    let id = identify(input).unwrap();
    assert_eq!(id.conforms_to(builtins().get(name).unwrap()), expected);
}
