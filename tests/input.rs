use mergeinsertion::error::InputError;
use mergeinsertion::input::{parse_element, parse_elements, MAX_ELEMENT};

#[test]
fn accepts_digits() {
    assert_eq!(parse_element("0"), Ok(0));
    assert_eq!(parse_element("42"), Ok(42));
    assert_eq!(parse_element("007"), Ok(7));
    assert_eq!(parse_element("2147483647"), Ok(MAX_ELEMENT));
}

#[test]
fn rejects_malformed_tokens() {
    for token in ["", "-1", "+1", "1.5", "12a", " 3", "0x10", "٣"] {
        assert_eq!(
            parse_element(token),
            Err(InputError::NotANumber(token.to_owned())),
            "token: {token:?}"
        );
    }
}

#[test]
fn rejects_out_of_range() {
    for token in ["2147483648", "4294967295", "4294967296", "99999999999999999999"] {
        assert_eq!(
            parse_element(token),
            Err(InputError::OutOfRange(token.to_owned())),
            "token: {token:?}"
        );
    }
}

#[test]
fn parses_all_tokens() {
    assert_eq!(parse_elements(["3", "5", "9", "7", "4"]), Ok(vec![3, 5, 9, 7, 4]));

    let owned: Vec<String> = vec!["1".into(), "1".into()];
    assert_eq!(parse_elements(&owned), Ok(vec![1, 1]));
}

#[test]
fn stops_at_first_invalid_token() {
    assert_eq!(
        parse_elements(["1", "x", "-2"]),
        Err(InputError::NotANumber("x".to_owned()))
    );
}

#[test]
fn rejects_empty_input() {
    assert_eq!(parse_elements(Vec::<String>::new()), Err(InputError::Empty));
}

#[test]
fn error_messages() {
    assert_eq!(
        InputError::NotANumber("abc".into()).to_string(),
        "`abc` is not a non-negative integer"
    );
    assert_eq!(
        InputError::OutOfRange("2147483648".into()).to_string(),
        "`2147483648` is larger than 2147483647"
    );
    assert_eq!(InputError::Empty.to_string(), "no numbers to sort");
}
