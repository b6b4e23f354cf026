// SPDX-License-Identifier: Apache-2.0

//! JSON_checker suite from json.org, inlined.
//!
//! fail1 (a bare string at the root) and fail18 (nesting deeper than 19
//! levels) are accepted here: any value may be the root and nesting depth is
//! not limited. Both are exercised as passing documents below.

use jsontree::{ParseError, Value};

macro_rules! generate_fail_tests {
    ($($num:tt => $expected:ident, $input:expr;)*) => {
        $(
            paste::paste! {
                #[test_log::test]
                fn [<test_fail $num>]() {
                    let input: &str = $input;
                    assert_eq!(
                        jsontree::parse(input),
                        Err(ParseError::$expected),
                        "fail{}.json should be rejected. Content: {:?}",
                        $num,
                        input
                    );
                }
            }
        )*
    };
}

generate_fail_tests! {
    2 => MissCommaOrSquareBracket, r#"["Unclosed array""#;
    3 => MissKey, r#"{unquoted_key: "keys must be quoted"}"#;
    4 => InvalidValue, r#"["extra comma",]"#;
    5 => InvalidValue, r#"["double extra comma",,]"#;
    6 => InvalidValue, r#"[   , "<-- missing value"]"#;
    7 => RootNotSingular, r#"["Comma after the close"],"#;
    8 => RootNotSingular, r#"["Extra close"]]"#;
    9 => MissKey, r#"{"Extra comma": true,}"#;
    10 => RootNotSingular, r#"{"Extra value after close": true} "misplaced quoted value""#;
    11 => MissCommaOrCurlyBracket, r#"{"Illegal expression": 1 + 2}"#;
    12 => InvalidValue, r#"{"Illegal invocation": alert()}"#;
    13 => MissCommaOrCurlyBracket, r#"{"Numbers cannot have leading zeroes": 013}"#;
    14 => MissCommaOrCurlyBracket, r#"{"Numbers cannot be hex": 0x14}"#;
    15 => InvalidStringEscape, r#"["Illegal backslash escape: \x15"]"#;
    16 => InvalidValue, r#"[\naked]"#;
    17 => InvalidStringEscape, r#"["Illegal backslash escape: \017"]"#;
    19 => MissColon, r#"{"Missing colon" null}"#;
    20 => InvalidValue, r#"{"Double colon":: null}"#;
    21 => MissColon, r#"{"Comma instead of colon", null}"#;
    22 => MissCommaOrSquareBracket, r#"["Colon instead of comma": false]"#;
    23 => MissCommaOrSquareBracket, r#"["Bad value", truth]"#;
    24 => InvalidValue, r#"['single quote']"#;
    25 => InvalidStringChar, "[\"\ttab\tcharacter\tin\tstring\t\"]";
    26 => InvalidStringEscape, r#"["tab\   character\   in\  string\  "]"#;
    27 => InvalidStringChar, "[\"line\nbreak\"]";
    28 => InvalidStringEscape, "[\"line\\\nbreak\"]";
    29 => InvalidValue, r#"[0e]"#;
    30 => InvalidValue, r#"[0e+]"#;
    31 => InvalidValue, r#"[0e+-1]"#;
    32 => MissCommaOrCurlyBracket, r#"{"Comment": false"#;
    33 => MissCommaOrSquareBracket, r#"["mismatch"}"#;
}

const PASS1: &str = r##"[
    "JSON Test Pattern pass1",
    {"object with 1 member":["array with 1 element"]},
    {},
    [],
    -42,
    true,
    false,
    null,
    {
        "integer": 1234567890,
        "real": -9876.543210,
        "e": 0.123456789e-12,
        "E": 1.234567890E+34,
        "":  23456789012E66,
        "zero": 0,
        "one": 1,
        "space": " ",
        "quote": "\"",
        "backslash": "\\",
        "controls": "\b\f\n\r\t",
        "slash": "/ & \/",
        "alpha": "abcdefghijklmnopqrstuvwyz",
        "ALPHA": "ABCDEFGHIJKLMNOPQRSTUVWYZ",
        "digit": "0123456789",
        "0123456789": "digit",
        "special": "`1~!@#$%^&*()_+-={':[,]}|;.</>?",
        "hex": "\u0123\u4567\u89AB\uCDEF\uabcd\uef4A",
        "true": true,
        "false": false,
        "null": null,
        "array":[  ],
        "object":{  },
        "address": "50 St. James Street",
        "url": "http://www.JSON.org/",
        "comment": "// /* <!-- --",
        "# -- --> */": " ",
        " s p a c e d " :[1,2 , 3

,

4 , 5        ,          6           ,7        ],"compact":[1,2,3,4,5,6,7],
        "jsontext": "{\"object with 1 member\":[\"array with 1 element\"]}",
        "quotes": "&#34; \u0022 %22 0x22 034 &#x22;",
        "\/\\\"\uCAFE\uBABE\uAB98\uFCDE\ubcda\uef4A\b\f\n\r\t`1~!@#$%^&*()_+-=[]{}|;:',./<>?"
: "A key can be any string"
    },
    0.5 ,98.6
,
99.44
,

1066,
1e1,
0.1e1,
1e-1,
1e00,2e+00,2e-00
,"rosebud"]"##;

const PASS2: &str = r#"[[[[[[[[[[[[[[[[[[["Not too deep"]]]]]]]]]]]]]]]]]]]"#;

const PASS3: &str = r#"{
    "JSON Test Pattern pass3": {
        "The outermost value": "must be an object or array.",
        "In this test": "It is an object."
    }
}
"#;

#[test_log::test]
fn test_pass1() {
    let value = jsontree::parse(PASS1).unwrap();
    let array = value.as_array().unwrap();
    assert_eq!(array.len(), 20);
    assert_eq!(array[0].as_str(), Some("JSON Test Pattern pass1"));
    assert_eq!(array[4].as_number(), Some(-42.0));
    assert_eq!(array[19].as_str(), Some("rosebud"));

    let object = array[8].as_object().unwrap();
    assert_eq!(object.len(), 32);
    let get = |key: &str| object.find_value(key).unwrap();
    assert_eq!(get("integer").as_number(), Some(1234567890.0));
    assert_eq!(get("real").as_number(), Some(-9876.54321));
    assert_eq!(get("E").as_number(), Some(1.23456789e34));
    assert_eq!(get("").as_number(), Some(2.3456789012e76));
    assert_eq!(get("controls").as_str(), Some("\u{8}\u{c}\n\r\t"));
    assert_eq!(get("slash").as_str(), Some("/ & /"));
    assert_eq!(
        get("hex").as_str(),
        Some("\u{0123}\u{4567}\u{89AB}\u{CDEF}\u{abcd}\u{ef4A}")
    );
    assert_eq!(get("quotes").as_str(), Some("&#34; \" %22 0x22 034 &#x22;"));
    assert_eq!(get(" s p a c e d "), get("compact"));
    assert_eq!(
        object.get_value(31).and_then(Value::as_str),
        Some("A key can be any string")
    );

    let reparsed = jsontree::parse(&jsontree::stringify(&value)).unwrap();
    assert_eq!(reparsed, value);
}

#[test_log::test]
fn test_pass2() {
    let mut value = &jsontree::parse(PASS2).unwrap();
    for _ in 0..19 {
        let array = value.as_array().unwrap();
        assert_eq!(array.len(), 1);
        value = &array[0];
    }
    assert_eq!(value.as_str(), Some("Not too deep"));
}

#[test_log::test]
fn test_pass3() {
    let value = jsontree::parse(PASS3).unwrap();
    let inner = value
        .as_object()
        .and_then(|o| o.find_value("JSON Test Pattern pass3"))
        .and_then(Value::as_object)
        .unwrap();
    assert_eq!(inner.len(), 2);
    assert_eq!(
        inner.find_value("In this test").and_then(Value::as_str),
        Some("It is an object.")
    );
}

#[test_log::test]
fn test_fail1_bare_string_root_is_accepted() {
    let value = jsontree::parse(r#""A JSON payload should be an object or array, not a string.""#);
    assert!(value.is_ok());
}

#[test_log::test]
fn test_fail18_deep_nesting_is_accepted() {
    let value = jsontree::parse(r#"[[[[[[[[[[[[[[[[[[[["Too deep"]]]]]]]]]]]]]]]]]]]]"#);
    assert!(value.is_ok());
}
