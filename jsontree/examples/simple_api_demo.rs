// SPDX-License-Identifier: Apache-2.0

// Parses a document, edits it in place and writes it back out

use jsontree::{ParseError, Value, ValueType};

fn describe(value: &Value, indent: usize) {
    let pad = "  ".repeat(indent);
    match value.value_type() {
        ValueType::Array => {
            let array = value.as_array().into_iter().flatten();
            println!("{}Array", pad);
            for element in array {
                describe(element, indent + 1);
            }
        }
        ValueType::Object => {
            println!("{}Object", pad);
            for member in value.as_object().into_iter().flatten() {
                println!("{}  Key: {:?}", pad, String::from_utf8_lossy(member.key()));
                describe(member.value(), indent + 2);
            }
        }
        ValueType::String => println!("{}String: {:?}", pad, value.as_str()),
        ValueType::Number => println!("{}Number: {}", pad, value),
        ValueType::Boolean => println!("{}Bool: {}", pad, value),
        ValueType::Null => println!("{}Null", pad),
    }
}

fn main() -> Result<(), ParseError> {
    let json = r#"{"name": "value", "number": 42, "flag": true, "list": [1.5, "two", null]}"#;
    println!("Input: {}", json);

    let mut doc = jsontree::parse(json)?;
    describe(&doc, 0);

    if let Some(object) = doc.as_object_mut() {
        if let Some(flag) = object.find_value_mut("flag") {
            flag.set_boolean(false);
        }
        if let Some(index) = object.find_index("number") {
            object.remove(index);
        }
        object.set_value("added").set_array(2).push(Value::from("x"));
    }

    println!();
    println!("Output: {}", doc);

    match jsontree::parse(r#"{"broken": [1, 2}"#) {
        Ok(_) => println!("unexpectedly parsed"),
        Err(err) => println!("Rejected as expected: {}", err),
    }
    Ok(())
}
