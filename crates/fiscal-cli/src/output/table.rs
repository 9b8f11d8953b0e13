use fiscal_core::format::{format_number, DEFAULT_DECIMALS};
use rust_decimal::Decimal;
use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Render output as a two-column field/value table. Envelope outputs
/// (result + warnings + methodology) get their extra sections printed
/// after the table; nested structures contribute dotted keys.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) if map.contains_key("result") => {
            print_fields(&flatten(&map["result"]));

            if let Some(Value::Array(warnings)) = map.get("warnings") {
                if !warnings.is_empty() {
                    println!("\nWarnings:");
                    for warning in warnings {
                        if let Value::String(s) = warning {
                            println!("  - {s}");
                        }
                    }
                }
            }

            if let Some(Value::String(methodology)) = map.get("methodology") {
                println!("\nMethodology: {methodology}");
            }
        }
        Value::Object(_) => print_fields(&flatten(value)),
        Value::Array(items) => {
            for item in items {
                print_fields(&flatten(item));
            }
        }
        other => println!("{other}"),
    }
}

fn print_fields(fields: &[(String, Value)]) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, leaf) in fields {
        builder.push_record([key.as_str(), pretty_leaf(leaf).as_str()]);
    }
    println!("{}", Table::from(builder));
}

/// Decimal amounts arrive serialized as JSON strings; render them grouped
/// and padded the way the dashboard does. Everything else passes through.
/// JSON numbers (years, counters) are integers and stay unformatted.
fn pretty_leaf(leaf: &Value) -> String {
    match leaf {
        Value::String(s) => match s.parse::<Decimal>() {
            Ok(d) => format_number(d, DEFAULT_DECIMALS),
            Err(_) => s.clone(),
        },
        other => render_scalar(other),
    }
}

/// Depth-first flattening: nested objects contribute dotted keys, scalar
/// arrays join with commas, arrays of objects get an indexed key each.
pub(crate) fn flatten(value: &Value) -> Vec<(String, Value)> {
    let mut out = Vec::new();
    flatten_into(String::new(), value, &mut out);
    out
}

fn flatten_into(prefix: String, value: &Value, out: &mut Vec<(String, Value)>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let key = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(key, val, out);
            }
        }
        Value::Array(items) if items.iter().all(|v| !v.is_object() && !v.is_array()) => {
            let joined = items
                .iter()
                .map(render_scalar)
                .collect::<Vec<_>>()
                .join(", ");
            out.push((prefix, Value::String(joined)));
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten_into(format!("{prefix}[{i}]"), item, out);
            }
        }
        scalar => out.push((prefix, scalar.clone())),
    }
}

pub(crate) fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}
