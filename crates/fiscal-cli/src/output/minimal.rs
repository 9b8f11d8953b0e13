use serde_json::Value;

/// Key output fields in priority order, one per command family.
const PRIORITY_KEYS: [&str; 6] = [
    "texto",
    "razonCirculante",
    "margenNeto",
    "variacionPorcentual",
    "kpis",
    "meses",
];

/// Print just the headline value from the output.
pub fn print_minimal(value: &Value) {
    let target = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = target {
        for key in PRIORITY_KEYS {
            if let Some(val) = map.get(key) {
                if !val.is_null() {
                    println!("{}", render(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{key}: {}", render(val));
            return;
        }
    }

    println!("{}", render(target));
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) if items.iter().all(Value::is_string) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join("\n"),
        other => other.to_string(),
    }
}
