use serde::Serialize;
use serde_json::{Map, Value, json};

const STRIPPED_KEYS: [&str; 8] = [
    "$schema",
    "$id",
    "$ref",
    "title",
    "definitions",
    "additionalProperties",
    "default",
    "examples",
];

/// Rewrites a schemars schema into the OpenAPI subset accepted by Gemini's
/// `responseSchema`: references are inlined, `["T", "null"]` type arrays
/// become `nullable`, and unsupported keywords are dropped.
pub fn to_response_schema<T: Serialize>(root: T) -> serde_json::Result<Value> {
    let mut root = serde_json::to_value(root)?;

    let definitions = root
        .get("definitions")
        .and_then(Value::as_object)
        .cloned()
        .unwrap_or_default();

    normalize(&mut root, &definitions, 0);
    Ok(root)
}

fn normalize(node: &mut Value, definitions: &Map<String, Value>, depth: usize) {
    if depth > 16 {
        *node = json!({ "type": "object", "nullable": true });
        return;
    }

    let target = node
        .get("$ref")
        .and_then(Value::as_str)
        .and_then(|r| r.rsplit('/').next())
        .map(str::to_string);
    if let Some(name) = target {
        *node = match definitions.get(&name) {
            Some(def) => def.clone(),
            None => json!({ "type": "object", "description": "Unresolvable reference" }),
        };
        normalize(node, definitions, depth + 1);
        return;
    }

    let Value::Object(map) = node else {
        return;
    };

    for key in STRIPPED_KEYS {
        map.remove(key);
    }

    if let Some(Value::Array(types)) = map.get("type").cloned() {
        let concrete: Vec<&Value> = types.iter().filter(|t| t.as_str() != Some("null")).collect();
        if let Some(first) = concrete.first() {
            map.insert("type".into(), (*first).clone());
        }
        if concrete.len() < types.len() {
            map.insert("nullable".into(), json!(true));
        }
    }

    if let Some(Value::Object(props)) = map.get_mut("properties") {
        for prop in props.values_mut() {
            normalize(prop, definitions, depth + 1);
        }
    }
    if let Some(items) = map.get_mut("items") {
        normalize(items, definitions, depth + 1);
    }
    for key in ["allOf", "anyOf", "oneOf"] {
        if let Some(Value::Array(branches)) = map.get_mut(key) {
            for branch in branches.iter_mut() {
                normalize(branch, definitions, depth + 1);
            }
        }
    }
}
