use serde::Serialize;

/// Return true if a key name likely holds an email address.
fn is_email_key(key: &str) -> bool {
    key.to_lowercase().contains("email")
}

/// Return true if a key name likely holds a phone number.
fn is_phone_key(key: &str) -> bool {
    let k = key.to_lowercase();
    k.contains("phone") || k.contains("msisdn") || k == "mobile"
}

/// Obscure the local part of an email, keeping the first character and the
/// domain.
fn mask_email(value: &str) -> String {
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first_len = local.chars().next().map_or(0, char::len_utf8);
            format!("{}***@{domain}", &local[..first_len])
        }
        _ => "***".to_string(),
    }
}

/// Obscure all but the last four digits of a phone number.
fn mask_phone(value: &str) -> String {
    let len = value.len();
    if len > 4 {
        "*".repeat(len - 4) + &value[len - 4..]
    } else {
        value.to_string()
    }
}

pub fn secure_serializable(v: impl Serialize) -> serde_json::Value {
    let value = serde_json::to_value(v).expect("serialization is infallible");
    secure_value(&value)
}

pub fn secure_value(v: &serde_json::Value) -> serde_json::Value {
    use serde_json::Value;

    match v {
        Value::Object(map) => {
            let mut new = serde_json::Map::with_capacity(map.len());
            for (k, val) in map {
                let is_email = is_email_key(k);
                let is_phone = is_phone_key(k);
                let new_val = match val {
                    Value::String(s) if is_email => Value::String(mask_email(s)),
                    Value::String(s) if is_phone => Value::String(mask_phone(s)),
                    Value::Number(n) if is_phone => {
                        let s = n.to_string();
                        Value::String(mask_phone(&s))
                    }
                    _ => secure_value(val),
                };
                new.insert(k.clone(), new_val);
            }
            Value::Object(new)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(secure_value).collect()),
        // primitives that are not objects: leave them as-is
        other => other.clone(),
    }
}
