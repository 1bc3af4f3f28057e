use serde_json::Value;

/// Projects a domain value onto its display text.
///
/// With a field name the text is read off the value's field (objects) or
/// index (arrays); without one the value itself is displayed. Falsy values
/// (`null`, `false`, `0`, `""`) have no text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextGetter {
    field: Option<String>,
}

impl TextGetter {
    /// Displays the value itself.
    pub fn passthrough() -> Self {
        Self::default()
    }

    /// Reads `field` off the value; an empty or missing name is a passthrough.
    pub fn field(field: Option<&str>) -> Self {
        Self {
            field: field.filter(|name| !name.is_empty()).map(ToOwned::to_owned),
        }
    }

    pub fn field_name(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn text(&self, value: &Value) -> Option<String> {
        if is_falsy(value) {
            return None;
        }
        let projected = match &self.field {
            Some(field) => read_field(value, field)?,
            None => value,
        };
        if is_falsy(projected) {
            return None;
        }
        Some(stringify(projected))
    }
}

fn read_field<'a>(value: &'a Value, field: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => map.get(field),
        Value::Array(values) => field.parse::<usize>().ok().and_then(|i| values.get(i)),
        _ => None,
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            // Integral floats display without a fraction: `1.0` reads as "1".
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}
