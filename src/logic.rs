use crate::context::Options;
use crate::errors::Result;
use serde_json::{Map, Value};

/// `{"var": field}`
pub fn var(field: &str) -> Value {
    single("var", Value::from(field))
}

/// `{op: [args...]}`
pub fn apply(op: &str, args: Vec<Value>) -> Value {
    single(op, Value::Array(args))
}

/// `{"!": node}`; the operand is not wrapped in an array.
pub fn negate(node: Value) -> Value {
    single("!", node)
}

fn single(key: &str, value: Value) -> Value {
    let mut map = Map::with_capacity(1);
    map.insert(key.to_string(), value);
    Value::Object(map)
}

/// Serialize a finished tree according to `opts`.
pub fn render(node: &Value, opts: &Options) -> Result<String> {
    let text = if opts.pretty {
        serde_json::to_string_pretty(node)?
    } else {
        serde_json::to_string(node)?
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn node_shapes() {
        assert_eq!(var("A"), json!({"var": "A"}));
        assert_eq!(apply("==", vec![var("A"), json!("1")]), json!({"==": [{"var": "A"}, "1"]}));
        assert_eq!(negate(var("A")), json!({"!": {"var": "A"}}));
    }

    #[test]
    fn compact_and_pretty_render() {
        let node = apply("in", vec![json!("x"), var("A")]);
        let compact = render(&node, &Options::default().compact()).unwrap();
        assert_eq!(compact, r#"{"in":["x",{"var":"A"}]}"#);
        let pretty = render(&node, &Options::default()).unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(serde_json::from_str::<Value>(&pretty).unwrap(), node);
    }
}
