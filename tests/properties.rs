use criteria_jsonlogic as cjl;
use proptest::prelude::*;
use serde_json::Value;

const ROOT_KEYS: [&str; 13] = [
    "==", "!=", ">", "<", ">=", "<=", "!", "and", "or", "in", "startsWith", "endsWith", "var",
];

fn scalars(node: &Value, out: &mut Vec<String>) {
    match node {
        Value::String(s) => out.push(s.clone()),
        Value::Array(items) => items.iter().for_each(|v| scalars(v, out)),
        Value::Object(map) => map.iter().filter(|(k, _)| *k != "var").for_each(|(_, v)| scalars(v, out)),
        _ => {}
    }
}

fn field() -> impl Strategy<Value = String> {
    "F[A-Za-z0-9_]{0,8}"
}

fn value() -> impl Strategy<Value = String> {
    "v[a-z0-9]{0,9}"
}

// Opening and closing delimiters are drawn independently, so they may differ.
fn delim() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["", "'", "\"", "#", "''", "#'", "\"'", "##"])
}

fn quote() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["", "'", "\"", "''", "\"'", "'\""])
}

fn comparison() -> impl Strategy<Value = String> {
    (
        field(),
        prop::sample::select(vec!["=", "<>", ">", "<", ">=", "<="]),
        value(),
        delim(),
        delim(),
    )
        .prop_map(|(field, op, value, open, close)| format!("[{field}] {op} {open}{value}{close}"))
}

fn call() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec![
            "contains", "StartsWith", "endswith", "isnull", "IsNotNull", "isnullorempty",
        ]),
        field(),
        value(),
        quote(),
        quote(),
        prop::sample::select(vec!["", " ", "  "]),
    )
        .prop_map(|(name, field, value, open, close, ws)| {
            if ["contains", "startswith", "endswith"].contains(&name.to_lowercase().as_str()) {
                format!("{name}([{field}],{ws}{open}{value}{close})")
            } else {
                format!("{name}([{field}])")
            }
        })
}

fn date_literal() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["#", "##", "###"]),
        "[0-9]{4}-[0-9]{2}-[0-9]{2}",
        prop::sample::select(vec!["#", "##", "###"]),
    )
        .prop_map(|(open, date, close)| format!("{open}{date}{close}"))
}

fn atom() -> impl Strategy<Value = String> {
    prop_oneof![comparison(), call(), date_literal()]
}

fn criteria() -> impl Strategy<Value = String> {
    atom().prop_recursive(3, 16, 2, |inner| {
        prop_oneof![
            (inner.clone(), prop::sample::select(vec!["and", "OR", "And"]), inner.clone())
                .prop_map(|(l, c, r)| format!("{l} {c} {r}")),
            inner.clone().prop_map(|e| format!("not ({e})")),
            inner.prop_map(|e| format!("( {e} )")),
        ]
    })
}

proptest! {
    #[test]
    fn accepted_roots_have_one_known_key(input in criteria()) {
        let node = cjl::to_logic(&input).unwrap();
        // A lone date literal is a bare string.
        if let Some(map) = node.as_object() {
            prop_assert_eq!(map.len(), 1);
            let key = map.keys().next().unwrap();
            prop_assert!(ROOT_KEYS.contains(&key.as_str()), "{}", key);
        } else {
            prop_assert!(node.is_string(), "{}", node);
        }
    }

    #[test]
    fn stripped_scalars_have_no_delimiters(input in criteria()) {
        let node = cjl::to_logic(&input).unwrap();
        let mut values = Vec::new();
        scalars(&node, &mut values);
        for v in values {
            prop_assert!(!v.starts_with(['#', '\'', '"']) && !v.ends_with(['#', '\'', '"']), "{}", v);
        }
    }

    #[test]
    fn conversion_is_deterministic_and_valid_json(input in criteria()) {
        let first = cjl::convert(&input).unwrap();
        let second = cjl::convert(&input).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert!(serde_json::from_str::<Value>(&first).is_ok());
    }
}
