use crate::ast;

/// Renders a default value back into GraphQL literal syntax
/// (`"text"`, `10`, `[A, B]`, `{first: 10}`).
pub(crate) fn to_graphql_string(value: &ast::query::Value) -> String {
    use ast::query::Value;
    match value {
        Value::Variable(name) => format!("${name}"),
        Value::Int(num) => num.as_i64()
            .map(|n| n.to_string())
            .unwrap_or_default(),
        Value::Float(num) if num.is_finite() && num.fract() == 0.0 =>
            format!("{num:.1}"),
        Value::Float(num) => num.to_string(),
        Value::String(s) => format!("{s:?}"),
        Value::Boolean(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Enum(name) => name.to_owned(),
        Value::List(items) => format!(
            "[{}]",
            items.iter()
                .map(to_graphql_string)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Object(fields) => format!(
            "{{{}}}",
            fields.iter()
                .map(|(name, value)| format!("{name}: {}", to_graphql_string(value)))
                .collect::<Vec<_>>()
                .join(", "),
        ),
    }
}
