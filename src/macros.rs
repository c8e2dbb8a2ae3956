/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// Keys must be string literals. Negative numbers and other multi-token
/// expressions need parentheses.
///
/// ```rust
/// use serde_tinytoml::{tinytoml, parse, Value};
///
/// let expected = tinytoml!({
///     "name": "svc",
///     "ports": [80, 443],
///     "offset": (-5),
///     "tls": { "enabled": true }
/// });
///
/// let root = parse("name = \"svc\"\nports = [80, 443]\noffset = -5\ntls = { enabled = true }").unwrap();
/// assert_eq!(Value::Table(root), expected);
/// ```
#[macro_export]
macro_rules! tinytoml {
    (true) => {
        $crate::Value::Boolean(true)
    };

    (false) => {
        $crate::Value::Boolean(false)
    };

    ([]) => {
        $crate::Value::Array(vec![])
    };

    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::Array(vec![$($crate::tinytoml!($elem)),*])
    };

    ({}) => {
        $crate::Value::Table($crate::Table::new())
    };

    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut table = $crate::Table::new();
        $(
            table.insert($key.to_string(), $crate::tinytoml!($value));
        )*
        $crate::Value::Table(table)
    }};

    ($e:expr) => {
        $crate::Value::from($e)
    };
}
