//! Walking a parsed tree without a schema.
//!
//! Run with: cargo run --example dynamic_values

use serde_tinytoml::{get, parse, tinytoml, to_string_pretty, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let root = parse(
        r#"
host = "localhost"
port = 8080
started = 2024-01-01T00:00:00Z
features = ["auth", "logging", { name = "metrics", interval = 15 }]

[[route]]
path = "/"
target = "static"

[[route]]
path = "/api"
target = "backend"
"#,
    )?;

    if let Some(port) = get(&root, &["port"]).and_then(Value::as_integer) {
        println!("port: {}", port);
    }

    if let Some(started) = get(&root, &["started"]).and_then(Value::as_datetime) {
        match started.to_utc() {
            Some(utc) => println!("started: {} ({})", started, utc.format("%A")),
            None => println!("started: {} (not an RFC 3339 timestamp)", started),
        }
    }

    if let Some(Value::Array(routes)) = get(&root, &["route"]) {
        for route in routes {
            let path = route.get_path(&["path"]).and_then(Value::as_str);
            let target = route.get_path(&["target"]).and_then(Value::as_str);
            println!("route {:?} -> {:?}", path, target);
        }
    }

    let expected = tinytoml!({ "name": "metrics", "interval": 15 });
    let features = get(&root, &["features"]).and_then(Value::as_array);
    println!(
        "metrics feature present: {}",
        features.is_some_and(|f| f.contains(&expected))
    );

    println!("\n{}", to_string_pretty(&root));
    Ok(())
}
