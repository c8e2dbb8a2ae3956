//! Deserialize configuration text straight into Rust types.
//!
//! Run with: cargo run --example typed_config

use serde::Deserialize;
use serde_tinytoml::from_str;
use std::error::Error;

#[derive(Debug, Deserialize)]
struct Database {
    url: String,
    pool_size: u32,
    timeout: f64,
}

#[derive(Debug, Deserialize)]
struct Replica {
    host: String,
    lag_budget: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct Config {
    name: String,
    deployed: String,
    database: Database,
    replica: Vec<Replica>,
}

const CONFIG: &str = r#"
name = "inventory"
deployed = 2024-03-01T12:00:00Z

[database]
url = "postgres://localhost/inventory"
pool_size = 16
timeout = 2.5

[[replica]]
host = "replica-a"
lag_budget = 30

[[replica]]
host = "replica-b"
"#;

fn main() -> Result<(), Box<dyn Error>> {
    let config: Config = from_str(CONFIG)?;
    println!("{:#?}", config);

    for replica in &config.replica {
        match replica.lag_budget {
            Some(budget) => println!("{} tolerates {}s of lag", replica.host, budget),
            None => println!("{} uses the default lag budget", replica.host),
        }
    }

    Ok(())
}
