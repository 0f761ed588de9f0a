use snowflake_id::{decode_str, GeneratorConfig};

fn main() {
    // Layout is read from SNOWFLAKE_* variables, defaults otherwise
    let config = GeneratorConfig::from_env().unwrap();

    let inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        eprintln!("usage: decode <id> [<id> ...]");
        std::process::exit(2);
    }

    for input in inputs {
        match decode_str(&input, &config) {
            Ok(decoded) => {
                let date = decoded
                    .date()
                    .map(|d| d.to_rfc3339())
                    .unwrap_or_else(|| "out of range".to_string());
                println!(
                    "{}: date={} worker={} datacenter={} sequence={}",
                    decoded.id, date, decoded.worker_id, decoded.datacenter_id, decoded.sequence
                );
            }
            Err(err) => eprintln!("{err}"),
        }
    }
}
