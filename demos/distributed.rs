use std::collections::HashSet;
use std::thread;
use std::time::Duration;

use rand::Rng;
use snowflake_id::{identity, GeneratorConfig, IdGenerator};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let config = GeneratorConfig::default();
    let (_, datacenter_id) = identity::process_identity();
    println!("Datacenter ID derived for this host: {datacenter_id}");

    // Each producer thread owns a generator with a distinct worker ID
    let mut handles = vec![];
    for worker_id in 0..4u64 {
        handles.push(thread::spawn(move || {
            let mut generator = IdGenerator::with_config(worker_id, datacenter_id, config).unwrap();
            let mut rng = rand::rng();
            let mut ids = Vec::new();

            for i in 0..5 {
                let id = generator.next_id().unwrap();
                let decoded = generator.decoder().decode(id);
                println!(
                    "Worker {} generated ID {} (ts={}, dc={}, seq={})",
                    worker_id, i, decoded.timestamp_offset, decoded.datacenter_id, decoded.sequence
                );
                ids.push(id);

                // Random delay to simulate work
                thread::sleep(Duration::from_millis(rng.random_range(0..=9)));
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(all_ids.insert(id), "Duplicate ID generated!");
        }
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());
}
