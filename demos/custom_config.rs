use snowflake_id::{GeneratorConfig, IdGenerator};

fn main() {
    // Many workers, few datacenters: 10 worker bits, 2 datacenter bits
    let config = GeneratorConfig::builder()
        .epoch(1704067200000) // January 1, 2024 UTC
        .worker_id_bits(10)
        .datacenter_id_bits(2)
        .sequence_bits(10)
        .build()
        .unwrap();

    let mut generator = IdGenerator::with_config(700, 3, config).unwrap();

    println!("Generator configuration:");
    println!("  Timestamp bits: {}", config.timestamp_bits());
    println!("  Max worker ID: {}", config.max_worker_id());
    println!("  Max datacenter ID: {}", config.max_datacenter_id());
    println!("  Max sequence per ms: {}", config.max_sequence());

    let id = generator.next_id().unwrap();
    let decoded = generator.decoder().decode(id);

    println!("\nGenerated ID: {}", id);
    println!("Fields:");
    println!("  Timestamp: {} ms since epoch", decoded.timestamp_offset);
    println!("  Worker ID: {} (of {})", decoded.worker_id, config.max_worker_id());
    println!("  Datacenter ID: {} (of {})", decoded.datacenter_id, config.max_datacenter_id());
    println!("  Sequence: {} (of {})", decoded.sequence, config.max_sequence());
}
