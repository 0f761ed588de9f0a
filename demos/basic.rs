use snowflake_id::{IdGenerator, IdDecoder};

fn main() {
    // Create a generator for worker 1 in datacenter 1
    let mut generator = IdGenerator::new(1, 1).unwrap();
    let decoder = generator.decoder();

    // Generate some IDs
    let id1 = generator.next_id().unwrap();
    let id2 = generator.next_id().unwrap();
    let id3 = generator.next_id().unwrap();

    println!("Generated IDs (strictly increasing):");
    print_id(id1, &decoder);
    print_id(id2, &decoder);
    print_id(id3, &decoder);

    // Or extract fields individually
    println!("\nFields of ID2 (extracted individually):");
    println!("  Timestamp: {} ms since epoch", decoder.timestamp_offset(id2));
    println!("  Datacenter ID: {}", decoder.datacenter_id(id2));
    println!("  Worker ID: {}", decoder.worker_id(id2));
    println!("  Sequence: {}", decoder.sequence(id2));
}

fn print_id(id: u64, decoder: &IdDecoder) {
    let decoded = decoder.decode(id);
    let date = decoded
        .date()
        .map(|d| d.to_rfc3339())
        .unwrap_or_else(|| "out of range".to_string());

    println!(
        "  ID: {id}, Timestamp: {}, Human date: {date}, Worker: {}, Datacenter: {}, Sequence: {}",
        decoded.timestamp_ms, decoded.worker_id, decoded.datacenter_id, decoded.sequence
    );
}
