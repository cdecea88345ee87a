use rs_split_core::model::partition_generator::{PartitionGenerator, generate};
use rs_split_core::model::partition_request::PartitionRequest;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set RUST_LOG=debug to see the split traces
    env_logger::init();

    // Shortcut: 20 values between -3 and 3 adding up to 1
    let values = generate(1, 20, -3, 3)?;
    println!("generate(1, 20, -3, 3) = {:?}", values);

    // A request can be checked before generating anything
    let request = PartitionRequest::new(100, 3, 0, 10);
    match request.check() {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{:?} -> {}", request, e),
    }
    if let Some(range) = request.reachable_sums() {
        println!("3 values in [0, 10] can only reach sums in {:?}", range);
    }

    // Zero slots is not an empty answer
    match generate(5, 0, 0, 10) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("generate(5, 0, 0, 10) -> {}", e),
    }

    // Equal bounds force every slot
    println!("generate(6, 3, 2, 2) = {:?}", generate(6, 3, 2, 2)?);

    // Tracing is a setting of the generator, not a global switch.
    // Lines go to the 'rs_split::trace' log target.
    let mut generator = PartitionGenerator::new().with_indent("| ");
    generator.trace_on();
    let request = PartitionRequest::new(12, 5, 0, 5);
    println!("traced: {:?}", generator.generate(&request)?);
    generator.trace_off();

    // Same seed, same sequence
    let a = generator.generate_seeded(&request, 2024)?;
    let b = generator.generate_seeded(&request, 2024)?;
    println!("seeded: {:?} == {:?}", a, b);

    // Split a bill of 120 between 7 people, everyone paying 10 to 25
    for i in 0..5 {
        println!("Bill split {}: {:?}", i + 1, generate(120, 7, 10, 25)?);
    }

    Ok(())
}
