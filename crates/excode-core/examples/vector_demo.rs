//! Tag a small error tree and print its error-code vector
//!
//! Run with `RUST_LOG=excode_core=debug` to see the code-store events.

use excode_core::logging_facility::{init, Profile};
use excode_core::{CodeError, ErrorCodeExt, ExError, ExErrorKind};

fn replica_failure(replica: &str, code: &str) -> Result<ExError, CodeError> {
    ExError::new(ExErrorKind::Timeout)
        .with_op("replicate")
        .with_message(format!("replica {replica} did not acknowledge"))
        .with_error_code(code)
}

fn main() -> Result<(), CodeError> {
    init(Profile::Development);

    let disk = ExError::new(ExErrorKind::Io)
        .with_message("no space left on device")
        .with_error_code("DiskFull")?;
    let eu = ExError::new(ExErrorKind::Internal)
        .with_op("replicate")
        .with_source(disk)
        .with_error_code("ReplicaWriteFailed")?;

    let fanout = ExError::composite(
        ExErrorKind::Aggregate,
        [
            eu,
            replica_failure("us-east", "ReplicaTimeout")?,
            ExError::new(ExErrorKind::Concurrency).with_message("untagged"),
        ],
    )
    .with_error_code("QuorumLost")?;

    let mut root = ExError::new(ExErrorKind::ExternalService)
        .with_op("save_order")
        .with_source(fanout);
    root.add_error_code("OrderNotSaved")?;

    println!("error: {root}");
    println!(
        "codes: {}",
        root.error_codes_vector().unwrap_or_else(|| "<none>".into())
    );
    // codes: OrderNotSaved -> QuorumLost -> [ReplicaWriteFailed -> DiskFull, ReplicaTimeout]
    Ok(())
}
