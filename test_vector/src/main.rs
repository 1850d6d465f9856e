use pixel_param::{write_atomic, write_param, PubParam};
use std::process;
use tracing::{error, info};
use tracing_subscriber::{filter::EnvFilter, fmt::Subscriber};

const PLAIN_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/test_vector/param_plain.txt");
const BIN_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/test_vector/param_bin.txt");

// This function generates the `known answer test` files for the default
// public parameters:
// * data in _plain.txt files are stored in plain mode
// * data in _bin.txt files are stored in serialized (uncompressed) mode
fn generate() -> Result<(), pixel_param::PixelError> {
    let pp = PubParam::init_without_seed()?;
    write_atomic(PLAIN_PATH, format!("{:?}", pp).as_bytes())?;
    write_param(BIN_PATH, &pp)?;
    Ok(())
}

fn main() {
    Subscriber::builder()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = generate() {
        error!("failed to generate the test vectors: {}", e);
        process::exit(1);
    }
    info!("A `known answer test` file is generated in {}!", BIN_PATH);
}
