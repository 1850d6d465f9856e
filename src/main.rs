use gumdrop::Options;
use pixel_param::{write_atomic, HashId, ParamConfig, PixelError, PixelSerDes, PubParam};
use sha2::{Digest, Sha256};
use std::{process, time::Instant};
use tracing::{error, info};
use tracing_subscriber::{
    filter::EnvFilter,
    fmt::{time::ChronoUtc, Subscriber},
};

#[derive(Debug, Options, Clone)]
struct ParamOpts {
    #[options(help = "print help message")]
    help: bool,
    #[options(help = "the parameter file to be created", default = "param_bin.txt")]
    output: String,
    #[options(
        help = "the base configuration: canonical (sha512, SHA512 IV) or legacy-pi (sha256, digits of pi)",
        default = "canonical"
    )]
    preset: String,
    #[options(help = "override the seed with a hex string of at least 32 bytes")]
    seed_hex: Option<String>,
    #[options(help = "override the HKDF hash function: sha256 or sha512")]
    hash: Option<HashId>,
    #[options(help = "override the ciphersuite id")]
    ciphersuite: Option<u8>,
    #[options(help = "override the depth d; hlist has d+1 elements")]
    depth: Option<usize>,
    #[options(help = "write the group elements compressed")]
    compressed: bool,
}

fn config_from_opts(opts: &ParamOpts) -> Result<ParamConfig, PixelError> {
    let mut config = match opts.preset.as_str() {
        "canonical" => ParamConfig::default(),
        "legacy-pi" => ParamConfig::legacy_pi(),
        other => {
            return Err(PixelError::Configuration(format!(
                "Unknown preset {}, expected canonical or legacy-pi",
                other
            )))
        }
    };
    if let Some(seed) = &opts.seed_hex {
        let seed = hex::decode(seed.trim())
            .map_err(|e| PixelError::Configuration(format!("seed is not a hex string: {}", e)))?;
        config = config.with_seed(seed);
    }
    if let Some(hash) = opts.hash {
        config = config.with_hash(hash);
    }
    if let Some(ciphersuite) = opts.ciphersuite {
        config = config.with_ciphersuite(ciphersuite);
    }
    if let Some(depth) = opts.depth {
        config = config.with_depth(depth);
    }
    Ok(config)
}

fn execute(opts: &ParamOpts) -> Result<(), PixelError> {
    let config = config_from_opts(opts)?;
    let pp = PubParam::init(&config)?;

    let mut buf: Vec<u8> = Vec::with_capacity(pp.size(opts.compressed));
    pp.serialize(&mut buf, opts.compressed)?;
    write_atomic(&opts.output, &buf)?;

    let digest = Sha256::digest(&buf);
    info!("SHA-256 of `{}`: {}", opts.output, hex::encode(digest));
    Ok(())
}

fn main() {
    Subscriber::builder()
        .with_target(false)
        .with_timer(ChronoUtc::rfc3339())
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let opts: ParamOpts = ParamOpts::parse_args_default_or_exit();

    let now = Instant::now();
    if let Err(e) = execute(&opts) {
        error!("parameter generation failed: {}", e);
        process::exit(1);
    }
    info!("Executing {:?} took: {:?}", opts, now.elapsed());
}
