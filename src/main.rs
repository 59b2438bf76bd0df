// src/main.rs

use log::{error, info};
use env_logger::Env;
use qrflip::config::QrConfig;
use qrflip::integer_math::modular::ModularArithmetic;
use qrflip::{Result, SquareFinder};

fn main() {
    let config = match QrConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Falling back to default configuration: {}", e);
            QrConfig::default()
        }
    };

    // Initialize the logger
    let env = Env::default()
        .filter_or("QRFLIP_LOG_LEVEL", config.log_level.as_str())
        .write_style_or("QRFLIP_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();

    if let Err(e) = run(&config) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(config: &QrConfig) -> Result<()> {
    let mut finder = SquareFinder::new(&config.engine);

    let (p, q) = finder.generate_distinct_primes(config.prime_digits)?;
    let n = p * q;
    let r = finder.random_unit(p, q)?;
    let x = ModularArithmetic::mul_mod(r, r, n);
    info!("n = {} x {} = {}, x = {}^2 mod n = {}", p, q, n, r, x);

    let roots = finder.square_roots_mod_composite(x as i128, p, q)?;
    info!("Square roots of {}: {}", x, roots);
    for (low, high) in roots.negation_pairs() {
        info!("  pair ({}, {})", low, high);
    }
    Ok(())
}
