use clap::Parser;

use sweep::{yield_at_field, RadicalPairModel};

/// Radical-pair singlet yield for one external-field configuration
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// External field magnitude (angular-frequency units)
    #[arg(long, default_value_t = 0.5)]
    b: f64,

    /// Field polar angle from z, in radians
    #[arg(long, default_value_t = 0.0)]
    theta: f64,

    /// Singlet recombination rate
    #[arg(long, default_value_t = 1.0)]
    ks: f64,

    /// Singlet escape (scavenging) rate
    #[arg(long, default_value_t = 0.1)]
    ksc: f64,

    /// Exchange constant J (0 drops the exchange term)
    #[arg(long, default_value_t = 0.0)]
    exchange: f64,

    /// Dipolar coupling constant
    #[arg(long, default_value_t = 1.0)]
    dipolar: f64,
}

fn main() {
    let args = Args::parse();

    let mut model = RadicalPairModel::reference();
    model.k_s = args.ks;
    model.k_sc = args.ksc;
    model.exchange_j = args.exchange;
    model.dipolar_constant = args.dipolar;

    let field = [args.b * args.theta.sin(), 0.0, args.b * args.theta.cos()];

    println!(
        "Radical pair: B = {:.4}, theta = {:.4} rad, k_s = {:.4}, k_sc = {:.4}",
        args.b, args.theta, args.ks, args.ksc
    );

    match yield_at_field(&model, field) {
        Ok(y) => println!("Singlet yield = {:.6}", y),
        Err(err) => {
            eprintln!("yield computation failed: {}", err);
            std::process::exit(1);
        }
    }
}
