use clap::Parser;

use sweep::{field_sweep, write_csv, RadicalPairModel};

/// Singlet yield vs external field magnitude
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Maximum field magnitude
    #[arg(long, default_value_t = 3.0)]
    b_max: f64,

    /// Number of sweep steps
    #[arg(long, default_value_t = 200)]
    steps: usize,

    /// Singlet recombination rate
    #[arg(long, default_value_t = 1.0)]
    ks: f64,

    /// Singlet escape (scavenging) rate
    #[arg(long, default_value_t = 0.1)]
    ksc: f64,

    /// Output CSV path
    #[arg(long, default_value = "field_sweep.csv")]
    out: String,

    /// Number of Rayon worker threads (0 = Rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,
}

fn main() {
    let args = Args::parse();

    if args.steps == 0 {
        eprintln!("steps must be > 0");
        std::process::exit(1);
    }

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .expect("Failed to build Rayon thread pool");
    }

    let mut model = RadicalPairModel::reference();
    model.k_s = args.ks;
    model.k_sc = args.ksc;

    let rows = match field_sweep(&model, args.b_max, args.steps) {
        Ok(rows) => rows,
        Err(err) => {
            eprintln!("field sweep failed: {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = write_csv(&args.out, "field,singlet_yield", &rows) {
        eprintln!("Failed to write CSV to {}: {}", args.out, err);
    }

    let (b_min, y_min) = rows
        .iter()
        .copied()
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
        .unwrap();
    println!(
        "Field sweep: {} points, min yield = {:.6} at B = {:.4}",
        rows.len(),
        y_min,
        b_min
    );
}
