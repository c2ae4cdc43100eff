use clap::Parser;

use sweep::{angle_sweep, write_csv, RadicalPairModel};

/// Singlet yield vs field orientation (compass anisotropy curve)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Field magnitude
    #[arg(long, default_value_t = 0.5)]
    b: f64,

    /// Number of sweep steps over [0, pi]
    #[arg(long, default_value_t = 180)]
    steps: usize,

    /// Singlet recombination rate
    #[arg(long, default_value_t = 1.0)]
    ks: f64,

    /// Singlet escape (scavenging) rate
    #[arg(long, default_value_t = 0.1)]
    ksc: f64,

    /// Output CSV path
    #[arg(long, default_value = "angle_sweep.csv")]
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

    let rows = match angle_sweep(&model, args.b, args.steps) {
        Ok(rows) => rows,
        Err(err) => {
            eprintln!("angle sweep failed: {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = write_csv(&args.out, "theta,singlet_yield", &rows) {
        eprintln!("Failed to write CSV to {}: {}", args.out, err);
    }

    let y_max = rows.iter().map(|r| r.1).fold(f64::MIN, f64::max);
    let y_min = rows.iter().map(|r| r.1).fold(f64::MAX, f64::min);
    println!(
        "Angle sweep: {} points, anisotropy = {:.3e} (max {:.6}, min {:.6})",
        rows.len(),
        y_max - y_min,
        y_max,
        y_min
    );
}
