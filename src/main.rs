//! Benchmark runner for the fast matmul algorithms.
//!
//! Usage: `fastmm <algorithm> [sizes] [levels] [--check]`
//!
//! `sizes` is a comma list of problem sizes, each either `n` (square) or
//! `MxKxN` (e.g. `900x200x200`); `levels` is a comma list of recursion
//! depths (0 = plain GEMM). Five trials per configuration, median
//! reported. `--check` also runs the classical product and prints the
//! error report.

use std::process::ExitCode;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing_subscriber::EnvFilter;

use fastmm::{fast_matmul, lookup, max_relative_diff, names, relative_frobenius_diff, Matrix};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let check = args.iter().any(|a| a == "--check");
    let args: Vec<&String> = args.iter().filter(|a| *a != "--check").collect();

    let Some(algo_name) = args.first() else {
        usage();
        return ExitCode::FAILURE;
    };
    let algo = match lookup(algo_name.as_str()) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("registered algorithms:");
            for n in names() {
                eprintln!("  {n}");
            }
            return ExitCode::FAILURE;
        }
    };

    let sizes = match args.get(1).map(|s| parse_sizes(s.as_str())).unwrap_or_else(|| Ok(vec![(512, 512, 512), (1024, 1024, 1024)])) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("bad size list: {e}");
            return ExitCode::FAILURE;
        }
    };
    let levels_list = match args.get(2).map(|s| parse_levels(s.as_str())).unwrap_or_else(|| Ok(vec![0, 1, 2])) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("bad levels list: {e}");
            return ExitCode::FAILURE;
        }
    };

    let shape = algo.shape();
    println!(
        "{}: <{},{},{}> rank {}{}",
        algo.name(),
        shape.m,
        shape.k,
        shape.n,
        algo.rank(),
        if algo.is_approximate() { " (approximate)" } else { "" },
    );
    println!(
        "{:>6} {:>6} {:>6} {:>7} {:>12} {:>9}{}",
        "m",
        "k",
        "n",
        "levels",
        "median ms",
        "GFLOPS",
        if check { "   max rel diff / rel frob" } else { "" }
    );

    for &(m, k, n) in &sizes {
        for &levels in &levels_list {
            run_one(algo, m, k, n, levels, check);
        }
    }
    ExitCode::SUCCESS
}

fn run_one(algo: &fastmm::Algorithm, m: usize, k: usize, n: usize, levels: usize, check: bool) {
    const TRIALS: usize = 5;
    let mut times = Vec::with_capacity(TRIALS);
    let mut report = String::new();

    for trial in 0..TRIALS {
        let a = random_matrix(m, k, trial as u64);
        let b = random_matrix(k, n, 1000 + trial as u64);
        let mut c = Matrix::<f64>::new(m, n);

        let start = Instant::now();
        fast_matmul(algo, &a, &b, &mut c, levels).expect("shapes are consistent");
        times.push(start.elapsed().as_secs_f64());

        if check && trial == 0 {
            let classical = lookup("classical222").expect("registered");
            let mut c_ref = Matrix::<f64>::new(m, n);
            fast_matmul(classical, &a, &b, &mut c_ref, 0).expect("shapes are consistent");
            report = format!(
                "   {:>12.3e} / {:.3e}",
                max_relative_diff(&c_ref, &c),
                relative_frobenius_diff(&c_ref, &c)
            );
        }
    }

    times.sort_by(|x, y| x.partial_cmp(y).expect("finite times"));
    let median = times[TRIALS / 2];
    let gflops = 2.0 * (m * n * k) as f64 / median / 1e9;
    println!(
        "{m:>6} {k:>6} {n:>6} {levels:>7} {:>12.2} {gflops:>9.2}{report}",
        median * 1e3
    );
}

fn random_matrix(rows: usize, cols: usize, seed: u64) -> Matrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut m = Matrix::new(rows, cols);
    for j in 0..cols {
        for i in 0..rows {
            m.set(i, j, rng.gen_range(-1.0..1.0));
        }
    }
    m
}

fn parse_sizes(s: &str) -> Result<Vec<(usize, usize, usize)>, String> {
    s.split(',')
        .map(|tok| {
            let dims: Vec<usize> = tok
                .split('x')
                .map(|d| d.trim().parse::<usize>().map_err(|e| format!("{tok:?}: {e}")))
                .collect::<Result<_, _>>()?;
            match dims.as_slice() {
                [n] => Ok((*n, *n, *n)),
                [m, k, n] => Ok((*m, *k, *n)),
                _ => Err(format!("{tok:?}: expected n or mxkxn")),
            }
        })
        .collect()
}

fn parse_levels(s: &str) -> Result<Vec<usize>, String> {
    s.split(',')
        .map(|tok| tok.trim().parse::<usize>().map_err(|e| format!("{tok:?}: {e}")))
        .collect()
}

fn usage() {
    eprintln!("usage: fastmm <algorithm> [sizes] [levels] [--check]");
    eprintln!("  sizes   comma list, each `n` or `MxKxN` (default 512,1024)");
    eprintln!("  levels  comma list of recursion depths (default 0,1,2)");
    eprintln!("registered algorithms:");
    for n in names() {
        eprintln!("  {n}");
    }
}
