use std::fmt::Display;
use std::io::BufRead;

use anyhow::Result;
use log::LevelFilter;

use math::{
    vec::Vec2,
    mat::Mat2,
};

mod config;
mod random;

use config::Config;
use random::{rand_float, rand_int_f};

fn show<T: Display>(value: T, precision: Option<usize>) -> String {
    match precision {
        Some(prec) => format!("{:.prec$}", value, prec = prec),
        None => format!("{}", value),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Warn)
        .parse_env(env_logger::Env::default().filter_or("MATRIX_WALKTHROUGH_LOG", "info"))
        .init();

    let config = Config::from_matches(&config::command().get_matches());
    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("seed {seed}");
    log::debug!("{config:?}");

    let mut rng = random::rng(seed);
    let p = config.precision;

    // Doubling the x coordinate while leaving y alone is the map
    // f(x, y) = (2x, y), written as a matrix acting on a column vector.
    let m = Mat2::new(2., 0., 0., 1.);
    let x = Vec2::new(rand_int_f(&mut rng, -10, 10), rand_int_f(&mut rng, -10, 10));
    println!("x = {x}");
    print!("m =\n{m}");
    println!("m * x = {}", m * x);

    // A matrix is a linear map: A(sx + u) = s(Ax) + Au.
    let a = Mat2::new(
        rand_int_f(&mut rng, -10, 10), rand_int_f(&mut rng, -10, 10),
        rand_int_f(&mut rng, -10, 10), rand_int_f(&mut rng, -10, 10),
    );
    let u = Vec2::new(rand_int_f(&mut rng, -10, 10), rand_int_f(&mut rng, -10, 10));
    let s = rand_float(&mut rng, -10., 10.);
    print!("A =\n{a}");
    println!("u = {u}, s = {}", show(s, p));
    let lhs = a * (s * x + u);
    let rhs = s * (a * x) + a * u;
    println!("A*(sx + u) = {}", show(lhs, p));
    println!("s*(A*x) + A*u = {}", show(rhs, p));
    if lhs != rhs {
        log::debug!("linearity sides differ by rounding: {}", lhs - rhs);
    }

    // A*x is a linear combination of the columns of A, weighted by the
    // components of x. Compare it with the row-by-row expansion.
    let by_rows = Vec2::new(
        a[(0, 0)] * x.x + a[(0, 1)] * x.y,
        a[(1, 0)] * x.x + a[(1, 1)] * x.y,
    );
    let by_columns = x.x * a.column(0)? + x.y * a.column(1)?;
    if by_rows == by_columns {
        println!("The formulations are equivalent!");
    } else {
        log::warn!("row expansion {by_rows} != column combination {by_columns}");
    }

    // Row vector times matrix is not the same product...
    println!("A*x = {}", a * x);
    println!("x*A = {}", x * a);

    // ...unless the matrix is transposed, since (AB)^T = B^T A^T.
    println!("A*x (as a column vector) = x*A^T (as a row vector) = {}", x * a.transpose());

    if config.pause {
        println!("\nPress Enter to exit . . . ");
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
    }

    Ok(())
}
