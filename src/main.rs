use std::env;
use std::process;

use log::{error, info};
use rand::{thread_rng, Rng};
use rug::{rand::RandState, Integer};

use tonelli::{curve::PRESETS, AffinePoint, CurveParams, Error};

const DEFAULT_X: &str = "2021";

// Usage: tonelli [curve] [x | random]
fn run(args: &[String]) -> Result<AffinePoint, Error> {
    let name = args.first().map_or(PRESETS[0].0, String::as_str);
    let curve = CurveParams::named(name)?;
    info!("using curve {} with p = {}", curve.name(), curve.p());

    let x = match args.get(1).map_or(DEFAULT_X, String::as_str) {
        "random" => {
            let mut rng = RandState::new();
            rng.seed(&Integer::from(thread_rng().gen::<u64>()));
            Integer::from(curve.p().random_below_ref(&mut rng))
        }
        s => s.parse::<Integer>().map_err(|_| Error::Parse(s.to_string()))?,
    };
    info!("x = {}", x);

    curve.decompress(&x)
}

fn main() {
    if env::var_os("RUST_LOG").is_none() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    match run(&args) {
        Ok(point) => println!("{}", point),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
