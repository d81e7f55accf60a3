use agora_g2_compress::arithmetic::AffinePoint;
use agora_g2_compress::curve::{Bls12_381, Bn254, Curve};
use agora_g2_compress::parse::{PointInput, PointOutput};
use agora_g2_compress::CompressedPoint;
use structopt::StructOpt;

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

// NOTE run with e.g. `RUST_LOG=debug` to see why a point gets rejected

#[derive(StructOpt)]
struct Opt {
    #[structopt(long, default_value = "bn254", help = "bn254 or bls12-381")]
    curve: String,
    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt)]
enum Command {
    /// Compress a point given as json
    Compress {
        #[structopt(long, help = "json file with x and y as [real, imaginary] pairs")]
        point: PathBuf,
    },
    /// Decompress a hex encoded point
    Decompress {
        #[structopt(long, help = "96 hex encoded bytes")]
        compressed: CompressedPoint,
    },
}

fn run<C: Curve>(command: Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Compress { point } => {
            let reader = BufReader::new(File::open(point)?);
            let input: PointInput = serde_json::from_reader(reader)?;
            let point: AffinePoint<C> = input.try_into()?;
            println!("{}", point.to_compressed());
        }
        Command::Decompress { compressed } => {
            let point = AffinePoint::<C>::from_compressed(&compressed)?;
            let output = PointOutput::from(&point);
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let _ = env_logger::try_init();
    let opt = Opt::from_args();
    match opt.curve.as_str() {
        "bn254" => run::<Bn254>(opt.command),
        "bls12-381" => run::<Bls12_381>(opt.command),
        other => Err(format!("unsupported curve: {}", other).into()),
    }
}
