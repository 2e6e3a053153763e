use std::io::{self, BufWriter};
use std::process;

use radix_elgamal::protocol;
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut output = BufWriter::new(stdout.lock());
    let mut rng = StdRng::from_entropy();

    if let Err(e) = protocol::run(&mut input, &mut output, &mut rng) {
        eprintln!("radix-elgamal: {e}");
        process::exit(1);
    }
}
