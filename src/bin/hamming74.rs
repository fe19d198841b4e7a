use std::process;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use hamming74::coding::hamming::{DATA_BITS, WORD_BITS};
use hamming74::{bits, Hamming74, Status};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "(7, 4) Hamming code demo",
    long_about = "Encodes 4 data bits, flips codeword bits to simulate a noisy channel, \
                  then decodes and reports whether the data was recovered"
)]
struct Args {
    /// Data bits to encode, e.g. 1011
    #[arg(long, default_value = "1011")]
    data: String,

    /// Codeword bit (0-6) to flip before decoding; may be repeated
    #[arg(long = "flip", default_values_t = vec![1usize])]
    flips: Vec<usize>,

    /// Verify every data vector against every single-bit error instead
    #[arg(long)]
    exhaustive: bool,
}

type DemoResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Parse a string of digits into a bit vector. Digits other than 0/1 are passed through
/// so the codec can reject them.
fn parse_bits(s: &str) -> DemoResult<Vec<u8>> {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => Ok(d as u8),
            None => Err(format!("'{}' is not a digit", c).into()),
        })
        .collect()
}

/// Run a single encode/flip/decode round and return whether the data was recovered.
fn demo(code: &Hamming74, data: &[u8], flips: &[usize]) -> DemoResult<bool> {
    if let Some(&bad) = flips.iter().find(|&&f| f >= WORD_BITS) {
        return Err(format!("flip index {} is outside the {}-bit codeword", bad, WORD_BITS)
            .into());
    }

    let word = code.encode(data)?;
    println!("data (4 bits):     {:?}", data);
    println!("encoded (7 bits):  {:?}", word);

    let mut recv = word;
    for &f in flips {
        recv[f] = 1 - recv[f];
    }
    println!("received:          {:?} (flipped {:?})", recv, flips);

    let decoded = code.decode(&recv)?;
    println!("decoded:           {:?}", decoded.data);

    match decoded.status {
        Status::NoError => println!("status:            no error"),
        Status::ErrorCorrected(p) => println!("status:            error at index {}", p),
        Status::Uncorrectable => println!("status:            uncorrectable error"),
    }

    let recovered = decoded.data[..] == data[..];
    println!("recovered:         {}", recovered);

    if !recovered && flips.len() > 1 {
        warn!(flips = flips.len(), "more than one flipped bit can't be corrected");
    }

    Ok(recovered || flips.len() > 1)
}

/// Check every data vector decodes cleanly and survives every single-bit error.
fn exhaustive(code: &Hamming74) -> DemoResult<bool> {
    let mut failures = 0;

    for d in 0..1u8 << DATA_BITS {
        let mut data = [0; DATA_BITS];
        bits::unpack(d, &mut data);

        let word = code.encode(&data)?;
        let clean = code.decode(&word)?;

        if clean.data != data || clean.status != Status::NoError {
            error!(?data, ?clean, "clean word failed to decode");
            failures += 1;
        }

        for p in 0..WORD_BITS {
            let mut recv = word;
            recv[p] ^= 1;

            let decoded = code.decode(&recv)?;

            if decoded.data != data || decoded.status != Status::ErrorCorrected(p) {
                error!(?data, position = p, ?decoded, "single-bit error not corrected");
                failures += 1;
            }
        }
    }

    let total = (1 << DATA_BITS) * (WORD_BITS + 1);
    info!(total, failures, "exhaustive check finished");
    println!("{}/{} words decoded correctly", total - failures, total);

    Ok(failures == 0)
}

fn run(args: &Args) -> DemoResult<bool> {
    let code = Hamming74::new();

    if args.exhaustive {
        exhaustive(&code)
    } else {
        demo(&code, &parse_bits(&args.data)?, &args.flips)
    }
}

fn main() {
    setup_logging();

    let args = Args::parse();

    match run(&args) {
        Ok(true) => {},
        Ok(false) => process::exit(1),
        Err(e) => {
            error!("{}", e);
            process::exit(2);
        },
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_bits() {
        assert_eq!(parse_bits("1011").unwrap(), vec![1, 0, 1, 1]);
        assert_eq!(parse_bits("").unwrap(), Vec::<u8>::new());
        assert_eq!(parse_bits("12").unwrap(), vec![1, 2]);
        assert!(parse_bits("1x").is_err());
    }

    #[test]
    fn test_demo() {
        let code = Hamming74::new();

        assert!(demo(&code, &[1, 0, 1, 1], &[1]).unwrap());
        assert!(demo(&code, &[0, 1, 1, 0], &[]).unwrap());
        assert!(demo(&code, &[1, 0, 1, 1], &[0, 1]).unwrap());
        assert!(demo(&code, &[1, 0, 1, 1], &[7]).is_err());
        assert!(demo(&code, &[1, 0, 1], &[1]).is_err());
        assert!(demo(&code, &[1, 0, 2, 1], &[1]).is_err());
    }

    #[test]
    fn test_exhaustive() {
        assert!(exhaustive(&Hamming74::new()).unwrap());
    }

    #[test]
    fn test_args() {
        let args = Args::parse_from(&["hamming74"]);
        assert_eq!(args.data, "1011");
        assert_eq!(args.flips, vec![1]);
        assert!(!args.exhaustive);

        let args = Args::parse_from(&["hamming74", "--data", "0110", "--flip", "2",
                                      "--flip", "5"]);
        assert_eq!(args.data, "0110");
        assert_eq!(args.flips, vec![2, 5]);

        assert!(Args::parse_from(&["hamming74", "--exhaustive"]).exhaustive);
    }
}
