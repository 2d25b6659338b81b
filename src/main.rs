//! Golden field CLI.
//!
//! Demonstration driver over the library: enumerates golden primes, prints
//! Fibonacci/Lucas tables modulo a prime, and cross-checks the closed form
//! against the recurrence. All arithmetic lives in the library; this binary
//! only loops and formats.

use clap::{Parser, Subcommand};
use golden_field::{crosscheck, survey, GoldenField};
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use std::error::Error;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "golden-field")]
#[command(about = "Golden ratio arithmetic over prime finite fields", long_about = None)]
#[command(version)]
struct Cli {
    /// Emit JSON instead of plain tables.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List golden primes up to a bound, with their golden ratios
    GoldenPrimes {
        /// Exclusive upper bound for the enumeration
        #[arg(long, default_value_t = 1000)]
        limit: u64,
    },

    /// List composites that pass the golden-prime test (false positives)
    PseudoPrimes {
        /// Exclusive upper bound for the enumeration
        #[arg(long, default_value_t = 10_000)]
        limit: u64,
    },

    /// List safe golden primes (p and (p-1)/2 both prime)
    SafePrimes {
        /// Exclusive upper bound for the enumeration
        #[arg(long, default_value_t = 3000)]
        limit: u64,
    },

    /// Compute the golden ratio, its conjugate and a generator candidate
    Phi {
        /// Modulus, decimal or 0x-prefixed hex
        modulus: String,
    },

    /// Print Fibonacci numbers mod p
    Fibonacci {
        /// Modulus, decimal or 0x-prefixed hex
        modulus: String,
        /// How many values to print (default: 2p, capped at 10000)
        #[arg(long)]
        count: Option<u64>,
    },

    /// Print Lucas numbers mod p
    Lucas {
        /// Modulus, decimal or 0x-prefixed hex
        modulus: String,
        /// How many values to print (default: 2p, capped at 10000)
        #[arg(long)]
        count: Option<u64>,
    },

    /// Cross-check Binet evaluation against the recurrence
    Verify {
        /// Modulus, decimal or 0x-prefixed hex
        modulus: String,
        /// Highest index to compare
        #[arg(long, default_value_t = 1000)]
        count: u64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    match cli.command {
        Commands::GoldenPrimes { limit } => {
            let records = survey::golden_primes(limit);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                println!("Golden primes up to {limit}");
                println!("{:>10}  {:>10}", "p", "phi");
                for record in &records {
                    println!("{:>10}  {:>10}", record.p, record.phi);
                }
            }
        }
        Commands::PseudoPrimes { limit } => {
            let records = survey::pseudo_golden_primes(limit);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                println!("Pseudo golden primes (composite false positives) up to {limit}");
                println!("{:>10}  {:>10}  {}", "n", "phi", "lucas_probable");
                for record in &records {
                    println!(
                        "{:>10}  {:>10}  {}",
                        record.n, record.phi, record.lucas_probable
                    );
                }
            }
        }
        Commands::SafePrimes { limit } => {
            let records = survey::safe_golden_primes(limit);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                println!("Safe golden primes up to {limit}");
                println!("{:>10}  {:>10}", "p", "phi");
                for record in &records {
                    println!("{:>10}  {:>10}", record.p, record.phi);
                }
            }
        }
        Commands::Phi { modulus } => {
            let field = GoldenField::new(parse_modulus(&modulus)?)?;
            if cli.json {
                let out = serde_json::json!({
                    "p": field.modulus().to_string(),
                    "phi": field.phi().to_string(),
                    "psi": field.psi().to_string(),
                    "generator_candidate": field.generator_candidate().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("p   = {}", field.modulus());
                println!("phi = {}", field.phi());
                println!("psi = {}", field.psi());
                println!("g   = {}", field.generator_candidate());
            }
        }
        Commands::Fibonacci { modulus, count } => {
            let field = GoldenField::new(parse_modulus(&modulus)?)?;
            let count = count.unwrap_or_else(|| default_count(&field));
            let mut values = Vec::with_capacity(count as usize);
            for n in 0..count {
                values.push(field.fibonacci(&BigUint::from(n))?);
            }
            print_sequence("Fibonacci", &field, &values, cli.json)?;
        }
        Commands::Lucas { modulus, count } => {
            let field = GoldenField::new(parse_modulus(&modulus)?)?;
            let count = count.unwrap_or_else(|| default_count(&field));
            let values: Vec<BigUint> =
                (0..count).map(|n| field.lucas(&BigUint::from(n))).collect();
            print_sequence("Lucas", &field, &values, cli.json)?;
        }
        Commands::Verify { modulus, count } => {
            let field = GoldenField::new(parse_modulus(&modulus)?)?;
            let fib = crosscheck::diff_fibonacci(&field, count)?;
            let lucas = crosscheck::diff_lucas(&field, count);
            for (name, result) in [("fibonacci", &fib), ("lucas", &lucas)] {
                match result {
                    crosscheck::DiffResult::Match { checked } => {
                        println!("{name}: OK, {checked} values match the recurrence");
                    }
                    crosscheck::DiffResult::Mismatch {
                        index,
                        closed_form,
                        recurrence,
                    } => {
                        return Err(format!(
                            "{name}: mismatch at index {index}: closed form {closed_form}, recurrence {recurrence}"
                        )
                        .into());
                    }
                }
            }
        }
    }
    Ok(())
}

/// Parse a modulus given as decimal or 0x-prefixed hex.
fn parse_modulus(s: &str) -> Result<BigUint, Box<dyn Error>> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => BigUint::parse_bytes(hex.as_bytes(), 16),
        None => BigUint::parse_bytes(s.as_bytes(), 10),
    };
    parsed.ok_or_else(|| format!("invalid modulus '{s}'").into())
}

/// Default table length: one full period hint of 2p, capped for huge moduli.
fn default_count(field: &GoldenField) -> u64 {
    field
        .modulus()
        .to_u64()
        .and_then(|p| p.checked_mul(2))
        .unwrap_or(u64::MAX)
        .min(10_000)
}

fn print_sequence(
    name: &str,
    field: &GoldenField,
    values: &[BigUint],
    json: bool,
) -> Result<(), Box<dyn Error>> {
    if json {
        let strings: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        let out = serde_json::json!({
            "p": field.modulus().to_string(),
            "sequence": name.to_lowercase(),
            "values": strings,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{name} numbers mod {}", field.modulus());
        for (n, value) in values.iter().enumerate() {
            println!("{n} {value}");
        }
    }
    Ok(())
}
