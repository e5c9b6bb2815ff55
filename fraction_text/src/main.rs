//! The classic binary-fraction printout, bounded: grouped digits of a
//! proper fraction streamed to stdout, with the periodic structure noted.

use fraction_stream::Fraction;
use fraction_text::{heading, DigitLayout};
use num_bigint::BigUint;
use std::io::{self, Write};

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║            Binary Fraction Printer                   ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    loop {
        let line = read_line("Fraction as n/d (default 1/101, or q to quit): ");
        let line = line.trim();

        if line.eq_ignore_ascii_case("q") {
            println!("\nGoodbye!\n");
            break;
        }

        let fraction = match parse_fraction(line) {
            Ok(f) => f,
            Err(msg) => {
                println!("  ⚠  {}\n", msg);
                continue;
            }
        };

        let base: u32 = loop {
            let b = read_line("  Base (2–36, default 2): ")
                .trim().parse::<u32>().unwrap_or(2);
            if (2..=36).contains(&b) {
                break b;
            }
            println!("  ⚠  Base must be 2–36.");
        };

        let n: usize = read_line("  How many digits? (default 160): ")
            .trim().parse().unwrap_or(160);
        let n = n.max(1).min(100_000);

        let mut stream = match fraction.stream_in_base(base) {
            Ok(s) => s,
            Err(e) => {
                println!("  ⚠  {}\n", e);
                continue;
            }
        };

        println!();
        println!("{}", heading(&fraction, base));
        let stdout = io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = DigitLayout::new().write_to(&mut out, &mut stream, n) {
            println!("  ⚠  write error: {}", e);
            continue;
        }
        out.flush().ok();
        println!();

        // The period walk is bounded by the denominator; skip it for huge ones.
        if fraction.denominator() <= &BigUint::from(1_000_000u32) {
            match fraction.expansion(base) {
                Err(e) => println!("  ⚠  {}", e),
                Ok(e) => {
                    if e.terminates() {
                        println!("(terminates after {} digit(s): {})", e.transient_len(), e);
                    } else {
                        println!("(transient {}, period {})", e.transient_len(), e.period());
                    }
                }
            }
        }
        println!();
    }
}

fn parse_fraction(line: &str) -> Result<Fraction, String> {
    let line = if line.is_empty() { "1/101" } else { line };
    let (n_str, d_str) = line
        .split_once('/')
        .ok_or_else(|| "Enter a fraction as n/d, e.g. 1/101.".to_string())?;
    let numerator = n_str.trim().parse::<BigUint>()
        .map_err(|_| format!("Bad numerator: \"{}\".", n_str.trim()))?;
    let denominator = d_str.trim().parse::<BigUint>()
        .map_err(|_| format!("Bad denominator: \"{}\".", d_str.trim()))?;
    Fraction::new(numerator, denominator).map_err(|e| e.to_string())
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf
}
