//! Interactive explorer for long-division fraction streams.
//! Supports any proper fraction and base selection (2–36).

use fraction_stream::{digit_char, Fraction};
use num_bigint::BigUint;
use std::io::{self, Write};

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║          Fraction Long-Division Explorer             ║");
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

        // Base selection
        let base: u32 = loop {
            let b_str = read_line("  Base (2–36, default 2): ");
            let b = b_str.trim().parse::<u32>().unwrap_or(2);
            if (2..=36).contains(&b) {
                break b;
            }
            println!("  ⚠  Base must be 2–36.");
        };

        let n: usize = read_line("  How many digits? (default 50): ")
            .trim().parse().unwrap_or(50);
        let n = n.max(1).min(10_000);

        println!();
        println!("  ┌─ {} (base {}) ─", fraction, base);
        println!("  │");

        let mut stream = match fraction.stream_in_base(base) {
            Ok(s) => s,
            Err(e) => {
                println!("  ⚠  {}\n", e);
                continue;
            }
        };
        let digits = stream.digits(n);

        let base_label = match base {
            2  => "binary",
            8  => "octal",
            10 => "decimal",
            16 => "hexadecimal",
            _  => "digits",
        };
        println!("  │  {} digits:", base_label);

        // Fractional digits wrapped at 60 per line
        print!("  │    0.");
        for (i, &d) in digits.iter().enumerate() {
            if i > 0 && i % 60 == 0 {
                print!("\n  │      ");
            }
            print!("{}", digit_char(d));
        }
        println!();
        println!("  │");

        // Periodic structure of the full expansion. The walk is bounded by
        // the denominator, so only attempt it for modest ones.
        if fraction.denominator() <= &BigUint::from(1_000_000u32) {
            match fraction.expansion(base) {
                Err(e) => println!("  │  expansion: ⚠ {}", e),
                Ok(e) => {
                    if e.terminates() {
                        println!("  │  terminates after {} digit(s): {}", e.transient_len(), e);
                    } else {
                        println!("  │  transient {}, period {}", e.transient_len(), e.period());
                        if e.transient_len() + e.period() <= 40 {
                            println!("  │  exact form: {}", e);
                        }
                    }
                }
            }
        } else {
            println!("  │  (denominator too large for period analysis)");
        }
        println!("  └─ ({} digits emitted)", n);

        // Also show raw digit vec for small n
        if n <= 30 {
            println!();
            println!("  Raw digit vec : {:?}", &digits);
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
