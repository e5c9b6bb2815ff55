//! Demonstrates fraction streams across bases and the expansion analysis.

use fraction_stream::{digit_char, Fraction, FractionStream};

fn show(label: &str, digits: &[u32]) {
    let s: String = digits.iter().map(|&d| digit_char(d)).collect();
    println!("   {:<30} {:?}  ({})", label, digits, s);
}

fn main() {
    println!("\n=== Long-Division Digit Stream Demo ===\n");

    // ── 1. 1/101 across bases ────────────────────────────────────────────
    println!("1. 1/101 across bases");
    show("base  2 (binary):",  &FractionStream::new(1u32, 101u32).unwrap().digits(16));
    show("base 10 (decimal):", &FractionStream::with_base(1u32, 101u32, 10).unwrap().digits(12));
    show("base 16 (hex):",     &FractionStream::with_base(1u32, 101u32, 16).unwrap().digits(12));
    println!("   Formatted bin: {}", FractionStream::new(1u32, 101u32).unwrap().format(16));
    println!();

    // ── 2. Terminating vs periodic ───────────────────────────────────────
    println!("2. Terminating vs periodic expansions");
    show("1/2  base 2:", &FractionStream::new(1u32, 2u32).unwrap().digits(8));
    show("1/3  base 2:", &FractionStream::new(1u32, 3u32).unwrap().digits(8));
    show("1/7  base 10:", &FractionStream::with_base(1u32, 7u32, 10).unwrap().digits(12));
    show("0/9  base 10:", &FractionStream::with_base(0u32, 9u32, 10).unwrap().digits(8));
    println!();

    // ── 3. Expansion structure ───────────────────────────────────────────
    println!("3. Expansion structure (transient + cycle)");
    for &(n, d, b) in &[(1u32, 2u32, 2u32), (1, 3, 2), (1, 10, 2), (1, 6, 10), (45, 97, 10)] {
        let f = Fraction::new(n, d).unwrap();
        let e = f.expansion(b).unwrap();
        if e.terminates() {
            println!("   {:>5} base {:>2}: {}  (terminates)", f.to_string(), b, e);
        } else {
            println!(
                "   {:>5} base {:>2}: {}  (transient {}, period {})",
                f.to_string(), b, e, e.transient_len(), e.period()
            );
        }
    }
    // 1/101 in binary is pure periodic with period 100 — 2 is a primitive
    // root modulo 101, so the cycle is as long as it can possibly be.
    let e = Fraction::new(1u32, 101u32).unwrap().expansion(2).unwrap();
    println!("   1/101 base  2: transient {}, period {}", e.transient_len(), e.period());
    println!();

    // ── 4. Streams are infinite iterators ────────────────────────────────
    println!("4. Iterator adaptors compose with streams");
    let skipped: Vec<u32> = FractionStream::new(1u32, 101u32).unwrap().skip(6).take(4).collect();
    show("1/101 bits [6..10]:", &skipped);
    let ones = FractionStream::new(1u32, 101u32).unwrap().take(100).filter(|&d| d == 1).count();
    println!("   1 bits in the first full period of 1/101: {}", ones);
    println!();

    // ── 5. Cursor operations ─────────────────────────────────────────────
    println!("5. Cursor introspection");
    let mut s = FractionStream::with_base(1u32, 7u32, 10).unwrap();
    s.advance(3);
    println!("   after advance(3): position={} remainder={}", s.position(), s.remainder());
    show("next three digits:", &s.digits(3));
}
