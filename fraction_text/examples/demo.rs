//! Demonstrates digit layouts over the same stream.

use fraction_stream::{Fraction, FractionStream};
use fraction_text::{heading, DigitLayout};

fn main() {
    println!("\n=== Digit Layout Demo ===\n");

    let fraction = Fraction::new(1u32, 101u32).unwrap();

    // ── 1. The classic printout: groups of 4, lines of 80 ─────────────────
    println!("1. Default layout (group 4, line 80)");
    println!("{}", heading(&fraction, 2));
    println!("{}", DigitLayout::new().render_stream(&mut fraction.stream(), 160));
    println!();

    // ── 2. Same digits, different geometry ────────────────────────────────
    println!("2. Groups of 8, lines of 40");
    let layout = DigitLayout::new().group(8).line_width(40);
    println!("{}", layout.render_stream(&mut fraction.stream(), 120));
    println!();

    // ── 3. Bare digits, no prefix, no separators ──────────────────────────
    println!("3. Bare digits");
    let bare = DigitLayout::new().group(0).line_width(0).radix_prefix(false);
    println!("{}", bare.render_stream(&mut fraction.stream(), 64));
    println!();

    // ── 4. Hexadecimal page ───────────────────────────────────────────────
    println!("4. Hexadecimal, groups of 4");
    let mut hex = fraction.stream_in_base(16).unwrap();
    println!("{}", heading(&fraction, 16));
    println!("{}", DigitLayout::new().line_width(40).render_stream(&mut hex, 40));
    println!();

    // ── 5. Layout over pre-collected digits ───────────────────────────────
    println!("5. render() over a collected block");
    let digits = FractionStream::with_base(1u32, 7u32, 10).unwrap().digits(24);
    println!("{}", heading(&Fraction::new(1u32, 7u32).unwrap(), 10));
    println!("{}", DigitLayout::new().group(6).line_width(0).render(&digits));
}
