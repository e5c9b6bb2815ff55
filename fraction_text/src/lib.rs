//! # fraction_text
//!
//! Grouped, line-wrapped text rendering for [`fraction_stream`] digit
//! streams.
//!
//! The core crate emits bare digits; this crate owns everything about how
//! they look on a page — the `0.` radix prefix, a space after every digit
//! group, a newline after every full line. Output is always caller-bounded:
//! you say how many digits, the layout never pulls more.
//!
//! ## Quick start
//!
//! ```rust
//! use fraction_stream::FractionStream;
//! use fraction_text::DigitLayout;
//!
//! let mut s = FractionStream::new(1u32, 101u32).unwrap();
//! let page = DigitLayout::new().render_stream(&mut s, 16);
//! assert_eq!(page, "0.0000 0010 1000 1000 ");
//! ```

use fraction_stream::{digit_char, Fraction, FractionStream};
use std::io;

// ════════════════════════════════════════════════════════════════════════════
// DigitLayout — the page geometry
// ════════════════════════════════════════════════════════════════════════════

/// Layout for a block of expansion digits.
///
/// Defaults match the classic binary-fraction printout: a space after every
/// 4th digit, a newline after every 80th, and a leading `0.`. Setting
/// `group` or `line_width` to 0 disables that separator. When a digit index
/// lands on both boundaries the space comes first, then the newline.
///
/// # Builder
/// ```rust
/// use fraction_stream::FractionStream;
/// use fraction_text::DigitLayout;
///
/// let layout = DigitLayout::new()
///     .group(0)            // no grouping
///     .radix_prefix(false);
///
/// let mut s = FractionStream::new(1u32, 3u32).unwrap();
/// assert_eq!(layout.render_stream(&mut s, 6), "010101");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitLayout {
    group:        usize,
    line_width:   usize,
    radix_prefix: bool,
}

impl Default for DigitLayout {
    fn default() -> Self {
        DigitLayout { group: 4, line_width: 80, radix_prefix: true }
    }
}

impl DigitLayout {
    pub fn new() -> Self {
        Self::default()
    }

    // ── setters (builder pattern) ─────────────────────────────────────────

    /// Space after every `n` digits; 0 disables grouping.
    pub fn group(mut self, n: usize) -> Self {
        self.group = n;
        self
    }

    /// Newline after every `n` digits; 0 disables wrapping.
    pub fn line_width(mut self, n: usize) -> Self {
        self.line_width = n;
        self
    }

    /// Emit a leading `0.` before the digits. On by default.
    pub fn radix_prefix(mut self, on: bool) -> Self {
        self.radix_prefix = on;
        self
    }

    // ── rendering ─────────────────────────────────────────────────────────

    /// Lay out an already-collected digit block.
    pub fn render(&self, digits: &[u32]) -> String {
        let mut out = String::with_capacity(digits.len() * 2);
        if self.radix_prefix {
            out.push_str("0.");
        }
        for (i, &d) in digits.iter().enumerate() {
            out.push(digit_char(d));
            let i = i + 1;
            if self.group > 0 && i % self.group == 0 {
                out.push(' ');
            }
            if self.line_width > 0 && i % self.line_width == 0 {
                out.push('\n');
            }
        }
        out
    }

    /// Pull the next `n` digits from a stream and lay them out.
    pub fn render_stream(&self, stream: &mut FractionStream, n: usize) -> String {
        self.render(&stream.digits(n))
    }

    /// Stream `n` digits into a writer, digit by digit.
    ///
    /// The incremental analogue of [`DigitLayout::render_stream`] for
    /// sinks like stdout or a file.
    pub fn write_to<W: io::Write>(
        &self,
        w: &mut W,
        stream: &mut FractionStream,
        n: usize,
    ) -> io::Result<()> {
        if self.radix_prefix {
            write!(w, "0.")?;
        }
        for i in 1..=n {
            write!(w, "{}", digit_char(stream.next_digit()))?;
            if self.group > 0 && i % self.group == 0 {
                write!(w, " ")?;
            }
            if self.line_width > 0 && i % self.line_width == 0 {
                writeln!(w)?;
            }
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Headings
// ════════════════════════════════════════════════════════════════════════════

/// The classic heading line, generalized per base:
/// `"Binary representation of 1/101:"`.
pub fn heading(fraction: &Fraction, base: u32) -> String {
    match base {
        2  => format!("Binary representation of {}:", fraction),
        8  => format!("Octal representation of {}:", fraction),
        10 => format!("Decimal representation of {}:", fraction),
        16 => format!("Hexadecimal representation of {}:", fraction),
        _  => format!("Base-{} representation of {}:", base, fraction),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn stream_101() -> FractionStream {
        FractionStream::new(1u32, 101u32).unwrap()
    }

    // ── default layout ───────────────────────────────────────────────────
    #[test]
    fn default_groups_of_four() {
        let page = DigitLayout::new().render_stream(&mut stream_101(), 16);
        assert_eq!(page, "0.0000 0010 1000 1000 ");
    }

    #[test]
    fn default_wraps_at_eighty() {
        let page = DigitLayout::new().render_stream(&mut stream_101(), 80);
        let lines: Vec<&str> = page.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(' '));
        assert_eq!(lines[1], "");
        // 80 digits + 20 group spaces + the 0. prefix
        assert_eq!(lines[0].len(), 2 + 80 + 20);
    }

    // ── separator toggles ────────────────────────────────────────────────
    #[test]
    fn zero_group_disables_spacing() {
        let page = DigitLayout::new().group(0).render_stream(&mut stream_101(), 16);
        assert_eq!(page, "0.0000001010001000");
    }

    #[test]
    fn zero_line_width_disables_wrapping() {
        let page = DigitLayout::new()
            .group(0)
            .line_width(0)
            .render_stream(&mut stream_101(), 200);
        assert!(!page.contains('\n'));
        assert_eq!(page.len(), 2 + 200);
    }

    #[test]
    fn prefix_can_be_dropped() {
        let page = DigitLayout::new().radix_prefix(false).render_stream(&mut stream_101(), 8);
        assert_eq!(page, "0000 0010 ");
    }

    #[test]
    fn space_precedes_newline_on_shared_boundary() {
        let page = DigitLayout::new()
            .group(4)
            .line_width(8)
            .radix_prefix(false)
            .render_stream(&mut stream_101(), 8);
        assert_eq!(page, "0000 0010 \n");
    }

    #[test]
    fn custom_narrow_lines() {
        let mut s = FractionStream::new(1u32, 3u32).unwrap();
        let page = DigitLayout::new().group(0).line_width(5).render_stream(&mut s, 12);
        assert_eq!(page, "0.01010\n10101\n01");
    }

    // ── render vs write_to ───────────────────────────────────────────────
    #[test]
    fn write_to_matches_render_stream() {
        let layout = DigitLayout::new();
        let page = layout.render_stream(&mut stream_101(), 100);

        let mut buf: Vec<u8> = Vec::new();
        layout.write_to(&mut buf, &mut stream_101(), 100).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), page);
    }

    #[test]
    fn render_starts_at_the_cursor() {
        let layout = DigitLayout::new().group(0).radix_prefix(false);
        let mut s = stream_101();
        s.advance(6);
        assert_eq!(layout.render_stream(&mut s, 4), "1010");
    }

    #[test]
    fn render_accepts_collected_digits() {
        let digits = stream_101().digits(16);
        let layout = DigitLayout::new();
        assert_eq!(layout.render(&digits), layout.render_stream(&mut stream_101(), 16));
    }

    // ── headings ─────────────────────────────────────────────────────────
    #[test]
    fn heading_names_common_bases() {
        let f = Fraction::new(1u32, 101u32).unwrap();
        assert_eq!(heading(&f, 2), "Binary representation of 1/101:");
        assert_eq!(heading(&f, 16), "Hexadecimal representation of 1/101:");
        assert_eq!(heading(&f, 7), "Base-7 representation of 1/101:");
    }
}
