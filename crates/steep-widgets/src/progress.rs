//! Fixed-width text progress bar.

/// Characters reserved for the two borders and the percentage readout.
const META_CHARS: usize = 7;

/// Render a progress bar `width` characters wide for `percent` in `[0, 1]`.
///
/// The bar is `|` + filled cells + empty cells + `|` followed by a space and
/// the rounded percentage right-justified in three columns.  The cells between
/// the pipes always number `width - 7`, whatever `percent` is; out-of-range
/// fractions are clamped first.
///
/// ```rust
/// use steep_widgets::progress::progressbar;
///
/// assert_eq!(progressbar(17, 0.5), "|#####.....|  50");
/// ```
pub fn progressbar(width: usize, percent: f64) -> String {
    ProgressBar::new(width).render(percent)
}

/// A progress bar with configurable width and glyphs.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    width: usize,
    filled_char: char,
    empty_char: char,
}

impl ProgressBar {
    /// Create a bar with the given total width, using `#` for filled cells and
    /// `.` for empty ones.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            filled_char: '#',
            empty_char: '.',
        }
    }

    /// Set custom characters for the filled and empty portions of the bar.
    pub fn with_chars(mut self, filled: char, empty: char) -> Self {
        self.filled_char = filled;
        self.empty_char = empty;
        self
    }

    /// Number of cells between the two pipes.
    pub fn cells(&self) -> usize {
        self.width.saturating_sub(META_CHARS)
    }

    /// Render the bar at `percent`.
    pub fn render(&self, percent: f64) -> String {
        let percent = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 1.0)
        };
        let cells = self.cells();
        let filled = ((cells as f64 * percent).round() as usize).min(cells);
        let empty = cells - filled;

        let mut bar = String::with_capacity(self.width + 4);
        bar.push('|');
        bar.extend(std::iter::repeat_n(self.filled_char, filled));
        bar.extend(std::iter::repeat_n(self.empty_char, empty));
        bar.push('|');
        bar.push_str(&format!(" {:>3.0}", (percent * 100.0).round()));
        bar
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inner(bar: &str) -> &str {
        let end = bar.rfind('|').unwrap();
        &bar[1..end]
    }

    #[test]
    fn empty_bar_at_zero() {
        let bar = progressbar(80, 0.0);
        assert_eq!(inner(&bar), ".".repeat(73));
        assert!(bar.ends_with("|   0"));
    }

    #[test]
    fn full_bar_at_one() {
        let bar = progressbar(80, 1.0);
        assert_eq!(inner(&bar), "#".repeat(73));
        assert!(bar.ends_with("| 100"));
    }

    #[test]
    fn cell_count_is_constant() {
        for step in 0..=100 {
            let bar = progressbar(80, step as f64 / 100.0);
            assert_eq!(inner(&bar).chars().count(), 73, "at {step}%");
        }
    }

    #[test]
    fn rounds_cells_and_percentage() {
        // 73 * 0.5 = 36.5 rounds away from zero
        let bar = progressbar(80, 0.5);
        assert_eq!(inner(&bar).matches('#').count(), 37);
        assert!(bar.ends_with("  50"));

        let bar = progressbar(80, 0.123);
        assert!(bar.ends_with("  12"));
    }

    #[test]
    fn out_of_range_fractions_are_clamped() {
        assert_eq!(progressbar(20, 1.7), progressbar(20, 1.0));
        assert_eq!(progressbar(20, -0.3), progressbar(20, 0.0));
        assert_eq!(progressbar(20, f64::NAN), progressbar(20, 0.0));
    }

    #[test]
    fn narrow_widths_do_not_underflow() {
        assert_eq!(progressbar(3, 0.5), "||  50");
    }

    #[test]
    fn custom_glyphs() {
        let bar = ProgressBar::new(11).with_chars('=', ' ').render(0.5);
        assert_eq!(bar, "|==  |  50");
    }
}
