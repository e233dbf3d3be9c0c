pub mod line;

pub use line::Line;

use crate::Bound;
use tracing::debug;

/// Builds the newline-terminated text of lines `1..=bound`.
#[derive(Debug, Clone, Copy)]
pub struct SequenceGenerator {
    bound: Bound,
}

impl SequenceGenerator {
    pub fn new(bound: Bound) -> Self {
        Self { bound }
    }

    pub fn bound(&self) -> Bound {
        self.bound
    }

    /// Lines in increasing order of their value.
    pub fn lines(&self) -> impl Iterator<Item = Line> {
        (1..=self.bound.get()).map(Line::for_value)
    }

    /// Exact byte length of [`generate`](Self::generate)'s output.
    pub fn rendered_len(&self) -> usize {
        self.lines().map(|line| line.rendered_len() + 1).sum()
    }

    pub fn generate(&self) -> String {
        let capacity = self.rendered_len();
        debug!(
            "Building sequence of {} lines ({} bytes)",
            self.bound, capacity
        );

        let mut out = String::with_capacity(capacity);
        for line in self.lines() {
            line.push_to(&mut out);
            out.push('\n');
        }
        out
    }
}

/// Shorthand for `SequenceGenerator::new(Bound::new(n)).generate()`.
pub fn generate(n: u32) -> String {
    SequenceGenerator::new(Bound::new(n)).generate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_zero_is_empty() {
        assert_eq!(generate(0), "");
    }

    #[test]
    fn test_generate_small_bounds() {
        assert_eq!(generate(1), "1\n");
        assert_eq!(generate(3), "1\n2\nFizz\n");
        assert_eq!(generate(5), "1\n2\nFizz\n4\nBuzz\n");
    }

    #[test]
    fn test_generate_15_ends_with_fizzbuzz() {
        let text = generate(15);
        assert!(text.ends_with("13\n14\nFizzBuzz\n"));
        assert_eq!(text.lines().count(), 15);
    }

    #[test]
    fn test_generate_is_idempotent() {
        assert_eq!(generate(100), generate(100));
    }

    #[test]
    fn test_capacity_is_exact() {
        for n in [0, 1, 9, 10, 15, 99, 100, 1000] {
            let generator = SequenceGenerator::new(Bound::new(n));
            let text = generator.generate();
            assert_eq!(text.len(), generator.rendered_len(), "bound {}", n);
            assert!(text.capacity() >= text.len());
        }
    }

    #[test]
    fn test_lines_iterator() {
        let generator = SequenceGenerator::new(Bound::new(6));
        let lines: Vec<Line> = generator.lines().collect();
        assert_eq!(
            lines,
            vec![
                Line::Number(1),
                Line::Number(2),
                Line::Fizz,
                Line::Number(4),
                Line::Buzz,
                Line::Fizz,
            ]
        );
        assert_eq!(generator.bound(), Bound::new(6));
    }
}
