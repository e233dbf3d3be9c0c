use std::fmt;

/// One row of output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Number(u32),
    Fizz,
    Buzz,
    FizzBuzz,
}

impl Line {
    /// Classify `value` by divisibility. `value` is expected to be at least 1.
    pub fn for_value(value: u32) -> Self {
        match (value % 3 == 0, value % 5 == 0) {
            (true, true) => Line::FizzBuzz,
            (true, false) => Line::Fizz,
            (false, true) => Line::Buzz,
            (false, false) => Line::Number(value),
        }
    }

    /// Length in bytes of the rendered line, excluding the newline.
    pub fn rendered_len(&self) -> usize {
        match self {
            Line::Number(n) => digit_count(*n),
            Line::Fizz | Line::Buzz => 4,
            Line::FizzBuzz => 8,
        }
    }

    pub(crate) fn push_to(&self, out: &mut String) {
        match self {
            Line::Number(n) => out.push_str(&n.to_string()),
            Line::Fizz => out.push_str("Fizz"),
            Line::Buzz => out.push_str("Buzz"),
            Line::FizzBuzz => out.push_str("FizzBuzz"),
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Number(n) => write!(f, "{}", n),
            Line::Fizz => f.write_str("Fizz"),
            Line::Buzz => f.write_str("Buzz"),
            Line::FizzBuzz => f.write_str("FizzBuzz"),
        }
    }
}

fn digit_count(mut n: u32) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
