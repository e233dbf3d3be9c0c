use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Bound used when nothing else is configured.
pub const DEFAULT_BOUND: u32 = 100;

/// Inclusive upper limit of the sequence. Zero is allowed and yields no lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bound(u32);

impl Bound {
    pub fn new(n: u32) -> Self {
        Self(n)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for Bound {
    fn default() -> Self {
        Self(DEFAULT_BOUND)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Bound {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: i64 = trimmed
            .parse()
            .map_err(|_| Error::InvalidBound(format!("'{}' is not an integer", trimmed)))?;

        if value < 0 {
            return Err(Error::InvalidBound(format!(
                "{} is negative, the bound must be zero or more",
                value
            )));
        }

        u32::try_from(value)
            .map(Bound)
            .map_err(|_| Error::InvalidBound(format!("{} exceeds the maximum of {}", value, u32::MAX)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub bound: Bound,
}

impl Config {
    pub fn new(bound: Bound) -> Self {
        Self { bound }
    }
}
