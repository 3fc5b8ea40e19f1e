//! Trial-division primality checking with human-readable verdicts.

use derive_more::Display;

/// Outcome of checking a single integer. Its `Display` output is the message
/// shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Verdict {
    #[display("Negative numbers are not prime, by definition!")]
    Negative,
    #[display("0 is not prime, by definition!")]
    Zero,
    #[display("1 is not prime, by definition!")]
    One,
    #[display("{n} is not a prime number because it is divisible by {divisor}!")]
    Composite { n: i64, divisor: i64 },
    #[display("{_0} is a prime number!")]
    Prime(i64),
}

impl Verdict {
    pub fn is_prime(&self) -> bool {
        matches!(self, Verdict::Prime(_))
    }
}

pub fn check(n: i64) -> Verdict {
    match n {
        i64::MIN..=-1 => Verdict::Negative,
        0 => Verdict::Zero,
        1 => Verdict::One,
        _ => match smallest_divisor(n) {
            Some(divisor) => Verdict::Composite { n, divisor },
            None => Verdict::Prime(n),
        },
    }
}

/// Returns the `(is_prime, message)` pair for `n`.
pub fn is_prime(n: i64) -> (bool, String) {
    let verdict = check(n);
    (verdict.is_prime(), verdict.to_string())
}

/// Smallest divisor of `n` in `2..=floor(sqrt(n))`, scanning upwards.
///
/// `d <= n / d` is the same bound as `d * d <= n` but cannot overflow.
pub fn smallest_divisor(n: i64) -> Option<i64> {
    if n < 2 {
        return None;
    }
    (2..)
        .take_while(|&d| d <= n / d)
        .find(|&d| n % d == 0)
}
