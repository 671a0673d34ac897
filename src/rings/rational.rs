use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Zero};
use std::fmt;
use std::fmt::Display;
use std::ops;
use std::str::FromStr;

use crate::matrix::element::Tolerance;

/// An arbitrary-precision rational, kept gcd-normalized with a positive
/// denominator. Gives the inversion engine an exact field to work over, so
/// results compare exactly instead of within tolerance.
#[derive(Debug, Clone)]
pub struct Rational {
    pub num: BigInt,
    pub den: BigInt,
}

impl Rational {
    pub fn new(num: BigInt, den: BigInt) -> Self {
        if den.is_zero() {
            panic!("Denominator cannot be zero");
        }

        let g = &num.gcd(&den);
        let num = num / g;
        let den = den / g;

        if den < BigInt::zero() {
            return Self {
                num: -num,
                den: -den,
            };
        }
        Self { num, den }
    }

    pub fn from_integer(value: i64) -> Self {
        Self {
            num: BigInt::from(value),
            den: BigInt::one(),
        }
    }
}

impl FromStr for Rational {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, String> {
        let (num, den) = match s.split_once('/') {
            Some((num, den)) => (num, den),
            None => (s, "1"),
        };

        Ok(Rational::new(
            BigInt::parse_bytes(num.as_bytes(), 10).ok_or("Invalid number")?,
            BigInt::parse_bytes(den.as_bytes(), 10).ok_or("Invalid number")?,
        ))
    }
}

impl ops::Add for Rational {
    type Output = Rational;

    fn add(self, rhs: Rational) -> Rational {
        if self.den == rhs.den {
            return Rational::new(self.num + rhs.num, self.den);
        }

        Rational::new(
            &self.num * &rhs.den + &rhs.num * &self.den,
            &self.den * &rhs.den,
        )
    }
}

impl ops::Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational {
            num: -self.num,
            den: self.den,
        }
    }
}

impl ops::Sub for Rational {
    type Output = Rational;

    fn sub(self, rhs: Rational) -> Rational {
        self + (-rhs)
    }
}

impl ops::Mul for Rational {
    type Output = Rational;

    fn mul(self, rhs: Rational) -> Rational {
        Rational::new(self.num * rhs.num, self.den * rhs.den)
    }
}

impl ops::Div for Rational {
    type Output = Rational;

    fn div(self, rhs: Rational) -> Rational {
        Rational::new(self.num * rhs.den, self.den * rhs.num)
    }
}

impl Zero for Rational {
    fn zero() -> Rational {
        Rational {
            num: BigInt::zero(),
            den: BigInt::one(),
        }
    }

    fn is_zero(&self) -> bool {
        self.num.is_zero()
    }
}

impl One for Rational {
    fn one() -> Rational {
        Rational {
            num: BigInt::one(),
            den: BigInt::one(),
        }
    }
}

impl std::iter::Sum<Rational> for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Rational {
        iter.fold(Rational::zero(), |acc, r| acc + r)
    }
}

impl Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.den.is_one() {
            return write!(f, "{}", self.num);
        }
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl PartialEq for Rational {
    fn eq(&self, rhs: &Rational) -> bool {
        &self.num * &rhs.den == &rhs.num * &self.den
    }
}

impl Eq for Rational {}

impl Tolerance for Rational {
    fn almost_eq(&self, rhs: &Self) -> bool {
        self == rhs
    }

    fn almost_zero(&self) -> bool {
        self.num.is_zero()
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::matrix::Matrix;
    use rand::Rng;

    fn rational(s: &str) -> Rational {
        s.parse().unwrap()
    }

    #[test]
    fn test_normalization() {
        let r = Rational::new(BigInt::from(6), BigInt::from(-4));
        assert_eq!(r.num, BigInt::from(-3));
        assert_eq!(r.den, BigInt::from(2));

        assert_eq!(rational("2/4"), rational("1/2"));
        assert_eq!(rational("-6/3"), Rational::from_integer(-2));
    }

    #[test]
    #[should_panic]
    fn test_zero_denominator() {
        Rational::new(BigInt::one(), BigInt::zero());
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(rational("1/2") + rational("1/3"), rational("5/6"));
        assert_eq!(rational("1/2") - rational("1/3"), rational("1/6"));
        assert_eq!(rational("2/3") * rational("3/4"), rational("1/2"));
        assert_eq!(rational("2/3") / rational("4/3"), rational("1/2"));
        assert_eq!(-rational("2/3"), rational("-2/3"));
        assert_eq!(
            vec![rational("1/4"), rational("1/4"), rational("1/2")]
                .into_iter()
                .sum::<Rational>(),
            Rational::one()
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(rational("8/6").to_string(), "4/3");
        assert_eq!(rational("7").to_string(), "7");
        assert_eq!(rational("-7/1").to_string(), "-7");
    }

    #[test]
    fn test_exact_inversion() {
        let m = Matrix::from_rows(vec![
            vec![Rational::from_integer(2), Rational::from_integer(7)],
            vec![Rational::from_integer(4), Rational::from_integer(6)],
        ])
        .unwrap();

        let inverse = m.inverse().unwrap();
        // det = -16, so the inverse is exactly adj / -16.
        let expected = Matrix::from_rows(vec![
            vec![rational("-3/8"), rational("7/16")],
            vec![rational("1/4"), rational("-1/8")],
        ])
        .unwrap();

        assert_eq!(inverse, expected);
        assert_eq!(m.multiply(&inverse), Matrix::identity(2));
        assert_eq!(inverse.multiply(&m), Matrix::identity(2));
    }

    #[test]
    fn test_random_exact_round_trips() {
        let mut rng = rand::thread_rng();
        let identity = Matrix::<Rational>::identity(4);

        for _ in 0..20 {
            let m = Matrix::from_rows(
                (0..4)
                    .map(|_| {
                        (0..4)
                            .map(|_| Rational::from_integer(rng.gen_range(-10..=10)))
                            .collect()
                    })
                    .collect(),
            )
            .unwrap();

            let Ok(inverse) = m.inverse() else {
                continue;
            };
            // Exact field: every identity below holds with ==, no tolerance.
            assert_eq!(m.multiply(&inverse), identity);
            assert_eq!(inverse.multiply(&m), identity);
            assert_eq!(inverse.inverse().unwrap(), m);
        }
    }
}
