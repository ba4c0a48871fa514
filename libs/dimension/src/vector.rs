use num_rational::Rational64;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Div, Mul, Neg};

/// Exact rational exponent of a base dimension.
pub type Exponent = Rational64;

/// Base-dimension symbols, in vector order.
const SYMBOLS: [&str; 7] = ["M", "L", "T", "I", "Θ", "N", "J"];

/// Full base-quantity names, in vector order.
const NAMES: [&str; 7] = [
    "mass",
    "length",
    "time",
    "current",
    "temperature",
    "amount",
    "luminosity",
];

/// SI base-unit symbols, in vector order.
const SI_UNITS: [&str; 7] = ["kg", "m", "s", "A", "K", "mol", "cd"];

/// Exponents of the seven SI base dimensions, ordered
/// mass (M), length (L), time (T), current (I), temperature (Θ),
/// amount (N), luminosity (J).
///
/// An immutable value type: all operations return a new vector. Equality is
/// exact per-component comparison; the all-zero vector is dimensionless and
/// compares equal regardless of how it was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionVector(pub [Exponent; 7]);

impl DimensionVector {
    /// Build a vector from integer exponents.
    pub const fn from_ints(
        mass: i64,
        length: i64,
        time: i64,
        current: i64,
        temperature: i64,
        amount: i64,
        luminosity: i64,
    ) -> Self {
        Self([
            Rational64::new_raw(mass, 1),
            Rational64::new_raw(length, 1),
            Rational64::new_raw(time, 1),
            Rational64::new_raw(current, 1),
            Rational64::new_raw(temperature, 1),
            Rational64::new_raw(amount, 1),
            Rational64::new_raw(luminosity, 1),
        ])
    }

    // Base dimensions.
    pub const ZERO: Self = Self::from_ints(0, 0, 0, 0, 0, 0, 0);
    pub const MASS: Self = Self::from_ints(1, 0, 0, 0, 0, 0, 0);
    pub const LENGTH: Self = Self::from_ints(0, 1, 0, 0, 0, 0, 0);
    pub const TIME: Self = Self::from_ints(0, 0, 1, 0, 0, 0, 0);
    pub const CURRENT: Self = Self::from_ints(0, 0, 0, 1, 0, 0, 0);
    pub const TEMPERATURE: Self = Self::from_ints(0, 0, 0, 0, 1, 0, 0);
    pub const AMOUNT: Self = Self::from_ints(0, 0, 0, 0, 0, 1, 0);
    pub const LUMINOSITY: Self = Self::from_ints(0, 0, 0, 0, 0, 0, 1);

    // Common derived dimensions.
    pub const AREA: Self = Self::from_ints(0, 2, 0, 0, 0, 0, 0);
    pub const VOLUME: Self = Self::from_ints(0, 3, 0, 0, 0, 0, 0);
    pub const VELOCITY: Self = Self::from_ints(0, 1, -1, 0, 0, 0, 0);
    pub const ACCELERATION: Self = Self::from_ints(0, 1, -2, 0, 0, 0, 0);
    pub const FORCE: Self = Self::from_ints(1, 1, -2, 0, 0, 0, 0);
    pub const ENERGY: Self = Self::from_ints(1, 2, -2, 0, 0, 0, 0);
    pub const POWER: Self = Self::from_ints(1, 2, -3, 0, 0, 0, 0);
    pub const PRESSURE: Self = Self::from_ints(1, -1, -2, 0, 0, 0, 0);
    pub const CHARGE: Self = Self::from_ints(0, 0, 1, 1, 0, 0, 0);
    pub const VOLTAGE: Self = Self::from_ints(1, 2, -3, -1, 0, 0, 0);
    pub const RESISTANCE: Self = Self::from_ints(1, 2, -3, -2, 0, 0, 0);
    pub const CAPACITANCE: Self = Self::from_ints(-1, -2, 4, 2, 0, 0, 0);
    pub const MAGNETIC_FIELD: Self = Self::from_ints(1, 0, -2, -1, 0, 0, 0);
    pub const FREQUENCY: Self = Self::from_ints(0, 0, -1, 0, 0, 0, 0);
    pub const DENSITY: Self = Self::from_ints(1, -3, 0, 0, 0, 0, 0);
    pub const MOMENTUM: Self = Self::from_ints(1, 1, -1, 0, 0, 0, 0);
    pub const ANGULAR_MOMENTUM: Self = Self::from_ints(1, 2, -1, 0, 0, 0, 0);
    pub const TORQUE: Self = Self::from_ints(1, 2, -2, 0, 0, 0, 0);

    /// The group identity: the dimensionless vector.
    pub fn identity() -> Self {
        Self::ZERO
    }

    /// Component-wise sum. Models multiplication of physical quantities.
    pub fn compose(self, other: Self) -> Self {
        Self(std::array::from_fn(|i| self.0[i] + other.0[i]))
    }

    /// Component-wise negation. Models the reciprocal of a quantity.
    pub fn invert(self) -> Self {
        Self(self.0.map(|e| -e))
    }

    /// `compose(self, invert(other))`. Models division of quantities.
    pub fn divide(self, other: Self) -> Self {
        self.compose(other.invert())
    }

    /// Component-wise multiplication by a rational scalar. Models raising a
    /// quantity to the power `k`; `scale(a, 1/2)` is the square root.
    pub fn scale(self, k: Exponent) -> Self {
        Self(self.0.map(|e| e * k))
    }

    /// True iff every component is exactly zero.
    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(|e| e.is_zero())
    }

    /// Compact symbolic form: `M^2 L T^-1`. Zero components are omitted, as
    /// is the exponent `1`; the zero vector renders as `dimensionless`.
    pub fn symbolic(&self) -> String {
        self.render(&SYMBOLS, " ", "dimensionless")
    }

    /// Human-readable form joining full base-quantity names:
    /// `mass · length^2`. Falls back to `dimensionless`.
    pub fn readable(&self) -> String {
        self.render(&NAMES, " · ", "dimensionless")
    }

    /// SI base-unit form: `kg·m^2·s^-2`. Falls back to `1 (dimensionless)`.
    pub fn si_units(&self) -> String {
        self.render(&SI_UNITS, "·", "1 (dimensionless)")
    }

    fn render(&self, labels: &[&str; 7], separator: &str, empty: &str) -> String {
        let mut parts = Vec::new();
        for (label, exp) in labels.iter().zip(self.0.iter()) {
            if exp.is_zero() {
                continue;
            }
            if exp.is_one() {
                parts.push((*label).to_string());
            } else {
                // Rational64's Display prints `n` for integers, `n/d` otherwise.
                parts.push(format!("{}^{}", label, exp));
            }
        }
        if parts.is_empty() {
            empty.to_string()
        } else {
            parts.join(separator)
        }
    }
}

impl Default for DimensionVector {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for DimensionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbolic())
    }
}

impl Mul for DimensionVector {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.compose(rhs)
    }
}

impl Div for DimensionVector {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.divide(rhs)
    }
}

impl Neg for DimensionVector {
    type Output = Self;

    fn neg(self) -> Self {
        self.invert()
    }
}
