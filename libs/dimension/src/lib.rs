#![forbid(unsafe_code)]

//! Exponent-vector algebra over the seven SI base dimensions.
//!
//! Every physical quantity is characterized by a [`DimensionVector`]: the
//! exponents of mass, length, time, electric current, temperature, amount of
//! substance and luminous intensity in its definition. Force, for example,
//! is `M L T^-2`. The vectors form a group under composition (multiplication
//! of quantities adds exponents), which is what makes dimensional checking of
//! arithmetic expressions a pure bookkeeping exercise.
//!
//! Exponents are exact rationals rather than integers so that roots stay
//! representable: `scale(area, 1/2)` is exactly the dimension of length.

mod vector;

pub use vector::{DimensionVector, Exponent};
