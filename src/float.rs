use std::fmt::{Debug, Display};

use num_traits::{Float as NumFloat, FloatConst, FromPrimitive};

use crate::coeff::Coeff;

/// Marker trait for the real scalar types (`f32`, `f64`) that carry time,
/// step sizes, and tolerances.
///
/// Bundles the numeric and utility traits needed throughout picard. Every
/// `Float` is also a [`Coeff`] over itself, so a real type serves both as
/// the time ring and as a state coefficient ring.
pub trait Float:
    NumFloat
    + FloatConst
    + FromPrimitive
    + Coeff<Real = Self>
    + Copy
    + Send
    + Sync
    + Default
    + Debug
    + Display
    + 'static
{
}

impl Float for f32 {}
impl Float for f64 {}
