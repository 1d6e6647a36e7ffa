//! Pattern: Decorator (compile-time facets)
//! Example: fixed-size vector with axis accessors
//!
//! A `Vector<T, N>` gains `x()`, `y()`, `z()` (or `i()`, `j()`, `k()`) through
//! facet traits. An accessor only compiles for sizes that actually have the
//! component, so asking a 2-vector for `z()` is a build error:
//!
//! ```compile_fail
//! use design_patterns::vector::{AxisZ, Vector};
//!
//! let v = Vector::new([0.5, 1.5]);
//! let _ = v.z();
//! ```
//!
//! Run with: cargo run --bin vector_facets

use std::fmt;
use std::iter::Sum;
use std::ops::{Index, IndexMut, MulAssign};

use itertools::Itertools;

/// The container concept every facet builds on.
pub trait VectorBase {
    type Value: Copy;

    const SIZE: usize;

    fn data(&self) -> &[Self::Value];
    fn data_mut(&mut self) -> &mut [Self::Value];

    fn size(&self) -> usize {
        Self::SIZE
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<T, const N: usize>([T; N]);

impl<T, const N: usize> Vector<T, N> {
    pub const fn new(data: [T; N]) -> Self {
        Vector(data)
    }

    pub fn into_inner(self) -> [T; N] {
        self.0
    }
}

impl<T: Copy + Default, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Vector([T::default(); N])
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(data: [T; N]) -> Self {
        Vector(data)
    }
}

impl<T: Copy, const N: usize> VectorBase for Vector<T, N> {
    type Value = T;

    const SIZE: usize = N;

    fn data(&self) -> &[T] {
        &self.0
    }

    fn data_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.0[index]
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(", "))
    }
}

// ============================================================================
// Facets
// ============================================================================
// Every facet is implemented for every size. Reading a component the size
// lacks trips the facet's `*_IN_RANGE` constant when the call is compiled.

pub trait AxisX: VectorBase {
    #[doc(hidden)]
    const X_IN_RANGE: () = assert!(Self::SIZE >= 1, "x() needs at least one component");

    fn x(&self) -> Self::Value {
        let () = Self::X_IN_RANGE;
        self.data()[0]
    }

    fn x_mut(&mut self) -> &mut Self::Value {
        let () = Self::X_IN_RANGE;
        &mut self.data_mut()[0]
    }
}

pub trait AxisY: VectorBase {
    #[doc(hidden)]
    const Y_IN_RANGE: () = assert!(Self::SIZE >= 2, "y() needs at least two components");

    fn y(&self) -> Self::Value {
        let () = Self::Y_IN_RANGE;
        self.data()[1]
    }

    fn y_mut(&mut self) -> &mut Self::Value {
        let () = Self::Y_IN_RANGE;
        &mut self.data_mut()[1]
    }
}

pub trait AxisZ: VectorBase {
    #[doc(hidden)]
    const Z_IN_RANGE: () = assert!(Self::SIZE >= 3, "z() needs at least three components");

    fn z(&self) -> Self::Value {
        let () = Self::Z_IN_RANGE;
        self.data()[2]
    }

    fn z_mut(&mut self) -> &mut Self::Value {
        let () = Self::Z_IN_RANGE;
        &mut self.data_mut()[2]
    }
}

pub trait IndexI: VectorBase {
    #[doc(hidden)]
    const I_IN_RANGE: () = assert!(Self::SIZE >= 1, "i() needs at least one component");

    fn i(&self) -> Self::Value {
        let () = Self::I_IN_RANGE;
        self.data()[0]
    }
}

pub trait IndexJ: VectorBase {
    #[doc(hidden)]
    const J_IN_RANGE: () = assert!(Self::SIZE >= 2, "j() needs at least two components");

    fn j(&self) -> Self::Value {
        let () = Self::J_IN_RANGE;
        self.data()[1]
    }
}

pub trait IndexK: VectorBase {
    #[doc(hidden)]
    const K_IN_RANGE: () = assert!(Self::SIZE >= 3, "k() needs at least three components");

    fn k(&self) -> Self::Value {
        let () = Self::K_IN_RANGE;
        self.data()[2]
    }
}

/// Every axis accessor at once.
pub trait AxisXyz: AxisX + AxisY + AxisZ {}

impl<V: AxisX + AxisY + AxisZ> AxisXyz for V {}

macro_rules! facet {
    ($($facet:ident),+) => {
        $(impl<T: Copy, const N: usize> $facet for Vector<T, N> {})+
    };
}

facet!(AxisX, AxisY, AxisZ, IndexI, IndexJ, IndexK);

// ============================================================================
// Free functions over any VectorBase
// ============================================================================

/// Component-wise product.
pub fn dot<V>(v1: &V, v2: &V) -> V
where
    V: VectorBase + Clone,
    V::Value: MulAssign,
{
    let mut out = v1.clone();
    for (a, &b) in out.data_mut().iter_mut().zip(v2.data()) {
        *a *= b;
    }
    out
}

pub fn sum<V>(v: &V) -> V::Value
where
    V: VectorBase,
    V::Value: Sum,
{
    v.data().iter().copied().sum()
}

/// Euclidean norm.
pub fn length<V>(v: &V) -> f64
where
    V: VectorBase,
    V::Value: Into<f64>,
{
    v.data()
        .iter()
        .map(|&c| {
            let c: f64 = c.into();
            c * c
        })
        .sum::<f64>()
        .sqrt()
}

/// A named 3-vector of doubles with the vector operations as methods.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DoubleVec(Vector<f64, 3>);

impl DoubleVec {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        DoubleVec(Vector::new([x, y, z]))
    }

    pub fn dot(&self, other: &DoubleVec) -> DoubleVec {
        dot(self, other)
    }

    pub fn length(&self) -> f64 {
        length(self)
    }
}

impl VectorBase for DoubleVec {
    type Value = f64;

    const SIZE: usize = 3;

    fn data(&self) -> &[f64] {
        self.0.data()
    }

    fn data_mut(&mut self) -> &mut [f64] {
        self.0.data_mut()
    }
}

impl AxisX for DoubleVec {}
impl AxisY for DoubleVec {}
impl AxisZ for DoubleVec {}

impl fmt::Display for DoubleVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
