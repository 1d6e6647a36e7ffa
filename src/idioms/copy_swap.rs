//! Copy-and-swap: assignment takes its argument by value (the copy is made
//! by the caller) and swaps it in. If making the copy fails, the target was
//! never touched.
//!
//! Run with: cargo run --bin copy_and_swap

use std::mem;

use itertools::Itertools;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Foo {
    arr_raw: [f64; 4],
    arr_std: [f64; 4],
    vec: Vec<f64>,
}

impl Foo {
    pub fn new(arr_raw: &[f64; 4], arr_std: [f64; 4], vec: &[f64]) -> Self {
        Foo {
            arr_raw: *arr_raw,
            arr_std,
            vec: vec.to_vec(),
        }
    }

    pub fn assign(&mut self, mut other: Foo) {
        swap(self, &mut other);
    }

    /// Three tab-separated rows: raw array, fixed array, vector.
    pub fn render(&self) -> String {
        [
            self.arr_raw.iter().join("\t"),
            self.arr_std.iter().join("\t"),
            self.vec.iter().join("\t"),
        ]
        .join("\n")
    }
}

pub fn swap(first: &mut Foo, second: &mut Foo) {
    tracing::debug!("swapping Foo members");
    mem::swap(&mut first.arr_raw, &mut second.arr_raw);
    mem::swap(&mut first.arr_std, &mut second.arr_std);
    mem::swap(&mut first.vec, &mut second.vec);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn first() -> Foo {
        Foo::new(&[1.0, 2.0, 3.0, 4.0], [0.1, 0.2, 0.3, 0.4], &[-1.0, -2.0, -3.0, -4.0])
    }

    fn second() -> Foo {
        Foo::new(
            &[10.0, 20.0, 30.0, 40.0],
            [0.11, 0.22, 0.33, 0.44],
            &[-10.0, -20.0, -30.0, -40.0],
        )
    }

    #[test]
    fn render_rows() {
        assert_eq!(
            first().render(),
            "1\t2\t3\t4\n0.1\t0.2\t0.3\t0.4\n-1\t-2\t-3\t-4"
        );
    }

    #[test]
    fn copy_is_independent() {
        let original = first();
        let mut copy = original.clone();
        copy.vec.push(5.0);
        assert_eq!(original.vec.len(), 4);
    }

    #[test]
    fn assignment_takes_the_value() {
        let mut target = first();
        let source = second();
        target.assign(source.clone());
        assert_eq!(target, source);
    }

    #[test]
    fn self_assignment_is_a_no_op() {
        let mut foo = first();
        foo.assign(foo.clone());
        assert_eq!(foo, first());
    }

    #[test]
    fn swap_exchanges_everything() {
        let (mut a, mut b) = (first(), second());
        swap(&mut a, &mut b);
        assert_eq!((a, b), (second(), first()));
    }

    proptest! {
        #[test]
        fn swap_twice_restores(
            xs in prop::collection::vec(-1e6f64..1e6, 0..8),
            ys in prop::collection::vec(-1e6f64..1e6, 0..8),
        ) {
            let (orig_a, orig_b) = (Foo::new(&[0.0; 4], [1.0; 4], &xs), Foo::new(&[2.0; 4], [3.0; 4], &ys));
            let (mut a, mut b) = (orig_a.clone(), orig_b.clone());
            swap(&mut a, &mut b);
            prop_assert_eq!(&a, &orig_b);
            swap(&mut a, &mut b);
            prop_assert_eq!(a, orig_a);
            prop_assert_eq!(b, orig_b);
        }
    }
}
