// -*- mode: rust; -*-
//
// This file is part of curve25519-dalek.
// Copyright (c) 2016-2021 isis agora lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>

//! Internal macros.

/// Define the owned and mixed borrow variants of a binary operator in terms
/// of its `&LHS op &RHS` implementation.
///
/// `define_op_variants!(Add::add, LHS = FieldElement51, RHS = FieldElement51, Output = FieldElement51)`
macro_rules! define_op_variants {
    ($op:ident :: $op_fn:ident, LHS = $lhs:ty, RHS = $rhs:ty, Output = $out:ty) => {
        impl<'b> $op<&'b $rhs> for $lhs {
            type Output = $out;

            fn $op_fn(self, rhs: &'b $rhs) -> $out {
                <&$lhs as $op<&$rhs>>::$op_fn(&self, rhs)
            }
        }

        impl<'a> $op<$rhs> for &'a $lhs {
            type Output = $out;

            fn $op_fn(self, rhs: $rhs) -> $out {
                <&$lhs as $op<&$rhs>>::$op_fn(self, &rhs)
            }
        }

        impl $op<$rhs> for $lhs {
            type Output = $out;

            fn $op_fn(self, rhs: $rhs) -> $out {
                <&$lhs as $op<&$rhs>>::$op_fn(&self, &rhs)
            }
        }
    };
}

/// Define both variants of a compound assignment operator in terms of the
/// `&LHS op &RHS` implementation of the matching binary operator.
///
/// `define_op_assign_variants!(AddAssign::add_assign, Add::add, LHS = FieldElement51, RHS = FieldElement51)`
macro_rules! define_op_assign_variants {
    ($op:ident :: $op_fn:ident, $base:ident :: $base_fn:ident, LHS = $lhs:ty, RHS = $rhs:ty) => {
        impl<'b> $op<&'b $rhs> for $lhs {
            fn $op_fn(&mut self, rhs: &'b $rhs) {
                *self = <&$lhs as $base<&$rhs>>::$base_fn(&*self, rhs);
            }
        }

        impl $op<$rhs> for $lhs {
            fn $op_fn(&mut self, rhs: $rhs) {
                *self = <&$lhs as $base<&$rhs>>::$base_fn(&*self, &rhs);
            }
        }
    };
}
