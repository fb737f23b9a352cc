#![deny(missing_docs)]
//! Interface crate to unify how hashing costs of share commitments are passed
//! and retrieved.

pub mod context;

use std::ops::{Add, AddAssign};

pub use context::{CostContext, CostResult, CostsExt, collect_costs};

/// Piece of data representing the hashing work an operation performed.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub struct OperationCost {
    /// How many times a leaf (raw bytes with a leaf domain tag) was hashed.
    pub hash_leaf_calls: u32,
    /// How many times two child nodes were merged into a parent.
    pub hash_node_calls: u32,
    /// Total number of bytes fed into the hash function.
    pub hashed_bytes: u64,
}

impl OperationCost {
    /// Helper function to build default `OperationCost` with different
    /// `hash_leaf_calls`.
    pub fn with_hash_leaf_calls(hash_leaf_calls: u32) -> Self {
        OperationCost {
            hash_leaf_calls,
            ..Default::default()
        }
    }

    /// Helper function to build default `OperationCost` with different
    /// `hash_node_calls`.
    pub fn with_hash_node_calls(hash_node_calls: u32) -> Self {
        OperationCost {
            hash_node_calls,
            ..Default::default()
        }
    }

    /// Cost of hashing one leaf of `len` input bytes.
    pub fn leaf_hash(len: usize) -> Self {
        OperationCost {
            hash_leaf_calls: 1,
            hash_node_calls: 0,
            hashed_bytes: len as u64,
        }
    }

    /// Cost of merging two children where the merge input is `len` bytes.
    pub fn node_hash(len: usize) -> Self {
        OperationCost {
            hash_leaf_calls: 0,
            hash_node_calls: 1,
            hashed_bytes: len as u64,
        }
    }

    /// Total number of hash invocations.
    pub fn hash_calls(&self) -> u32 {
        self.hash_leaf_calls + self.hash_node_calls
    }

    /// Returns true if no hashing was done.
    pub fn is_nothing(&self) -> bool {
        *self == Self::default()
    }
}

impl Add for OperationCost {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        OperationCost {
            hash_leaf_calls: self.hash_leaf_calls + rhs.hash_leaf_calls,
            hash_node_calls: self.hash_node_calls + rhs.hash_node_calls,
            hashed_bytes: self.hashed_bytes + rhs.hashed_bytes,
        }
    }
}

impl AddAssign for OperationCost {
    fn add_assign(&mut self, rhs: Self) {
        self.hash_leaf_calls += rhs.hash_leaf_calls;
        self.hash_node_calls += rhs.hash_node_calls;
        self.hashed_bytes += rhs.hashed_bytes;
    }
}

impl std::iter::Sum for OperationCost {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(OperationCost::default(), |acc, c| acc + c)
    }
}

/// `?` for an expression returning a [`CostResult`].
///
/// The expression's cost is added to `$cost` whether it succeeds or not. On
/// error the enclosing function returns the converted error together with
/// everything accumulated in `$cost` so far.
#[macro_export]
macro_rules! cost_return_on_error {
    ( &mut $cost:ident, $($body:tt)+ ) => {
        {
            use $crate::CostsExt;
            let result_with_cost = { $($body)+ };
            let result = result_with_cost.unwrap_add_cost(&mut $cost);
            match result {
                Ok(x) => x,
                Err(e) => return Err(e.into()).wrap_with_cost($cost),
            }
        }
    };
}

/// `?` for a plain `Result` inside a function returning a [`CostResult`].
///
/// Nothing is added to `$cost`; on error the enclosing function returns the
/// converted error with the cost accumulated so far.
#[macro_export]
macro_rules! cost_return_on_error_no_add {
    ( &$cost:ident, $($body:tt)+ ) => {
        {
            use $crate::CostsExt;
            let result = { $($body)+ };
            match result {
                Ok(x) => x,
                Err(e) => return Err(e.into()).wrap_with_cost($cost),
            }
        }
    };
}
