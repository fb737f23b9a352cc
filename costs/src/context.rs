//! A value paired with the hashing work spent producing it.

use crate::OperationCost;

/// Result of a hashing operation together with its cost.
#[must_use]
#[derive(Debug, Eq, PartialEq)]
pub struct CostContext<T> {
    /// The produced value.
    pub value: T,
    /// Hashing work spent on it.
    pub cost: OperationCost,
}

/// `Result` carried inside a [`CostContext`].
pub type CostResult<T, E> = CostContext<Result<T, E>>;

impl<T> CostContext<T> {
    /// Move the cost into `acc_cost` and return the value.
    pub fn unwrap_add_cost(self, acc_cost: &mut OperationCost) -> T {
        *acc_cost += self.cost;
        self.value
    }

    /// Return the value, discarding the cost.
    pub fn unwrap(self) -> T {
        self.value
    }

    /// Split into value and cost.
    pub fn into_parts(self) -> (T, OperationCost) {
        (self.value, self.cost)
    }

    /// Transform the value; the cost is unchanged.
    pub fn map<B>(self, f: impl FnOnce(T) -> B) -> CostContext<B> {
        CostContext {
            value: f(self.value),
            cost: self.cost,
        }
    }

    /// Charge work done before this operation to it as well.
    pub fn add_cost(mut self, cost: OperationCost) -> Self {
        self.cost += cost;
        self
    }
}

impl<T, E> CostResult<T, E> {
    /// Convert the error; the cost is unchanged.
    pub fn map_err<B>(self, f: impl FnOnce(E) -> B) -> CostResult<T, B> {
        self.map(|result| result.map_err(f))
    }
}

/// Gather ordered results into one, summing their costs.
///
/// Stops at the first error. The returned cost covers every result consumed
/// up to and including the failing one.
pub fn collect_costs<T, E>(
    results: impl IntoIterator<Item = CostResult<T, E>>,
) -> CostResult<Vec<T>, E> {
    let results = results.into_iter();
    let mut cost = OperationCost::default();
    let mut values = Vec::with_capacity(results.size_hint().0);
    for result in results {
        match result.unwrap_add_cost(&mut cost) {
            Ok(value) => values.push(value),
            Err(e) => return Err(e).wrap_with_cost(cost),
        }
    }
    Ok(values).wrap_with_cost(cost)
}

/// Attach a cost to any value.
pub trait CostsExt {
    /// Pair `self` with `cost`.
    fn wrap_with_cost(self, cost: OperationCost) -> CostContext<Self>
    where
        Self: Sized,
    {
        CostContext { value: self, cost }
    }
}

impl<T> CostsExt for T {}
