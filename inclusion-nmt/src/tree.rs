use std::marker::PhantomData;

use inclusion_costs::{CostResult, CostsExt, OperationCost};
use tracing::trace;

use crate::{
    Error,
    hasher::{MerkleHasher, Sha256Hasher},
    helper::split_point,
    node::{NAMESPACE_SIZE, NamespaceId, NamespacedHash},
};

/// Namespaced Merkle tree over leaves pushed in namespace order.
///
/// Every pushed leaf is `namespace || data`; the first [`NAMESPACE_SIZE`]
/// bytes are read back as the leaf's namespace and the whole leaf (namespace
/// included) is hashed with [`NamespacedHash::leaf`].
pub struct NamespaceMerkleTree<H: MerkleHasher = Sha256Hasher> {
    leaves: Vec<NamespacedHash>,
    _hasher: PhantomData<H>,
}

impl<H: MerkleHasher> Default for NamespaceMerkleTree<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: MerkleHasher> NamespaceMerkleTree<H> {
    /// Create an empty tree.
    pub fn new() -> Self {
        NamespaceMerkleTree {
            leaves: Vec::new(),
            _hasher: PhantomData,
        }
    }

    /// Create an empty tree with room for `capacity` leaves.
    pub fn with_capacity(capacity: usize) -> Self {
        NamespaceMerkleTree {
            leaves: Vec::with_capacity(capacity),
            _hasher: PhantomData,
        }
    }

    /// Number of leaves pushed so far.
    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    /// Whether no leaf has been pushed.
    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Hash and append a namespaced leaf.
    ///
    /// Fails if the leaf is shorter than a namespace or if its namespace is
    /// smaller than the previous leaf's.
    pub fn push(&mut self, namespaced_data: &[u8]) -> CostResult<(), Error> {
        let namespace: NamespaceId = match namespaced_data
            .get(..NAMESPACE_SIZE)
            .and_then(|prefix| prefix.try_into().ok())
        {
            Some(namespace) => namespace,
            None => {
                return Err(Error::InvalidLeaf(format!(
                    "leaf of {} bytes cannot carry a {}-byte namespace",
                    namespaced_data.len(),
                    NAMESPACE_SIZE
                )))
                .wrap_with_cost(OperationCost::default());
            }
        };

        if let Some(last) = self.leaves.last() {
            if namespace < *last.max_namespace() {
                return Err(Error::UnorderedNamespace {
                    previous: hex::encode(last.max_namespace()),
                    pushed: hex::encode(namespace),
                })
                .wrap_with_cost(OperationCost::default());
            }
        }

        NamespacedHash::leaf::<H>(&namespace, namespaced_data).map(|leaf| {
            self.leaves.push(leaf);
            Ok(())
        })
    }

    /// Compute the root node.
    ///
    /// Fails with [`Error::EmptyInput`] if no leaf was pushed.
    pub fn root(&self) -> CostResult<NamespacedHash, Error> {
        if self.leaves.is_empty() {
            return Err(Error::EmptyInput).wrap_with_cost(OperationCost::default());
        }
        let mut cost = OperationCost::default();
        let root = Self::subtree_root(&self.leaves, &mut cost);
        trace!(
            hasher = H::NAME,
            leaves = self.leaves.len(),
            node_hashes = cost.hash_node_calls,
            "computed namespaced root"
        );
        Ok(root).wrap_with_cost(cost)
    }

    fn subtree_root(leaves: &[NamespacedHash], cost: &mut OperationCost) -> NamespacedHash {
        if let [single] = leaves {
            return *single;
        }
        let (left, right) = leaves.split_at(split_point(leaves.len()));
        let left = Self::subtree_root(left, cost);
        let right = Self::subtree_root(right, cost);
        NamespacedHash::merge::<H>(&left, &right).unwrap_add_cost(cost)
    }
}
