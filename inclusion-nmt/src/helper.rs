/// Index at which a run of `leaf_count` leaves is split into left and right
/// subtrees: the largest power of two strictly less than `leaf_count`.
///
/// Returns 0 for `leaf_count < 2` (nothing to split).
pub fn split_point(leaf_count: usize) -> usize {
    if leaf_count < 2 {
        return 0;
    }
    let bits = usize::BITS - (leaf_count - 1).leading_zeros();
    1 << (bits - 1)
}
