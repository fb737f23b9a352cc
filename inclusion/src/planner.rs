//! Subtree planning: how a blob's share run is cut into power-of-two
//! subtrees before their roots are committed to.

use std::ops::Range;

use crate::{Error, Result};

fn round_up_power_of_two(value: u64) -> Result<u64> {
    value
        .checked_next_power_of_two()
        .ok_or_else(|| Error::InvalidPlan(format!("{} has no power of two above it", value)))
}

/// Largest power of two not greater than `value`. `value` must be non-zero.
fn round_down_power_of_two(value: u64) -> u64 {
    1 << (u64::BITS - 1 - value.leading_zeros())
}

/// Width of the subtrees a run of `share_count` shares is committed with.
///
/// This is the smallest power of two `w` such that `ceil(share_count / w)`
/// does not exceed `threshold`, capped at `share_count` rounded up to a power
/// of two.
///
/// ```text
/// share_count = 1,  threshold = 64  -> 1
/// share_count = 65, threshold = 64  -> 2
/// share_count = 11, threshold = 1   -> 16
/// ```
pub fn subtree_width(share_count: u64, threshold: u64) -> Result<u64> {
    if share_count == 0 {
        return Err(Error::InvalidPlan("share count must be positive".into()));
    }
    if threshold == 0 {
        return Err(Error::InvalidPlan(
            "subtree root threshold must be positive".into(),
        ));
    }
    let width = round_up_power_of_two(share_count.div_ceil(threshold))?;
    let cap = round_up_power_of_two(share_count)?;
    Ok(width.min(cap))
}

/// Sizes of the consecutive power-of-two trees covering `total` leaves.
///
/// Trees are as large as possible without exceeding `width`: first
/// `total / width` trees of `width`, then the remainder's binary
/// decomposition, largest first. For 11 leaves and width 4:
///
/// ```text
/// [0 1 2 3] [4 5 6 7] [8 9] [10]  -> [4, 4, 2, 1]
/// ```
pub fn mountain_range_sizes(total: u64, width: u64) -> Result<Vec<u64>> {
    if width == 0 || !width.is_power_of_two() {
        return Err(Error::InvalidPlan(format!(
            "subtree width {} is not a positive power of two",
            width
        )));
    }
    if total == 0 {
        return Err(Error::InvalidPlan("no leaves to cover".into()));
    }

    let full = total / width;
    let mut remainder = total % width;
    let mut sizes = Vec::with_capacity(full as usize + remainder.count_ones() as usize);
    sizes.extend(std::iter::repeat_n(width, full as usize));
    while remainder > 0 {
        let size = round_down_power_of_two(remainder);
        sizes.push(size);
        remainder -= size;
    }
    Ok(sizes)
}

/// Subtree layout of one share run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtreePlan {
    width: u64,
    sizes: Vec<u64>,
}

impl SubtreePlan {
    /// Plan the subtrees of a run of `share_count` shares.
    pub fn new(share_count: usize, threshold: u64) -> Result<Self> {
        let total = share_count as u64;
        let width = subtree_width(total, threshold)?;
        let sizes = mountain_range_sizes(total, width)?;
        Ok(SubtreePlan { width, sizes })
    }

    /// Widest subtree in the plan.
    pub fn width(&self) -> u64 {
        self.width
    }

    /// Subtree sizes, left to right.
    pub fn sizes(&self) -> &[u64] {
        &self.sizes
    }

    /// Number of subtree roots the plan produces.
    pub fn subtree_count(&self) -> usize {
        self.sizes.len()
    }

    /// Share index ranges of each subtree, left to right.
    pub fn chunk_ranges(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        self.sizes.iter().scan(0usize, |start, size| {
            let range = *start..*start + *size as usize;
            *start = range.end;
            Some(range)
        })
    }
}
