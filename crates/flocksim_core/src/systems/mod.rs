//! Per-role force systems run once per tick before movement is finalized.

pub mod chase;
pub mod flock;
pub mod player;

use flocksim_data::{Agent, Vec2};
use std::ops::Range;

use crate::steering::SteeringLogic;

/// Splits `len` items into `k` contiguous ranges of `len / k` items each,
/// with the last range absorbing the remainder. Every index lands in exactly
/// one range. `k == 0` is treated as one range.
pub fn partition_ranges(len: usize, k: usize) -> Vec<Range<usize>> {
    let k = k.max(1);
    let base = len / k;
    (0..k)
        .map(|i| {
            let start = i * base;
            let end = if i + 1 == k { len } else { start + base };
            start..end
        })
        .collect()
}

/// Splits `agents` into disjoint mutable subsets matching [`partition_ranges`].
pub fn partition_mut(agents: &mut [Agent], k: usize) -> Vec<&mut [Agent]> {
    let ranges = partition_ranges(agents.len(), k);
    let mut chunks = Vec::with_capacity(ranges.len());
    let mut rest = agents;
    for range in ranges {
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(range.len());
        chunks.push(head);
        rest = tail;
    }
    chunks
}

/// Applies `force` unless it has a non-finite component. Returns whether it
/// was applied.
#[inline]
pub(crate) fn apply_finite(agent: &mut Agent, force: Vec2, source: &'static str) -> bool {
    if force.is_finite() {
        agent.apply_force(force);
        true
    } else {
        tracing::warn!(agent = %agent.id, source, "Dropped non-finite steering force");
        false
    }
}
