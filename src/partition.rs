//! Randomized, size-balanced partitioning of names into groups.
//!
//! Names are first permuted with a backward Fisher-Yates pass and then dealt
//! round-robin into `k` groups, so group sizes never differ by more than one
//! and membership (not just order) is random.

use crate::error::PartitionError;
use rand::Rng;

/// Smallest name count the partitioner accepts.
pub const MIN_NAMES: usize = 2;
/// Smallest group count the partitioner accepts.
pub const MIN_GROUPS: usize = 2;

/// An immutable split of every input name into exactly `k` ordered groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    groups: Vec<Vec<String>>,
}

impl Partition {
    /// Groups in slot order.
    pub fn groups(&self) -> &[Vec<String>] {
        &self.groups
    }

    /// Number of groups (`k`).
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Number of names across all groups (`n`).
    pub fn total_names(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Group sizes in slot order.
    pub fn size_profile(&self) -> Vec<usize> {
        self.groups.iter().map(Vec::len).collect()
    }

    /// Consume the partition and return its groups.
    pub fn into_groups(self) -> Vec<Vec<String>> {
        self.groups
    }
}

/// Return a uniformly random permutation of `items` without touching the input.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Partition `names` into `k` balanced groups using the thread-local RNG.
pub fn partition(names: &[String], k: usize) -> Result<Partition, PartitionError> {
    partition_with_rng(names, k, &mut rand::thread_rng())
}

/// Partition `names` into `k` balanced groups drawing randomness from `rng`.
pub fn partition_with_rng<R: Rng + ?Sized>(
    names: &[String],
    k: usize,
    rng: &mut R,
) -> Result<Partition, PartitionError> {
    check_contract(names.len(), k)?;

    let shuffled = shuffle(names, rng);
    let mut groups: Vec<Vec<String>> = vec![Vec::new(); k];
    for (idx, name) in shuffled.into_iter().enumerate() {
        groups[idx % k].push(name);
    }

    tracing::debug!(
        names = names.len(),
        groups = k,
        "partitioned names into groups"
    );
    Ok(Partition { groups })
}

fn check_contract(names: usize, groups: usize) -> Result<(), PartitionError> {
    if names < MIN_NAMES {
        return Err(PartitionError::TooFewNames { count: names });
    }
    if groups < MIN_GROUPS {
        return Err(PartitionError::TooFewGroups { groups });
    }
    if groups > names {
        return Err(PartitionError::TooManyGroups { groups, names });
    }
    Ok(())
}
