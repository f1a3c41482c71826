/// The cost policy of the edit-distance engine.
///
/// Each of the three edit operations is priced independently, per label.
/// The triangle-inequality and symmetry properties of the resulting distance
/// hold only if the model itself satisfies them, as [Unit] does.
pub trait CostModel {
    /// The cost of deleting a node with the given label.
    fn delete(&self, label: &str) -> usize;

    /// The cost of inserting a node with the given label.
    fn insert(&self, label: &str) -> usize;

    /// The cost of relabeling `from` into `to`.
    ///
    /// Relabeling to an identical label should cost zero.
    fn relabel(&self, from: &str, to: &str) -> usize;
}

/// The unit cost model: delete, insert, and relabel each cost exactly 1, and
/// relabeling a node to an identical label costs 0.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Unit;

impl CostModel for Unit {
    fn delete(&self, _: &str) -> usize {
        1
    }

    fn insert(&self, _: &str) -> usize {
        1
    }

    fn relabel(&self, from: &str, to: &str) -> usize {
        usize::from(from != to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relabeling_to_the_same_label_is_free() {
        assert_eq!(Unit.relabel("a", "a"), 0);
        assert_eq!(Unit.relabel("a", "b"), 1);
    }
}
