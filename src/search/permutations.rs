/// Lazy generator over every ordering of the positions `0..n`.
///
/// Orderings come out in lexicographic order, starting from the identity. Only
/// the current ordering is kept in memory, so walking all `n!` of them costs O(n)
/// space. Positions are always distinct, so each ordering appears exactly once
/// even when the values they index into repeat.
///
/// `advance` lends the current ordering without allocating; the [`Iterator`]
/// implementation yields owned copies instead.
pub struct PositionPermutations {
    order: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl PositionPermutations {
    pub fn new(n: usize) -> Self {
        PositionPermutations {
            order: (0..n).collect(),
            started: false,
            exhausted: false,
        }
    }

    /// Steps to the next ordering and returns it, or `None` once all have been produced.
    pub fn advance(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.order);
        }
        if next_lexicographic(&mut self.order) {
            Some(&self.order)
        } else {
            self.exhausted = true;
            None
        }
    }
}

impl Iterator for PositionPermutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(<[usize]>::to_vec)
    }
}

/// Rearranges `order` into its lexicographic successor.
/// Returns false, leaving `order` untouched, when it is already the last one.
fn next_lexicographic(order: &mut [usize]) -> bool {
    if order.len() < 2 {
        return false;
    }

    // longest non-increasing suffix starts at `pivot`
    let mut pivot = order.len() - 1;
    while pivot > 0 && order[pivot - 1] >= order[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }

    let mut successor = order.len() - 1;
    while order[successor] <= order[pivot - 1] {
        successor -= 1;
    }
    order.swap(pivot - 1, successor);
    order[pivot..].reverse();
    true
}
