use linked_bst::{Error, Tree};

use std::collections::HashMap;

use crate::Op;

/// Applies a set of operations to a tree and to a multiset of counts.
/// This way we can ensure that after a random smattering of adds
/// and removes we have the same values, with the same multiplicity.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, counts: &mut HashMap<i8, usize>) {
    for op in ops {
        match op {
            Op::Add(x) => {
                tree.add(*x);
                *counts.entry(*x).or_default() += 1;
            }
            Op::Remove(x) => {
                let was_empty = tree.is_empty();
                match tree.remove(x) {
                    Ok(Some(removed)) => {
                        assert_eq!(removed, *x);
                        let count = counts.get_mut(x).expect("removed a value never added");
                        *count -= 1;
                        if *count == 0 {
                            counts.remove(x);
                        }
                    }
                    Ok(None) => assert!(was_empty),
                    Err(Error::NotFound) => assert!(!counts.contains_key(x)),
                }
            }
            Op::Rebalance => tree.rebalance(),
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut counts = HashMap::new();

        do_ops(&ops, &mut tree, &mut counts);
        tree.len() == counts.values().sum::<usize>()
            && counts.keys().all(|x| tree.find(x) == Some(x))
            && counts
                .iter()
                .all(|(x, count)| tree.range_find(x, x).len() == *count)
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        nots.iter()
            .filter(|x| !xs.contains(x))
            .all(|x| tree.find(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn missing_remove_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().filter(|x| *x != missing).collect();
        let before: Vec<_> = tree.iter().copied().collect();
        let was_empty = tree.is_empty();

        let expected = if was_empty { Ok(None) } else { Err(Error::NotFound) };
        let result = tree.remove(&missing);
        let after: Vec<_> = tree.iter().copied().collect();

        before == after && result == expected
    }
}

quickcheck::quickcheck! {
    fn rebalance_round_trip(xs: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        let before: Vec<_> = tree.inorder().copied().collect();

        tree.rebalance();
        let after: Vec<_> = tree.inorder().copied().collect();

        let mut distinct = before.clone();
        distinct.dedup();
        before == after && (distinct.len() != before.len() || tree.is_balanced())
    }
}

quickcheck::quickcheck! {
    fn range_find_matches_filter(xs: Vec<i8>, low: i8, high: i8) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        let mut expected: Vec<_> = xs.iter().filter(|x| low <= **x && **x <= high).collect();
        expected.sort();
        tree.range_find(&low, &high) == expected
    }
}
