use annokit_designer::History;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Push(u32),
    Undo,
    Redo,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u32>().prop_map(Op::Push),
        Just(Op::Undo),
        Just(Op::Redo),
    ]
}

#[test]
fn test_three_pushes_two_undos_then_push() {
    let mut history: History<Vec<u32>> = History::new(Vec::new(), 0);
    history.push(vec![1]);
    history.push(vec![1, 2]);
    history.push(vec![1, 2, 3]);
    history.undo();
    history.undo();
    history.push(vec![1, 4]);

    assert!(!history.can_redo());
    assert_eq!(history.undo(), Some(&vec![1]));
    assert_eq!(history.undo(), Some(&vec![]));
    assert_eq!(history.undo(), None);
}

proptest! {
    #[test]
    fn prop_push_after_undo_disables_redo(
        ops in proptest::collection::vec(op(), 0..40),
        value in any::<u32>(),
    ) {
        let mut history = History::new(0u32, 0);
        for op in ops {
            match op {
                Op::Push(v) => history.push(v),
                Op::Undo => { history.undo(); }
                Op::Redo => { history.redo(); }
            }
        }
        history.undo();
        history.push(value);
        prop_assert!(!history.can_redo());
        prop_assert_eq!(history.redo(), None);
        prop_assert_eq!(*history.current(), value);
    }

    #[test]
    fn prop_undo_redo_round_trip(values in proptest::collection::vec(any::<u32>(), 1..30), depth in 0usize..30) {
        let mut history = History::new(u32::MAX, 0);
        for v in &values {
            history.push(*v);
        }
        let depth = depth.min(values.len());
        for _ in 0..depth {
            history.undo();
        }
        let expected = if depth == values.len() {
            u32::MAX
        } else {
            values[values.len() - 1 - depth]
        };
        prop_assert_eq!(*history.current(), expected);
        for _ in 0..depth {
            history.redo();
        }
        prop_assert_eq!(*history.current(), values[values.len() - 1]);
    }

    #[test]
    fn prop_depth_limit_holds(count in 0usize..200, max_depth in 1usize..20) {
        let mut history = History::new(0usize, max_depth);
        for i in 0..count {
            history.push(i + 1);
        }
        prop_assert!(history.len() <= max_depth);
        prop_assert_eq!(*history.current(), count);
    }
}
