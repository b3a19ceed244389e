use alloc::vec::Vec;

use quickcheck::QuickCheck;

use super::arbitrary::{Input, Op, Outcome};
use crate::Scanner;

/// Property: every operation only looks at the unread input. Applying it to
/// a scanner mid-buffer yields the same outcome, and moves the cursor by the
/// same amount, as applying it to a fresh scanner over `remaining()`. Summed
/// over a sequence this is the additivity of consumption.
#[test]
fn ops_depend_only_on_unread_input() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(input: Input, ops: Vec<Op>) -> bool {
        let mut s = Scanner::new(&input.0);
        let mut consumed = 0;
        for op in &ops {
            // An exhausted cursor skips back onto the last byte, which an
            // empty tail has no counterpart for.
            if s.is_overflow() && matches!(op, Op::Skip(_)) {
                break;
            }
            let before = s.position();
            let mut fresh = Scanner::from(s.remaining());

            let outcome = op.apply(&mut s);
            let fresh_outcome = op.apply(&mut fresh);
            s.assert_invariants();

            if outcome != fresh_outcome || s.position() < before {
                return false;
            }
            if s.position() - before != fresh.position() {
                return false;
            }
            consumed += fresh.position();
        }
        s.position() == consumed
    }

    QuickCheck::new()
        .tests(super::arbitrary::tests())
        .quickcheck(prop as fn(Input, Vec<Op>) -> bool);
}
