//! Property-based invariant tests for the f64 geometry primitives.
//!
//! 1. Size max/min bracket both inputs.
//! 2. Size max/min are commutative and idempotent.
//! 3. An infinite axis never wins a min and always wins a max.

use proptest::prelude::*;
use ugrid_core::geometry::Size;

// ── Helpers ─────────────────────────────────────────────────────────────

fn size_strategy() -> impl Strategy<Value = Size> {
    (0.0f64..10_000.0, 0.0f64..10_000.0).prop_map(|(w, h)| Size::new(w, h))
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Bracketing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn size_max_min_bracket(a in size_strategy(), b in size_strategy()) {
        let hi = a.max(b);
        let lo = a.min(b);
        prop_assert!(hi.width >= a.width && hi.width >= b.width);
        prop_assert!(hi.height >= a.height && hi.height >= b.height);
        prop_assert!(lo.width <= a.width && lo.width <= b.width);
        prop_assert!(lo.height <= a.height && lo.height <= b.height);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Algebra
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn size_max_min_commutative(a in size_strategy(), b in size_strategy()) {
        prop_assert_eq!(a.max(b), b.max(a));
        prop_assert_eq!(a.min(b), b.min(a));
    }

    #[test]
    fn size_max_min_idempotent(a in size_strategy()) {
        prop_assert_eq!(a.max(a), a);
        prop_assert_eq!(a.min(a), a);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Unbounded axes
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn infinite_constraint_is_neutral_for_min(a in size_strategy()) {
        prop_assert_eq!(a.min(Size::INFINITE), a);
        prop_assert_eq!(a.max(Size::INFINITE), Size::INFINITE);
        prop_assert_eq!(a.max(Size::ZERO), a);
    }
}
