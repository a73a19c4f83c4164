//! Formal verification of invariants using Kani model checker.
//!
//! These proof harnesses check that invariants hold for every bounded
//! sequence of rolls, accepted or rejected.

#[cfg(kani)]
mod proofs {
    use crate::{BowlingGame, BowlingInvariants, InvariantSet};

    /// Verify the invariant set holds whatever rolls are attempted.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_invariants_after_arbitrary_rolls() {
        let mut game = BowlingGame::new();

        for _ in 0..4 {
            let pins: i32 = kani::any();
            kani::assume(pins >= -1 && pins <= 11);
            let _ = game.roll(pins);
        }

        assert!(
            BowlingInvariants::check_all(&game).is_ok(),
            "BowlingInvariants violated"
        );
    }

    /// Verify a rejected roll leaves the game untouched.
    #[kani::proof]
    #[kani::unwind(4)]
    fn verify_rejected_roll_is_atomic() {
        let mut game = BowlingGame::new();
        let first: i32 = kani::any();
        kani::assume(first >= 0 && first <= 10);
        let _ = game.roll(first);

        let before = game.clone();
        let pins: i32 = kani::any();
        if game.roll(pins).is_err() {
            assert!(game == before, "Rejected roll mutated the game");
        }
    }
}
