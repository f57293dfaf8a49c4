//! The win condition: the danger die must not match any difference die.

/// Decide a rolled combat. Returns true if the attacker wins.
///
/// A missing danger die counts as a loss. With at least one difference die,
/// the attacker loses if the danger die shows any value among them.
pub fn evaluate(difference: &[u8], danger: Option<u8>, difference_dice: usize) -> bool {
    let Some(danger) = danger else {
        return false;
    };
    !(difference_dice > 0 && difference.contains(&danger))
}
