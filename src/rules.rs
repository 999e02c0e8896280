//! The third-card draw rules.
//!
//! Both rules are pure functions over point totals. The player's rule depends
//! only on its own two-card total. The banker's rule also depends on the point
//! value of the player's third card, when one was drawn, which is what makes
//! the tableau asymmetric.

/// Returns whether the player draws a third card.
///
/// The player draws on a two-card total of 0 through 5 and stands on 6 or 7.
/// Totals of 8 or 9 are naturals and never reach this rule.
#[must_use]
pub const fn player_draws(total: u8) -> bool {
    total <= 5
}

/// Returns whether the banker draws a third card.
///
/// `player_third` is the point value of the player's third card, or `None`
/// when the player stood. With no player third card the banker draws on 0
/// through 5, mirroring the player's own rule. Otherwise the decision follows
/// the standard tableau, one arm per banker total:
///
/// | Banker total | Draws when player's third card is |
/// |--------------|-----------------------------------|
/// | 0–2          | anything                          |
/// | 3            | anything but 8                    |
/// | 4            | 2–7                               |
/// | 5            | 4–7                               |
/// | 6            | 6–7                               |
/// | 7+           | never                             |
#[must_use]
pub const fn banker_draws(total: u8, player_third: Option<u8>) -> bool {
    match player_third {
        None => total <= 5,
        Some(third) => match total {
            0..=2 => true,
            3 => third != 8,
            4 => matches!(third, 2..=7),
            5 => matches!(third, 4..=7),
            6 => matches!(third, 6..=7),
            _ => false,
        },
    }
}
