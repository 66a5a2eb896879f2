/// Base magnitude of a decided game.
pub const WIN: i32 = 1000;

/// A bound above any score the search can produce.
pub const INF: i32 = i32::MAX;

/// Embeds the remaining depth into a decided score.
///
/// Wins found higher in the tree score larger, so the search prefers the
/// fastest win and, symmetrically, the slowest loss.
pub fn win_score(remaining: u8) -> i32
{
    WIN * (remaining as i32 + 1)
}
