//! Angler progression — XP, levels, badges, and the legendary log.
//!
//! XP is permanent: nothing in here ever subtracts. Undo reverts session
//! score in the session module, but experience earned stays earned.

use crate::shared::*;

/// Total XP an angler must hold to sit at `level`.
///
/// Level 2 costs 100 XP and every level after that doubles:
/// 100, 200, 400, 800, … Level 1 (and below) costs nothing.
///
/// The doubling overflows u64 around level 59; past that the requirement
/// saturates to `u64::MAX`, which no profile can reach, so the level cap
/// falls out naturally instead of wrapping.
pub fn xp_required_for(level: u32) -> u64 {
    if level < 2 {
        return 0;
    }
    let doublings = level - 2;
    if doublings >= 58 {
        return u64::MAX;
    }
    100u64 << doublings
}

/// Applies a scored catch to a profile: session score, XP, level-ups,
/// legendary badge and log entry.
///
/// Returns every level crossed, lowest first, so the caller can fire one
/// `LevelUpEvent` per level even when a single huge catch skips several.
pub fn apply_catch(
    profile: &mut AnglerProfile,
    details: &CatchEvent,
    result: &CatchResult,
) -> Vec<u32> {
    profile.session_score = Some(profile.session_score.unwrap_or(0) + result.final_score);
    profile.xp += u64::from(result.xp_gain);

    let mut levels_crossed = Vec::new();
    loop {
        let next = xp_required_for(profile.level + 1);
        if next == u64::MAX || profile.xp < next {
            break;
        }
        profile.level += 1;
        levels_crossed.push(profile.level);
    }

    if let Some(name) = &result.legendary_name {
        profile.add_badge(format!("legendary-{}", details.species));
        profile.legendary_log.push(LegendaryEntry {
            species: details.species.clone(),
            length_cm: details.length_cm,
            name: name.clone(),
            timestamp: details.timestamp.clone(),
        });
    }

    levels_crossed
}
