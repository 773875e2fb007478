use std::io::Write;

use rand::Rng;

use super::{CommandError, Session, not_found};

pub const MIN_DIFFICULTY: u32 = 190;
pub const MAX_DIFFICULTY: u32 = 900;
pub const CHANCE_RANGE: u32 = 1000;

/// Range of the random part of the difficulty for a given base experience.
///
/// Never empty, even for pokemon whose base experience exceeds the spread.
pub fn difficulty_span(base_experience: u32) -> u32 {
    MAX_DIFFICULTY
        .saturating_sub(base_experience)
        .saturating_sub(MIN_DIFFICULTY)
        .max(1)
}

/// A throw succeeds when the chance roll beats the total difficulty.
pub fn is_caught(base_experience: u32, difficulty_roll: u32, chance_roll: u32) -> bool {
    chance_roll > MIN_DIFFICULTY + difficulty_roll + base_experience
}

pub(super) async fn catch<W: Write>(
    session: &mut Session,
    name: &str,
    out: &mut W,
) -> Result<(), CommandError> {
    let pokemon = session
        .client
        .pokemon(name)
        .await
        .map_err(not_found("pokemon", name))?;

    writeln!(out, "Throwing a Pokeball at {}...", pokemon.name)?;

    let difficulty_roll = session
        .rng
        .random_range(0..difficulty_span(pokemon.base_experience));
    let chance_roll = session.rng.random_range(0..CHANCE_RANGE);

    if is_caught(pokemon.base_experience, difficulty_roll, chance_roll) {
        writeln!(out, "{} was caught!", pokemon.name)?;
        writeln!(out, "You may now inspect it with the inspect command.")?;
        tracing::debug!("Caught {}", pokemon.name);
        session.caught.insert(pokemon.name.clone(), pokemon);
    } else {
        writeln!(out, "{} escaped!", pokemon.name)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_shrinks_with_base_experience() {
        assert_eq!(difficulty_span(0), 710);
        assert_eq!(difficulty_span(112), 598);
    }

    #[test]
    fn span_never_reaches_zero() {
        assert_eq!(difficulty_span(710), 1);
        assert_eq!(difficulty_span(635), 75);
        assert_eq!(difficulty_span(9_000), 1);
    }

    #[test]
    fn chance_must_strictly_beat_difficulty() {
        // 190 + 10 + 100 = 300
        assert!(!is_caught(100, 10, 300));
        assert!(is_caught(100, 10, 301));
    }

    #[test]
    fn strongest_pokemon_can_never_be_caught() {
        // Minimum difficulty alone already exceeds the highest chance roll.
        assert!(!is_caught(810, 0, CHANCE_RANGE - 1));
    }
}
