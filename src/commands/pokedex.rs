use std::io::Write;

use super::{CommandError, Session};

pub(super) fn inspect<W: Write>(
    session: &Session,
    name: &str,
    out: &mut W,
) -> Result<(), CommandError> {
    let pokemon = session
        .caught
        .get(name)
        .ok_or_else(|| CommandError::NotCaught(name.to_string()))?;

    writeln!(out, "Name: {}", pokemon.name)?;
    writeln!(out, "Height: {}", pokemon.height)?;
    writeln!(out, "Weight: {}", pokemon.weight)?;
    writeln!(out, "Stats:")?;
    for stat in &pokemon.stats {
        writeln!(out, "  -{}: {}", stat.stat.name, stat.base_stat)?;
    }
    writeln!(out, "Types:")?;
    for kind in &pokemon.types {
        writeln!(out, "  - {}", kind.kind.name)?;
    }

    Ok(())
}

pub(super) fn pokedex<W: Write>(session: &Session, out: &mut W) -> Result<(), CommandError> {
    if session.caught.is_empty() {
        return Err(CommandError::EmptyPokedex);
    }

    writeln!(out, "Your Pokedex:")?;
    for name in session.caught.keys() {
        writeln!(out, " - {}", name)?;
    }

    Ok(())
}
