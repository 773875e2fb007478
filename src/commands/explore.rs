use std::io::Write;

use super::{CommandError, Session, not_found};

pub(super) async fn explore<W: Write>(
    session: &mut Session,
    area: &str,
    out: &mut W,
) -> Result<(), CommandError> {
    let location = session
        .client
        .location_area(area)
        .await
        .map_err(not_found("location area", area))?;

    writeln!(out, "Exploring {}...", area)?;
    writeln!(out, "Found {} Pokemon:", location.pokemon_encounters.len())?;
    for encounter in &location.pokemon_encounters {
        writeln!(out, " - {}", encounter.pokemon.name)?;
    }

    Ok(())
}
