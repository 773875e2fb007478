use std::io::Write;

use super::{CommandError, Session};
use crate::schemas::LocationAreaPage;

pub(super) async fn map<W: Write>(session: &mut Session, out: &mut W) -> Result<(), CommandError> {
    // No cursor means the first page, including after the last one.
    let page = session.next.clone();
    show_page(session, page.as_deref(), out).await
}

pub(super) async fn map_back<W: Write>(
    session: &mut Session,
    out: &mut W,
) -> Result<(), CommandError> {
    let Some(page) = session.previous.clone() else {
        writeln!(out, "you're on the first page")?;
        return Ok(());
    };

    show_page(session, Some(&page), out).await
}

async fn show_page<W: Write>(
    session: &mut Session,
    page: Option<&str>,
    out: &mut W,
) -> Result<(), CommandError> {
    let LocationAreaPage {
        next,
        previous,
        results,
        ..
    } = session.client.location_areas(page).await?;

    session.next = next;
    session.previous = previous;

    for location in results {
        writeln!(out, "{}", location.name)?;
    }

    Ok(())
}
