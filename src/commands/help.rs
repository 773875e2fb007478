use std::io::Write;

use super::{Command, CommandError, Flow};

pub fn render_help<W: Write>(out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    writeln!(out)?;

    for command in Command::ALL {
        writeln!(out, "{}: {}", command.usage(), command.description())?;
    }

    writeln!(out)
}

pub(super) fn help<W: Write>(out: &mut W) -> Result<(), CommandError> {
    render_help(out)?;
    Ok(())
}

pub(super) fn exit<W: Write>(out: &mut W) -> Result<Flow, CommandError> {
    writeln!(out, "Closing the Pokedex... Goodbye!")?;
    Ok(Flow::Exit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_lists_every_command() {
        let mut out = Vec::new();
        render_help(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Welcome to the Pokedex!"));
        for command in Command::ALL {
            assert!(text.contains(&format!("{}: ", command.usage())));
        }
        assert!(text.contains("catch <pokemon_name>: "));
    }

    #[test]
    fn exit_stops_the_prompt() {
        let mut out = Vec::new();
        assert_eq!(exit(&mut out).unwrap(), Flow::Exit);
    }
}
