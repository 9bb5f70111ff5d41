use colored::Colorize;
use modeswap::api::{CmdMessage, LayerReport, MessageLevel};
use std::io::{self, Write};

const INDENT: &str = "  ";

// Output errors such as a closed pipe end printing silently.

pub(super) fn print_messages(messages: &[CmdMessage]) {
    let _ = write_messages(&mut io::stdout().lock(), messages);
}

pub(super) fn print_layers(layers: &[LayerReport]) {
    let _ = write_layers(&mut io::stdout().lock(), layers);
}

fn write_messages(out: &mut impl Write, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn write_layers(out: &mut impl Write, layers: &[LayerReport]) -> io::Result<()> {
    for layer in layers {
        let indent = INDENT.repeat(layer.depth);
        let mode = match layer.mode {
            Some(mode) => mode.label().cyan(),
            None => "-".dimmed(),
        };
        let kind = format!("{:?}", layer.kind);
        let mut line = format!(
            "{}{} {} {} {}",
            indent,
            layer.path.to_string().yellow(),
            layer.name.bold(),
            kind.dimmed(),
            mode
        );
        if let Some(source) = &layer.source {
            line.push_str(&format!(" {}", format!("({})", source).dimmed()));
        }
        writeln!(out, "{}", line)?;
        if let Some(problem) = &layer.problem {
            writeln!(out, "{}{}{}", indent, INDENT, problem.red())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn writes_one_line_per_message() {
        colored::control::set_override(false);
        let messages = vec![
            CmdMessage::success("Switched to Dark Mode: 1 changed, 0 skipped"),
            CmdMessage::info("Please select layers to switch modes"),
        ];
        let mut out = Vec::new();
        write_messages(&mut out, &messages).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Switched to Dark Mode: 1 changed, 0 skipped\nPlease select layers to switch modes\n"
        );
    }

    #[test]
    fn closed_output_reports_an_error_instead_of_panicking() {
        let messages = vec![CmdMessage::success("Switched to Light Mode: 1 changed, 0 skipped")];
        let err = write_messages(&mut ClosedPipe, &messages).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
