//! Console rendering of the diagnostic report

use std::io::{self, Write};

use serde::Serialize;
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

use crate::report::{DiagnosticReport, to_pretty_json};

use super::config::OutputConfig;

fn write_value<W: WriteColor>(out: &mut W, label: &str, value: &str) -> io::Result<()> {
    write!(out, "{}\t:", label)?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
    write!(out, "{}", value)?;
    out.reset()?;
    writeln!(out)
}

fn write_section<W: WriteColor, T: Serialize>(
    out: &mut W,
    label: &str,
    value: &T,
) -> io::Result<()> {
    let json = to_pretty_json(value).map_err(io::Error::other)?;
    write_value(out, label, &json)
}

/// Write the report summary followed by each data section as JSON.
pub fn write_report<W: WriteColor>(out: &mut W, report: &DiagnosticReport) -> io::Result<()> {
    writeln!(out, "\nGenerating report")?;
    writeln!(out, "=================\n")?;
    writeln!(out, "Basic Information")?;
    write_value(out, "Project", &report.project)?;
    write_value(out, "Address", &report.location)?;
    write_value(out, "Time", &report.time)?;
    write_value(out, "Date", &report.date)?;

    let data = &report.data;
    write_section(out, "Battery", &data.battery)?;
    write_section(out, "Memory", &data.memory)?;
    write_section(out, "CPU", &data.cpu)?;
    write_section(out, "Network", &data.networks)?;
    write_section(out, "System", &data.system)?;
    write_section(out, "Interface", &data.interface)?;
    out.flush()
}

/// Print the report to stdout.
pub fn print_report(report: &DiagnosticReport, config: &OutputConfig) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(config.color_choice());
    write_report(&mut stdout, report)
}

#[cfg(test)]
mod tests {
    use termcolor::Buffer;

    use super::*;
    use crate::report::tests::sample_report;

    #[test]
    fn test_report_sections() {
        let mut buf = Buffer::no_color();
        write_report(&mut buf, &sample_report()).unwrap();
        let text = String::from_utf8(buf.into_inner()).unwrap();

        assert!(text.contains("Project\t:webapp\n"));
        assert!(text.contains("Address\t:/srv/projects/webapp\n"));
        assert!(text.contains("Date\t:2024-03-09\n"));
        for label in ["Battery", "Memory", "CPU", "Network", "System", "Interface"] {
            assert!(text.contains(&format!("{}\t:", label)), "missing {}", label);
        }
        assert!(text.contains("\"ramUsage\": \"50.0%\""));
    }
}
