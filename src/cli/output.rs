//! Handles all user-facing output for the binary.
//!
//! Console output mirrors [`TestReport::render_with`] line for line; only the
//! status labels and the failure count gain colour.

use std::io;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::errors::HarnessError;
use crate::report::{detail_body, status_label, RenderOptions, TestReport};

/// Prints the report to stdout, coloured when `options.use_colors` is set.
pub fn print_report(report: &TestReport, options: &RenderOptions) -> io::Result<()> {
    let choice = if options.use_colors {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_report(&mut stdout, report, options)
}

/// Writes the report to any colour-capable sink.
pub fn write_report<W: WriteColor>(
    out: &mut W,
    report: &TestReport,
    options: &RenderOptions,
) -> io::Result<()> {
    // Summary lines are plain apart from the failure count.
    let summary = report.render(false, false);
    for line in summary.lines() {
        if line.starts_with("Failed Tests:") && report.has_failures() {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            writeln!(out, "{}", line)?;
            out.reset()?;
        } else {
            writeln!(out, "{}", line)?;
        }
    }
    if !options.detailed {
        return Ok(());
    }

    write!(out, "\nTest Description:\n")?;
    for (ordinal, result) in report.shown(options.only_failures) {
        write!(out, "{}", report.detail_heading(ordinal, result))?;
        let color = if result.passed() {
            Color::Green
        } else {
            Color::Red
        };
        out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(out, "{}", status_label(result.passed()))?;
        out.reset()?;
        write!(out, "\n{}", detail_body(result))?;
    }
    out.flush()
}

/// Prints a discovery failure as a miette diagnostic on stderr.
pub fn print_error(error: HarnessError) {
    eprintln!("{:?}", miette::Report::new(error));
}
