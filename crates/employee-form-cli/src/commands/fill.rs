use anyhow::{Context, Result};
use colored::Colorize;
use employee_form::{Clock, Field, FormSession, SubmitOutcome, CONFIRMATION};
use std::io::{BufRead, Write};

/// Run an interactive registration session on stdin/stdout
pub fn execute<C: Clock>(session: FormSession<C>) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(session, stdin.lock(), stdout.lock())
}

/// Drive a session from line-based input until the user quits or input ends.
///
/// After a rejected submit only the failing fields are asked for again.
pub fn run<C, R, W>(mut session: FormSession<C>, mut input: R, mut out: W) -> Result<()>
where
    C: Clock,
    R: BufRead,
    W: Write,
{
    writeln!(out, "{}", "Employee Registration Form".bold())?;

    loop {
        let pending: Vec<Field> = if session.errors().is_empty() {
            Field::ALL.to_vec()
        } else {
            session.errors().fields().collect()
        };

        for field in pending {
            let marker = if field.is_required() { "*required" } else { "optional" };
            write!(out, "{} ({}): ", field.as_str().cyan(), marker)?;
            out.flush()?;

            let Some(line) = read_line(&mut input)? else {
                return Ok(());
            };
            session.set_field(field, line)?;
        }

        let outcome = session.submit()?;
        let notice = outcome.notice();

        match outcome {
            SubmitOutcome::Rejected(errors) => {
                writeln!(out, "{}", notice.message().yellow().bold())?;
                for (field, error) in errors.iter() {
                    writeln!(out, "  {}: {}", field.as_str().red(), error)?;
                }
            }
            SubmitOutcome::Saved(_) => {
                writeln!(out, "{}", notice.message().green().bold())?;
                writeln!(out, "{}", CONFIRMATION)?;
                write!(out, "Back to form? [y/N]: ")?;
                out.flush()?;

                match read_line(&mut input)? {
                    Some(answer) if answer.trim().eq_ignore_ascii_case("y") => session.back()?,
                    _ => return Ok(()),
                }
            }
        }
    }
}

/// Next line without its terminator, `None` at end of input
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        return Ok(None);
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(Some(line))
}
