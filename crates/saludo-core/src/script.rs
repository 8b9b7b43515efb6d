//! The main sequence of the demo program.
//!
//! [`run`] prints a banner, greets, adds two operands, prints a list and its
//! total, then a completion line. Every byte written is also captured by a
//! [`Transcript`] so callers get the printed lines back in an
//! [`ExecutionReport`].

use std::io::{self, Write};

use saludo_models::{ExecutionReport, Number, NumberList};

use crate::adder::add;
use crate::error::Result;
use crate::greeter::greet;
use crate::numbers::{list_line, list_sum_line, sum};

pub const BANNER: &str = "🐍 Ejecutando código Python...";
pub const COMPLETED: &str = "✅ Ejecución completada exitosamente";

pub const DEFAULT_NAME: &str = "Compilador";
pub const DEFAULT_OPERANDS: (i64, i64) = (15, 25);
pub const DEFAULT_NUMBERS: [i64; 5] = [1, 2, 3, 4, 5];

/// Inputs of one run. `Default` gives the literals of the original program.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptParams {
    pub name: String,
    pub operands: (Number, Number),
    pub numbers: NumberList,
}

impl Default for ScriptParams {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            operands: (
                Number::int(DEFAULT_OPERANDS.0),
                Number::int(DEFAULT_OPERANDS.1),
            ),
            numbers: NumberList::from(DEFAULT_NUMBERS.to_vec()),
        }
    }
}

pub fn returned_line(message: &str) -> String {
    format!("Mensaje devuelto: {}", message)
}

/// Write adapter that forwards to `inner` and keeps a copy of what was
/// written.
pub struct Transcript<W: Write> {
    inner: W,
    captured: Vec<u8>,
}

impl<W: Write> Transcript<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            captured: Vec::new(),
        }
    }

    pub fn captured(&self) -> &[u8] {
        &self.captured
    }

    pub fn into_output(self) -> String {
        String::from_utf8_lossy(&self.captured).into_owned()
    }
}

impl<W: Write> Write for Transcript<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.captured.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Values produced so far; fields stay `None` past the step that failed.
#[derive(Default)]
struct Outcome {
    greeting: Option<String>,
    sum: Option<Number>,
    list_sum: Option<Number>,
}

fn execute<W: Write>(out: &mut W, params: &ScriptParams, outcome: &mut Outcome) -> Result<()> {
    writeln!(out, "{}", BANNER)?;

    let greeting = greet(out, &params.name)?;
    writeln!(out, "{}", returned_line(&greeting))?;
    outcome.greeting = Some(greeting);

    let (a, b) = &params.operands;
    outcome.sum = Some(add(out, a, b)?);

    writeln!(out, "{}", list_line(&params.numbers))?;
    let list_sum = sum(params.numbers.as_slice())?;
    writeln!(out, "{}", list_sum_line(&list_sum))?;
    outcome.list_sum = Some(list_sum);

    writeln!(out, "{}", COMPLETED)?;
    out.flush()?;
    Ok(())
}

fn report_from(output: String, outcome: Outcome, error: Option<String>) -> ExecutionReport {
    let mut report = match error {
        Some(e) => ExecutionReport::failed(output, e),
        None => ExecutionReport::from_output(output),
    };
    report.greeting = outcome.greeting;
    report.sum = outcome.sum;
    report.list_sum = outcome.list_sum;
    report
}

/// Run the program, writing to `out`. Lines printed before a failure stay
/// printed; the error is returned.
pub fn run<W: Write>(out: &mut W, params: &ScriptParams) -> Result<ExecutionReport> {
    let mut transcript = Transcript::new(out);
    let mut outcome = Outcome::default();
    execute(&mut transcript, params, &mut outcome)?;
    let report = report_from(transcript.into_output(), outcome, None);
    log::info!("script finished, {} lines printed", report.lines.len());
    Ok(report)
}

/// Like [`run`], but a failure becomes an unsuccessful report carrying the
/// partial transcript and whatever values were already computed.
pub fn run_report<W: Write>(out: &mut W, params: &ScriptParams) -> ExecutionReport {
    let mut transcript = Transcript::new(out);
    let mut outcome = Outcome::default();
    let error = match execute(&mut transcript, params, &mut outcome) {
        Ok(()) => None,
        Err(e) => {
            log::error!("script failed: {}", e);
            Some(e.to_string())
        }
    };
    report_from(transcript.into_output(), outcome, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    const EXPECTED: &str = "🐍 Ejecutando código Python...\n\
¡Hola Compilador desde Python!\n\
Mensaje devuelto: Saludo para Compilador\n\
La suma de 15 + 25 = 40\n\
Lista de números: [1, 2, 3, 4, 5]\n\
Suma de la lista: 15\n\
✅ Ejecución completada exitosamente\n";

    #[test]
    fn default_run_prints_fixture_sequence() {
        let mut buf = Vec::new();
        let report = run(&mut buf, &ScriptParams::default()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), EXPECTED);
        assert!(report.success);
        assert_eq!(report.output, EXPECTED);
        assert_eq!(report.lines.len(), 7);
        assert_eq!(report.greeting.as_deref(), Some("Saludo para Compilador"));
        assert_eq!(report.sum, Some(Number::int(40)));
        assert_eq!(report.list_sum, Some(Number::int(15)));
    }

    #[test]
    fn lines_come_in_order() {
        let report = run(&mut io::sink(), &ScriptParams::default()).unwrap();
        let order = [
            "¡Hola Compilador",
            "Mensaje devuelto:",
            "15 + 25 = 40",
            "Lista de números:",
            "Suma de la lista: 15",
            "completada",
        ];
        let mut last = 0;
        for needle in order {
            let idx = report
                .lines
                .iter()
                .position(|l| l.contains(needle))
                .unwrap_or_else(|| panic!("missing line containing {:?}", needle));
            assert!(idx >= last, "{:?} printed out of order", needle);
            last = idx;
        }
    }

    #[test]
    fn custom_params() {
        let params = ScriptParams {
            name: "Ferris".to_string(),
            operands: (Number::int(1), Number::Float(0.5)),
            numbers: NumberList::default(),
        };
        let report = run(&mut io::sink(), &params).unwrap();
        assert_eq!(report.lines[1], "¡Hola Ferris desde Python!");
        assert_eq!(report.lines[3], "La suma de 1 + 0.5 = 1.5");
        assert_eq!(report.lines[4], "Lista de números: []");
        assert_eq!(report.lines[5], "Suma de la lista: 0");
    }

    #[test]
    fn wide_operands_are_summed_exactly() {
        let params = ScriptParams {
            operands: (Number::int(i64::MAX), Number::int(1)),
            ..ScriptParams::default()
        };
        let report = run(&mut io::sink(), &params).unwrap();
        assert_eq!(
            report.lines[3],
            "La suma de 9223372036854775807 + 1 = 9223372036854775808"
        );
        assert_eq!(report.sum.unwrap().to_string(), "9223372036854775808");
    }

    #[test]
    fn failure_keeps_partial_transcript() {
        let params = ScriptParams {
            operands: (Number::Int(BigInt::from(10).pow(400)), Number::Float(1.0)),
            ..ScriptParams::default()
        };
        let mut buf = Vec::new();
        assert!(run(&mut buf, &params).is_err());
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 3);

        let report = run_report(&mut io::sink(), &params);
        assert!(!report.success);
        assert_eq!(report.lines.len(), 3);
        assert!(report.error.unwrap().contains("too large"));
        // the greeting was computed before the failing sum
        assert_eq!(report.greeting.as_deref(), Some("Saludo para Compilador"));
        assert!(report.sum.is_none());
        assert!(report.list_sum.is_none());
    }

    #[test]
    fn transcript_forwards_and_captures() {
        let mut inner = Vec::new();
        let mut t = Transcript::new(&mut inner);
        write!(t, "hola").unwrap();
        assert_eq!(t.captured(), b"hola");
        assert_eq!(t.into_output(), "hola");
        assert_eq!(inner, b"hola");
    }
}
