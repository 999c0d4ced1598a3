//! Console report
//!
//! Fixed-format lines written by a run, in order:
//!
//! ```text
//!      t [s]      T [K]    P [atm]       u [J/kg]
//!   5.447e-1   2549.961     53.683     2.549974e6
//! idt = 1.36e-1 [s] number of points 812
//! set_states time spent 3.1e-4 [s]
//! reverse constants 2 P + N2 <=> F + O + N2 9.97e-1 1.01e0
//! check_rates time spent 2.2e-3 [s]
//! checked 4 reactions, 1 failing
//! ```
//!
//! One failure line is printed per failing quantity of a failing reaction,
//! in reaction order then forward/equilibrium/reverse order.

use std::io::{self, Write};
use std::time::Duration;

use crate::config::ONE_ATMOSPHERE;
use crate::error::Result;
use crate::trajectory::StateRecord;
use crate::verify::VerificationReport;

/// Label of the timed batch hand-off
pub const SET_STATES_PHASE: &str = "set_states";

/// Label of the timed verification pass
pub const CHECK_RATES_PHASE: &str = "check_rates";

/// Line writer over any [`Write`] sink
#[derive(Debug)]
pub struct Report<W: Write> {
    out: W,
}

impl Report<io::Stdout> {
    /// Report on standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Report<W> {
    /// Report into `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the sink
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Column header of the state line
    pub fn header(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "{:>10} {:>10} {:>10} {:>14}",
            "t [s]", "T [K]", "P [atm]", "u [J/kg]"
        )?;
        Ok(())
    }

    /// State at loop termination, pressure in atm
    pub fn state_line(&mut self, state: &StateRecord, internal_energy: f64) -> Result<()> {
        writeln!(
            self.out,
            "{:10.3e} {:10.3} {:10.3} {:14.6e}",
            state.time,
            state.temperature,
            state.pressure / ONE_ATMOSPHERE,
            internal_energy
        )?;
        Ok(())
    }

    /// Ignition delay and trajectory length
    pub fn ignition_line(&mut self, delay_time: f64, n_points: usize) -> Result<()> {
        writeln!(self.out, "idt = {delay_time:.2e} [s] number of points {n_points}")?;
        Ok(())
    }

    /// Wall-clock time of one phase
    pub fn timing_line(&mut self, phase: &str, elapsed: Duration) -> Result<()> {
        writeln!(
            self.out,
            "{phase} time spent {:.1e} [s]",
            elapsed.as_secs_f64()
        )?;
        Ok(())
    }

    /// One line per failing quantity
    pub fn failure_lines(&mut self, report: &VerificationReport) -> Result<()> {
        for verdict in report.failing() {
            for check in verdict.failures() {
                writeln!(
                    self.out,
                    "{} {} {} {:.2e} {:.2e}",
                    check.quantity.report_name(),
                    verdict.reaction_index,
                    verdict.equation,
                    check.bounds.min,
                    check.bounds.max
                )?;
            }
        }
        Ok(())
    }

    /// Reaction and failure counts
    pub fn summary_line(&mut self, report: &VerificationReport) -> Result<()> {
        writeln!(
            self.out,
            "checked {} reactions, {} failing",
            report.len(),
            report.failing_count()
        )?;
        self.out.flush()?;
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
