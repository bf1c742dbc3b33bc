use crate::{run_pass_with_clock, BenchError, Clock, CumulativeTimings, MonotonicClock};
use dbusmenu_bus::MenuService;
use std::io::Write;
use tracing::{debug, info};

/// What the driver should do with the menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchOptions {
    /// Passes to average over. Ignored in dump mode.
    pub count: u32,

    /// Dump the replies of a single pass instead of timing.
    pub dump: bool,
}

impl Default for BenchOptions {
    fn default() -> Self {
        Self {
            count: 1,
            dump: false,
        }
    }
}

/// Runs the benchmark against `menu`, writing the report to `out`.
///
/// In dump mode exactly one pass runs and its replies are written as they
/// arrive. Otherwise `count` passes run silently and the per-call averages
/// are written once all of them have succeeded; a failing pass aborts the
/// run and nothing is written.
pub async fn run<M: MenuService>(
    menu: &M,
    options: &BenchOptions,
    out: &mut dyn Write,
) -> Result<(), BenchError> {
    run_with_clock(menu, options, out, &MonotonicClock).await
}

/// `run`, timing the calls with `clock`.
pub async fn run_with_clock<M: MenuService, C: Clock>(
    menu: &M,
    options: &BenchOptions,
    out: &mut dyn Write,
    clock: &C,
) -> Result<(), BenchError> {
    if options.dump {
        run_pass_with_clock(menu, Some(&mut *out), clock).await?;
        out.flush()?;
        return Ok(());
    }

    info!("Running {} passes", options.count);
    let mut totals = CumulativeTimings::new();
    for pass in 0..options.count {
        let sample = run_pass_with_clock(menu, None, clock).await?;
        debug!("Pass {pass}: {sample:?}");
        totals.add(&sample);
    }

    totals.write_averages(out)?;
    out.flush()?;
    Ok(())
}
