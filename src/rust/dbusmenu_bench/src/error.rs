use dbusmenu_bus::MenuBusError;
use thiserror::Error;

/// Anything that can stop a benchmark run.
#[derive(Error, Debug)]
pub enum BenchError {
    /// Connection, layout or remote call failure.
    #[error(transparent)]
    Bus(#[from] MenuBusError),

    /// The report could not be written.
    #[error("Unable to write report: {0}")]
    Console(#[from] std::io::Error),
}
