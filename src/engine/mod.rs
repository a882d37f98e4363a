// 8.0: stateless facade over the sizing, margin, aggregation and preview
// functions. holds only configuration and logs every decision it makes.

// info when verbose, debug otherwise
macro_rules! log_decision {
    ($engine:expr, $($arg:tt)+) => {
        if $engine.config.verbose {
            tracing::info!($($arg)+)
        } else {
            tracing::debug!($($arg)+)
        }
    };
}

mod core;
mod inputs;
mod positions;
mod preview;
mod results;

pub use self::core::SizingEngine;
pub use self::results::{MarginOutcome, SizeOutcome};
