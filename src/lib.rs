// perps-sizing: order sizing and preview derivation for a perps trading UI.
// pure functions over caller-owned snapshots. no I/O, no shared state.
//
// file map (search X.0 for structs, X.1+ for logic):
//   1.x  types.rs: primitives: Asset, MarketKey, Side, SignedSize, Quote, AccountMode
//   1.7  input.rs: lenient input parsing, display precision flooring
//   2.x  sizing.rs: close size delta resolution and validation
//   3.x  margin.rs: percent-of-idle-margin allocation and validation
//   4.x  position.rs: position snapshots, history records, SL/TP
//   4.5  aggregate.rs: positions table aggregation and ordering
//   5.x  intent.rs: the order inputs being edited
//   6.x  format.rs: dollar / percent formatting
//   6.1  preview.rs: trade confirmation preview rows
//   7.x  config.rs: display precision, verbosity, presets
//   8.x  engine/: SizingEngine facade with logging
//   12.x market.rs: market snapshots and mark prices

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod format;
pub mod input;
pub mod intent;
pub mod margin;
pub mod market;
pub mod position;
pub mod preview;
pub mod sizing;
pub mod types;

// re exports for convenience
pub use aggregate::*;
pub use config::{ConfigError, EngineConfig, Environment};
pub use engine::*;
pub use input::{classify_input, parse_input, parse_or_zero, DisplayPrecision, ParsedInput};
pub use intent::OrderIntent;
pub use margin::*;
pub use market::*;
pub use position::*;
pub use preview::*;
pub use sizing::*;
pub use types::*;
