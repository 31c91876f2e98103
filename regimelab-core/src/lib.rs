//! RegimeLab Core — regime-aware signal pipeline and backtest simulator.
//!
//! Converts a daily OHLC series into a position track and its realized
//! performance:
//! - Indicator engine (True Range, directional movement, +DI/-DI, DX,
//!   ADX, moving averages, Bollinger bands)
//! - Regime classifier (Trending / Choppy / Transitional on ADX)
//! - Trend rule (MA comparison) and mean-reversion rule (band-touch
//!   state machine)
//! - Regime-gated combiner with forward-fill
//! - Lag-correct return simulation with compounded performance
//!
//! The whole pipeline is a single-threaded, side-effect-free batch pass:
//! identical input and parameters produce identical output. Undefined
//! values (warmup windows, degenerate markets) are `Option::None`
//! end-to-end; the only zero-fills are the two documented ones in the
//! return simulation.

pub mod backtest;
pub mod domain;
pub mod indicators;
pub mod regime;
pub mod signals;
pub mod strategy;

pub use backtest::{simulate, BacktestResult};
pub use domain::{Bar, BarSeries, InputError, Signal};
pub use regime::{classify, classify_series, Regime, RegimeThresholds};
pub use strategy::{run_strategy, ParamError, ReportRow, RunReport, StrategyParams};
