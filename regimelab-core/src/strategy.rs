//! Strategy orchestration — parameters, the pipeline wiring, and the
//! aligned output report.
//!
//! One call, one deterministic batch pass: indicators, regime track,
//! both signal rules, the combiner, and the return simulation, in
//! data-flow order over a validated bar series.

use serde::{Deserialize, Serialize};

use crate::backtest::simulate;
use crate::domain::{BarSeries, Signal};
use crate::indicators::{compute_adx, compute_bollinger, sma};
use crate::regime::{classify_series, RegimeThresholds};
use crate::signals::{combine, mean_reversion_positions, trend_signals};

/// Numeric parameters of one backtest run.
///
/// Defaults mirror the canonical configuration: ADX 14, MAs 20/50,
/// Bollinger 20 at 2 standard deviations, regime thresholds 20/25.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyParams {
    pub adx_period: usize,
    pub ma_short_period: usize,
    pub ma_long_period: usize,
    pub bollinger_period: usize,
    pub bollinger_multiplier: f64,
    pub thresholds: RegimeThresholds,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            adx_period: 14,
            ma_short_period: 20,
            ma_long_period: 50,
            bollinger_period: 20,
            bollinger_multiplier: 2.0,
            thresholds: RegimeThresholds::default(),
        }
    }
}

/// Parameter validation errors. Rejected before any computation runs.
#[derive(Debug, thiserror::Error)]
pub enum ParamError {
    #[error("{name} must be >= 1")]
    ZeroWindow { name: &'static str },

    #[error("ma_short_period ({short}) must be < ma_long_period ({long})")]
    InvertedMaWindows { short: usize, long: usize },

    #[error("bollinger_multiplier must be positive, got {0}")]
    NonPositiveMultiplier(f64),

    #[error("choppy_below ({choppy_below}) must be <= trending_above ({trending_above})")]
    InvertedThresholds {
        choppy_below: f64,
        trending_above: f64,
    },
}

impl StrategyParams {
    pub fn validate(&self) -> Result<(), ParamError> {
        for (name, window) in [
            ("adx_period", self.adx_period),
            ("ma_short_period", self.ma_short_period),
            ("ma_long_period", self.ma_long_period),
            ("bollinger_period", self.bollinger_period),
        ] {
            if window == 0 {
                return Err(ParamError::ZeroWindow { name });
            }
        }
        if self.ma_short_period >= self.ma_long_period {
            return Err(ParamError::InvertedMaWindows {
                short: self.ma_short_period,
                long: self.ma_long_period,
            });
        }
        if self.bollinger_multiplier <= 0.0 {
            return Err(ParamError::NonPositiveMultiplier(self.bollinger_multiplier));
        }
        if self.thresholds.choppy_below > self.thresholds.trending_above {
            return Err(ParamError::InvertedThresholds {
                choppy_below: self.thresholds.choppy_below,
                trending_above: self.thresholds.trending_above,
            });
        }
        Ok(())
    }

    /// Deterministic content hash of the parameter set.
    ///
    /// Two runs with identical parameters share the same id, which makes
    /// report artifacts trivially attributable to their configuration.
    pub fn run_id(&self) -> String {
        let json = serde_json::to_string(self).expect("StrategyParams serialization failed");
        blake3::hash(json.as_bytes()).to_hex().to_string()
    }
}

/// One aligned output row per input bar: the columns the reporting
/// collaborator consumes. `None` serializes as an empty cell.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub date: chrono::NaiveDate,
    pub close: f64,
    pub adx: Option<f64>,
    pub ma_short: Option<f64>,
    pub ma_long: Option<f64>,
    pub bb_upper: Option<f64>,
    pub bb_middle: Option<f64>,
    pub bb_lower: Option<f64>,
    pub final_position: i8,
    pub strategy_return: f64,
    pub cumulative_return: f64,
}

/// Full result of one run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub run_id: String,
    pub rows: Vec<ReportRow>,
}

impl RunReport {
    /// Compounded return over the whole series.
    pub fn total_return(&self) -> f64 {
        self.rows.last().map_or(0.0, |row| row.cumulative_return)
    }
}

/// Run the whole pipeline over a validated bar series.
pub fn run_strategy(
    series: &BarSeries,
    params: &StrategyParams,
) -> Result<RunReport, ParamError> {
    params.validate()?;
    let bars = series.bars();

    let adx = compute_adx(bars, params.adx_period);
    let ma_short = sma(bars, params.ma_short_period);
    let ma_long = sma(bars, params.ma_long_period);
    let bands = compute_bollinger(bars, params.bollinger_period, params.bollinger_multiplier);

    let regimes = classify_series(&adx.adx, &params.thresholds);
    let trend = trend_signals(&ma_short, &ma_long);
    let mean_reversion = mean_reversion_positions(bars, &bands);

    let positions: Vec<Signal> = combine(&regimes, &trend, &mean_reversion);
    let performance = simulate(bars, &positions);

    let rows = bars
        .iter()
        .enumerate()
        .map(|(i, bar)| ReportRow {
            date: bar.date,
            close: bar.close,
            adx: adx.adx[i],
            ma_short: ma_short[i],
            ma_long: ma_long[i],
            bb_upper: bands.upper[i],
            bb_middle: bands.middle[i],
            bb_lower: bands.lower[i],
            final_position: positions[i].as_int(),
            strategy_return: performance.strategy_return[i],
            cumulative_return: performance.cumulative_return[i],
        })
        .collect();

    Ok(RunReport {
        run_id: params.run_id(),
        rows,
    })
}
