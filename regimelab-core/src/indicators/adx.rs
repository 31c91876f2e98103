//! ADX — Average Directional Index, trailing-sum variant.
//!
//! Steps:
//! 1. True Range and +DM / -DM from consecutive bars
//! 2. Smooth TR, +DM, -DM with a trailing simple sum over `period` bars
//!    (not Wilder/EMA smoothing)
//! 3. +DI = 100 * sum(+DM) / sum(TR), -DI = 100 * sum(-DM) / sum(TR)
//! 4. DX = 100 * |+DI - -DI| / (+DI + -DI)
//! 5. ADX = trailing simple mean of DX over `period` bars
//!
//! TR and the DMs are undefined at t=0, so the sums first fill at index
//! `period`, DX starts there, and the earliest defined ADX lands at
//! index 2 * period - 1 (a full DX window on top of a full sum window).

use crate::domain::Bar;
use crate::indicators::{rolling_mean, rolling_sum};

/// All intermediate and final series of the ADX computation, aligned to
/// the bar sequence. Exposed whole so the report can surface any column.
#[derive(Debug, Clone)]
pub struct AdxSeries {
    pub true_range: Vec<Option<f64>>,
    pub plus_dm_sum: Vec<Option<f64>>,
    pub minus_dm_sum: Vec<Option<f64>>,
    pub plus_di: Vec<Option<f64>>,
    pub minus_di: Vec<Option<f64>>,
    pub dx: Vec<Option<f64>>,
    pub adx: Vec<Option<f64>>,
}

/// Compute the True Range series.
///
/// TR[t] = max(high-low, |high-prev_close|, |low-prev_close|).
/// Undefined at t=0: there is no prior close, and a high-low fallback
/// would leak a different formula into the first sum window.
pub fn true_range(bars: &[Bar]) -> Vec<Option<f64>> {
    let n = bars.len();
    let mut tr = vec![None; n];

    for i in 1..n {
        let h = bars[i].high;
        let l = bars[i].low;
        let pc = bars[i - 1].close;
        tr[i] = Some((h - l).max((h - pc).abs()).max((l - pc).abs()));
    }

    tr
}

/// Compute +DM and -DM series.
///
/// UpMove = high[t] - high[t-1]; DownMove = low[t-1] - low[t].
/// +DM = UpMove when it exceeds DownMove and is positive, else 0;
/// -DM symmetric. Equal positive moves zero both sides — the tie-break
/// is explicit, not first-match. Undefined at t=0.
pub fn directional_movement(bars: &[Bar]) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
    let n = bars.len();
    let mut plus_dm = vec![None; n];
    let mut minus_dm = vec![None; n];

    for i in 1..n {
        let up_move = bars[i].high - bars[i - 1].high;
        let down_move = bars[i - 1].low - bars[i].low;

        plus_dm[i] = Some(if up_move > down_move && up_move > 0.0 {
            up_move
        } else {
            0.0
        });
        minus_dm[i] = Some(if down_move > up_move && down_move > 0.0 {
            down_move
        } else {
            0.0
        });
    }

    (plus_dm, minus_dm)
}

/// Compute the full ADX stack for the bar series.
///
/// A zero TR sum (flat market over the whole window) leaves both DIs
/// undefined; a zero DI sum leaves DX undefined. Neither is an error.
pub fn compute_adx(bars: &[Bar], period: usize) -> AdxSeries {
    let n = bars.len();

    let true_range = true_range(bars);
    let (plus_dm, minus_dm) = directional_movement(bars);

    let tr_sum = rolling_sum(&true_range, period);
    let plus_dm_sum = rolling_sum(&plus_dm, period);
    let minus_dm_sum = rolling_sum(&minus_dm, period);

    let mut plus_di = vec![None; n];
    let mut minus_di = vec![None; n];
    let mut dx = vec![None; n];

    for i in 0..n {
        let (tr_s, p_s, m_s) = match (tr_sum[i], plus_dm_sum[i], minus_dm_sum[i]) {
            (Some(t), Some(p), Some(m)) => (t, p, m),
            _ => continue,
        };
        if tr_s == 0.0 {
            // Degenerate market: zero range over the whole window.
            continue;
        }

        let p_di = 100.0 * p_s / tr_s;
        let m_di = 100.0 * m_s / tr_s;
        plus_di[i] = Some(p_di);
        minus_di[i] = Some(m_di);

        let di_sum = p_di + m_di;
        if di_sum != 0.0 {
            dx[i] = Some(100.0 * (p_di - m_di).abs() / di_sum);
        }
    }

    let adx = rolling_mean(&dx, period);

    AdxSeries {
        true_range,
        plus_dm_sum,
        minus_dm_sum,
        plus_di,
        minus_di,
        dx,
        adx,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx_opt, DEFAULT_EPSILON};
    use chrono::NaiveDate;

    fn make_ohlc_bars(data: &[(f64, f64, f64, f64)]) -> Vec<Bar> {
        let base_date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        data.iter()
            .enumerate()
            .map(|(i, &(open, high, low, close))| Bar {
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high,
                low,
                close,
                volume: 1000,
            })
            .collect()
    }

    #[test]
    fn true_range_basic() {
        let bars = make_ohlc_bars(&[
            (100.0, 105.0, 95.0, 102.0),  // t=0: undefined (no prior close)
            (102.0, 108.0, 100.0, 106.0), // TR = max(8, |108-102|, |100-102|) = 8
            (106.0, 107.0, 98.0, 99.0),   // TR = max(9, |107-106|, |98-106|) = 9
        ]);
        let tr = true_range(&bars);
        assert!(tr[0].is_none());
        assert_approx_opt(tr[1], 8.0, DEFAULT_EPSILON);
        assert_approx_opt(tr[2], 9.0, DEFAULT_EPSILON);
    }

    #[test]
    fn true_range_gap_up() {
        // Gap up: prev close 100, current bar 110-115-108
        let bars = make_ohlc_bars(&[
            (98.0, 102.0, 97.0, 100.0),
            (110.0, 115.0, 108.0, 112.0), // TR = max(7, |115-100|, |108-100|) = 15
        ]);
        let tr = true_range(&bars);
        assert_approx_opt(tr[1], 15.0, DEFAULT_EPSILON);
    }

    #[test]
    fn directional_movement_up_day() {
        let bars = make_ohlc_bars(&[
            (100.0, 105.0, 95.0, 102.0),
            (102.0, 110.0, 97.0, 108.0), // UpMove=5, DownMove=-2 → +DM=5, -DM=0
        ]);
        let (plus, minus) = directional_movement(&bars);
        assert!(plus[0].is_none());
        assert_approx_opt(plus[1], 5.0, DEFAULT_EPSILON);
        assert_approx_opt(minus[1], 0.0, DEFAULT_EPSILON);
    }

    #[test]
    fn directional_movement_down_day() {
        let bars = make_ohlc_bars(&[
            (100.0, 105.0, 95.0, 102.0),
            (100.0, 103.0, 90.0, 92.0), // UpMove=-2, DownMove=5 → +DM=0, -DM=5
        ]);
        let (plus, minus) = directional_movement(&bars);
        assert_approx_opt(plus[1], 0.0, DEFAULT_EPSILON);
        assert_approx_opt(minus[1], 5.0, DEFAULT_EPSILON);
    }

    #[test]
    fn directional_movement_equal_moves_zero_both() {
        // High up 3 and low down 3 on the same bar: both DMs are zero.
        let bars = make_ohlc_bars(&[
            (100.0, 105.0, 95.0, 102.0),
            (100.0, 108.0, 92.0, 100.0),
        ]);
        let (plus, minus) = directional_movement(&bars);
        assert_approx_opt(plus[1], 0.0, DEFAULT_EPSILON);
        assert_approx_opt(minus[1], 0.0, DEFAULT_EPSILON);
    }

    #[test]
    fn adx_warmup_boundary() {
        let data: Vec<(f64, f64, f64, f64)> = (0..10)
            .map(|i| {
                let base = 100.0 + (i as f64) * ((i % 3) as f64 - 1.0);
                (base, base + 2.0, base - 2.0, base + 1.0)
            })
            .collect();
        let bars = make_ohlc_bars(&data);
        let series = compute_adx(&bars, 3);

        // TR defined from t=1, so the first full 3-sum lands at t=3.
        assert!(series.plus_dm_sum[2].is_none());
        assert!(series.plus_dm_sum[3].is_some());
        assert!(series.plus_di[2].is_none());
        assert!(series.plus_di[3].is_some());
        // DX starts at t=3; the first full DX mean window ends at t=5.
        for v in &series.adx[..5] {
            assert!(v.is_none());
        }
        assert!(series.adx[5].is_some());
    }

    #[test]
    fn adx_bounds() {
        let bars = make_ohlc_bars(&[
            (100.0, 105.0, 95.0, 102.0),
            (102.0, 108.0, 100.0, 106.0),
            (106.0, 107.0, 98.0, 99.0),
            (99.0, 103.0, 97.0, 101.0),
            (101.0, 106.0, 100.0, 105.0),
            (105.0, 110.0, 103.0, 108.0),
            (108.0, 112.0, 106.0, 110.0),
            (110.0, 111.0, 104.0, 105.0),
            (105.0, 109.0, 103.0, 107.0),
            (107.0, 113.0, 105.0, 112.0),
        ]);
        let series = compute_adx(&bars, 3);

        for (i, v) in series.adx.iter().enumerate() {
            if let Some(adx) = v {
                assert!(
                    (0.0..=100.0).contains(adx),
                    "ADX out of bounds at bar {i}: {adx}"
                );
            }
        }
    }

    #[test]
    fn flat_market_leaves_di_undefined() {
        // Identical bars with zero range: TR sum is 0, DI must be None.
        let bars = make_ohlc_bars(&[(100.0, 100.0, 100.0, 100.0); 8]);
        let series = compute_adx(&bars, 3);

        assert!(series.plus_di.iter().all(|v| v.is_none()));
        assert!(series.minus_di.iter().all(|v| v.is_none()));
        assert!(series.dx.iter().all(|v| v.is_none()));
        assert!(series.adx.iter().all(|v| v.is_none()));
    }

    #[test]
    fn one_sided_move_pushes_dx_to_hundred() {
        // Strictly rising highs and lows: -DM is always 0, so DX = 100.
        let data: Vec<(f64, f64, f64, f64)> = (0..8)
            .map(|i| {
                let base = 100.0 + i as f64 * 5.0;
                (base, base + 3.0, base - 3.0, base + 2.0)
            })
            .collect();
        let bars = make_ohlc_bars(&data);
        let series = compute_adx(&bars, 3);

        assert_approx_opt(series.dx[3], 100.0, DEFAULT_EPSILON);
        assert_approx_opt(series.adx[5], 100.0, DEFAULT_EPSILON);
    }

    #[test]
    fn too_few_bars_all_undefined() {
        let bars = make_ohlc_bars(&[(100.0, 105.0, 95.0, 102.0)]);
        let series = compute_adx(&bars, 3);
        assert!(series.adx.iter().all(|v| v.is_none()));
        assert!(series.true_range.iter().all(|v| v.is_none()));
    }
}
