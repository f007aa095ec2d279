// =============================================================================
// Average Directional Index (ADX)
// =============================================================================
//
// ADX quantifies trend **strength** regardless of direction.
//
// Calculation pipeline:
//   1. Compute +DM (positive directional movement) and -DM per bar.
//   2. Compute True Range (TR) per bar:
//        TR = max(high, prev_close) - min(low, prev_close)
//   3. Apply Wilder's running sums (period) to +DM, -DM, and TR, seeded with
//      the plain sum of the first `period` transitions.
//   4. Derive +DI = smoothed(+DM) / smoothed(TR) * 100
//            -DI = smoothed(-DM) / smoothed(TR) * 100
//   5. DX  = |+DI - -DI| / (+DI + -DI) * 100
//   6. ADX = Wilder's smoothed average of DX over `period` bars.
//
// Interpretation:
//   ADX >= 30 => strong trend
//   ADX <  20 => ranging / choppy market
// =============================================================================

pub const DEFAULT_PERIOD: usize = 14;

/// Compute the most recent ADX value from aligned high / low / close slices.
///
/// Returns `NaN` when:
/// - `period` is zero.
/// - There are fewer than `2 * period` bars (`period` transitions seed the
///   running sums, and `period` DX values seed the ADX average).
/// - No directional movement exists anywhere in a DX window (DX is 0 / 0).
pub fn calculate_adx(high: &[f64], low: &[f64], close: &[f64], period: usize) -> f64 {
    let n = high.len().min(low.len()).min(close.len());
    if period == 0 || n < 2 * period {
        return f64::NAN;
    }

    let period_f = period as f64;

    // ------------------------------------------------------------------
    // Step 1 & 2: Raw +DM, -DM, and True Range for each consecutive pair
    // ------------------------------------------------------------------
    let bar_count = n - 1;

    let mut plus_dm = Vec::with_capacity(bar_count);
    let mut minus_dm = Vec::with_capacity(bar_count);
    let mut tr_vals = Vec::with_capacity(bar_count);

    for i in 1..n {
        let prev_close = close[i - 1];

        let tr = high[i].max(prev_close) - low[i].min(prev_close);

        let up_move = high[i] - high[i - 1];
        let down_move = low[i - 1] - low[i];

        let pdm = if up_move > down_move && up_move > 0.0 {
            up_move
        } else {
            0.0
        };
        let mdm = if down_move > up_move && down_move > 0.0 {
            down_move
        } else {
            0.0
        };

        plus_dm.push(pdm);
        minus_dm.push(mdm);
        tr_vals.push(tr);
    }

    // ------------------------------------------------------------------
    // Step 3: Wilder's running sums of +DM, -DM, TR
    // ------------------------------------------------------------------
    let mut smooth_plus_dm: f64 = plus_dm[..period].iter().sum();
    let mut smooth_minus_dm: f64 = minus_dm[..period].iter().sum();
    let mut smooth_tr: f64 = tr_vals[..period].iter().sum();

    let mut dx_values: Vec<f64> = Vec::with_capacity(bar_count - period + 1);
    dx_values.push(compute_dx(smooth_plus_dm, smooth_minus_dm, smooth_tr));

    for i in period..bar_count {
        smooth_plus_dm = smooth_plus_dm - smooth_plus_dm / period_f + plus_dm[i];
        smooth_minus_dm = smooth_minus_dm - smooth_minus_dm / period_f + minus_dm[i];
        smooth_tr = smooth_tr - smooth_tr / period_f + tr_vals[i];

        dx_values.push(compute_dx(smooth_plus_dm, smooth_minus_dm, smooth_tr));
    }

    // ------------------------------------------------------------------
    // Step 6: ADX = Wilder's smoothed average of DX
    // ------------------------------------------------------------------
    // Seed ADX with the mean of the first `period` DX values.
    let mut adx = dx_values[..period].iter().sum::<f64>() / period_f;
    for &dx in &dx_values[period..] {
        adx = (adx * (period_f - 1.0) + dx) / period_f;
    }

    adx
}

/// ADX with the conventional 14-bar period.
pub fn calculate_adx_default(high: &[f64], low: &[f64], close: &[f64]) -> f64 {
    calculate_adx(high, low, close, DEFAULT_PERIOD)
}

// =============================================================================
// Internal helpers
// =============================================================================

/// Compute DX from smoothed +DM, -DM, and TR values.
///
/// A zero true range yields zero DI on both sides; when both DI are zero the
/// ratio is undefined and DX is `NaN`.
fn compute_dx(smooth_plus_dm: f64, smooth_minus_dm: f64, smooth_tr: f64) -> f64 {
    let (plus_di, minus_di) = if smooth_tr == 0.0 {
        (0.0, 0.0)
    } else {
        (
            (smooth_plus_dm / smooth_tr) * 100.0,
            (smooth_minus_dm / smooth_tr) * 100.0,
        )
    };

    let di_sum = plus_di + minus_di;
    if di_sum == 0.0 {
        return f64::NAN;
    }

    ((plus_di - minus_di).abs() / di_sum) * 100.0
}
