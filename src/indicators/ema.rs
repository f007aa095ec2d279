// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// EMA gives more weight to recent prices, making it more responsive to new
// information than the Simple Moving Average (SMA).
//
// Formula (recursive form, no bias adjustment):
//   alpha  = 2 / (span + 1)
//   EMA_0  = x_0
//   EMA_t  = EMA_{t-1} + alpha * (x_t - EMA_{t-1})
//
// The recursion starts at the first defined input. Outputs are reported as NaN
// until `span` defined observations have been folded in.
// =============================================================================

/// Compute the EMA series for `values` with the given `span`.
///
/// The output is index-aligned with the input. Entries before the warm-up is
/// complete are `NaN`; `span == 0` yields an all-`NaN` series.
pub fn calculate_ema(values: &[f64], span: usize) -> Vec<f64> {
    if span == 0 {
        return vec![f64::NAN; values.len()];
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    exponential_smoothing(values, alpha, span)
}

/// Recursive exponential smoothing shared by EMA and RSI.
///
/// - Leading `NaN` inputs are skipped; the first defined value seeds the state.
/// - An interior `NaN` input leaves the state untouched.
/// - `min_periods` counts defined observations; until it is reached the output
///   is `NaN`.
pub(crate) fn exponential_smoothing(values: &[f64], alpha: f64, min_periods: usize) -> Vec<f64> {
    let mut result = Vec::with_capacity(values.len());
    let mut state: Option<f64> = None;
    let mut observed = 0usize;

    for &x in values {
        if !x.is_nan() {
            let next = match state {
                None => x,
                Some(prev) => prev + alpha * (x - prev),
            };
            state = Some(next);
            observed += 1;
        }

        match state {
            Some(value) if observed >= min_periods => result.push(value),
            _ => result.push(f64::NAN),
        }
    }

    result
}
