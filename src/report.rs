// =============================================================================
// Text report
// =============================================================================
//
// Fixed-width rendering of the snapshot and its labels. No computation happens
// here beyond number formatting.

use std::io::{self, Write};

use chrono::NaiveDate;

use crate::analysis::IndicatorSnapshot;
use crate::classifier::Classification;

const WIDTH: usize = 55;
const LABEL_WIDTH: usize = 19;

/// Instrument details shown in the report header.
#[derive(Debug, Clone)]
pub struct ReportHeader<'a> {
    pub symbol: &'a str,
    pub currency: &'a str,
    pub as_of: Option<NaiveDate>,
}

/// Write the full four-section report.
pub fn write_report<W: Write>(
    out: &mut W,
    header: &ReportHeader<'_>,
    snapshot: &IndicatorSnapshot,
    labels: &Classification,
) -> io::Result<()> {
    let cur = currency_suffix(header.currency);
    let money = |v: f64| format!("{} {cur}", number(v));

    rule(out, '=')?;
    match header.as_of {
        Some(date) => writeln!(out, "REPORT: {} ({}) as of {date}", header.symbol, header.currency)?,
        None => writeln!(out, "REPORT: {} ({})", header.symbol, header.currency)?,
    }
    rule(out, '=')?;
    line(out, "Current price:", money(snapshot.current_price))?;
    line(out, "All-time high:", money(snapshot.all_time_high))?;
    line(out, "Distance to ATH:", format!("{} %", number(snapshot.distance_to_ath_pct)))?;
    rule(out, '-')?;

    writeln!(out, "1. TREND & MOMENTUM:")?;
    line(out, "Base trend:", labels.trend)?;
    line(out, "MACD signal:", labels.macd)?;
    line(out, "Strength (ADX):", format!("{} -> {}", number(snapshot.adx), labels.strength))?;
    line(out, "SMA 50:", money(snapshot.sma_50))?;
    line(out, "SMA 200:", money(snapshot.sma_200))?;
    rule(out, '-')?;

    writeln!(out, "2. DYNAMIC LEVELS (Bollinger):")?;
    line(out, "BB resistance:", money(snapshot.bollinger_upper))?;
    line(out, "BB support:", money(snapshot.bollinger_lower))?;
    line(out, "Position:", labels.zone)?;
    rule(out, '-')?;

    writeln!(out, "3. STATIC LEVELS:")?;
    writeln!(out, "[SHORT TERM - 1 month]")?;
    line(out, "Resistance:", money(snapshot.resistance_short))?;
    line(out, "Support:", money(snapshot.support_short))?;
    writeln!(out, "[MEDIUM TERM - 3 months]")?;
    line(out, "Resistance:", money(snapshot.resistance_medium))?;
    line(out, "Support:", money(snapshot.support_medium))?;
    rule(out, '-')?;

    writeln!(out, "4. STRENGTH (RSI):")?;
    line(out, "RSI value:", number(snapshot.rsi))?;
    line(out, "State:", labels.momentum)?;
    rule(out, '=')?;

    Ok(())
}

/// The single message printed when no data could be retrieved.
pub fn no_data_message(ticker: &str) -> String {
    format!("Could not download data for {ticker}. Check your internet connection.")
}

/// Two decimals; an undefined value renders as `nan`.
fn number(v: f64) -> String {
    if v.is_nan() {
        "nan".to_string()
    } else {
        format!("{v:.2}")
    }
}

/// `$` for US dollars, the ISO code for anything else.
fn currency_suffix(currency: &str) -> &str {
    if currency.eq_ignore_ascii_case("USD") {
        "$"
    } else {
        currency
    }
}

fn rule<W: Write>(out: &mut W, ch: char) -> io::Result<()> {
    writeln!(out, "{}", ch.to_string().repeat(WIDTH))
}

fn line<W: Write>(out: &mut W, label: &str, value: impl std::fmt::Display) -> io::Result<()> {
    writeln!(out, "{label:<LABEL_WIDTH$}{value}")
}
