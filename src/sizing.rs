//! Solar system sizing estimate
//!
//! Maps a monthly electricity bill to a panel count, installed power,
//! roof area and expected production using fixed constants.

use thiserror::Error;

/// Average daily peak sun hours
pub const SUN_HOURS_PER_DAY: f64 = 4.1;
/// Rated power of one panel in watts
pub const PANEL_WATTS: f64 = 570.0;
/// Area of one panel in square metres
pub const PANEL_AREA_M2: f64 = 2.4;
/// Energy tariff in currency per kWh
pub const TARIFF_PER_KWH: f64 = 0.72;
/// Days in the billing month used by the estimate
pub const DAYS_PER_MONTH: f64 = 30.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SizingError {
    #[error("invalid monthly bill: {0}")]
    InvalidBill(String),
}

impl SizingError {
    /// User-facing alert text
    pub fn user_message(&self) -> &'static str {
        match self {
            SizingError::InvalidBill(_) => "Please enter a valid amount for the monthly bill.",
        }
    }
}

/// Derived sizing figures; never mutated after creation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizingResult {
    pub monthly_consumption_kwh: f64,
    pub required_power_kw: f64,
    pub panel_count: u32,
    pub installed_power_kw: f64,
    pub monthly_production_kwh: f64,
    pub required_area_m2: f64,
}

/// Compute the sizing estimate for a monthly bill amount.
///
/// The panel count is rounded up so the installed power never falls short
/// of the computed requirement.
pub fn estimate(monthly_bill: f64) -> Result<SizingResult, SizingError> {
    if !monthly_bill.is_finite() || monthly_bill <= 0.0 {
        return Err(SizingError::InvalidBill(monthly_bill.to_string()));
    }

    let monthly_consumption_kwh = monthly_bill / TARIFF_PER_KWH;
    let required_power_kw = monthly_consumption_kwh / (SUN_HOURS_PER_DAY * DAYS_PER_MONTH);
    let panel_count = (required_power_kw * 1000.0 / PANEL_WATTS).ceil();
    if panel_count > u32::MAX as f64 {
        return Err(SizingError::InvalidBill(monthly_bill.to_string()));
    }
    let installed_power_kw = panel_count * PANEL_WATTS / 1000.0;
    let monthly_production_kwh = installed_power_kw * SUN_HOURS_PER_DAY * DAYS_PER_MONTH;
    let required_area_m2 = panel_count * PANEL_AREA_M2;

    Ok(SizingResult {
        monthly_consumption_kwh,
        required_power_kw,
        panel_count: panel_count as u32,
        installed_power_kw,
        monthly_production_kwh,
        required_area_m2,
    })
}

/// Parse the bill as typed by the user, then estimate.
///
/// Accepts an optional currency prefix and either `.` or `,` as the decimal
/// separator.
pub fn estimate_from_input(raw: &str) -> Result<SizingResult, SizingError> {
    let cleaned = raw
        .trim()
        .trim_start_matches("R$")
        .trim_start_matches('$')
        .trim()
        .replace(',', ".");
    let amount: f64 = cleaned
        .parse()
        .map_err(|_| SizingError::InvalidBill(raw.to_string()))?;
    estimate(amount)
}
