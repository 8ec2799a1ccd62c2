//! Spot × volatility sensitivity grid.
//!
//! For base inputs (r, S₀, K, T, σ) the grid prices every combination of
//! a perturbed spot `S₀ · fₛ(i)` and a perturbed volatility `σ · fᵥ(j)`,
//! keeping r, K and T fixed. Cell (j, i) holds the price at volatility
//! point j and spot point i.

use pricer_core::math::round_to;
use pricer_core::traits::Priceable;
use pricer_core::types::PricingInputs;
use pricer_models::analytical::BlackScholes;

use super::axis::AxisSpec;
use super::error::GridError;
use super::table::PriceTable;

/// Layout of a sensitivity grid.
///
/// The default reproduces the classic 11 × 11 layout: spot from 80% to
/// 120% in 4% steps, volatility from 50% to 150% in 10% steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    /// Spot axis factors (columns)
    pub spot: AxisSpec,
    /// Volatility axis factors (rows)
    pub volatility: AxisSpec,
    /// Price each cell at the two-decimal axis label instead of the exact
    /// perturbed value
    pub round_axes_before_pricing: bool,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            spot: AxisSpec::spot_default(),
            volatility: AxisSpec::volatility_default(),
            round_axes_before_pricing: false,
        }
    }
}

/// Call and put prices over a spot × volatility lattice.
///
/// Immutable once generated. All values are kept at full precision;
/// [`SensitivityGrid::rounded`] produces the display copy.
#[derive(Debug, Clone, PartialEq)]
pub struct SensitivityGrid {
    inputs: PricingInputs,
    spot_axis: Vec<f64>,
    vol_axis: Vec<f64>,
    call_table: PriceTable,
    put_table: PriceTable,
}

impl SensitivityGrid {
    /// Generates the default 11 × 11 grid with the Black-Scholes model.
    ///
    /// # Errors
    /// `GridError::CellPricing` if any cell fails to price.
    pub fn generate(inputs: &PricingInputs) -> Result<Self, GridError> {
        Self::generate_with(inputs, &GridSpec::default(), &BlackScholes)
    }

    /// Generates a grid with an explicit layout and pricing model.
    ///
    /// Evaluates `pricer` once per cell, row by row. The first failing
    /// cell aborts generation; no partial grid is returned.
    ///
    /// # Errors
    /// `GridError::CellPricing` carrying the row, column and model error.
    pub fn generate_with<P: Priceable>(
        inputs: &PricingInputs,
        spec: &GridSpec,
        pricer: &P,
    ) -> Result<Self, GridError> {
        let mut spot_axis = spec.spot.values(inputs.spot());
        let mut vol_axis = spec.volatility.values(inputs.volatility());
        if spec.round_axes_before_pricing {
            round_all(&mut spot_axis);
            round_all(&mut vol_axis);
        }

        let n_rows = vol_axis.len();
        let n_cols = spot_axis.len();
        let mut calls = Vec::with_capacity(n_rows * n_cols);
        let mut puts = Vec::with_capacity(n_rows * n_cols);

        for (row, &vol) in vol_axis.iter().enumerate() {
            for (col, &spot) in spot_axis.iter().enumerate() {
                let cell_error = |source| GridError::CellPricing { row, col, source };

                let cell = inputs
                    .with_spot(spot)
                    .and_then(|x| x.with_volatility(vol))
                    .map_err(|e| cell_error(e.into()))?;
                let prices = pricer.price(&cell).map_err(cell_error)?;

                calls.push(prices.call);
                puts.push(prices.put);
            }
        }

        Ok(Self {
            inputs: *inputs,
            call_table: PriceTable::from_filled(calls, n_rows, n_cols),
            put_table: PriceTable::from_filled(puts, n_rows, n_cols),
            spot_axis,
            vol_axis,
        })
    }

    /// The base inputs the grid was built around.
    pub fn inputs(&self) -> &PricingInputs {
        &self.inputs
    }

    /// Perturbed spot values, one per column.
    pub fn spot_axis(&self) -> &[f64] {
        &self.spot_axis
    }

    /// Perturbed volatilities, one per row.
    pub fn vol_axis(&self) -> &[f64] {
        &self.vol_axis
    }

    /// Call prices, rows by volatility, columns by spot.
    pub fn call_table(&self) -> &PriceTable {
        &self.call_table
    }

    /// Put prices, rows by volatility, columns by spot.
    pub fn put_table(&self) -> &PriceTable {
        &self.put_table
    }

    /// Display copy with axes and prices rounded to `decimals` places.
    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            inputs: self.inputs,
            spot_axis: self.spot_axis.iter().map(|&v| round_to(v, decimals)).collect(),
            vol_axis: self.vol_axis.iter().map(|&v| round_to(v, decimals)).collect(),
            call_table: self.call_table.rounded(decimals),
            put_table: self.put_table.rounded(decimals),
        }
    }
}

/// Builds the default Black-Scholes grid from the five raw scalars.
///
/// # Examples
/// ```
/// use pricer_risk::scenarios::grid;
///
/// let g = grid(0.05, 100.0, 100.0, 1.0, 0.2).unwrap();
/// assert_eq!(g.call_table().n_rows(), 11);
/// assert_eq!(g.call_table().n_cols(), 11);
///
/// assert!(grid(0.05, 0.0, 100.0, 1.0, 0.2).is_err());
/// ```
///
/// # Errors
/// - `GridError::InvalidInput` when the base inputs are invalid
/// - `GridError::CellPricing` for the first cell that fails to price
pub fn grid(
    rate: f64,
    spot: f64,
    strike: f64,
    expiry: f64,
    volatility: f64,
) -> Result<SensitivityGrid, GridError> {
    let inputs = PricingInputs::new(rate, spot, strike, expiry, volatility)?;
    SensitivityGrid::generate(&inputs)
}

fn round_all(values: &mut [f64]) {
    for v in values.iter_mut() {
        *v = round_to(*v, 2);
    }
}
