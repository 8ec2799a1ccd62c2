//! Output rendering for prices and sensitivity grids.
//!
//! All values are rounded to two decimals at this boundary; the pricing
//! layers hand over full-precision numbers.

use pricer_core::math::round_to;
use pricer_core::types::{PriceResult, PricingInputs};
use pricer_risk::{PriceTable, SensitivityGrid};
use serde::Serialize;

use crate::config::OutputFormat;
use crate::{CliError, Result};

const DECIMALS: u32 = 2;

/// Title of the call grid.
pub const CALL_TITLE: &str = "Call Prices";
/// Title of the put grid.
pub const PUT_TITLE: &str = "Put Prices";

const ROW_LABEL: &str = "Volatility";
const COLUMN_LABEL: &str = "Spot Price";

#[derive(Serialize)]
struct PriceReport<'a> {
    inputs: &'a PricingInputs,
    price: PriceResult,
}

#[derive(Serialize)]
struct GridReport<'a> {
    inputs: &'a PricingInputs,
    price: PriceResult,
    spot_axis: Vec<f64>,
    volatility_axis: Vec<f64>,
    call_prices: Vec<Vec<f64>>,
    put_prices: Vec<Vec<f64>>,
}

/// Two-decimal display of `value`; a value that rounds to zero prints as
/// `0.00`, never `-0.00`.
pub fn decimal(value: f64) -> String {
    format!("{:.2}", round_to(value, DECIMALS))
}

/// Currency display: `$10.45`.
pub fn currency(value: f64) -> String {
    format!("${}", decimal(value))
}

/// Render the price at the inputs.
pub fn render_price(
    inputs: &PricingInputs,
    price: &PriceResult,
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(price_metrics(price)),
        OutputFormat::Json => to_json(&PriceReport {
            inputs,
            price: price.rounded(DECIMALS),
        }),
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(["option", "price"]).map_err(csv_error)?;
            writer
                .write_record(["call", decimal(price.call).as_str()])
                .map_err(csv_error)?;
            writer
                .write_record(["put", decimal(price.put).as_str()])
                .map_err(csv_error)?;
            finish_csv(writer)
        }
    }
}

/// Render the price at the inputs followed by both grids.
pub fn render_grid(grid: &SensitivityGrid, price: &PriceResult, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => {
            let mut out = price_metrics(price);
            out.push('\n');
            out.push_str(&text_table(CALL_TITLE, grid, grid.call_table()));
            out.push('\n');
            out.push_str(&text_table(PUT_TITLE, grid, grid.put_table()));
            Ok(out)
        }
        OutputFormat::Json => {
            let rounded = grid.rounded(DECIMALS);
            to_json(&GridReport {
                inputs: grid.inputs(),
                price: price.rounded(DECIMALS),
                spot_axis: rounded.spot_axis().to_vec(),
                volatility_axis: rounded.vol_axis().to_vec(),
                call_prices: rounded.call_table().to_rows(),
                put_prices: rounded.put_table().to_rows(),
            })
        }
        OutputFormat::Csv => grid_csv(grid),
    }
}

fn price_metrics(price: &PriceResult) -> String {
    format!(
        "CALL Value: {}\nPUT Value:  {}\n",
        currency(price.call),
        currency(price.put)
    )
}

/// Aligned text table with spot across the top and volatility down the side.
fn text_table(title: &str, grid: &SensitivityGrid, table: &PriceTable) -> String {
    let corner = format!("{} \\ {}", ROW_LABEL, COLUMN_LABEL);
    let headers: Vec<String> = grid.spot_axis().iter().map(|&s| decimal(s)).collect();
    let cells: Vec<Vec<String>> = table
        .rows()
        .map(|row| row.iter().map(|&v| decimal(v)).collect())
        .collect();

    let width = headers
        .iter()
        .chain(cells.iter().flatten())
        .map(String::len)
        .max()
        .unwrap_or(0);
    let label_width = grid
        .vol_axis()
        .iter()
        .map(|&v| decimal(v).len())
        .max()
        .unwrap_or(0)
        .max(corner.len());

    let mut out = format!("{}\n", title);
    out.push_str(&format!("{:<label_width$}", corner));
    for header in &headers {
        out.push_str(&format!("  {:>width$}", header));
    }
    out.push('\n');

    for (vol, row) in grid.vol_axis().iter().zip(&cells) {
        out.push_str(&format!("{:<label_width$}", decimal(*vol)));
        for cell in row {
            out.push_str(&format!("  {:>width$}", cell));
        }
        out.push('\n');
    }
    out
}

fn grid_csv(grid: &SensitivityGrid) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["table".to_string(), "volatility".to_string()];
    header.extend(grid.spot_axis().iter().map(|&s| decimal(s)));
    writer.write_record(&header).map_err(csv_error)?;

    for (name, table) in [("call", grid.call_table()), ("put", grid.put_table())] {
        for (vol, row) in grid.vol_axis().iter().zip(table.rows()) {
            let mut record = vec![name.to_string(), decimal(*vol)];
            record.extend(row.iter().map(|&v| decimal(v)));
            writer.write_record(&record).map_err(csv_error)?;
        }
    }
    finish_csv(writer)
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|e| CliError::output(format!("JSON serialisation failed: {}", e)))
}

fn csv_error(e: csv::Error) -> CliError {
    CliError::output(format!("CSV write failed: {}", e))
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = writer
        .into_inner()
        .map_err(|e| CliError::output(format!("CSV flush failed: {}", e)))?;
    String::from_utf8(bytes).map_err(|e| CliError::output(e.to_string()))
}
