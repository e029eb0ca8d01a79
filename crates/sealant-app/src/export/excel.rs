//! Excel export of an estimate summary

use crate::app::EstimateReport;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use sealant_types::{Error, Result};
use std::path::Path;

const NOTES: [&str; 4] = [
    "Volume (mL) = width (mm) x depth (mm) x length (mm) / 1000; V-joints use half the rectangular area",
    "A 15% wastage allowance is recommended for most applications",
    "Always check manufacturer guidelines for specific applications",
    "Store sealant in a cool, dry place and check expiration dates",
];

/// Export an estimate summary to an Excel file
pub fn export_estimate_to_excel(report: &EstimateReport, output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let inputs_sheet = workbook.add_worksheet();
    write_inputs_sheet(inputs_sheet, report)?;

    let results_sheet = workbook.add_worksheet();
    write_results_sheet(results_sheet, report)?;

    let notes_sheet = workbook.add_worksheet();
    write_notes_sheet(notes_sheet)?;

    workbook
        .save(output_path)
        .map_err(|e| Error::Excel(e.to_string()))?;

    tracing::info!(path = %output_path.display(), "exported estimate summary");
    Ok(())
}

fn xl<T>(result: std::result::Result<T, rust_xlsxwriter::XlsxError>) -> Result<T> {
    result.map_err(|e| Error::Excel(e.to_string()))
}

fn write_header_row(sheet: &mut Worksheet, row: u32, headers: &[&str]) -> Result<()> {
    let header_format = Format::new().set_bold();
    for (col, header) in headers.iter().enumerate() {
        xl(sheet.write_string_with_format(row, col as u16, *header, &header_format))?;
    }
    Ok(())
}

fn write_metric(sheet: &mut Worksheet, row: u32, name: &str, value: f64, unit: &str) -> Result<()> {
    xl(sheet.write_string(row, 0, name))?;
    xl(sheet.write_number(row, 1, value))?;
    xl(sheet.write_string(row, 2, unit))?;
    Ok(())
}

fn write_inputs_sheet(sheet: &mut Worksheet, report: &EstimateReport) -> Result<()> {
    xl(sheet.set_name("Inputs"))?;
    let estimate = &report.estimate;
    let title_format = Format::new().set_bold().set_font_size(16);

    xl(sheet.write_string_with_format(0, 0, "Sealant Calculation Summary", &title_format))?;
    xl(sheet.write_string(1, 0, "Generated on:"))?;
    xl(sheet.write_string(
        1,
        1,
        report.generated_at.format("%Y-%m-%d %H:%M").to_string(),
    ))?;

    write_header_row(sheet, 3, &["Parameter", "Value", "Unit"])?;

    xl(sheet.write_string(4, 0, "Joint Profile"))?;
    xl(sheet.write_string(4, 1, &report.profile_name))?;
    write_metric(sheet, 5, "Joint Width", estimate.joint.width_mm(), "mm")?;
    write_metric(sheet, 6, "Joint Depth", estimate.joint.depth_mm(), "mm")?;
    write_metric(sheet, 7, "Joint Length", estimate.joint.length_m(), "m")?;
    xl(sheet.write_string(8, 0, "Package Type"))?;
    xl(sheet.write_string(8, 1, &estimate.cartridge.label))?;
    xl(sheet.write_string(9, 0, "Wastage Allowance"))?;
    if estimate.wastage_percent > 0.0 {
        xl(sheet.write_number(9, 1, estimate.wastage_percent))?;
        xl(sheet.write_string(9, 2, "%"))?;
    } else {
        xl(sheet.write_string(9, 1, "None"))?;
    }

    xl(sheet.set_column_width(0, 22))?;
    xl(sheet.set_column_width(1, 20))?;
    Ok(())
}

fn write_results_sheet(sheet: &mut Worksheet, report: &EstimateReport) -> Result<()> {
    xl(sheet.set_name("Results"))?;
    let estimate = &report.estimate;

    write_header_row(sheet, 0, &["Metric", "Value", "Unit"])?;
    write_metric(sheet, 1, "Base Volume", estimate.base_volume_l(), "L")?;
    write_metric(sheet, 2, "Base Volume", estimate.base_volume_ml, "mL")?;
    write_metric(sheet, 3, "Final Volume", estimate.total_volume_l(), "L")?;
    write_metric(sheet, 4, "Final Volume", estimate.total_volume_ml, "mL")?;
    write_metric(sheet, 5, "Packages Required", f64::from(estimate.cartridges_needed), "")?;
    write_metric(
        sheet,
        6,
        "Full Packages",
        f64::from(estimate.usage.full_packages),
        "",
    )?;
    write_metric(sheet, 7, "Partial Package", estimate.usage.partial_percent(), "%")?;

    xl(sheet.set_column_width(0, 22))?;
    Ok(())
}

fn write_notes_sheet(sheet: &mut Worksheet) -> Result<()> {
    xl(sheet.set_name("Notes"))?;
    write_header_row(sheet, 0, &["Notes"])?;
    for (i, note) in NOTES.iter().enumerate() {
        xl(sheet.write_string(i as u32 + 1, 0, format!("{}. {}", i + 1, note)))?;
    }
    xl(sheet.set_column_width(0, 90))?;
    Ok(())
}
