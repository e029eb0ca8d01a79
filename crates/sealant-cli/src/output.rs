//! Output formatting module

use sealant_app::app::{ComparisonReport, EstimateReport, ShareLink};
use sealant_app::constants::ProfilePreset;
use sealant_domain::CartridgeOption;
use sealant_types::{OutputFormat, Result};
use serde::Serialize;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Human-readable package summary, e.g. "1 full x Cartridge (300ml) plus 1 partial (using 50.0% of it)"
pub fn package_summary(report: &EstimateReport) -> String {
    let estimate = &report.estimate;
    let usage = &estimate.usage;
    let name = &estimate.cartridge.label;

    if usage.full_packages == 0 {
        format!(
            "1 x {} (using {:.1}% of it)",
            name,
            usage.partial_percent()
        )
    } else if usage.has_partial() {
        format!(
            "{} full x {} plus 1 partial (using {:.1}% of it)",
            usage.full_packages,
            name,
            usage.partial_percent()
        )
    } else {
        format!("{} full x {}", usage.full_packages, name)
    }
}

pub fn output_estimate(output_format: OutputFormat, report: &EstimateReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(report);
    }

    let estimate = &report.estimate;
    let joint = &estimate.joint;

    println!("\nSealant Estimate");
    println!("================");
    println!("Profile:         {}", report.profile_name);
    println!("Width:           {} mm", joint.width_mm());
    println!("Depth:           {} mm", joint.depth_mm());
    println!("Length:          {} m", joint.length_m());
    println!("Cartridge:       {} ({} mL)", estimate.cartridge.label, estimate.cartridge.volume_ml);

    println!("\n--- Volume ---");
    if estimate.wastage_percent > 0.0 {
        println!(
            "Base volume:     {:.3} L ({:.1} mL)",
            estimate.base_volume_l(),
            estimate.base_volume_ml
        );
        println!(
            "With {}% waste:  {:.3} L ({:.1} mL)",
            estimate.wastage_percent,
            estimate.total_volume_l(),
            estimate.total_volume_ml
        );
    } else {
        println!(
            "Total volume:    {:.3} L ({:.1} mL)",
            estimate.total_volume_l(),
            estimate.total_volume_ml
        );
    }
    println!("--------------");

    println!("Cartridges:      {}", estimate.cartridges_needed);
    println!("Packages:        {}", package_summary(report));

    Ok(())
}

pub fn output_comparison(output_format: OutputFormat, report: &ComparisonReport) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(report);
    }

    println!("\nCartridge Comparison ({:.1} mL)", report.total_volume_ml);
    println!("{:<24} {:>8} {:>6} {:>12}", "Cartridge", "Size mL", "Count", "Leftover mL");
    println!("{}", "-".repeat(53));
    for row in &report.rows {
        println!(
            "{:<24} {:>8} {:>6} {:>12.1}",
            row.cartridge.label, row.cartridge.volume_ml, row.cartridges_needed, row.leftover_ml
        );
    }
    Ok(())
}

pub fn output_profiles(output_format: OutputFormat, presets: &[ProfilePreset]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(presets);
    }

    println!("{:<8} {:<14} {:>10} {:>10}  {}", "Key", "Name", "Width mm", "Depth mm", "Description");
    for preset in presets {
        println!(
            "{:<8} {:<14} {:>10} {:>10}  {}",
            preset.profile.key(),
            preset.name,
            preset.typical_width_mm,
            preset.typical_depth_mm,
            preset.description
        );
    }
    Ok(())
}

pub fn output_cartridges(output_format: OutputFormat, cartridges: &[CartridgeOption]) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(cartridges);
    }

    println!("{:<16} {:<24} {:>8}", "Key", "Label", "mL");
    for c in cartridges {
        println!("{:<16} {:<24} {:>8}", c.key, c.label, c.volume_ml);
    }
    Ok(())
}

pub fn output_share_link(output_format: OutputFormat, link: &ShareLink) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(link);
    }

    match link.short_url {
        Some(ref short) => {
            println!("Short link: {}", short);
            println!("Full link:  {}", link.long_url);
        }
        None => println!("{}", link.long_url),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sealant_app::app::{run_estimate, EstimateRequest};
    use sealant_app::config::Config;

    fn report(length_m: f64) -> EstimateReport {
        let request = EstimateRequest {
            width_mm: Some(10.0),
            depth_mm: Some(10.0),
            length_m: Some(length_m),
            no_wastage: true,
            ..EstimateRequest::default()
        };
        run_estimate(&Config::default(), &request).unwrap()
    }

    #[test]
    fn test_summary_single_partial() {
        // 100 mL of a 300 mL cartridge
        assert_eq!(package_summary(&report(1.0)), "1 x Cartridge (300ml) (using 33.3% of it)");
    }

    #[test]
    fn test_summary_full_and_partial() {
        // 450 mL -> 1 full + 50%
        assert_eq!(
            package_summary(&report(4.5)),
            "1 full x Cartridge (300ml) plus 1 partial (using 50.0% of it)"
        );
    }

    #[test]
    fn test_summary_exact() {
        assert_eq!(package_summary(&report(6.0)), "2 full x Cartridge (300ml)");
    }
}
