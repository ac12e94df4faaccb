// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use super::runner::DetectionRun;
use crate::error::IntegrityWarning;
use crate::model::SegmentedModel;
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report the pockets found in a run, members in display order
    pub fn report_detection(file: &str, run: &DetectionRun, verbose: bool) {
        let report = &run.report;

        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Model:".bold(), file.cyan());
        println!("{}", "━".repeat(80).bright_black());

        if report.pockets.is_empty() {
            println!("{} {}", "✅".green(), "No pockets detected".green().bold());
        } else {
            println!(
                "{} {}",
                "🔍".yellow(),
                format!("{} pocket(s) detected", report.pockets.len()).yellow().bold()
            );
            for pocket in &report.pockets {
                let names: Vec<&str> = pocket
                    .members_by_name_suffix(&run.model)
                    .into_iter()
                    .filter_map(|segment| run.model.get(segment).map(|s| s.name.as_str()))
                    .collect();
                println!("  {} {}", format!("{}:", pocket.name).bold(), names.join(", ").cyan());
            }
        }

        if verbose {
            let stats = &report.stats;
            println!("\n{}", "Statistics:".bold());
            Self::print_stat("Segments", stats.segments);
            Self::print_stat("Triangles", stats.triangles);
            Self::print_stat("Degenerate removed", stats.degenerate_removed);
            Self::print_stat("Rays cast", stats.rays_cast);
            Self::print_stat("Rays flagging", stats.rays_flagging);
            Self::print_stat("Triangles flagged", stats.triangles_flagged);
            Self::print_stat("Segments from triangles", stats.segments_from_triangles);
            Self::print_stat("Segments from closure", stats.segments_from_closure);
        }

        if !report.warnings.is_empty() {
            Self::report_integrity(&report.warnings);
        }

        println!("\n{}", "Performance:".bold());
        println!(
            "  {} {}",
            "Detection:".bright_black(),
            Self::format_duration(run.duration).yellow()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report model size and bounds
    pub fn report_inspection(file: &str, model: &SegmentedModel) {
        let bounds = model.bounds();
        let bbox = model.bounding_box();

        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Model:".bold(), file.cyan());
        println!("{}", "━".repeat(80).bright_black());
        Self::print_stat("Segments", model.len());
        Self::print_stat("Vertices", model.vertex_count());
        Self::print_stat("Triangles", model.triangle_count());
        if !bbox.is_empty() {
            println!(
                "  {} [{:.3}, {:.3}, {:.3}] .. [{:.3}, {:.3}, {:.3}]",
                "Bounds:".bright_black(),
                bbox.min.x,
                bbox.min.y,
                bbox.min.z,
                bbox.max.x,
                bbox.max.y,
                bbox.max.z
            );
        }
        println!(
            "  {} ({:.3}, {:.3}, {:.3}) r={:.3}",
            "Sphere:".bright_black(),
            bounds.center.x,
            bounds.center.y,
            bounds.center.z,
            bounds.radius
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    fn report_integrity(warnings: &[IntegrityWarning]) {
        println!(
            "\n{} {}",
            "⚠️  Warning:".yellow().bold(),
            format!("{} integrity issue(s) in input", warnings.len())
        );
        for warning in warnings {
            println!("  {} {}", "-".bright_black(), warning.to_string().yellow());
        }
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }

    fn print_stat(name: &str, value: usize) {
        println!("  {} {}", format!("{}:", name).bright_black(), value.to_string().cyan());
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(Reporter::format_duration(Duration::from_micros(500)), "500µs");
        assert_eq!(Reporter::format_duration(Duration::from_millis(5)), "5.00ms");
        assert_eq!(Reporter::format_duration(Duration::from_secs(2)), "2.00s");
    }
}
