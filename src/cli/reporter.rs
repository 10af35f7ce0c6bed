// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::record::AssignmentRecord;
use crate::report::{Report, ReportLevel, ReportSink};
use crate::store::ApplySummary;
use colored::*;

/// Prints reports to the terminal
pub struct ConsoleReporter {
    min_level: ReportLevel,
    errors: usize,
}

impl ConsoleReporter {
    pub fn new(min_level: ReportLevel) -> Self {
        Self {
            min_level,
            errors: 0,
        }
    }

    /// Number of error reports received so far
    pub fn error_count(&self) -> usize {
        self.errors
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Report info
    pub fn report_info(message: &str) {
        println!("{} {}", "ℹ️".bright_blue(), message);
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }

    /// Print records as a numbered table
    pub fn report_records(records: &[AssignmentRecord]) {
        if records.is_empty() {
            println!("{}", "Slot Not Available".yellow());
            return;
        }

        println!("{}", "━".repeat(80).bright_black());
        for (index, record) in records.iter().enumerate() {
            println!(
                "{:>4}  {}",
                index.to_string().bright_black(),
                record.mesh_name().cyan().bold()
            );
            println!(
                "      {} {}",
                "Materials:".bright_black(),
                Self::format_names(record.material_names())
            );
            println!(
                "      {} {}",
                "GeoNodes: ".bright_black(),
                Self::format_names(record.geo_node_names())
            );
        }
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Print the totals of an apply run
    pub fn report_apply(summary: &ApplySummary) {
        println!("\n{}", "Apply Summary:".bold());
        println!(
            "  {} {}",
            "Meshes:".bright_black(),
            summary.meshes_applied.to_string().cyan()
        );
        println!(
            "  {} {} overwritten, {} appended",
            "Slots:".bright_black(),
            summary.slots_assigned.to_string().cyan(),
            summary.slots_appended.to_string().cyan()
        );

        let missing = summary.meshes_missing + summary.materials_missing;
        if missing > 0 {
            println!(
                "  {} {} meshes, {} materials",
                "Missing:".bright_black(),
                summary.meshes_missing.to_string().red(),
                summary.materials_missing.to_string().red()
            );
        }
    }

    fn format_names(names: &[String]) -> String {
        names
            .iter()
            .map(|name| {
                if name.is_empty() {
                    "<empty>".to_string()
                } else {
                    name.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl ReportSink for ConsoleReporter {
    fn report(&mut self, report: Report) {
        if report.level == ReportLevel::Error {
            self.errors += 1;
        }
        if report.level < self.min_level {
            return;
        }
        match report.level {
            ReportLevel::Info => Self::report_info(&report.message),
            ReportLevel::Warning => Self::report_warning(&report.message),
            ReportLevel::Error => Self::report_error(&report.message),
        }
    }
}
