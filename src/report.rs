// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! User-facing reporting channel

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a user-facing report
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportLevel {
    Info,
    Warning,
    Error,
}

impl ReportLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportLevel::Info => "INFO",
            ReportLevel::Warning => "WARNING",
            ReportLevel::Error => "ERROR",
        }
    }
}

impl fmt::Display for ReportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single diagnostic for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub level: ReportLevel,
    pub message: String,
}

impl Report {
    pub fn new(level: ReportLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ReportLevel::Info, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(ReportLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ReportLevel::Error, message)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.level, self.message)
    }
}

/// Destination for diagnostics produced by store operations
pub trait ReportSink {
    fn report(&mut self, report: Report);
}

/// Collects reports in order
impl ReportSink for Vec<Report> {
    fn report(&mut self, report: Report) {
        self.push(report);
    }
}
