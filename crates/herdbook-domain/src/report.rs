//! Report types and confidence levels

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Kind of field report a page was photographed from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    /// Protocol step 1 (receptor evaluation)
    P1,
    /// Protocol step 2 (fitness check)
    P2,
    /// Embryo transfer
    Te,
    /// Pregnancy diagnosis
    Dg,
    /// Fetal sexing
    Sexagem,
    /// Oocyte aspiration
    Aspiracao,
}

impl ReportType {
    pub const ALL: [ReportType; 6] = [
        ReportType::P1,
        ReportType::P2,
        ReportType::Te,
        ReportType::Dg,
        ReportType::Sexagem,
        ReportType::Aspiracao,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::P1 => "p1",
            ReportType::P2 => "p2",
            ReportType::Te => "te",
            ReportType::Dg => "dg",
            ReportType::Sexagem => "sexagem",
            ReportType::Aspiracao => "aspiracao",
        }
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a report type string is not recognized
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("unknown report type: {0}")]
pub struct UnknownReportType(pub String);

impl FromStr for ReportType {
    type Err = UnknownReportType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        ReportType::ALL
            .into_iter()
            .find(|t| t.as_str() == lower)
            .ok_or_else(|| UnknownReportType(s.to_string()))
    }
}

/// Visual bucket for a confidence score
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::High => "high",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::Low => "low",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
