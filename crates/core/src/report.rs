//! Measurement report content.
//!
//! The browser renders the final PDF with its own library; the server side
//! only assembles the document content (title, address, labeled measurement
//! lines) so any renderer lays it out identically.

use serde::Serialize;

use crate::shape::MeasurementSummary;
use crate::types::Timestamp;

/// One labeled line of the report body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub label: String,
    pub value: String,
}

/// Renderer-agnostic report content.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub title: String,
    /// The searched address, when one was geocoded.
    pub address: Option<String>,
    pub generated_at: Timestamp,
    pub lines: Vec<ReportLine>,
}

/// Assemble the report for a measurement summary.
pub fn build_report(
    address: Option<&str>,
    summary: &MeasurementSummary,
    generated_at: Timestamp,
) -> Report {
    let mut lines = Vec::new();

    lines.push(ReportLine {
        label: "Land area".into(),
        value: format!(
            "{} sq ft ({} m\u{b2}, {} acres)",
            format_number(summary.land_sq_ft),
            format_number(summary.land_sq_m),
            format_number(summary.land_acres)
        ),
    });
    lines.push(ReportLine {
        label: "Land shapes".into(),
        value: summary.land_count.to_string(),
    });

    lines.push(ReportLine {
        label: "Roof footprint".into(),
        value: format!(
            "{} sq ft ({} m\u{b2})",
            format_number(summary.roof_sq_ft),
            format_number(summary.roof_sq_m)
        ),
    });
    lines.push(ReportLine {
        label: format!("Roof area at pitch {}", format_number(summary.roof_pitch)),
        value: format!(
            "{} sq ft ({} m\u{b2})",
            format_number(summary.roof_adjusted_sq_ft),
            format_number(summary.roof_adjusted_sq_m)
        ),
    });
    lines.push(ReportLine {
        label: "Roof shapes".into(),
        value: summary.roof_count.to_string(),
    });

    lines.push(ReportLine {
        label: "Fence length".into(),
        value: format!(
            "{} ft ({} m)",
            format_number(summary.fence_ft),
            format_number(summary.fence_m)
        ),
    });
    lines.push(ReportLine {
        label: "Fence lines".into(),
        value: summary.fence_count.to_string(),
    });

    Report {
        title: "Property Measurement Report".into(),
        address: address.map(str::to_string),
        generated_at,
        lines,
    }
}

/// Format a number the way the measurement sidebar does: US thousands
/// separators, at most two fractional digits, no trailing zeros.
pub fn format_number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;

    let negative = rounded < 0.0;
    let abs = rounded.abs();
    let int_part = abs.trunc() as u64;
    let frac = ((abs - abs.trunc()) * 100.0).round() as u64;

    let mut int_str = String::new();
    let digits = int_part.to_string();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            int_str.push(',');
        }
        int_str.push(ch);
    }

    let mut out = String::new();
    if negative && (int_part > 0 || frac > 0) {
        out.push('-');
    }
    out.push_str(&int_str);

    if frac > 0 {
        if frac % 10 == 0 {
            out.push_str(&format!(".{}", frac / 10));
        } else {
            out.push_str(&format!(".{frac:02}"));
        }
    }
    out
}
