//! Console formatting of results and errors.

use crossterm::style::Stylize;
use statlab_core::{DescriptiveSummary, FiveNumberSummary, Histogram, StatValue, Statistic};
use std::fmt::Write as _;
use std::io::{self, Write};

/// Format a list the way it is echoed back to users: `[1.0, 2.5]`.
pub fn format_values(values: &[f64]) -> String {
    let parts: Vec<String> = values.iter().map(|v| format!("{v:?}")).collect();
    format!("[{}]", parts.join(", "))
}

pub fn format_five_number_summary(s: &FiveNumberSummary) -> String {
    format!(
        "Five-number summary:\n\
         minimum: {:.4}\n\
         lower quartile: {:.4}\n\
         median: {:.4}\n\
         upper quartile: {:.4}\n\
         maximum: {:.4}",
        s.minimum, s.lower_quartile, s.median, s.upper_quartile, s.maximum
    )
}

/// One result, labelled: `Mean: 2.5`, `Modes: [1.0, 2.0]`, or the summary block.
pub fn format_stat(stat: Statistic, value: &StatValue) -> String {
    match value {
        StatValue::Scalar(v) => format!("{}: {v:?}", stat.label()),
        StatValue::Set(values) => {
            let plural = if values.len() == 1 { "" } else { "s" };
            format!("{}{plural}: {}", stat.label(), format_values(values))
        }
        StatValue::Summary(s) => format_five_number_summary(s),
    }
}

pub fn format_summary(s: &DescriptiveSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "=== Descriptive Statistics ===");
    let _ = writeln!(out, "Count:               {}", s.count);
    let _ = writeln!(out, "Sum:                 {:?}", s.sum);
    let _ = writeln!(out, "Mean:                {:?}", s.mean);
    let _ = writeln!(out, "Median:              {:?}", s.median);
    let plural = if s.modes.len() == 1 { "" } else { "s" };
    let _ = writeln!(out, "{:<21}{}", format!("Mode{plural}:"), format_values(&s.modes));
    let _ = writeln!(out, "Range:               {:?}", s.range);
    let _ = writeln!(out, "Interquartile Range: {:?}", s.interquartile_range);
    let _ = writeln!(out, "Variance:            {:?}", s.variance);
    let _ = writeln!(out, "Standard Deviation:  {:?}", s.standard_deviation);
    out.push_str(&format_five_number_summary(&s.five_number_summary()));
    out
}

/// Bin table of a density histogram.
pub fn format_histogram(sample_size: usize, h: &Histogram) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Sample Size = {sample_size}");
    let _ = writeln!(out, "{:>12} {:>12} {:>6} {:>10}", "From", "To", "Count", "Density");
    for (i, (count, density)) in h.counts.iter().zip(&h.densities).enumerate() {
        let _ = writeln!(
            out,
            "{:>12.4} {:>12.4} {:>6} {:>10.4}",
            h.edges[i],
            h.edges[i + 1],
            count,
            density
        );
    }
    out
}

/// `ERROR: <msg>`, in red when `color` is set.
pub fn write_error<W: Write>(out: &mut W, msg: &str, color: bool) -> io::Result<()> {
    let line = format!("ERROR: {msg}");
    if color {
        writeln!(out, "{}", line.red())
    } else {
        writeln!(out, "{line}")
    }
}
