//! Plain-text environmental impact report.

use std::fmt;

use super::impact::{EnvironmentalSummary, RouteProfile};

const RULE: &str = "-----------------------------------------------------------";

/// Formats a number with thousands separators and at most two decimals.
///
/// ```
/// use u_circuit::metrics::format_number;
///
/// assert_eq!(format_number(1234567.891), "1,234,567.89");
/// assert_eq!(format_number(73.0), "73");
/// assert_eq!(format_number(-1500.5), "-1,500.5");
/// ```
pub fn format_number(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let frac = frac_part.trim_end_matches('0');
    let sign = if value < 0.0 && fixed.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

fn write_profile(f: &mut fmt::Formatter<'_>, title: &str, p: &RouteProfile) -> fmt::Result {
    writeln!(f, "  {title}:")?;
    writeln!(f, "     Distance:   {} km", p.distance)?;
    writeln!(f, "     Time:       {} min", p.time)?;
    writeln!(f, "     Fuel:       {} l", p.fuel)?;
    writeln!(f, "     Cost:       ${}", p.cost)?;
    writeln!(f, "     CO2:        {} kg", p.co2)?;
    writeln!(f, "     Efficiency: {} kg/km", p.efficiency)?;
    writeln!(f)
}

fn write_heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{RULE}")?;
    writeln!(f, "  {title}")?;
    writeln!(f, "{RULE}")?;
    writeln!(f)
}

impl fmt::Display for EnvironmentalSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            daily,
            annual,
            waste_info,
        } = self;
        let s = &daily.savings.savings;

        write_heading(f, "ENVIRONMENTAL IMPACT")?;
        writeln!(f, "Waste to collect: {} kg", waste_info.total)?;
        writeln!(f)?;
        write_heading(f, "DAILY COMPARISON")?;

        write_profile(f, "Optimal route", &daily.optimal)?;
        write_profile(f, "Worst route", &daily.worst)?;

        writeln!(f, "  Daily savings:")?;
        writeln!(f, "     {} km less (-{}%)", s.distance_saved, s.distance_percent)?;
        writeln!(f, "     {} min saved (-{}%)", s.time_saved, s.time_percent)?;
        writeln!(f, "     {} l of fuel saved", s.fuel_saved)?;
        writeln!(f, "     ${} saved", s.cost_saved)?;
        writeln!(f, "     {} kg CO2 avoided (-{}%)", s.co2_saved, s.co2_percent)?;
        writeln!(
            f,
            "     Equivalent to {} trees per year",
            daily.savings.trees_equivalent
        )?;
        writeln!(f)?;

        write_heading(f, &format!("ANNUAL IMPACT ({} days)", annual.days))?;
        writeln!(f, "  {} kg of CO2 avoided", format_number(annual.co2_saved))?;
        writeln!(
            f,
            "  Equivalent to planting {} trees",
            format_number(annual.trees_equivalent)
        )?;
        writeln!(f, "  {} km less driven", format_number(annual.distance_saved))?;
        writeln!(f, "  {} hours saved", format_number(annual.time_in_hours))?;
        writeln!(f, "  {} l of fuel saved", format_number(annual.fuel_saved))?;
        writeln!(f, "  ${} in reduced costs", format_number(annual.cost_saved))?;
        writeln!(f, "{RULE}")
    }
}

/// Renders a summary as a human-readable report.
pub fn impact_report(summary: &EnvironmentalSummary) -> String {
    summary.to_string()
}
