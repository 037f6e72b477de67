//! `inspect`: what a readings file contains.

use aqi_db::Database;
use std::fmt::Write;

/// Build the inspection report for a loaded database.
pub fn run_inspect(db: &Database) -> anyhow::Result<String> {
    let bounds = db.query_date_range()?;
    let sites = db.query_sites()?;
    let categories = db.query_category_counts()?;

    let mut out = String::new();
    writeln!(out, "Readings: {}", db.count_readings()?)?;
    writeln!(
        out,
        "Dates:    {} to {} ({} days)",
        bounds.min,
        bounds.max,
        bounds.span_days() + 1
    )?;
    writeln!(out, "Default:  {}", bounds.default_date())?;

    writeln!(out, "\nSites ({}):", sites.len())?;
    for site in &sites {
        writeln!(
            out,
            "  {:<12} {:>10.5} {:>11.5} {:>7} readings",
            site.site_number, site.latitude, site.longitude, site.readings
        )?;
    }

    writeln!(out, "\nCategories:")?;
    for entry in &categories {
        writeln!(
            out,
            "  {:<32} {:<8} {:>7}",
            entry.category.label(),
            entry.category.color(),
            entry.count
        )?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::sample_db;

    #[test]
    fn report_lists_bounds_sites_and_categories() {
        let report = run_inspect(&sample_db()).unwrap();
        assert!(report.contains("Readings: 5"));
        assert!(report.contains("2017-06-15 to 2017-06-16 (2 days)"));
        assert!(report.contains("Sites (3):"));
        assert!(report.contains("0004"));
        assert!(report.contains("5001"));
    }

    #[test]
    fn report_includes_every_category_with_its_color() {
        let report = run_inspect(&sample_db()).unwrap();
        let good = report.lines().find(|l| l.trim_start().starts_with("Good")).unwrap();
        assert!(good.contains("#00E400"));
        assert!(good.trim_end().ends_with('2'));
        let unknown = report.lines().find(|l| l.contains("gray")).unwrap();
        assert!(unknown.trim_end().ends_with('1'));
    }
}
