#[cfg(test)]
mod tests {
    use timesheet::libs::entry::TimeEntry;
    use timesheet::libs::formatter::format_duration;
    use timesheet::libs::grouping::{GroupingKey, GroupingKeys};
    use timesheet::libs::report::TimesheetReport;
    use timesheet::libs::tree::ReportRow;

    fn sample() -> Vec<TimeEntry> {
        vec![
            TimeEntry::new("2025-07-02", "A", "Web", "0:45"),
            TimeEntry::new("2025-07-01", "A", "Web", "1:30"),
            TimeEntry::new("2025-07-01", "B", "App", "2:15"),
        ]
    }

    fn report(keys: &[GroupingKey], totals_only: bool) -> TimesheetReport {
        TimesheetReport::build("Test", None, sample(), GroupingKeys::new(keys.iter().copied()), totals_only)
    }

    fn describe(rows: &[ReportRow<'_>]) -> Vec<String> {
        rows.iter()
            .map(|row| match row {
                ReportRow::Header {
                    level,
                    label,
                    entry_count,
                    duration,
                } => format!("H{} {} {} {}", level, label, entry_count, format_duration(duration)),
                ReportRow::Entry { level, entry } => format!("E{} {} {}", level, entry.date, entry.user),
                ReportRow::Subtotal { level, duration } => format!("S{} {}", level, format_duration(duration)),
            })
            .collect()
    }

    #[test]
    fn test_rows_for_two_levels() {
        let report = report(&[GroupingKey::User, GroupingKey::Date], false);
        assert_eq!(
            describe(&report.rows()),
            vec![
                "H0 A 2 2:15",
                "H1 2025-07-01 1 1:30",
                "E1 2025-07-01 A",
                "S1 1:30",
                "H1 2025-07-02 1 0:45",
                "E1 2025-07-02 A",
                "S1 0:45",
                "H0 B 1 2:15",
                "H1 2025-07-01 1 2:15",
                "E1 2025-07-01 B",
                "S1 2:15",
            ]
        );
    }

    #[test]
    fn test_entries_sorted_by_date_before_grouping() {
        let report = report(&[], false);
        let dates: Vec<&str> = report.entries().iter().map(|entry| entry.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-07-01", "2025-07-01", "2025-07-02"]);
        // Same date keeps arrival order.
        assert_eq!(report.entries()[0].user, "A");
        assert_eq!(report.entries()[1].user, "B");
    }

    #[test]
    fn test_totals_only_drops_entries_only() {
        let keys = [GroupingKey::Project, GroupingKey::User];
        let full = report(&keys, false).rows().into_iter().filter(|row| !matches!(row, ReportRow::Entry { .. })).count();
        let totals_report = report(&keys, true);
        let totals = totals_report.rows();

        assert!(totals.iter().all(|row| !matches!(row, ReportRow::Entry { .. })));
        assert_eq!(totals.len(), full);
        assert_eq!(describe(&totals)[..3], ["H0 Web 2 2:15", "H1 A 2 2:15", "S1 2:15"]);
    }

    #[test]
    fn test_ungrouped_report_has_root_header_and_subtotal() {
        let report = report(&[], true);
        assert_eq!(describe(&report.rows()), vec!["H0 All Entries 3 4:30", "S0 4:30"]);
    }

    #[test]
    fn test_empty_report_has_header_without_subtotal() {
        let report = TimesheetReport::build("Empty", None, Vec::new(), GroupingKeys::default(), false);
        assert_eq!(describe(&report.rows()), vec!["H0 All Entries 0 0:00"]);
    }

    #[test]
    fn test_summary() {
        let report = report(&[GroupingKey::Date], false);
        let summary = report.summary();

        assert_eq!(format_duration(&summary.total), "4:30");
        assert_eq!(summary.entry_count, 3);
        assert_eq!(summary.users, vec!["A", "B"]);
        assert_eq!(summary.projects, vec!["Web", "App"]);
    }
}
