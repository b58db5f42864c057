#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::collections::BTreeMap;
    use timesheet::libs::entry::TimeEntry;
    use timesheet::libs::grouping::{GroupingKey, GroupingKeys};
    use timesheet::libs::html::{profit_page, timesheet_page, write_timesheet};
    use timesheet::libs::profit::{ProfitInput, ProfitReport, ProjectSelection};
    use timesheet::libs::report::TimesheetReport;

    fn report(totals_only: bool) -> TimesheetReport {
        let entries = vec![
            TimeEntry::new("2025-07-01", "Ann", "Web", "1:30").with_note("<b>form</b>"),
            TimeEntry::new("2025-07-02", "Bob", "Web", "0:45"),
        ];
        TimesheetReport::build(
            "July",
            Some("Acme".to_string()),
            entries,
            GroupingKeys::new([GroupingKey::Project, GroupingKey::User]),
            totals_only,
        )
    }

    #[test]
    fn test_timesheet_page() {
        let html = timesheet_page(&report(false)).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>July</title>"));
        assert!(html.contains("Acme"));
        assert!(html.contains("2:15"));
        assert!(html.contains("margin-left: 20px;"));
        assert!(html.contains("&lt;b&gt;form&lt;/b&gt;"));
        assert!(!html.contains("<b>form</b>"));
    }

    #[test]
    fn test_totals_only_page_hides_entries() {
        let html = timesheet_page(&report(true)).into_string();

        assert!(html.contains("July - Summary View"));
        assert!(html.contains("group totals only"));
        assert!(!html.contains("&lt;b&gt;"));
        assert!(html.contains("Subtotal"));
    }

    #[test]
    fn test_write_timesheet() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("report.html");
        write_timesheet(&report(false), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Total Hours"));
    }

    #[test]
    fn test_profit_page() {
        let input = ProfitInput {
            date_from: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            date_to: NaiveDate::from_ymd_opt(2025, 7, 31).unwrap(),
            users: vec![(1, "Ann".to_string())],
            projects: ProjectSelection::All,
            project_names: Vec::new(),
            client_rate: 1500.0,
            user_rates: BTreeMap::new(),
            extra_hours: Vec::new(),
            other_incomes: Vec::new(),
            expenses: Vec::new(),
        };
        let html = profit_page(&ProfitReport::calculate(&input, &[])).into_string();

        assert!(html.contains("Profit Report"));
        assert!(html.contains("$1,500.00"));
        assert!(html.contains("profit-positive"));
        assert!(!html.contains("Other Incomes"));
    }
}
