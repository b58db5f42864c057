#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use timesheet::libs::entry::{EntryRecord, TimeEntry};
    use timesheet::libs::progress::{extract_task_number, ProgressReport, DEFAULT_INTRO};

    fn entries() -> Vec<TimeEntry> {
        vec![
            TimeEntry::new("2025-07-01", "Ann", "Web", "2:00").with_task("#4521 Login").with_note("Login form"),
            TimeEntry::new("2025-07-02", "Ann", "Web", "1:30").with_task("#4521 Login").with_note("Login validation"),
            TimeEntry::new("2025-07-02", "Ann", "Web", "0:30").with_note("Code review"),
            TimeEntry::new("2025-07-03", "Ann", "Web", "0:30").with_note("Code review"),
            TimeEntry::new("2025-07-04", "Ann", "Public Holiday", "8:00"),
            TimeEntry::new("2025-07-07", "Ann", "Internal", "8:00").with_note("Annual leave"),
            TimeEntry::new("2025-07-01", "Bob", "App", "3:00").with_task("#99 Search"),
        ]
    }

    #[test]
    fn test_extract_task_number() {
        assert_eq!(extract_task_number("#4521 Login"), Some("4521".to_string()));
        assert_eq!(extract_task_number("Fix #12 and #13"), Some("12".to_string()));
        assert_eq!(extract_task_number("No number"), None);
    }

    #[test]
    fn test_build_merges_tasks() {
        let report = ProgressReport::build(&entries());
        assert_eq!(report.users.len(), 2);

        let ann = &report.users[0];
        assert_eq!(ann.name, "Ann");
        assert_eq!(ann.projects.len(), 1);
        assert_eq!(ann.total_hours, 20.5);

        let web = &ann.projects[0];
        assert_eq!(web.tasks.len(), 2);
        assert_eq!(web.total_hours, 4.5);

        let login = &web.tasks[0];
        assert_eq!(login.task_number.as_deref(), Some("4521"));
        assert_eq!(login.description, "Login form");
        assert_eq!(login.hours, 3.5);
        assert_eq!(login.dates, vec!["2025-07-01", "2025-07-02"]);

        let review = &web.tasks[1];
        assert_eq!(review.task_number, None);
        assert_eq!(review.hours, 1.0);
        assert_eq!(review.dates, vec!["2025-07-02", "2025-07-03"]);

        assert_eq!(ann.public_holidays.len(), 1);
        assert_eq!(ann.public_holidays[0].date, "2025-07-04");
        assert_eq!(ann.leave.len(), 1);
        assert_eq!(ann.leave[0].reason, "Annual leave");
    }

    fn record(date: &str, task_number: Option<&str>, comment: &str) -> EntryRecord {
        EntryRecord {
            id: 0,
            user_id: 1,
            user_name: Some("Ann".to_string()),
            user_login: None,
            date: date.to_string(),
            start: None,
            duration: Some("1:00".to_string()),
            client_id: None,
            client_name: None,
            project_id: Some(10),
            project_name: Some("Web".to_string()),
            task_id: Some(42),
            task_name: Some("Sprint".to_string()),
            task_number: task_number.map(str::to_string),
            comment: Some(comment.to_string()),
            billable: true,
        }
    }

    #[test]
    fn test_same_task_id_without_number_keeps_every_note() {
        let records = [
            record("2025-07-01", None, "Fix login"),
            record("2025-07-02", None, "Write docs"),
        ];
        let entries: Vec<TimeEntry> = records.iter().map(EntryRecord::to_progress_entry).collect();

        let report = ProgressReport::build(&entries);
        let tasks = &report.users[0].projects[0].tasks;
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].description, "Fix login");
        assert_eq!(tasks[0].task_number, None);
        assert_eq!(tasks[1].description, "Write docs");

        let text = report.render_text("", NaiveDate::from_ymd_opt(2025, 7, 31).unwrap());
        assert!(text.contains("Web\nFix login\nWrite docs\n"));
    }

    #[test]
    fn test_task_number_field_merges_notes() {
        let records = [
            record("2025-07-01", Some("#4521 Login"), "Login form"),
            record("2025-07-02", Some("#4521 Login"), "Login validation"),
        ];
        let entries: Vec<TimeEntry> = records.iter().map(EntryRecord::to_progress_entry).collect();

        let tasks = &ProgressReport::build(&entries).users[0].projects[0].tasks;
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].task_number.as_deref(), Some("4521"));
        assert_eq!(tasks[0].hours, 2.0);
    }

    #[test]
    fn test_render_text() {
        let report = ProgressReport::build(&entries());
        let text = report.render_text(DEFAULT_INTRO, NaiveDate::from_ymd_opt(2025, 7, 31).unwrap());

        assert!(text.starts_with("Team Progress Report\nGenerated on: 2025-07-31\n\n"));
        assert!(text.contains(DEFAULT_INTRO));
        assert!(text.contains("Ann\nWeb\n#4521 | Login form (2025-07-01, 2025-07-02)\nCode review (2025-07-02, 2025-07-03)\n"));
        assert!(text.contains("2025-07-04 - Public Holiday"));
        assert!(text.contains("2025-07-07 - Leave"));
        assert!(text.contains("Bob\nApp\n#99 | \n"));
    }

    #[test]
    fn test_render_without_intro() {
        let text = ProgressReport::default().render_text("  ", NaiveDate::from_ymd_opt(2025, 7, 31).unwrap());
        assert_eq!(text, "Team Progress Report\nGenerated on: 2025-07-31\n\n");
    }
}
