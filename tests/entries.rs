#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use timesheet::db::clients::Clients;
    use timesheet::db::db::Db;
    use timesheet::db::entries::Entries;
    use timesheet::db::projects::{Projects, HOLIDAY_PROJECT_PATTERNS, LEAVE_PROJECT_PATTERNS};
    use timesheet::db::tasks::Tasks;
    use timesheet::db::users::Users;
    use timesheet::libs::entry::EntryFilter;

    const SEED: &str = "
        INSERT INTO tt_users (id, login, name, rate, status) VALUES
            (1, 'ann', 'Ann Lee', 40.0, 1),
            (2, 'bob', NULL, 35.0, 1),
            (3, 'old', 'Old Timer', 10.0, 0);
        INSERT INTO tt_clients (id, name) VALUES (1, 'Acme'), (2, 'Beta');
        INSERT INTO tt_projects (id, name) VALUES (10, 'Web'), (11, 'App'), (12, 'Annual Leave'), (13, 'Public Holiday');
        INSERT INTO tt_tasks (id, name) VALUES (100, 'Login'), (101, 'Search');
        INSERT INTO tt_client_project_binds (client_id, project_id) VALUES (1, 10), (2, 11);
        INSERT INTO tt_log (id, user_id, date, duration, client_id, project_id, task_id, comment, billable, created, status) VALUES
            (1, 1, '2025-07-01', '1:30', 1, 10, 100, 'Login form', 1, '2025-07-01 09:00:00', 1),
            (2, 2, '2025-07-01', '2:15', 2, 11, NULL, NULL, 1, '2025-07-01 08:00:00', 1),
            (3, 1, '2025-07-02 00:00:00', '0:45', 1, 10, 101, 'Search box', 0, '2025-07-02 09:00:00', 1),
            (4, 1, '2025-07-03', '8:00', NULL, 12, NULL, 'Annual leave', 0, '2025-07-03 09:00:00', 1),
            (5, 2, '2025-07-04', '1:00', 2, 11, NULL, 'Deleted', 1, '2025-07-04 09:00:00', 0);
        INSERT INTO tt_custom_field_log (log_id, field_id, value) VALUES (1, 2, '#4521'), (3, 1, 'other field');
    ";

    struct StoreContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for StoreContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("timesheet.db");
            Db::open(&db_path).unwrap().conn.execute_batch(SEED).unwrap();
            StoreContext {
                _temp_dir: temp_dir,
                db_path,
            }
        }
    }

    impl StoreContext {
        fn entries(&self) -> Entries {
            Entries::from_db(Db::open(&self.db_path).unwrap())
        }

        fn ids(&self, filter: &EntryFilter) -> Vec<i64> {
            self.entries().fetch(filter).unwrap().iter().map(|entry| entry.id).collect()
        }
    }

    fn date(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
    }

    #[test_context(StoreContext)]
    #[test]
    fn test_fetch_all_active_in_date_then_created_order(ctx: &mut StoreContext) {
        assert_eq!(ctx.ids(&EntryFilter::default()), vec![2, 1, 3, 4]);
    }

    #[test_context(StoreContext)]
    #[test]
    fn test_fetch_joins_names(ctx: &mut StoreContext) {
        let records = ctx.entries().fetch(&EntryFilter::default()).unwrap();

        let login = records.iter().find(|record| record.id == 1).unwrap();
        assert_eq!(login.user_display(), "Ann Lee");
        assert_eq!(login.client_name.as_deref(), Some("Acme"));
        assert_eq!(login.project_name.as_deref(), Some("Web"));
        assert_eq!(login.task_number.as_deref(), Some("#4521"));
        assert!(login.billable);

        let entry = login.to_time_entry();
        assert_eq!(entry.task.as_deref(), Some("#4521 Login"));
        assert_eq!(entry.note.as_deref(), Some("Login form"));

        let bob = records.iter().find(|record| record.id == 2).unwrap();
        assert_eq!(bob.user_display(), "bob");
        assert_eq!(bob.to_time_entry().task, None);

        let search = records.iter().find(|record| record.id == 3).unwrap();
        assert_eq!(search.date, "2025-07-02");
        assert_eq!(search.task_number, None);
        assert_eq!(search.to_time_entry().task.as_deref(), Some("#101 Search"));

        let leave = records.iter().find(|record| record.id == 4).unwrap();
        assert_eq!(leave.client_name, None);
        assert_eq!(leave.to_time_entry().client, None);
    }

    #[test_context(StoreContext)]
    #[test]
    fn test_fetch_filters(ctx: &mut StoreContext) {
        let by_user = EntryFilter {
            user_id: Some(1),
            ..Default::default()
        };
        assert_eq!(ctx.ids(&by_user), vec![1, 3, 4]);

        let by_projects = EntryFilter {
            project_ids: vec![10, 11],
            ..Default::default()
        };
        assert_eq!(ctx.ids(&by_projects), vec![2, 1, 3]);

        let by_client = EntryFilter {
            client_id: Some(1),
            ..Default::default()
        };
        assert_eq!(ctx.ids(&by_client), vec![1, 3]);

        let by_task = EntryFilter {
            task_id: Some(101),
            ..Default::default()
        };
        assert_eq!(ctx.ids(&by_task), vec![3]);

        let billable = EntryFilter {
            billable_only: true,
            ..Default::default()
        };
        assert_eq!(ctx.ids(&billable), vec![2, 1]);

        assert_eq!(ctx.ids(&EntryFilter::between(date("2025-07-02"), date("2025-07-04"))), vec![3, 4]);
    }

    #[test_context(StoreContext)]
    #[test]
    fn test_date_range(ctx: &mut StoreContext) {
        let range = ctx.entries().date_range().unwrap();
        assert_eq!(range, Some((date("2025-07-01"), date("2025-07-03"))));
    }

    #[test]
    fn test_date_range_of_empty_store() {
        let temp_dir = tempfile::tempdir().unwrap();
        let entries = Entries::from_db(Db::open(&temp_dir.path().join("empty.db")).unwrap());
        assert_eq!(entries.date_range().unwrap(), None);
        assert!(entries.fetch(&EntryFilter::default()).unwrap().is_empty());
    }

    #[test_context(StoreContext)]
    #[test]
    fn test_lookups(ctx: &mut StoreContext) {
        let users = Users::from_db(Db::open(&ctx.db_path).unwrap()).fetch_active().unwrap();
        let names: Vec<String> = users.iter().map(|user| user.display_name()).collect();
        assert_eq!(names, vec!["Ann Lee", "bob"]);
        assert_eq!(users[0].rate, 40.0);

        let clients = Clients::from_db(Db::open(&ctx.db_path).unwrap());
        assert_eq!(clients.fetch_active().unwrap().len(), 2);
        assert_eq!(clients.get(1).unwrap().map(|client| client.name), Some("Acme".to_string()));
        assert_eq!(clients.get(99).unwrap(), None);

        let projects = Projects::from_db(Db::open(&ctx.db_path).unwrap());
        assert_eq!(projects.fetch_active().unwrap().len(), 4);
        let acme_projects: Vec<String> = projects.fetch_by_client(1).unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(acme_projects, vec!["Web"]);
        assert_eq!(projects.find_by_name_like(&LEAVE_PROJECT_PATTERNS).unwrap(), Some(12));
        assert_eq!(projects.find_by_name_like(&HOLIDAY_PROJECT_PATTERNS).unwrap(), Some(13));
        assert_eq!(projects.find_by_name_like(&["%Nothing%"]).unwrap(), None);

        let tasks = Tasks::from_db(Db::open(&ctx.db_path).unwrap()).fetch_active().unwrap();
        let task_names: Vec<&str> = tasks.iter().map(|task| task.name.as_str()).collect();
        assert_eq!(task_names, vec!["Login", "Search"]);
    }
}
