#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use timesheet::libs::entry::TimeEntry;
    use timesheet::libs::error::GroupingError;
    use timesheet::libs::formatter::format_duration;
    use timesheet::libs::grouping::{
        build_groups, group_value, GroupingKey, GroupingKeys, NO_CLIENT, NO_PROJECT, NO_TASK, ROOT_KEY,
    };

    fn sample() -> Vec<TimeEntry> {
        vec![
            TimeEntry::new("2025-07-01", "A", "Web", "1:30"),
            TimeEntry::new("2025-07-01", "B", "Web", "2:15"),
            TimeEntry::new("2025-07-02", "A", "Web", "0:45"),
        ]
    }

    #[test]
    fn test_group_by_date() {
        let entries = sample();
        let groups = build_groups(&entries, &GroupingKeys::new([GroupingKey::Date]));

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, "2025-07-01");
        assert_eq!(groups[0].entries.len(), 2);
        assert_eq!(format_duration(&groups[0].total()), "3:45");
        assert_eq!(groups[1].key, "2025-07-02");
        assert_eq!(groups[1].entries.len(), 1);
        assert_eq!(format_duration(&groups[1].total()), "0:45");
    }

    #[test]
    fn test_group_by_user_then_date() {
        let entries = sample();
        let groups = build_groups(&entries, &GroupingKeys::new([GroupingKey::User, GroupingKey::Date]));

        assert_eq!(groups.len(), 2);
        let a = &groups[0];
        assert_eq!(a.key, "A");
        assert!(a.entries.is_empty());
        assert_eq!(a.sub_groups.len(), 2);
        assert_eq!(format_duration(&a.sub_group("2025-07-01").unwrap().total()), "1:30");
        assert_eq!(format_duration(&a.sub_group("2025-07-02").unwrap().total()), "0:45");
        assert_eq!(format_duration(&a.total()), "2:15");

        let b = &groups[1];
        assert_eq!(b.key, "B");
        assert_eq!(b.sub_groups.len(), 1);
        assert_eq!(b.sub_groups[0].level, 1);
        assert_eq!(format_duration(&b.total()), "2:15");
    }

    #[test]
    fn test_no_keys_yields_single_root() {
        let entries = sample();
        let groups = build_groups(&entries, &GroupingKeys::default());

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].key, ROOT_KEY);
        assert_eq!(groups[0].level, 0);
        assert_eq!(groups[0].entries.len(), 3);
        assert_eq!(format_duration(&groups[0].total()), "4:30");
    }

    #[test]
    fn test_no_keys_on_empty_input_keeps_root() {
        let entries: Vec<TimeEntry> = Vec::new();
        let groups = build_groups(&entries, &GroupingKeys::default());

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].entry_count(), 0);
        assert_eq!(format_duration(&groups[0].total()), "0:00");
    }

    #[test]
    fn test_keys_on_empty_input_yield_empty_tree() {
        let entries: Vec<TimeEntry> = Vec::new();
        let groups = build_groups(&entries, &GroupingKeys::new([GroupingKey::User]));
        assert!(groups.is_empty());
    }

    #[test]
    fn test_duplicate_keys_behave_like_single_key() {
        let entries = sample();
        let once = build_groups(&entries, &GroupingKeys::new([GroupingKey::User]));
        let twice = build_groups(&entries, &GroupingKeys::new([GroupingKey::User, GroupingKey::User]));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_keys_normalisation() {
        let keys = GroupingKeys::new([
            GroupingKey::None,
            GroupingKey::Client,
            GroupingKey::Client,
            GroupingKey::Project,
            GroupingKey::None,
            GroupingKey::Task,
            GroupingKey::Date,
        ]);
        assert_eq!(keys.as_slice(), &[GroupingKey::Client, GroupingKey::Project, GroupingKey::Task]);
        assert_eq!(keys.to_string(), "client, project, task");
    }

    #[test]
    fn test_keys_from_str() {
        let keys = GroupingKeys::from_str("User, DATE,user").unwrap();
        assert_eq!(keys.as_slice(), &[GroupingKey::User, GroupingKey::Date]);

        assert!(GroupingKeys::from_str("").unwrap().is_empty());
        assert!(GroupingKeys::from_str("none").unwrap().is_empty());
        assert!(GroupingKeys::from_str("no_grouping").unwrap().is_empty());
        assert_eq!(GroupingKey::from_str("time_field_2").unwrap(), GroupingKey::Task);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert_eq!(
            GroupingKeys::from_str("user,colour"),
            Err(GroupingError::UnknownKey("colour".to_string()))
        );
    }

    #[test]
    fn test_group_value_placeholders() {
        let entry = TimeEntry::new("2025-07-01", "A", "", "1:00");
        assert_eq!(group_value(&entry, GroupingKey::Client), NO_CLIENT);
        assert_eq!(group_value(&entry, GroupingKey::Project), NO_PROJECT);
        assert_eq!(group_value(&entry, GroupingKey::Task), NO_TASK);

        let entry = entry.with_client("Acme").with_task("#12 Login");
        assert_eq!(group_value(&entry, GroupingKey::Client), "Acme");
        assert_eq!(group_value(&entry, GroupingKey::Task), "#12 Login");
        assert_eq!(group_value(&entry, GroupingKey::Date), "2025-07-01");
    }

    #[test]
    fn test_first_seen_order_not_sorted() {
        let entries = vec![
            TimeEntry::new("2025-07-01", "Zoe", "Web", "1:00"),
            TimeEntry::new("2025-07-01", "Ann", "Web", "1:00"),
            TimeEntry::new("2025-07-02", "Zoe", "Web", "1:00"),
        ];
        let groups = build_groups(&entries, &GroupingKeys::new([GroupingKey::User]));
        let keys: Vec<&str> = groups.iter().map(|group| group.key.as_str()).collect();
        assert_eq!(keys, vec!["Zoe", "Ann"]);
    }

    #[test]
    fn test_flatten_keeps_tree_order() {
        let entries = sample();
        let groups = build_groups(&entries, &GroupingKeys::new([GroupingKey::User, GroupingKey::Date]));
        let flat: Vec<&str> = groups[0].flatten().iter().map(|entry| entry.date.as_str()).collect();
        assert_eq!(flat, vec!["2025-07-01", "2025-07-02"]);
        assert_eq!(groups[0].entry_count(), 2);
    }
}
