#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use timesheet::libs::duration::{parse_duration, sum_durations};
    use timesheet::libs::entry::TimeEntry;
    use timesheet::libs::grouping::{build_groups, Group, GroupingKey, GroupingKeys};
    use timesheet::libs::tree::{render, ReportRow};

    fn entry_strategy() -> impl Strategy<Value = TimeEntry> {
        (
            prop::sample::select(vec!["2025-07-01", "2025-07-02", "2025-07-03"]),
            prop::sample::select(vec!["Ann", "Bob", "Cid"]),
            prop::option::of(prop::sample::select(vec!["Acme", "Beta"])),
            prop::sample::select(vec!["Web", "App", ""]),
            prop::option::of(prop::sample::select(vec!["#1 Login", "#2 Search"])),
            0u32..12,
            0u32..60,
            any::<u16>(),
        )
            .prop_map(|(date, user, client, project, task, hours, minutes, marker)| TimeEntry {
                date: date.to_string(),
                user: user.to_string(),
                client: client.map(str::to_string),
                project: project.to_string(),
                task: task.map(str::to_string),
                duration: format!("{}:{:02}", hours, minutes),
                note: Some(marker.to_string()),
            })
    }

    fn key_strategy() -> impl Strategy<Value = GroupingKey> {
        prop::sample::select(vec![
            GroupingKey::None,
            GroupingKey::Date,
            GroupingKey::User,
            GroupingKey::Client,
            GroupingKey::Project,
            GroupingKey::Task,
        ])
    }

    fn leaf_entries<'a>(groups: &[Group<'a>], out: &mut Vec<Vec<&'a TimeEntry>>) {
        for group in groups {
            if group.sub_groups.is_empty() {
                out.push(group.entries.clone());
            } else {
                leaf_entries(&group.sub_groups, out);
            }
        }
    }

    fn sorted_ptrs(entries: &[&TimeEntry]) -> Vec<usize> {
        let mut ptrs: Vec<usize> = entries.iter().map(|entry| *entry as *const TimeEntry as usize).collect();
        ptrs.sort_unstable();
        ptrs
    }

    proptest! {
        #[test]
        fn every_entry_lands_in_exactly_one_leaf(
            entries in prop::collection::vec(entry_strategy(), 0..40),
            keys in prop::collection::vec(key_strategy(), 0..4),
        ) {
            let keys = GroupingKeys::new(keys);
            let groups = build_groups(&entries, &keys);

            let mut leaves = Vec::new();
            leaf_entries(&groups, &mut leaves);
            let all: Vec<&TimeEntry> = leaves.into_iter().flatten().collect();

            let expected: Vec<&TimeEntry> = entries.iter().collect();
            prop_assert_eq!(sorted_ptrs(&all), sorted_ptrs(&expected));
        }

        #[test]
        fn leaf_buckets_keep_input_order(
            entries in prop::collection::vec(entry_strategy(), 0..40),
            keys in prop::collection::vec(key_strategy(), 0..4),
        ) {
            let groups = build_groups(&entries, &GroupingKeys::new(keys));
            let mut leaves = Vec::new();
            leaf_entries(&groups, &mut leaves);

            let position = |entry: &TimeEntry| entries.iter().position(|e| std::ptr::eq(e, entry)).unwrap_or(usize::MAX);
            for leaf in leaves {
                let positions: Vec<usize> = leaf.iter().map(|entry| position(*entry)).collect();
                prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
            }
        }

        #[test]
        fn sum_is_additive_over_concatenation(
            first in prop::collection::vec(entry_strategy(), 0..20),
            second in prop::collection::vec(entry_strategy(), 0..20),
        ) {
            let combined: Vec<TimeEntry> = first.iter().chain(second.iter()).cloned().collect();
            prop_assert_eq!(
                sum_durations(&combined).num_minutes(),
                sum_durations(&first).num_minutes() + sum_durations(&second).num_minutes()
            );
        }

        #[test]
        fn empty_keys_give_one_root_group(entries in prop::collection::vec(entry_strategy(), 0..20)) {
            let groups = build_groups(&entries, &GroupingKeys::default());
            prop_assert_eq!(groups.len(), 1);
            prop_assert_eq!(groups[0].entries.len(), entries.len());
        }

        #[test]
        fn repeated_keys_match_single_key(
            entries in prop::collection::vec(entry_strategy(), 0..20),
            key in key_strategy(),
        ) {
            let once = build_groups(&entries, &GroupingKeys::new([key]));
            let twice = build_groups(&entries, &GroupingKeys::new([key, key]));
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn totals_only_keeps_headers_and_subtotals(
            entries in prop::collection::vec(entry_strategy(), 0..30),
            keys in prop::collection::vec(key_strategy(), 0..4),
        ) {
            let groups = build_groups(&entries, &GroupingKeys::new(keys));
            let full = render(&groups, false);
            let totals = render(&groups, true);

            let without_entries: Vec<&ReportRow<'_>> = full.iter().filter(|row| !matches!(row, ReportRow::Entry { .. })).collect();
            prop_assert_eq!(without_entries, totals.iter().collect::<Vec<_>>());
            prop_assert_eq!(full.len() - totals.len(), entries.len());
        }

        #[test]
        fn parse_never_negative(value in ".*") {
            prop_assert!(parse_duration(&value).num_minutes() >= 0);
        }
    }
}
