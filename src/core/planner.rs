//! Deduplicates the wanted list and partitions it against the following list.
use crate::core::{Plan, Username};
use indexmap::IndexSet;
use std::collections::HashSet;

/// Each distinct username once, in order of first appearance.
pub fn deduplicate(wanted: &[Username]) -> Vec<Username> {
    let unique: IndexSet<&Username> = wanted.iter().collect();
    unique.into_iter().cloned().collect()
}

/// Without a following list every unique wanted name is actionable. With one,
/// names are split by membership, keeping first-occurrence order in both
/// halves.
pub fn plan(wanted: &[Username], following: Option<&[Username]>) -> Plan {
    let unique_wanted = deduplicate(wanted);

    let Some(following) = following else {
        return Plan {
            to_unfollow: unique_wanted,
            not_found: Vec::new(),
            verified: false,
        };
    };

    let following: HashSet<&Username> = following.iter().collect();
    let (to_unfollow, not_found): (Vec<Username>, Vec<Username>) = unique_wanted
        .into_iter()
        .partition(|name| following.contains(name));

    Plan {
        to_unfollow,
        not_found,
        verified: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::reader::read_usernames;

    fn users(raw: &[&str]) -> Vec<Username> {
        read_usernames(raw)
    }

    fn names(list: &[Username]) -> Vec<&str> {
        list.iter().map(Username::as_str).collect()
    }

    #[test]
    fn test_deduplicate_keeps_first_occurrence_order() {
        let wanted = users(&["xxx", "abc", "xxx", "yyy", "XXX", "@abc"]);
        assert_eq!(names(&deduplicate(&wanted)), vec!["xxx", "abc", "yyy"]);
    }

    #[test]
    fn test_plan_without_following_list() {
        let wanted = users(&["@Alice", "bob", "#comment", "", "alice"]);
        let plan = plan(&wanted, None);

        assert_eq!(names(&plan.to_unfollow), vec!["alice", "bob"]);
        assert!(plan.not_found.is_empty());
        assert!(!plan.verified);
    }

    #[test]
    fn test_plan_partitions_against_following_list() {
        let wanted = users(&["alice", "bob", "carol"]);
        let following = users(&["bob", "dave"]);
        let plan = plan(&wanted, Some(following.as_slice()));

        assert_eq!(names(&plan.to_unfollow), vec!["bob"]);
        assert_eq!(names(&plan.not_found), vec!["alice", "carol"]);
        assert!(plan.verified);
    }

    #[test]
    fn test_output_follows_input_order_not_alphabetical() {
        let wanted = users(&["zed", "mike", "alice", "zed"]);
        let following = users(&["alice", "zed"]);

        assert_eq!(names(&plan(&wanted, None).to_unfollow), vec!["zed", "mike", "alice"]);
        let verified = plan(&wanted, Some(following.as_slice()));
        assert_eq!(names(&verified.to_unfollow), vec!["zed", "alice"]);
        assert_eq!(names(&verified.not_found), vec!["mike"]);
    }

    #[test]
    fn test_every_spelling_collapses() {
        let wanted = users(&["x", "X", "@x"]);
        assert_eq!(names(&plan(&wanted, None).to_unfollow), vec!["x"]);
    }

    #[test]
    fn test_partition_covers_unique_wanted_exactly() {
        let wanted = users(&["e", "a", "d", "a", "b", "e", "c", "f", "b"]);
        let following = users(&["f", "b", "z", "e", "b"]);
        let unique = deduplicate(&wanted);
        let plan = plan(&wanted, Some(following.as_slice()));

        let found: HashSet<_> = plan.to_unfollow.iter().collect();
        let missing: HashSet<_> = plan.not_found.iter().collect();
        assert!(found.is_disjoint(&missing));
        assert_eq!(found.len(), plan.to_unfollow.len());
        assert_eq!(missing.len(), plan.not_found.len());

        let union: HashSet<_> = found.union(&missing).copied().collect();
        assert_eq!(union, unique.iter().collect::<HashSet<_>>());

        // Both halves are subsequences of the unique wanted order.
        for half in [&plan.to_unfollow, &plan.not_found] {
            let positions: Vec<usize> = half
                .iter()
                .map(|u| unique.iter().position(|w| w == u).unwrap())
                .collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
        assert_eq!(names(&plan.to_unfollow), vec!["e", "b", "f"]);
        assert_eq!(names(&plan.not_found), vec!["a", "d", "c"]);
    }

    #[test]
    fn test_empty_inputs() {
        let empty: Vec<Username> = Vec::new();
        assert_eq!(plan(&empty, None), Plan::default());

        let verified = plan(&empty, Some(empty.as_slice()));
        assert!(verified.to_unfollow.is_empty());
        assert!(verified.not_found.is_empty());
        assert!(verified.verified);

        let wanted = users(&["alice"]);
        let nobody = plan(&wanted, Some(empty.as_slice()));
        assert_eq!(names(&nobody.not_found), vec!["alice"]);
    }
}
