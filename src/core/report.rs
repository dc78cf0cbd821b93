//! Console text for a finished run.
use crate::core::{Plan, RunReport};
use std::fmt::Write;

impl RunReport {
    pub fn render(&self) -> String {
        let mut out = String::new();
        match self {
            RunReport::NothingToDo { given_path } => {
                let _ = writeln!(out, "No usernames found in {}. Nothing to do.", given_path);
            }
            RunReport::DryRun {
                plan,
                following_count,
            } => {
                render_following(&mut out, *following_count);
                let _ = writeln!(
                    out,
                    "\nDry run: {} username(s) would be unfollowed.",
                    plan.to_unfollow.len()
                );
                for name in &plan.to_unfollow {
                    let _ = writeln!(out, "  {}", name);
                }
                render_not_found(&mut out, plan);
                for name in &plan.not_found {
                    let _ = writeln!(out, "  {}", name);
                }
            }
            RunReport::Completed {
                plan,
                following_count,
                written,
            } => {
                render_following(&mut out, *following_count);
                let _ = writeln!(
                    out,
                    "\nDone! {} username(s) to unfollow.",
                    plan.to_unfollow.len()
                );
                for path in written {
                    let _ = writeln!(out, "  {}", path);
                }
                render_not_found(&mut out, plan);
            }
        }
        out
    }
}

fn render_following(out: &mut String, following_count: Option<usize>) {
    let _ = match following_count {
        Some(count) => writeln!(out, "Following list loaded: {} account(s).", count),
        None => writeln!(
            out,
            "Verification skipped; all given usernames will be included."
        ),
    };
}

fn render_not_found(out: &mut String, plan: &Plan) {
    if !plan.verified {
        return;
    }
    let _ = if plan.not_found.is_empty() {
        writeln!(out, "\nAll usernames in your list are in your following list.")
    } else {
        writeln!(
            out,
            "\nNote: {} username(s) from your list were not found in your following list and were skipped.",
            plan.not_found.len()
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Username;

    fn users(raw: &[&str]) -> Vec<Username> {
        raw.iter().map(|s| Username::from(*s)).collect()
    }

    #[test]
    fn test_render_nothing_to_do() {
        let report = RunReport::NothingToDo {
            given_path: "data/given_list.txt".to_string(),
        };
        assert_eq!(
            report.render(),
            "No usernames found in data/given_list.txt. Nothing to do.\n"
        );
    }

    #[test]
    fn test_render_completed_unverified() {
        let report = RunReport::Completed {
            plan: Plan {
                to_unfollow: users(&["alice", "bob"]),
                not_found: vec![],
                verified: false,
            },
            following_count: None,
            written: vec!["output/to_unfollow.txt".into(), "output/to_unfollow.csv".into()],
        };
        let text = report.render();
        assert!(text.starts_with("Verification skipped; all given usernames will be included.\n"));
        assert!(text.contains("Done! 2 username(s) to unfollow."));
        assert!(text.contains("  output/to_unfollow.csv\n"));
        assert!(!text.contains("Note:"));
        assert!(!text.contains("All usernames"));
    }

    #[test]
    fn test_render_dry_run_with_verification_disabled() {
        // Also covers --no-following, where a following file may well exist.
        let report = RunReport::DryRun {
            plan: Plan {
                to_unfollow: users(&["alice"]),
                not_found: vec![],
                verified: false,
            },
            following_count: None,
        };
        let text = report.render();
        assert!(text.starts_with("Verification skipped;"));
        assert!(!text.contains("No following list found"));
    }

    #[test]
    fn test_render_completed_with_not_found() {
        let report = RunReport::Completed {
            plan: Plan {
                to_unfollow: users(&["bob"]),
                not_found: users(&["alice", "carol"]),
                verified: true,
            },
            following_count: Some(2),
            written: vec!["output/not_found.txt".into()],
        };
        let text = report.render();
        assert!(text.starts_with("Following list loaded: 2 account(s).\n"));
        assert!(text.contains("Done! 1 username(s) to unfollow."));
        assert!(text.contains("Note: 2 username(s) from your list were not found"));
    }

    #[test]
    fn test_render_all_found() {
        let report = RunReport::Completed {
            plan: Plan {
                to_unfollow: users(&["bob"]),
                not_found: vec![],
                verified: true,
            },
            following_count: Some(1),
            written: vec![],
        };
        assert!(report
            .render()
            .ends_with("\nAll usernames in your list are in your following list.\n"));
    }

    #[test]
    fn test_render_dry_run_lists_names() {
        let report = RunReport::DryRun {
            plan: Plan {
                to_unfollow: users(&["bob"]),
                not_found: users(&["alice"]),
                verified: true,
            },
            following_count: Some(3),
        };
        let text = report.render();
        assert!(text.contains("Dry run: 1 username(s) would be unfollowed.\n  bob\n"));
        assert!(text.ends_with("were skipped.\n  alice\n"));
    }
}
