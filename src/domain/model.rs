use std::fmt;

/// A username in normalized form: trimmed, leading `@` characters removed,
/// lowercased. Equality and hashing work on that form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    pub fn normalize(raw: &str) -> Self {
        Username(raw.trim().trim_start_matches('@').to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Username {
    fn from(raw: &str) -> Self {
        Username::normalize(raw)
    }
}

/// Ordered usernames as parsed from a list; duplicates are kept.
pub type UsernameList = Vec<Username>;

#[derive(Debug, Clone)]
pub struct ExtractedLists {
    pub wanted: UsernameList,
    pub following: Option<UsernameList>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub to_unfollow: Vec<Username>,
    pub not_found: Vec<Username>,
    /// Whether a following list took part in building the plan.
    pub verified: bool,
}

/// Outcome of a run that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunReport {
    NothingToDo {
        given_path: String,
    },
    DryRun {
        plan: Plan,
        following_count: Option<usize>,
    },
    Completed {
        plan: Plan,
        following_count: Option<usize>,
        written: Vec<String>,
    },
}
