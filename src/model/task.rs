use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which list a task lives in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    #[default]
    Today,
    Tomorrow,
}

impl Bucket {
    pub const ALL: [Bucket; 2] = [Bucket::Today, Bucket::Tomorrow];

    /// Lowercase name, as used in prompts and config
    pub fn as_str(self) -> &'static str {
        match self {
            Bucket::Today => "today",
            Bucket::Tomorrow => "tomorrow",
        }
    }

    /// Capitalized name for tab labels
    pub fn label(self) -> &'static str {
        match self {
            Bucket::Today => "Today",
            Bucket::Tomorrow => "Tomorrow",
        }
    }

    /// The other bucket
    pub fn other(self) -> Bucket {
        match self {
            Bucket::Today => Bucket::Tomorrow,
            Bucket::Tomorrow => Bucket::Today,
        }
    }

    /// Days from today this bucket refers to
    pub fn day_offset(self) -> i64 {
        match self {
            Bucket::Today => 0,
            Bucket::Tomorrow => 1,
        }
    }
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown bucket '{0}' (expected 'today' or 'tomorrow')")]
pub struct ParseBucketError(pub String);

impl FromStr for Bucket {
    type Err = ParseBucketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(Bucket::Today),
            "tomorrow" => Ok(Bucket::Tomorrow),
            _ => Err(ParseBucketError(s.to_string())),
        }
    }
}

/// Opaque task identifier, unique for the lifetime of a task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl TaskId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        TaskId(raw)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    pub title: String,
    pub completed: bool,
    bucket: Bucket,
}

impl Task {
    pub(crate) fn new(id: TaskId, title: impl Into<String>, bucket: Bucket) -> Self {
        Task {
            id,
            title: title.into(),
            completed: false,
            bucket,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Bucket is fixed at creation; there is no setter
    pub fn bucket(&self) -> Bucket {
        self.bucket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_parse() {
        assert_eq!("today".parse::<Bucket>(), Ok(Bucket::Today));
        assert_eq!(" Tomorrow ".parse::<Bucket>(), Ok(Bucket::Tomorrow));
        assert!("yesterday".parse::<Bucket>().is_err());
    }

    #[test]
    fn test_bucket_other() {
        assert_eq!(Bucket::Today.other(), Bucket::Tomorrow);
        assert_eq!(Bucket::Tomorrow.other(), Bucket::Today);
    }

    #[test]
    fn test_bucket_serde_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            b: Bucket,
        }
        let w: Wrapper = toml::from_str("b = \"tomorrow\"").unwrap();
        assert_eq!(w.b, Bucket::Tomorrow);
    }

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new(TaskId::from_raw(7), "Walk", Bucket::Tomorrow);
        assert_eq!(task.id().to_string(), "#7");
        assert!(!task.completed);
        assert_eq!(task.bucket(), Bucket::Tomorrow);
    }
}
