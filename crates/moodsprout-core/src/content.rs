//! Mood and task content.
//!
//! The catalog maps each mood to an ordered, non-empty list of healing
//! actions. It is supplied once at startup and never mutated by the session.
//!
//! Custom catalogs are written as TOML:
//!
//! ```toml
//! [[moods]]
//! name = "開心"
//! tasks = ["寫下今天讓你微笑的三件事", "分享一首喜歡的歌給朋友"]
//! ```

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ContentError, CoreError, Result};

/// A user-selected emotional category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mood(String);

impl Mood {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Mood {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A single suggested healing action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Task(String);

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Task {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Anything that can answer "which tasks belong to this mood".
pub trait TaskSource {
    fn tasks_for(&self, mood: &Mood) -> Option<&[Task]>;
}

/// One mood and its tasks, in catalog order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    #[serde(rename = "name")]
    pub mood: Mood,
    pub tasks: Vec<Task>,
}

/// Ordered mood → tasks mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCatalog {
    moods: Vec<MoodEntry>,
}

impl TaskCatalog {
    /// Build a catalog, rejecting empty task lists and duplicate moods.
    pub fn new(moods: Vec<MoodEntry>) -> Result<Self> {
        if moods.is_empty() {
            return Err(ContentError::NoMoods.into());
        }
        for (i, entry) in moods.iter().enumerate() {
            if entry.tasks.is_empty() {
                tracing::warn!(mood = %entry.mood, "rejecting mood without tasks");
                return Err(CoreError::EmptyTaskList {
                    mood: entry.mood.to_string(),
                });
            }
            if moods[..i].iter().any(|other| other.mood == entry.mood) {
                tracing::warn!(mood = %entry.mood, "rejecting duplicate mood");
                return Err(ContentError::DuplicateMood(entry.mood.to_string()).into());
            }
        }
        Ok(Self { moods })
    }

    /// Parse a TOML catalog.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let raw: TaskCatalog = toml::from_str(content).map_err(ContentError::from)?;
        Self::new(raw.moods)
    }

    /// Load a TOML catalog from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ContentError::ReadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// The catalog shipped with the app.
    pub fn builtin() -> Self {
        let moods = BUILTIN
            .iter()
            .map(|(name, tasks)| MoodEntry {
                mood: Mood::new(*name),
                tasks: tasks.iter().map(|t| Task::new(*t)).collect(),
            })
            .collect();
        Self { moods }
    }

    pub fn moods(&self) -> impl Iterator<Item = &Mood> {
        self.moods.iter().map(|e| &e.mood)
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.moods
    }

    pub fn len(&self) -> usize {
        self.moods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moods.is_empty()
    }

    /// Resolve user input to a mood: an exact name or a 1-based index.
    pub fn resolve(&self, input: &str) -> Option<&Mood> {
        let input = input.trim();
        if let Some(entry) = self.moods.iter().find(|e| e.mood.as_str() == input) {
            return Some(&entry.mood);
        }
        let index: usize = input.parse().ok()?;
        self.moods.get(index.checked_sub(1)?).map(|e| &e.mood)
    }
}

impl Default for TaskCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TaskSource for TaskCatalog {
    fn tasks_for(&self, mood: &Mood) -> Option<&[Task]> {
        self.moods
            .iter()
            .find(|e| &e.mood == mood)
            .map(|e| e.tasks.as_slice())
    }
}

const BUILTIN: &[(&str, &[&str])] = &[
    (
        "開心",
        &[
            "寫下今天讓你微笑的三件事",
            "把這份好心情分享給一位朋友",
            "播放一首喜歡的歌，跟著哼唱",
            "拍一張讓你開心的照片留作紀念",
            "對鏡子裡的自己說聲謝謝",
            "出門散步，感受陽光的溫度",
        ],
    ),
    (
        "難過",
        &[
            "給自己一個溫暖的擁抱",
            "泡一杯熱茶，慢慢喝完",
            "把心裡的感受寫在紙上",
            "聽一首安靜的音樂，允許自己哭一下",
            "傳訊息給一位信任的人",
            "蓋上毯子，休息十分鐘",
        ],
    ),
    (
        "焦慮",
        &[
            "做五次深呼吸，吸氣四秒、吐氣六秒",
            "說出你現在看得到的五樣東西",
            "把擔心的事列成清單，圈出能做的一件",
            "喝一杯水，感受水流過喉嚨",
            "伸展肩膀和脖子一分鐘",
            "把手機放下，閉眼靜坐三分鐘",
        ],
    ),
    (
        "疲憊",
        &[
            "閉上眼睛休息五分鐘",
            "站起來伸個懶腰",
            "吃一點喜歡的小點心",
            "用溫水洗把臉",
            "今天早點上床睡覺",
            "把待辦清單刪掉一件不急的事",
        ],
    ),
    (
        "生氣",
        &[
            "離開現場，走一小段路",
            "用力握拳十秒再慢慢放開",
            "把想說的話寫下來但先不要送出",
            "數到十，再做決定",
            "做二十下開合跳，把能量釋放出來",
            "聽一首節奏強烈的歌",
        ],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = TaskCatalog::builtin();
        assert_eq!(catalog.len(), 5);
        // Re-validate through the checked constructor.
        TaskCatalog::new(catalog.entries().to_vec()).unwrap();
    }

    #[test]
    fn resolve_by_name_and_index() {
        let catalog = TaskCatalog::builtin();
        assert_eq!(catalog.resolve("難過"), Some(&Mood::new("難過")));
        assert_eq!(catalog.resolve(" 1 "), Some(&Mood::new("開心")));
        assert_eq!(catalog.resolve("0"), None);
        assert_eq!(catalog.resolve("99"), None);
        assert_eq!(catalog.resolve("無聊"), None);
    }

    #[test]
    fn parses_toml_catalog() {
        let catalog = TaskCatalog::from_toml_str(
            r#"
            [[moods]]
            name = "happy"
            tasks = ["smile", "dance"]

            [[moods]]
            name = "sad"
            tasks = ["rest"]
            "#,
        )
        .unwrap();
        let moods: Vec<_> = catalog.moods().map(Mood::as_str).collect();
        assert_eq!(moods, vec!["happy", "sad"]);
        assert_eq!(
            catalog.tasks_for(&Mood::new("sad")),
            Some(&[Task::new("rest")][..])
        );
        assert!(catalog.tasks_for(&Mood::new("angry")).is_none());
    }

    #[test]
    fn rejects_empty_task_list() {
        let err = TaskCatalog::from_toml_str(
            r#"
            [[moods]]
            name = "empty"
            tasks = []
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::EmptyTaskList { ref mood } if mood == "empty"));
    }

    #[test]
    fn rejects_duplicate_moods() {
        let err = TaskCatalog::from_toml_str(
            r#"
            [[moods]]
            name = "a"
            tasks = ["x"]

            [[moods]]
            name = "a"
            tasks = ["y"]
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::Content(ContentError::DuplicateMood(_))));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = TaskCatalog::from_toml_str("moods = 3").unwrap_err();
        assert!(matches!(err, CoreError::Content(ContentError::ParseFailed(_))));
    }

    #[test]
    fn rejects_catalog_without_moods() {
        let err = TaskCatalog::new(Vec::new()).unwrap_err();
        assert!(matches!(err, CoreError::Content(ContentError::NoMoods)));
    }
}
