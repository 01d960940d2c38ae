//! User-facing texts: panel title, feedback messages, advisories.

use serde::{Deserialize, Serialize};

use crate::content::Mood;
use crate::energy::EnergyTier;

pub const NO_MOOD_ADVISORY: &str = "請先選擇心情喔～";

const START_TEXT: &str = "開始你的療癒行動，讓小樹苗和你一起成長吧！";
const FULL_TEXT: &str = "🎉 太棒了！你的心情小樹苗已經茁壯成長為一棵美麗的大樹！今天的你閃閃發光！";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStyle {
    Plain,
    /// Large celebratory banner.
    Banner,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub text: String,
    pub style: FeedbackStyle,
}

impl Feedback {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: FeedbackStyle::Plain,
        }
    }

    fn banner() -> Self {
        Self {
            text: FULL_TEXT.to_string(),
            style: FeedbackStyle::Banner,
        }
    }

    /// Message shown when a mood is (re)selected.
    pub fn on_select(tier: EnergyTier) -> Self {
        match tier {
            EnergyTier::Start => Self::plain(START_TEXT),
            EnergyTier::Full => Self::banner(),
            EnergyTier::Progress(level) => Self::plain(format!(
                "繼續加油！目前心情能量是 {level}%，小樹苗正在健康成長中～"
            )),
        }
    }

    /// Message shown after a task completion raised the level.
    pub fn on_complete(tier: EnergyTier) -> Self {
        match tier {
            EnergyTier::Full => Self::banner(),
            // A completion always raises the level, so Start cannot occur;
            // render it like any other partial level.
            EnergyTier::Start => Self::on_complete(EnergyTier::Progress(0)),
            EnergyTier::Progress(level) => Self::plain(format!(
                "好棒！你完成了一次的療癒，心情能量增加到 {level}%，小樹苗也長大了一些囉～"
            )),
        }
    }
}

pub fn title(mood: &Mood) -> String {
    format!("你的療癒行動：{mood}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_tiers() {
        assert_eq!(Feedback::on_select(EnergyTier::Start).text, START_TEXT);
        let progress = Feedback::on_select(EnergyTier::Progress(40));
        assert!(progress.text.contains("40%"));
        assert_eq!(progress.style, FeedbackStyle::Plain);
        assert_eq!(Feedback::on_select(EnergyTier::Full).style, FeedbackStyle::Banner);
    }

    #[test]
    fn complete_tiers() {
        let progress = Feedback::on_complete(EnergyTier::Progress(60));
        assert!(progress.text.contains("增加到 60%"));
        let full = Feedback::on_complete(EnergyTier::Full);
        assert_eq!(full.style, FeedbackStyle::Banner);
        assert_eq!(full.text, FULL_TEXT);
    }

    #[test]
    fn title_includes_mood() {
        assert_eq!(title(&Mood::new("焦慮")), "你的療癒行動：焦慮");
    }
}
