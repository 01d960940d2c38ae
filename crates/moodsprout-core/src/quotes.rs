//! Daily gentle affirmations.

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub emoji: String,
}

#[derive(Debug, Clone)]
pub struct QuoteBook {
    quotes: Vec<Quote>,
}

impl QuoteBook {
    /// Returns `None` for an empty list.
    pub fn new(quotes: Vec<Quote>) -> Option<Self> {
        (!quotes.is_empty()).then_some(Self { quotes })
    }

    pub fn builtin() -> Self {
        let quotes = BUILTIN
            .iter()
            .map(|(text, emoji)| Quote {
                text: (*text).to_string(),
                emoji: (*emoji).to_string(),
            })
            .collect();
        Self { quotes }
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Uniform pick; repeats of the previous quote are allowed.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &Quote {
        &self.quotes[rng.gen_range(0..self.quotes.len())]
    }
}

impl Default for QuoteBook {
    fn default() -> Self {
        Self::builtin()
    }
}

const BUILTIN: &[(&str, &str)] = &[
    ("沒關係，今天也有好好努力過了。", "🌸"),
    ("你的存在本身就是一份禮物。", "🎁"),
    ("慢慢來比較快，給自己一些時間。", "🌱"),
    ("每一次呼吸都是重新開始的機會。", "🌬️"),
    ("你比想像中更勇敢，比看起來更堅強。", "💪"),
    ("今天的小小進步也值得被看見。", "✨"),
    ("溫柔對待自己，就像對待最好的朋友。", "🤗"),
    ("每個難過的時刻都會過去的。", "🌈"),
    ("你已經比昨天的自己更好了。", "🌟"),
    ("允許自己慢一點，世界不會因此停止轉動。", "🌍"),
    ("有時候停下來休息，也是一種前進。", "🛋️"),
    ("你的感受都是真實且重要的。", "💕"),
    ("即使是烏雲密佈的天空，也藏著溫暖的陽光。", "☁️"),
    ("今天做得到的就夠了，明天再說明天的事。", "🌅"),
    ("每一個小小的善意都會回到你身邊。", "🔄"),
    ("你值得被愛，包括來自自己的愛。", "💕"),
    ("生活中的小確幸正等著被你發現。", "🔍"),
    ("深呼吸，現在這一刻你是安全的。", "🫧"),
    ("你的步調就是最適合的步調。", "👣"),
    ("今天也要記得對自己微笑喔。", "😊"),
    ("每個人都有自己的花期，慢慢綻放也很美。", "🌺"),
    ("你的努力，天空都看得見。", "👁️"),
    ("給自己一個擁抱，你辛苦了。", "🫂"),
    ("小小的快樂也是快樂，值得珍惜。", "🍀"),
    ("今天的你已經很棒了，真的。", "🌼"),
];
