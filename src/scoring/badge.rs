use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BadgeTier {
    #[serde(rename = "BOT")]
    Bot,
    Android,
    Cyborg,
    Human,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub tier: BadgeTier,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub min_score: u8,
    pub max_score: u8,
}

impl Badge {
    pub fn contains(&self, score: u8) -> bool {
        (self.min_score..=self.max_score).contains(&score)
    }
}

/// Contiguous bands covering 0-100, lowest tier first.
pub static BADGES: [Badge; 4] = [
    Badge {
        tier: BadgeTier::Bot,
        name: "BOT",
        description: "Warning: Low Activity",
        icon: "🤖",
        min_score: 0,
        max_score: 39,
    },
    Badge {
        tier: BadgeTier::Android,
        name: "Android",
        description: "Basic on-chain activity detected",
        icon: "🤖",
        min_score: 40,
        max_score: 59,
    },
    Badge {
        tier: BadgeTier::Cyborg,
        name: "Cyborg",
        description: "Advanced DeFi engagement",
        icon: "🦾",
        min_score: 60,
        max_score: 79,
    },
    Badge {
        tier: BadgeTier::Human,
        name: "Human",
        description: "✨ Verified Human Status",
        icon: "💎",
        min_score: 80,
        max_score: 100,
    },
];

/// First badge whose band holds `score`; the BOT tier otherwise.
pub fn badge_for_score(score: u8) -> &'static Badge {
    BADGES
        .iter()
        .find(|badge| badge.contains(score))
        .unwrap_or(&BADGES[0])
}

pub fn share_text(total: u8, badge: &Badge) -> String {
    format!(
        "I just scored {total}/100 on ProofDrop and earned a {} badge! 🎯 Check your crypto humanity at ProofDrop.io",
        badge.name
    )
}
