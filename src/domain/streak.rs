use crate::domain::dates::parse_stamp;
use chrono::NaiveDate;

/// Consecutive-day visit count after a visit on `today`.
///
/// `last_visit` is the stored `YYYYMMDD` stamp of the previous visit. A
/// missing or unreadable stamp starts over at 1, as does any gap longer
/// than a day. Clock skew that puts the last visit in the future also resets.
pub fn next_streak(last_visit: Option<&str>, streak: u32, today: NaiveDate) -> u32 {
    let Some(last) = last_visit.and_then(parse_stamp) else {
        return 1;
    };

    match (today - last).num_days() {
        0 => streak,
        1 => streak.saturating_add(1),
        _ => 1,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakTier {
    Fire,
    Gold,
    Diamond,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreakBadge {
    pub tier: StreakTier,
    pub icon: &'static str,
    pub text: String,
}

impl StreakBadge {
    /// Badges start at three days; gold at a week, diamond at thirty days.
    pub fn for_streak(streak: u32) -> Option<StreakBadge> {
        let badge = match streak {
            0..=2 => return None,
            3..=6 => StreakBadge {
                tier: StreakTier::Fire,
                icon: "🔥",
                text: format!("{}일 연속 확인 중!", streak),
            },
            7..=29 => StreakBadge {
                tier: StreakTier::Gold,
                icon: "⭐",
                text: format!("{}일 연속 확인! 골드 등급!", streak),
            },
            _ => StreakBadge {
                tier: StreakTier::Diamond,
                icon: "💎",
                text: format!("{}일 연속 확인! 다이아몬드 등급!", streak),
            },
        };
        Some(badge)
    }
}
