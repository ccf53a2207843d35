//! Terminal rendering of a fortune.
//!
//! `format_*` functions return lines and do no I/O, so the layout is unit
//! tested; `print_*` wrappers write them to stdout.
//!
//! ```text
//! Kim님의 오늘 운세
//! 2025년 1월 1일 수요일
//!
//! ☀️ 총운 85점 · 밝은 하루
//!     좋은 일이 생겨요.
//! 💰 금전운 · 재물운 상승
//!     수입이 늘어요.
//! ...
//! ```

use crate::domain::fortune::FortuneResult;
use crate::domain::share::{generate_share_text, kakao_description, kakao_title, tweet_text};
use crate::domain::streak::StreakBadge;

pub fn format_fortune(result: &FortuneResult) -> Vec<String> {
    let numbers = result
        .lucky_numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    vec![
        format!("{}님의 오늘 운세", result.name),
        result.date.clone(),
        String::new(),
        format!(
            "{} 총운 {}점 · {}",
            result.overall.emoji, result.overall.score, result.overall.title
        ),
        format!("    {}", result.overall.content),
        format!("{} 금전운 · {}", result.money.emoji, result.money.title),
        format!("    {}", result.money.content),
        format!("{} 연애운 · {}", result.love.emoji, result.love.title),
        format!("    {}", result.love.content),
        String::new(),
        format!("행운의 시간: {}", result.lucky_time.display),
        format!(
            "행운의 색: {} ({})",
            result.lucky_color.name, result.lucky_color.hex
        ),
        format!("행운의 번호: {}", numbers),
        format!("행운의 간식: {}", result.lucky_snack),
        String::new(),
        format!("💬 \"{}\"", result.advice),
        format!("⚠️ {}", result.caution),
    ]
}

pub fn format_streak(streak: u32) -> Option<String> {
    StreakBadge::for_streak(streak).map(|badge| format!("{} {}", badge.icon, badge.text))
}

pub fn print_fortune(result: &FortuneResult, streak: Option<u32>) {
    for line in format_fortune(result) {
        println!("{}", line);
    }
    if let Some(badge) = streak.and_then(format_streak) {
        println!();
        println!("{}", badge);
    }
}

/// Copy-ready texts for each share target, all pointing at `url`.
pub fn format_share(result: &FortuneResult, url: &str) -> Vec<String> {
    vec![
        format!("{} {}", generate_share_text(result), url),
        String::new(),
        "[X]".to_string(),
        format!("{} {}", tweet_text(result), url),
        String::new(),
        "[카카오톡]".to_string(),
        kakao_title(result),
        kakao_description(result),
        url.to_string(),
    ]
}

pub fn print_share(result: &FortuneResult, url: &str) {
    for line in format_share(result, url) {
        println!("{}", line);
    }
}
