use crate::domain::fortune::FortuneResult;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

/// Three-level bucket used in the copied share text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Great,
    Good,
    Ordinary,
}

impl ScoreBand {
    pub fn for_score(score: u8) -> Self {
        if score >= 80 {
            ScoreBand::Great
        } else if score >= 60 {
            ScoreBand::Good
        } else {
            ScoreBand::Ordinary
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Great => "대박",
            ScoreBand::Good => "좋은",
            ScoreBand::Ordinary => "평범한",
        }
    }
}

fn joined_numbers(result: &FortuneResult) -> String {
    result
        .lucky_numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Multi-line text copied to the clipboard or handed to the system share sheet.
pub fn generate_share_text(result: &FortuneResult) -> String {
    let band = ScoreBand::for_score(result.overall.score);

    format!(
        "🔮 오늘의 운세 결과!\n\n\
         {name}님의 오늘 운세는 {band} 운세! {emoji}\n\
         총운 {score}점\n\n\
         💰 금전운: {money}\n\
         ❤️ 연애운: {love}\n\
         🎨 행운의 색: {color}\n\
         🔢 행운의 번호: {numbers}\n\n\
         💬 \"{advice}\"\n\n\
         나도 확인해보기 👉",
        name = result.name,
        band = band.label(),
        emoji = result.overall.emoji,
        score = result.overall.score,
        money = result.money.title,
        love = result.love.title,
        color = result.lucky_color.name,
        numbers = joined_numbers(result),
        advice = result.advice,
    )
}

/// Short post text for X, hooked on a five-band reading of the score.
pub fn tweet_text(result: &FortuneResult) -> String {
    let (hook, emoji) = match result.overall.score {
        90..=u8::MAX => ("대박 운세가 나왔어요", "🔥"),
        80..=89 => ("오늘 운 좋을 듯", "✨"),
        70..=79 => ("괜찮은 하루가 될 것 같아요", "🌟"),
        60..=69 => ("평범하지만 나쁘지 않은 운세", "🙂"),
        _ => ("오늘은 조심해야 할 듯", "🤔"),
    };

    format!(
        "🔮 {}점! {} {}\n\n행운의 번호: {}\n\"{}\"\n\n내 운세도 확인해보기 👇",
        result.overall.score,
        hook,
        emoji,
        joined_numbers(result),
        result.advice
    )
}

pub fn kakao_title(result: &FortuneResult) -> String {
    format!("{}님의 오늘 운세", result.name)
}

pub fn kakao_description(result: &FortuneResult) -> String {
    format!(
        "총운 {}점! {} - {}",
        result.overall.score, result.overall.title, result.advice
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharedInput {
    pub name: String,
    pub birth: String,
}

/// URL-safe, unpadded base64 of `"<name>|<birth>"`.
pub fn encode_share_code(name: &str, birth: &str) -> String {
    URL_SAFE_NO_PAD.encode(format!("{}|{}", name, birth))
}

/// Reverses [`encode_share_code`]. Padded codes are accepted too.
pub fn decode_share_code(code: &str) -> Option<SharedInput> {
    let code = code.trim().trim_start_matches('/');
    let bytes = URL_SAFE_NO_PAD.decode(code.trim_end_matches('=')).ok()?;
    let decoded = String::from_utf8(bytes).ok()?;

    let mut parts = decoded.split('|');
    let name = parts.next()?;
    let birth = parts.next()?;
    if name.is_empty() || birth.is_empty() {
        return None;
    }

    Some(SharedInput {
        name: name.to_string(),
        birth: birth.to_string(),
    })
}

pub fn share_url(base_url: &str, name: &str, birth: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        encode_share_code(name, birth)
    )
}
