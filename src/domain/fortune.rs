use crate::domain::catalog::{
    Category, CatalogError, ContentCatalog, LuckyColor, OverallEntry, ReadingEntry,
};
use crate::domain::dates::{formatted_display_date, today_stamp};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// Multiplier applied to a category offset before indexing. Keeps the index
/// sequences of different categories apart when they share one seed.
const SELECTION_PRIME: u64 = 7919;

const LUCKY_NUMBER_MAX: u32 = 45;
const LUCKY_NUMBER_ATTEMPTS: u32 = 50;
/// Attempts that reuse the raw candidate before it starts being perturbed.
const LUCKY_NUMBER_PLAIN_ATTEMPTS: u32 = 10;

/// 32-bit string hash, `h = h * 31 + unit` with two's-complement wraparound.
///
/// Folds UTF-16 code units so values match the browser build bit for bit.
/// Every seed ever handed out derives from this, so it must never change.
pub fn hash(text: &str) -> u32 {
    let h = text.encode_utf16().fold(0i32, |h, unit| {
        h.wrapping_shl(5).wrapping_sub(h).wrapping_add(i32::from(unit))
    });
    h.unsigned_abs()
}

/// Picks `items[(seed + offset * 7919) % len]`, or `None` when `items` is empty.
pub fn select_by_seed<T>(items: &[T], seed: u32, offset: u32) -> Option<&T> {
    if items.is_empty() {
        return None;
    }
    let index = (u64::from(seed) + u64::from(offset) * SELECTION_PRIME) % items.len() as u64;
    items.get(index as usize)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckyTime {
    pub start: String,
    pub end: String,
    pub display: String,
}

/// A two-hour window starting between 09:00 and 20:55 on a five-minute mark.
///
/// The end hour is not wrapped, so a window may close as late as 22:55.
pub fn generate_lucky_time(seed: u32) -> LuckyTime {
    let start_hour = seed % 12 + 9;
    let start_minute = ((seed >> 4) % 12) * 5;
    let end_hour = start_hour + 2;
    let end_minute = start_minute;

    let start = format!("{:02}:{:02}", start_hour, start_minute);
    let end = format!("{:02}:{:02}", end_hour, end_minute);
    let display = format!("{} - {}", start, end);

    LuckyTime { start, end, display }
}

/// Three numbers in 1..=45, ascending.
///
/// A slot whose candidate is taken retries up to 50 times; the first ten
/// attempts reuse the candidate and later ones nudge it by the attempt count.
/// If every attempt collides the duplicate is kept. No seed is known to reach
/// that path, and turning it into an error would change deployed results.
pub fn generate_lucky_numbers(seed: u32) -> [u32; 3] {
    let mut numbers = [0u32; 3];
    let mut used = HashSet::with_capacity(3);

    for (i, slot) in numbers.iter_mut().enumerate() {
        let i = i as u32;
        let candidate = ((seed >> (i * 5)) + i * 13) % LUCKY_NUMBER_MAX + 1;
        let mut attempts = 0;
        let mut num;
        loop {
            num = candidate;
            attempts += 1;
            if attempts > LUCKY_NUMBER_PLAIN_ATTEMPTS {
                num = (num + attempts) % LUCKY_NUMBER_MAX + 1;
            }
            if !used.contains(&num) || attempts >= LUCKY_NUMBER_ATTEMPTS {
                break;
            }
        }
        used.insert(num);
        *slot = num;
    }

    numbers.sort_unstable();
    numbers
}

/// Composite key hashed into the seed: name, birthdate without hyphens, day stamp.
pub fn seed_key(name: &str, birthdate: &str, today: NaiveDate) -> String {
    let normalized: String = birthdate.chars().filter(|c| *c != '-').collect();
    format!("{}{}{}", name, normalized, today_stamp(today))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneResult {
    pub name: String,
    pub date: String,
    pub overall: OverallEntry,
    pub money: ReadingEntry,
    pub love: ReadingEntry,
    pub lucky_time: LuckyTime,
    pub lucky_color: LuckyColor,
    pub lucky_numbers: [u32; 3],
    pub lucky_snack: String,
    pub advice: String,
    pub caution: String,
    pub seed: u32,
    pub generated_at: DateTime<Utc>,
}

impl FortuneResult {
    /// Equality on everything except the generation timestamp.
    pub fn same_fortune(&self, other: &FortuneResult) -> bool {
        FortuneResult {
            generated_at: other.generated_at,
            ..self.clone()
        } == *other
    }
}

/// Turns `(name, birthdate, day)` into a [`FortuneResult`] against a fixed catalog.
///
/// Holds no mutable state; clones share the catalog.
#[derive(Debug, Clone)]
pub struct FortuneEngine {
    catalog: Arc<ContentCatalog>,
}

impl FortuneEngine {
    pub fn new(catalog: ContentCatalog) -> Self {
        Self::with_shared(Arc::new(catalog))
    }

    pub fn with_shared(catalog: Arc<ContentCatalog>) -> Self {
        FortuneEngine { catalog }
    }

    pub fn catalog(&self) -> &ContentCatalog {
        &self.catalog
    }

    /// `birthdate` is expected as `YYYY-MM-DD` and already validated by the caller.
    pub fn generate(
        &self,
        name: &str,
        birthdate: &str,
        today: NaiveDate,
    ) -> Result<FortuneResult, CatalogError> {
        let seed = hash(&seed_key(name, birthdate, today));
        let catalog = &self.catalog;

        let overall = pick(catalog.overall(), seed, Category::Overall)?;
        let money = pick(catalog.money(), seed, Category::Money)?;
        let love = pick(catalog.love(), seed, Category::Love)?;
        let color = pick(catalog.colors(), seed, Category::Color)?;
        let snack = pick(catalog.snacks(), seed, Category::Snack)?;
        let advice = pick(catalog.advice(), seed, Category::Advice)?;
        let caution = pick(catalog.caution(), seed, Category::Caution)?;

        tracing::debug!(seed, score = overall.score, %today, "Generated fortune");

        Ok(FortuneResult {
            name: name.to_string(),
            date: formatted_display_date(today),
            overall: overall.clone(),
            money: money.clone(),
            love: love.clone(),
            lucky_time: generate_lucky_time(seed),
            lucky_color: color.clone(),
            lucky_numbers: generate_lucky_numbers(seed),
            lucky_snack: snack.clone(),
            advice: advice.clone(),
            caution: caution.clone(),
            seed,
            generated_at: Utc::now(),
        })
    }
}

impl Default for FortuneEngine {
    fn default() -> Self {
        FortuneEngine::new(ContentCatalog::default())
    }
}

fn pick<T>(items: &[T], seed: u32, category: Category) -> Result<&T, CatalogError> {
    select_by_seed(items, seed, category.offset()).ok_or(CatalogError::EmptyCategory(category))
}
