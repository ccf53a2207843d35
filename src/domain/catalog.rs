use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// The seven content tables a fortune draws from.
///
/// Each category owns a fixed selection offset. Offsets are part of the
/// contract: changing one reshuffles that category for every user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Overall,
    Money,
    Love,
    Color,
    Snack,
    Advice,
    Caution,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Overall,
        Category::Money,
        Category::Love,
        Category::Color,
        Category::Snack,
        Category::Advice,
        Category::Caution,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Overall => "overall",
            Category::Money => "money",
            Category::Love => "love",
            Category::Color => "color",
            Category::Snack => "snack",
            Category::Advice => "advice",
            Category::Caution => "caution",
        }
    }

    pub fn offset(&self) -> u32 {
        match self {
            Category::Overall => 0,
            Category::Money => 1,
            Category::Love => 2,
            Category::Color => 3,
            Category::Snack => 4,
            Category::Advice => 5,
            Category::Caution => 6,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverallEntry {
    pub score: u8,
    pub emoji: String,
    pub title: String,
    pub content: String,
}

/// Money and love readings share one shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingEntry {
    pub emoji: String,
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckyColor {
    pub name: String,
    pub hex: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog category `{0}` has no entries")]
    EmptyCategory(Category),
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Unvalidated catalog tables, in the JSON layout content authors edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogData {
    pub overall: Vec<OverallEntry>,
    pub money: Vec<ReadingEntry>,
    pub love: Vec<ReadingEntry>,
    pub colors: Vec<LuckyColor>,
    pub snacks: Vec<String>,
    pub advice: Vec<String>,
    pub caution: Vec<String>,
}

impl CatalogData {
    pub fn len(&self, category: Category) -> usize {
        match category {
            Category::Overall => self.overall.len(),
            Category::Money => self.money.len(),
            Category::Love => self.love.len(),
            Category::Color => self.colors.len(),
            Category::Snack => self.snacks.len(),
            Category::Advice => self.advice.len(),
            Category::Caution => self.caution.len(),
        }
    }
}

/// Read-only content tables with every category guaranteed non-empty.
///
/// Entry order is observable: selection is by index, so reordering a table
/// changes the fortune of everyone whose seed lands on the moved rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogData", into = "CatalogData")]
pub struct ContentCatalog {
    data: CatalogData,
}

impl TryFrom<CatalogData> for ContentCatalog {
    type Error = CatalogError;

    fn try_from(data: CatalogData) -> Result<Self, Self::Error> {
        if let Some(empty) = Category::ALL.into_iter().find(|c| data.len(*c) == 0) {
            return Err(CatalogError::EmptyCategory(empty));
        }
        Ok(ContentCatalog { data })
    }
}

impl From<ContentCatalog> for CatalogData {
    fn from(catalog: ContentCatalog) -> Self {
        catalog.data
    }
}

impl ContentCatalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn overall(&self) -> &[OverallEntry] {
        &self.data.overall
    }

    pub fn money(&self) -> &[ReadingEntry] {
        &self.data.money
    }

    pub fn love(&self) -> &[ReadingEntry] {
        &self.data.love
    }

    pub fn colors(&self) -> &[LuckyColor] {
        &self.data.colors
    }

    pub fn snacks(&self) -> &[String] {
        &self.data.snacks
    }

    pub fn advice(&self) -> &[String] {
        &self.data.advice
    }

    pub fn caution(&self) -> &[String] {
        &self.data.caution
    }

    pub fn len(&self, category: Category) -> usize {
        self.data.len(category)
    }

    pub fn data(&self) -> &CatalogData {
        &self.data
    }
}

impl Default for ContentCatalog {
    /// The built-in Korean content shipped with the app.
    fn default() -> Self {
        let owned = |rows: &[&str]| rows.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        let readings = |rows: &[(&str, &str, &str)]| {
            rows.iter()
                .map(|(emoji, title, content)| ReadingEntry {
                    emoji: emoji.to_string(),
                    title: title.to_string(),
                    content: content.to_string(),
                })
                .collect::<Vec<_>>()
        };

        ContentCatalog {
            data: CatalogData {
                overall: OVERALL
                    .iter()
                    .map(|(score, emoji, title, content)| OverallEntry {
                        score: *score,
                        emoji: emoji.to_string(),
                        title: title.to_string(),
                        content: content.to_string(),
                    })
                    .collect(),
                money: readings(MONEY),
                love: readings(LOVE),
                colors: COLORS
                    .iter()
                    .map(|(name, hex)| LuckyColor {
                        name: name.to_string(),
                        hex: hex.to_string(),
                    })
                    .collect(),
                snacks: owned(SNACKS),
                advice: owned(ADVICE),
                caution: owned(CAUTION),
            },
        }
    }
}

const OVERALL: &[(u8, &str, &str, &str)] = &[
    (95, "🌟", "최고의 하루", "하는 일마다 술술 풀리는 날이에요. 미뤄둔 일을 시작하기에 더없이 좋습니다."),
    (90, "🍀", "행운이 가득한 날", "뜻밖의 기회가 찾아와요. 주변의 제안에 귀를 기울여 보세요."),
    (85, "☀️", "밝게 빛나는 하루", "자신감이 넘치는 날이에요. 당신의 의견이 좋은 반응을 얻습니다."),
    (80, "✨", "순조로운 흐름", "계획한 일이 예정대로 진행돼요. 작은 성취가 큰 힘이 됩니다."),
    (75, "🌈", "기분 좋은 변화", "새로운 만남이나 소식이 활력을 줘요. 열린 마음으로 맞이하세요."),
    (70, "🙂", "무난한 하루", "큰 굴곡 없이 평온하게 지나가요. 일상의 리듬을 지키면 충분합니다."),
    (65, "🌤️", "차분한 하루", "서두르지 않으면 좋은 결과가 따라와요. 한 번 더 확인하는 습관이 도움이 됩니다."),
    (60, "🌥️", "조금 느린 하루", "일이 생각보다 더디게 진행될 수 있어요. 여유를 가지고 기다려 보세요."),
    (55, "🌧️", "숨 고르기가 필요한 날", "무리하면 지치기 쉬워요. 오늘은 컨디션 관리에 집중하세요."),
    (50, "🌙", "내일을 준비하는 날", "결과보다 준비에 의미가 있는 하루예요. 차근차근 쌓아 두면 곧 빛을 봅니다."),
];

const MONEY: &[(&str, &str, &str)] = &[
    ("💰", "재물운 상승", "예상하지 못한 수입이 생길 수 있어요. 작은 투자에도 좋은 기운이 있습니다."),
    ("💵", "알뜰한 하루", "계획적인 소비가 빛을 발해요. 장바구니를 한 번 더 살펴보세요."),
    ("🪙", "작은 행운", "길에서 동전을 줍는 것 같은 소소한 이득이 있어요."),
    ("💳", "지출 주의", "충동구매의 유혹이 커요. 꼭 필요한 것만 사도록 해요."),
    ("📈", "흐름이 좋은 날", "금전 관련 결정이 좋은 방향으로 흘러가요. 정보 수집에 힘써 보세요."),
    ("🏦", "저축하기 좋은 날", "오늘 모은 돈이 나중에 큰 힘이 돼요. 자동이체를 점검해 보세요."),
    ("🎁", "베풂의 기쁨", "작은 선물이 더 큰 복으로 돌아와요."),
    ("🧾", "정리가 필요한 날", "미뤄둔 영수증과 가계부를 정리하면 새는 돈이 보여요."),
];

const LOVE: &[(&str, &str, &str)] = &[
    ("❤️", "설레는 하루", "가까운 사람에게서 따뜻한 마음을 느껴요. 먼저 연락해 보세요."),
    ("💕", "마음이 통하는 날", "대화가 술술 이어져요. 솔직한 표현이 관계를 깊게 만듭니다."),
    ("💌", "반가운 소식", "오랜만의 연락이 기분 좋은 설렘을 줘요."),
    ("🌹", "로맨틱한 기운", "평소와 다른 장소에서의 만남이 특별한 추억이 돼요."),
    ("🤝", "배려가 빛나는 날", "상대의 입장을 먼저 생각하면 오해가 풀려요."),
    ("💭", "생각이 많은 날", "마음을 정리할 시간이 필요해요. 조급해하지 마세요."),
    ("🫶", "고마움을 전하는 날", "곁에 있는 사람에게 감사 인사를 건네 보세요."),
    ("🌸", "새로운 인연", "예상하지 못한 곳에서 좋은 인연이 시작될 수 있어요."),
];

const COLORS: &[(&str, &str)] = &[
    ("로열 퍼플", "#7B2CBF"),
    ("스카이 블루", "#4CC9F0"),
    ("에메랄드 그린", "#2A9D8F"),
    ("선셋 오렌지", "#F4A261"),
    ("체리 레드", "#E63946"),
    ("레몬 옐로", "#FFD60A"),
    ("베이비 핑크", "#FFAFCC"),
    ("미드나잇 네이비", "#1D3557"),
    ("라벤더", "#CDB4DB"),
    ("민트", "#98F5E1"),
];

const SNACKS: &[&str] = &[
    "초코 쿠키",
    "딸기 라떼",
    "군고구마",
    "붕어빵",
    "마카롱",
    "아이스 아메리카노",
    "떡볶이",
    "바나나 우유",
    "호두과자",
    "허니버터칩",
    "녹차 아이스크림",
    "크로플",
];

const ADVICE: &[&str] = &[
    "오늘 하루도 충분히 잘하고 있어요.",
    "작은 친절이 큰 행운을 불러와요.",
    "망설이던 일, 오늘은 한 걸음만 내디뎌 보세요.",
    "웃는 얼굴이 최고의 부적이에요.",
    "완벽보다 완성이 먼저예요.",
    "좋아하는 노래 한 곡이 기분을 바꿔 줄 거예요.",
    "물 한 잔과 짧은 산책으로 머리를 비워 보세요.",
    "고마운 사람에게 안부를 전해 보세요.",
    "오늘의 선택을 믿어도 좋아요.",
    "쉬어 가는 것도 앞으로 나아가는 방법이에요.",
    "새로운 것을 하나 배워 보세요.",
    "나 자신에게 칭찬 한마디를 건네 보세요.",
];

const CAUTION: &[&str] = &[
    "급하게 내린 결정은 다시 한번 검토하세요.",
    "말실수에 주의하세요. 한 템포 쉬고 말해요.",
    "늦은 밤 야식은 내일의 컨디션을 떨어뜨려요.",
    "약속 시간을 꼭 확인하세요.",
    "중요한 물건을 잃어버리지 않게 챙기세요.",
    "과한 지출은 다음 주의 나에게 부담이 돼요.",
    "남과 비교하지 마세요. 나만의 속도가 있어요.",
    "무리한 운동보다 가벼운 스트레칭이 좋아요.",
    "메시지를 보내기 전에 받는 사람을 확인하세요.",
    "피곤할 때는 운전보다 대중교통을 이용하세요.",
];
