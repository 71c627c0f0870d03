//! Signature scent finder.

use std::time::Duration;

use crate::domain::answers::QuizAnswers;
use crate::domain::quiz::{Quiz, QuizConfig, QuizOutcome, ResultData};
use crate::domain::scoring::{ScoreTable, Tally};
use crate::domain::slug::ExperienceSlug;
use crate::domain::step::{ChoiceOption, QuizStep, StepKind};

const MOODS: &[ChoiceOption] = &[
    ChoiceOption::new("calm", "차분하고 고요한", "🕯️"),
    ChoiceOption::new("energetic", "활기차고 상쾌한", "⚡"),
    ChoiceOption::new("romantic", "설레고 로맨틱한", "💗"),
    ChoiceOption::new("mysterious", "신비롭고 깊은", "🌙"),
];

const PLACES: &[ChoiceOption] = &[
    ChoiceOption::new("forest", "새벽 숲길", "🌲"),
    ChoiceOption::new("ocean", "여름 바다", "🌊"),
    ChoiceOption::new("garden", "꽃이 핀 정원", "🌷"),
    ChoiceOption::new("city", "밤의 도시", "🌃"),
];

static CONFIG: QuizConfig = QuizConfig {
    slug: ExperienceSlug::ScentProfile,
    title: "AI 시그니처 향 찾기",
    steps: &[
        QuizStep {
            id: "mood",
            prompt: "요즘 나를 가장 잘 표현하는 분위기는?",
            kind: StepKind::SingleChoice { options: MOODS },
        },
        QuizStep {
            id: "place",
            prompt: "가장 머물고 싶은 장소는?",
            kind: StepKind::SingleChoice { options: PLACES },
        },
        QuizStep {
            id: "intensity",
            prompt: "향의 강도는 어느 정도가 좋나요?",
            kind: StepKind::Scale { min: 1, max: 5 },
        },
    ],
    analyze_duration: Duration::from_millis(2500),
    analyze_emoji: "🧪",
};

/// Fragrance families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScentFamily {
    /// Bright citrus.
    Citrus,
    /// Floral bouquet.
    Floral,
    /// Dry woods.
    Woody,
    /// Soft musk.
    Musk,
    /// Marine and fresh.
    Aquatic,
}

const MOOD_POINTS: ScoreTable<ScentFamily> = &[
    ("calm", &[(ScentFamily::Aquatic, 2), (ScentFamily::Woody, 1)]),
    ("energetic", &[(ScentFamily::Citrus, 2), (ScentFamily::Aquatic, 1)]),
    ("romantic", &[(ScentFamily::Floral, 2), (ScentFamily::Musk, 1)]),
    ("mysterious", &[(ScentFamily::Musk, 2), (ScentFamily::Woody, 1)]),
];

const PLACE_POINTS: ScoreTable<ScentFamily> = &[
    ("forest", &[(ScentFamily::Woody, 2)]),
    ("ocean", &[(ScentFamily::Aquatic, 2)]),
    ("garden", &[(ScentFamily::Floral, 2)]),
    ("city", &[(ScentFamily::Citrus, 1), (ScentFamily::Musk, 1)]),
];

static CITRUS: ResultData = ResultData {
    name: "시트러스",
    name_en: "Citrus",
    headline: "톡 터지는 상큼함, 에너지 충전형",
    description: "베르가못과 자몽이 어우러진 가볍고 밝은 향이에요. 아침 출근길과 운동 후에 잘 어울립니다.",
    keywords: &["베르가못", "자몽", "상쾌함"],
    emoji: "🍋",
    accent: "#f4d03f",
};

static FLORAL: ResultData = ResultData {
    name: "플로럴",
    name_en: "Floral",
    headline: "은은하게 피어나는 설렘",
    description: "장미와 피오니가 부드럽게 퍼지는 향이에요. 데이트나 특별한 약속에 추천해요.",
    keywords: &["장미", "피오니", "로맨틱"],
    emoji: "🌷",
    accent: "#f5a9b8",
};

static WOODY: ResultData = ResultData {
    name: "우디",
    name_en: "Woody",
    headline: "깊고 안정적인 숲의 잔향",
    description: "시더우드와 샌달우드가 차분하게 남는 향이에요. 집중이 필요한 날 곁에 두기 좋아요.",
    keywords: &["시더우드", "샌달우드", "안정감"],
    emoji: "🌲",
    accent: "#7b5e3b",
};

static MUSK: ResultData = ResultData {
    name: "머스크",
    name_en: "Musk",
    headline: "가까이 다가가야 느껴지는 매력",
    description: "포근한 화이트 머스크와 앰버가 피부에 오래 머무는 향이에요. 저녁 모임에 잘 어울립니다.",
    keywords: &["화이트 머스크", "앰버", "관능"],
    emoji: "🌙",
    accent: "#8e7cc3",
};

static AQUATIC: ResultData = ResultData {
    name: "아쿠아",
    name_en: "Aquatic",
    headline: "바닷바람처럼 투명한 청량감",
    description: "시솔트와 워터 노트가 시원하게 퍼지는 향이에요. 더운 날에도 부담 없이 뿌리기 좋아요.",
    keywords: &["시솔트", "워터 노트", "청량"],
    emoji: "🌊",
    accent: "#5dade2",
};

impl QuizOutcome for ScentFamily {
    const ALL: &'static [Self] = &[
        Self::Citrus,
        Self::Floral,
        Self::Woody,
        Self::Musk,
        Self::Aquatic,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Citrus => "citrus",
            Self::Floral => "floral",
            Self::Woody => "woody",
            Self::Musk => "musk",
            Self::Aquatic => "aquatic",
        }
    }

    fn data(self) -> &'static ResultData {
        match self {
            Self::Citrus => &CITRUS,
            Self::Floral => &FLORAL,
            Self::Woody => &WOODY,
            Self::Musk => &MUSK,
            Self::Aquatic => &AQUATIC,
        }
    }
}

/// Scent profile quiz.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScentProfileQuiz;

impl Quiz for ScentProfileQuiz {
    type Outcome = ScentFamily;

    fn config(&self) -> &'static QuizConfig {
        &CONFIG
    }

    fn compute_result(&self, answers: &QuizAnswers) -> ScentFamily {
        let mut tally = Tally::new();
        if let Some(mood) = answers.choice("mood") {
            tally.add_option(MOOD_POINTS, mood);
        }
        if let Some(place) = answers.choice("place") {
            tally.add_option(PLACE_POINTS, place);
        }
        match answers.number("intensity") {
            Some(1 | 2) => tally.add(ScentFamily::Citrus, 1),
            Some(4 | 5) => tally.add(ScentFamily::Musk, 1),
            _ => {}
        }
        tally.winner()
    }
}
