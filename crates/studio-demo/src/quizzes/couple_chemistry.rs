//! Couple chemistry: both partners answer the same four questions.

use std::time::Duration;

use crate::domain::answers::QuizAnswers;
use crate::domain::quiz::{Quiz, QuizConfig, QuizOutcome, ResultData};
use crate::domain::slug::ExperienceSlug;
use crate::domain::step::{ChoiceOption, QuizStep, StepKind};

const DATES: &[ChoiceOption] = &[
    ChoiceOption::new("home", "집에서 영화", "🍿"),
    ChoiceOption::new("outdoor", "캠핑 & 등산", "⛺"),
    ChoiceOption::new("culture", "공연 & 전시", "🎭"),
    ChoiceOption::new("food", "맛집 탐방", "🍜"),
];

const CONFLICTS: &[ChoiceOption] = &[
    ChoiceOption::new("talk", "바로 대화로 푼다", "💬"),
    ChoiceOption::new("space", "혼자 생각할 시간을 갖는다", "🚪"),
    ChoiceOption::new("humor", "농담으로 분위기를 바꾼다", "😂"),
    ChoiceOption::new("hug", "일단 안아준다", "🤗"),
];

const MONEY: &[ChoiceOption] = &[
    ChoiceOption::new("save", "차곡차곡 저축", "🐷"),
    ChoiceOption::new("spend", "경험에 아낌없이", "💸"),
    ChoiceOption::new("split", "정확히 반반", "➗"),
    ChoiceOption::new("plan", "함께 가계부 작성", "📒"),
];

const FUTURES: &[ChoiceOption] = &[
    ChoiceOption::new("travel", "세계 일주", "✈️"),
    ChoiceOption::new("house", "우리만의 집", "🏡"),
    ChoiceOption::new("career", "각자의 꿈", "🚀"),
    ChoiceOption::new("family", "따뜻한 가족", "👨‍👩‍👧"),
];

/// Options that lean toward novelty, one per question.
const ADVENTUROUS: &[&str] = &["outdoor", "humor", "spend", "travel"];

const QUESTIONS: &[&str] = &["date", "conflict", "money", "future"];

static CONFIG: QuizConfig = QuizConfig {
    slug: ExperienceSlug::CoupleChemistry,
    title: "AI 커플 케미 테스트",
    steps: &[
        QuizStep {
            id: "date",
            prompt: "둘이 가장 하고 싶은 데이트는?",
            kind: StepKind::PairedChoice { options: DATES },
        },
        QuizStep {
            id: "conflict",
            prompt: "다퉜을 때 나의 방식은?",
            kind: StepKind::PairedChoice { options: CONFLICTS },
        },
        QuizStep {
            id: "money",
            prompt: "데이트 비용과 돈 관리는?",
            kind: StepKind::PairedChoice { options: MONEY },
        },
        QuizStep {
            id: "future",
            prompt: "5년 뒤 우리의 모습은?",
            kind: StepKind::PairedChoice { options: FUTURES },
        },
    ],
    analyze_duration: Duration::from_millis(3000),
    analyze_emoji: "💞",
};

/// Chemistry types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chemistry {
    /// Nearly identical answers.
    Soulmate,
    /// Different in every way.
    Complementary,
    /// Some overlap to build on.
    Growing,
    /// Both chase novelty.
    Adventure,
}

static SOULMATE: ResultData = ResultData {
    name: "소울메이트",
    name_en: "Soulmates",
    headline: "말하지 않아도 통하는 사이",
    description: "가치관과 취향이 놀라울 만큼 닮았어요. 서로에게 가장 편안한 쉼표가 되어주는 커플입니다.",
    keywords: &["찰떡궁합", "안정감", "닮은꼴"],
    emoji: "💞",
    accent: "#e74c3c",
};

static COMPLEMENTARY: ResultData = ResultData {
    name: "반전 매력 커플",
    name_en: "Perfect Opposites",
    headline: "달라서 더 끌리는 사이",
    description: "서로의 빈자리를 채워주는 조합이에요. 다름을 인정할수록 관계가 단단해집니다.",
    keywords: &["상호보완", "반전", "균형"],
    emoji: "🧩",
    accent: "#9b59b6",
};

static GROWING: ResultData = ResultData {
    name: "함께 자라는 커플",
    name_en: "Growing Together",
    headline: "같은 방향을 보며 천천히 맞춰가는 사이",
    description: "공통점을 발판 삼아 차이를 배워가는 중이에요. 대화가 많을수록 케미가 올라갑니다.",
    keywords: &["성장", "대화", "배려"],
    emoji: "🌱",
    accent: "#2ecc71",
};

static ADVENTURE: ResultData = ResultData {
    name: "모험가 커플",
    name_en: "Adventure Buddies",
    headline: "매일이 새로운 사이",
    description: "새로운 경험 앞에서 눈이 반짝이는 두 사람이에요. 함께 떠나는 여행이 최고의 데이트입니다.",
    keywords: &["여행", "도전", "설렘"],
    emoji: "🗺️",
    accent: "#f39c12",
};

impl QuizOutcome for Chemistry {
    const ALL: &'static [Self] = &[
        Self::Soulmate,
        Self::Complementary,
        Self::Growing,
        Self::Adventure,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::Soulmate => "soulmate",
            Self::Complementary => "complementary",
            Self::Growing => "growing",
            Self::Adventure => "adventure",
        }
    }

    fn data(self) -> &'static ResultData {
        match self {
            Self::Soulmate => &SOULMATE,
            Self::Complementary => &COMPLEMENTARY,
            Self::Growing => &GROWING,
            Self::Adventure => &ADVENTURE,
        }
    }
}

/// Couple chemistry quiz. Each answer is a pair: partner A, partner B.
#[derive(Debug, Default, Clone, Copy)]
pub struct CoupleChemistryQuiz;

impl Quiz for CoupleChemistryQuiz {
    type Outcome = Chemistry;

    fn config(&self) -> &'static QuizConfig {
        &CONFIG
    }

    fn compute_result(&self, answers: &QuizAnswers) -> Chemistry {
        let pairs: Vec<(&str, &str)> = QUESTIONS
            .iter()
            .filter_map(|id| answers.pair(id))
            .collect();
        let matches = pairs.iter().filter(|(a, b)| a == b).count();
        let adventurous = pairs
            .iter()
            .flat_map(|&(a, b)| [a, b])
            .filter(|id| ADVENTUROUS.contains(id))
            .count();

        if matches >= 3 {
            Chemistry::Soulmate
        } else if adventurous >= 4 {
            Chemistry::Adventure
        } else if matches >= 1 {
            Chemistry::Growing
        } else {
            Chemistry::Complementary
        }
    }
}
