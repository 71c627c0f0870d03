//! Travel style matcher.

use std::time::Duration;

use crate::domain::answers::QuizAnswers;
use crate::domain::quiz::{Quiz, QuizConfig, QuizOutcome, ResultData};
use crate::domain::scoring::{ScoreTable, Tally};
use crate::domain::slug::ExperienceSlug;
use crate::domain::step::{ChoiceOption, QuizStep, StepKind};

const PACES: &[ChoiceOption] = &[
    ChoiceOption::new("slow", "한 곳에 오래 머물기", "🐢"),
    ChoiceOption::new("packed", "빽빽한 일정표", "🗓️"),
    ChoiceOption::new("spontaneous", "발길 닿는 대로", "🎲"),
];

const BUDGETS: &[ChoiceOption] = &[
    ChoiceOption::new("backpack", "알뜰 배낭여행", "🎒"),
    ChoiceOption::new("balanced", "쓸 땐 쓰고 아낄 땐 아끼고", "⚖️"),
    ChoiceOption::new("luxury", "호캉스는 필수", "🏨"),
];

const COMPANIONS: &[ChoiceOption] = &[
    ChoiceOption::new("solo", "나 혼자", "🧍"),
    ChoiceOption::new("friends", "친구들과", "👯"),
    ChoiceOption::new("partner", "연인과", "💑"),
    ChoiceOption::new("family", "가족과", "👨‍👩‍👧"),
];

const MEMORIES: &[ChoiceOption] = &[
    ChoiceOption::new("photo", "인생 사진", "📸"),
    ChoiceOption::new("food", "현지 음식", "🍝"),
    ChoiceOption::new("people", "함께한 사람들", "🫶"),
    ChoiceOption::new("history", "역사와 이야기", "🏛️"),
];

static CONFIG: QuizConfig = QuizConfig {
    slug: ExperienceSlug::TravelStyle,
    title: "AI 여행 스타일 매칭",
    steps: &[
        QuizStep {
            id: "pace",
            prompt: "여행 일정은 어떻게 짜나요?",
            kind: StepKind::SingleChoice { options: PACES },
        },
        QuizStep {
            id: "budget",
            prompt: "여행 예산 스타일은?",
            kind: StepKind::SingleChoice { options: BUDGETS },
        },
        QuizStep {
            id: "companion",
            prompt: "누구와 떠나고 싶나요?",
            kind: StepKind::SingleChoice {
                options: COMPANIONS,
            },
        },
        QuizStep {
            id: "memory",
            prompt: "여행에서 가장 오래 남는 것은?",
            kind: StepKind::SingleChoice { options: MEMORIES },
        },
    ],
    analyze_duration: Duration::from_millis(2500),
    analyze_emoji: "🧭",
};

/// Traveller types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelType {
    /// Always on the move.
    Explorer,
    /// Travels to rest.
    Healer,
    /// Plans around meals.
    Foodie,
    /// Museums and old streets.
    Culture,
}

const PACE_POINTS: ScoreTable<TravelType> = &[
    ("slow", &[(TravelType::Healer, 2)]),
    ("packed", &[(TravelType::Culture, 1), (TravelType::Explorer, 1)]),
    ("spontaneous", &[(TravelType::Explorer, 2)]),
];

const BUDGET_POINTS: ScoreTable<TravelType> = &[
    ("backpack", &[(TravelType::Explorer, 1)]),
    ("balanced", &[(TravelType::Culture, 1)]),
    ("luxury", &[(TravelType::Healer, 1), (TravelType::Foodie, 1)]),
];

const COMPANION_POINTS: ScoreTable<TravelType> = &[
    ("solo", &[(TravelType::Explorer, 1)]),
    ("friends", &[(TravelType::Foodie, 1)]),
    ("partner", &[(TravelType::Healer, 1)]),
    ("family", &[(TravelType::Culture, 1)]),
];

const MEMORY_POINTS: ScoreTable<TravelType> = &[
    ("photo", &[(TravelType::Explorer, 1)]),
    ("food", &[(TravelType::Foodie, 3)]),
    ("people", &[(TravelType::Healer, 1)]),
    ("history", &[(TravelType::Culture, 3)]),
];

static EXPLORER: ResultData = ResultData {
    name: "탐험가형",
    name_en: "The Explorer",
    headline: "지도 밖의 길이 더 궁금한 여행자",
    description: "정해진 코스보다 골목과 현지인의 추천을 따라가는 여행이 잘 맞아요. 트레킹이나 로드트립을 추천합니다.",
    keywords: &["로드트립", "트레킹", "즉흥"],
    emoji: "🧗",
    accent: "#d35400",
};

static HEALER: ResultData = ResultData {
    name: "힐링형",
    name_en: "The Healer",
    headline: "쉬러 떠나는 여행이 진짜 여행",
    description: "좋은 숙소에서 여유롭게 보내는 시간이 최고의 기념품이에요. 온천 마을이나 휴양지를 추천합니다.",
    keywords: &["휴양", "스파", "여유"],
    emoji: "🏝️",
    accent: "#48c9b0",
};

static FOODIE: ResultData = ResultData {
    name: "미식가형",
    name_en: "The Foodie",
    headline: "여행 일정은 식사 시간 기준",
    description: "현지 시장과 노포를 찾아다니는 즐거움을 아는 여행자예요. 미식 도시 투어를 추천합니다.",
    keywords: &["노포", "시장", "로컬푸드"],
    emoji: "🍜",
    accent: "#e74c3c",
};

static CULTURE: ResultData = ResultData {
    name: "문화탐방형",
    name_en: "The Culture Seeker",
    headline: "이야기가 있는 장소에 끌리는 여행자",
    description: "박물관과 유적지, 오래된 거리에서 영감을 얻어요. 역사 도시 워킹투어를 추천합니다.",
    keywords: &["박물관", "유적", "워킹투어"],
    emoji: "🏛️",
    accent: "#6c5ce7",
};

impl QuizOutcome for TravelType {
    const ALL: &'static [Self] = &[Self::Explorer, Self::Healer, Self::Foodie, Self::Culture];

    fn key(self) -> &'static str {
        match self {
            Self::Explorer => "explorer",
            Self::Healer => "healer",
            Self::Foodie => "foodie",
            Self::Culture => "culture",
        }
    }

    fn data(self) -> &'static ResultData {
        match self {
            Self::Explorer => &EXPLORER,
            Self::Healer => &HEALER,
            Self::Foodie => &FOODIE,
            Self::Culture => &CULTURE,
        }
    }
}

/// Travel style quiz.
#[derive(Debug, Default, Clone, Copy)]
pub struct TravelStyleQuiz;

impl Quiz for TravelStyleQuiz {
    type Outcome = TravelType;

    fn config(&self) -> &'static QuizConfig {
        &CONFIG
    }

    fn compute_result(&self, answers: &QuizAnswers) -> TravelType {
        let mut tally = Tally::new();
        for (step, table) in [
            ("pace", PACE_POINTS),
            ("budget", BUDGET_POINTS),
            ("companion", COMPANION_POINTS),
            ("memory", MEMORY_POINTS),
        ] {
            if let Some(id) = answers.choice(step) {
                tally.add_option(table, id);
            }
        }
        tally.winner()
    }
}
