//! Cafe menu recommender.

use std::time::Duration;

use crate::domain::answers::QuizAnswers;
use crate::domain::quiz::{Quiz, QuizConfig, QuizOutcome, ResultData};
use crate::domain::scoring::{ScoreTable, Tally};
use crate::domain::slug::ExperienceSlug;
use crate::domain::step::{ChoiceOption, QuizStep, StepKind};

const TASTES: &[ChoiceOption] = &[
    ChoiceOption::new("bitter", "쌉싸름한", "🫘"),
    ChoiceOption::new("creamy", "부드럽고 고소한", "🥛"),
    ChoiceOption::new("fruity", "상큼한 과일향", "🍓"),
    ChoiceOption::new("herbal", "은은한 허브향", "🌿"),
];

const TEMPERATURES: &[ChoiceOption] = &[
    ChoiceOption::new("hot", "따뜻하게", "♨️"),
    ChoiceOption::new("iced", "차갑게", "🧊"),
];

const TIMES: &[ChoiceOption] = &[
    ChoiceOption::new("morning", "아침", "🌅"),
    ChoiceOption::new("afternoon", "오후", "☀️"),
    ChoiceOption::new("night", "밤", "🌙"),
];

static CONFIG: QuizConfig = QuizConfig {
    slug: ExperienceSlug::CafeMenu,
    title: "AI 카페 메뉴 추천",
    steps: &[
        QuizStep {
            id: "taste",
            prompt: "오늘 당기는 맛은?",
            kind: StepKind::SingleChoice { options: TASTES },
        },
        QuizStep {
            id: "temperature",
            prompt: "온도는 어떻게 할까요?",
            kind: StepKind::SingleChoice {
                options: TEMPERATURES,
            },
        },
        QuizStep {
            id: "sweetness",
            prompt: "단맛은 어느 정도가 좋나요?",
            kind: StepKind::Scale { min: 0, max: 4 },
        },
        QuizStep {
            id: "time_of_day",
            prompt: "언제 마실 건가요?",
            kind: StepKind::SingleChoice { options: TIMES },
        },
    ],
    analyze_duration: Duration::from_millis(2000),
    analyze_emoji: "☕",
};

/// Drinks on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Drink {
    /// Black coffee.
    Americano,
    /// Coffee with milk.
    Latte,
    /// Herbal or leaf tea.
    Tea,
    /// Sparkling fruit ade.
    Ade,
}

const TASTE_POINTS: ScoreTable<Drink> = &[
    ("bitter", &[(Drink::Americano, 3)]),
    ("creamy", &[(Drink::Latte, 3)]),
    ("fruity", &[(Drink::Ade, 3)]),
    ("herbal", &[(Drink::Tea, 3)]),
];

const TEMPERATURE_POINTS: ScoreTable<Drink> = &[
    ("hot", &[(Drink::Tea, 1), (Drink::Latte, 1)]),
    ("iced", &[(Drink::Ade, 1), (Drink::Americano, 1)]),
];

const TIME_POINTS: ScoreTable<Drink> = &[
    ("morning", &[(Drink::Americano, 1)]),
    ("afternoon", &[(Drink::Latte, 1), (Drink::Ade, 1)]),
    ("night", &[(Drink::Tea, 2)]),
];

static AMERICANO: ResultData = ResultData {
    name: "아메리카노",
    name_en: "Americano",
    headline: "군더더기 없이 깔끔한 하루의 시작",
    description: "산미가 적은 블렌드로 내린 진한 아메리카노를 추천해요. 집중이 필요한 순간의 든든한 파트너입니다.",
    keywords: &["깔끔함", "집중", "클래식"],
    emoji: "☕",
    accent: "#4e342e",
};

static LATTE: ResultData = ResultData {
    name: "카페라떼",
    name_en: "Caffe Latte",
    headline: "부드러운 위로가 필요한 당신에게",
    description: "고소한 우유 거품이 올라간 라떼를 추천해요. 바닐라 시럽을 살짝 더해도 좋아요.",
    keywords: &["고소함", "부드러움", "위로"],
    emoji: "🥛",
    accent: "#d7b899",
};

static TEA: ResultData = ResultData {
    name: "허브티",
    name_en: "Herbal Tea",
    headline: "마음을 가라앉히는 한 잔",
    description: "캐모마일이나 페퍼민트처럼 카페인 부담 없는 허브티를 추천해요. 하루를 차분하게 마무리해 보세요.",
    keywords: &["캐모마일", "휴식", "디카페인"],
    emoji: "🍵",
    accent: "#81b29a",
};

static ADE: ResultData = ResultData {
    name: "과일 에이드",
    name_en: "Fruit Ade",
    headline: "톡 쏘는 청량감으로 기분 전환",
    description: "자몽이나 청포도 에이드를 추천해요. 탄산이 주는 상쾌함으로 오후의 나른함을 날려보세요.",
    keywords: &["청량감", "상큼함", "기분전환"],
    emoji: "🍹",
    accent: "#ff7675",
};

impl QuizOutcome for Drink {
    const ALL: &'static [Self] = &[Self::Americano, Self::Latte, Self::Tea, Self::Ade];

    fn key(self) -> &'static str {
        match self {
            Self::Americano => "americano",
            Self::Latte => "latte",
            Self::Tea => "tea",
            Self::Ade => "ade",
        }
    }

    fn data(self) -> &'static ResultData {
        match self {
            Self::Americano => &AMERICANO,
            Self::Latte => &LATTE,
            Self::Tea => &TEA,
            Self::Ade => &ADE,
        }
    }
}

/// Cafe menu quiz.
#[derive(Debug, Default, Clone, Copy)]
pub struct CafeMenuQuiz;

impl Quiz for CafeMenuQuiz {
    type Outcome = Drink;

    fn config(&self) -> &'static QuizConfig {
        &CONFIG
    }

    fn compute_result(&self, answers: &QuizAnswers) -> Drink {
        let mut tally = Tally::new();
        for (step, table) in [
            ("taste", TASTE_POINTS),
            ("temperature", TEMPERATURE_POINTS),
            ("time_of_day", TIME_POINTS),
        ] {
            if let Some(id) = answers.choice(step) {
                tally.add_option(table, id);
            }
        }
        match answers.number("sweetness") {
            Some(0 | 1) => {
                tally.add(Drink::Americano, 1);
                tally.add(Drink::Tea, 1);
            }
            Some(3 | 4) => {
                tally.add(Drink::Latte, 1);
                tally.add(Drink::Ade, 1);
            }
            _ => {}
        }
        tally.winner()
    }
}
