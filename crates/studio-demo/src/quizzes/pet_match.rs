//! Companion pet matcher.

use std::time::Duration;

use crate::domain::answers::QuizAnswers;
use crate::domain::quiz::{Quiz, QuizConfig, QuizOutcome, ResultData};
use crate::domain::slug::ExperienceSlug;
use crate::domain::step::{ChoiceOption, QuizStep, StepKind};

const HOMES: &[ChoiceOption] = &[
    ChoiceOption::new("apartment", "아파트", "🏢"),
    ChoiceOption::new("house_yard", "마당 있는 주택", "🏡"),
    ChoiceOption::new("studio", "원룸", "🛏️"),
];

const TIME_AT_HOME: &[ChoiceOption] = &[
    ChoiceOption::new("mostly_out", "거의 밖에 있어요", "🏃"),
    ChoiceOption::new("half", "반반이에요", "🌓"),
    ChoiceOption::new("mostly_home", "주로 집에 있어요", "🏠"),
];

const ALLERGIES: &[ChoiceOption] = &[
    ChoiceOption::new("none", "없어요", "🙆"),
    ChoiceOption::new("mild", "조금 있어요", "🤧"),
    ChoiceOption::new("severe", "심해요", "😷"),
];

static CONFIG: QuizConfig = QuizConfig {
    slug: ExperienceSlug::PetMatch,
    title: "AI 반려동물 매칭",
    steps: &[
        QuizStep {
            id: "home",
            prompt: "어떤 집에 살고 있나요?",
            kind: StepKind::SingleChoice { options: HOMES },
        },
        QuizStep {
            id: "activity",
            prompt: "평소 활동량은 어느 정도인가요?",
            kind: StepKind::Scale { min: 1, max: 5 },
        },
        QuizStep {
            id: "time_home",
            prompt: "하루 중 집에 있는 시간은?",
            kind: StepKind::SingleChoice {
                options: TIME_AT_HOME,
            },
        },
        QuizStep {
            id: "allergy",
            prompt: "동물 털 알레르기가 있나요?",
            kind: StepKind::SingleChoice { options: ALLERGIES },
        },
    ],
    analyze_duration: Duration::from_millis(2500),
    analyze_emoji: "🐾",
};

/// Pet matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PetType {
    /// A dog that needs long walks.
    ActiveDog,
    /// A relaxed indoor dog.
    CalmDog,
    /// An independent cat.
    Cat,
    /// A hamster, fish or similar.
    SmallPet,
}

static ACTIVE_DOG: ResultData = ResultData {
    name: "활발한 대형견",
    name_en: "Active Dog",
    headline: "함께 뛰어놀 파트너가 필요해요",
    description: "리트리버나 보더콜리처럼 에너지 넘치는 친구가 잘 맞아요. 매일 산책이 둘 모두의 행복이 됩니다.",
    keywords: &["리트리버", "산책", "에너지"],
    emoji: "🐕",
    accent: "#e17055",
};

static CALM_DOG: ResultData = ResultData {
    name: "느긋한 소형견",
    name_en: "Calm Companion Dog",
    headline: "집에서 함께 뒹굴 친구",
    description: "말티즈나 시츄처럼 온순한 소형견이 잘 맞아요. 짧은 산책과 긴 낮잠을 함께 즐겨보세요.",
    keywords: &["말티즈", "실내견", "포근함"],
    emoji: "🐶",
    accent: "#fdcb6e",
};

static CAT: ResultData = ResultData {
    name: "독립적인 고양이",
    name_en: "Independent Cat",
    headline: "적당한 거리감을 아는 룸메이트",
    description: "혼자 있는 시간도 잘 보내는 고양이가 잘 맞아요. 캣타워 하나면 작은 집도 충분합니다.",
    keywords: &["고양이", "독립적", "캣타워"],
    emoji: "🐈",
    accent: "#a29bfe",
};

static SMALL_PET: ResultData = ResultData {
    name: "작은 친구들",
    name_en: "Small Pet",
    headline: "부담 없이 시작하는 반려생활",
    description: "햄스터나 열대어처럼 작은 친구가 잘 맞아요. 알레르기 걱정 없이 교감할 수 있습니다.",
    keywords: &["햄스터", "열대어", "입문"],
    emoji: "🐹",
    accent: "#55efc4",
};

impl QuizOutcome for PetType {
    const ALL: &'static [Self] = &[Self::ActiveDog, Self::CalmDog, Self::Cat, Self::SmallPet];

    fn key(self) -> &'static str {
        match self {
            Self::ActiveDog => "active_dog",
            Self::CalmDog => "calm_dog",
            Self::Cat => "cat",
            Self::SmallPet => "small_pet",
        }
    }

    fn data(self) -> &'static ResultData {
        match self {
            Self::ActiveDog => &ACTIVE_DOG,
            Self::CalmDog => &CALM_DOG,
            Self::Cat => &CAT,
            Self::SmallPet => &SMALL_PET,
        }
    }
}

/// Pet match quiz. Rules are checked in order; the first that fits wins.
#[derive(Debug, Default, Clone, Copy)]
pub struct PetMatchQuiz;

impl Quiz for PetMatchQuiz {
    type Outcome = PetType;

    fn config(&self) -> &'static QuizConfig {
        &CONFIG
    }

    fn compute_result(&self, answers: &QuizAnswers) -> PetType {
        let home = answers.choice("home");
        let activity = answers.number("activity").unwrap_or(3);

        if answers.choice("allergy") == Some("severe") {
            PetType::SmallPet
        } else if answers.choice("time_home") == Some("mostly_out") {
            PetType::Cat
        } else if activity >= 4 && home != Some("studio") {
            PetType::ActiveDog
        } else if home == Some("studio") {
            if activity <= 2 {
                PetType::Cat
            } else {
                PetType::SmallPet
            }
        } else {
            PetType::CalmDog
        }
    }
}
