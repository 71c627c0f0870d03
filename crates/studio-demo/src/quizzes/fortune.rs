//! Fortune reading. The answers are hashed so that the same visitor always
//! draws the same fortune while neighbouring answers land far apart.

use std::time::Duration;

use sha2::{Digest, Sha256};

use crate::domain::answers::QuizAnswers;
use crate::domain::quiz::{Quiz, QuizConfig, QuizOutcome, ResultData};
use crate::domain::slug::ExperienceSlug;
use crate::domain::step::{ChoiceOption, QuizStep, StepKind};

const ELEMENTS: &[ChoiceOption] = &[
    ChoiceOption::new("wood", "나무", "🌳"),
    ChoiceOption::new("fire", "불", "🔥"),
    ChoiceOption::new("earth", "흙", "⛰️"),
    ChoiceOption::new("metal", "쇠", "⚙️"),
    ChoiceOption::new("water", "물", "💧"),
];

const WISHES: &[ChoiceOption] = &[
    ChoiceOption::new("love", "사랑", "💘"),
    ChoiceOption::new("wealth", "재물", "💰"),
    ChoiceOption::new("health", "건강", "🍀"),
    ChoiceOption::new("career", "커리어", "📈"),
];

static CONFIG: QuizConfig = QuizConfig {
    slug: ExperienceSlug::Fortune,
    title: "AI 오늘의 운세",
    steps: &[
        QuizStep {
            id: "birth_month",
            prompt: "태어난 달을 알려주세요",
            kind: StepKind::Scale { min: 1, max: 12 },
        },
        QuizStep {
            id: "element",
            prompt: "가장 끌리는 기운은?",
            kind: StepKind::SingleChoice { options: ELEMENTS },
        },
        QuizStep {
            id: "wish",
            prompt: "요즘 가장 바라는 것은?",
            kind: StepKind::SingleChoice { options: WISHES },
        },
    ],
    analyze_duration: Duration::from_millis(3000),
    analyze_emoji: "🔮",
};

/// Fortune readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reading {
    /// Everything lines up.
    GreatLuck,
    /// Momentum is building.
    Rising,
    /// Calm and steady.
    Steady,
    /// A change is coming.
    TurningPoint,
    /// Time to rest.
    Recharge,
}

static GREAT_LUCK: ResultData = ResultData {
    name: "대길",
    name_en: "Great Fortune",
    headline: "오늘은 무엇을 해도 술술 풀리는 날",
    description: "미뤄둔 일을 시작하기에 더없이 좋은 흐름이에요. 주변에 좋은 소식을 먼저 전해보세요.",
    keywords: &["행운", "시작", "기회"],
    emoji: "🌟",
    accent: "#f1c40f",
};

static RISING: ResultData = ResultData {
    name: "상승운",
    name_en: "Rising Tide",
    headline: "작은 노력이 큰 결과로 돌아와요",
    description: "꾸준히 쌓아온 것들이 빛을 보기 시작합니다. 자신감을 가지고 한 걸음 더 나아가세요.",
    keywords: &["성장", "자신감", "결실"],
    emoji: "📈",
    accent: "#e67e22",
};

static STEADY: ResultData = ResultData {
    name: "평온운",
    name_en: "Steady Waters",
    headline: "잔잔하지만 든든한 하루",
    description: "큰 변화는 없지만 안정적인 흐름이에요. 소중한 사람과 따뜻한 시간을 보내보세요.",
    keywords: &["안정", "평화", "여유"],
    emoji: "🍵",
    accent: "#16a085",
};

static TURNING_POINT: ResultData = ResultData {
    name: "전환운",
    name_en: "Turning Point",
    headline: "새로운 문이 열리는 타이밍",
    description: "익숙한 방식에서 벗어날 때 뜻밖의 기회가 찾아와요. 낯선 제안에 귀 기울여 보세요.",
    keywords: &["변화", "결단", "새로움"],
    emoji: "🚪",
    accent: "#8e44ad",
};

static RECHARGE: ResultData = ResultData {
    name: "충전운",
    name_en: "Recharge",
    headline: "잠시 쉬어가도 괜찮은 날",
    description: "무리하기보다 에너지를 채우는 데 집중하세요. 충분한 휴식이 다음 행운을 불러옵니다.",
    keywords: &["휴식", "회복", "재정비"],
    emoji: "🔋",
    accent: "#3498db",
};

impl QuizOutcome for Reading {
    const ALL: &'static [Self] = &[
        Self::GreatLuck,
        Self::Rising,
        Self::Steady,
        Self::TurningPoint,
        Self::Recharge,
    ];

    fn key(self) -> &'static str {
        match self {
            Self::GreatLuck => "great_luck",
            Self::Rising => "rising",
            Self::Steady => "steady",
            Self::TurningPoint => "turning_point",
            Self::Recharge => "recharge",
        }
    }

    fn data(self) -> &'static ResultData {
        match self {
            Self::GreatLuck => &GREAT_LUCK,
            Self::Rising => &RISING,
            Self::Steady => &STEADY,
            Self::TurningPoint => &TURNING_POINT,
            Self::Recharge => &RECHARGE,
        }
    }
}

/// Fortune quiz.
#[derive(Debug, Default, Clone, Copy)]
pub struct FortuneQuiz;

impl Quiz for FortuneQuiz {
    type Outcome = Reading;

    fn config(&self) -> &'static QuizConfig {
        &CONFIG
    }

    fn compute_result(&self, answers: &QuizAnswers) -> Reading {
        let seed = format!(
            "{}|{}|{}",
            answers.number("birth_month").unwrap_or_default(),
            answers.choice("element").unwrap_or_default(),
            answers.choice("wish").unwrap_or_default(),
        );
        let digest = Sha256::digest(seed.as_bytes());
        Reading::ALL[usize::from(digest[0]) % Reading::ALL.len()]
    }
}
