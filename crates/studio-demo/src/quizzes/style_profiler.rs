//! Fashion style profiler.

use std::time::Duration;

use crate::domain::answers::QuizAnswers;
use crate::domain::quiz::{Quiz, QuizConfig, QuizOutcome, ResultData};
use crate::domain::scoring::{ScoreTable, Tally};
use crate::domain::slug::ExperienceSlug;
use crate::domain::step::{ChoiceOption, QuizStep, StepKind};

const WEEKENDS: &[ChoiceOption] = &[
    ChoiceOption::new("cafe", "조용한 카페", "☕"),
    ChoiceOption::new("market", "플리마켓 구경", "🛍️"),
    ChoiceOption::new("museum", "전시회 관람", "🖼️"),
    ChoiceOption::new("picnic", "한강 피크닉", "🧺"),
];

const PALETTES: &[ChoiceOption] = &[
    ChoiceOption::new("mono", "블랙 & 화이트", "🖤"),
    ChoiceOption::new("neon", "비비드 네온", "💚"),
    ChoiceOption::new("earth", "베이지 & 브라운", "🤎"),
    ChoiceOption::new("pastel", "파스텔 톤", "💜"),
];

const ITEMS: &[ChoiceOption] = &[
    ChoiceOption::new("blazer", "테일러드 블레이저", "🧥"),
    ChoiceOption::new("hoodie", "오버핏 후디", "👕"),
    ChoiceOption::new("sneakers", "화이트 스니커즈", "👟"),
    ChoiceOption::new("trench", "트렌치코트", "🧥"),
    ChoiceOption::new("dress", "플로럴 원피스", "👗"),
    ChoiceOption::new("knit", "니트 카디건", "🧶"),
];

const ICONS: &[ChoiceOption] = &[
    ChoiceOption::new("designer", "미니멀리스트 디자이너", "📐"),
    ChoiceOption::new("rapper", "힙합 아티스트", "🎤"),
    ChoiceOption::new("actor", "클래식 영화배우", "🎬"),
    ChoiceOption::new("artist", "감성 일러스트레이터", "🎨"),
];

static CONFIG: QuizConfig = QuizConfig {
    slug: ExperienceSlug::StyleProfiler,
    title: "AI 스타일 프로파일러",
    steps: &[
        QuizStep {
            id: "weekend",
            prompt: "완벽한 주말 오후는?",
            kind: StepKind::SingleChoice { options: WEEKENDS },
        },
        QuizStep {
            id: "palette",
            prompt: "옷장에 가장 많은 컬러는?",
            kind: StepKind::SingleChoice { options: PALETTES },
        },
        QuizStep {
            id: "items",
            prompt: "꼭 갖고 싶은 아이템을 골라주세요 (최대 2개)",
            kind: StepKind::MultiChoice {
                options: ITEMS,
                min: 1,
                max: 2,
            },
        },
        QuizStep {
            id: "icon",
            prompt: "닮고 싶은 스타일 아이콘은?",
            kind: StepKind::SingleChoice { options: ICONS },
        },
    ],
    analyze_duration: Duration::from_millis(3000),
    analyze_emoji: "👗",
};

/// Style archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleType {
    /// Clean lines and few colors.
    Minimal,
    /// Oversized and bold.
    Street,
    /// Tailored and timeless.
    Classic,
    /// Soft and decorative.
    Romantic,
}

const WEEKEND_POINTS: ScoreTable<StyleType> = &[
    ("cafe", &[(StyleType::Minimal, 1)]),
    ("market", &[(StyleType::Street, 1)]),
    ("museum", &[(StyleType::Classic, 1)]),
    ("picnic", &[(StyleType::Romantic, 1)]),
];

const PALETTE_POINTS: ScoreTable<StyleType> = &[
    ("mono", &[(StyleType::Minimal, 2)]),
    ("neon", &[(StyleType::Street, 2)]),
    ("earth", &[(StyleType::Classic, 2)]),
    ("pastel", &[(StyleType::Romantic, 2)]),
];

const ITEM_POINTS: ScoreTable<StyleType> = &[
    ("blazer", &[(StyleType::Classic, 1)]),
    ("hoodie", &[(StyleType::Street, 1)]),
    ("sneakers", &[(StyleType::Street, 1), (StyleType::Minimal, 1)]),
    ("trench", &[(StyleType::Classic, 1), (StyleType::Minimal, 1)]),
    ("dress", &[(StyleType::Romantic, 1)]),
    ("knit", &[(StyleType::Romantic, 1), (StyleType::Minimal, 1)]),
];

const ICON_POINTS: ScoreTable<StyleType> = &[
    ("designer", &[(StyleType::Minimal, 1)]),
    ("rapper", &[(StyleType::Street, 1)]),
    ("actor", &[(StyleType::Classic, 1)]),
    ("artist", &[(StyleType::Romantic, 1)]),
];

static MINIMAL: ResultData = ResultData {
    name: "미니멀 모던",
    name_en: "Minimal Modern",
    headline: "덜어낼수록 빛나는 스타일",
    description: "군더더기 없는 실루엣과 무채색 조합이 가장 나다운 모습을 보여줘요. 좋은 소재의 기본템에 투자해 보세요.",
    keywords: &["무채색", "실루엣", "기본템"],
    emoji: "🖤",
    accent: "#2c3e50",
};

static STREET: ResultData = ResultData {
    name: "스트릿 캐주얼",
    name_en: "Street Casual",
    headline: "자유로운 에너지가 넘치는 스타일",
    description: "오버핏과 과감한 컬러 포인트로 개성을 드러내요. 스니커즈 컬렉션이 당신의 시그니처입니다.",
    keywords: &["오버핏", "스니커즈", "컬러 포인트"],
    emoji: "🛹",
    accent: "#27ae60",
};

static CLASSIC: ResultData = ResultData {
    name: "클래식 엘레강스",
    name_en: "Classic Elegance",
    headline: "유행을 타지 않는 단정함",
    description: "테일러드 재킷과 트렌치코트처럼 오래 입을수록 멋이 나는 아이템이 잘 어울려요.",
    keywords: &["테일러링", "트렌치", "타임리스"],
    emoji: "🎩",
    accent: "#8b6f47",
};

static ROMANTIC: ResultData = ResultData {
    name: "로맨틱 페미닌",
    name_en: "Romantic Feminine",
    headline: "부드러운 디테일이 돋보이는 스타일",
    description: "플로럴 패턴과 러플, 파스텔 톤으로 사랑스러운 분위기를 연출해 보세요.",
    keywords: &["플로럴", "러플", "파스텔"],
    emoji: "🎀",
    accent: "#e8a0bf",
};

impl QuizOutcome for StyleType {
    const ALL: &'static [Self] = &[Self::Minimal, Self::Street, Self::Classic, Self::Romantic];

    fn key(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Street => "street",
            Self::Classic => "classic",
            Self::Romantic => "romantic",
        }
    }

    fn data(self) -> &'static ResultData {
        match self {
            Self::Minimal => &MINIMAL,
            Self::Street => &STREET,
            Self::Classic => &CLASSIC,
            Self::Romantic => &ROMANTIC,
        }
    }
}

/// Style profiler quiz.
#[derive(Debug, Default, Clone, Copy)]
pub struct StyleProfilerQuiz;

impl Quiz for StyleProfilerQuiz {
    type Outcome = StyleType;

    fn config(&self) -> &'static QuizConfig {
        &CONFIG
    }

    fn compute_result(&self, answers: &QuizAnswers) -> StyleType {
        let mut tally = Tally::new();
        for (step, table) in [
            ("weekend", WEEKEND_POINTS),
            ("palette", PALETTE_POINTS),
            ("icon", ICON_POINTS),
        ] {
            if let Some(id) = answers.choice(step) {
                tally.add_option(table, id);
            }
        }
        for item in answers.choices("items") {
            tally.add_option(ITEM_POINTS, item);
        }
        tally.winner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answers::AnswerValue;

    #[test]
    fn test_consistent_street_answers_are_street() {
        // Arrange
        let answers = QuizAnswers::new()
            .with("weekend", AnswerValue::choice("market"))
            .with("palette", AnswerValue::choice("neon"))
            .with("items", AnswerValue::choices(["hoodie", "sneakers"]))
            .with("icon", AnswerValue::choice("rapper"));

        // Act
        let style = StyleProfilerQuiz.compute_result(&answers);

        // Assert
        assert_eq!(style, StyleType::Street);
    }

    #[test]
    fn test_items_count_toward_several_styles() {
        // Arrange
        let answers = QuizAnswers::new()
            .with("weekend", AnswerValue::choice("museum"))
            .with("palette", AnswerValue::choice("pastel"))
            .with("items", AnswerValue::choices(["trench", "knit"]))
            .with("icon", AnswerValue::choice("designer"));

        // Act
        let style = StyleProfilerQuiz.compute_result(&answers);

        // Assert
        assert_eq!(style, StyleType::Minimal);
    }
}
