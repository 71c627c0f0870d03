//! Personal color diagnosis: undertone and natural coloring pick a season.

use std::time::Duration;

use crate::domain::answers::QuizAnswers;
use crate::domain::quiz::{Quiz, QuizConfig, QuizOutcome, ResultData};
use crate::domain::slug::ExperienceSlug;
use crate::domain::step::{ChoiceOption, QuizStep, StepKind};

const UNDERTONES: &[ChoiceOption] = &[
    ChoiceOption::new("warm", "손목 혈관이 초록빛이에요", "🌞"),
    ChoiceOption::new("cool", "손목 혈관이 푸른빛이에요", "❄️"),
    ChoiceOption::new("neutral", "잘 모르겠어요", "⚖️"),
];

const COLORING: &[ChoiceOption] = &[
    ChoiceOption::new("black", "흑발", "⚫"),
    ChoiceOption::new("dark_brown", "짙은 갈색", "🟤"),
    ChoiceOption::new("light_brown", "밝은 갈색", "🟫"),
    ChoiceOption::new("hazel", "헤이즐 눈동자", "🌰"),
    ChoiceOption::new("gray_blue", "회청색 눈동자", "🩶"),
    ChoiceOption::new("green", "초록빛 눈동자", "🟢"),
];

const SEASONS: &[ChoiceOption] = &[
    ChoiceOption::new("spring", "봄", "🌸"),
    ChoiceOption::new("summer", "여름", "🌊"),
    ChoiceOption::new("autumn", "가을", "🍂"),
    ChoiceOption::new("winter", "겨울", "⛄"),
];

const LIGHT_TONES: &[&str] = &["light_brown", "hazel", "gray_blue", "green"];
const DARK_TONES: &[&str] = &["black", "dark_brown"];

static CONFIG: QuizConfig = QuizConfig {
    slug: ExperienceSlug::PersonalColor,
    title: "AI 퍼스널 컬러 진단",
    steps: &[
        QuizStep {
            id: "undertone",
            prompt: "손목 안쪽 혈관은 어떤 색인가요?",
            kind: StepKind::SingleChoice {
                options: UNDERTONES,
            },
        },
        QuizStep {
            id: "coloring",
            prompt: "내 머리카락과 눈동자 색을 골라주세요 (최대 3개)",
            kind: StepKind::MultiChoice {
                options: COLORING,
                min: 1,
                max: 3,
            },
        },
        QuizStep {
            id: "preference",
            prompt: "가장 끌리는 계절은?",
            kind: StepKind::SingleChoice { options: SEASONS },
        },
    ],
    analyze_duration: Duration::from_millis(2500),
    analyze_emoji: "🎨",
};

/// The four seasonal palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    /// Warm and light.
    Spring,
    /// Cool and light.
    Summer,
    /// Warm and deep.
    Autumn,
    /// Cool and deep.
    Winter,
}

static SPRING: ResultData = ResultData {
    name: "봄 웜 브라이트",
    name_en: "Spring Warm Bright",
    headline: "햇살처럼 생기 있는 컬러가 잘 어울려요",
    description: "코랄, 피치, 아이보리처럼 따뜻하고 맑은 색이 얼굴을 환하게 밝혀줍니다. 골드 액세서리를 추천해요.",
    keywords: &["코랄", "피치", "골드"],
    emoji: "🌸",
    accent: "#ff9f80",
};

static SUMMER: ResultData = ResultData {
    name: "여름 쿨 라이트",
    name_en: "Summer Cool Light",
    headline: "부드럽고 시원한 파스텔이 잘 어울려요",
    description: "라벤더, 스카이블루, 로즈핑크처럼 회색빛이 살짝 섞인 밝은 쿨톤이 피부를 맑아 보이게 합니다. 실버 액세서리를 추천해요.",
    keywords: &["라벤더", "스카이블루", "실버"],
    emoji: "🌊",
    accent: "#a7c7e7",
};

static AUTUMN: ResultData = ResultData {
    name: "가을 웜 딥",
    name_en: "Autumn Warm Deep",
    headline: "깊고 차분한 어스 컬러가 잘 어울려요",
    description: "카멜, 올리브, 버건디처럼 무게감 있는 따뜻한 색이 분위기를 완성합니다. 브론즈 톤을 추천해요.",
    keywords: &["카멜", "올리브", "브론즈"],
    emoji: "🍂",
    accent: "#b5651d",
};

static WINTER: ResultData = ResultData {
    name: "겨울 쿨 딥",
    name_en: "Winter Cool Deep",
    headline: "선명하고 대비가 강한 컬러가 잘 어울려요",
    description: "블랙, 퓨어화이트, 로열블루처럼 채도 높은 쿨톤이 또렷한 인상을 만들어 줍니다. 화이트골드를 추천해요.",
    keywords: &["블랙", "로열블루", "화이트골드"],
    emoji: "⛄",
    accent: "#1f3a93",
};

impl QuizOutcome for Season {
    const ALL: &'static [Self] = &[Self::Spring, Self::Summer, Self::Autumn, Self::Winter];

    fn key(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
        }
    }

    fn data(self) -> &'static ResultData {
        match self {
            Self::Spring => &SPRING,
            Self::Summer => &SUMMER,
            Self::Autumn => &AUTUMN,
            Self::Winter => &WINTER,
        }
    }
}

/// Whether the selected hair and eye colors read as light: at least one
/// selection, with light tones no fewer than dark ones.
fn is_light_coloring(selected: &[String]) -> bool {
    let count = |tones: &[&str]| {
        selected
            .iter()
            .filter(|id| tones.contains(&id.as_str()))
            .count()
    };
    !selected.is_empty() && count(LIGHT_TONES) >= count(DARK_TONES)
}

/// Personal color quiz.
#[derive(Debug, Default, Clone, Copy)]
pub struct PersonalColorQuiz;

impl Quiz for PersonalColorQuiz {
    type Outcome = Season;

    fn config(&self) -> &'static QuizConfig {
        &CONFIG
    }

    fn compute_result(&self, answers: &QuizAnswers) -> Season {
        let light = is_light_coloring(answers.choices("coloring"));
        match (answers.choice("undertone"), light) {
            (Some("cool"), true) => Season::Summer,
            (Some("cool"), false) => Season::Winter,
            (Some("warm"), true) => Season::Spring,
            (Some("warm"), false) => Season::Autumn,
            // Neutral undertones follow the season the visitor prefers.
            _ => answers
                .choice("preference")
                .and_then(Season::from_key)
                .unwrap_or(if light { Season::Summer } else { Season::Autumn }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answers::AnswerValue;

    fn answers(undertone: &str, coloring: &[&str], preference: &str) -> QuizAnswers {
        QuizAnswers::new()
            .with("undertone", AnswerValue::choice(undertone))
            .with("coloring", AnswerValue::choices(coloring.iter().copied()))
            .with("preference", AnswerValue::choice(preference))
    }

    #[test]
    fn test_cool_undertone_with_light_coloring_is_summer() {
        // Arrange
        let quiz = PersonalColorQuiz;

        // Act
        let season = quiz.compute_result(&answers("cool", &["hazel"], "winter"));

        // Assert
        assert_eq!(season, Season::Summer);
        assert_eq!(season.key(), "summer");
        assert_eq!(season.data().name, "여름 쿨 라이트");
    }

    #[test]
    fn test_dark_majority_reads_as_deep() {
        // Arrange
        let quiz = PersonalColorQuiz;

        // Act
        let cool =
            quiz.compute_result(&answers("cool", &["black", "dark_brown", "hazel"], "summer"));
        let warm = quiz.compute_result(&answers("warm", &["black"], "spring"));

        // Assert
        assert_eq!(cool, Season::Winter);
        assert_eq!(warm, Season::Autumn);
    }

    #[test]
    fn test_equal_light_and_dark_reads_as_light() {
        assert_eq!(
            PersonalColorQuiz.compute_result(&answers("warm", &["black", "green"], "winter")),
            Season::Spring
        );
    }

    #[test]
    fn test_neutral_undertone_follows_preference() {
        // Arrange
        let quiz = PersonalColorQuiz;

        // Act
        let season = quiz.compute_result(&answers("neutral", &["black"], "spring"));

        // Assert
        assert_eq!(season, Season::Spring);
    }
}
