//! Work persona: two axes, each decided by two questions.
//!
//! Every option carries a signed weight on its axis. A non-negative sum on
//! the drive axis means "lead", on the thinking axis it means "ideas".

use std::time::Duration;

use crate::domain::answers::QuizAnswers;
use crate::domain::quiz::{Quiz, QuizConfig, QuizOutcome, ResultData};
use crate::domain::slug::ExperienceSlug;
use crate::domain::step::{ChoiceOption, QuizStep, StepKind};

const MEETINGS: &[ChoiceOption] = &[
    ChoiceOption::new("speak_first", "먼저 의견을 낸다", "🙋"),
    ChoiceOption::new("summarize", "논의를 정리한다", "📝"),
    ChoiceOption::new("ask_questions", "질문으로 돕는다", "❓"),
    ChoiceOption::new("take_notes", "조용히 기록한다", "🗒️"),
];

const DEADLINES: &[ChoiceOption] = &[
    ChoiceOption::new("take_charge", "내가 총대를 멘다", "🚩"),
    ChoiceOption::new("split_tasks", "업무를 나눠 배분한다", "🧮"),
    ChoiceOption::new("check_in", "동료 상황을 챙긴다", "🤝"),
    ChoiceOption::new("cover_gaps", "빈 곳을 메운다", "🧩"),
];

const PROBLEMS: &[ChoiceOption] = &[
    ChoiceOption::new("brainstorm", "아이디어부터 쏟아낸다", "💡"),
    ChoiceOption::new("sketch", "그림으로 그려본다", "✏️"),
    ChoiceOption::new("research", "사례를 조사한다", "🔍"),
    ChoiceOption::new("measure", "데이터로 검증한다", "📊"),
];

const TOOLS: &[ChoiceOption] = &[
    ChoiceOption::new("whiteboard", "화이트보드", "🧑‍🏫"),
    ChoiceOption::new("moodboard", "무드보드", "🖼️"),
    ChoiceOption::new("checklist", "체크리스트", "✅"),
    ChoiceOption::new("spreadsheet", "스프레드시트", "📈"),
];

/// Weight of each option on the drive axis; positive leans "lead".
const DRIVE: &[(&str, i32)] = &[
    ("speak_first", 2),
    ("summarize", 1),
    ("ask_questions", -1),
    ("take_notes", -2),
    ("take_charge", 2),
    ("split_tasks", 1),
    ("check_in", -1),
    ("cover_gaps", -2),
];

/// Weight of each option on the thinking axis; positive leans "ideas".
const THINKING: &[(&str, i32)] = &[
    ("brainstorm", 2),
    ("sketch", 1),
    ("research", -1),
    ("measure", -2),
    ("whiteboard", 2),
    ("moodboard", 1),
    ("checklist", -1),
    ("spreadsheet", -2),
];

static CONFIG: QuizConfig = QuizConfig {
    slug: ExperienceSlug::WorkPersona,
    title: "AI 업무 페르소나 분석",
    steps: &[
        QuizStep {
            id: "meeting",
            prompt: "회의에서 나는?",
            kind: StepKind::SingleChoice { options: MEETINGS },
        },
        QuizStep {
            id: "deadline",
            prompt: "마감이 코앞일 때 나는?",
            kind: StepKind::SingleChoice { options: DEADLINES },
        },
        QuizStep {
            id: "problem",
            prompt: "새로운 문제를 만나면?",
            kind: StepKind::SingleChoice { options: PROBLEMS },
        },
        QuizStep {
            id: "tool",
            prompt: "가장 손이 가는 도구는?",
            kind: StepKind::SingleChoice { options: TOOLS },
        },
    ],
    analyze_duration: Duration::from_millis(2500),
    analyze_emoji: "💼",
};

/// Work personas, one per quadrant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Persona {
    /// Leads with ideas.
    Leader,
    /// Supports with ideas.
    Creator,
    /// Supports with structure.
    Supporter,
    /// Leads with data.
    Analyst,
}

static LEADER: ResultData = ResultData {
    name: "비전 리더",
    name_en: "Visionary Leader",
    headline: "방향을 제시하고 팀을 움직이는 사람",
    description: "큰 그림을 그리고 사람들을 설득하는 데 능해요. 새 프로젝트의 킥오프를 맡기면 빛이 납니다.",
    keywords: &["비전", "추진력", "설득"],
    emoji: "🦁",
    accent: "#c0392b",
};

static CREATOR: ResultData = ResultData {
    name: "크리에이터",
    name_en: "Creator",
    headline: "아이디어로 팀에 영감을 주는 사람",
    description: "남들이 보지 못한 가능성을 찾아내요. 자유롭게 실험할 수 있는 환경에서 가장 큰 성과를 냅니다.",
    keywords: &["창의성", "실험", "영감"],
    emoji: "🦋",
    accent: "#e84393",
};

static SUPPORTER: ResultData = ResultData {
    name: "든든한 서포터",
    name_en: "Steady Supporter",
    headline: "팀이 굴러가게 만드는 숨은 주역",
    description: "꼼꼼하게 빈틈을 메우고 동료를 챙겨요. 당신이 있는 팀은 마감 직전에도 흔들리지 않습니다.",
    keywords: &["신뢰", "꼼꼼함", "배려"],
    emoji: "🐻",
    accent: "#00b894",
};

static ANALYST: ResultData = ResultData {
    name: "전략 분석가",
    name_en: "Strategic Analyst",
    headline: "데이터로 결정을 이끄는 사람",
    description: "근거 없는 주장에는 흔들리지 않아요. 숫자로 우선순위를 정리해 팀의 의사결정을 앞당깁니다.",
    keywords: &["데이터", "논리", "전략"],
    emoji: "🦉",
    accent: "#0984e3",
};

impl QuizOutcome for Persona {
    const ALL: &'static [Self] = &[Self::Leader, Self::Creator, Self::Supporter, Self::Analyst];

    fn key(self) -> &'static str {
        match self {
            Self::Leader => "leader",
            Self::Creator => "creator",
            Self::Supporter => "supporter",
            Self::Analyst => "analyst",
        }
    }

    fn data(self) -> &'static ResultData {
        match self {
            Self::Leader => &LEADER,
            Self::Creator => &CREATOR,
            Self::Supporter => &SUPPORTER,
            Self::Analyst => &ANALYST,
        }
    }
}

fn axis_score(answers: &QuizAnswers, steps: [&str; 2], weights: &[(&str, i32)]) -> i32 {
    steps
        .iter()
        .filter_map(|step| answers.choice(step))
        .filter_map(|id| weights.iter().find(|(option, _)| *option == id))
        .map(|&(_, weight)| weight)
        .sum()
}

/// Work persona quiz.
#[derive(Debug, Default, Clone, Copy)]
pub struct WorkPersonaQuiz;

impl Quiz for WorkPersonaQuiz {
    type Outcome = Persona;

    fn config(&self) -> &'static QuizConfig {
        &CONFIG
    }

    fn compute_result(&self, answers: &QuizAnswers) -> Persona {
        let leads = axis_score(answers, ["meeting", "deadline"], DRIVE) >= 0;
        let ideas = axis_score(answers, ["problem", "tool"], THINKING) >= 0;
        match (leads, ideas) {
            (true, true) => Persona::Leader,
            (false, true) => Persona::Creator,
            (false, false) => Persona::Supporter,
            (true, false) => Persona::Analyst,
        }
    }
}
