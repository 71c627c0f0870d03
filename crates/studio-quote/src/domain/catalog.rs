//! Compiled-in pricing tables: services, their options, and add-ons.
//!
//! Prices are whole won.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use studio_core::error::DomainError;
use studio_core::locale::Locale;

/// Services that can be added to a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKey {
    /// Photo booth with generative styles.
    AiPhotoBooth,
    /// Live portrait generation.
    AiPortraitStudio,
    /// Motion-reactive media wall.
    InteractiveMediaWall,
    /// Conversational character kiosk.
    AiCharacterChat,
    /// A bespoke quiz like the site's demos.
    CustomDemoQuiz,
    /// Generated images and video.
    ContentProduction,
}

impl ServiceKey {
    /// Every service, in catalog order.
    pub const ALL: &'static [Self] = &[
        Self::AiPhotoBooth,
        Self::AiPortraitStudio,
        Self::InteractiveMediaWall,
        Self::AiCharacterChat,
        Self::CustomDemoQuiz,
        Self::ContentProduction,
    ];

    /// Kebab-case identifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AiPhotoBooth => "ai-photo-booth",
            Self::AiPortraitStudio => "ai-portrait-studio",
            Self::InteractiveMediaWall => "interactive-media-wall",
            Self::AiCharacterChat => "ai-character-chat",
            Self::CustomDemoQuiz => "custom-demo-quiz",
            Self::ContentProduction => "content-production",
        }
    }

    /// The catalog entry for this service.
    #[must_use]
    pub fn definition(self) -> &'static ServiceDefinition {
        match self {
            Self::AiPhotoBooth => &SERVICES[0],
            Self::AiPortraitStudio => &SERVICES[1],
            Self::InteractiveMediaWall => &SERVICES[2],
            Self::AiCharacterChat => &SERVICES[3],
            Self::CustomDemoQuiz => &SERVICES[4],
            Self::ContentProduction => &SERVICES[5],
        }
    }
}

impl fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown service: {s}")))
    }
}

/// One choice of a select option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SelectChoice {
    /// Stored value.
    pub id: &'static str,
    /// Korean label.
    pub label: &'static str,
    /// Price added when chosen.
    pub price: i64,
}

/// How an option is priced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OptionKind {
    /// Adds `price` when switched on.
    Toggle {
        /// Price when on.
        price: i64,
    },
    /// Adds the chosen choice's price. The first choice is the default.
    Select {
        /// Available choices.
        choices: &'static [SelectChoice],
    },
    /// Adds `price_per_unit` for every unit.
    Number {
        /// Price of one unit.
        price_per_unit: i64,
        /// Fewest units.
        min: u32,
        /// Most units.
        max: u32,
        /// Initial units.
        default: u32,
    },
}

/// A configurable option of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceOption {
    /// Key in the selected service's option map.
    pub id: &'static str,
    /// Korean label.
    pub label: &'static str,
    /// Pricing rule.
    pub kind: OptionKind,
}

/// A service in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceDefinition {
    /// Catalog key.
    pub key: ServiceKey,
    /// Korean name.
    pub name: &'static str,
    /// English name.
    pub name_en: &'static str,
    /// Price before options.
    pub base_price: i64,
    /// Configurable options.
    pub options: &'static [ServiceOption],
}

impl ServiceDefinition {
    /// Name in a locale.
    #[must_use]
    pub fn name_for(&self, locale: Locale) -> &'static str {
        locale.pick(self.name, self.name_en)
    }

    /// Looks up an option by id.
    #[must_use]
    pub fn option(&self, option_id: &str) -> Option<&'static ServiceOption> {
        self.options.iter().find(|option| option.id == option_id)
    }
}

/// Every service, in catalog order.
pub static SERVICES: [ServiceDefinition; 6] = [
    ServiceDefinition {
        key: ServiceKey::AiPhotoBooth,
        name: "AI 포토부스",
        name_en: "AI Photo Booth",
        base_price: 1_500_000,
        options: &[
            ServiceOption {
                id: "premium_print",
                label: "고급 인화지 출력",
                kind: OptionKind::Toggle { price: 300_000 },
            },
            ServiceOption {
                id: "style",
                label: "변환 스타일",
                kind: OptionKind::Select {
                    choices: &[
                        SelectChoice { id: "basic", label: "기본 필터", price: 0 },
                        SelectChoice { id: "anime", label: "애니메이션", price: 200_000 },
                        SelectChoice { id: "custom", label: "브랜드 맞춤", price: 500_000 },
                    ],
                },
            },
            ServiceOption {
                id: "extra_booths",
                label: "추가 부스",
                kind: OptionKind::Number {
                    price_per_unit: 800_000,
                    min: 0,
                    max: 4,
                    default: 0,
                },
            },
        ],
    },
    ServiceDefinition {
        key: ServiceKey::AiPortraitStudio,
        name: "AI 초상화 스튜디오",
        name_en: "AI Portrait Studio",
        base_price: 2_000_000,
        options: &[
            ServiceOption {
                id: "framed_print",
                label: "액자 제작",
                kind: OptionKind::Toggle { price: 400_000 },
            },
            ServiceOption {
                id: "style",
                label: "화풍",
                kind: OptionKind::Select {
                    choices: &[
                        SelectChoice { id: "watercolor", label: "수채화", price: 0 },
                        SelectChoice { id: "oil", label: "유화", price: 300_000 },
                        SelectChoice { id: "pop_art", label: "팝아트", price: 300_000 },
                    ],
                },
            },
            ServiceOption {
                id: "extra_stations",
                label: "추가 촬영 스테이션",
                kind: OptionKind::Number {
                    price_per_unit: 700_000,
                    min: 0,
                    max: 3,
                    default: 0,
                },
            },
        ],
    },
    ServiceDefinition {
        key: ServiceKey::InteractiveMediaWall,
        name: "인터랙티브 미디어월",
        name_en: "Interactive Media Wall",
        base_price: 5_000_000,
        options: &[
            ServiceOption {
                id: "motion_tracking",
                label: "모션 트래킹",
                kind: OptionKind::Toggle { price: 1_000_000 },
            },
            ServiceOption {
                id: "screen_size",
                label: "스크린 크기",
                kind: OptionKind::Select {
                    choices: &[
                        SelectChoice { id: "medium", label: "중형 (3m)", price: 0 },
                        SelectChoice { id: "large", label: "대형 (6m)", price: 2_000_000 },
                        SelectChoice { id: "xlarge", label: "초대형 (10m)", price: 4_000_000 },
                    ],
                },
            },
            ServiceOption {
                id: "extra_scenes",
                label: "추가 콘텐츠 씬",
                kind: OptionKind::Number {
                    price_per_unit: 500_000,
                    min: 0,
                    max: 10,
                    default: 0,
                },
            },
        ],
    },
    ServiceDefinition {
        key: ServiceKey::AiCharacterChat,
        name: "AI 캐릭터 챗봇",
        name_en: "AI Character Chat",
        base_price: 3_000_000,
        options: &[
            ServiceOption {
                id: "voice",
                label: "음성 대화",
                kind: OptionKind::Toggle { price: 800_000 },
            },
            ServiceOption {
                id: "languages",
                label: "지원 언어",
                kind: OptionKind::Select {
                    choices: &[
                        SelectChoice { id: "ko", label: "한국어", price: 0 },
                        SelectChoice { id: "ko_en", label: "한국어 + 영어", price: 500_000 },
                        SelectChoice { id: "multi", label: "4개 국어", price: 1_200_000 },
                    ],
                },
            },
            ServiceOption {
                id: "extra_characters",
                label: "추가 캐릭터",
                kind: OptionKind::Number {
                    price_per_unit: 1_000_000,
                    min: 0,
                    max: 5,
                    default: 0,
                },
            },
        ],
    },
    ServiceDefinition {
        key: ServiceKey::CustomDemoQuiz,
        name: "맞춤형 AI 데모 퀴즈",
        name_en: "Custom AI Demo Quiz",
        base_price: 2_500_000,
        options: &[
            ServiceOption {
                id: "result_card_print",
                label: "결과 카드 출력",
                kind: OptionKind::Toggle { price: 300_000 },
            },
            ServiceOption {
                id: "complexity",
                label: "문항 구성",
                kind: OptionKind::Select {
                    choices: &[
                        SelectChoice { id: "simple", label: "간단 (3문항)", price: 0 },
                        SelectChoice { id: "standard", label: "표준 (5문항)", price: 700_000 },
                        SelectChoice { id: "advanced", label: "심화 (8문항)", price: 1_500_000 },
                    ],
                },
            },
            ServiceOption {
                id: "extra_results",
                label: "추가 결과 유형",
                kind: OptionKind::Number {
                    price_per_unit: 150_000,
                    min: 0,
                    max: 12,
                    default: 0,
                },
            },
        ],
    },
    ServiceDefinition {
        key: ServiceKey::ContentProduction,
        name: "AI 콘텐츠 제작",
        name_en: "AI Content Production",
        base_price: 1_000_000,
        options: &[
            ServiceOption {
                id: "rush",
                label: "긴급 제작",
                kind: OptionKind::Toggle { price: 500_000 },
            },
            ServiceOption {
                id: "format",
                label: "결과물 형식",
                kind: OptionKind::Select {
                    choices: &[
                        SelectChoice { id: "image", label: "이미지", price: 0 },
                        SelectChoice { id: "video", label: "영상", price: 800_000 },
                        SelectChoice { id: "both", label: "이미지 + 영상", price: 1_300_000 },
                    ],
                },
            },
            ServiceOption {
                id: "extra_deliverables",
                label: "추가 결과물",
                kind: OptionKind::Number {
                    price_per_unit: 200_000,
                    min: 0,
                    max: 20,
                    default: 0,
                },
            },
        ],
    },
];

/// Add-ons that can be toggled on a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddOnId {
    /// Operating staff on site.
    OnSiteStaff,
    /// Logo and color customization.
    BrandingKit,
    /// Download page for guests.
    PhotoSharingPage,
    /// Post-event engagement report.
    AnalyticsReport,
    /// Equipment delivery and setup.
    EquipmentTransport,
    /// A rehearsal day before the event.
    RehearsalDay,
}

/// An add-on in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AddOnDefinition {
    /// Catalog id.
    pub id: AddOnId,
    /// Korean name.
    pub name: &'static str,
    /// English name.
    pub name_en: &'static str,
    /// Flat price.
    pub price: i64,
}

impl AddOnDefinition {
    /// Name in a locale.
    #[must_use]
    pub fn name_for(&self, locale: Locale) -> &'static str {
        locale.pick(self.name, self.name_en)
    }
}

/// Every add-on, in catalog order.
pub static ADD_ONS: [AddOnDefinition; 6] = [
    AddOnDefinition {
        id: AddOnId::OnSiteStaff,
        name: "현장 운영 인력",
        name_en: "On-site Staff",
        price: 300_000,
    },
    AddOnDefinition {
        id: AddOnId::BrandingKit,
        name: "브랜딩 커스터마이징",
        name_en: "Branding Kit",
        price: 500_000,
    },
    AddOnDefinition {
        id: AddOnId::PhotoSharingPage,
        name: "결과물 공유 페이지",
        name_en: "Photo Sharing Page",
        price: 200_000,
    },
    AddOnDefinition {
        id: AddOnId::AnalyticsReport,
        name: "참여 분석 리포트",
        name_en: "Analytics Report",
        price: 400_000,
    },
    AddOnDefinition {
        id: AddOnId::EquipmentTransport,
        name: "장비 운송 및 설치",
        name_en: "Equipment Transport",
        price: 250_000,
    },
    AddOnDefinition {
        id: AddOnId::RehearsalDay,
        name: "사전 리허설",
        name_en: "Rehearsal Day",
        price: 600_000,
    },
];

impl AddOnId {
    /// Every add-on, in catalog order.
    pub const ALL: &'static [Self] = &[
        Self::OnSiteStaff,
        Self::BrandingKit,
        Self::PhotoSharingPage,
        Self::AnalyticsReport,
        Self::EquipmentTransport,
        Self::RehearsalDay,
    ];

    /// The catalog entry for this add-on.
    #[must_use]
    pub fn definition(self) -> &'static AddOnDefinition {
        match self {
            Self::OnSiteStaff => &ADD_ONS[0],
            Self::BrandingKit => &ADD_ONS[1],
            Self::PhotoSharingPage => &ADD_ONS[2],
            Self::AnalyticsReport => &ADD_ONS[3],
            Self::EquipmentTransport => &ADD_ONS[4],
            Self::RehearsalDay => &ADD_ONS[5],
        }
    }
}
