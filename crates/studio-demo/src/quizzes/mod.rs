//! The concrete demo quizzes published on the site.

pub mod cafe_menu;
pub mod couple_chemistry;
pub mod fortune;
pub mod personal_color;
pub mod pet_match;
pub mod scent_profile;
pub mod style_profiler;
pub mod travel_style;
pub mod work_persona;

pub use cafe_menu::CafeMenuQuiz;
pub use couple_chemistry::CoupleChemistryQuiz;
pub use fortune::FortuneQuiz;
pub use personal_color::PersonalColorQuiz;
pub use pet_match::PetMatchQuiz;
pub use scent_profile::ScentProfileQuiz;
pub use style_profiler::StyleProfilerQuiz;
pub use travel_style::TravelStyleQuiz;
pub use work_persona::WorkPersonaQuiz;
