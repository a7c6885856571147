//! Questionnaire steps
//!
//! Each step knows its position in the questionnaire and the prompt shown
//! when the client reaches it.

use serde::{Deserialize, Serialize};

use crate::utils::helpers::OutputFormat;

/// Number of numbered questions shown as "Шаг N из TOTAL_STEPS"
pub const TOTAL_STEPS: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    Destination,
    DepartureCity,
    TravelDates,
    Duration,
    Travelers,
    ChildAge,
    Budget,
    VacationType,
    HotelLevel,
    MealPlan,
    ImportantFactors,
    Confirmation,
}

impl Step {
    /// Step every new session starts at
    pub const FIRST: Step = Step::Destination;

    /// Position shown to the client; `None` for the child age follow-up and confirmation
    pub fn number(self) -> Option<u8> {
        match self {
            Step::Destination => Some(1),
            Step::DepartureCity => Some(2),
            Step::TravelDates => Some(3),
            Step::Duration => Some(4),
            Step::Travelers => Some(5),
            Step::ChildAge => None,
            Step::Budget => Some(6),
            Step::VacationType => Some(7),
            Step::HotelLevel => Some(8),
            Step::MealPlan => Some(9),
            Step::ImportantFactors => Some(10),
            Step::Confirmation => None,
        }
    }

    /// Step that follows a plain answer. Travelers branches explicitly.
    pub fn next(self) -> Option<Step> {
        match self {
            Step::Destination => Some(Step::DepartureCity),
            Step::DepartureCity => Some(Step::TravelDates),
            Step::TravelDates => Some(Step::Duration),
            Step::Duration => Some(Step::Travelers),
            Step::Travelers => Some(Step::ChildAge),
            Step::ChildAge => Some(Step::Budget),
            Step::Budget => Some(Step::VacationType),
            Step::VacationType => Some(Step::HotelLevel),
            Step::HotelLevel => Some(Step::MealPlan),
            Step::MealPlan => Some(Step::ImportantFactors),
            Step::ImportantFactors => Some(Step::Confirmation),
            Step::Confirmation => None,
        }
    }

    /// Whether the step offers an inline menu next to free text
    pub fn has_menu(self) -> bool {
        matches!(self, Step::HotelLevel)
    }

    fn question(self) -> (&'static str, &'static str) {
        match self {
            Step::Destination => (
                "Куда бы вы хотели поехать?",
                "Страна, курорт или несколько вариантов, например: Турция, ОАЭ и Египет. \
                 Если ещё не решили, напишите «пока не определились».",
            ),
            Step::DepartureCity => (
                "Из какого города планируете вылет?",
                "Например: Москва, Санкт-Петербург, Казань",
            ),
            Step::TravelDates => (
                "На какие даты или период планируется поездка?",
                "Например: июль 2025, 10-25 августа, на новый год",
            ),
            Step::Duration => (
                "Какова желаемая продолжительность поездки?",
                "Например: 7-10 ночей, 2 недели, выходные",
            ),
            Step::Travelers => (
                "Сколько человек поедет?",
                "Например: 2 взрослых или 2 взрослых и ребенок",
            ),
            Step::ChildAge => (
                "Сколько лет детям?",
                "Укажите возраст каждого ребенка, например: 5 и 9 лет",
            ),
            Step::Budget => (
                "Какой бюджет на поездку вы рассматриваете?",
                "Например: 150000 руб, 2000$ или «не принципиально»",
            ),
            Step::VacationType => (
                "Какой тип отдыха вас интересует?",
                "Например: пляжный, экскурсионный, горнолыжный, гастрономический",
            ),
            Step::HotelLevel => (
                "Какой уровень отеля предпочитаете?",
                "Выберите вариант ниже или напишите свой",
            ),
            Step::MealPlan => (
                "Какой тип питания предпочитаете?",
                "Например: завтраки, полупансион, все включено, без питания",
            ),
            Step::ImportantFactors => (
                "Что для вас особенно важно в поездке?",
                "Например: первая линия, тихий отель, анимация для детей, виза. \
                 Если ничего особенного, напишите «нет».",
            ),
            Step::Confirmation => (
                "Всё верно?",
                "Отправьте «да» для подтверждения или «нет» для перезаполнения.",
            ),
        }
    }

    /// Prompt text for this step
    pub fn prompt(self, format: OutputFormat) -> String {
        let (question, hint) = self.question();
        let header = match self.number() {
            Some(number) => format!("Шаг {} из {}:", number, TOTAL_STEPS),
            None if self == Step::ChildAge => "Уточнение:".to_string(),
            None => return format!("{}\n{}", format.bold(question), format.escape(hint)),
        };

        format!(
            "{}\n{}\n{}",
            format.bold(&header),
            format.escape(question),
            format.escape(&format!("({})", hint)),
        )
    }
}
