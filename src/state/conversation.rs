//! Conversation engine
//!
//! Advances a user's session by one inbound event at a time: a free-text
//! answer or a menu selection. The engine never talks to Telegram directly;
//! it returns [`Reply`] values that the handlers turn into API calls.

use std::sync::Arc;

use chrono::Utc;
use teloxide::types::InlineKeyboardMarkup;
use tracing::{debug, error, info, warn};

use super::steps::Step;
use super::storage::{Session, SessionStore};
use crate::models::{hotel_menu, resolve_hotel_choice, TravelRequest, UserInfo, NO_CHILDREN};
use crate::services::notification::Notifier;
use crate::utils::errors::Result;
use crate::utils::helpers::OutputFormat;
use crate::utils::logging::{log_submission, log_user_action};
use crate::utils::validators::{
    classify_confirmation, mentions_children, validate_answer_length, validate_budget, Confirmation,
};

const INTRODUCTION: &str = "Отлично! Давайте подберем для вас идеальное путешествие. 🧳\n\
                            Я задам несколько вопросов, это займет 2-3 минуты.";
const PREVIEW_TITLE: &str = "Превью вашей заявки:";
const CONFIRMATION_RETRY: &str = "Пожалуйста, ответьте «да» для подтверждения или «нет» для перезаполнения.";
const BUDGET_ERROR: &str = "Пожалуйста, укажите бюджет цифрами или напишите «не принципиально».\n\
                            Например: 150000 руб или 2000$";
const ANSWER_TOO_LONG: &str = "Ответ слишком длинный. Пожалуйста, сократите его до 250 символов.";
const THANK_YOU_TITLE: &str = "✅ Спасибо! Ваша заявка отправлена менеджеру.";
const THANK_YOU_BODY: &str = "Наш специалист свяжется с вами в течение 24 часов для уточнения деталей \
                              и подбора лучших предложений.\n\n\
                              Для оформления новой заявки нажмите /newrequest";
const DELIVERY_FAILED: &str = "Произошла ошибка при отправке заявки. Пожалуйста, попробуйте позже.";
const HOTEL_SELECTED: &str = "✅ Уровень отеля";

/// Outgoing message produced by the engine
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// Plain message to the user's chat
    Text(String),
    /// Message with an inline keyboard attached
    Menu { text: String, keyboard: InlineKeyboardMarkup },
    /// Replace the text of the message a menu selection came from
    EditOrigin(String),
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Text(text) | Reply::EditOrigin(text) => text,
            Reply::Menu { text, .. } => text,
        }
    }
}

/// Result of feeding one event to the engine
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The user has no questionnaire in progress
    NoSession,
    /// The event does not apply to the current step
    Ignored,
    Replies(Vec<Reply>),
}

#[derive(Clone)]
pub struct ConversationEngine {
    store: Arc<dyn SessionStore>,
    notifier: Arc<dyn Notifier>,
    format: OutputFormat,
}

impl ConversationEngine {
    pub fn new(store: Arc<dyn SessionStore>, notifier: Arc<dyn Notifier>, format: OutputFormat) -> Self {
        Self { store, notifier, format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn store(&self) -> Arc<dyn SessionStore> {
        self.store.clone()
    }

    /// Start a new questionnaire, discarding any session in progress
    pub async fn begin(&self, user_id: i64) -> Result<Vec<Reply>> {
        self.store.start(user_id).await?;
        log_user_action(user_id, "new_request", None);

        let text = format!("{}\n\n{}", self.format.escape(INTRODUCTION), Step::FIRST.prompt(self.format));
        Ok(vec![Reply::Text(text)])
    }

    /// Abandon the user's session; returns whether one existed
    pub async fn cancel(&self, user_id: i64) -> Result<bool> {
        let removed = self.store.clear(user_id).await?;
        log_user_action(user_id, "cancel", Some(if removed { "session removed" } else { "no session" }));
        Ok(removed)
    }

    pub async fn current_step(&self, user_id: i64) -> Result<Option<Step>> {
        Ok(self.store.get(user_id).await?.map(|session| session.step))
    }

    /// Feed a free-text answer
    pub async fn handle_text(&self, user: &UserInfo, text: &str) -> Result<Outcome> {
        let Some(mut session) = self.store.get(user.id).await? else {
            debug!(user_id = user.id, "Text received without an active session");
            return Ok(Outcome::NoSession);
        };

        let answer = text.trim();
        info!(user_id = user.id, step = ?session.step, "Processing answer");

        match session.step {
            Step::Confirmation => {
                let replies = self.handle_confirmation(user, session, answer).await?;
                Ok(Outcome::Replies(replies))
            }
            _ if !validate_answer_length(answer) => {
                warn!(user_id = user.id, step = ?session.step, length = answer.chars().count(), "Answer too long");
                Ok(Outcome::Replies(vec![Reply::Text(self.format.escape(ANSWER_TOO_LONG))]))
            }
            Step::Budget if !validate_budget(answer) => {
                warn!(user_id = user.id, answer = %answer, "Budget rejected");
                Ok(Outcome::Replies(vec![Reply::Text(self.format.escape(BUDGET_ERROR))]))
            }
            _ => {
                let replies = self.apply_answer(&mut session, answer);
                self.store.save(session).await?;
                Ok(Outcome::Replies(replies))
            }
        }
    }

    /// Feed an inline menu selection
    pub async fn handle_selection(&self, user: &UserInfo, code: &str) -> Result<Outcome> {
        let Some(mut session) = self.store.get(user.id).await? else {
            debug!(user_id = user.id, code = %code, "Selection received without an active session");
            return Ok(Outcome::NoSession);
        };

        if !session.step.has_menu() {
            warn!(user_id = user.id, step = ?session.step, code = %code, "Selection does not apply to current step");
            return Ok(Outcome::Ignored);
        }

        let label = resolve_hotel_choice(code);
        info!(user_id = user.id, code = %code, label = %label, "Hotel level selected");

        session.record.hotel_level = label.to_string();
        session.step = Step::MealPlan;
        self.store.save(session).await?;

        let text = format!(
            "{}\n\n{}",
            self.format.field(HOTEL_SELECTED, label),
            Step::MealPlan.prompt(self.format)
        );
        Ok(Outcome::Replies(vec![Reply::EditOrigin(text)]))
    }

    /// Store the answer for the current step and move on
    fn apply_answer(&self, session: &mut Session, answer: &str) -> Vec<Reply> {
        let step = session.step;
        let record = &mut session.record;
        let value = answer.to_string();

        let next = match step {
            Step::Destination => {
                record.destination = value;
                step.next()
            }
            Step::DepartureCity => {
                record.departure_city = value;
                step.next()
            }
            Step::TravelDates => {
                record.travel_dates = value;
                step.next()
            }
            Step::Duration => {
                record.duration = value;
                step.next()
            }
            Step::Travelers => {
                record.travelers = value;
                if mentions_children(answer) {
                    Some(Step::ChildAge)
                } else {
                    record.child_age = Some(NO_CHILDREN.to_string());
                    Some(Step::Budget)
                }
            }
            Step::ChildAge => {
                record.child_age = Some(value);
                step.next()
            }
            Step::Budget => {
                record.budget = value;
                step.next()
            }
            Step::VacationType => {
                record.vacation_type = value;
                step.next()
            }
            Step::HotelLevel => {
                record.hotel_level = value;
                step.next()
            }
            Step::MealPlan => {
                record.meal_plan = value;
                step.next()
            }
            Step::ImportantFactors => {
                record.important_factors = value;
                record.created_at = Some(Utc::now());
                step.next()
            }
            Step::Confirmation => None,
        };

        match next {
            Some(Step::Confirmation) => {
                session.step = Step::Confirmation;
                vec![Reply::Text(self.preview(&session.record))]
            }
            Some(next) => {
                debug!(user_id = session.user_id, from = ?step, to = ?next, "Step advanced");
                session.step = next;
                vec![self.prompt(next)]
            }
            None => vec![Reply::Text(self.format.escape(CONFIRMATION_RETRY))],
        }
    }

    async fn handle_confirmation(&self, user: &UserInfo, session: Session, answer: &str) -> Result<Vec<Reply>> {
        match classify_confirmation(answer) {
            Confirmation::Confirm => {
                log_submission(&session.record, user);
                let delivery = self.notifier.deliver(&session.record, user).await;
                self.store.clear(user.id).await?;

                match delivery {
                    Ok(()) => {
                        info!(user_id = user.id, username = user.username.as_deref(), "Request delivered to manager");
                        let text = format!(
                            "{}\n\n{}",
                            self.format.bold(THANK_YOU_TITLE),
                            self.format.escape(THANK_YOU_BODY)
                        );
                        Ok(vec![Reply::Text(text)])
                    }
                    Err(e) => {
                        error!(user_id = user.id, error = %e, "Failed to deliver request to manager");
                        Ok(vec![Reply::Text(self.format.escape(DELIVERY_FAILED))])
                    }
                }
            }
            Confirmation::Reject => {
                info!(user_id = user.id, "Request rejected at confirmation, starting over");
                self.store.clear(user.id).await?;
                self.begin(user.id).await
            }
            Confirmation::Unknown => {
                warn!(user_id = user.id, answer = %answer, "Unrecognized confirmation answer");
                Ok(vec![Reply::Text(self.format.escape(CONFIRMATION_RETRY))])
            }
        }
    }

    fn prompt(&self, step: Step) -> Reply {
        let text = step.prompt(self.format);
        if step.has_menu() {
            Reply::Menu { text, keyboard: hotel_menu() }
        } else {
            Reply::Text(text)
        }
    }

    fn preview(&self, record: &TravelRequest) -> String {
        format!(
            "{}\n\n{}\n\n{}",
            self.format.bold(PREVIEW_TITLE),
            record.render_preview(self.format),
            Step::Confirmation.prompt(self.format)
        )
    }
}
