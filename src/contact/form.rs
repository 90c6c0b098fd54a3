use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use chrono_tz::Asia::Kolkata;
use serde::Serialize;
use thiserror::Error;
use yew::Reducible;

use crate::config;
use crate::motion::timer::{TimerId, TimerSlot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Subject {
    #[default]
    GeneralInquiry,
    NewProjectProposal,
    RequestQuote,
}

impl Subject {
    pub const ALL: [Subject; 3] = [
        Subject::GeneralInquiry,
        Subject::NewProjectProposal,
        Subject::RequestQuote,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Subject::GeneralInquiry => "General Inquiry",
            Subject::NewProjectProposal => "New Project Proposal",
            Subject::RequestQuote => "Request Quote",
        }
    }

    pub fn from_label(label: &str) -> Option<Subject> {
        Subject::ALL.into_iter().find(|s| s.label() == label)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub subject: Subject,
    pub message: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("a message is already being sent")]
    AlreadySending,
}

/// Template variables the email service fills into the notification mail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub reply_to: String,
    pub subject: String,
    pub message: String,
    pub submission_time: String,
}

/// Formats a timestamp the way the office reads it, in Indian Standard Time.
pub fn format_submission_time(at: DateTime<Utc>) -> String {
    at.with_timezone(&Kolkata)
        .format("%-d %b %Y, %-I:%M %P")
        .to_string()
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Sent,
    Failed,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    Edit(Field, String),
    Rejected(FormError),
    Started,
    Finished(Outcome),
    /// Clears the banner, but only if it is still the one with this id.
    ClearBanner(u64),
}

/// State of the contact form: field values, the in-flight lock and the
/// outcome banner. Each banner gets a fresh id so a delayed clear cannot
/// remove a newer banner.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactForm {
    pub fields: ContactFields,
    pub sending: bool,
    pub rejection: Option<FormError>,
    banner: Option<(Outcome, u64)>,
    banners_shown: u64,
}

impl ContactForm {
    pub fn banner(&self) -> Option<Outcome> {
        self.banner.map(|(outcome, _)| outcome)
    }

    pub fn banner_id(&self) -> Option<u64> {
        self.banner.map(|(_, id)| id)
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.sending {
            return Err(FormError::AlreadySending);
        }
        let fields = &self.fields;
        if fields.name.trim().is_empty() {
            return Err(FormError::MissingField(Field::Name));
        }
        if fields.email.trim().is_empty() {
            return Err(FormError::MissingField(Field::Email));
        }
        if !looks_like_email(fields.email.trim()) {
            return Err(FormError::InvalidEmail);
        }
        if fields.message.trim().is_empty() {
            return Err(FormError::MissingField(Field::Message));
        }
        Ok(())
    }

    /// Builds the outgoing payload, or says why the form cannot be sent.
    pub fn prepare(&self, submitted_at: DateTime<Utc>) -> Result<TemplateParams, FormError> {
        self.validate()?;
        Ok(TemplateParams {
            from_name: self.fields.name.trim().to_string(),
            reply_to: self.fields.email.trim().to_string(),
            subject: self.fields.subject.label().to_string(),
            message: self.fields.message.clone(),
            submission_time: format_submission_time(submitted_at),
        })
    }

    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::Edit(field, value) => {
                // Inputs are disabled while sending; late events are dropped.
                if self.sending {
                    return;
                }
                match field {
                    Field::Name => self.fields.name = value,
                    Field::Email => self.fields.email = value,
                    Field::Subject => {
                        self.fields.subject = Subject::from_label(&value).unwrap_or_default()
                    }
                    Field::Message => self.fields.message = value,
                }
                self.rejection = None;
            }
            FormAction::Rejected(err) => self.rejection = Some(err),
            FormAction::Started => {
                self.sending = true;
                self.rejection = None;
                self.banner = None;
            }
            FormAction::Finished(outcome) => {
                self.sending = false;
                if outcome == Outcome::Sent {
                    self.fields = ContactFields::default();
                }
                self.banners_shown += 1;
                self.banner = Some((outcome, self.banners_shown));
            }
            FormAction::ClearBanner(id) => {
                if self.banner_id() == Some(id) {
                    self.banner = None;
                }
            }
        }
    }
}

impl Reducible for ContactForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

/// Clears the outcome banner a fixed time after it appears.
///
/// Follows the banner id of a [`ContactForm`]: a new id restarts the
/// countdown, no id cancels it. When the host timer expires it must call
/// [`BannerCountdown::timer_fired`] and dispatch
/// [`FormAction::ClearBanner`] with the id it returns.
pub struct BannerCountdown<H> {
    timer: TimerSlot<H>,
    shown: Option<u64>,
    delay_ms: u32,
}

impl<H> Default for BannerCountdown<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> BannerCountdown<H> {
    pub fn new() -> Self {
        Self::with_delay(config::BANNER_CLEAR_MS)
    }

    pub fn with_delay(delay_ms: u32) -> Self {
        Self {
            timer: TimerSlot::new(),
            shown: None,
            delay_ms,
        }
    }

    /// The form now shows the banner `banner_id`.
    pub fn track(&mut self, banner_id: Option<u64>, schedule: impl FnOnce(TimerId, u32) -> H) {
        if banner_id == self.shown {
            return;
        }
        self.shown = banner_id;
        if banner_id.is_some() {
            let delay = self.delay_ms;
            self.timer.arm(|id| schedule(id, delay));
        } else {
            self.timer.cancel();
        }
    }

    /// Host timer `id` expired. Returns the banner to clear, if the timer was
    /// still current.
    pub fn timer_fired(&mut self, id: TimerId) -> Option<u64> {
        if self.timer.fire(id) {
            self.shown
        } else {
            None
        }
    }

    pub fn teardown(&mut self) {
        self.timer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::cell::RefCell;

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.apply(FormAction::Edit(Field::Name, "Priya".into()));
        form.apply(FormAction::Edit(Field::Email, "priya@example.com".into()));
        form.apply(FormAction::Edit(Field::Subject, "Request Quote".into()));
        form.apply(FormAction::Edit(Field::Message, "Two-storey house in Pollachi".into()));
        form
    }

    fn noon() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 10, 15, 0).unwrap()
    }

    #[test]
    fn defaults() {
        let form = ContactForm::default();
        assert_eq!(form.fields.subject, Subject::GeneralInquiry);
        assert!(!form.sending);
        assert_eq!(form.banner(), None);
    }

    #[test]
    fn required_fields_are_checked_in_order() {
        let mut form = filled();
        form.apply(FormAction::Edit(Field::Name, "   ".into()));
        assert_eq!(form.validate(), Err(FormError::MissingField(Field::Name)));

        let mut form = filled();
        form.apply(FormAction::Edit(Field::Email, String::new()));
        assert_eq!(form.validate(), Err(FormError::MissingField(Field::Email)));

        let mut form = filled();
        form.apply(FormAction::Edit(Field::Message, "\n".into()));
        assert_eq!(form.validate(), Err(FormError::MissingField(Field::Message)));

        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn email_shape() {
        assert!(looks_like_email("a@b"));
        assert!(looks_like_email("site.owner@gmail.com"));
        assert!(!looks_like_email("no-at-sign"));
        assert!(!looks_like_email("@domain.com"));
        assert!(!looks_like_email("user@"));
        assert!(!looks_like_email("a@b@c"));
        assert!(!looks_like_email("a b@c.com"));

        let mut form = filled();
        form.apply(FormAction::Edit(Field::Email, "priya.example.com".into()));
        assert_eq!(form.validate(), Err(FormError::InvalidEmail));
    }

    #[test]
    fn payload_matches_template() {
        let mut form = filled();
        form.apply(FormAction::Edit(Field::Name, "  Priya ".into()));
        let params = form.prepare(noon()).unwrap();
        assert_eq!(params.from_name, "Priya");
        assert_eq!(params.reply_to, "priya@example.com");
        assert_eq!(params.subject, "Request Quote");
        assert_eq!(params.submission_time, "18 Oct 2026, 3:45 pm");

        let json = serde_json::to_value(&params).unwrap();
        for key in ["from_name", "reply_to", "subject", "message", "submission_time"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn unknown_subject_falls_back_to_default() {
        let mut form = filled();
        form.apply(FormAction::Edit(Field::Subject, "Spam".into()));
        assert_eq!(form.fields.subject, Subject::GeneralInquiry);
    }

    #[test]
    fn in_flight_blocks_resubmission_and_edits() {
        let mut form = filled();
        form.apply(FormAction::Started);
        assert_eq!(form.prepare(noon()), Err(FormError::AlreadySending));
        form.apply(FormAction::Edit(Field::Name, "Changed".into()));
        assert_eq!(form.fields.name, "Priya");
    }

    #[test]
    fn success_resets_fields_and_shows_banner() {
        let mut form = filled();
        form.apply(FormAction::Started);
        form.apply(FormAction::Finished(Outcome::Sent));
        assert!(!form.sending);
        assert_eq!(form.fields, ContactFields::default());
        assert_eq!(form.banner(), Some(Outcome::Sent));

        let id = form.banner_id().unwrap();
        form.apply(FormAction::ClearBanner(id));
        assert_eq!(form.banner(), None);
    }

    #[test]
    fn failure_keeps_fields_for_retry() {
        let mut form = filled();
        form.apply(FormAction::Started);
        form.apply(FormAction::Finished(Outcome::Failed));
        assert_eq!(form.banner(), Some(Outcome::Failed));
        assert_eq!(form.fields.name, "Priya");
        assert!(form.prepare(noon()).is_ok());
    }

    #[test]
    fn stale_clear_keeps_newer_banner() {
        let mut form = filled();
        form.apply(FormAction::Started);
        form.apply(FormAction::Finished(Outcome::Failed));
        let first = form.banner_id().unwrap();

        form.apply(FormAction::Started);
        assert_eq!(form.banner(), None);
        form.apply(FormAction::Finished(Outcome::Sent));
        form.apply(FormAction::ClearBanner(first));
        assert_eq!(form.banner(), Some(Outcome::Sent));
    }

    type Queue = Rc<RefCell<Vec<(TimerId, u64)>>>;

    /// Form plus countdown on a virtual clock, wired like the contact
    /// section: every form change is reported to the countdown.
    struct Page {
        now: u64,
        form: Rc<ContactForm>,
        countdown: BannerCountdown<()>,
        queue: Queue,
    }

    impl Page {
        fn new() -> Self {
            Self {
                now: 0,
                form: Rc::new(filled()),
                countdown: BannerCountdown::new(),
                queue: Rc::new(RefCell::new(Vec::new())),
            }
        }

        fn dispatch(&mut self, action: FormAction) {
            self.form = self.form.clone().reduce(action);
            let queue = self.queue.clone();
            let now = self.now;
            self.countdown.track(self.form.banner_id(), move |id, delay| {
                queue.borrow_mut().push((id, now + u64::from(delay)))
            });
        }

        fn submit(&mut self, outcome: Outcome) {
            self.dispatch(FormAction::Started);
            self.dispatch(FormAction::Finished(outcome));
        }

        fn advance(&mut self, ms: u64) {
            let until = self.now + ms;
            loop {
                let next = {
                    let mut queue = self.queue.borrow_mut();
                    queue.sort_by_key(|(_, due)| *due);
                    match queue.first() {
                        Some(&(_, due)) if due <= until => Some(queue.remove(0)),
                        _ => None,
                    }
                };
                let Some((id, due)) = next else { break };
                self.now = due;
                if let Some(banner) = self.countdown.timer_fired(id) {
                    self.dispatch(FormAction::ClearBanner(banner));
                }
            }
            self.now = until;
        }
    }

    #[test]
    fn banner_clears_after_five_seconds() {
        assert_eq!(config::BANNER_CLEAR_MS, 5_000);
        let mut page = Page::new();
        page.submit(Outcome::Sent);
        assert_eq!(page.form.banner(), Some(Outcome::Sent));

        page.advance(4_999);
        assert_eq!(page.form.banner(), Some(Outcome::Sent));
        page.advance(1);
        assert_eq!(page.form.banner(), None);
    }

    #[test]
    fn newer_banner_restarts_countdown() {
        let mut page = Page::new();
        page.submit(Outcome::Failed);
        page.advance(3_000);
        page.submit(Outcome::Sent);

        // The first banner's timer would have fired here.
        page.advance(2_000);
        assert_eq!(page.form.banner(), Some(Outcome::Sent));
        page.advance(2_999);
        assert_eq!(page.form.banner(), Some(Outcome::Sent));
        page.advance(1);
        assert_eq!(page.form.banner(), None);
    }

    #[test]
    fn teardown_leaves_banner_alone() {
        let mut page = Page::new();
        page.submit(Outcome::Sent);
        page.countdown.teardown();
        page.advance(60_000);
        assert_eq!(page.form.banner(), Some(Outcome::Sent));
    }

    #[test]
    fn editing_clears_rejection() {
        let mut form = ContactForm::default();
        form.apply(FormAction::Rejected(FormError::MissingField(Field::Name)));
        assert!(form.rejection.is_some());
        form.apply(FormAction::Edit(Field::Name, "P".into()));
        assert!(form.rejection.is_none());
    }

    #[test]
    fn error_messages_read_well() {
        assert_eq!(
            FormError::MissingField(Field::Message).to_string(),
            "Message is required"
        );
    }
}
