//! Contact form session: CAPTCHA challenge, simulated submission and status
//! messages.
//!
//! The session is a plain state machine. [`ContactSession::handle`] applies one
//! [`FormEvent`] and returns the side effects the view layer has to carry out
//! (timers, icon refresh). Nothing in here touches the DOM.

use rand::Rng;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Captcha {
    pub first: u32,
    pub second: u32,
}

impl Captcha {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            first: rng.gen_range(1..=10),
            second: rng.gen_range(1..=5),
        }
    }

    pub fn answer(&self) -> i64 {
        i64::from(self.first) + i64::from(self.second)
    }

    pub fn prompt(&self) -> String {
        format!("Confirm you are not a robot: {} + {} =", self.first, self.second)
    }

    /// `None` parses never match, so junk input is always rejected.
    pub fn accepts(&self, input: &str) -> bool {
        parse_int_prefix(input) == Some(self.answer())
    }
}

/// Integer-prefix parse: leading whitespace, an optional sign, an optional
/// `0x`/`0X` hex prefix, then as many digits as follow. `" 12abc"` is 12,
/// `"0xF"` is 15, `"abc"`, `"0x"` and `""` are `None`.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let digits_len = rest
        .chars()
        .take_while(|c| c.is_digit(radix))
        .count();
    if digits_len == 0 {
        return None;
    }
    let value = i64::from_str_radix(&rest[..digits_len], radix).ok()?;
    Some(if negative { -value } else { value })
}

pub fn sanitize_phone(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Error,
    Success,
}

impl Severity {
    pub fn class(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Success => "success",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub id: u64,
    pub text: String,
    pub severity: Severity,
}

impl StatusMessage {
    pub fn class(&self) -> String {
        format!("form-status {}", self.severity.class())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Email,
    Message,
    Captcha,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub message: String,
    pub captcha: String,
}

impl FormFields {
    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
            Field::Captcha => &mut self.captcha,
        }
    }

    pub fn clear(&mut self) {
        *self = FormFields::default();
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    Input { field: Field, value: String },
    Submit,
    SubmitCompleted,
    StatusExpired { id: u64 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Fire [`FormEvent::SubmitCompleted`] after the delay.
    ScheduleSubmitCompletion { after_ms: u32 },
    /// Fire [`FormEvent::StatusExpired`] for `id` after the delay. Replaces any
    /// pending hide.
    ScheduleStatusHide { id: u64, after_ms: u32 },
    RefreshIcons,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitControl {
    pub disabled: bool,
    pub label: String,
    saved_label: Option<String>,
}

impl SubmitControl {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            disabled: false,
            label: label.into(),
            saved_label: None,
        }
    }

    pub fn in_flight(&self) -> bool {
        self.saved_label.is_some()
    }

    fn begin(&mut self, processing: &str) {
        self.saved_label = Some(std::mem::replace(&mut self.label, processing.to_string()));
        self.disabled = true;
    }

    fn finish(&mut self) {
        if let Some(label) = self.saved_label.take() {
            self.label = label;
        }
        self.disabled = false;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactSession {
    captcha: Captcha,
    pub fields: FormFields,
    pub submit: SubmitControl,
    pub status: Option<StatusMessage>,
    next_status_id: u64,
}

impl ContactSession {
    pub fn new(captcha: Captcha) -> Self {
        Self {
            captcha,
            fields: FormFields::default(),
            submit: SubmitControl::new(config::SUBMIT_LABEL),
            status: None,
            next_status_id: 0,
        }
    }

    pub fn with_rng<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(Captcha::generate(rng))
    }

    pub fn captcha(&self) -> Captcha {
        self.captcha
    }

    pub fn handle(&mut self, event: FormEvent) -> Vec<Effect> {
        match event {
            FormEvent::Input { field, value } => {
                let value = match field {
                    Field::Phone => sanitize_phone(&value),
                    _ => value,
                };
                *self.fields.slot(field) = value;
                Vec::new()
            }
            FormEvent::Submit => self.try_submit(),
            FormEvent::SubmitCompleted => {
                if !self.submit.in_flight() {
                    log::warn!("Submission completion arrived with nothing in flight");
                    return Vec::new();
                }
                self.fields.clear();
                self.submit.finish();
                let hide = self.show_status(config::SUBMIT_SUCCESS_MESSAGE, Severity::Success);
                vec![hide, Effect::RefreshIcons]
            }
            FormEvent::StatusExpired { id } => {
                if self.status.as_ref().map(|s| s.id) == Some(id) {
                    self.status = None;
                } else {
                    log::debug!("Ignoring stale status hide for message {}", id);
                }
                Vec::new()
            }
        }
    }

    fn try_submit(&mut self) -> Vec<Effect> {
        if self.submit.in_flight() {
            log::debug!("Submit ignored, a submission is already in flight");
            return Vec::new();
        }

        if !self.captcha.accepts(&self.fields.captcha) {
            log::info!("Contact form rejected: captcha mismatch");
            return vec![self.show_status(config::CAPTCHA_ERROR_MESSAGE, Severity::Error)];
        }

        log::info!("Contact form accepted, simulating submission");
        self.submit.begin(config::PROCESSING_LABEL);
        vec![Effect::ScheduleSubmitCompletion {
            after_ms: config::SUBMIT_DELAY_MS,
        }]
    }

    fn show_status(&mut self, text: &str, severity: Severity) -> Effect {
        self.next_status_id += 1;
        let id = self.next_status_id;
        self.status = Some(StatusMessage {
            id,
            text: text.to_string(),
            severity,
        });
        Effect::ScheduleStatusHide {
            id,
            after_ms: config::STATUS_HIDE_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn input(field: Field, value: &str) -> FormEvent {
        FormEvent::Input {
            field,
            value: value.to_string(),
        }
    }

    fn fill(session: &mut ContactSession, captcha: &str) {
        session.handle(input(Field::Name, "Ada"));
        session.handle(input(Field::Phone, "+1 (555) 010-99"));
        session.handle(input(Field::Email, "ada@example.com"));
        session.handle(input(Field::Message, "Hello"));
        session.handle(input(Field::Captcha, captcha));
    }

    #[test]
    fn captcha_operands_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let captcha = Captcha::generate(&mut rng);
            assert!((1..=10).contains(&captcha.first));
            assert!((1..=5).contains(&captcha.second));
            assert_eq!(captcha.answer(), i64::from(captcha.first + captcha.second));
        }
    }

    #[test]
    fn prompt_embeds_both_operands() {
        let captcha = Captcha { first: 7, second: 3 };
        assert_eq!(captcha.prompt(), "Confirm you are not a robot: 7 + 3 =");
    }

    #[test]
    fn int_prefix_parse_follows_leading_digits() {
        assert_eq!(parse_int_prefix("12"), Some(12));
        assert_eq!(parse_int_prefix("  12abc"), Some(12));
        assert_eq!(parse_int_prefix("3.9"), Some(3));
        assert_eq!(parse_int_prefix("-4"), Some(-4));
        assert_eq!(parse_int_prefix("+8"), Some(8));
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("  "), None);
    }

    #[test]
    fn int_prefix_parse_reads_hex_prefix() {
        assert_eq!(parse_int_prefix("0xF"), Some(15));
        assert_eq!(parse_int_prefix("0Xa"), Some(10));
        assert_eq!(parse_int_prefix("-0xa"), Some(-10));
        assert_eq!(parse_int_prefix(" 0x1fz"), Some(31));
        assert_eq!(parse_int_prefix("0x"), None);
        assert_eq!(parse_int_prefix("0xg"), None);
        assert_eq!(parse_int_prefix("007"), Some(7));

        let captcha = Captcha { first: 10, second: 5 };
        assert!(captcha.accepts("0xF"));
        assert!(!captcha.accepts("0x"));
    }

    #[test]
    fn phone_input_keeps_only_digits() {
        let mut session = ContactSession::new(Captcha { first: 1, second: 1 });
        for raw in ["+1 (555) 010", "abc", "٣٤5", "12\t34\n", "0042"] {
            session.handle(input(Field::Phone, raw));
            assert!(session.fields.phone.chars().all(|c| c.is_ascii_digit()));
        }
        session.handle(input(Field::Phone, "+7 (912) 345-67-89"));
        assert_eq!(session.fields.phone, "79123456789");
    }

    #[test]
    fn wrong_answer_shows_error_and_leaves_form_alone() {
        let mut session = ContactSession::new(Captcha { first: 4, second: 2 });
        fill(&mut session, "7");
        let before = session.fields.clone();

        let effects = session.handle(FormEvent::Submit);

        assert_eq!(
            effects,
            vec![Effect::ScheduleStatusHide { id: 1, after_ms: 6_000 }]
        );
        let status = session.status.clone().unwrap();
        assert_eq!(status.severity, Severity::Error);
        assert_eq!(status.class(), "form-status error");
        assert!(!session.submit.disabled);
        assert_eq!(session.submit.label, config::SUBMIT_LABEL);
        assert_eq!(session.fields, before);
    }

    #[test]
    fn non_numeric_answer_is_rejected() {
        let mut session = ContactSession::new(Captcha { first: 4, second: 2 });
        fill(&mut session, "six");
        session.handle(FormEvent::Submit);
        assert_eq!(session.status.as_ref().unwrap().severity, Severity::Error);
        assert!(!session.submit.in_flight());
    }

    #[test]
    fn failed_attempt_keeps_the_same_challenge() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut session = ContactSession::with_rng(&mut rng);
        let challenge = session.captcha();

        session.handle(input(Field::Captcha, "999"));
        session.handle(FormEvent::Submit);
        assert_eq!(session.captcha(), challenge);

        session.handle(input(Field::Captcha, &challenge.answer().to_string()));
        let effects = session.handle(FormEvent::Submit);
        assert_eq!(
            effects,
            vec![Effect::ScheduleSubmitCompletion { after_ms: 1_800 }]
        );
    }

    #[test]
    fn correct_answer_round_trip_restores_label_exactly() {
        let mut session = ContactSession::new(Captcha { first: 9, second: 5 });
        session.submit = SubmitControl::new("Send <i data-lucide=\"arrow-right\"></i>");
        fill(&mut session, " 14");

        let effects = session.handle(FormEvent::Submit);
        assert_eq!(
            effects,
            vec![Effect::ScheduleSubmitCompletion { after_ms: 1_800 }]
        );
        assert!(session.submit.disabled);
        assert_eq!(session.submit.label, config::PROCESSING_LABEL);
        assert_eq!(session.fields.name, "Ada");
        assert!(session.status.is_none());

        let effects = session.handle(FormEvent::SubmitCompleted);
        assert_eq!(
            effects,
            vec![
                Effect::ScheduleStatusHide { id: 1, after_ms: 6_000 },
                Effect::RefreshIcons,
            ]
        );
        assert!(!session.submit.disabled);
        assert_eq!(session.submit.label, "Send <i data-lucide=\"arrow-right\"></i>");
        assert_eq!(session.fields, FormFields::default());
        assert_eq!(session.status.as_ref().unwrap().severity, Severity::Success);
    }

    #[test]
    fn only_one_submission_in_flight() {
        let mut session = ContactSession::new(Captcha { first: 1, second: 1 });
        fill(&mut session, "2");
        assert_eq!(session.handle(FormEvent::Submit).len(), 1);
        assert!(session.handle(FormEvent::Submit).is_empty());
        assert_eq!(session.submit.label, config::PROCESSING_LABEL);

        session.handle(FormEvent::SubmitCompleted);
        assert!(session.handle(FormEvent::SubmitCompleted).is_empty());
        assert_eq!(session.submit.label, config::SUBMIT_LABEL);
    }

    #[test]
    fn stale_status_hide_does_not_clear_newer_message() {
        let mut session = ContactSession::new(Captcha { first: 1, second: 1 });
        session.handle(input(Field::Captcha, "5"));
        session.handle(FormEvent::Submit);
        session.handle(FormEvent::Submit);
        assert_eq!(session.status.as_ref().unwrap().id, 2);

        session.handle(FormEvent::StatusExpired { id: 1 });
        assert!(session.status.is_some());

        session.handle(FormEvent::StatusExpired { id: 2 });
        assert!(session.status.is_none());
    }
}
