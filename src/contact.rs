use std::fmt;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Form control name, as submitted by the browser.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Name => "Your name",
            Field::Email => "your.email@example.com",
            Field::Subject => "Project collaboration, job opportunity, etc.",
            Field::Message => "Tell me about your project or what you'd like to discuss...",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// First required field left empty, in form order.
    pub fn first_missing(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| self.get(*f).is_empty())
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|f| self.get(f).is_empty())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Idle => "idle",
            Phase::Submitting => "sending",
            Phase::Submitted => "sent",
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(Field),
    #[error("message is already {0}")]
    Busy(Phase),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactTiming {
    /// How long the message spends "sending".
    pub sending: Duration,
    /// How long the confirmation stays up before the form returns.
    pub acknowledged: Duration,
}

impl Default for ContactTiming {
    fn default() -> Self {
        Self {
            sending: Duration::from_millis(2000),
            acknowledged: Duration::from_millis(3000),
        }
    }
}

/// A scheduled phase transition. Only honoured while the controller is still
/// in `from` and on the generation that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    from: Phase,
}

impl Ticket {
    pub fn delay(&self, timing: &ContactTiming) -> Duration {
        match self.from {
            Phase::Submitted => timing.acknowledged,
            _ => timing.sending,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormController {
    form: ContactForm,
    phase: Phase,
    generation: u64,
}

impl ContactFormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn can_submit(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Start sending the current form. On success the caller must schedule the
    /// returned ticket and hand it back to [`Self::fire`] once its delay elapses.
    pub fn submit(&mut self) -> Result<Ticket, ContactError> {
        if self.phase != Phase::Idle {
            return Err(ContactError::Busy(self.phase));
        }
        if let Some(field) = self.form.first_missing() {
            return Err(ContactError::MissingField(field));
        }
        self.generation += 1;
        self.phase = Phase::Submitting;
        log::debug!("contact form submitting (generation {})", self.generation);
        // TODO: hand the form to a delivery backend here once one exists
        Ok(Ticket {
            generation: self.generation,
            from: Phase::Submitting,
        })
    }

    /// Apply a scheduled transition. Returns the follow-up ticket, if any.
    /// Stale tickets are ignored.
    pub fn fire(&mut self, ticket: Ticket) -> Option<Ticket> {
        if ticket.generation != self.generation || ticket.from != self.phase {
            log::debug!(
                "ignoring stale {:?} ticket (generation {} vs {})",
                ticket.from,
                ticket.generation,
                self.generation
            );
            return None;
        }
        match self.phase {
            Phase::Submitting => {
                self.phase = Phase::Submitted;
                self.form = ContactForm::default();
                log::debug!("contact form sent");
                Some(Ticket {
                    generation: self.generation,
                    from: Phase::Submitted,
                })
            }
            Phase::Submitted => {
                self.phase = Phase::Idle;
                None
            }
            Phase::Idle => None,
        }
    }

    /// Invalidate every outstanding ticket. Called when the view goes away.
    pub fn dispose(&mut self) {
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormController {
        let mut c = ContactFormController::new();
        c.set_field(Field::Name, "Jane");
        c.set_field(Field::Email, "jane@x.com");
        c.set_field(Field::Subject, "Hi");
        c.set_field(Field::Message, "Hello");
        c
    }

    #[test]
    fn test_full_lifecycle() {
        let mut c = filled();
        assert_eq!(c.phase(), Phase::Idle);

        let ticket = c.submit().expect("valid form should submit");
        assert_eq!(c.phase(), Phase::Submitting);
        // fields are kept while sending
        assert_eq!(c.form().name, "Jane");

        let ticket = c.fire(ticket).expect("should schedule the reset");
        assert_eq!(c.phase(), Phase::Submitted);
        assert!(c.form().is_empty());

        assert!(c.fire(ticket).is_none());
        assert_eq!(c.phase(), Phase::Idle);
        assert!(c.can_submit());
    }

    #[test]
    fn test_ticket_delays() {
        let timing = ContactTiming::default();
        let mut c = filled();
        let t1 = c.submit().unwrap();
        assert_eq!(t1.delay(&timing), Duration::from_secs(2));
        let t2 = c.fire(t1).unwrap();
        assert_eq!(t2.delay(&timing), Duration::from_secs(3));
    }

    #[test]
    fn test_missing_field_rejected() {
        let mut c = filled();
        c.set_field(Field::Message, "");
        assert_eq!(c.submit(), Err(ContactError::MissingField(Field::Message)));
        assert_eq!(c.phase(), Phase::Idle);
        assert_eq!(c.form().name, "Jane");

        let mut empty = ContactFormController::new();
        assert_eq!(empty.submit(), Err(ContactError::MissingField(Field::Name)));
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let mut c = filled();
        c.set_field(Field::Subject, " ");
        assert!(c.submit().is_ok());
    }

    #[test]
    fn test_second_submit_ignored() {
        let mut c = filled();
        let ticket = c.submit().unwrap();
        assert_eq!(c.submit(), Err(ContactError::Busy(Phase::Submitting)));

        let reset = c.fire(ticket).unwrap();
        // replaying the first ticket does not clear or transition again
        c.set_field(Field::Name, "typed after send");
        assert!(c.fire(ticket).is_none());
        assert_eq!(c.phase(), Phase::Submitted);
        assert_eq!(c.form().name, "typed after send");

        assert_eq!(c.submit(), Err(ContactError::Busy(Phase::Submitted)));
        c.fire(reset);
        assert_eq!(c.phase(), Phase::Idle);
    }

    #[test]
    fn test_dispose_makes_tickets_stale() {
        let mut c = filled();
        let ticket = c.submit().unwrap();
        c.dispose();
        assert!(c.fire(ticket).is_none());
        assert_eq!(c.phase(), Phase::Submitting);
        assert_eq!(c.form().message, "Hello");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::MissingField(Field::Email).to_string(),
            "email is required"
        );
        assert_eq!(
            ContactError::Busy(Phase::Submitting).to_string(),
            "message is already sending"
        );
    }
}
