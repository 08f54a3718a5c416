use std::fmt;

use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub fn all() -> [Field; 4] {
        [Field::Name, Field::Email, Field::Subject, Field::Message]
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    // presence only, the same check as the browser's `required`: a field holding
    // nothing but spaces counts as filled
    pub fn missing(&self) -> Vec<Field> {
        Field::all()
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == ContactDraft::default()
    }
}

// identifies one submission, so that a reset scheduled for an earlier submission
// cannot clear a later one
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubmitTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitted(SubmitTicket),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    // the caller owns the reset: schedule exactly one expire() with this ticket
    Accepted(SubmitTicket),
    AlreadySubmitted,
    Incomplete(Vec<Field>),
}

// contact form
//
// this is a mock: submit() never sends the draft anywhere, it only flips the form
// into its confirmation phase.  the cycle is editing -> submitted -> editing, and
// the way back is driven by a single timer that the caller starts when it sees
// SubmitOutcome::Accepted
#[derive(Clone, Debug, PartialEq)]
pub struct ContactForm {
    draft: ContactDraft,
    phase: FormPhase,
    next_ticket: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        ContactForm {
            draft: ContactDraft::default(),
            phase: FormPhase::Editing,
            next_ticket: 0,
        }
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitted(&self) -> bool {
        matches!(self.phase, FormPhase::Submitted(_))
    }

    /// Returns false, leaving the draft untouched, while the confirmation is shown.
    pub fn set_field(&mut self, field: Field, value: String) -> bool {
        if self.is_submitted() {
            return false;
        }

        *self.draft.slot(field) = value;
        true
    }

    pub fn submit(&mut self) -> SubmitOutcome {
        if self.is_submitted() {
            debug!("contact form already submitted, ignoring");
            return SubmitOutcome::AlreadySubmitted;
        }

        let missing = self.draft.missing();
        if !missing.is_empty() {
            debug!({ missing = ?missing }, "contact form incomplete");
            return SubmitOutcome::Incomplete(missing);
        }

        let ticket = SubmitTicket(self.next_ticket);
        self.next_ticket += 1;
        self.phase = FormPhase::Submitted(ticket);

        info!({ subject = %self.draft.subject }, "contact form submitted (not delivered)");
        SubmitOutcome::Accepted(ticket)
    }

    /// Ends the confirmation started by `ticket`; stale tickets are ignored.
    pub fn expire(&mut self, ticket: SubmitTicket) -> bool {
        match self.phase {
            FormPhase::Submitted(current) if current == ticket => {
                self.draft = ContactDraft::default();
                self.phase = FormPhase::Editing;
                debug!("contact form reset");
                true
            }
            _ => false,
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        ContactForm::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, String::from("Ada"));
        form.set_field(Field::Email, String::from("ada@example.com"));
        form.set_field(Field::Subject, String::from("Hello"));
        form.set_field(Field::Message, String::from("Let's build something"));
        form
    }

    #[test]
    fn submit_then_expire_returns_to_an_empty_draft() {
        let mut form = filled();

        let SubmitOutcome::Accepted(ticket) = form.submit() else {
            panic!("filled form should be accepted");
        };
        assert_eq!(form.phase(), FormPhase::Submitted(ticket));
        assert_eq!(form.draft().name, "Ada");

        assert!(form.expire(ticket));
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.draft().is_empty());
    }

    #[test]
    fn second_submit_does_not_start_another_cycle() {
        let mut form = filled();

        let SubmitOutcome::Accepted(ticket) = form.submit() else {
            panic!("filled form should be accepted");
        };
        assert_eq!(form.submit(), SubmitOutcome::AlreadySubmitted);
        assert_eq!(form.phase(), FormPhase::Submitted(ticket));

        assert!(form.expire(ticket));
        assert!(!form.expire(ticket));
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn stale_ticket_does_not_reset_a_later_submission() {
        let mut form = filled();

        let SubmitOutcome::Accepted(first) = form.submit() else {
            panic!("filled form should be accepted");
        };
        assert!(form.expire(first));

        for field in Field::all() {
            form.set_field(field, String::from("again"));
        }
        let SubmitOutcome::Accepted(second) = form.submit() else {
            panic!("refilled form should be accepted");
        };
        assert_ne!(first, second);

        assert!(!form.expire(first));
        assert_eq!(form.phase(), FormPhase::Submitted(second));
        assert_eq!(form.draft().message, "again");
    }

    #[test]
    fn empty_fields_block_submission() {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, String::from("Ada"));

        assert_eq!(
            form.submit(),
            SubmitOutcome::Incomplete(vec![Field::Email, Field::Subject, Field::Message])
        );
        assert_eq!(form.phase(), FormPhase::Editing);
    }

    #[test]
    fn whitespace_counts_as_present() {
        let mut form = ContactForm::new();
        form.set_field(Field::Name, String::from("Ada"));
        form.set_field(Field::Email, String::from("ada@example.com"));
        form.set_field(Field::Subject, String::from(" "));
        form.set_field(Field::Message, String::from("Let's build something"));

        assert!(form.draft().missing().is_empty());
        assert!(matches!(form.submit(), SubmitOutcome::Accepted(_)));
        assert!(form.is_submitted());
    }

    #[test]
    fn edits_are_ignored_while_submitted() {
        let mut form = filled();
        form.submit();

        assert!(!form.set_field(Field::Name, String::from("Grace")));
        assert_eq!(form.draft().name, "Ada");
    }
}
