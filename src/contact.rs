mod fields;
mod sender;

pub use fields::{is_valid_email, Field, FormFields, ValidationError, EMAIL_INPUT_PATTERN};
pub use sender::{delay, MessageSender, SendError, SimulatedSender};

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

pub const SUCCESS_MESSAGE: &str = "Your message has been sent successfully!";
pub const ERROR_MESSAGE: &str = "There was an error sending your message. Please try again.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("a submission is already in flight")]
    InFlight,
}

impl SubmitError {
    /// Invalid input is routine; a second submit while busy means the trigger wasn't disabled.
    pub fn log_level(&self) -> log::Level {
        match self {
            SubmitError::Invalid(_) => log::Level::Debug,
            SubmitError::InFlight => log::Level::Warn,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success,
    Error,
}

/// Identifies one displayed status so its auto-dismiss timer can't clear a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DismissTicket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Submitting,
    Settled { sent: bool, ticket: DismissTicket },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionController {
    phase: Phase,
    next_ticket: u64,
}

impl Default for SubmissionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionController {
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            next_ticket: 0,
        }
    }

    pub fn state(&self) -> SubmissionState {
        match self.phase {
            Phase::Idle => SubmissionState::Idle,
            Phase::Submitting => SubmissionState::Submitting,
            Phase::Settled { sent: true, .. } => SubmissionState::Success,
            Phase::Settled { sent: false, .. } => SubmissionState::Error,
        }
    }

    /// True while a send is outstanding; the submit trigger is disabled exactly then.
    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn banner(&self) -> Option<&'static str> {
        match self.state() {
            SubmissionState::Success => Some(SUCCESS_MESSAGE),
            SubmissionState::Error => Some(ERROR_MESSAGE),
            SubmissionState::Idle | SubmissionState::Submitting => None,
        }
    }

    /// Starts a submission. Leaves the state untouched when busy or when `fields` is invalid.
    pub fn begin(&mut self, fields: &FormFields) -> Result<(), SubmitError> {
        if self.is_busy() {
            return Err(SubmitError::InFlight);
        }
        fields.validate()?;
        log::debug!("contact form: {:?} -> Submitting", self.state());
        self.phase = Phase::Submitting;
        Ok(())
    }

    /// Records the send outcome. Fields are cleared only when the message went out.
    pub fn finish(
        &mut self,
        outcome: Result<(), SendError>,
        fields: &mut FormFields,
    ) -> DismissTicket {
        let sent = outcome.is_ok();
        if sent {
            fields.clear();
        }
        let ticket = DismissTicket(self.next_ticket);
        self.next_ticket += 1;
        self.phase = Phase::Settled { sent, ticket };
        log::debug!("contact form: Submitting -> {:?}", self.state());
        ticket
    }

    /// Returns to idle if the status shown is still the one `ticket` was issued for.
    pub fn dismiss(&mut self, ticket: DismissTicket) -> bool {
        match self.phase {
            Phase::Settled { ticket: shown, .. } if shown == ticket => {
                self.phase = Phase::Idle;
                true
            }
            _ => false,
        }
    }
}

/// Where the submission driver keeps the controller and the fields between awaits.
pub trait ContactStore {
    fn with_form<R>(&self, f: impl FnOnce(&mut SubmissionController, &mut FormFields) -> R) -> R;
}

/// Moves to `Submitting` right away, then returns the rest of the submission as a future.
///
/// The future sends a snapshot of the fields and records the outcome. The
/// resulting banner stays up for `dismiss_after`, after which its own ticket
/// clears it. Resolves to whether that clear happened; a newer submission
/// keeps its banner.
pub fn submit<S, T>(
    sender: S,
    store: T,
    dismiss_after: Duration,
) -> Result<impl Future<Output = bool> + 'static, SubmitError>
where
    S: MessageSender + 'static,
    T: ContactStore + 'static,
{
    let snapshot = store.with_form(|controller, fields| {
        controller.begin(fields).map(|()| fields.clone())
    })?;
    Ok(async move {
        let outcome = sender.send(snapshot).await;
        if let Err(err) = &outcome {
            log::warn!("contact message was not sent: {err}");
        }
        let ticket = store.with_form(|controller, fields| controller.finish(outcome, fields));
        delay(dismiss_after).await;
        store.with_form(|controller, _| controller.dismiss(ticket))
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use futures::executor::block_on;

    use super::*;

    /// Records the state after every access so tests can check the whole path.
    #[derive(Clone, Default)]
    struct CellStore {
        form: Rc<RefCell<(SubmissionController, FormFields)>>,
        history: Rc<RefCell<Vec<SubmissionState>>>,
    }

    impl CellStore {
        fn with_fields(fields: FormFields) -> Self {
            Self {
                form: Rc::new(RefCell::new((SubmissionController::new(), fields))),
                ..Self::default()
            }
        }

        fn state(&self) -> SubmissionState {
            self.form.borrow().0.state()
        }

        fn fields(&self) -> FormFields {
            self.form.borrow().1.clone()
        }

        fn history(&self) -> Vec<SubmissionState> {
            self.history.borrow().clone()
        }
    }

    impl ContactStore for CellStore {
        fn with_form<R>(
            &self,
            f: impl FnOnce(&mut SubmissionController, &mut FormFields) -> R,
        ) -> R {
            let mut inner = self.form.borrow_mut();
            let (controller, fields) = &mut *inner;
            let res = f(controller, fields);
            self.history.borrow_mut().push(controller.state());
            res
        }
    }

    fn jo() -> FormFields {
        FormFields::new("Jo", "jo@x.com", "Hi", "Hello")
    }

    fn ok_sender() -> SimulatedSender {
        SimulatedSender::new(Duration::ZERO)
    }

    fn failing_sender() -> SimulatedSender {
        SimulatedSender::failing(Duration::ZERO, SendError::Unavailable)
    }

    #[test]
    fn test_begin_moves_to_submitting() {
        let mut controller = SubmissionController::new();
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert!(!controller.is_busy());

        controller.begin(&jo()).expect("valid fields should submit");
        assert_eq!(controller.state(), SubmissionState::Submitting);
        assert!(controller.is_busy());
        assert_eq!(controller.banner(), None);
    }

    #[test]
    fn test_begin_rejects_reentry() {
        let mut controller = SubmissionController::new();
        controller.begin(&jo()).unwrap();
        assert_eq!(controller.begin(&jo()), Err(SubmitError::InFlight));
        assert_eq!(controller.state(), SubmissionState::Submitting);
    }

    #[test]
    fn test_invalid_fields_leave_state_alone() {
        let mut controller = SubmissionController::new();
        let no_name = FormFields::new("", "jo@x.com", "Hi", "Hello");
        assert_eq!(
            controller.begin(&no_name),
            Err(SubmitError::Invalid(ValidationError::Empty(Field::Name)))
        );
        assert_eq!(controller.state(), SubmissionState::Idle);

        let bad_email = FormFields::new("Jo", "jo@", "Hi", "Hello");
        assert_eq!(
            controller.begin(&bad_email),
            Err(SubmitError::Invalid(ValidationError::MalformedEmail))
        );
        assert_eq!(controller.state(), SubmissionState::Idle);

        // an error banner stays up when a resubmit is blocked
        let mut fields = jo();
        controller.begin(&fields).unwrap();
        controller.finish(Err(SendError::Unavailable), &mut fields);
        fields.set(Field::Message, "");
        assert!(controller.begin(&fields).is_err());
        assert_eq!(controller.state(), SubmissionState::Error);
    }

    #[test]
    fn test_finish_success_clears_fields() {
        let mut controller = SubmissionController::new();
        let mut fields = jo();
        controller.begin(&fields).unwrap();
        let ticket = controller.finish(Ok(()), &mut fields);

        assert_eq!(controller.state(), SubmissionState::Success);
        assert_eq!(controller.banner(), Some(SUCCESS_MESSAGE));
        assert!(fields.is_empty());

        assert!(controller.dismiss(ticket));
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(controller.banner(), None);
    }

    #[test]
    fn test_finish_error_keeps_fields() {
        let mut controller = SubmissionController::new();
        let mut fields = jo();
        controller.begin(&fields).unwrap();
        let ticket = controller.finish(Err(SendError::Rejected("spam".into())), &mut fields);

        assert_eq!(controller.state(), SubmissionState::Error);
        assert_eq!(controller.banner(), Some(ERROR_MESSAGE));
        assert_eq!(fields, jo());

        assert!(controller.dismiss(ticket));
        assert_eq!(controller.state(), SubmissionState::Idle);
        assert_eq!(fields, jo());
    }

    #[test]
    fn test_stale_ticket_does_not_clear_newer_status() {
        let mut controller = SubmissionController::new();
        let mut fields = jo();
        controller.begin(&fields).unwrap();
        let first = controller.finish(Err(SendError::Unavailable), &mut fields);

        controller.begin(&fields).unwrap();
        let second = controller.finish(Ok(()), &mut fields);
        assert_ne!(first, second);

        assert!(!controller.dismiss(first));
        assert_eq!(controller.state(), SubmissionState::Success);
        assert!(controller.dismiss(second));
        assert_eq!(controller.state(), SubmissionState::Idle);
        // already idle; a late duplicate does nothing
        assert!(!controller.dismiss(second));
    }

    #[test]
    fn test_stale_ticket_ignored_while_submitting() {
        let mut controller = SubmissionController::new();
        let mut fields = jo();
        controller.begin(&fields).unwrap();
        let first = controller.finish(Err(SendError::Unavailable), &mut fields);
        controller.begin(&fields).unwrap();

        assert!(!controller.dismiss(first));
        assert!(controller.is_busy());
    }

    #[test]
    fn test_submit_success_scenario() {
        let store = CellStore::with_fields(jo());
        let pending =
            submit(ok_sender(), store.clone(), Duration::ZERO).expect("valid fields should submit");
        assert_eq!(store.state(), SubmissionState::Submitting);

        assert!(block_on(pending));
        assert_eq!(
            store.history(),
            [
                SubmissionState::Submitting,
                SubmissionState::Success,
                SubmissionState::Idle
            ]
        );
        assert_eq!(store.fields(), FormFields::default());
    }

    #[test]
    fn test_submit_blocked_scenario() {
        let store = CellStore::with_fields(FormFields::new("", "jo@x.com", "Hi", "Hello"));
        let res = submit(ok_sender(), store.clone(), Duration::ZERO);
        assert!(matches!(
            res,
            Err(SubmitError::Invalid(ValidationError::Empty(Field::Name)))
        ));
        assert_eq!(store.history(), [SubmissionState::Idle]);
    }

    #[test]
    fn test_submit_rejected_scenario() {
        let store = CellStore::with_fields(jo());
        let pending = submit(failing_sender(), store.clone(), Duration::ZERO).unwrap();
        assert!(block_on(pending));
        assert_eq!(
            store.history(),
            [
                SubmissionState::Submitting,
                SubmissionState::Error,
                SubmissionState::Idle
            ]
        );
        // still there for another try
        assert_eq!(store.fields(), jo());
        assert!(submit(ok_sender(), store.clone(), Duration::ZERO).is_ok());
    }

    #[test]
    fn test_submit_while_in_flight() {
        let store = CellStore::with_fields(jo());
        let pending = submit(ok_sender(), store.clone(), Duration::ZERO).unwrap();
        let err = submit(ok_sender(), store.clone(), Duration::ZERO).err().unwrap();
        assert_eq!(err, SubmitError::InFlight);
        assert_eq!(err.log_level(), log::Level::Warn);

        block_on(pending);
        assert_eq!(store.state(), SubmissionState::Idle);
        assert_eq!(store.fields(), FormFields::default());
    }

    #[test]
    fn test_blocked_begin_changes_nothing() {
        let mut controller = SubmissionController::new();
        controller.begin(&jo()).unwrap();
        let before = controller.clone();
        assert!(controller.begin(&jo()).is_err());
        assert_eq!(controller, before);

        let mut idle = SubmissionController::new();
        assert!(idle.begin(&FormFields::default()).is_err());
        assert_eq!(idle, SubmissionController::new());
    }

    #[test]
    fn test_submit_error_log_level() {
        assert_eq!(SubmitError::InFlight.log_level(), log::Level::Warn);
        assert_eq!(
            SubmitError::from(ValidationError::MalformedEmail).log_level(),
            log::Level::Debug
        );
    }

    #[test]
    fn test_default_store_is_idle() {
        let store = CellStore::default();
        assert_eq!(store.state(), SubmissionState::Idle);
        assert!(store.fields().is_empty());
    }
}
