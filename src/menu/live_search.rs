//! Text field that validates itself after a pause in typing.

use std::cell::Cell;
use std::rc::Rc;

use super::dom::Scheduler;

pub type Validator = Rc<dyn Fn(&str) -> bool>;

/// Keeps only the most recent scheduled validation alive
#[derive(Clone, Default)]
pub struct Debouncer {
    generation: Rc<Cell<u64>>,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invalidate earlier tickets and hand out a new one
    pub fn bump(&self) -> u64 {
        let next = self.generation.get() + 1;
        self.generation.set(next);
        next
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.generation.get() == ticket
    }
}

/// Validated input: every keystroke restarts the validation delay, blur never
/// triggers validation.
pub struct LiveSearchField {
    validation_delay_ms: u32,
    validator: Validator,
    debouncer: Debouncer,
}

impl LiveSearchField {
    pub fn new(validation_delay_ms: u32, validator: Validator) -> Self {
        Self {
            validation_delay_ms,
            validator,
            debouncer: Debouncer::new(),
        }
    }

    /// Run the validator now
    pub fn validate(&self, value: &str) -> bool {
        (self.validator)(value)
    }

    /// Schedule validation of `value`, superseding any validation still pending
    pub fn on_keystroke(&self, value: String, scheduler: &dyn Scheduler) {
        let ticket = self.debouncer.bump();
        let debouncer = self.debouncer.clone();
        let validator = self.validator.clone();
        scheduler.schedule(
            self.validation_delay_ms,
            Box::new(move || {
                if debouncer.is_current(ticket) {
                    validator(&value);
                }
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::memory::ManualScheduler;
    use std::cell::RefCell;

    fn recording_field(delay: u32) -> (LiveSearchField, Rc<RefCell<Vec<String>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let field = LiveSearchField::new(
            delay,
            Rc::new(move |value: &str| {
                log.borrow_mut().push(value.to_string());
                true
            }),
        );
        (field, seen)
    }

    #[test]
    fn test_debouncer_only_last_ticket_is_current() {
        let debouncer = Debouncer::new();
        let first = debouncer.bump();
        let second = debouncer.bump();

        assert!(!debouncer.is_current(first));
        assert!(debouncer.is_current(second));
    }

    #[test]
    fn test_keystrokes_collapse_into_one_validation() {
        let scheduler = ManualScheduler::new();
        let (field, seen) = recording_field(1000);

        field.on_keystroke("a".to_string(), &scheduler);
        field.on_keystroke("ab".to_string(), &scheduler);
        field.on_keystroke("abb".to_string(), &scheduler);
        assert_eq!(scheduler.delays(), vec![1000, 1000, 1000]);

        scheduler.run_pending();

        assert_eq!(*seen.borrow(), vec!["abb".to_string()]);
    }

    #[test]
    fn test_pause_between_keystrokes_validates_each() {
        let scheduler = ManualScheduler::new();
        let (field, seen) = recording_field(250);

        field.on_keystroke("abb".to_string(), &scheduler);
        scheduler.run_pending();
        field.on_keystroke("abba".to_string(), &scheduler);
        scheduler.run_pending();

        assert_eq!(*seen.borrow(), vec!["abb".to_string(), "abba".to_string()]);
        assert!(field.validate("anything"));
    }
}
