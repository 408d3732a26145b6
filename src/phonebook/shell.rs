//! # Interaction Shell
//!
//! The front-end-independent half of the phone book form: two input fields, four actions,
//! and the rules that connect them to the API.
//!
//! A UI fills the [`Form`], turns a button press, key or typed command into an [`Action`], and
//! calls [`Shell::trigger`]. The shell checks the required fields, calls the API, asks the
//! supplied [`Confirm`] before overwriting a stored number, and clears the form. The result
//! is an [`Outcome`] for the UI to display:
//!
//! - [`Outcome::Warning`]: a required field was empty. Show it as a warning and leave the
//!   output area as it was.
//! - [`Outcome::Render`]: a command ran (or was cancelled). Its result replaces the output
//!   area.
//!
//! `trigger` takes `&mut self`, so one action (confirmation prompt included) always finishes
//! before the next one can start.

use crate::api::{AddAttempt, CmdMessage, CmdResult, PhonebookApi};
use crate::error::Result;
use crate::model::Collision;
use crate::store::DirectoryStore;

pub const ADD_NEEDS_BOTH: &str = "Enter both a name and a number to add an entry.";
pub const DELETE_NEEDS_NAME: &str = "Enter a name to delete.";
pub const SEARCH_NEEDS_TERM: &str = "Enter a name to search for.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Delete,
    /// Uses the name field as the search text
    Search,
    ShowAll,
}

/// The two text inputs of the form.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Form {
    pub name: String,
    pub number: String,
}

impl Form {
    pub fn new(name: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            number: number.into(),
        }
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.number.clear();
    }

    pub fn is_clear(&self) -> bool {
        self.name.is_empty() && self.number.is_empty()
    }
}

/// Asks the user whether an existing number may be overwritten.
pub trait Confirm {
    fn confirm_overwrite(&mut self, collision: &Collision) -> Result<bool>;
}

impl<F> Confirm for F
where
    F: FnMut(&Collision) -> Result<bool>,
{
    fn confirm_overwrite(&mut self, collision: &Collision) -> Result<bool> {
        self(collision)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Warning(CmdMessage),
    Render(CmdResult),
}

/// Runs one action against the form contents. Does not touch the form.
pub fn dispatch<S, C>(
    api: &mut PhonebookApi<S>,
    form: &Form,
    action: Action,
    confirm: &mut C,
) -> Result<Outcome>
where
    S: DirectoryStore,
    C: Confirm + ?Sized,
{
    let name = form.name.trim();
    let number = form.number.trim();
    tracing::debug!(?action, name, number, "dispatching");

    let outcome = match action {
        Action::Add => {
            if name.is_empty() || number.is_empty() {
                return Ok(warning(ADD_NEEDS_BOTH));
            }
            match api.add_entry(name, number)? {
                AddAttempt::Applied(result) => result,
                AddAttempt::NeedsConfirmation(collision) => {
                    if confirm.confirm_overwrite(&collision)? {
                        api.upsert_entry(&collision.name, &collision.proposed)?
                    } else {
                        api.cancel_add(&collision)
                    }
                }
            }
        }
        Action::Delete => {
            if name.is_empty() {
                return Ok(warning(DELETE_NEEDS_NAME));
            }
            api.delete_entry(name)?
        }
        Action::Search => {
            if name.is_empty() {
                return Ok(warning(SEARCH_NEEDS_TERM));
            }
            api.search_entries(name)?
        }
        Action::ShowAll => api.list_entries()?,
    };

    Ok(Outcome::Render(outcome))
}

fn warning(content: &str) -> Outcome {
    Outcome::Warning(CmdMessage::warning(content))
}

/// Owns the API (and through it the directory) plus the form state for one session.
pub struct Shell<S: DirectoryStore> {
    api: PhonebookApi<S>,
    form: Form,
}

impl<S: DirectoryStore> Shell<S> {
    pub fn new(api: PhonebookApi<S>) -> Self {
        Self {
            api,
            form: Form::default(),
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Form {
        &mut self.form
    }

    pub fn api(&self) -> &PhonebookApi<S> {
        &self.api
    }

    /// Runs `action` and clears both fields, whatever the result.
    pub fn trigger<C: Confirm + ?Sized>(
        &mut self,
        action: Action,
        confirm: &mut C,
    ) -> Result<Outcome> {
        let outcome = dispatch(&mut self.api, &self.form, action, confirm);
        self.form.clear();
        outcome
    }

    /// Fills the form and triggers in one step.
    pub fn submit<C: Confirm + ?Sized>(
        &mut self,
        action: Action,
        form: Form,
        confirm: &mut C,
    ) -> Result<Outcome> {
        self.form = form;
        self.trigger(action, confirm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MessageLevel;
    use crate::error::PhonebookError;
    use crate::model::UpsertKind;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn seeded_shell() -> Shell<InMemoryStore> {
        Shell::new(PhonebookApi::new(InMemoryStore::seeded()))
    }

    fn never_asked(c: &Collision) -> Result<bool> {
        panic!("confirmation not expected for {:?}", c)
    }

    fn answer(yes: bool) -> impl FnMut(&Collision) -> Result<bool> {
        move |_| Ok(yes)
    }

    fn rendered(outcome: Outcome) -> CmdResult {
        match outcome {
            Outcome::Render(result) => result,
            Outcome::Warning(w) => panic!("unexpected warning: {}", w.content),
        }
    }

    fn warned(outcome: Outcome) -> CmdMessage {
        match outcome {
            Outcome::Warning(w) => w,
            Outcome::Render(r) => panic!("expected a warning, got {:?}", r),
        }
    }

    #[test]
    fn show_all_lists_seed_entries() {
        let mut shell = seeded_shell();
        let result = rendered(shell.trigger(Action::ShowAll, &mut never_asked).unwrap());
        assert_eq!(result.listing.unwrap().len(), 4);
    }

    #[test]
    fn add_new_name() {
        let mut shell = seeded_shell();
        let result = rendered(
            shell
                .submit(Action::Add, Form::new("Ann", "555-0001"), &mut never_asked)
                .unwrap(),
        );

        assert_eq!(result.upsert, Some(UpsertKind::Inserted));
        assert_eq!(shell.api().store().len(), 5);
        assert_eq!(shell.api().store().get("Ann"), Some("555-0001"));
    }

    #[test]
    fn overwrite_confirmed() {
        let mut shell = Shell::new(PhonebookApi::new(
            StoreFixture::seeded().with_entry("Ann", "555-0001").store,
        ));
        let mut asked = Vec::new();
        let mut confirm = |c: &Collision| -> Result<bool> {
            asked.push(c.clone());
            Ok(true)
        };

        let result = rendered(
            shell
                .submit(Action::Add, Form::new("Ann", "555-9999"), &mut confirm)
                .unwrap(),
        );

        assert_eq!(result.upsert, Some(UpsertKind::Updated));
        assert_eq!(shell.api().store().get("Ann"), Some("555-9999"));
        assert_eq!(asked.len(), 1);
        assert_eq!(asked[0].existing, "555-0001");
        assert_eq!(asked[0].proposed, "555-9999");
    }

    #[test]
    fn overwrite_declined() {
        let mut shell = Shell::new(PhonebookApi::new(
            StoreFixture::seeded().with_entry("Ann", "555-0001").store,
        ));

        let result = rendered(
            shell
                .submit(Action::Add, Form::new("Ann", "555-9999"), &mut answer(false))
                .unwrap(),
        );

        assert_eq!(result.messages[0].content, "Operation cancelled.");
        assert_eq!(shell.api().store().get("Ann"), Some("555-0001"));
        assert!(shell.form().is_clear());
    }

    #[test]
    fn delete_absent_name() {
        let mut shell = seeded_shell();
        let result = rendered(
            shell
                .submit(Action::Delete, Form::new("Zed", ""), &mut never_asked)
                .unwrap(),
        );
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(shell.api().store().len(), 4);
    }

    #[test]
    fn empty_fields_warn_without_touching_store() {
        let mut shell = seeded_shell();

        let add = warned(
            shell
                .submit(Action::Add, Form::new("Ann", "  "), &mut never_asked)
                .unwrap(),
        );
        let delete = warned(shell.trigger(Action::Delete, &mut never_asked).unwrap());
        let search = warned(
            shell
                .submit(Action::Search, Form::new("", "555"), &mut never_asked)
                .unwrap(),
        );

        assert_eq!(add.content, ADD_NEEDS_BOTH);
        assert_eq!(delete.content, DELETE_NEEDS_NAME);
        assert_eq!(search.content, SEARCH_NEEDS_TERM);
        assert_eq!(add.level, MessageLevel::Warning);
        assert_eq!(shell.api().store().len(), 4);
    }

    #[test]
    fn search_uses_name_field() {
        let mut shell = seeded_shell();
        let listing = rendered(
            shell
                .submit(Action::Search, Form::new("민", "ignored"), &mut never_asked)
                .unwrap(),
        )
        .listing
        .unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing.entries[0].name, "최민호");
    }

    #[test]
    fn form_is_cleared_after_every_trigger() {
        let mut shell = seeded_shell();
        for action in [Action::Add, Action::Delete, Action::Search, Action::ShowAll] {
            shell.form_mut().name = "Nobody".into();
            shell.form_mut().number = String::new();
            shell.trigger(action, &mut answer(true)).unwrap();
            assert!(shell.form().is_clear(), "form not cleared after {:?}", action);
        }
    }

    #[test]
    fn form_is_cleared_when_confirmation_fails() {
        let mut shell = seeded_shell();
        let mut broken = |_: &Collision| -> Result<bool> {
            Err(PhonebookError::Io(std::io::Error::other("terminal closed")))
        };

        let err = shell
            .submit(Action::Add, Form::new("김동현", "010-0000-0000"), &mut broken)
            .unwrap_err();

        assert!(matches!(err, PhonebookError::Io(_)));
        assert!(shell.form().is_clear());
        assert_eq!(shell.api().store().get("김동현"), Some("010-1234-5678"));
    }

    #[test]
    fn dispatch_leaves_form_untouched() {
        let mut api = PhonebookApi::new(InMemoryStore::new());
        let form = Form::new("Ann", "1");
        dispatch(&mut api, &form, Action::Add, &mut never_asked).unwrap();
        assert_eq!(form, Form::new("Ann", "1"));
        assert_eq!(api.store().get("Ann"), Some("1"));
    }
}
