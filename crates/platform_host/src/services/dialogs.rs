//! Blocking user-dialog contracts (confirmation and single-line prompts).

use std::{cell::RefCell, collections::VecDeque, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`DialogService`] async methods.
pub type DialogFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for modal confirmation and text prompts.
pub trait DialogService {
    /// Asks the user to confirm `message`. Returns `true` only on explicit acceptance.
    fn confirm<'a>(&'a self, message: &'a str) -> DialogFuture<'a, bool>;

    /// Asks the user for a line of text. Returns `None` when the prompt is dismissed.
    fn prompt<'a>(&'a self, message: &'a str) -> DialogFuture<'a, Option<String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Dialog adapter that declines every confirmation and dismisses every prompt.
pub struct NoopDialogService;

impl DialogService for NoopDialogService {
    fn confirm<'a>(&'a self, _message: &'a str) -> DialogFuture<'a, bool> {
        Box::pin(async { false })
    }

    fn prompt<'a>(&'a self, _message: &'a str) -> DialogFuture<'a, Option<String>> {
        Box::pin(async { None })
    }
}

#[derive(Debug, Clone, Default)]
/// Dialog adapter that replays queued answers, for tests.
///
/// An exhausted confirmation queue declines; an exhausted prompt queue dismisses.
pub struct ScriptedDialogService {
    confirms: Rc<RefCell<VecDeque<bool>>>,
    prompts: Rc<RefCell<VecDeque<Option<String>>>>,
    asked: Rc<RefCell<Vec<String>>>,
}

impl ScriptedDialogService {
    /// Queues the answer for the next confirmation.
    pub fn push_confirm(&self, answer: bool) {
        self.confirms.borrow_mut().push_back(answer);
    }

    /// Queues the answer for the next prompt.
    pub fn push_prompt(&self, answer: Option<&str>) {
        self.prompts
            .borrow_mut()
            .push_back(answer.map(str::to_string));
    }

    /// Returns every message shown so far.
    pub fn asked(&self) -> Vec<String> {
        self.asked.borrow().clone()
    }
}

impl DialogService for ScriptedDialogService {
    fn confirm<'a>(&'a self, message: &'a str) -> DialogFuture<'a, bool> {
        Box::pin(async move {
            self.asked.borrow_mut().push(message.to_string());
            self.confirms.borrow_mut().pop_front().unwrap_or(false)
        })
    }

    fn prompt<'a>(&'a self, message: &'a str) -> DialogFuture<'a, Option<String>> {
        Box::pin(async move {
            self.asked.borrow_mut().push(message.to_string());
            self.prompts.borrow_mut().pop_front().flatten()
        })
    }
}
