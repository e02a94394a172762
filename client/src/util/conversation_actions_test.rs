use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use futures::executor::block_on;

use super::*;
use crate::net::gateway::GatewayError;
use crate::net::types::{Message, Sender};
use crate::state::conversation::{LoadPhase, ScrollFollower};

// =============================================================
// Helpers
// =============================================================

fn msg(id: u64, from: Sender, text: &str) -> Message {
    Message { id, from, text: text.to_owned() }
}

/// Scripted gateway that records every call it receives.
#[derive(Default)]
struct FakeGateway {
    list: RefCell<Option<Result<Vec<Message>, GatewayError>>>,
    sends: RefCell<VecDeque<Result<Message, GatewayError>>>,
    list_calls: Cell<usize>,
    sent_bodies: RefCell<Vec<String>>,
}

impl FakeGateway {
    fn listing(result: Result<Vec<Message>, GatewayError>) -> Self {
        let gateway = Self::default();
        *gateway.list.borrow_mut() = Some(result);
        gateway
    }

    fn then_send(self, result: Result<Message, GatewayError>) -> Self {
        self.sends.borrow_mut().push_back(result);
        self
    }
}

impl MessageGateway for FakeGateway {
    async fn list_messages(&self) -> Result<Vec<Message>, GatewayError> {
        self.list_calls.set(self.list_calls.get() + 1);
        self.list.borrow_mut().take().unwrap_or(Ok(Vec::new()))
    }

    async fn send_message(&self, body: &str) -> Result<Message, GatewayError> {
        self.sent_bodies.borrow_mut().push(body.to_owned());
        self.sends
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(GatewayError::Status(500)))
    }
}

impl ConversationCell for RefCell<ConversationState> {
    fn try_apply<R>(&self, f: impl FnOnce(&mut ConversationState) -> R) -> Option<R> {
        self.try_borrow_mut().ok().map(|mut state| f(&mut state))
    }
}

fn loaded(gateway: &FakeGateway) -> RefCell<ConversationState> {
    let cell = RefCell::new(ConversationState::default());
    block_on(load_transcript(gateway, &cell));
    cell
}

// =============================================================
// load_transcript
// =============================================================

#[test]
fn load_installs_listed_messages() {
    let gateway = FakeGateway::listing(Ok(vec![msg(1, Sender::Agent, "hi")]));
    let cell = loaded(&gateway);

    let state = cell.borrow();
    assert_eq!(state.phase(), LoadPhase::Ready);
    assert_eq!(state.transcript().messages(), &[msg(1, Sender::Agent, "hi")]);
}

#[test]
fn load_failure_leaves_empty_ready_transcript() {
    let gateway = FakeGateway::listing(Err(GatewayError::Transport("offline".to_owned())));
    let cell = loaded(&gateway);

    let state = cell.borrow();
    assert_eq!(state.phase(), LoadPhase::Ready);
    assert!(state.transcript().is_empty());
}

#[test]
fn load_runs_only_once() {
    let gateway = FakeGateway::listing(Ok(vec![msg(1, Sender::Agent, "hi")]));
    let cell = loaded(&gateway);
    block_on(load_transcript(&gateway, &cell));

    assert_eq!(gateway.list_calls.get(), 1);
    assert_eq!(cell.borrow().transcript().len(), 1);
}

#[test]
fn load_skipped_after_teardown() {
    let gateway = FakeGateway::listing(Ok(vec![msg(1, Sender::Agent, "hi")]));
    let cell = RefCell::new(ConversationState::default());
    cell.borrow_mut().teardown();
    block_on(load_transcript(&gateway, &cell));

    assert_eq!(gateway.list_calls.get(), 0);
    assert!(cell.borrow().transcript().is_empty());
}

#[test]
fn load_of_one_message_scrolls_exactly_once() {
    let gateway = FakeGateway::listing(Ok(vec![msg(1, Sender::Agent, "hi")]));
    let cell = RefCell::new(ConversationState::default());
    let mut follower = ScrollFollower::default();
    let mut scrolls = 0;

    let mut render = |cell: &RefCell<ConversationState>| {
        if follower.observe(cell.borrow().transcript().len()) {
            scrolls += 1;
        }
    };

    render(&cell);
    block_on(load_transcript(&gateway, &cell));
    render(&cell);
    render(&cell);

    assert_eq!(scrolls, 1);
    assert_eq!(cell.borrow().transcript().messages(), &[msg(1, Sender::Agent, "hi")]);
}

#[test]
fn successful_send_scrolls_once_more() {
    let gateway = FakeGateway::listing(Ok(vec![msg(1, Sender::Agent, "hi")]))
        .then_send(Ok(msg(2, Sender::User, "hello")));
    let cell = loaded(&gateway);
    let mut follower = ScrollFollower::default();
    assert!(follower.observe(cell.borrow().transcript().len()));

    cell.borrow_mut().edit_draft("hello".to_owned());
    block_on(submit_draft(&gateway, &cell));

    assert!(follower.observe(cell.borrow().transcript().len()));
    assert!(!follower.observe(cell.borrow().transcript().len()));
}

// =============================================================
// submit_draft
// =============================================================

#[test]
fn submit_sends_trimmed_draft_and_appends_ack() {
    let gateway = FakeGateway::listing(Ok(vec![msg(1, Sender::Agent, "hi")]))
        .then_send(Ok(msg(2, Sender::User, "hello")));
    let cell = loaded(&gateway);
    cell.borrow_mut().edit_draft("  hello  ".to_owned());

    assert!(block_on(submit_draft(&gateway, &cell)));

    assert_eq!(*gateway.sent_bodies.borrow(), vec!["hello".to_owned()]);
    let state = cell.borrow();
    assert_eq!(state.transcript().len(), 2);
    assert_eq!(state.transcript().last(), Some(&msg(2, Sender::User, "hello")));
    assert_eq!(state.composer().draft(), "");
    assert!(!state.composer().is_typing());
}

#[test]
fn submit_uses_gateway_identity_not_local_one() {
    let gateway = FakeGateway::listing(Ok(vec![])).then_send(Ok(msg(42, Sender::User, "hello")));
    let cell = loaded(&gateway);
    cell.borrow_mut().edit_draft("hello".to_owned());
    block_on(submit_draft(&gateway, &cell));

    assert_eq!(cell.borrow().transcript().last().map(|m| m.id), Some(42));
}

#[test]
fn submit_blank_draft_makes_no_call() {
    let gateway = FakeGateway::listing(Ok(vec![]));
    let cell = loaded(&gateway);
    cell.borrow_mut().edit_draft(" \n\t ".to_owned());
    let before = cell.borrow().clone();

    assert!(!block_on(submit_draft(&gateway, &cell)));

    assert!(gateway.sent_bodies.borrow().is_empty());
    assert_eq!(*cell.borrow(), before);
}

#[test]
fn submit_failure_keeps_draft_and_transcript() {
    let gateway = FakeGateway::listing(Ok(vec![msg(1, Sender::Agent, "hi")]))
        .then_send(Err(GatewayError::Status(503)));
    let cell = loaded(&gateway);
    cell.borrow_mut().edit_draft("hello".to_owned());

    assert!(!block_on(submit_draft(&gateway, &cell)));

    let state = cell.borrow();
    assert_eq!(state.composer().draft(), "hello");
    assert_eq!(state.transcript().len(), 1);
    assert!(!state.composer().is_sending());
}

#[test]
fn manual_retry_after_failure_succeeds() {
    let gateway = FakeGateway::listing(Ok(vec![]))
        .then_send(Err(GatewayError::Status(503)))
        .then_send(Ok(msg(5, Sender::User, "hello")));
    let cell = loaded(&gateway);
    cell.borrow_mut().edit_draft("hello".to_owned());

    assert!(!block_on(submit_draft(&gateway, &cell)));
    assert!(block_on(submit_draft(&gateway, &cell)));

    assert_eq!(gateway.sent_bodies.borrow().len(), 2);
    assert_eq!(cell.borrow().transcript().len(), 1);
    assert_eq!(cell.borrow().composer().draft(), "");
}

#[test]
fn submit_before_load_makes_no_call() {
    let gateway = FakeGateway::default().then_send(Ok(msg(2, Sender::User, "hello")));
    let cell = RefCell::new(ConversationState::default());
    cell.borrow_mut().edit_draft("hello".to_owned());

    assert!(!block_on(submit_draft(&gateway, &cell)));
    assert!(gateway.sent_bodies.borrow().is_empty());
}
