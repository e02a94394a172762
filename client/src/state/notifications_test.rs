use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

fn recorder() -> (Arc<Mutex<Vec<usize>>>, impl Fn(usize) + Send + Sync + 'static) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    (seen, move |n| sink.lock().unwrap().push(n))
}

#[test]
fn new_hub_has_nothing_unread() {
    let hub = NotificationHub::new();
    assert_eq!(hub.unread_count(), 0);
    assert!(hub.snapshot().is_empty());
}

#[test]
fn subscribe_delivers_current_count_immediately() {
    let hub = NotificationHub::new();
    hub.publish("Welcome", "Say hi to your agent");
    let (seen, listener) = recorder();
    hub.subscribe(listener);
    assert_eq!(*seen.lock().unwrap(), vec![1]);
}

#[test]
fn publish_and_mark_read_notify_subscribers() {
    let hub = NotificationHub::new();
    let (seen, listener) = recorder();
    hub.subscribe(listener);

    hub.publish("a", "");
    hub.publish("b", "");
    hub.mark_all_read();

    assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2, 0]);
    assert_eq!(hub.unread_count(), 0);
}

#[test]
fn mark_all_read_without_unread_is_silent() {
    let hub = NotificationHub::new();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    hub.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    hub.mark_all_read();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn unsubscribed_listener_stops_receiving() {
    let hub = NotificationHub::new();
    let (seen, listener) = recorder();
    let id = hub.subscribe(listener);

    assert!(hub.unsubscribe(id));
    hub.publish("late", "");

    assert_eq!(*seen.lock().unwrap(), vec![0]);
    assert_eq!(hub.subscriber_count(), 0);
    assert!(!hub.unsubscribe(id));
}

#[test]
fn clones_share_the_same_store() {
    let hub = NotificationHub::new();
    let other = hub.clone();
    other.publish("shared", "");
    assert_eq!(hub.unread_count(), 1);
}

#[test]
fn snapshot_lists_newest_first() {
    let hub = NotificationHub::new();
    hub.publish("first", "");
    hub.publish("second", "");
    let titles: Vec<String> = hub.snapshot().into_iter().map(|n| n.title).collect();
    assert_eq!(titles, vec!["second".to_owned(), "first".to_owned()]);
}

#[test]
fn listener_may_read_hub_during_notify() {
    let hub = NotificationHub::new();
    let reader = hub.clone();
    let seen = Arc::new(AtomicUsize::new(0));
    let sink = seen.clone();
    hub.subscribe(move |_| {
        sink.store(reader.snapshot().len(), Ordering::SeqCst);
    });
    hub.publish("x", "");
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}

#[test]
fn activity_is_announced_once_per_message_id() {
    let hub = NotificationHub::new();
    assert_eq!(hub.announced_through(), None);

    assert!(hub.publish_activity(3, "New messages", "2 messages from your agent").is_some());
    assert!(hub.publish_activity(3, "New messages", "2 messages from your agent").is_none());
    assert!(hub.publish_activity(2, "New messages", "1 message from your agent").is_none());

    assert_eq!(hub.unread_count(), 1);
    assert_eq!(hub.announced_through(), Some(3));
}

#[test]
fn newer_activity_raises_the_mark() {
    let hub = NotificationHub::new();
    let (seen, listener) = recorder();
    hub.subscribe(listener);

    hub.publish_activity(1, "New messages", "1 message from your agent");
    hub.publish_activity(1, "New messages", "1 message from your agent");
    hub.publish_activity(4, "New messages", "1 message from your agent");

    assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2]);
    assert_eq!(hub.announced_through(), Some(4));
}

#[test]
fn plain_publish_leaves_activity_mark_alone() {
    let hub = NotificationHub::new();
    hub.publish("Welcome", "");
    assert_eq!(hub.announced_through(), None);
}
