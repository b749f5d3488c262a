// ==============================================
// BUFFER SCENARIOS (integration, wall clock)
// ==============================================
use std::thread;
use std::time::Duration;

use ttlbuffer::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Session {
    user: String,
    token: u64,
}

impl Session {
    fn new(user: &str, token: u64) -> Self {
        Self {
            user: user.to_string(),
            token,
        }
    }
}

impl Identifiable for Session {
    fn id(&self) -> String {
        self.user.clone()
    }
}

#[test]
fn test_capacity_eviction_drops_oldest() {
    let buffer: Buffer<Session> = Buffer::new(2, Duration::from_secs(3600));
    buffer.put(Session::new("A", 1)).unwrap();
    buffer.put(Session::new("B", 2)).unwrap();
    buffer.put(Session::new("C", 3)).unwrap();

    assert!(buffer.get("A").unwrap_err().is_not_found());
    assert_eq!(buffer.get("B").unwrap().token, 2);
    assert_eq!(buffer.get("C").unwrap().token, 3);
}

#[test]
fn test_entry_expires_on_wall_clock() {
    let buffer: Buffer<Session> = Buffer::new(2, Duration::from_secs(1));
    buffer.put(Session::new("A", 1)).unwrap();

    thread::sleep(Duration::from_secs(2));

    assert!(buffer.get("A").unwrap_err().is_not_found());
    assert!(buffer.is_empty());
}

#[test]
fn test_touch_keeps_entry_alive() {
    let buffer: Buffer<Session> = Buffer::new(1, Duration::from_secs(1));
    buffer.put(Session::new("A", 1)).unwrap();

    thread::sleep(Duration::from_millis(500));
    assert!(buffer.touch("A"));
    thread::sleep(Duration::from_millis(700));

    assert_eq!(buffer.get("A").unwrap().token, 1);
}

#[test]
fn test_update_never_inserts() {
    let buffer: Buffer<Session> = Buffer::with_defaults();

    assert!(!buffer.update(Session::new("ghost", 9)));
    assert!(!buffer.contains("ghost"));

    buffer.put(Session::new("ghost", 1)).unwrap();
    assert!(buffer.update(Session::new("ghost", 9)));
    assert_eq!(buffer.get("ghost").unwrap().token, 9);
}

#[test]
fn test_zero_capacity_buffer_rejects() {
    let buffer: Buffer<Session> = BufferBuilder::new().capacity(0).build();

    let err = buffer.put(Session::new("A", 1)).unwrap_err();
    assert!(err.is_rejected());
    assert!(buffer.is_empty());
}

#[test]
fn test_string_values_use_themselves_as_id() {
    let buffer: Buffer<String> = Buffer::new(3, Duration::from_secs(60));
    buffer.put("alpha".to_string()).unwrap();
    buffer.put("beta".to_string()).unwrap();

    assert_eq!(buffer.ids(), vec!["beta".to_string(), "alpha".to_string()]);
    assert_eq!(buffer.remove("alpha").as_deref(), Some(&"alpha".to_string()));
}
