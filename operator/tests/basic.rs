use operator::{spawn_operator, OperatorHandle};
use std::sync::mpsc;
use std::time::{Duration, Instant};

fn wait_settled<T>(handle: &mut OperatorHandle<T>) -> bool {
    let deadline = Instant::now() + Duration::from_secs(5);
    while Instant::now() < deadline {
        if handle.poll() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(5));
    }
    false
}

#[test]
fn spawned_operator_reports_result() {
    let mut handle = spawn_operator(|| Ok::<_, String>(42));
    assert!(handle.is_executing());
    assert!(wait_settled(&mut handle));
    assert!(!handle.is_executing());
    assert_eq!(handle.result(), Some(&42));
    assert!(handle.error().is_none());
}

#[test]
fn spawned_operator_reports_error() {
    let mut handle = spawn_operator(|| Err::<i32, _>("boom".to_string()));
    assert!(wait_settled(&mut handle));
    assert_eq!(handle.error(), Some("boom"));
    assert!(handle.result().is_none());
}

#[test]
fn poll_settles_exactly_once() {
    let mut handle = spawn_operator(|| Ok::<_, String>("done".to_string()));
    assert!(wait_settled(&mut handle));
    assert!(!handle.poll());
    assert!(!handle.poll());
    assert_eq!(handle.result().map(String::as_str), Some("done"));
}

#[test]
fn pending_handle_stays_executing_until_value_arrives() {
    let (tx, rx) = mpsc::channel();
    let mut handle = OperatorHandle::pending(rx);
    assert!(handle.is_executing());
    assert!(!handle.poll());
    tx.send(Ok(7)).unwrap();
    assert!(handle.poll());
    assert_eq!(handle.result(), Some(&7));
}

#[test]
fn dropped_worker_counts_as_failure() {
    let (tx, rx) = mpsc::channel::<Result<i32, String>>();
    let mut handle = OperatorHandle::pending(rx);
    drop(tx);
    assert!(handle.poll());
    assert!(!handle.is_executing());
    assert!(handle.error().unwrap().contains("disconnected"));
}

#[test]
fn settled_handle_never_executes() {
    let mut ok = OperatorHandle::settled(Ok::<_, String>(1));
    assert!(!ok.is_executing());
    assert!(!ok.poll());
    assert_eq!(ok.result(), Some(&1));

    let err = OperatorHandle::<i32>::settled(Err("no".to_string()));
    assert_eq!(err.error(), Some("no"));
}
