use super::*;

fn shared() -> Rc<RefCell<SessionState>> {
    Rc::new(RefCell::new(SessionState::default()))
}

#[test]
fn refcell_store_mutate_returns_closure_value() {
    let store = shared();
    let len = store.mutate(|s| {
        s.repo_url = "https://github.com/a/b".to_owned();
        s.repo_url.len()
    });
    assert_eq!(len, Some(22));
    assert_eq!(store.borrow().repo_url, "https://github.com/a/b");
}

#[test]
fn busy_guard_raises_and_lowers_loading() {
    let store = shared();
    {
        let _guard = BusyGuard::acquire(&store, BusyFlag::Loading);
        assert!(store.borrow().loading);
        assert!(!store.borrow().awaiting_reply);
    }
    assert!(!store.borrow().loading);
}

#[test]
fn busy_guard_lowers_flag_on_early_return() {
    fn bail(store: &Rc<RefCell<SessionState>>) -> Option<()> {
        let _guard = BusyGuard::acquire(store, BusyFlag::AwaitingReply);
        let missing: Option<()> = None;
        missing?;
        Some(())
    }

    let store = shared();
    assert_eq!(bail(&store), None);
    assert!(!store.borrow().awaiting_reply);
}
