//! Running page controllers from the view
//!
//! Controllers are plain structs with async `&mut self` methods. A page
//! keeps one in an `RwSignal`; [`drive`] runs a call on a copy and, when it
//! finishes, writes back only the fields the call changed. Edits made to
//! the signal while the request was in flight stay in place.

use std::future::Future;
use std::pin::Pin;

use fleetease::reconcile::Reconcile;
use leptos::*;

pub type LocalFuture<'a, T = ()> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Run `action` against the current page state in the background
pub fn drive<P, F>(page: RwSignal<P>, action: F)
where
    P: Clone + Reconcile + 'static,
    F: for<'a> FnOnce(&'a mut P) -> LocalFuture<'a> + 'static,
{
    drive_then(page, action, |_| ());
}

/// Like [`drive`], then hand the action's result to `then` after the
/// page state is written back
pub fn drive_then<P, T, F, C>(page: RwSignal<P>, action: F, then: C)
where
    P: Clone + Reconcile + 'static,
    T: 'static,
    F: for<'a> FnOnce(&'a mut P) -> LocalFuture<'a, T> + 'static,
    C: FnOnce(T) + 'static,
{
    spawn_local(async move {
        let before = page.get_untracked();
        let mut current = before.clone();
        let outcome = action(&mut current).await;
        page.update(|live| live.reconcile(&before, current));
        then(outcome);
    });
}

/// Mark `busy` for a submit; false when one is already in flight
pub fn begin(busy: RwSignal<bool>) -> bool {
    if busy.get_untracked() {
        return false;
    }
    busy.set(true);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_submit_is_refused_until_done() {
        let runtime = create_runtime();
        let saving = create_rw_signal(false);

        assert!(begin(saving));
        assert!(!begin(saving));
        assert!(saving.get_untracked());

        saving.set(false);
        assert!(begin(saving));
        runtime.dispose();
    }
}
