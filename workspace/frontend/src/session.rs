use std::cell::RefCell;
use std::rc::Rc;

use common::{AuthError, LoginResponse, Session, SessionStore};
use yew::prelude::*;

use crate::storage::LocalStorage;

/// Session shared with every page through a Yew context.
///
/// The store is the single owner of the session; `snapshot` mirrors it so
/// that components re-render when it changes.
#[derive(Clone)]
pub struct SessionContext {
    store: Rc<RefCell<SessionStore<LocalStorage>>>,
    snapshot: UseStateHandle<Session>,
}

impl PartialEq for SessionContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store) && *self.snapshot == *other.snapshot
    }
}

impl SessionContext {
    pub fn session(&self) -> &Session {
        &self.snapshot
    }

    pub fn token(&self) -> Option<String> {
        self.snapshot.token().map(str::to_string)
    }

    pub fn is_authenticated(&self) -> bool {
        self.snapshot.is_authenticated()
    }

    /// Adopt the backend's login response.
    pub fn complete_login(&self, response: LoginResponse) -> Result<(), AuthError> {
        let session = self.store.borrow_mut().apply_login(response)?.clone();
        self.snapshot.set(session);
        Ok(())
    }

    pub fn logout(&self) {
        let mut store = self.store.borrow_mut();
        store.logout();
        self.snapshot.set(store.session().clone());
    }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let store = use_mut_ref(|| {
        let mut store = SessionStore::new(LocalStorage);
        store.restore();
        store
    });
    let snapshot = {
        let store = store.clone();
        use_state(move || store.borrow().session().clone())
    };

    let context = SessionContext { store, snapshot };

    html! {
        <ContextProvider<SessionContext> context={context}>
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}
