use yew::prelude::*;

use crate::session::SessionContext;

/// Current session. Panics outside of `SessionProvider`, which wraps the app.
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionProvider is missing")
}
