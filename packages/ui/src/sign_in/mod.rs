//! The sign-in form: state store, submission workflow, and component.

mod component;
mod state;

pub use component::SignInForm;
pub use state::{
    persist_login, FieldErrors, FormAction, FormState, SignInStore, SubmitOutcome,
    SubmitRejected, TOKEN_KEY,
};
