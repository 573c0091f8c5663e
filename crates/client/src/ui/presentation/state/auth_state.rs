//! Session state: who is signed in, and whether hydration has settled.

use dioxus::prelude::*;
use gotogether_domain::User;

/// Auth state provided at the app root.
///
/// `hydrating` starts true and flips once the persisted-token check
/// completes; gated views render a placeholder until then so a valid
/// session never flashes the sign-in screen.
#[derive(Clone, Copy)]
pub struct AuthState {
    pub user: Signal<Option<User>>,
    pub is_admin: Signal<bool>,
    pub hydrating: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            user: Signal::new(None),
            is_admin: Signal::new(false),
            hydrating: Signal::new(true),
        }
    }

    /// Record the outcome of the initial token check.
    pub fn finish_hydration(&mut self, user: Option<User>, is_admin: bool) {
        self.user.set(user);
        self.is_admin.set(is_admin);
        self.hydrating.set(false);
    }

    /// A rider signed in interactively (OTP, password, or sign-up).
    pub fn set_user(&mut self, user: User) {
        self.user.set(Some(user));
        self.hydrating.set(false);
    }

    /// An admin signed in via email/password.
    pub fn set_admin(&mut self) {
        self.is_admin.set(true);
        self.hydrating.set(false);
    }

    pub fn sign_out(&mut self) {
        self.user.set(None);
        self.is_admin.set(false);
    }

    /// Signed in as either role.
    pub fn is_signed_in(&self) -> bool {
        self.user.read().is_some() || *self.is_admin.read()
    }

    /// Id of the signed-in rider, if any. Used to decide whether the
    /// viewer is the driver of a trip.
    pub fn user_id(&self) -> Option<gotogether_domain::UserId> {
        self.user.read().as_ref().map(|u| u.id)
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}
