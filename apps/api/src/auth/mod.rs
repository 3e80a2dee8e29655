// Auth gate: one optional current session, email-only login, signup validation,
// and the middleware that guards session-only routes.

pub mod handlers;
pub mod middleware;
pub mod service;
pub mod session;
