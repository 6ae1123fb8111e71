// Authentication flows: demo login, self-registration for students and
// teachers, and the three-step password recovery.
// Registered accounts are kept in the store; sign-in resolves to the demo
// account of the chosen role.

pub mod handlers;
pub mod service;
