// Faculty request workflow: teachers submit leave / special-class requests,
// admins approve or reject them. Approved and rejected are terminal.

pub mod handlers;
pub mod workflow;
