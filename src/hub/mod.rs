pub(crate) mod gate;
pub(crate) mod orchestrator;
pub(crate) mod output;
pub(crate) mod tokens;
