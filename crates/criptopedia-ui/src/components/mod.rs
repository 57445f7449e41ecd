pub(crate) mod atoms;
pub(crate) mod modal;
pub(crate) mod shell;
pub(crate) mod toast;
