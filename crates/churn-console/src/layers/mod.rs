pub(crate) mod form;
pub(crate) mod service;
pub(crate) mod ui;
