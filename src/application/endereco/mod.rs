pub mod form_service;
pub mod form_service_interface;
pub mod lookup_watcher;
