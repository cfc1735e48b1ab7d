pub mod cep_lookup_interface;
pub mod form;
pub mod lookup;
pub mod rules;
