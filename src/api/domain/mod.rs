pub mod business_rule_interface;
pub mod endereco;
pub mod server;
