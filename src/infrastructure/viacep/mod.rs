pub mod viacep_client;
