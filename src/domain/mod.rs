pub mod endereco;
