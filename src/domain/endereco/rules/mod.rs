pub mod avatar_must_be_image;
pub mod bairro_must_be_valid;
pub mod cep_must_be_valid;
pub mod localidade_must_be_valid;
pub mod numero_must_be_valid;
pub mod rua_must_be_valid;

pub use avatar_must_be_image::AvatarMustBeImage;
pub use bairro_must_be_valid::BairroMustBeValid;
pub use cep_must_be_valid::CepMustBeValid;
pub use localidade_must_be_valid::LocalidadeMustBeValid;
pub use numero_must_be_valid::NumeroMustBeValid;
pub use rua_must_be_valid::RuaMustBeValid;
