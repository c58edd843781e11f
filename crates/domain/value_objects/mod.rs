pub mod brand;
pub mod cpf_cnpj;
pub mod enums;
pub mod instagram_profiles;
pub mod invites;
pub mod niches;
pub mod post_specs;
pub mod pricing;
pub mod whatsapp;
