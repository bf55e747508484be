pub mod errors;
pub mod fields;
pub mod form;

pub use errors::PrawncastError;
pub use fields::FieldId;
pub use form::{ FieldSet, FormState, RequestStatus };
