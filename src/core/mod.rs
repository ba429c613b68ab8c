pub mod processor;

pub use crate::domain::model::{
    AgeBracket, FormInput, PageState, ProfileCard, SanitizedInput, ValidationErrors,
};
pub use crate::utils::error::Result;
