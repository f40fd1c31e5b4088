//! Product registration form
//!
//! [`FormStore`] holds the document; [`RegistrationSession`] applies seller
//! actions to it and builds the request body on submit.

mod combination_table;
mod error;
mod model;
mod option_editor;
mod payload;
mod session;
mod store;

pub use combination_table::{remove_combination, set_representative, update_combination};
pub use error::{FormError, FormResult};
pub use model::ProductForm;
pub use option_editor::{
    ItemChange, add_group, add_item, remove_group, remove_item, rename_group, update_item,
};
pub use payload::build_add_product_request;
pub use session::RegistrationSession;
pub use store::{FormChange, FormField, FormStore};
