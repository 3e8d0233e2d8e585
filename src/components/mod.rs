//! UI Components
//!
//! Leptos components for the dog list view.

mod dog_list;
mod dog_table;
mod pagination_bar;
mod dog_form_fields;
mod create_dog_modal;
mod edit_dog_modal;
mod success_banner;

pub use dog_list::DogList;
pub use dog_table::DogTable;
pub use pagination_bar::PaginationBar;
pub use dog_form_fields::DogFormFields;
pub use create_dog_modal::CreateDogModal;
pub use edit_dog_modal::EditDogModal;
pub use success_banner::SuccessBanner;
