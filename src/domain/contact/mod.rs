//! Contact domain - messages submitted through the contact form

mod entity;
mod repository;

pub use entity::{
    ClientInfo, Contact, ContactStatusUpdate, ContactSubmission, INITIAL_CONTACT_STATUS,
    NewContact,
};
pub use repository::ContactRepository;
