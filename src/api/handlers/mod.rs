pub mod admin;
pub mod felicitation;
pub mod guest;
pub mod health;
pub mod rsvp;
pub mod wedding;
