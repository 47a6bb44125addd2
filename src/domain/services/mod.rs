pub mod invitation_service;
pub mod wedding_presenter;
