pub mod sqlite_guest_repo;
pub mod sqlite_felicitation_repo;
pub mod sqlite_wedding_repo;

pub mod postgres_guest_repo;
pub mod postgres_felicitation_repo;
pub mod postgres_wedding_repo;
