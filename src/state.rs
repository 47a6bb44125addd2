use std::sync::Arc;
use crate::domain::ports::{FelicitationRepository, GuestRepository, WeddingRepository};
use crate::domain::services::invitation_service::InvitationService;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub guest_repo: Arc<dyn GuestRepository>,
    pub felicitation_repo: Arc<dyn FelicitationRepository>,
    pub wedding_repo: Arc<dyn WeddingRepository>,
    pub invitation_service: Arc<InvitationService>,
}

impl AppState {
    pub fn new(
        config: Config,
        guest_repo: Arc<dyn GuestRepository>,
        felicitation_repo: Arc<dyn FelicitationRepository>,
        wedding_repo: Arc<dyn WeddingRepository>,
    ) -> Self {
        let invitation_service = Arc::new(InvitationService::new(guest_repo.clone(), felicitation_repo.clone()));

        Self {
            config,
            guest_repo,
            felicitation_repo,
            wedding_repo,
            invitation_service,
        }
    }
}
