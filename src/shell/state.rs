use crate::modules::users::adapters::outbound::users_in_memory::InMemoryUsers;
use crate::modules::users::use_cases::user_service::UserService;
use crate::shared::config::settings::Settings;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub users: Arc<UserService<InMemoryUsers>>,
}

impl AppState {
    pub fn in_memory(settings: Arc<Settings>) -> Self {
        Self::with_repository(settings, Arc::new(InMemoryUsers::new()))
    }

    pub fn with_repository(settings: Arc<Settings>, repository: Arc<InMemoryUsers>) -> Self {
        Self {
            settings,
            users: Arc::new(UserService::new(repository)),
        }
    }
}
