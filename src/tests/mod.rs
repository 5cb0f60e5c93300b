mod http_tests;
mod user_tests;

use crate::core::services::RecipeBoxService;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub fn create_test_service() -> RecipeBoxService<InMemoryStorage> {
    RecipeBoxService::new(InMemoryStorage::new())
}
