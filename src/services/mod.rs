//! Business logic services

pub mod holidays;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub holidays: holidays::HolidaysService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            holidays: holidays::HolidaysService::new(std::sync::Arc::new(repository.holidays)),
        }
    }
}
