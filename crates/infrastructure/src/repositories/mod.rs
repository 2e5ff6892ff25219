pub mod job_registry_repository;
pub mod visit_repository;
