// Application layer - Use cases and collaborator boundaries
pub mod chart_builder;
pub mod chart_service;
pub mod trend_repository;
