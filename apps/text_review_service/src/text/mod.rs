pub mod memory_repository;
pub mod text_controller;
pub mod text_models;
pub mod text_repository;
pub mod text_service;
pub mod text_transformer;
