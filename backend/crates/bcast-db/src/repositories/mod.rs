pub mod recipient_repository;
