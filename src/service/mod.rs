pub mod ping_service;
