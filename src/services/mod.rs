pub mod documento_client;
pub mod solicitud_service;
pub mod usuario_client;
