pub mod price_synthesis_service;
pub mod view_model_service;
