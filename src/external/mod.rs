pub mod price_provider;
