pub(crate) mod health;
pub(crate) mod prices;
pub(crate) mod portfolios;
pub(crate) mod stock_lists;
pub(crate) mod friends;
pub(crate) mod dashboard;
pub(crate) mod views;
