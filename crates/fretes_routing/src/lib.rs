pub mod as_the_crow_flies;
pub mod cache;
pub mod city;
pub mod city_catalog;
pub mod config;
pub mod graphhopper_api;
pub mod route_client;
pub mod route_provider;
