mod enrichment;
mod route_provider;

pub use {
    enrichment::enrich_path,
    route_provider::{RouteAlternative, RouteProvider},
};
