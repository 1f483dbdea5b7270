// src/server/mod.rs
use crate::api::*;
use crate::config::Config;
use crate::outreach::OutreachComposer;
use crate::page_source::ProfileScanner;
use rocket::{routes, Build, Rocket};

pub mod routes;

pub struct ServerState {
    pub config: Config,
    pub scanner: ProfileScanner,
    pub composer: OutreachComposer,
}

pub fn build_rocket(config: Config) -> Rocket<Build> {
    let figment = rocket::Config::figment().merge(("port", config.server.port));

    let state = ServerState {
        scanner: ProfileScanner::new(&config.scan),
        composer: OutreachComposer::new(config.outreach.clone()),
        config,
    };

    rocket::custom(figment).manage(state).mount(
        "/api",
        routes![
            // Health and info endpoints
            routes::health::health_check,
            routes::health::index,
            // Discovery endpoints
            scan_profile,
            compose_outreach,
        ],
    )
}
