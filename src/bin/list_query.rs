//! Runs one admin list query against JSON snapshots and prints the page.
//!
//! Usage: `list_query <screen> [query-string]`, for example
//! `list_query products 'q=lamp&sort=price&dir=desc&page=2'`.

use std::env;

use dotenvy::dotenv;

use pushkind_shop::dto::list::ListParams;
use pushkind_shop::forms::list::ListQueryForm;
use pushkind_shop::models::config::AppConfig;
use pushkind_shop::repository::JsonDirRepository;
use pushkind_shop::services::list::{find_screen, load_list_page};

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let mut args = env::args().skip(1);
    let Some(screen_name) = args.next() else {
        eprintln!("usage: list_query <screen> [query-string]");
        std::process::exit(2);
    };
    let query_string = args.next().unwrap_or_default();

    // Select config profile (defaults to `local`).
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

    let app_config = match AppConfig::load(&app_env) {
        Ok(app_config) => app_config,
        Err(err) => {
            log::error!("Error loading app config: {}", err);
            std::process::exit(1);
        }
    };

    let screens = match app_config.screens() {
        Ok(screens) => screens,
        Err(err) => {
            log::error!("Invalid screen definitions: {}", err);
            std::process::exit(1);
        }
    };

    let screen = match find_screen(&screens, &screen_name) {
        Ok(screen) => screen,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    let params = match ListQueryForm::parse(&query_string).and_then(ListParams::try_from) {
        Ok(params) => params,
        Err(err) => {
            log::error!("Invalid query string: {}", err);
            std::process::exit(1);
        }
    };

    let repo = JsonDirRepository::new(&app_config.data_dir);

    let data = match load_list_page(&repo, screen, params, app_config.window_delta) {
        Ok(data) => data,
        Err(err) => {
            log::error!("Failed to load {}: {}", screen.name, err);
            std::process::exit(1);
        }
    };

    log::info!(
        "Screen {}: page {} of {}, {} matching records",
        data.screen,
        data.list.page,
        data.list.total_pages,
        data.list.total_items
    );

    match serde_json::to_string_pretty(&data) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            log::error!("Failed to serialize page: {}", err);
            std::process::exit(1);
        }
    }
}
