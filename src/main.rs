#[macro_use]
extern crate rocket;

use std::process;

use rocket::fs::FileServer;
use rocket::response::content::RawHtml;

mod boot;
mod catalog;
mod chrome;
mod config;
mod detail;
mod filter;
mod layout;
mod listing;
mod models;
mod pager;
mod query;
mod render;
mod routes;
mod site;
mod store;
mod view_model;
mod views;
mod widgets;


use config::SiteConfig;
use site::Site;

#[catch(404)]
fn not_found() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>404</h1><p>找不到這個頁面</p><a href='/'>← 回到首頁</a></body></html>".to_string())
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>伺服器發生錯誤</p><a href='/'>← 回到首頁</a></body></html>".to_string())
}

#[launch]
fn rocket() -> _ {
    env_logger::init();

    let config = SiteConfig::load();

    // Boot check — verify directories, catalog and layouts
    boot::run(&config);

    let static_dir = config.static_dir.clone();
    let site = match Site::load(config) {
        Ok(site) => site,
        Err(e) => {
            log::error!("Failed to load catalog: {}", e);
            process::exit(1);
        }
    };

    rocket::build()
        .manage(site)
        .mount("/static", FileServer::from(static_dir))
        .mount("/", routes::public::routes())
        .register("/", catchers![not_found, server_error])
}
