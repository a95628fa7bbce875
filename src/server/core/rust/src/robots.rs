/* src/server/core/rust/src/robots.rs */

pub const ROBOTS_PATH: &str = "/robots.txt";

pub const ROBOTS_CONTENT_TYPE: &str = "text/plain";

pub const ROBOTS_TXT: &str = "User-agent: *
Allow: /
Sitemap: https://saminvestcompany.uz/sitemap.xml";
