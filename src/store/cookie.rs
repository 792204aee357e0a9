use rocket::http::{Cookie, CookieJar, SameSite};

use super::KeyValueStore;

/// Stores entries as permanent cookies in the visitor's browser, so counts
/// stay on the device and survive across sessions.
pub struct CookieStore<'a, 'r> {
    jar: &'a CookieJar<'r>,
}

impl<'a, 'r> CookieStore<'a, 'r> {
    pub fn new(jar: &'a CookieJar<'r>) -> Self {
        CookieStore { jar }
    }
}

impl KeyValueStore for CookieStore<'_, '_> {
    fn get(&self, key: &str) -> Option<String> {
        // get_pending observes cookies added earlier in this request.
        self.jar.get_pending(key).map(|c| c.value().to_string())
    }

    fn set(&self, key: &str, value: &str) {
        let cookie = Cookie::build((key.to_string(), value.to_string()))
            .path("/")
            .same_site(SameSite::Lax)
            .permanent();
        self.jar.add(cookie);
    }
}
