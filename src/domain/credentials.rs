// Vendor account credentials
use std::fmt;

#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub site_id: String,
}

impl Credentials {
    pub fn new(username: String, password: String, site_id: String) -> Self {
        Self {
            username,
            password,
            site_id,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .field("site_id", &self.site_id)
            .finish()
    }
}
