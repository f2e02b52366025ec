//! One source's worth of partially-specified settings.
//!
//! The loader stacks layers (profile, environment, explicit overrides);
//! a later layer wins wherever it sets a field.

use secrecy::SecretString;
use std::time::Duration;

use crate::types::ProfileConfig;

#[derive(Debug, Default, Clone)]
pub(crate) struct Layer {
    pub server: Option<String>,
    pub username: Option<String>,
    pub password: Option<SecretString>,
    pub skip_verify: Option<bool>,
    pub timeout: Option<Duration>,
    pub app_name: Option<String>,
    pub app_vendor: Option<String>,
    pub app_version: Option<String>,
}

impl Layer {
    /// Overlay `top` onto `self`; unset fields in `top` keep the current value.
    pub fn merge(&mut self, top: Layer) {
        fn over<T>(slot: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *slot = value;
            }
        }
        over(&mut self.server, top.server);
        over(&mut self.username, top.username);
        over(&mut self.password, top.password);
        over(&mut self.skip_verify, top.skip_verify);
        over(&mut self.timeout, top.timeout);
        over(&mut self.app_name, top.app_name);
        over(&mut self.app_vendor, top.app_vendor);
        over(&mut self.app_version, top.app_version);
    }

    /// Server and both credentials are present.
    pub fn is_complete(&self) -> bool {
        self.server.is_some() && self.username.is_some() && self.password.is_some()
    }
}

impl From<&ProfileConfig> for Layer {
    fn from(profile: &ProfileConfig) -> Self {
        Self {
            server: profile.server.clone(),
            username: profile.username.clone(),
            password: profile.password.clone(),
            skip_verify: profile.skip_verify,
            timeout: profile.timeout_seconds.map(Duration::from_secs),
            app_name: profile.app_name.clone(),
            app_vendor: profile.app_vendor.clone(),
            app_version: profile.app_version.clone(),
        }
    }
}
