use std::rc::Rc;

use crate::{
    router,
    utils::storage::{BrowserStorage, MemoryStorage, StorageBackend},
};

const TOKEN_KEY: &str = "token";
const USERNAME_KEY: &str = "username";
const USER_TYPE_KEY: &str = "userType";
const EMAIL_KEY: &str = "email";
const CURRENT_LO_NUMBER_KEY: &str = "currentLoNumber";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    SuperAdmin,
    Admin,
    Lecturer,
}

impl Role {
    /// Parses the backend `userType`, which arrives in several spellings.
    pub fn parse(raw: &str) -> Option<Role> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "superadmin" | "super admin" | "super-admin" | "super_admin" => Some(Role::SuperAdmin),
            "admin" => Some(Role::Admin),
            "lecture" | "lecturer" => Some(Role::Lecturer),
            _ => None,
        }
    }

    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::SuperAdmin => router::SUPER_ADMIN_DASHBOARD,
            Role::Admin => router::ADMIN_DASHBOARD,
            Role::Lecturer => router::LECTURER_DASHBOARD,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::Admin => "Admin",
            Role::Lecturer => "Lecturer",
        }
    }

    /// Value sent as `usertype` in auth requests.
    pub fn wire_value(self) -> &'static str {
        match self {
            Role::SuperAdmin => "SuperAdmin",
            Role::Admin => "Admin",
            Role::Lecturer => "Lecture",
        }
    }

    pub fn can_manage_modules(self) -> bool {
        matches!(self, Role::SuperAdmin | Role::Admin)
    }

    pub fn can_manage_outcomes(self) -> bool {
        self == Role::Lecturer
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub username: String,
    /// Raw `userType` as returned by the backend.
    pub user_type: String,
    pub token: String,
    pub email: Option<String>,
}

impl Session {
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.user_type)
    }

    pub fn dashboard_path(&self) -> &'static str {
        self.role()
            .map(Role::dashboard_path)
            .unwrap_or(router::HOME)
    }
}

/// Identity lives in persistent storage; the current LO number is tab scoped.
#[derive(Clone)]
pub struct SessionStore {
    persistent: Rc<dyn StorageBackend>,
    tab: Rc<dyn StorageBackend>,
}

impl SessionStore {
    pub fn new(persistent: Rc<dyn StorageBackend>, tab: Rc<dyn StorageBackend>) -> Self {
        Self { persistent, tab }
    }

    pub fn browser() -> Self {
        Self::new(
            Rc::new(BrowserStorage::local()),
            Rc::new(BrowserStorage::session()),
        )
    }

    pub fn in_memory() -> Self {
        Self::new(Rc::new(MemoryStorage::new()), Rc::new(MemoryStorage::new()))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn platform_default() -> Self {
        Self::browser()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn platform_default() -> Self {
        Self::in_memory()
    }

    pub fn load(&self) -> Option<Session> {
        let token = self.token()?;
        let username = self
            .persistent
            .get_item(USERNAME_KEY)
            .filter(|name| !name.trim().is_empty())?;
        Some(Session {
            username,
            user_type: self.persistent.get_item(USER_TYPE_KEY).unwrap_or_default(),
            token,
            email: self
                .persistent
                .get_item(EMAIL_KEY)
                .filter(|email| !email.is_empty()),
        })
    }

    pub fn save(&self, session: &Session) -> Result<(), String> {
        self.persistent.set_item(TOKEN_KEY, &session.token)?;
        self.persistent.set_item(USERNAME_KEY, &session.username)?;
        self.persistent.set_item(USER_TYPE_KEY, &session.user_type)?;
        match &session.email {
            Some(email) => self.persistent.set_item(EMAIL_KEY, email)?,
            None => self.persistent.remove_item(EMAIL_KEY),
        }
        log::info!("session stored for {}", session.username);
        Ok(())
    }

    pub fn clear(&self) {
        for key in [TOKEN_KEY, USERNAME_KEY, USER_TYPE_KEY, EMAIL_KEY] {
            self.persistent.remove_item(key);
        }
        self.tab.remove_item(CURRENT_LO_NUMBER_KEY);
        log::info!("session cleared");
    }

    pub fn token(&self) -> Option<String> {
        self.persistent
            .get_item(TOKEN_KEY)
            .filter(|token| !token.trim().is_empty())
    }

    pub fn set_current_lo_number(&self, lo_number: &str) {
        if let Err(err) = self.tab.set_item(CURRENT_LO_NUMBER_KEY, lo_number) {
            log::warn!("could not remember LO number: {}", err);
        }
    }

    pub fn current_lo_number(&self) -> Option<String> {
        self.tab
            .get_item(CURRENT_LO_NUMBER_KEY)
            .filter(|value| !value.is_empty())
    }
}
