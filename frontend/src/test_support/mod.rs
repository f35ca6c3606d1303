#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{ApiClient, Assignment, LearningOutcome, Module};
    use crate::state::auth::AuthState;
    use crate::state::session::{Session, SessionStore};
    use leptos::*;

    pub fn session(user_type: &str) -> Session {
        Session {
            username: "kasun".into(),
            user_type: user_type.into(),
            token: "test-token".into(),
            email: Some("kasun@eng.ruh.ac.lk".into()),
        }
    }

    /// Provides an in-memory session store, an API client bound to it and the
    /// auth signal. `None` leaves the visitor signed out.
    pub fn provide_session(
        user_type: Option<&str>,
    ) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let store = SessionStore::in_memory();
        let session = user_type.map(session);
        if let Some(session) = &session {
            store.save(session).expect("memory store accepts session");
        }
        provide_context(store.clone());
        provide_context(ApiClient::new_with_base_url("http://unused.test/api").with_session_store(store));
        let (auth, set_auth) = create_signal(AuthState { session });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }

    pub fn module(id: &str, name: &str) -> Module {
        Module {
            module_id: id.into(),
            module_name: name.into(),
            los_pos_names: Vec::new(),
        }
    }

    pub fn outcome(id: &str, lo_id: &str, description: &str) -> LearningOutcome {
        LearningOutcome {
            id: id.into(),
            lo_id: lo_id.into(),
            lo_description: description.into(),
            name: None,
            module_id: Some("SE101".into()),
            module_code: None,
            assignments: Vec::new(),
            created_by: None,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn assignment(id: &str, year: &str, batch: &str) -> Assignment {
        Assignment {
            assignment_id: id.into(),
            assignment_name: None,
            academic_year: Some(year.into()),
            batch: Some(batch.into()),
            file_name: None,
        }
    }
}
