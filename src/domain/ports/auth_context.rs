/// Source of the bearer token attached to backend calls.
pub trait AuthContext: Send + Sync {
    fn get_token(&self) -> Option<String>;
}

/// Context for anonymous calls from the public website.
#[derive(Debug, Clone, Copy, Default)]
pub struct Anonymous;

impl AuthContext for Anonymous {
    fn get_token(&self) -> Option<String> {
        None
    }
}
