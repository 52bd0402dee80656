use chrono::{DateTime, Utc};
use std::sync::OnceLock;
use uuid::Uuid;

static INSTANCE: OnceLock<Singleton> = OnceLock::new();

/// The process-wide instance.
///
/// Constructed lazily by the first call to [`Singleton::instance`]. The
/// one-time initialization is guarded, so concurrent first callers still
/// observe a single construction and every call returns the same value.
#[derive(Debug)]
pub struct Singleton {
    id: Uuid,
    created_at: DateTime<Utc>,
}

impl Singleton {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }

    /// Returns the process-wide instance, creating it on first access.
    pub fn instance() -> &'static Singleton {
        INSTANCE.get_or_init(|| {
            let instance = Self::new();
            tracing::info!(id = %instance.id, "singleton instance created");
            instance
        })
    }

    /// Returns the identity assigned at construction.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the construction timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_instance_is_unique_across_calls() {
        let a = Singleton::instance();
        let b = Singleton::instance();

        assert!(std::ptr::eq(a, b));
        assert_eq!(a.id(), b.id());
        assert_eq!(a.created_at(), b.created_at());
    }

    #[test]
    fn test_instance_is_unique_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| Singleton::instance().id()))
            .collect();

        let ids: Vec<Uuid> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();

        assert!(ids.iter().all(|id| *id == Singleton::instance().id()));
    }
}
