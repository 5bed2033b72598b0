//! Shared test utilities for trellis-db unit tests.

#[cfg(test)]
pub(crate) mod helpers {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use trellis_core::identity::{CurrentUser, IdentityResolver};

    use crate::TrellisDb;

    /// Fresh in-memory database with migrations applied.
    pub async fn test_db() -> TrellisDb {
        TrellisDb::open_local(":memory:").await.unwrap()
    }

    pub fn sample_user() -> CurrentUser {
        CurrentUser {
            id: "user_ada".into(),
            image_url: "https://img.clerk.com/ada".into(),
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
        }
    }

    /// What the fake identity provider answers.
    pub enum Outcome {
        User(CurrentUser),
        Anonymous,
        Failing,
    }

    /// Identity resolver with a canned answer that counts its calls.
    pub struct FakeResolver {
        outcome: Outcome,
        calls: AtomicUsize,
    }

    impl FakeResolver {
        pub const fn new(outcome: Outcome) -> Self {
            Self {
                outcome,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn signed_in() -> Self {
            Self::new(Outcome::User(sample_user()))
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl IdentityResolver for &FakeResolver {
        type Error = std::io::Error;

        async fn current_user(&self) -> Result<Option<CurrentUser>, std::io::Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Outcome::User(user) => Ok(Some(user.clone())),
                Outcome::Anonymous => Ok(None),
                Outcome::Failing => Err(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "identity provider unreachable",
                )),
            }
        }
    }

    /// Formatted tracing output captured for the current thread.
    #[derive(Clone, Default)]
    pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        /// Route this thread's events into the buffer until the guard drops.
        pub fn install(&self) -> tracing::subscriber::DefaultGuard {
            let writer = self.clone();
            let subscriber = tracing_subscriber::fmt()
                .with_max_level(tracing::Level::DEBUG)
                .with_ansi(false)
                .with_writer(move || writer.clone())
                .finish();
            tracing::subscriber::set_default(subscriber)
        }

        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
