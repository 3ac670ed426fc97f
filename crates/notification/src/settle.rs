use std::future::Future;

use futures::future::join_all;

/// How the individual results of a fan-out are folded into one verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// At least one task succeeded.
    Any,
    /// There was at least one task and every task succeeded.
    All,
}

impl Policy {
    pub fn evaluate(&self, results: impl IntoIterator<Item = bool>) -> bool {
        let mut results = results.into_iter().peekable();

        match self {
            Policy::Any => results.any(|ok| ok),
            Policy::All => results.peek().is_some() && results.all(|ok| ok),
        }
    }
}

#[derive(Debug)]
pub struct Settled<T> {
    /// One result per task, in the order the tasks were given.
    pub results: Vec<T>,
    pub satisfied: bool,
}

/// Polls every task concurrently and waits for all of them to settle, never
/// short-circuiting on the first failure or success.
pub async fn settle_all<I, F, T>(
    tasks: I,
    policy: Policy,
    succeeded: impl Fn(&T) -> bool,
) -> Settled<T>
where
    I: IntoIterator<Item = F>,
    F: Future<Output = T>,
{
    let results = join_all(tasks).await;
    let satisfied = policy.evaluate(results.iter().map(succeeded));

    Settled { results, satisfied }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    #[test]
    fn policies_on_empty_input() {
        assert!(!Policy::Any.evaluate([]));
        assert!(!Policy::All.evaluate([]));
    }

    #[test]
    fn policies_on_mixed_input() {
        assert!(Policy::Any.evaluate([false, true]));
        assert!(!Policy::All.evaluate([false, true]));
        assert!(Policy::All.evaluate([true, true]));
    }

    #[tokio::test]
    async fn keeps_order_and_runs_concurrently() {
        let started = Instant::now();
        let tasks = [(30, true), (10, false), (20, true)].map(|(ms, ok)| async move {
            tokio::time::sleep(Duration::from_millis(ms)).await;
            (ms, ok)
        });

        let settled = settle_all(tasks, Policy::Any, |r: &(u64, bool)| r.1).await;

        assert_eq!(settled.results, vec![(30, true), (10, false), (20, true)]);
        assert!(settled.satisfied);
        assert!(started.elapsed() < Duration::from_millis(55));
    }
}
