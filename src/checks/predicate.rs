//! Declarative predicates evaluated against a [`RepoProbe`].
use std::{future::Future, pin::Pin};

use crate::lib::fs::RepoProbe;

/// Boxed future returned by [`Predicate::evaluate`]; boxing allows the combinators to recurse.
pub type PredicateFuture<'a> = Pin<Box<dyn Future<Output = bool> + Send + 'a>>;

/// Condition a checklist item asserts about the repository.
///
/// Paths are relative to the audit root. A trailing `/` only matches directories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    /// The path exists (file or directory).
    Exists(&'static str),
    /// The file is readable as text and contains every needle.
    ContainsAll(&'static str, &'static [&'static str]),
    /// The file is readable as text and contains at least one needle.
    ContainsAny(&'static str, &'static [&'static str]),
    /// At least one alternative holds; evaluated in order, stopping at the first match.
    AnyOf(&'static [Predicate]),
    /// Every alternative holds; evaluated in order, stopping at the first miss.
    AllOf(&'static [Predicate]),
}

impl Predicate {
    /// Evaluate the predicate. Never fails: unreadable paths count as `false`.
    pub fn evaluate<'a, P>(&'a self, probe: &'a P) -> PredicateFuture<'a>
    where
        P: RepoProbe + Sync,
    {
        Box::pin(async move {
            match *self {
                Predicate::Exists(path) => probe.exists(path).await,
                Predicate::ContainsAll(path, needles) => probe
                    .read_text(path)
                    .await
                    .is_some_and(|content| needles.iter().all(|needle| content.contains(*needle))),
                Predicate::ContainsAny(path, needles) => probe
                    .read_text(path)
                    .await
                    .is_some_and(|content| needles.iter().any(|needle| content.contains(*needle))),
                Predicate::AnyOf(alternatives) => {
                    for alternative in alternatives {
                        if alternative.evaluate(probe).await {
                            return true;
                        }
                    }
                    false
                }
                Predicate::AllOf(requirements) => {
                    for requirement in requirements {
                        if !requirement.evaluate(probe).await {
                            return false;
                        }
                    }
                    true
                }
            }
        })
    }
}
