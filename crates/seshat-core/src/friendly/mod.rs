//! Human-readable aliases for machine-generated session ids.
//!
//! Machine ids are opaque and unwieldy to share; this module produces
//! candidate aliases of the form `adjective-animal` and normalizes them to
//! exactly two hyphen-joined tokens. Candidate generation is a capability
//! injected into the session store, so tests can script the sequence of
//! candidates and exercise the collision paths deterministically.

mod words;

use rand::Rng;

/// A source of candidate aliases.
///
/// A candidate is not guaranteed to be unclaimed; the session store
/// resolves claim races against the storage backend. Implementations must
/// be safe to share across tasks.
pub trait FriendlyIdSource: Send + Sync {
    /// Produces one candidate alias.
    fn generate(&self) -> String;
}

/// Default alias source: a uniformly random adjective-animal pair.
///
/// The embedded vocabulary yields on the order of 10^5 distinct pairs, so
/// collisions stay rare at practical session volumes.
#[derive(Debug, Default, Clone, Copy)]
pub struct WordPairGenerator;

impl WordPairGenerator {
    /// Creates a new generator.
    pub fn new() -> Self {
        Self
    }
}

impl FriendlyIdSource for WordPairGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::thread_rng();
        let adjective = words::ADJECTIVES[rng.gen_range(0..words::ADJECTIVES.len())];
        let animal = words::ANIMALS[rng.gen_range(0..words::ANIMALS.len())];
        format!("{adjective}-{animal}")
    }
}

/// Normalizes an alias to exactly two hyphen-joined lowercase tokens.
///
/// Vocabulary entries may themselves contain hyphens; every segment except
/// the last is merged into a single leading token so the alias always reads
/// as `token-token`:
///
/// ```
/// use seshat_core::friendly::canonicalize;
///
/// assert_eq!(canonicalize("Spanish-albatross"), "spanish-albatross");
/// assert_eq!(canonicalize("well-to-do-bug"), "welltodo-bug");
/// ```
pub fn canonicalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let segments: Vec<&str> = lowered.split('-').collect();
    if segments.len() < 3 {
        return lowered;
    }
    let (head, last) = segments.split_at(segments.len() - 1);
    format!("{}-{}", head.concat(), last[0])
}
