use serde::Serialize;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

const SEPARATOR: char = '_';

/// Process-unique handle of a component instance.
///
/// Two components with the same name (e.g. the two `l` sites of `Lig(l,l)`)
/// stay distinguishable through this id when bonds reference them later.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ComponentId(u64);

impl ComponentId {
    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic source of [`ComponentId`]s.
///
/// Allocation takes `&self`, so one allocator may be shared between
/// translations running on different threads without ever handing out the
/// same id twice. The counter is 64 bits wide and is not expected to wrap.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts counting at `first` instead of zero.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    pub fn allocate(&self) -> ComponentId {
        ComponentId(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// Number of ids handed out so far (for an allocator started at zero).
    pub fn issued(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

/// A source identifier split into its nested scope segments.
///
/// BioNetGen XML ids embed their owner: `S4_M2_C1` is component `C1` of
/// molecule `S4_M2`, which belongs to species `S4`. The translator only ever
/// needs the owner of an id, which is [`ScopePath::parent`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScopePath {
    segments: Vec<String>,
}

impl ScopePath {
    pub fn parse(id: &str) -> Self {
        Self {
            segments: id.split(SEPARATOR).map(str::to_owned).collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Drops the trailing `_<suffix>` segment. An id without a separator has
    /// no enclosing scope.
    pub fn parent(&self) -> Option<ScopePath> {
        if self.segments.len() < 2 {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    pub fn to_id(&self) -> String {
        self.segments.join("_")
    }
}

impl fmt::Display for ScopePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_id())
    }
}

/// Shorthand for `ScopePath::parse(id).parent()` rendered back to an id.
pub fn owner_id(id: &str) -> Option<String> {
    ScopePath::parse(id).parent().map(|p| p.to_id())
}
