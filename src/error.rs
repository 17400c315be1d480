//! Error type raised during construction and reconfiguration.

use std::fmt;

/// Errors surfaced synchronously to the caller of `new` or `update`.
///
/// These are integration errors, not transient faults: the failing
/// operation aborts with no partial state left behind, and there is no
/// retry path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    EmptyPrefix,
    ZeroItemsPerSlide,
    ZeroItemsPerScroll,
    ZeroAutoplaySpeed,
    /// An update tried to change the discovery prefix of a live instance.
    PrefixChanged { from: String, to: String },
    /// A structural element was not found during discovery.
    MissingElement { selector: String },
    /// The document rejected a call during discovery.
    Dom(String),
}

impl fmt::Display for CarouselError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarouselError::EmptyPrefix => write!(f, "prefix must not be empty"),
            CarouselError::ZeroItemsPerSlide => write!(f, "itemsPerSlide must be at least 1"),
            CarouselError::ZeroItemsPerScroll => write!(f, "itemsPerScroll must be at least 1"),
            CarouselError::ZeroAutoplaySpeed => {
                write!(f, "autoplaySpeed must be a positive number of milliseconds")
            }
            CarouselError::PrefixChanged { from, to } => write!(
                f,
                "prefix cannot change on a live carousel (was {:?}, got {:?})",
                from, to
            ),
            CarouselError::MissingElement { selector } => {
                write!(f, "required element {:?} not found in document", selector)
            }
            CarouselError::Dom(msg) => write!(f, "DOM error: {}", msg),
        }
    }
}

impl std::error::Error for CarouselError {}
