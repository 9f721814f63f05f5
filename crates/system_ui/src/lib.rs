//! Shared UI primitive library for the page tree.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM
//! contract consumed by the app CSS layers. Pages compose these primitives
//! instead of emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Badge, Button, ButtonSize, ButtonVariant, Card, Cluster, EmptyState, Heading, LayoutAlign,
    LayoutGap, LayoutJustify, LayoutPadding, Stack, SurfaceVariant, Text, TextRole, TextTone,
};

/// Convenience imports for application crates consuming the shared primitive set.
pub mod prelude {
    pub use crate::{
        Badge, Button, ButtonSize, ButtonVariant, Card, Cluster, EmptyState, Heading, LayoutAlign,
        LayoutGap, LayoutJustify, LayoutPadding, Stack, SurfaceVariant, Text, TextRole, TextTone,
    };
}
