//! Reorderable editor sections.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Title,
    Image,
    Content,
}

impl Section {
    /// Initial order of the editor panel.
    pub const DEFAULT_ORDER: [Section; 3] = [Section::Title, Section::Image, Section::Content];

    pub fn id(self) -> &'static str {
        match self {
            Section::Title => "title",
            Section::Image => "image",
            Section::Content => "content",
        }
    }

    /// Capitalized heading shown above the section.
    pub fn heading(self) -> &'static str {
        match self {
            Section::Title => "Title",
            Section::Image => "Image",
            Section::Content => "Content",
        }
    }
}

/// Outcome of a drag gesture. `destination` is `None` when dropped outside
/// the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragResult {
    pub source: usize,
    pub destination: Option<usize>,
}

/// Move the item at `source` to `destination`, shifting the others.
///
/// Out-of-range sources are ignored; destinations past the end append.
pub fn reorder<T>(items: &mut Vec<T>, source: usize, destination: usize) {
    if source >= items.len() {
        return;
    }
    let item = items.remove(source);
    let destination = destination.min(items.len());
    items.insert(destination, item);
}

/// Apply a drag gesture. Returns whether the order changed.
pub fn apply_drag<T>(items: &mut Vec<T>, drag: DragResult) -> bool {
    match drag.destination {
        Some(destination) if drag.source < items.len() && drag.source != destination => {
            reorder(items, drag.source, destination);
            true
        }
        _ => false,
    }
}
