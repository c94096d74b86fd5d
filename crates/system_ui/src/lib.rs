//! Shared UI primitive library for the drive interface.
//!
//! The crate owns reusable Leptos primitives and the stable `data-ui-*` DOM contract consumed by
//! the site stylesheet. Views should compose these primitives instead of emitting ad hoc control
//! markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    Button, ButtonSize, ButtonVariant, Cluster, DataTable, EmptyState, FieldVariant, FilePicker,
    Notice, NoticeTone, Pane, PaneHeader, ProgressBar, StatusBar, StatusBarItem, Text, TextField,
    TextRole, TextTone, ToolBar, TrailNav,
};
