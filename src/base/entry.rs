//! Provider-supplied node data: entry kinds and the package entry record.

use std::sync::Arc;

use smol_str::SmolStr;

/// The kind of an entry supplied by the data provider.
///
/// The set is closed: child materialization recognizes `Package`, `Folder`,
/// `File` and `TypeRoot`; entries of any other kind found among a node's
/// children are skipped, never an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntryKind {
    /// A project container.
    Project,
    /// A classpath/dependency container.
    Container,
    /// A source or dependency root holding a package namespace.
    PackageRoot,
    /// A package (dot-separated identifier).
    Package,
    /// A plain folder inside a root.
    Folder,
    /// A plain (non-source) file.
    File,
    /// A type root (compilation unit or class file).
    TypeRoot,
}

impl EntryKind {
    /// Map a raw wire code to a kind. Unknown codes yield `None`; the
    /// provider boundary is where malformed entries are screened out.
    pub fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(Self::Project),
            2 => Some(Self::Container),
            3 => Some(Self::PackageRoot),
            4 => Some(Self::Package),
            5 => Some(Self::Folder),
            6 => Some(Self::File),
            7 => Some(Self::TypeRoot),
            _ => None,
        }
    }

    /// The wire code for this kind.
    pub fn as_raw(self) -> u8 {
        match self {
            Self::Project => 1,
            Self::Container => 2,
            Self::PackageRoot => 3,
            Self::Package => 4,
            Self::Folder => 5,
            Self::File => 6,
            Self::TypeRoot => 7,
        }
    }

    /// Whether entries of this kind may carry children.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            Self::Project | Self::Container | Self::PackageRoot | Self::Package | Self::Folder
        )
    }

    /// Rank used by the default leaf ordering: packages, then type roots,
    /// then folders, then files.
    pub(crate) fn sort_rank(self) -> u8 {
        match self {
            Self::Package => 0,
            Self::TypeRoot => 1,
            Self::Folder => 2,
            Self::File => 3,
            Self::Project | Self::Container | Self::PackageRoot => 4,
        }
    }

    /// Get a display label for this kind.
    pub fn display(self) -> &'static str {
        match self {
            Self::Project => "Project",
            Self::Container => "Container",
            Self::PackageRoot => "Package root",
            Self::Package => "Package",
            Self::Folder => "Folder",
            Self::File => "File",
            Self::TypeRoot => "Type root",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display())
    }
}

/// One entry in a package root, as supplied by the data provider.
///
/// Entries are immutable from this crate's perspective: nodes wrap them,
/// cache derived children, and never write back.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackageEntry {
    /// The identifier: a dot-separated name for packages, a plain name for
    /// files, folders and type roots.
    pub name: Arc<str>,
    /// Label override for display; falls back to `name`.
    pub display_name: Option<SmolStr>,
    /// What kind of entry this is.
    pub kind: EntryKind,
    /// Host navigation handle, when the provider supplies one.
    pub uri: Option<Arc<str>>,
    /// Child entries. `None` means not yet supplied; the provider is
    /// consulted lazily for container kinds.
    pub children: Option<Vec<PackageEntry>>,
}

impl PackageEntry {
    /// Create an entry with no children, label or uri.
    pub fn new(name: impl Into<Arc<str>>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            kind,
            uri: None,
            children: None,
        }
    }

    /// Attach embedded children.
    pub fn with_children(mut self, children: Vec<PackageEntry>) -> Self {
        self.children = Some(children);
        self
    }

    /// Attach a display label.
    pub fn with_display_name(mut self, label: impl Into<SmolStr>) -> Self {
        self.display_name = Some(label.into());
        self
    }

    /// Attach a navigation uri.
    pub fn with_uri(mut self, uri: impl Into<Arc<str>>) -> Self {
        self.uri = Some(uri.into());
        self
    }

    /// The label to present: the display name when set, the identifier
    /// otherwise.
    pub fn label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.name)
    }
}
