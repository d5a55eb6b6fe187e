use std::sync::LazyLock;

use enum_assoc::Assoc;
use indexmap::IndexMap;

use crate::assets::AppIconKind;

/// Routes to the assistance tools, one per feature page.
///
/// The directory page itself has no route; views represent it as the
/// absence of one.
#[derive(Assoc, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[func(pub fn path(&self) -> &'static str)]
pub enum Route {
    /// Reading speed and comprehension assessment.
    #[assoc(path = "/reading-test")]
    ReadingTest,
    /// Text and background color comfort testing.
    #[assoc(path = "/contrast-test")]
    ContrastTest,
    /// Speech-to-text writing practice.
    #[assoc(path = "/dictation-test")]
    DictationTest,
    /// Spelling and grammar correction for notes.
    #[assoc(path = "/proofreading")]
    Proofreading,
    /// Text file import with accessible formatting.
    #[assoc(path = "/open-file")]
    OpenFile,
}

impl Route {
    /// Parses a route from its path. Unknown paths yield `None`.
    pub fn from_path(path: &str) -> Option<Route> {
        FEATURES
            .iter()
            .map(|feature| feature.route)
            .find(|route| route.path() == path)
    }

    /// The directory entry behind this route.
    pub fn descriptor(&self) -> &'static FeatureDescriptor {
        REGISTRY[self]
    }
}

/// Static description of one assistance tool: where it lives, how the
/// directory presents it, and which icon marks it.
pub struct FeatureDescriptor {
    pub route: Route,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: AppIconKind,
}

/// Every feature in directory order. The order is part of the page design
/// and is preserved wherever features are listed.
pub static FEATURES: [FeatureDescriptor; 5] = [
    FeatureDescriptor {
        route: Route::ReadingTest,
        title: "Reading Tests",
        description: "Assess reading speed and comprehension with AI-powered analytics",
        icon: AppIconKind::FileText,
    },
    FeatureDescriptor {
        route: Route::ContrastTest,
        title: "Contrast Test",
        description: "Find the most comfortable text and background color combinations",
        icon: AppIconKind::Eye,
    },
    FeatureDescriptor {
        route: Route::DictationTest,
        title: "Dictation Test",
        description: "Practice writing through speech-to-text with instant feedback",
        icon: AppIconKind::Headphones,
    },
    FeatureDescriptor {
        route: Route::Proofreading,
        title: "Notes Proofreading",
        description: "AI-powered correction for spelling and grammar",
        icon: AppIconKind::FileEdit,
    },
    FeatureDescriptor {
        route: Route::OpenFile,
        title: "Open Text File",
        description: "Import and analyze text files with dyslexia-friendly formatting",
        icon: AppIconKind::FolderOpen,
    },
];

static REGISTRY: LazyLock<IndexMap<Route, &'static FeatureDescriptor>> = LazyLock::new(|| {
    FEATURES
        .iter()
        .map(|feature| (feature.route, feature))
        .collect()
});
