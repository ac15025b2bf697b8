use std::fmt;

/// Whether a dependency set is needed at runtime or only while building
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    Runtime,
    Development,
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Runtime => write!(f, "runtime"),
            Self::Development => write!(f, "development"),
        }
    }
}

/// A fixed list of packages installed with a single package manager call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencySet {
    pub kind: DependencyKind,
    pub packages: &'static [&'static str],
}

impl DependencySet {
    pub fn is_dev(&self) -> bool {
        self.kind == DependencyKind::Development
    }

    /// Manifest section the package manager records these packages under
    pub fn manifest_section(&self) -> &'static str {
        match self.kind {
            DependencyKind::Runtime => "dependencies",
            DependencyKind::Development => "devDependencies",
        }
    }
}

/// Banner, colour, prompt, spinner and polyfill libraries used by the template
pub const RUNTIME_DEPENDENCIES: DependencySet = DependencySet {
    kind: DependencyKind::Runtime,
    packages: &[
        "boxen",
        "chalk",
        "core-js",
        "figlet",
        "inquirer",
        "ora",
        "regenerator-runtime",
    ],
};

/// Babel toolchain used to compile the template
pub const DEV_DEPENDENCIES: DependencySet = DependencySet {
    kind: DependencyKind::Development,
    packages: &["@babel/cli", "@babel/core", "@babel/preset-env"],
};
